//! cardrs CLI binary
//!
//! # Commands
//!
//! - `generate` - Resolve metadata and write a card for every model in a directory
//! - `settings` - Persist generator settings

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use cardrs::error::CardError;
use cardrs::metadata::{ConflictResolver, LocalWins, RemoteWins};
use cardrs::pipeline::CardPipeline;
use cardrs::registry::HubRegistry;
use cardrs::storage::settings::{load_settings, save_settings, Settings};

#[derive(Parser)]
#[command(name = "cardrs")]
#[command(version)]
#[command(about = "Model card generator for local GGUF model collections", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate model cards for every .gguf under the model directory
    Generate {
        /// Model directory (defaults to the saved setting)
        #[arg(short, long)]
        model_dir: Option<PathBuf>,

        /// Output directory for cards (defaults to the saved setting)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Prefer local metadata when the registry disagrees
        #[arg(long)]
        prefer_local: bool,
    },

    /// Persist settings for later runs
    Settings {
        /// Directory scanned for .gguf model files
        #[arg(long)]
        model_directory: Option<String>,

        /// Directory where model cards are written
        #[arg(long)]
        output_directory: Option<String>,

        /// Hugging Face token for registry lookups
        #[arg(long)]
        huggingface_token: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(status) => println!("{status}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

async fn run(cli: Cli) -> Result<String, CardError> {
    match cli.command {
        Commands::Generate {
            model_dir,
            output_dir,
            prefer_local,
        } => {
            let settings = load_settings();
            let model_dir = resolve_dir(model_dir, &settings.model_directory, "model")?;
            let output_dir = resolve_dir(output_dir, &settings.output_directory, "output")?;

            let registry = HubRegistry::new(Some(settings.huggingface_token))?;
            let resolver: Box<dyn ConflictResolver> = if prefer_local {
                Box::new(LocalWins)
            } else {
                Box::new(RemoteWins)
            };

            let pipeline = CardPipeline::new(&registry, resolver.as_ref());
            let report = pipeline.run_batch(&model_dir, &output_dir).await?;
            Ok(report.summary())
        }

        Commands::Settings {
            model_directory,
            output_directory,
            huggingface_token,
        } => {
            let mut settings = load_settings();
            if let Some(dir) = model_directory {
                settings.model_directory = dir;
            }
            if let Some(dir) = output_directory {
                settings.output_directory = dir;
            }
            if let Some(token) = huggingface_token {
                settings.huggingface_token = token;
            }
            save_settings(&settings)?;
            Ok(settings_summary(&settings))
        }
    }
}

/// CLI argument beats saved setting; neither being set is a usage error
fn resolve_dir(arg: Option<PathBuf>, setting: &str, role: &str) -> Result<PathBuf, CardError> {
    if let Some(dir) = arg {
        return Ok(dir);
    }
    if !setting.is_empty() {
        return Ok(PathBuf::from(setting));
    }
    Err(CardError::InvalidPath(format!(
        "no {role} directory configured; pass --{role}-dir or save one with 'cardrs settings'"
    )))
}

fn settings_summary(settings: &Settings) -> String {
    let token_status = if settings.huggingface_token.is_empty() {
        "(not set)"
    } else {
        "(set)"
    };
    [
        "Settings saved!".to_string(),
        format!("  model directory:  {}", display_or_unset(&settings.model_directory)),
        format!("  output directory: {}", display_or_unset(&settings.output_directory)),
        format!("  huggingface token {token_status}"),
    ]
    .join("\n")
}

fn display_or_unset(value: &str) -> &str {
    if value.is_empty() {
        "(not set)"
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_dir_prefers_argument() {
        let dir = resolve_dir(Some(PathBuf::from("/cli")), "/saved", "model").unwrap();
        assert_eq!(dir, PathBuf::from("/cli"));
    }

    #[test]
    fn test_resolve_dir_falls_back_to_setting() {
        let dir = resolve_dir(None, "/saved", "model").unwrap();
        assert_eq!(dir, PathBuf::from("/saved"));
    }

    #[test]
    fn test_resolve_dir_unset_errors() {
        assert!(resolve_dir(None, "", "model").is_err());
    }

    #[test]
    fn test_settings_summary_masks_token() {
        let settings = Settings {
            model_directory: "/m".to_string(),
            output_directory: String::new(),
            huggingface_token: "hf_secret".to_string(),
        };
        let summary = settings_summary(&settings);
        assert!(summary.contains("/m"));
        assert!(!summary.contains("hf_secret"));
        assert!(summary.contains("(set)"));
    }
}
