use clap::Subcommand;

use crate::cli::OutputFormat;
use crate::cli::utils::{output_fields, output_value};
use crate::config::AppConfig;

#[derive(Subcommand)]
pub enum ConfigCommands {
    #[command(about = "Show the configuration the server would start with")]
    Show,
}

pub fn handle(cmd: ConfigCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        ConfigCommands::Show => {
            let config = AppConfig::from_env();
            match output_format {
                OutputFormat::Json => output_value(&output_format, &serde_json::to_value(&config)?),
                OutputFormat::Text => output_fields(
                    &output_format,
                    &[
                        ("environment", format!("{:?}", config.environment)),
                        ("bind", config.bind_addr()),
                        ("backend", config.backend.base_url.clone().unwrap_or_else(|| "(unset)".to_string())),
                        ("cookie", config.session.cookie_name.clone()),
                        ("secure", config.session.secure.to_string()),
                        ("cors", config.security.cors_origins.join(", ")),
                    ],
                ),
            }
        }
    }
}
