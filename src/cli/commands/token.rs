use chrono::Utc;
use clap::Subcommand;
use serde_json::json;

use crate::auth;
use crate::cli::OutputFormat;
use crate::cli::utils::{output_fields, output_value};

#[derive(Subcommand)]
pub enum TokenCommands {
    #[command(about = "Decode a session token's claims without verifying it")]
    Decode {
        #[arg(help = "Session token")]
        token: String,
    },
}

pub fn handle(cmd: TokenCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        TokenCommands::Decode { token } => {
            let claims = auth::decode_claims(&token)?;
            let now = Utc::now();

            match output_format {
                OutputFormat::Json => output_value(
                    &output_format,
                    &json!({
                        "claims": claims,
                        "expired": claims.is_expired(now),
                        "expiresAt": claims.expires_at(),
                    }),
                ),
                OutputFormat::Text => {
                    let expires = match claims.expires_at() {
                        Some(at) if claims.is_expired(now) => format!("{} (expired)", at),
                        Some(at) => at.to_string(),
                        None => "never".to_string(),
                    };
                    output_fields(
                        &output_format,
                        &[
                            ("id", claims.id.clone()),
                            ("role", format!("{:?}", claims.role)),
                            ("email", claims.email.clone().unwrap_or_default()),
                            ("expires", expires),
                        ],
                    )
                }
            }
        }
    }
}
