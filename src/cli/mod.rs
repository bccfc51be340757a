pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "siloam")]
#[command(about = "Siloam CLI - inspect tokens and call the SiloamXperience portal API")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in human-readable text format")]
    pub text: bool,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[arg(
        long,
        global = true,
        env = "SILOAM_PORTAL_URL",
        default_value = "http://localhost:3000",
        help = "Portal base URL"
    )]
    pub url: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Session token inspection")]
    Token {
        #[command(subcommand)]
        cmd: commands::token::TokenCommands,
    },

    #[command(about = "Server configuration")]
    Config {
        #[command(subcommand)]
        cmd: commands::config::ConfigCommands,
    },

    #[command(about = "Show the user behind a session token")]
    Session {
        #[arg(long, env = "SILOAM_TOKEN", hide_env_values = true, help = "Session token")]
        token: Option<String>,
    },

    #[command(about = "Log in and print the issued session token")]
    Login {
        #[arg(long, help = "Account email")]
        email: String,
        #[arg(long, help = "Account password")]
        password: String,
    },

    #[command(about = "GET a portal path, e.g. /api/donors")]
    Get {
        #[arg(help = "Portal path")]
        path: String,
        #[arg(long = "query", value_name = "KEY=VALUE", help = "Query parameter (repeatable)")]
        query: Vec<String>,
        #[arg(long, env = "SILOAM_TOKEN", hide_env_values = true, help = "Session token")]
        token: Option<String>,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);

    match cli.command {
        Commands::Token { cmd } => commands::token::handle(cmd, output_format),
        Commands::Config { cmd } => commands::config::handle(cmd, output_format),
        Commands::Session { token } => commands::portal::session(&cli.url, token, output_format).await,
        Commands::Login { email, password } => {
            commands::portal::login(&cli.url, &email, &password, output_format).await
        }
        Commands::Get { path, query, token } => {
            commands::portal::get(&cli.url, &path, &query, token, output_format).await
        }
    }
}
