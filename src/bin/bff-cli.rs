use clap::{Parser, Subcommand};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "bff-cli")]
#[command(about = "Management CLI for the Llama Stack BFF", long_about = None)]
struct Cli {
    #[arg(short, long, env = "BFF_URL", default_value = "http://localhost:8080")]
    url: String,

    /// Bearer token for the protected API when OAuth is enabled.
    #[arg(short, long, env = "BFF_TOKEN")]
    token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check BFF health
    Health,
    /// Show the frontend configuration
    Config,
    /// List models known to the Llama Stack
    Models,
    /// List vector databases known to the Llama Stack
    VectorDbs,
}

impl Commands {
    fn path(&self) -> &'static str {
        match self {
            Commands::Health => "/healthcheck",
            Commands::Config => "/api/v1/config",
            Commands::Models => "/api/v1/models",
            Commands::VectorDbs => "/api/v1/vector-dbs",
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let mut headers = HeaderMap::new();
    if let Some(token) = &cli.token {
        headers.insert(AUTHORIZATION, HeaderValue::from_str(&format!("Bearer {}", token))?);
    }

    let res = client
        .get(format!("{}{}", cli.url.trim_end_matches('/'), cli.command.path()))
        .headers(headers)
        .send()
        .await?;
    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: BFF returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        std::process::exit(1);
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
