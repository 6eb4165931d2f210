use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "workspace-cli")]
#[command(about = "Management CLI for the gateway workspace", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check workspace status
    Status,
    /// Show the scope → route index
    Scopes,
    /// Rename a gateway mapping
    Rename {
        /// Current mapping name
        current_name: String,
        /// New mapping name
        new_name: String,
    },
    /// Persist the facet's artifacts to disk
    Save,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Status => {
            let res = client.get(format!("{}/status", cli.url)).send().await?;
            print_response(res).await?;
        }
        Commands::Scopes => {
            let res = client.get(format!("{}/authScopes", cli.url)).send().await?;
            print_response(res).await?;
        }
        Commands::Rename {
            current_name,
            new_name,
        } => {
            let res = client
                .post(format!("{}/gatewayMappings/rename", cli.url))
                .json(&serde_json::json!({
                    "currentName": current_name,
                    "newName": new_name,
                }))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Save => {
            let res = client
                .post(format!("{}/workspace/save", cli.url))
                .send()
                .await?;
            print_response(res).await?;
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: workspace API returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
