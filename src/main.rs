use clap::{Parser, Subcommand};
use std::path::PathBuf;
use toolchat_lib::{commands, config, webui};
use tracing_subscriber::EnvFilter;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "toolchat")]
#[command(about = "Tool-catalog assistant: context selection and chat endpoint")]
#[command(version = VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server
    Serve {
        /// Port to listen on
        #[arg(long, env = "PORT", default_value_t = config::DEFAULT_PORT)]
        port: u16,
    },

    /// Show the tool context selected for a query (no model call)
    Context {
        /// User question
        query: String,
        /// Id of the tool page the user is on
        #[arg(long)]
        current_tool: Option<String>,
        /// Directory holding serviceCards.json and categories.json
        #[arg(long)]
        metadata_dir: Option<PathBuf>,
        /// Print a JSON report instead of text
        #[arg(long)]
        json: bool,
    },

    /// Display version information
    Version,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("toolchat=info,toolchat_lib=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Commands::Serve { port } => {
            if let Err(e) = webui::run_server(port, config::AppConfig::load()) {
                eprintln!("Error: {:#}", e);
                std::process::exit(1);
            }
        }
        Commands::Context {
            query,
            current_tool,
            metadata_dir,
            json,
        } => {
            if let Err(e) = commands::context::run(query, current_tool, metadata_dir, json) {
                eprintln!("Error: {:#}", e);
                std::process::exit(1);
            }
        }
        Commands::Version => {
            println!("toolchat v{}", VERSION);
            println!("Tool catalog assistant backend");
        }
    }
}
