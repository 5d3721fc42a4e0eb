mod api;
mod core;
#[cfg(test)]
mod test_support;
mod tui;

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "parley", about = "Terminal client for the NPC chat demo")]
struct Args {
    /// Base URL of the chat service
    #[arg(short, long)]
    server: Option<String>,

    /// Conversation thread identifier
    #[arg(short, long)]
    thread: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to parley.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("parley.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let config = match crate::core::config::load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    };
    let resolved = match crate::core::config::resolve(&config, args.server.as_deref(), args.thread.as_deref()) {
        Ok(resolved) => resolved,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    log::info!(
        "Parley starting up: server={}, thread={}",
        resolved.base_url,
        resolved.thread_id
    );

    tui::run(resolved)
}
