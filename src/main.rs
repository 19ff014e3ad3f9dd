use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use valcar::core::config::{self, CliOverrides};
use valcar::tui;

#[derive(Parser)]
#[command(name = "valcar", about = "Used-car storefront for the terminal")]
struct Args {
    /// URL of the cars.json inventory feed
    #[arg(long)]
    feed_url: Option<String>,

    /// Read the inventory from a local JSON file instead of the feed
    #[arg(long)]
    inventory_file: Option<PathBuf>,

    /// Phone number shown for calls
    #[arg(long)]
    phone: Option<String>,

    /// WhatsApp number
    #[arg(long)]
    whatsapp: Option<String>,
}

impl From<Args> for CliOverrides {
    fn from(args: Args) -> Self {
        CliOverrides {
            feed_url: args.feed_url,
            inventory_file: args.inventory_file,
            phone: args.phone,
            whatsapp: args.whatsapp,
        }
    }
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - the terminal belongs to the UI
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("valcar.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            log::error!("Invalid config: {}", e);
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    let resolved = config::resolve(&file_config, &args.into());

    log::info!(
        "valcar starting up (inventory: {:?}, phone: {})",
        resolved.feed,
        resolved.phone
    );

    tui::run(resolved)
}
