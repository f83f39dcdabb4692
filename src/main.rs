use std::fs::File;
use std::io;
use std::path::PathBuf;

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use amity::content::Content;
use amity::core::config;
use amity::core::state::App;
use amity::core::store::FileStore;
use amity::tui;

#[derive(Parser)]
#[command(name = "amity", about = "A couples' devotional journal for the terminal")]
struct Args {
    /// Directory for persistent state (defaults to ~/.amity/store)
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".amity").join("store"))
        .unwrap_or_else(|| PathBuf::from(".amity-store"))
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - writes to amity.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("amity.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("Amity starting up");

    let content = Content::load()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    let (profile, settings) = config::resolve(&config::load_config());

    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);
    let store = FileStore::open(data_dir)?;

    let app = App::new(content, Box::new(store), profile, settings);
    tui::run(app)
}
