use anyhow::Result;
use opsboard::{config::Config, logger, ui};
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    if let Some(arg) = args.next() {
        if arg == "--generate-config" {
            let path = match args.next() {
                Some(path) => PathBuf::from(path),
                None => Config::get_default_config_path()?,
            };
            return Config::generate_default_config(path);
        }
        eprintln!("❌ Error: unknown argument '{}'", arg);
        eprintln!("\n💡 Usage: opsboard [--generate-config [path]]");
        std::process::exit(2);
    }

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Error: failed to load configuration: {:#}", e);
            eprintln!("\n💡 Fix the file above or delete it to fall back to the defaults.");
            std::process::exit(1);
        }
    };

    if let Some(path) = logger::init(&config.logging)? {
        log::info!("opsboard starting, logging to {}", path.display());
    }

    ui::run_app(config).await?;

    Ok(())
}
