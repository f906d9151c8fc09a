use atrium::core::config;
use atrium::{StartScreen, tui};
use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "atrium", about = "Two-screen terminal session demo")]
struct Args {
    /// Screen to open at launch
    #[arg(short, long, default_value_t, value_enum)]
    screen: StartScreen,

    /// Item id shown on the details screen (overrides config and env)
    #[arg(long)]
    item_id: Option<String>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - writes to atrium.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("atrium.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("Atrium starting up on screen: {:?}", args.screen);

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Config error, falling back to defaults: {e}");
            config::AtriumConfig::default()
        }
    };
    let resolved = config::resolve(&file_config, args.item_id.as_deref());

    tui::run(args.screen, resolved)
}
