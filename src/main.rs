use clap::Parser;
use menukit::Locale;
use menukit::core::config::{self, CliOverrides};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser)]
#[command(name = "menukit", about = "Bordered console menus driven by single keystrokes")]
struct Args {
    /// Config file (defaults to ~/.menukit/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Language of the key-binding legend
    #[arg(short, long, value_enum)]
    locale: Option<Locale>,

    /// Menu frame width in columns
    #[arg(short, long)]
    width: Option<u16>,

    /// Print the menu once as plain text instead of running interactively
    #[arg(long)]
    preview: bool,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let file_config = config::load_config(args.config.as_deref()).unwrap_or_else(|e| {
        eprintln!("menukit: {e}, using defaults");
        config::MenukitConfig::default()
    });
    let cli = CliOverrides {
        locale: args.locale,
        width: args.width,
    };
    let resolved = config::resolve(&file_config, &cli);

    // File logger: stdout belongs to the menu
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();
    let level = LevelFilter::from_str(&resolved.log_level).unwrap_or(LevelFilter::Debug);

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(level, log_config, log_file);
    }

    log::info!("menukit starting up with locale: {:?}", resolved.locale);

    menukit::tui::launch(resolved, args.preview)
}
