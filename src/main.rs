use anyhow::Result;
use online_shop::config::{LogFormat, ShopConfig};
use online_shop::session::{Console, Session};
use std::io;

fn init_logging(config: &ShopConfig) {
    use tracing::Level;

    let log_level = config.logging.level.parse::<Level>().unwrap_or(Level::WARN);

    // stdout belongs to the menu dialogue
    let builder = tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(log_level)
        .with_writer(io::stderr);

    match config.logging.format {
        LogFormat::Compact => builder.compact().init(),
        LogFormat::Pretty => builder.pretty().init(),
        LogFormat::Json => builder.json().init(),
    }
}

fn main() -> Result<()> {
    // Load config and initialize logging before any other operations
    let config = ShopConfig::load()?;
    init_logging(&config);

    let mut session = Session::from_config(&config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());

    let end = console.run(&mut session)?;
    tracing::debug!(event_name = "session.ended", outcome = ?end, "session finished");

    Ok(())
}
