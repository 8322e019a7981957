use anyhow::Result;
use clap::Parser;
use tracing::info;
use whispers_session::{Config, RecordStore};

/// Inspect the offline transcription record store
#[derive(Parser)]
#[command(name = "whispers-session", version)]
struct Args {
    /// Config file name, without extension
    #[arg(long, default_value = "config/whispers-session")]
    config: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let cfg = Config::load(&args.config)?;

    info!("whispers-session v0.1.0");
    info!("Records file: {}", cfg.storage.records_path().display());
    info!("Samples dir: {}", cfg.storage.samples_dir().display());
    info!(
        "Defaults: model {}, language {}",
        cfg.transcription.model, cfg.transcription.language
    );

    let store = RecordStore::new(cfg.storage.records_path());
    let records = store.load();

    info!("{} records on disk", records.len());
    for (i, record) in records.iter().enumerate() {
        let headline = record.logs.lines().next().unwrap_or("");
        info!("  [{}] {} ({})", i, headline, record.path);
    }

    Ok(())
}
