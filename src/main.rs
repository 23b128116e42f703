use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use fretfall::app::App;
use fretfall::audio::KiraAudio;
use fretfall::config::PlayfieldConfig;
use fretfall::render::window::{WindowConfig, run_app};
use fretfall::util::logging::init_logging;

#[derive(Parser)]
#[command(name = "fretfall", about = "A falling-note rhythm game runtime")]
struct Args {
    /// Chart payload (JSON array of {lane, time, duration} records)
    chart: PathBuf,

    /// Audio payload (wav/ogg/mp3/flac)
    audio: PathBuf,

    /// Playfield config file (JSON); defaults are used when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory for daily log files
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Show debug logs
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_dir.as_deref(), args.verbose)?;

    let config = PlayfieldConfig::load(args.config.as_deref());

    let chart = fs::read(&args.chart)
        .with_context(|| format!("failed to read chart {}", args.chart.display()))?;
    let audio_bytes = fs::read(&args.audio)
        .with_context(|| format!("failed to read audio {}", args.audio.display()))?;

    let audio = KiraAudio::new()?;
    let app = App::new(config.clone(), audio, Some((chart, audio_bytes)));

    run_app(
        WindowConfig {
            title: "fretfall".to_string(),
            width: config.width as u32,
            height: config.height as u32,
            resizable: false,
        },
        app,
    )
}
