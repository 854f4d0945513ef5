use std::{io, path::PathBuf, process};

use anyhow::{Context, Result};
use clap::Parser;
use embassy_executor::Spawner;
use embassy_time::{Duration, Instant, Timer};
use log::{error, info};
use pacer_core::app::{
    DEFAULT_WPM, PlaybackEvent, ReaderApp, ReaderConfig, TickResult, WpmError, parse_wpm,
};

use stdin::StdinInput;
use terminal::{ColumnOffsetMapper, SharedLayout, TerminalRenderer};

#[path = "main/commands.rs"]
mod commands;
#[path = "main/seed.rs"]
mod seed;
#[path = "main/stdin.rs"]
mod stdin;
#[path = "main/terminal.rs"]
mod terminal;

const REPORT_INTERVAL_SECS: u64 = 5;

/// Sectioned RSVP reader for the terminal.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Words per minute
    #[arg(long, env = "PACER_WPM", default_value_t = DEFAULT_WPM, value_parser = wpm_arg)]
    wpm: f64,

    /// Step applied by `+` / `-`
    #[arg(long, default_value_t = 10.0, value_parser = wpm_arg)]
    wpm_step: f64,

    /// Seed sections from a text file, one per paragraph
    #[arg(short, long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// Title shown above the section listing
    #[arg(long, default_value = "Pacer")]
    title: String,

    /// Listing width in columns
    #[arg(long, default_value_t = 72)]
    width: usize,

    /// Input poll interval
    #[arg(long, value_name = "MS", default_value_t = 5)]
    poll_ms: u64,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn wpm_arg(raw: &str) -> Result<f64, WpmError> {
    parse_wpm(raw)
}

fn init_logging(verbose: u8) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(err) = run(args).await {
        error!("{:#}", err);
        process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    let texts = match &args.file {
        Some(path) => seed::load_sections(path)?,
        None => Vec::new(),
    };
    let config = ReaderConfig {
        wpm: args.wpm,
        wpm_step: args.wpm_step,
    };
    let title: &'static str = args.title.leak();

    let layout = SharedLayout::default();
    let input = StdinInput::spawn().context("Failed to start stdin reader")?;
    let mut app = ReaderApp::with_sections(input, config, title, &texts)
        .with_offset_mapper(ColumnOffsetMapper::new(layout.clone()));
    let mut renderer = TerminalRenderer::new(io::stdout().lock(), args.width, layout);

    info!(
        "pacer: sections={} wpm={} step={} poll_ms={}",
        texts.len(),
        config.wpm,
        config.wpm_step,
        args.poll_ms
    );
    println!("{}", commands::HELP);

    let loop_start = Instant::now();
    let mut report_start = Instant::now();
    let mut report_words = 0u64;

    loop {
        let now_ms = loop_start.elapsed().as_millis();
        if app.tick(now_ms) == TickResult::RenderRequested {
            let mut rendered = Ok(());
            app.with_screen(|screen| rendered = renderer.render(screen));
            rendered.context("Failed to write to terminal")?;
        }

        for event in app.drain_events() {
            match event {
                PlaybackEvent::Word { .. } => {}
                PlaybackEvent::SectionComplete { section } => {
                    renderer.notice(&format!("section {section} complete"))?;
                }
                PlaybackEvent::AllComplete => {
                    renderer.notice("all sections complete; `reset` to read again")?;
                }
            }
        }

        if app.input_mut().is_closed() && !app.playback().playing {
            info!("input closed; exiting");
            break;
        }

        report_words = report_words.saturating_add(app.drain_word_updates() as u64);

        let elapsed = report_start.elapsed();
        if elapsed >= Duration::from_secs(REPORT_INTERVAL_SECS) {
            let elapsed_ms = elapsed.as_millis().max(1);
            let wpm_x100 = report_words * 6_000_000 / elapsed_ms;

            info!(
                "effective_wpm={}.{:02} words={} elapsed_ms={}",
                wpm_x100 / 100,
                wpm_x100 % 100,
                report_words,
                elapsed_ms
            );

            report_words = 0;
            report_start = Instant::now();
        }

        Timer::after_millis(args.poll_ms.max(1)).await;
    }

    Ok(())
}
