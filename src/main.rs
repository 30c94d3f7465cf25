use subpeek::parser::parse_time_arg;
use subpeek::srt::format_timestamp;
use subpeek::{Overlay, Parser, TimeEvent, WindowConfig};

use anyhow::{anyhow, Context, Result};
use clap::Parser as ClapParser;

fn main() {
    match run() {
        Ok(()) => (),
        Err(err) => {
            eprintln!("An error occurred: {}", err);
            for cause in err.chain().skip(1) {
                eprintln!("    {}", cause);
            }
        }
    }
}

#[derive(ClapParser)]
#[command(about = "Preview which SRT subtitles are visible at a playback position")]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "SRT file for the original-language overlay."
    )]
    original: Option<String>,
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "SRT file for the translated overlay."
    )]
    translated: Option<String>,
    #[arg(
        short = 'a',
        long = "at",
        value_name = "TIME",
        value_parser = parse_time_arg,
        required = true,
        help = "Playback position, as seconds or HH:MM:SS,mmm. May be repeated; each occurrence is delivered as a time-progressed event, in order."
    )]
    at: Vec<f64>,
    #[arg(
        long,
        value_name = "TIME",
        value_parser = parse_time_arg,
        help = "Deliver a final seek-completed event at this position."
    )]
    seek: Option<f64>,
    #[arg(
        long,
        value_name = "SECS",
        default_value_t = 1.0,
        help = "How far the visibility window reaches behind the playback position."
    )]
    window_before: f64,
    #[arg(
        long,
        value_name = "SECS",
        default_value_t = 5.0,
        help = "How far the visibility window reaches ahead of the playback position."
    )]
    window_after: f64,
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.original.is_none() && cli.translated.is_none() {
        return Err(anyhow!(
            "Supply at least one subtitle file with --original or --translated."
        ));
    }

    let window = WindowConfig {
        before: cli.window_before,
        after: cli.window_after,
    };

    let mut overlays = Vec::new();
    if let Some(path) = cli.original {
        overlays.push(load_overlay("original", &path, window)?);
    }
    if let Some(path) = cli.translated {
        overlays.push(load_overlay("translated", &path, window)?);
    }

    let events = cli
        .at
        .iter()
        .map(|&t| TimeEvent::Progressed(t))
        .chain(cli.seek.map(TimeEvent::SeekCompleted));

    for event in events {
        let (kind, time) = match event {
            TimeEvent::Progressed(t) => ("progressed", t),
            TimeEvent::SeekCompleted(t) => ("seeked", t),
        };
        println!("{} ({})", format_timestamp(time), kind);
        for overlay in &overlays {
            print_view(overlay, event);
        }
    }

    Ok(())
}

fn load_overlay(label: &str, path: &str, window: WindowConfig) -> Result<Overlay> {
    let data = std::fs::read_to_string(path)
        .context(format!("Failed to open input file: '{}'", path))?;

    let outcome = Parser::new().parse(&data);
    if !outcome.skipped.is_empty() {
        eprintln!(
            "{}: skipped {} malformed block(s) in '{}'",
            label,
            outcome.skipped.len(),
            path
        );
    }

    let mut overlay = Overlay::new(label, window);
    overlay
        .load(outcome.track)
        .context(format!("Failed to load '{}' as {} subtitles", path, label))?;
    Ok(overlay)
}

fn print_view(overlay: &Overlay, event: TimeEvent) {
    let visible = overlay.update(event);
    if visible.is_empty() {
        println!("  [{}] (nothing visible)", overlay.label());
        return;
    }
    for entry in visible {
        let marker = if entry.is_current { '>' } else { ' ' };
        println!(
            "  [{}] {} {} --> {}  {}",
            overlay.label(),
            marker,
            format_timestamp(entry.record.start_time),
            format_timestamp(entry.record.end_time),
            entry.record.text.replace('\n', " / ")
        );
    }
}
