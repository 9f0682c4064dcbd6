use std::fs;
use std::path::PathBuf;
use std::process;

use chordal::config::{Config, OutputFormat};
use chordal::playback::sequence_playback_data;
use chordal::{parse_chord, ChordError, Storable};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "chordal", about = "Parse chord symbols and print their tones")]
struct Args {
    /// Chord symbols, e.g. C, C:m7, E:D7:2
    chords: Vec<String>,

    /// Read chord symbols from a file, one per line
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// YAML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Tempo in BPM for JSON playback output
    #[arg(long)]
    tempo: Option<u16>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose { "chordal=debug" } else { "chordal=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), ChordError> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(format) = args.format {
        config.format = format;
    }
    if let Some(tempo) = args.tempo {
        config.tempo = tempo;
    }
    tracing::debug!(?config, "resolved configuration");

    let mut sources = args.chords.clone();
    if let Some(path) = &args.input {
        let content = fs::read_to_string(path).map_err(|e| ChordError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        sources.extend(input_lines(&content));
    }

    if sources.is_empty() {
        tracing::warn!("no chords given");
        return Ok(());
    }

    for source in &sources {
        let chord = parse_chord(source).map_err(|e| {
            tracing::error!("cannot parse '{}': {}", source, e);
            e
        })?;
        let sequence = chord.derive();

        match config.format {
            OutputFormat::Text if config.show_chord => {
                println!("{} => {}", chord.store_text(), sequence.store_text())
            }
            OutputFormat::Text => println!("{}", sequence.store_text()),
            OutputFormat::Json => {
                let data = sequence_playback_data(&sequence, config.tempo)?;
                let json = serde_json::to_string(&data)
                    .map_err(|e| ChordError::Encode(e.to_string()))?;
                println!("{}", json);
            }
        }
    }

    Ok(())
}

/// Chord symbols in an input file: blank lines and `#` comments are skipped
fn input_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_lines_skip_comments_and_blanks() {
        let content = "# progression\nC\n\n  A:m  \n# turnaround\nG:D7\n";
        assert_eq!(input_lines(content), vec!["C", "A:m", "G:D7"]);
    }

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from(["chordal", "--format", "json", "--tempo", "90", "C:m7"])
            .unwrap();
        assert_eq!(args.format, Some(OutputFormat::Json));
        assert_eq!(args.tempo, Some(90));
        assert_eq!(args.chords, vec!["C:m7"]);
    }
}
