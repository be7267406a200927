use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use dq_segments::data::filter::total_duration;
use dq_segments::{LoadOptions, SegmentLoader, SegmentPair, Window};

/// Print the data-quality segments stored at the root of the current git
/// working tree.
#[derive(Parser, Debug)]
#[command(name = "dq-segments")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Args {
    /// Print the first five raw start/end values before filtering
    #[arg(short, long)]
    verbose: bool,

    /// Exclusive lower bound on segment start
    #[arg(long, default_value_t = Window::DEC23_ANALYSIS_MIN)]
    min: f64,

    /// Exclusive upper bound on segment end
    #[arg(long, default_value_t = Window::DEC23_ANALYSIS_MAX)]
    max: f64,

    /// Return every segment, without a time window
    #[arg(long, conflicts_with_all = ["min", "max"])]
    all: bool,

    /// Read the segment file from this directory instead of the git root
    #[arg(long)]
    root: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Human)]
    format: Format,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Human,
    Json,
}

impl Args {
    fn window(&self) -> Window {
        if self.all {
            Window::Unbounded
        } else {
            Window::Bounded {
                min: self.min,
                max: self.max,
            }
        }
    }
}

fn main() {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("warn"));

    if let Err(e) = run(Args::parse()) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let loader = match &args.root {
        Some(root) => SegmentLoader::from_root(root),
        None => SegmentLoader::from_repo().context("locating the segment file")?,
    };

    let opts = LoadOptions {
        verbose: args.verbose,
        window: args.window(),
    };
    let segments = loader
        .load(&opts)
        .with_context(|| format!("loading {}", loader.path().display()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.format {
        Format::Human => print_human(&mut out, &segments)?,
        Format::Json => print_json(&mut out, &segments)?,
    }
    Ok(())
}

fn print_json<W: Write>(out: &mut W, segments: &[SegmentPair]) -> Result<()> {
    serde_json::to_writer(&mut *out, segments).context("writing JSON")?;
    writeln!(out)?;
    Ok(())
}

fn print_human<W: Write>(out: &mut W, segments: &[SegmentPair]) -> Result<()> {
    for seg in segments {
        writeln!(out, "{} {}", seg.start, seg.end)?;
    }
    eprintln!(
        "{} segments, {} s total",
        segments.len(),
        total_duration(segments)
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_the_analysis_window() {
        let args = Args::try_parse_from(["dq-segments"]).unwrap();

        assert_eq!(args.window(), Window::DEC23_ANALYSIS);
        assert_eq!(args.format, Format::Human);
        assert!(!args.verbose);
        assert_eq!(args.root, None);
    }

    #[test]
    fn explicit_bounds_override_one_side() {
        let args = Args::try_parse_from(["dq-segments", "--min", "5"]).unwrap();

        assert_eq!(
            args.window(),
            Window::Bounded {
                min: 5.0,
                max: Window::DEC23_ANALYSIS_MAX,
            }
        );

        let args = Args::try_parse_from(["dq-segments", "--min", "5", "--max", "50"]).unwrap();
        assert_eq!(args.window(), Window::Bounded { min: 5.0, max: 50.0 });
    }

    #[test]
    fn all_selects_unbounded() {
        let args = Args::try_parse_from(["dq-segments", "--all", "-v"]).unwrap();

        assert_eq!(args.window(), Window::Unbounded);
        assert!(args.verbose);
    }

    #[test]
    fn all_conflicts_with_bounds() {
        assert!(Args::try_parse_from(["dq-segments", "--all", "--min", "5"]).is_err());
        assert!(Args::try_parse_from(["dq-segments", "--all", "--max", "5"]).is_err());
    }

    #[test]
    fn json_format_and_root_are_parsed() {
        let args =
            Args::try_parse_from(["dq-segments", "-f", "json", "--root", "/data/checkout"]).unwrap();

        assert_eq!(args.format, Format::Json);
        assert_eq!(args.root, Some(PathBuf::from("/data/checkout")));
    }

    #[test]
    fn json_output_is_an_array_of_pairs() {
        let segments = [SegmentPair::new(1.0, 2.0), SegmentPair::new(3.5, 4.0)];
        let mut out = Vec::new();

        print_json(&mut out, &segments).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "[[1.0,2.0],[3.5,4.0]]\n");
    }

    #[test]
    fn human_output_is_one_line_per_segment() {
        let segments = [SegmentPair::new(10.0, 20.0), SegmentPair::new(30.0, 45.5)];
        let mut out = Vec::new();

        print_human(&mut out, &segments).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "10 20\n30 45.5\n");
    }
}
