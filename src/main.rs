//! jdoc: extract Javadoc blocks and documented declarations from Java sources.
//!
//! Copies every `/** ... */` block (plus the declaration line after it) to the
//! output file and reports the class name and `@author`, each documented
//! method with its `@param` / `@return` tags, and line counts.
//!
//! ```text
//! jdoc -i Calculator.java -o docs.txt            # reads src/Calculator.java
//! jdoc -d . -i Calculator.java -o docs.txt -f json
//! ```

mod error;
mod model;
mod report;
mod scanner;
mod sink;
mod source;

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "jdoc",
    about = "Extract Javadoc comments, class and method annotations from Java source files"
)]
struct Cli {
    /// Input file, relative to the source directory
    #[arg(short = 'i', long)]
    input: PathBuf,

    /// Output file for the extracted doc blocks (truncated first)
    #[arg(short = 'o', long)]
    output: PathBuf,

    /// Directory the input file is resolved against
    #[arg(short = 'd', long, default_value = "src")]
    source_dir: PathBuf,

    /// Report format: text (default), json, markdown
    #[arg(short = 'f', long, default_value = "text")]
    format: String,

    /// Log level (error, warn, info, debug, trace) or a filter directive.
    /// RUST_LOG is merged in when set.
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);
    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    let input_path = resolve_input(&cli.source_dir, &cli.input);
    let mut reporter = report::create_reporter(&cli.format, Box::new(io::stdout()))?;

    let mut lines = source::LineSource::open(&input_path)
        .with_context(|| format!("failed to open {}", input_path.display()))?;
    let mut doc = sink::DocWriter::create(&cli.output)
        .with_context(|| format!("failed to create {}", cli.output.display()))?;

    info!(input = %input_path.display(), output = %cli.output.display(), "scanning");
    let outcome = scanner::scan(&mut lines, &mut doc, reporter.as_mut())
        .with_context(|| format!("failed to scan {}", input_path.display()))?;

    info!(
        lines = outcome.counters.total_lines,
        doc_blocks = outcome.counters.doc_blocks,
        anomalies = outcome.anomalies.len(),
        "scan finished"
    );
    Ok(())
}

/// Join the input designator onto the source directory. Absolute inputs
/// are taken as-is.
fn resolve_input(source_dir: &Path, input: &Path) -> PathBuf {
    source_dir.join(input)
}

/// Install a stderr `tracing` subscriber. `level` is a bare level or an
/// `EnvFilter` directive; `RUST_LOG` directives are appended to it.
fn init_logging(level: &str) {
    let directives = match std::env::var("RUST_LOG") {
        Ok(env) if !env.trim().is_empty() => format!("{},{}", level.trim(), env.trim()),
        _ => level.trim().to_string(),
    };
    let filter = EnvFilter::try_new(&directives).unwrap_or_else(|_| {
        EnvFilter::default().add_directive(LevelFilter::WARN.into())
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .without_time()
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_resolved_under_source_dir() {
        assert_eq!(
            resolve_input(Path::new("src"), Path::new("Foo.java")),
            PathBuf::from("src/Foo.java")
        );
    }

    #[test]
    fn absolute_input_kept() {
        assert_eq!(
            resolve_input(Path::new("src"), Path::new("/tmp/Foo.java")),
            PathBuf::from("/tmp/Foo.java")
        );
    }

    #[test]
    fn cli_requires_input_and_output() {
        assert!(Cli::try_parse_from(["jdoc", "-o", "out.txt"]).is_err());
        assert!(Cli::try_parse_from(["jdoc", "-i", "Foo.java"]).is_err());
    }

    #[test]
    fn cli_defaults() {
        let cli = Cli::try_parse_from(["jdoc", "-i", "Foo.java", "-o", "out.txt"]).unwrap();
        assert_eq!(cli.source_dir, PathBuf::from("src"));
        assert_eq!(cli.format, "text");
        assert_eq!(cli.log_level, "warn");
    }
}
