mod report;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use eggycar_core::{Catalog, DEFAULT_BASE_URL, build_sitemap};
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// sitemaps.org XML, ready to serve as /sitemap.xml
    Xml,
    /// JSON array of entries
    Json,
    /// Human-readable table
    Console,
}

#[derive(Debug, Parser)]
#[command(name = "eggycar-sitemap", version)]
#[command(about = "Generate the sitemap for the Eggy Car Unblocked site")]
struct Args {
    /// Absolute origin the site is served from
    #[arg(long, env = "EGGYCAR_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Xml)]
    format: OutputFormat,

    /// Timestamp written as lastmod; defaults to now in RFC 3339
    #[arg(long)]
    last_modified: Option<String>,

    /// Optional path to write the sitemap instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    announce_banner();

    let catalog = Catalog::embedded().context("failed to load the game catalog")?;
    let last_modified = args
        .last_modified
        .clone()
        .unwrap_or_else(|| chrono::Utc::now().to_rfc3339());
    let entries = build_sitemap(&args.base_url, catalog, &last_modified)
        .with_context(|| format!("cannot build sitemap for {}", args.base_url))?;
    log::info!(
        "built {} sitemap entries for {} game(s)",
        entries.len(),
        catalog.len()
    );

    let mut output_target = OutputTarget::new(args.output.clone())?;
    report::write_report(&mut output_target, args.format, &entries)?;
    output_target.flush_inner()?;

    if let Some(path) = &args.output {
        eprintln!(
            "{} {}",
            "✅ Sitemap written to".green(),
            path.display().to_string().bold()
        );
    }
    Ok(())
}

fn announce_banner() {
    eprintln!("{}", "🥚 Eggy Car Sitemap".bright_cyan().bold());
    eprintln!("{}", "===================".cyan());
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_parse_to_xml_on_stdout() {
        let args = Args::try_parse_from(["eggycar-sitemap"]).unwrap();
        assert_eq!(args.format, OutputFormat::Xml);
        assert!(args.output.is_none());
        assert!(args.last_modified.is_none());
    }

    #[test]
    fn format_and_base_url_flags_are_accepted() {
        let args = Args::try_parse_from([
            "eggycar-sitemap",
            "--format",
            "json",
            "--base-url",
            "https://example.org",
        ])
        .unwrap();
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.base_url, "https://example.org");
        assert!(Args::try_parse_from(["eggycar-sitemap", "--format", "yaml"]).is_err());
    }

    #[test]
    fn output_target_writes_files() {
        let path = std::env::temp_dir().join("eggycar-sitemap-target-test.txt");
        let mut target = OutputTarget::new(Some(path.clone())).unwrap();
        writeln!(target, "hello").unwrap();
        target.flush_inner().unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello\n");
        let _ = std::fs::remove_file(path);
    }
}
