use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use preview_core::{PreviewConfig, VERSION};

#[derive(Parser, Debug)]
#[command(name = "prize-preview", version = VERSION, about = "Generate prize icon preview animations")]
struct Cli {
    /// YAML config; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,
    /// Source animation file
    #[arg(long)]
    input: Option<PathBuf>,
    /// Directory receiving one <State>.animation per preview
    #[arg(long)]
    output_dir: Option<PathBuf>,
    /// Fail on block headers without a terminating newline
    #[arg(long)]
    strict: bool,
    /// Parse and report, write nothing
    #[arg(long)]
    dry_run: bool,
    /// More output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,
    /// Only report warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn log_level(&self) -> log::LevelFilter {
        match (self.quiet, self.verbose) {
            (true, _) => log::LevelFilter::Warn,
            (false, 0) => log::LevelFilter::Info,
            (false, 1) => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }

    fn into_config(self) -> Result<PreviewConfig> {
        let mut cfg = match &self.config {
            Some(path) => PreviewConfig::load_from_path(path)?,
            None => PreviewConfig::default(),
        };
        if let Some(input) = self.input { cfg.input = input; }
        if let Some(dir) = self.output_dir { cfg.output_dir = dir; }
        cfg.strict |= self.strict;
        cfg.dry_run |= self.dry_run;
        Ok(cfg)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_env("RUST_LOG")
        .format_timestamp(None)
        .init();

    let cfg = cli.into_config()?;
    let summary = preview_core::run(&cfg)
        .with_context(|| format!("failed to generate previews from {}", cfg.input.display()))?;
    if summary.outputs.is_empty() {
        log::warn!("no previews generated");
    }
    Ok(())
}
