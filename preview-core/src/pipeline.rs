use std::path::PathBuf;

use crate::config::PreviewConfig;
use crate::error::{PreviewError, Result};
use crate::transform::generate_previews;
use crate::writer::PreviewWriter;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub blocks_seen: usize,
    pub skipped: Vec<String>,
    /// Files written, or that would be written on a dry run.
    pub outputs: Vec<PathBuf>,
}

/// Read the source document, build every preview, then write them.
/// Nothing is written if any block is malformed.
pub fn run(cfg: &PreviewConfig) -> Result<RunSummary> {
    let writer = if cfg.dry_run { None } else { Some(PreviewWriter::create(&cfg.output_dir)?) };

    let text = std::fs::read_to_string(&cfg.input)
        .map_err(|source| PreviewError::MissingInputFile { path: cfg.input.clone(), source })?;
    let previews = generate_previews(&text, &cfg.rules, cfg.strictness())?;

    let mut outputs = Vec::with_capacity(previews.built.len());
    for preview in &previews.built {
        match &writer {
            Some(w) => outputs.push(w.write(preview)?),
            None => {
                let path = cfg.output_dir.join(preview.file_name());
                log::info!("would write {} ({} frames)", path.display(), preview.frames);
                outputs.push(path);
            }
        }
    }

    log::info!(
        "{} state blocks, {} skipped, {} previews{}",
        previews.blocks_seen(),
        previews.skipped.len(),
        outputs.len(),
        if cfg.dry_run { " (dry run)" } else { "" }
    );
    Ok(RunSummary { blocks_seen: previews.blocks_seen(), skipped: previews.skipped, outputs })
}
