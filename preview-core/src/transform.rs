//! Turning state blocks into preview blocks.

use crate::document::{Blocks, StateBlock, Strictness, STATE_MARKER};
use crate::error::{PreviewError, Result};
use crate::frame::patch_frame;
use crate::rules::PreviewRules;

pub const PREVIEW_EXTENSION: &str = "animation";

/// A rewritten block, keyed by the state it was derived from.
#[derive(Debug, Clone, PartialEq)]
pub struct Preview {
    pub source_state: String,
    pub contents: String,
    pub frames: usize,
}

impl Preview {
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.source_state, PREVIEW_EXTENSION)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Previews {
    pub built: Vec<Preview>,
    /// Reserved states that were passed over.
    pub skipped: Vec<String>,
}

impl Previews {
    pub fn blocks_seen(&self) -> usize {
        self.built.len() + self.skipped.len()
    }
}

/// Rename the block to the preview state and shift every frame origin.
pub fn build_preview(block: &StateBlock<'_>, rules: &PreviewRules) -> Result<Preview> {
    let offset = rules.resolve_offset(block.name);
    let mut contents = format!("{}{}", STATE_MARKER, rules.preview_state);
    let mut frames = 0;

    for frame in block.frames() {
        let patched = patch_frame(frame.text, offset).map_err(|source| PreviewError::MalformedFrameLine {
            block: block.name.to_string(),
            line: frame.line,
            source,
        })?;
        contents.push('\n');
        contents.push_str(&patched);
        frames += 1;
    }
    contents.push('\n');

    if frames == 0 {
        log::warn!("state `{}` (line {}) has no frame lines", block.name, block.line);
    }
    Ok(Preview { source_state: block.name.to_string(), contents, frames })
}

/// Build previews for every retained block of `text`, stopping at the first
/// malformed one.
pub fn generate_previews(text: &str, rules: &PreviewRules, strictness: Strictness) -> Result<Previews> {
    let blocks = Blocks::new(text);
    if !blocks.preamble().trim().is_empty() {
        log::debug!("ignoring {} bytes before the first state block", blocks.preamble().len());
    }

    let mut out = Previews::default();
    for raw in blocks {
        let block = StateBlock::parse(raw, strictness)?;
        if rules.is_excluded(block.name) {
            log::debug!("skipping reserved state `{}`", block.name);
            out.skipped.push(block.name.to_string());
            continue;
        }
        out.built.push(build_preview(&block, rules)?);
    }

    if out.blocks_seen() == 0 {
        log::warn!("no state blocks found");
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRIZES: &str = "\
anim DEFAULT
frame originx=10 originy=10
anim Swordy_Attack
frame originx=100 originy=200 sprite=0
frame originx=102 originy=198 sprite=1
anim Swordy_Attack_MIRRORED
frame originx=100 originy=200
anim Spikey_Idle
frame originx=50 originy=50
anim Golem_MIRRORED
frame originx=1 originy=1
anim Golem_Walk
frame originx=30.5 originy=41
";

    fn generate(text: &str) -> Previews {
        generate_previews(text, &PreviewRules::default(), Strictness::Lenient).unwrap()
    }

    fn preview<'p>(previews: &'p Previews, state: &str) -> &'p Preview {
        previews.built.iter().find(|p| p.source_state == state).unwrap()
    }

    #[test]
    fn one_preview_per_retained_block() {
        let previews = generate(PRIZES);
        let states: Vec<_> = previews.built.iter().map(|p| p.source_state.as_str()).collect();
        assert_eq!(states, ["Swordy_Attack", "Spikey_Idle", "Golem_Walk"]);
        assert_eq!(previews.skipped, ["DEFAULT", "Swordy_Attack_MIRRORED", "Golem_MIRRORED"]);
        assert_eq!(previews.blocks_seen(), 6);
    }

    #[test]
    fn headers_are_renamed_to_idle() {
        for p in &generate(PRIZES).built {
            assert_eq!(p.contents.lines().next(), Some("anim IDLE"));
            assert!(p.contents.ends_with('\n'));
        }
    }

    #[test]
    fn swordy_frames_shift_by_sixteen() {
        let previews = generate(PRIZES);
        let p = preview(&previews, "Swordy_Attack");
        assert_eq!(
            p.contents,
            "anim IDLE\nframe originx=84 originy=160 sprite=0\nframe originx=86 originy=158 sprite=1\n"
        );
        assert_eq!(p.frames, 2);
        assert_eq!(p.file_name(), "Swordy_Attack.animation");
    }

    #[test]
    fn spikey_and_fallback_offsets() {
        let previews = generate(PRIZES);
        assert_eq!(preview(&previews, "Spikey_Idle").contents, "anim IDLE\nframe originx=31 originy=10\n");
        assert_eq!(preview(&previews, "Golem_Walk").contents, "anim IDLE\nframe originx=12.5 originy=1\n");
    }

    #[test]
    fn only_frame_lines_are_carried_over() {
        let text = "anim Swordy_Attack\noriginx=100 originy=200 frame 1\nframe originx=100 originy=200 tex=a\n";
        let previews = generate(text);
        assert_eq!(previews.built[0].contents, "anim IDLE\nframe originx=84 originy=160 tex=a\n");
    }

    #[test]
    fn block_without_frames_is_header_only() {
        let previews = generate("anim Golem_Walk\n");
        assert_eq!(previews.built[0].contents, "anim IDLE\n");
        assert_eq!(previews.built[0].frames, 0);
    }

    #[test]
    fn empty_document_builds_nothing() {
        let previews = generate("");
        assert!(previews.built.is_empty());
        assert_eq!(previews.blocks_seen(), 0);
    }

    #[test]
    fn malformed_frame_names_block_and_line() {
        let text = "anim Golem_Walk\nframe originx=1 originy=1\nframe originx=oops originy=1\nanim Later\n";
        let err = generate_previews(text, &PreviewRules::default(), Strictness::Lenient).unwrap_err();
        match err {
            PreviewError::MalformedFrameLine { block, line, .. } => {
                assert_eq!(block, "Golem_Walk");
                assert_eq!(line, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn malformed_frame_in_reserved_block_is_ignored() {
        let previews = generate("anim DEFAULT\nframe nothing here\nanim A\nframe originx=0 originy=0\n");
        assert_eq!(previews.built.len(), 1);
    }

    #[test]
    fn custom_preview_state() {
        let rules = PreviewRules { preview_state: "ICON".to_string(), ..PreviewRules::default() };
        let previews = generate_previews("anim A\n", &rules, Strictness::Lenient).unwrap();
        assert_eq!(previews.built[0].contents, "anim ICON\n");
    }
}
