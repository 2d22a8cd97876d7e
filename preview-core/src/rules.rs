//! Per-state preview policy: which states get a preview and how far their
//! origins move.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

/// Horizontal tweak for every state whose name starts with `prefix`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrefixAdjust {
    pub prefix: String,
    pub dx: f64,
}

impl PrefixAdjust {
    fn new(prefix: &str, dx: f64) -> Self {
        Self { prefix: prefix.to_string(), dx }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewRules {
    pub base_offset: Offset,
    /// Checked in order; the first matching prefix wins.
    pub prefix_adjust: Vec<PrefixAdjust>,
    pub fallback_dx: f64,
    pub reserved_name: String,
    pub reserved_suffix: String,
    /// State name written into every preview header.
    pub preview_state: String,
}

impl Default for PreviewRules {
    fn default() -> Self {
        Self {
            base_offset: Offset { x: 20.0, y: 40.0 },
            prefix_adjust: vec![PrefixAdjust::new("Swordy", -4.0), PrefixAdjust::new("Spikey", -1.0)],
            fallback_dx: -2.0,
            reserved_name: "DEFAULT".to_string(),
            reserved_suffix: "_MIRRORED".to_string(),
            preview_state: "IDLE".to_string(),
        }
    }
}

impl PreviewRules {
    /// True for states that never get a preview: the default state and
    /// mirrored variants.
    pub fn is_excluded(&self, state: &str) -> bool {
        state == self.reserved_name || (!self.reserved_suffix.is_empty() && state.ends_with(&self.reserved_suffix))
    }

    /// Offset subtracted from every frame origin of `state`. Only x depends
    /// on the name.
    pub fn resolve_offset(&self, state: &str) -> Offset {
        let dx = self
            .prefix_adjust
            .iter()
            .find(|a| state.starts_with(&a.prefix))
            .map_or(self.fallback_dx, |a| a.dx);
        Offset { x: self.base_offset.x + dx, y: self.base_offset.y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_follow_name_prefix() {
        let rules = PreviewRules::default();
        assert_eq!(rules.resolve_offset("Swordy_Attack"), Offset { x: 16.0, y: 40.0 });
        assert_eq!(rules.resolve_offset("Spikey_Idle"), Offset { x: 19.0, y: 40.0 });
        assert_eq!(rules.resolve_offset("Golem_Walk"), Offset { x: 18.0, y: 40.0 });
        // prefix match is case sensitive
        assert_eq!(rules.resolve_offset("swordy_Attack"), Offset { x: 18.0, y: 40.0 });
    }

    #[test]
    fn first_matching_prefix_wins() {
        let mut rules = PreviewRules::default();
        rules.prefix_adjust.push(PrefixAdjust::new("Sword", 5.0));
        assert_eq!(rules.resolve_offset("Swordy").x, 16.0);
        assert_eq!(rules.resolve_offset("Swordfish").x, 25.0);
    }

    #[test]
    fn reserved_names_are_excluded() {
        let rules = PreviewRules::default();
        assert!(rules.is_excluded("DEFAULT"));
        assert!(rules.is_excluded("Golem_MIRRORED"));
        assert!(rules.is_excluded("_MIRRORED"));
        assert!(!rules.is_excluded("DEFAULT_Idle"));
        assert!(!rules.is_excluded("Golem_MIRRORED_Idle"));
        assert!(!rules.is_excluded("Swordy_Attack"));
    }

    #[test]
    fn empty_suffix_excludes_nothing_extra() {
        let rules = PreviewRules { reserved_suffix: String::new(), ..PreviewRules::default() };
        assert!(!rules.is_excluded("Golem_Walk"));
        assert!(rules.is_excluded("DEFAULT"));
    }
}
