use std::fmt;

use serde::{Deserialize, Serialize};

/// the icon sets the view can draw from
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum IconSet {
    Fa,
    Mdi,
}

impl IconSet {
    /// looks up the glyph used for `alias` in this set
    #[must_use]
    pub fn glyph(self, alias: &str) -> Option<&'static str> {
        let glyph = match (self, alias) {
            (Self::Fa, "plus") => "➕",
            (Self::Fa, "sun") => "🌞",
            (Self::Fa, "moon") => "🌙",
            (Self::Fa, "clock") => "🕐",
            (Self::Fa, "bell") => "🔔",
            (Self::Mdi, "plus") => "+",
            (Self::Mdi, "sun") => "☀",
            (Self::Mdi, "moon") => "☾",
            (Self::Mdi, "clock") => "⏰",
            (Self::Mdi, "bell") => "🕭",
            _ => return None,
        };
        Some(glyph)
    }
}

impl fmt::Display for IconSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fa => write!(f, "fa"),
            Self::Mdi => write!(f, "mdi"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct IconConfig {
    pub default_set: IconSet,
    pub sets: Vec<IconSet>,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            default_set: IconSet::Fa,
            sets: vec![IconSet::Fa, IconSet::Mdi],
        }
    }
}

impl IconConfig {
    /// resolves `alias` in the default set first, then in the other sets in order
    #[must_use]
    pub fn glyph(&self, alias: &str) -> Option<&'static str> {
        std::iter::once(self.default_set)
            .chain(self.sets.iter().copied())
            .find_map(|set| set.glyph(alias))
    }
}

/// font awesome style packs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconPack {
    Solid,
    Regular,
}

#[derive(Debug, Default, Clone)]
pub struct IconLibrary {
    packs: Vec<IconPack>,
}

impl IconLibrary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, pack: IconPack) {
        if !self.contains(pack) {
            self.packs.push(pack);
        }
    }

    #[must_use]
    pub fn contains(&self, pack: IconPack) -> bool {
        self.packs.contains(&pack)
    }

    #[must_use]
    pub fn packs(&self) -> &[IconPack] {
        &self.packs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_set_wins() {
        let icons = IconConfig::default();
        assert_eq!(icons.glyph("sun"), Some("🌞"));
    }

    #[test]
    fn falls_back_to_other_sets() {
        let icons = IconConfig {
            default_set: IconSet::Mdi,
            sets: vec![IconSet::Fa],
        };
        assert_eq!(icons.glyph("plus"), Some("+"));
        assert_eq!(icons.glyph("snooze"), None);
    }

    #[test]
    fn library_ignores_duplicate_packs() {
        let mut library = IconLibrary::new();
        library.add(IconPack::Solid);
        library.add(IconPack::Regular);
        library.add(IconPack::Solid);
        assert_eq!(library.packs(), [IconPack::Solid, IconPack::Regular]);
        assert!(library.contains(IconPack::Regular));
    }
}
