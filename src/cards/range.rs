//! Attack range categories.
//!
//! The dataset spells ranges in French (`mêlée`, `moyenne`, ...) but English
//! names show up too. Every accepted spelling is listed once in
//! `RangeCategory::ALIASES`; lookups never match strings anywhere else.

/// Enumerated attack-range classification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RangeCategory {
    #[default]
    Melee,
    Short,
    Medium,
    Long,
    VeryLong,
    Global,
    Mixed,
    None,
}

impl RangeCategory {
    /// All categories, in table order.
    pub const ALL: [RangeCategory; 8] = [
        RangeCategory::Melee,
        RangeCategory::Short,
        RangeCategory::Medium,
        RangeCategory::Long,
        RangeCategory::VeryLong,
        RangeCategory::Global,
        RangeCategory::Mixed,
        RangeCategory::None,
    ];

    /// Lowercase spellings accepted for each category.
    const ALIASES: [(&'static str, RangeCategory); 15] = [
        ("mêlée", RangeCategory::Melee),
        ("melee", RangeCategory::Melee),
        ("courte", RangeCategory::Short),
        ("short", RangeCategory::Short),
        ("moyenne", RangeCategory::Medium),
        ("medium", RangeCategory::Medium),
        ("longue", RangeCategory::Long),
        ("long", RangeCategory::Long),
        ("très_longue", RangeCategory::VeryLong),
        ("very_long", RangeCategory::VeryLong),
        ("global", RangeCategory::Global),
        ("mixte", RangeCategory::Mixed),
        ("mixed", RangeCategory::Mixed),
        ("aucune", RangeCategory::None),
        ("none", RangeCategory::None),
    ];

    /// Label used when a card carries no range at all.
    pub const DEFAULT_LABEL: &'static str = "melee";

    /// Parse a range label, ignoring case and surrounding whitespace.
    ///
    /// Returns `None` for labels outside the table.
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        let normalized = label.trim().to_lowercase();
        Self::ALIASES
            .iter()
            .find(|(alias, _)| *alias == normalized)
            .map(|&(_, category)| category)
    }

    /// Canonical English name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            RangeCategory::Melee => "melee",
            RangeCategory::Short => "short",
            RangeCategory::Medium => "medium",
            RangeCategory::Long => "long",
            RangeCategory::VeryLong => "very_long",
            RangeCategory::Global => "global",
            RangeCategory::Mixed => "mixed",
            RangeCategory::None => "none",
        }
    }
}

impl std::fmt::Display for RangeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(RangeCategory::parse("MÊLÉE"), Some(RangeCategory::Melee));
        assert_eq!(RangeCategory::parse("Medium"), Some(RangeCategory::Medium));
        assert_eq!(RangeCategory::parse("Très_Longue"), Some(RangeCategory::VeryLong));
    }

    #[test]
    fn test_dual_spellings() {
        assert_eq!(RangeCategory::parse("mêlée"), RangeCategory::parse("melee"));
        assert_eq!(RangeCategory::parse("moyenne"), RangeCategory::parse("medium"));
    }

    #[test]
    fn test_unknown_label() {
        assert_eq!(RangeCategory::parse("orbital"), None);
        assert_eq!(RangeCategory::parse(""), None);
    }

    #[test]
    fn test_every_category_has_an_alias() {
        for category in RangeCategory::ALL {
            assert_eq!(RangeCategory::parse(category.name()), Some(category));
        }
    }

    #[test]
    fn test_default_label_parses_to_default() {
        assert_eq!(
            RangeCategory::parse(RangeCategory::DEFAULT_LABEL),
            Some(RangeCategory::default())
        );
    }
}
