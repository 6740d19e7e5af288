//! Paradigm tags attached to language entries

use serde::{Deserialize, Serialize};

/// A programming-style classification from a fixed, closed set.
///
/// Content files spell the tags the way the badges display them
/// (`OOP`, `FP`, `Procedural`, `Declarative`, `Logic`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
pub enum ParadigmTag {
    #[serde(rename = "OOP")]
    ObjectOriented,
    #[serde(rename = "FP")]
    Functional,
    Procedural,
    Declarative,
    Logic,
}

impl ParadigmTag {
    /// Every tag, in badge display order
    pub const ALL: [ParadigmTag; 5] = [
        ParadigmTag::ObjectOriented,
        ParadigmTag::Functional,
        ParadigmTag::Procedural,
        ParadigmTag::Declarative,
        ParadigmTag::Logic,
    ];

    /// Short label shown on the badge
    pub fn label(&self) -> &'static str {
        match self {
            ParadigmTag::ObjectOriented => "OOP",
            ParadigmTag::Functional => "FP",
            ParadigmTag::Procedural => "Procedural",
            ParadigmTag::Declarative => "Declarative",
            ParadigmTag::Logic => "Logic",
        }
    }

    /// Parse a badge label back into a tag
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tag| tag.label() == label)
    }
}

impl std::fmt::Display for ParadigmTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip() {
        for tag in ParadigmTag::ALL {
            assert_eq!(ParadigmTag::from_label(tag.label()), Some(tag));
        }
        assert_eq!(ParadigmTag::from_label("Imperative"), None);
    }

    #[test]
    fn test_deserialize_short_spellings() {
        #[derive(Deserialize)]
        struct Doc {
            tags: Vec<ParadigmTag>,
        }

        let doc: Doc = toml::from_str(r#"tags = ["OOP", "FP", "Logic"]"#).unwrap();
        assert_eq!(
            doc.tags,
            vec![
                ParadigmTag::ObjectOriented,
                ParadigmTag::Functional,
                ParadigmTag::Logic
            ]
        );
    }

    #[test]
    fn test_unknown_tag_rejected() {
        #[derive(Debug, Deserialize)]
        #[allow(dead_code)]
        struct Doc {
            tags: Vec<ParadigmTag>,
        }

        assert!(toml::from_str::<Doc>(r#"tags = ["Reactive"]"#).is_err());
    }

    #[test]
    fn test_display_uses_badge_label() {
        assert_eq!(ParadigmTag::Functional.to_string(), "FP");
        assert_eq!(ParadigmTag::Declarative.to_string(), "Declarative");
    }
}
