//! Static content store
//!
//! Holds the hand-authored tables the cards are rendered from:
//! - `languages.toml` - the language catalogue, in display order
//! - `paradigms.toml` - paradigm explanations keyed by badge tag
//! - `snippets.toml` - example programs keyed by language name
//! - `attributes.toml` - core attributes keyed by language name
//! - `facts.toml` - hover facts keyed by language name
//!
//! The built-in tables are embedded at compile time. A [`ContentBundle`] is
//! loaded once at startup and shared read-only afterwards. Lookups never
//! fail: absent snippets, attributes and facts resolve to placeholders.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::paradigm::ParadigmTag;

/// Placeholder shown in a bubble slot with no fact
pub const FACT_PLACEHOLDER: &str = "Interesting fact coming soon!";

/// Problem statement used when a language has no example program
pub const NO_PROBLEM_PLACEHOLDER: &str = "No example problem available";

/// Value used for every attribute of a language with no attribute entry
pub const NOT_AVAILABLE: &str = "N/A";

const LANGUAGES_FILE: &str = "languages.toml";
const PARADIGMS_FILE: &str = "paradigms.toml";
const SNIPPETS_FILE: &str = "snippets.toml";
const ATTRIBUTES_FILE: &str = "attributes.toml";
const FACTS_FILE: &str = "facts.toml";

const BUILTIN_LANGUAGES: &str = include_str!("../content/languages.toml");
const BUILTIN_PARADIGMS: &str = include_str!("../content/paradigms.toml");
const BUILTIN_SNIPPETS: &str = include_str!("../content/snippets.toml");
const BUILTIN_ATTRIBUTES: &str = include_str!("../content/attributes.toml");
const BUILTIN_FACTS: &str = include_str!("../content/facts.toml");

// ─────────────────────────────────────────────────────────────────────────────
// Content Types
// ─────────────────────────────────────────────────────────────────────────────

/// One language card's summary data
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LanguageEntry {
    /// Unique display name, also the key into the other tables
    pub name: String,
    /// Release year
    pub year: u16,
    /// Paradigm badges, in display order, no duplicates
    pub paradigms: Vec<ParadigmTag>,
    /// Homepage link
    pub link: String,
    pub description: String,
}

/// Explanatory content for one paradigm tag
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ParadigmExplanation {
    /// Full display name, e.g. "Functional Programming (FP)"
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub history: Option<String>,
    pub core_concepts: Vec<String>,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub example_languages: Vec<String>,
}

/// An example program for a language
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CodeSnippet {
    /// Short statement of the problem the program solves
    pub problem: String,
    /// Source text, rendered verbatim
    pub code: String,
}

impl CodeSnippet {
    /// Placeholder sample for a language with no example program
    pub fn placeholder(language: &str) -> Self {
        Self {
            problem: NO_PROBLEM_PLACEHOLDER.to_string(),
            code: format!(
                "// Example {language} snippet\nfunction greet() {{\n  console.log(\"Hello, world!\");\n}}"
            ),
        }
    }
}

/// Descriptive attributes shown in a card's attributes panel
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CoreAttributes {
    pub memory_model: String,
    pub compilation_model: String,
    pub runtime_environment: String,
    pub typical_use_cases: Vec<String>,
    pub execution_model: String,
    pub abstraction_level: String,
}

impl CoreAttributes {
    /// Placeholder attributes for a language with no attribute entry
    pub fn placeholder() -> Self {
        Self {
            memory_model: NOT_AVAILABLE.to_string(),
            compilation_model: NOT_AVAILABLE.to_string(),
            runtime_environment: NOT_AVAILABLE.to_string(),
            typical_use_cases: Vec::new(),
            execution_model: NOT_AVAILABLE.to_string(),
            abstraction_level: NOT_AVAILABLE.to_string(),
        }
    }

    /// Labelled rows in panel order
    pub fn rows(&self) -> [(&'static str, Cow<'_, str>); 6] {
        [
            ("Memory Model", Cow::Borrowed(self.memory_model.as_str())),
            (
                "Compilation Model",
                Cow::Borrowed(self.compilation_model.as_str()),
            ),
            (
                "Runtime Environment",
                Cow::Borrowed(self.runtime_environment.as_str()),
            ),
            (
                "Typical Use Cases",
                Cow::Owned(self.typical_use_cases.join(", ")),
            ),
            ("Execution Model", Cow::Borrowed(self.execution_model.as_str())),
            (
                "Abstraction Level",
                Cow::Borrowed(self.abstraction_level.as_str()),
            ),
        ]
    }
}

/// Shape of `languages.toml`
#[derive(Debug, Deserialize)]
struct LanguagesFile {
    #[serde(rename = "language", default)]
    languages: Vec<LanguageEntry>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Content Bundle
// ─────────────────────────────────────────────────────────────────────────────

/// The read-only content every card is rendered from
#[derive(Debug, Clone, Default)]
pub struct ContentBundle {
    languages: Vec<LanguageEntry>,
    paradigms: BTreeMap<ParadigmTag, ParadigmExplanation>,
    snippets: HashMap<String, CodeSnippet>,
    attributes: HashMap<String, CoreAttributes>,
    facts: HashMap<String, Vec<String>>,
}

/// Counts reported by `ptable --check`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentSummary {
    pub languages: usize,
    pub paradigms: usize,
    pub with_snippet: usize,
    pub with_attributes: usize,
    pub with_facts: usize,
}

impl ContentBundle {
    /// Build a bundle from already-parsed tables and validate it
    pub fn from_tables(
        languages: Vec<LanguageEntry>,
        paradigms: BTreeMap<ParadigmTag, ParadigmExplanation>,
        snippets: HashMap<String, CodeSnippet>,
        attributes: HashMap<String, CoreAttributes>,
        facts: HashMap<String, Vec<String>>,
    ) -> Result<Self> {
        let bundle = Self {
            languages,
            paradigms,
            snippets,
            attributes,
            facts,
        };
        bundle.validate()?;
        Ok(bundle)
    }

    /// Load the content embedded in the binary
    pub fn builtin() -> Result<Self> {
        let origin = Path::new("<builtin>");
        let languages: LanguagesFile = parse_table(BUILTIN_LANGUAGES, &origin.join(LANGUAGES_FILE))?;
        Self::from_tables(
            languages.languages,
            parse_table(BUILTIN_PARADIGMS, &origin.join(PARADIGMS_FILE))?,
            parse_table(BUILTIN_SNIPPETS, &origin.join(SNIPPETS_FILE))?,
            parse_table(BUILTIN_ATTRIBUTES, &origin.join(ATTRIBUTES_FILE))?,
            parse_table(BUILTIN_FACTS, &origin.join(FACTS_FILE))?,
        )
    }

    /// Load content from a directory of TOML tables
    ///
    /// `languages.toml` is required. A missing `paradigms.toml` falls back to
    /// the built-in explanations; the other tables are simply empty, so the
    /// placeholder policy applies to every language.
    pub fn load_dir(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            return Err(Error::content_not_found(dir));
        }

        let languages_path = dir.join(LANGUAGES_FILE);
        if !languages_path.exists() {
            return Err(Error::content_not_found(languages_path));
        }
        let languages: LanguagesFile = read_table(&languages_path)?;

        let paradigms_path = dir.join(PARADIGMS_FILE);
        let paradigms = if paradigms_path.exists() {
            read_table(&paradigms_path)?
        } else {
            debug!("No {} in {:?}, using built-in", PARADIGMS_FILE, dir);
            parse_table(BUILTIN_PARADIGMS, Path::new("<builtin>/paradigms.toml"))?
        };

        let bundle = Self::from_tables(
            languages.languages,
            paradigms,
            read_optional_table(&dir.join(SNIPPETS_FILE))?,
            read_optional_table(&dir.join(ATTRIBUTES_FILE))?,
            read_optional_table(&dir.join(FACTS_FILE))?,
        )?;

        info!(
            "Loaded {} languages from {}",
            bundle.languages.len(),
            dir.display()
        );
        Ok(bundle)
    }

    /// Check the bundle's structural invariants
    fn validate(&self) -> Result<()> {
        let mut names = HashSet::new();
        for language in &self.languages {
            if !names.insert(language.name.as_str()) {
                return Err(Error::content_invalid(format!(
                    "duplicate language '{}'",
                    language.name
                )));
            }

            let mut tags = HashSet::new();
            for tag in &language.paradigms {
                if !tags.insert(*tag) {
                    return Err(Error::content_invalid(format!(
                        "language '{}' lists paradigm {} twice",
                        language.name, tag
                    )));
                }
                if !self.paradigms.contains_key(tag) {
                    return Err(Error::content_invalid(format!(
                        "language '{}' uses paradigm {} which has no explanation",
                        language.name, tag
                    )));
                }
            }

            if let Err(e) = url::Url::parse(&language.link) {
                return Err(Error::content_invalid(format!(
                    "language '{}' has an invalid link '{}': {}",
                    language.name, language.link, e
                )));
            }
        }
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Lookups
    // ─────────────────────────────────────────────────────────

    /// All languages, in display order
    pub fn languages(&self) -> &[LanguageEntry] {
        &self.languages
    }

    pub fn language(&self, name: &str) -> Option<&LanguageEntry> {
        self.languages.iter().find(|l| l.name == name)
    }

    pub fn explanation(&self, tag: ParadigmTag) -> Option<&ParadigmExplanation> {
        self.paradigms.get(&tag)
    }

    /// Example program for a language, or the generated placeholder
    pub fn snippet(&self, language: &str) -> Cow<'_, CodeSnippet> {
        match self.snippets.get(language) {
            Some(snippet) => Cow::Borrowed(snippet),
            None => Cow::Owned(CodeSnippet::placeholder(language)),
        }
    }

    /// Core attributes for a language, or the "N/A" placeholder set
    pub fn attributes(&self, language: &str) -> Cow<'_, CoreAttributes> {
        match self.attributes.get(language) {
            Some(attributes) => Cow::Borrowed(attributes),
            None => Cow::Owned(CoreAttributes::placeholder()),
        }
    }

    /// Fact `index` for a language, or [`FACT_PLACEHOLDER`]
    pub fn fact(&self, language: &str, index: usize) -> &str {
        self.facts
            .get(language)
            .and_then(|facts| facts.get(index))
            .map(String::as_str)
            .unwrap_or(FACT_PLACEHOLDER)
    }

    /// Exactly `count` fact slots for a language, padded with placeholders
    pub fn fact_slots(&self, language: &str, count: usize) -> Vec<&str> {
        (0..count).map(|i| self.fact(language, i)).collect()
    }

    pub fn summary(&self) -> ContentSummary {
        let names = || self.languages.iter().map(|l| l.name.as_str());
        ContentSummary {
            languages: self.languages.len(),
            paradigms: self.paradigms.len(),
            with_snippet: names().filter(|n| self.snippets.contains_key(*n)).count(),
            with_attributes: names().filter(|n| self.attributes.contains_key(*n)).count(),
            with_facts: names()
                .filter(|n| self.facts.get(*n).is_some_and(|f| !f.is_empty()))
                .count(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// TOML helpers
// ─────────────────────────────────────────────────────────────────────────────

fn parse_table<T: for<'de> Deserialize<'de>>(text: &str, origin: &Path) -> Result<T> {
    toml::from_str(text).map_err(|e| Error::content_parse(origin, e.to_string()))
}

fn read_table<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let text = std::fs::read_to_string(path)?;
    parse_table(&text, path)
}

fn read_optional_table<T: for<'de> Deserialize<'de> + Default>(path: &Path) -> Result<T> {
    if path.exists() {
        read_table(path)
    } else {
        debug!("No content table at {:?}, using placeholders", path);
        Ok(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn entry(name: &str, paradigms: &[ParadigmTag]) -> LanguageEntry {
        LanguageEntry {
            name: name.to_string(),
            year: 2000,
            paradigms: paradigms.to_vec(),
            link: format!("https://example.org/{}", name.to_lowercase()),
            description: format!("{name} description"),
        }
    }

    fn builtin_paradigms() -> BTreeMap<ParadigmTag, ParadigmExplanation> {
        parse_table(BUILTIN_PARADIGMS, Path::new("paradigms.toml")).unwrap()
    }

    fn bare_bundle(languages: Vec<LanguageEntry>) -> ContentBundle {
        ContentBundle::from_tables(
            languages,
            builtin_paradigms(),
            HashMap::new(),
            HashMap::new(),
            HashMap::new(),
        )
        .unwrap()
    }

    #[test]
    fn test_builtin_content_loads() {
        let bundle = ContentBundle::builtin().unwrap();
        assert_eq!(bundle.languages().len(), 18);
        assert_eq!(bundle.languages()[0].name, "JavaScript");
        for tag in ParadigmTag::ALL {
            assert!(bundle.explanation(tag).is_some(), "missing {tag}");
        }
    }

    #[test]
    fn test_builtin_content_is_complete() {
        let bundle = ContentBundle::builtin().unwrap();
        let summary = bundle.summary();
        assert_eq!(summary.with_snippet, summary.languages);
        assert_eq!(summary.with_attributes, summary.languages);
        assert_eq!(summary.with_facts, summary.languages);
        assert_eq!(summary.paradigms, 5);
    }

    #[test]
    fn test_builtin_explanation_order_preserved() {
        let bundle = ContentBundle::builtin().unwrap();
        let fp = bundle.explanation(ParadigmTag::Functional).unwrap();
        assert!(fp.name.contains("Functional"));
        assert!(!fp.core_concepts.is_empty());
        assert!(fp.history.is_some());
        assert_eq!(fp.example_languages[0], "Haskell");
    }

    #[test]
    fn test_snippet_fallback_names_language_once() {
        let bundle = bare_bundle(vec![entry("Zig", &[ParadigmTag::Procedural])]);
        let snippet = bundle.snippet("Zig");
        assert_eq!(snippet.problem, NO_PROBLEM_PLACEHOLDER);
        assert_eq!(snippet.code.matches("Zig").count(), 1);
        assert_eq!(snippet.code, CodeSnippet::placeholder("Zig").code);
    }

    #[test]
    fn test_snippet_fallback_for_every_builtin_name() {
        let builtin = ContentBundle::builtin().unwrap();
        let bundle = bare_bundle(builtin.languages().to_vec());
        for language in bundle.languages() {
            let snippet = bundle.snippet(&language.name);
            assert_eq!(snippet.problem, NO_PROBLEM_PLACEHOLDER);
            assert_eq!(
                snippet.code.matches(language.name.as_str()).count(),
                1,
                "placeholder for {} should name it exactly once",
                language.name
            );
        }
    }

    #[test]
    fn test_attributes_fallback_all_not_available() {
        let bundle = bare_bundle(vec![entry("Zig", &[ParadigmTag::Procedural])]);
        let attributes = bundle.attributes("Zig");
        assert_eq!(attributes.memory_model, NOT_AVAILABLE);
        assert_eq!(attributes.compilation_model, NOT_AVAILABLE);
        assert_eq!(attributes.runtime_environment, NOT_AVAILABLE);
        assert!(attributes.typical_use_cases.is_empty());
        assert_eq!(attributes.execution_model, NOT_AVAILABLE);
        assert_eq!(attributes.abstraction_level, NOT_AVAILABLE);

        let rows = attributes.rows();
        assert_eq!(rows[3].0, "Typical Use Cases");
        assert_eq!(rows[3].1, "");
    }

    #[test]
    fn test_fact_slots_padded_with_placeholder() {
        let mut facts = HashMap::new();
        facts.insert(
            "Zig".to_string(),
            vec!["one".to_string(), "two".to_string()],
        );
        let bundle = ContentBundle::from_tables(
            vec![entry("Zig", &[ParadigmTag::Procedural])],
            builtin_paradigms(),
            HashMap::new(),
            HashMap::new(),
            facts,
        )
        .unwrap();

        let slots = bundle.fact_slots("Zig", 5);
        assert_eq!(slots.len(), 5);
        assert_eq!(&slots[..2], &["one", "two"]);
        assert!(slots[2..].iter().all(|s| *s == FACT_PLACEHOLDER));
        assert_eq!(bundle.fact("Unknown", 0), FACT_PLACEHOLDER);
    }

    #[test]
    fn test_fact_slots_truncate_long_lists() {
        let bundle = ContentBundle::builtin().unwrap();
        let slots = bundle.fact_slots("Python", 5);
        assert_eq!(slots.len(), 5);
        assert!(slots.iter().all(|s| *s != FACT_PLACEHOLDER));
    }

    #[test]
    fn test_duplicate_language_rejected() {
        let result = ContentBundle::from_tables(
            vec![
                entry("Go", &[ParadigmTag::Procedural]),
                entry("Go", &[ParadigmTag::Procedural]),
            ],
            builtin_paradigms(),
            HashMap::new(),
            HashMap::new(),
            HashMap::new(),
        );
        assert!(matches!(result, Err(Error::ContentInvalid { .. })));
    }

    #[test]
    fn test_duplicate_paradigm_rejected() {
        let result = ContentBundle::from_tables(
            vec![entry(
                "Go",
                &[ParadigmTag::Procedural, ParadigmTag::Procedural],
            )],
            builtin_paradigms(),
            HashMap::new(),
            HashMap::new(),
            HashMap::new(),
        );
        let err = result.unwrap_err();
        assert!(err.to_string().contains("twice"));
    }

    #[test]
    fn test_unexplained_paradigm_rejected() {
        let result = ContentBundle::from_tables(
            vec![entry("Prolog", &[ParadigmTag::Logic])],
            BTreeMap::new(),
            HashMap::new(),
            HashMap::new(),
            HashMap::new(),
        );
        assert!(matches!(result, Err(Error::ContentInvalid { .. })));
    }

    #[test]
    fn test_invalid_link_rejected() {
        let mut language = entry("Go", &[ParadigmTag::Procedural]);
        language.link = "not a url".to_string();
        let result = ContentBundle::from_tables(
            vec![language],
            builtin_paradigms(),
            HashMap::new(),
            HashMap::new(),
            HashMap::new(),
        );
        assert!(result.unwrap_err().to_string().contains("invalid link"));
    }

    #[test]
    fn test_load_dir_with_only_languages() {
        let temp = tempdir().unwrap();
        std::fs::write(
            temp.path().join("languages.toml"),
            r#"
[[language]]
name = "Zig"
year = 2016
paradigms = ["Procedural"]
link = "https://ziglang.org/"
description = "A systems language."
"#,
        )
        .unwrap();

        let bundle = ContentBundle::load_dir(temp.path()).unwrap();
        assert_eq!(bundle.languages().len(), 1);
        assert!(bundle.explanation(ParadigmTag::Procedural).is_some());
        assert_eq!(bundle.snippet("Zig").problem, NO_PROBLEM_PLACEHOLDER);
        assert_eq!(bundle.attributes("Zig").memory_model, NOT_AVAILABLE);
        assert_eq!(bundle.fact("Zig", 0), FACT_PLACEHOLDER);
    }

    #[test]
    fn test_load_dir_missing_languages_file() {
        let temp = tempdir().unwrap();
        let result = ContentBundle::load_dir(temp.path());
        assert!(matches!(result, Err(Error::ContentNotFound { .. })));
    }

    #[test]
    fn test_load_dir_not_a_directory() {
        let result = ContentBundle::load_dir(Path::new("/definitely/not/here"));
        assert!(matches!(result, Err(Error::ContentNotFound { .. })));
    }

    #[test]
    fn test_load_dir_reports_parse_errors_with_path() {
        let temp = tempdir().unwrap();
        std::fs::write(temp.path().join("languages.toml"), "[[language]\nname=").unwrap();
        let err = ContentBundle::load_dir(temp.path()).unwrap_err();
        assert!(matches!(err, Error::ContentParse { .. }));
        assert!(err.to_string().contains("languages.toml"));
    }
}
