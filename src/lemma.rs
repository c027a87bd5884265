use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// One dictionary record: a single sense of a headword.
///
/// A page parse yields one `Lemma` per (entry, sense) pair. Records from
/// the same entry share the entry-level fields (`lemma`, `part_of_speech`,
/// `language`, `transcriptions`, `gc`) and differ only in the sense-level
/// ones (`definition`, `guide_word`, `alternative_form`, `examples`).
///
/// `gc` is an unordered set internally and serializes as a JSON array in
/// arbitrary order; the serialized order carries no meaning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lemma {
    pub lemma: String,
    pub part_of_speech: String,
    pub language: String,
    pub transcriptions: HashMap<String, String>,
    pub definition: Option<String>,
    pub guide_word: Option<String>,
    pub alternative_form: Option<String>,
    pub examples: Vec<String>,
    pub gc: HashSet<String>,
}

impl Lemma {
    pub fn new(lemma: impl Into<String>) -> Self {
        Lemma {
            lemma: lemma.into(),
            part_of_speech: "unknown".to_string(),
            language: "unknown".to_string(),
            transcriptions: HashMap::new(),
            definition: None,
            guide_word: None,
            alternative_form: None,
            examples: Vec::new(),
            gc: HashSet::new(),
        }
    }

    /// Serialize to the compact JSON exchange form.
    pub fn encode(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(self)?)
    }

    /// Inverse of [`encode`](Self::encode). A missing required key
    /// (any non-optional field) fails with [`Error::Decode`]; the three
    /// optional keys decode as `None` when absent.
    pub fn decode(json: &str) -> Result<Lemma, Error> {
        Ok(serde_json::from_str(json)?)
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Lemma {
        let mut lemma = Lemma::new("run");
        lemma.part_of_speech = "verb".to_string();
        lemma.language = "English".to_string();
        lemma
            .transcriptions
            .insert("uk".to_string(), "rʌn".to_string());
        lemma
            .transcriptions
            .insert("us".to_string(), "rʌn".to_string());
        lemma.definition = Some("to move fast on foot".to_string());
        lemma.guide_word = Some("GO QUICKLY".to_string());
        lemma.examples = vec![
            "She ran for the bus.".to_string(),
            "He runs every morning.".to_string(),
        ];
        lemma.gc.insert("I".to_string());
        lemma.gc.insert("T".to_string());
        lemma
    }

    #[test]
    fn round_trip() {
        let original = sample();
        let decoded = Lemma::decode(&original.encode().unwrap()).unwrap();
        assert_eq!(original, decoded);
    }

    #[test]
    fn round_trip_minimal() {
        let original = Lemma::new("word");
        let decoded = Lemma::decode(&original.encode().unwrap()).unwrap();
        assert_eq!(original, decoded);
    }

    #[test]
    fn decode_missing_required_key_fails() {
        // No "lemma" key
        let json = r#"{
            "part_of_speech": "noun",
            "language": "English",
            "transcriptions": {},
            "definition": null,
            "guide_word": null,
            "alternative_form": null,
            "examples": [],
            "gc": []
        }"#;
        assert!(matches!(Lemma::decode(json), Err(Error::Decode(_))));
    }

    #[test]
    fn decode_missing_optional_keys_defaults_to_none() {
        let json = r#"{
            "lemma": "run",
            "part_of_speech": "verb",
            "language": "English",
            "transcriptions": {},
            "examples": [],
            "gc": ["I"]
        }"#;
        let lemma = Lemma::decode(json).unwrap();
        assert_eq!(lemma.definition, None);
        assert_eq!(lemma.guide_word, None);
        assert_eq!(lemma.alternative_form, None);
        assert!(lemma.gc.contains("I"));
    }

    #[test]
    fn gc_equality_ignores_order() {
        let a = Lemma::decode(
            r#"{"lemma":"x","part_of_speech":"unknown","language":"unknown",
                "transcriptions":{},"definition":null,"guide_word":null,
                "alternative_form":null,"examples":[],"gc":["I","T"]}"#,
        )
        .unwrap();
        let b = Lemma::decode(
            r#"{"lemma":"x","part_of_speech":"unknown","language":"unknown",
                "transcriptions":{},"definition":null,"guide_word":null,
                "alternative_form":null,"examples":[],"gc":["T","I"]}"#,
        )
        .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn examples_equality_respects_order() {
        let mut a = Lemma::new("x");
        a.examples = vec!["first".to_string(), "second".to_string()];
        let mut b = Lemma::new("x");
        b.examples = vec!["second".to_string(), "first".to_string()];
        assert_ne!(a, b);
    }

    #[test]
    fn decode_duplicate_gc_tags_collapse() {
        let json = r#"{
            "lemma": "run",
            "part_of_speech": "verb",
            "language": "English",
            "transcriptions": {},
            "definition": null,
            "guide_word": null,
            "alternative_form": null,
            "examples": [],
            "gc": ["I", "I", "T"]
        }"#;
        let lemma = Lemma::decode(json).unwrap();
        assert_eq!(lemma.gc.len(), 2);
    }
}
