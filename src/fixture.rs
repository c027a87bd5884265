use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::lemma::Lemma;

/// On-disk exchange format: the pipeline's full output for one page.
#[derive(Debug, Serialize, Deserialize)]
pub struct FixtureFile {
    pub total: usize,
    pub lemmas: Vec<FixtureLemma>,
}

/// One recorded record. `lemma` stays a raw JSON value so partial
/// fixtures, listing only the fields under test, remain representable.
#[derive(Debug, Serialize, Deserialize)]
pub struct FixtureLemma {
    pub index: usize,
    pub lemma: Value,
}

/// Snapshot a parse result as a fixture.
pub fn from_lemmas(lemmas: &[Lemma]) -> Result<FixtureFile> {
    let lemmas = lemmas
        .iter()
        .enumerate()
        .map(|(index, lemma)| {
            Ok(FixtureLemma {
                index,
                lemma: serde_json::to_value(lemma)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(FixtureFile {
        total: lemmas.len(),
        lemmas,
    })
}

pub fn write(path: &Path, fixture: &FixtureFile) -> Result<()> {
    let json = serde_json::to_string_pretty(fixture)?;
    fs::write(path, json).with_context(|| format!("failed to write fixture {}", path.display()))
}

pub fn load(path: &Path) -> Result<FixtureFile> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read fixture {}", path.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("fixture {} is not valid exchange JSON", path.display()))
}

/// One failed check, with enough context to diagnose it.
#[derive(Debug)]
pub struct Mismatch {
    pub index: Option<usize>,
    pub field: Option<String>,
    pub message: String,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.index, &self.field) {
            (Some(i), Some(field)) => write!(f, "lemma[{i}].{field}: {}", self.message),
            (Some(i), None) => write!(f, "lemma[{i}]: {}", self.message),
            _ => write!(f, "{}", self.message),
        }
    }
}

/// Compare a recorded fixture against freshly parsed records.
///
/// A `total` mismatch rejects the whole fixture. Otherwise every field
/// present in a recorded lemma is checked against the fresh record at
/// the same index; absent fields are not checked. `gc` compares as a
/// set, since its serialized order carries no meaning.
pub fn compare(fixture: &FixtureFile, parsed: &[Lemma]) -> Vec<Mismatch> {
    if fixture.total != parsed.len() {
        return vec![Mismatch {
            index: None,
            field: None,
            message: format!(
                "record count mismatch: fixture has {}, page parsed to {}",
                fixture.total,
                parsed.len()
            ),
        }];
    }

    let mut mismatches = Vec::new();
    for recorded in &fixture.lemmas {
        let Some(fresh) = parsed.get(recorded.index) else {
            mismatches.push(Mismatch {
                index: Some(recorded.index),
                field: None,
                message: format!("index {} out of range", recorded.index),
            });
            continue;
        };
        let fresh = serde_json::to_value(fresh).unwrap_or(Value::Null);

        let Some(expected_fields) = recorded.lemma.as_object() else {
            mismatches.push(Mismatch {
                index: Some(recorded.index),
                field: None,
                message: "recorded lemma is not a JSON object".to_string(),
            });
            continue;
        };

        for (field, expected) in expected_fields {
            let actual = fresh.get(field);
            let equal = match (field.as_str(), actual) {
                ("gc", Some(actual)) => set_equal(expected, actual),
                (_, Some(actual)) => expected == actual,
                (_, None) => false,
            };
            if !equal {
                mismatches.push(Mismatch {
                    index: Some(recorded.index),
                    field: Some(field.clone()),
                    message: format!(
                        "expected {expected}, parsed {}",
                        actual.map_or_else(|| "<missing>".to_string(), Value::to_string)
                    ),
                });
            }
        }
    }
    mismatches
}

fn set_equal(a: &Value, b: &Value) -> bool {
    match (a.as_array(), b.as_array()) {
        (Some(a), Some(b)) => {
            let mut a: Vec<String> = a.iter().map(Value::to_string).collect();
            let mut b: Vec<String> = b.iter().map(Value::to_string).collect();
            a.sort();
            a.dedup();
            b.sort();
            b.dedup();
            a == b
        }
        _ => a == b,
    }
}

// ── Tests ──
