//! Structural class markers of the supported dictionary layout.

/// Top-level entry container, one per headword/part-of-speech block.
pub const ENTRY: &str = "entry-body__el";

pub const HEADWORD: &str = "headword";
pub const POS: &str = "pos";
pub const LANGUAGE: &str = "lang";

/// One region-tagged pronunciation block, holding [`REGION`] and [`IPA`].
pub const PRON_BLOCK: &str = "dpron-i";
pub const REGION: &str = "region";
pub const IPA: &str = "ipa";

/// Grammatical-category tag (countability and the like).
pub const GRAMMAR: &str = "gc";

/// Sense container nested under an entry.
pub const SENSE: &str = "dsense";
pub const DEFINITION: &str = "def";
pub const GUIDEWORD: &str = "guideword";
pub const ALTERNATIVE: &str = "var";
pub const EXAMPLE: &str = "eg";
