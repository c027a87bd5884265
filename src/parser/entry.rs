use std::collections::{HashMap, HashSet};

use tracing::warn;

use crate::dom::DomNode;
use crate::error::Error;
use crate::lemma::Lemma;

use super::markers;

/// Locate all entry containers, in document order.
///
/// A page with none is not a layout we recognize. Failing loudly beats
/// returning an empty list, which could also mean "a valid page with no
/// entries".
pub fn segment<N: DomNode>(root: N) -> Result<Vec<N>, Error> {
    let entries = root.find_all_class(markers::ENTRY);
    if entries.is_empty() {
        return Err(Error::CannotParsePage);
    }
    Ok(entries)
}

/// Recover the fields shared by every sense of an entry.
///
/// Returns `None` for an entry block without headword text: it cannot
/// produce a valid record, and one broken block must not fail the page.
pub fn extract<N: DomNode>(container: N) -> Option<Lemma> {
    let headword = container
        .find_class(markers::HEADWORD)
        .map(DomNode::text_content)
        .filter(|t| !t.is_empty());
    let Some(headword) = headword else {
        warn!("skipping entry block without a headword");
        return None;
    };

    let mut lemma = Lemma::new(headword);
    if let Some(pos) = first_text(container, markers::POS) {
        lemma.part_of_speech = pos;
    }
    if let Some(language) = first_text(container, markers::LANGUAGE) {
        lemma.language = language;
    }
    lemma.transcriptions = transcriptions(container);
    lemma.gc = grammar_tags(container);
    Some(lemma)
}

/// One key per region. A region repeated later in the document replaces
/// the earlier value; a block missing its region or transcription
/// contributes nothing.
fn transcriptions<N: DomNode>(container: N) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for block in container.find_all_class(markers::PRON_BLOCK) {
        let region = first_text(block, markers::REGION);
        let ipa = first_text(block, markers::IPA);
        if let (Some(region), Some(ipa)) = (region, ipa) {
            map.insert(region, ipa);
        }
    }
    map
}

/// Union of every grammar tag in the entry, senses included.
fn grammar_tags<N: DomNode>(container: N) -> HashSet<String> {
    container
        .find_all_class(markers::GRAMMAR)
        .into_iter()
        .map(DomNode::text_content)
        .filter(|t| !t.is_empty())
        .collect()
}

fn first_text<N: DomNode>(scope: N, class: &str) -> Option<String> {
    scope
        .find_class(class)
        .map(DomNode::text_content)
        .filter(|t| !t.is_empty())
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn with_entry<R>(inner: &str, f: impl FnOnce(scraper::ElementRef<'_>) -> R) -> R {
        let html = format!(r#"<div class="entry-body__el">{inner}</div>"#);
        let tree = Html::parse_document(&html);
        let entry = tree
            .root_element()
            .find_class(markers::ENTRY)
            .expect("entry container");
        f(entry)
    }

    #[test]
    fn segment_rejects_entryless_page() {
        let tree = Html::parse_document("<html><body><p>nothing here</p></body></html>");
        assert!(matches!(
            segment(tree.root_element()),
            Err(Error::CannotParsePage)
        ));
    }

    #[test]
    fn defaults_when_labels_absent() {
        with_entry(r#"<span class="headword">cat</span>"#, |entry| {
            let lemma = extract(entry).unwrap();
            assert_eq!(lemma.lemma, "cat");
            assert_eq!(lemma.part_of_speech, "unknown");
            assert_eq!(lemma.language, "unknown");
            assert!(lemma.transcriptions.is_empty());
            assert!(lemma.gc.is_empty());
        });
    }

    #[test]
    fn missing_headword_skips_entry() {
        with_entry(r#"<span class="pos">noun</span>"#, |entry| {
            assert!(extract(entry).is_none());
        });
    }

    #[test]
    fn first_headword_wins() {
        let inner = r#"
            <span class="headword">first</span>
            <span class="headword">second</span>"#;
        with_entry(inner, |entry| {
            assert_eq!(extract(entry).unwrap().lemma, "first");
        });
    }

    #[test]
    fn pronunciation_block_missing_region_is_ignored() {
        let inner = r#"
            <span class="headword">cat</span>
            <span class="dpron-i"><span class="ipa">kat</span></span>
            <span class="dpron-i"><span class="region">us</span><span class="ipa">kæt</span></span>"#;
        with_entry(inner, |entry| {
            let lemma = extract(entry).unwrap();
            assert_eq!(lemma.transcriptions.len(), 1);
            assert_eq!(lemma.transcriptions["us"], "kæt");
        });
    }

    #[test]
    fn repeated_region_keeps_last() {
        let inner = r#"
            <span class="headword">cat</span>
            <span class="dpron-i"><span class="region">uk</span><span class="ipa">old</span></span>
            <span class="dpron-i"><span class="region">uk</span><span class="ipa">new</span></span>"#;
        with_entry(inner, |entry| {
            let lemma = extract(entry).unwrap();
            assert_eq!(lemma.transcriptions["uk"], "new");
        });
    }

    #[test]
    fn grammar_tags_union_over_whole_entry() {
        let inner = r#"
            <span class="headword">cat</span>
            <span class="gc">C</span>
            <div class="dsense"><span class="gc">U</span><span class="gc">C</span></div>"#;
        with_entry(inner, |entry| {
            let lemma = extract(entry).unwrap();
            assert_eq!(lemma.gc.len(), 2);
            assert!(lemma.gc.contains("C") && lemma.gc.contains("U"));
        });
    }
}
