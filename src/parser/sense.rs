use crate::dom::DomNode;
use crate::lemma::Lemma;

use super::markers;

/// Locate the sense containers of an entry, in document order.
///
/// An entry without sense structure is still a valid minimal entry: the
/// entry container itself becomes the single sense scope, so gloss and
/// example nodes sitting directly under the entry are still recovered.
pub fn segment<N: DomNode>(entry: N) -> Vec<N> {
    let senses = entry.find_all_class(markers::SENSE);
    if senses.is_empty() {
        vec![entry]
    } else {
        senses
    }
}

/// Populate the sense-level fields on top of the shared entry fields.
/// Absent fields stay `None`/empty; nothing at this level is an error.
pub fn extract<N: DomNode>(scope: N, base: &Lemma) -> Lemma {
    let mut lemma = base.clone();
    lemma.definition = first_text(scope, markers::DEFINITION);
    lemma.guide_word = first_text(scope, markers::GUIDEWORD);
    lemma.alternative_form = first_text(scope, markers::ALTERNATIVE);
    lemma.examples = scope
        .find_all_class(markers::EXAMPLE)
        .into_iter()
        .map(DomNode::text_content)
        .filter(|t| !t.is_empty())
        .collect();
    lemma
}

fn first_text<N: DomNode>(scope: N, class: &str) -> Option<String> {
    scope
        .find_class(class)
        .map(DomNode::text_content)
        .filter(|t| !t.is_empty())
}

// ── Tests ──
