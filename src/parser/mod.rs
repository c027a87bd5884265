pub mod entry;
pub mod markers;
pub mod sense;

use crate::dom::{DomNode, Html5everEngine, MarkupEngine, NavigableTree};
use crate::error::Error;
use crate::lemma::Lemma;

/// Parse a raw dictionary page with the default engine.
pub fn parse(html: &str) -> Result<Vec<Lemma>, Error> {
    parse_with_engine(html, &Html5everEngine)
}

/// Parse a raw dictionary page with a caller-selected markup engine.
pub fn parse_with_engine<E: MarkupEngine>(html: &str, engine: &E) -> Result<Vec<Lemma>, Error> {
    let tree = engine.parse_tree(html);
    lemmas_from(tree.root())
}

/// Pipeline over an already-built tree: entries → senses → one record per
/// (entry, sense) pair, outer loop in entry order, inner in sense order.
fn lemmas_from<N: DomNode>(root: N) -> Result<Vec<Lemma>, Error> {
    let mut lemmas = Vec::new();
    for container in entry::segment(root)? {
        let Some(base) = entry::extract(container) else {
            continue;
        };
        for scope in sense::segment(container) {
            lemmas.push(sense::extract(scope, &base));
        }
    }
    Ok(lemmas)
}

// ── Tests ──
