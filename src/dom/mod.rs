//! Navigable-document seam between the extraction pipeline and whatever
//! HTML engine actually built the tree. The pipeline only ever talks to
//! these traits; swapping the engine cannot change extraction behavior.

pub mod html;

pub use html::Html5everEngine;

/// Builds a navigable tree from raw markup text.
pub trait MarkupEngine {
    type Tree: NavigableTree;

    fn parse_tree(&self, html: &str) -> Self::Tree;
}

/// A parsed document that can hand out its root node.
pub trait NavigableTree {
    fn root<'a>(&'a self) -> impl DomNode + 'a;
}

/// The capability set the extractors need from a tree node.
///
/// All lookups cover the node's descendants and yield matches in document
/// order. `text_content` returns trimmed text with internal whitespace
/// collapsed to single spaces.
pub trait DomNode: Copy {
    fn find_class(self, class: &str) -> Option<Self>;
    fn find_all_class(self, class: &str) -> Vec<Self>;
    fn find_all_tag(self, tag: &str) -> Vec<Self>;
    fn text_content(self) -> String;
    fn child_elements(self) -> Vec<Self>;
}
