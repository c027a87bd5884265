use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use super::{DomNode, MarkupEngine, NavigableTree};

static WS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// The shipped engine: scraper's html5ever tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct Html5everEngine;

impl MarkupEngine for Html5everEngine {
    type Tree = Html;

    fn parse_tree(&self, html: &str) -> Html {
        Html::parse_document(html)
    }
}

impl NavigableTree for Html {
    fn root<'a>(&'a self) -> impl DomNode + 'a {
        self.root_element()
    }
}

// Markers come from the const tables in parser::markers and are plain
// class/tag identifiers, so selector construction cannot fail.
fn class_selector(class: &str) -> Selector {
    Selector::parse(&format!(".{class}")).unwrap()
}

fn tag_selector(tag: &str) -> Selector {
    Selector::parse(tag).unwrap()
}

impl<'a> DomNode for ElementRef<'a> {
    fn find_class(self, class: &str) -> Option<Self> {
        self.select(&class_selector(class)).next()
    }

    fn find_all_class(self, class: &str) -> Vec<Self> {
        self.select(&class_selector(class)).collect()
    }

    fn find_all_tag(self, tag: &str) -> Vec<Self> {
        self.select(&tag_selector(tag)).collect()
    }

    fn text_content(self) -> String {
        let raw: String = self.text().collect();
        WS.replace_all(raw.trim(), " ").into_owned()
    }

    fn child_elements(self) -> Vec<Self> {
        self.children().filter_map(ElementRef::wrap).collect()
    }
}

// ── Tests ──
