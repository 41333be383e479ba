//! Query primitives over a rendered page: by tag, by class, text, attribute.

use crate::error::{Result, ScrapeError};
use scraper::{ElementRef, Selector};

/// Selector matching elements with the given tag name
pub fn by_tag(tag: &str) -> Result<Selector> {
    parse(tag)
}

/// Selector matching elements carrying the given class
pub fn by_class(class: &str) -> Result<Selector> {
    parse(&format!(".{class}"))
}

fn parse(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ScrapeError::Selector {
        selector: css.to_string(),
        message: e.to_string(),
    })
}

/// First match below `scope`, in document order
pub fn first<'a>(scope: ElementRef<'a>, selector: &Selector) -> Option<ElementRef<'a>> {
    scope.select(selector).next()
}

/// Visible text of an element with runs of whitespace collapsed to one space
pub fn text(element: ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn attr<'a>(element: ElementRef<'a>, name: &str) -> Option<&'a str> {
    element.value().attr(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn test_text_collapses_whitespace_across_nodes() {
        let html = Html::parse_fragment("<li class=\"a\">  3 <span>pokoje</span>\n </li>");
        let selector = by_tag("li").unwrap();
        let li = first(html.root_element(), &selector).unwrap();
        assert_eq!(text(li), "3 pokoje");
        assert_eq!(attr(li, "class"), Some("a"));
        assert_eq!(attr(li, "id"), None);
    }

    #[test]
    fn test_by_class_matches_multi_class_element() {
        let html = Html::parse_fragment("<ul><li class=\"hidden-xs offer-item-area\">80 m²</li></ul>");
        let selector = by_class("offer-item-area").unwrap();
        let li = first(html.root_element(), &selector).unwrap();
        assert_eq!(text(li), "80 m²");
    }
}
