//! HTML article text extraction.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Node, Selector};
use serde_json::Value;

/// Anything shorter than this is not treated as article text.
pub(crate) const MIN_TEXT_LEN: usize = 40;

/// Paragraphs shorter than this are bylines, captions, or share widgets.
const MIN_PARAGRAPH_LEN: usize = 40;

const BOILERPLATE_TAGS: &[&str] = &[
    "script", "style", "noscript", "nav", "header", "footer", "aside", "form", "figure",
];

static SCRIPT_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("script[type]").expect("valid selector"));
static ARTICLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("article").expect("valid selector"));
static PARAGRAPH_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p").expect("valid selector"));
static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("title").expect("valid selector"));
static META_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("meta[content]").expect("valid selector"));

/// Extracts the main article text from an HTML document.
///
/// Tries, in order: JSON-LD article nodes (`headline` + `articleBody`), body
/// paragraphs (inside `<article>` when present), then title plus meta
/// description. Returns `None` when nothing reaches the minimum length.
#[must_use]
pub fn extract_article_text(html: &str) -> Option<String> {
    let document = Html::parse_document(html);

    extract_json_ld_article_body(&document)
        .or_else(|| extract_paragraph_text(&document))
        .or_else(|| extract_metadata_text(&document))
}

fn extract_json_ld_article_body(document: &Html) -> Option<String> {
    let mut best = String::new();

    for script in document.select(&SCRIPT_SELECTOR) {
        let is_json_ld = script
            .value()
            .attr("type")
            .is_some_and(|t| t.trim().eq_ignore_ascii_case("application/ld+json"));
        if !is_json_ld {
            continue;
        }

        let raw = script.text().collect::<String>();
        let raw = raw.trim();
        if raw.is_empty() {
            continue;
        }
        let Ok(value) = serde_json::from_str::<Value>(raw) else {
            continue;
        };

        let mut candidates = Vec::new();
        collect_json_ld_candidates(&value, &mut candidates);
        if let Some(candidate) = candidates.into_iter().max_by_key(String::len) {
            if candidate.len() > best.len() {
                best = candidate;
            }
        }
    }

    long_enough(best)
}

fn collect_json_ld_candidates(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::Object(map) => {
            if looks_like_article_node(map.get("@type")) {
                let body = map
                    .get("articleBody")
                    .and_then(Value::as_str)
                    .map(clean_text)
                    .unwrap_or_default();

                if !body.is_empty() {
                    let headline = map
                        .get("headline")
                        .or_else(|| map.get("name"))
                        .and_then(Value::as_str)
                        .map(clean_text)
                        .unwrap_or_default();

                    if headline.is_empty() || body.starts_with(&headline) {
                        out.push(body);
                    } else {
                        out.push(format!("{headline}\n\n{body}"));
                    }
                }
            }

            for child in map.values() {
                collect_json_ld_candidates(child, out);
            }
        }
        Value::Array(items) => {
            for child in items {
                collect_json_ld_candidates(child, out);
            }
        }
        _ => {}
    }
}

fn looks_like_article_node(node_type: Option<&Value>) -> bool {
    let is_article = |s: &str| {
        let lower = s.to_lowercase();
        lower.contains("article") || lower.contains("blogposting") || lower.contains("report")
    };

    match node_type {
        Some(Value::String(s)) => is_article(s),
        Some(Value::Array(values)) => values.iter().filter_map(Value::as_str).any(is_article),
        _ => false,
    }
}

fn extract_paragraph_text(document: &Html) -> Option<String> {
    let article = document
        .select(&ARTICLE_SELECTOR)
        .find(|article| !inside_boilerplate(article));

    if let Some(article) = article {
        if let Some(text) = join_paragraphs(article.select(&PARAGRAPH_SELECTOR)) {
            return Some(text);
        }
    }

    join_paragraphs(document.select(&PARAGRAPH_SELECTOR))
}

fn join_paragraphs<'a>(paragraphs: impl Iterator<Item = ElementRef<'a>>) -> Option<String> {
    let paragraphs: Vec<String> = paragraphs
        .filter(|p| !inside_boilerplate(p))
        .map(visible_text)
        .filter(|p| p.chars().count() >= MIN_PARAGRAPH_LEN)
        .collect();

    long_enough(paragraphs.join("\n\n"))
}

fn extract_metadata_text(document: &Html) -> Option<String> {
    let mut og_title = String::new();
    let mut description = String::new();

    for meta in document.select(&META_SELECTOR) {
        let element = meta.value();
        let key = element
            .attr("property")
            .or_else(|| element.attr("name"))
            .unwrap_or_default()
            .to_ascii_lowercase();
        let content = collapse_whitespace(element.attr("content").unwrap_or_default());

        match key.as_str() {
            "og:title" if og_title.is_empty() => og_title = content,
            "description" | "og:description" if description.is_empty() => description = content,
            _ => {}
        }
    }

    let title = if og_title.is_empty() {
        document
            .select(&TITLE_SELECTOR)
            .next()
            .map(|title| collapse_whitespace(&title.text().collect::<String>()))
            .unwrap_or_default()
    } else {
        og_title
    };

    let combined = match (title.is_empty(), description.is_empty()) {
        (false, false) => format!("{title}. {description}"),
        (true, false) => description,
        _ => return None,
    };

    long_enough(combined)
}

/// Text of `element`, skipping anything nested in a boilerplate tag.
fn visible_text(element: ElementRef<'_>) -> String {
    let text: String = element
        .descendants()
        .filter_map(|node| match node.value() {
            Node::Text(text) if !node.ancestors().any(|a| is_boilerplate(a.value())) => {
                Some(&**text)
            }
            _ => None,
        })
        .collect();
    collapse_whitespace(&text)
}

fn inside_boilerplate(element: &ElementRef<'_>) -> bool {
    element.ancestors().any(|a| is_boilerplate(a.value()))
}

fn is_boilerplate(node: &Node) -> bool {
    node.as_element()
        .is_some_and(|el| BOILERPLATE_TAGS.contains(&el.name()))
}

fn long_enough(text: String) -> Option<String> {
    if text.chars().count() < MIN_TEXT_LEN {
        return None;
    }
    Some(text)
}

/// Strips markup, decodes entities, and collapses whitespace.
fn clean_text(input: &str) -> String {
    let fragment = Html::parse_fragment(input);
    let text: String = fragment.root_element().text().collect();
    collapse_whitespace(&text)
}

pub(crate) fn collapse_whitespace(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}
