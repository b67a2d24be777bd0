//! Fallback-selector combinator.
//!
//! Site markup shifts often; every extracted field is resolved by trying an
//! ordered list of [`FieldRule`]s and short-circuiting on the first non-empty
//! result. The rule tables themselves live in [`crate::rules`].

use scraper::ElementRef;

/// One extraction strategy: a CSS selector scoped to the current element,
/// reading either the matched element's text content (`attr: None`) or a
/// named attribute.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FieldRule {
    pub selector: &'static str,
    pub attr: Option<&'static str>,
}

/// Evaluates `rules` in order against `scope` and returns the first
/// non-empty, trimmed result.
pub(crate) fn first_match(scope: &ElementRef<'_>, rules: &[FieldRule]) -> Option<String> {
    for rule in rules {
        let Ok(selector) = scraper::Selector::parse(rule.selector) else {
            tracing::debug!(selector = rule.selector, "skipping unparseable selector");
            continue;
        };
        for element in scope.select(&selector) {
            let value = match rule.attr {
                Some(attr) => element.value().attr(attr).unwrap_or_default().to_string(),
                None => element.text().collect::<String>(),
            };
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }
    }
    None
}

/// Truncates to at most `max` characters on a char boundary.
pub(crate) fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    fn with_first_div<F: FnOnce(ElementRef<'_>)>(html: &str, f: F) {
        let doc = Html::parse_document(html);
        let sel = Selector::parse("div").unwrap();
        let element = doc.select(&sel).next().expect("no div in fixture");
        f(element);
    }

    #[test]
    fn first_rule_wins_when_non_empty() {
        let rules = [
            FieldRule {
                selector: "h3",
                attr: None,
            },
            FieldRule {
                selector: ".title",
                attr: None,
            },
        ];
        with_first_div(
            r#"<div><h3> Cat Pages </h3><span class="title">backup</span></div>"#,
            |el| {
                assert_eq!(first_match(&el, &rules).as_deref(), Some("Cat Pages"));
            },
        );
    }

    #[test]
    fn empty_match_falls_through_to_next_rule() {
        let rules = [
            FieldRule {
                selector: "h3",
                attr: None,
            },
            FieldRule {
                selector: ".title",
                attr: None,
            },
        ];
        with_first_div(
            r#"<div><h3>   </h3><span class="title">backup</span></div>"#,
            |el| {
                assert_eq!(first_match(&el, &rules).as_deref(), Some("backup"));
            },
        );
    }

    #[test]
    fn attribute_rule_reads_attr_not_text() {
        let rules = [FieldRule {
            selector: "[data-title]",
            attr: Some("data-title"),
        }];
        with_first_div(
            r#"<div><a data-title="Fox Print">ignored text</a></div>"#,
            |el| {
                assert_eq!(first_match(&el, &rules).as_deref(), Some("Fox Print"));
            },
        );
    }

    #[test]
    fn no_rule_matches_yields_none() {
        let rules = [FieldRule {
            selector: ".missing",
            attr: None,
        }];
        with_first_div("<div><p>hi</p></div>", |el| {
            assert!(first_match(&el, &rules).is_none());
        });
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate_chars("héllo wörld", 6), "héllo ");
        assert_eq!(truncate_chars("short", 100), "short");
        let long = "x".repeat(150);
        assert_eq!(truncate_chars(&long, 100).chars().count(), 100);
    }
}
