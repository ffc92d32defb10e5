/// Markers bounding the job-description region of a posting page. This is
/// deliberate substring scanning, not HTML parsing: the pages carry the
/// description in a single known span, and anything smarter would change
/// which text gets counted.
const SUMMARY_OPEN: &str = "<span id=\"job_summary\" class=\"summary\">";
const SUMMARY_CLOSE: &str = "</span>";

/// Markup fragments and punctuation replaced by a single space before
/// tokenizing.
const CLEANUP: &[&str] = &[
    "<br>", "<ul>", "</ul>", "<li>", "</li>", "<b>", "</b>", "<em>", "<br/>", "</p>", "<p>", "(",
    ")", ";", ",", ":",
];

/// Pulls the description fragment out of a posting page and splits it into
/// raw tokens, original casing preserved. Pages without the opening marker
/// yield no tokens.
pub fn pull_description(html: &str) -> Vec<String> {
    let Some(start) = html.find(SUMMARY_OPEN) else {
        tracing::warn!("No job summary found, discarding result");
        return Vec::new();
    };

    let after = &html[start + SUMMARY_OPEN.len()..];
    // Everything up to the first closing marker; the full remainder when the
    // page never closes the span.
    let body = after.split(SUMMARY_CLOSE).next().unwrap_or(after);

    let mut text = body.to_string();
    for code in CLEANUP {
        text = text.replace(code, " ");
    }

    text.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_marker_yields_no_tokens() {
        assert!(pull_description("<html><body>No summary here</body></html>").is_empty());
        assert!(pull_description("").is_empty());
    }

    #[test]
    fn test_punctuation_replaced_by_spaces() {
        let html = r#"<span id="job_summary" class="summary">Go, C++; and Rust!</span>"#;
        let tokens = pull_description(html);
        assert_eq!(tokens, vec!["Go", "C++", "and", "Rust!"]);
    }

    #[test]
    fn test_markup_stripped() {
        let html = concat!(
            r#"<span id="job_summary" class="summary">"#,
            "<p>We build<br>things:</p><ul><li>services</li><li><b>tools</b></li></ul>",
            "</span>"
        );
        let tokens = pull_description(html);
        assert_eq!(tokens, vec!["We", "build", "things", "services", "tools"]);
    }

    #[test]
    fn test_text_outside_markers_ignored() {
        let html = concat!(
            "<html><title>ignored</title>",
            r#"<span id="job_summary" class="summary">inside words</span>"#,
            "<footer>also ignored</footer></html>"
        );
        let tokens = pull_description(html);
        assert_eq!(tokens, vec!["inside", "words"]);
    }

    #[test]
    fn test_unclosed_summary_takes_remainder() {
        let html = r#"<span id="job_summary" class="summary">rest of the document"#;
        let tokens = pull_description(html);
        assert_eq!(tokens, vec!["rest", "of", "the", "document"]);
    }

    #[test]
    fn test_casing_preserved() {
        let html = r#"<span id="job_summary" class="summary">Android SDK android</span>"#;
        let tokens = pull_description(html);
        assert_eq!(tokens, vec!["Android", "SDK", "android"]);
    }
}
