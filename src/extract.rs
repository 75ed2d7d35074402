//! Response Extraction
//!
//! Pulls identifiers out of 5mods responses. Pages are parsed as HTML; the
//! comment endpoint answers with a JavaScript fragment, so the comment id is
//! matched with a regex instead.

use regex::Regex;
use scraper::{Html, Selector};
use std::sync::LazyLock;

use crate::error::PublishError;

static CSRF_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"meta[name="csrf-token"]"#).expect("valid csrf selector")
});

static MOD_ID_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div#file").expect("valid mod id selector"));

/// Matches `data-comment-id=\"<digits>\"`, with literal backslashes, as it
/// appears inside the quoted markup of the script blob
static COMMENT_ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"data-comment-id=\\"([0-9]+)\\""#).expect("valid comment id pattern")
});

/// Content of the first `<meta name="csrf-token">`, if present and non-empty
pub fn csrf_token(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    document
        .select(&CSRF_SELECTOR)
        .next()
        .and_then(|meta| meta.value().attr("content"))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
}

/// Numeric mod id from the `data-user-file-id` attribute of `div#file`
pub fn mod_id(html: &str) -> Result<String, PublishError> {
    let document = Html::parse_document(html);
    document
        .select(&MOD_ID_SELECTOR)
        .next()
        .and_then(|div| div.value().attr("data-user-file-id"))
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .ok_or(PublishError::MissingModId)
}

/// Comment id embedded in the script returned after posting a comment
pub fn comment_id(body: &str) -> Result<u64, PublishError> {
    COMMENT_ID_PATTERN
        .captures(body)
        .and_then(|caps| caps.get(1))
        .and_then(|id| id.as_str().parse().ok())
        .ok_or(PublishError::MissingCommentId)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csrf_token() {
        let html = r#"<html><head>
            <meta name="csrf-param" content="authenticity_token" />
            <meta name="csrf-token" content="abc123==" />
        </head><body></body></html>"#;

        assert_eq!(csrf_token(html), Some("abc123==".to_string()));
    }

    #[test]
    fn test_csrf_token_missing_or_empty() {
        assert_eq!(csrf_token("<html><head></head></html>"), None);
        assert_eq!(
            csrf_token(r#"<meta name="csrf-token" content="">"#),
            None
        );
    }

    #[test]
    fn test_mod_id() {
        let html = r#"<body><div id="file" class="file-page" data-user-file-id="987"></div></body>"#;
        assert_eq!(mod_id(html).unwrap(), "987");
    }

    #[test]
    fn test_mod_id_missing() {
        let err = mod_id(r#"<div id="file"></div>"#).unwrap_err();
        assert!(matches!(err, PublishError::MissingModId));

        let err = mod_id(r#"<div id="other" data-user-file-id="1"></div>"#).unwrap_err();
        assert!(matches!(err, PublishError::MissingModId));
    }

    #[test]
    fn test_comment_id_from_script_blob() {
        let body = r##"$("#comments").prepend("<div class=\"comment\" data-comment-id=\"12345\">Hi</div>");"##;
        assert_eq!(comment_id(body).unwrap(), 12345);
    }

    #[test]
    fn test_comment_id_ignores_unescaped_attribute() {
        let body = r#"<div data-comment-id="12345"></div>"#;
        assert!(matches!(
            comment_id(body).unwrap_err(),
            PublishError::MissingCommentId
        ));
    }

    #[test]
    fn test_comment_id_empty_digits() {
        let body = r#"data-comment-id=\"\""#;
        assert!(comment_id(body).is_err());
    }
}
