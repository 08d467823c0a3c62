//! Response classification and title extraction
//!
//! Decides whether a response is HTML by its `Content-Type` header and,
//! if it is, pulls a title out of the document.

use reqwest::header::CONTENT_TYPE;
use reqwest::Response;
use scraper::{Html, Selector};
use thiserror::Error;

/// What a successful response turned out to be
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Content-Type does not mention HTML; nothing to extract
    NotHtml,

    /// An HTML document, with its title if one was found
    Html { title: Option<String> },
}

impl Classification {
    /// The extracted title, falling back to `fallback`
    pub fn title_or(self, fallback: &str) -> String {
        match self {
            Classification::Html { title: Some(title) } => title,
            _ => fallback.to_string(),
        }
    }
}

/// The body of an HTML response could not be read
#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("failed to read HTML body: {source}")]
    Body { source: reqwest::Error },
}

/// Checks a Content-Type value for `html`, case-insensitively
///
/// A missing header is not HTML.
pub fn is_html(content_type: Option<&str>) -> bool {
    content_type
        .map(|value| value.to_ascii_lowercase().contains("html"))
        .unwrap_or(false)
}

/// Classifies a response, consuming its body only when it is HTML
pub async fn classify(response: Response) -> Result<Classification, ClassifyError> {
    // Header bytes outside visible ASCII are kept, not treated as missing
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned());

    if !is_html(content_type.as_deref()) {
        return Ok(Classification::NotHtml);
    }

    let body = response
        .text()
        .await
        .map_err(|source| ClassifyError::Body { source })?;

    Ok(Classification::Html {
        title: extract_title(&body),
    })
}

/// Extracts a title from an HTML document
///
/// The text of the first `<title>` wins; when it is missing or blank the
/// text of the first `<h1>` is used. Both are trimmed.
///
/// # Example
///
/// ```
/// use link_survey::survey::extract_title;
///
/// let html = "<html><body><h1> Welcome </h1></body></html>";
/// assert_eq!(extract_title(html), Some("Welcome".to_string()));
/// ```
pub fn extract_title(html: &str) -> Option<String> {
    let document = Html::parse_document(html);

    first_text(&document, "title").or_else(|| first_text(&document, "h1"))
}

/// Trimmed text of the first element matching `selector`, if non-empty
fn first_text(document: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;

    document
        .select(&selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty())
}
