//! YAML frontmatter parsing.
//!
//! A document may start with a `---` delimited YAML block carrying `title`,
//! `description`, and `full`. Everything after the closing delimiter is the
//! markdown body.

use serde::Deserialize;

/// Frontmatter fields recognized at the top of a markdown document.
#[derive(Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub(crate) struct FrontMatter {
    /// Document title (overrides H1 extraction).
    pub title: Option<String>,
    /// Document description.
    pub description: Option<String>,
    /// Full-width display flag.
    pub full: bool,
}

/// Split a document into frontmatter and markdown body.
///
/// Documents without a frontmatter block return a default [`FrontMatter`]
/// and the full text as body. A malformed YAML block is an error — silently
/// rendering the delimiters as content would hide the typo.
pub(crate) fn split(text: &str) -> Result<(FrontMatter, &str), String> {
    let Some(rest) = strip_open_delimiter(text) else {
        return Ok((FrontMatter::default(), text));
    };

    let Some((yaml, body)) = split_close_delimiter(rest) else {
        return Err("unterminated frontmatter block".to_owned());
    };

    let matter = if yaml.trim().is_empty() {
        FrontMatter::default()
    } else {
        serde_yaml::from_str(yaml).map_err(|e| e.to_string())?
    };
    Ok((matter, body))
}

/// Strip the opening `---` line, returning the text after it.
fn strip_open_delimiter(text: &str) -> Option<&str> {
    text.strip_prefix("---\n")
        .or_else(|| text.strip_prefix("---\r\n"))
}

/// Find the closing `---` line, returning (yaml, body).
fn split_close_delimiter(rest: &str) -> Option<(&str, &str)> {
    // Empty frontmatter: closing delimiter immediately after the opening one.
    if let Some(body) = rest.strip_prefix("---\n").or_else(|| rest.strip_prefix("---\r\n")) {
        return Some(("", body));
    }
    if rest == "---" {
        return Some(("", ""));
    }

    // Closing delimiter on its own line; may also terminate the file.
    for marker in ["\n---\n", "\r\n---\r\n", "\n---\r\n", "\r\n---\n"] {
        if let Some(pos) = rest.find(marker) {
            return Some((&rest[..pos], &rest[pos + marker.len()..]));
        }
    }
    for marker in ["\n---", "\r\n---"] {
        if let Some(stripped) = rest.strip_suffix(marker) {
            return Some((stripped, ""));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_split_no_frontmatter() {
        let (matter, body) = split("# Title\n\nContent.").unwrap();

        assert_eq!(matter, FrontMatter::default());
        assert_eq!(body, "# Title\n\nContent.");
    }

    #[test]
    fn test_split_full_frontmatter() {
        let text = "---\ntitle: Intro\ndescription: Getting started\nfull: true\n---\n# Intro\n";

        let (matter, body) = split(text).unwrap();

        assert_eq!(matter.title.as_deref(), Some("Intro"));
        assert_eq!(matter.description.as_deref(), Some("Getting started"));
        assert!(matter.full);
        assert_eq!(body, "# Intro\n");
    }

    #[test]
    fn test_split_partial_frontmatter() {
        let (matter, body) = split("---\ntitle: Guide\n---\nContent.").unwrap();

        assert_eq!(matter.title.as_deref(), Some("Guide"));
        assert!(matter.description.is_none());
        assert!(!matter.full);
        assert_eq!(body, "Content.");
    }

    #[test]
    fn test_split_frontmatter_only() {
        let (matter, body) = split("---\ntitle: Bare\n---").unwrap();

        assert_eq!(matter.title.as_deref(), Some("Bare"));
        assert_eq!(body, "");
    }

    #[test]
    fn test_split_empty_frontmatter() {
        let (matter, body) = split("---\n---\nContent.").unwrap();

        assert_eq!(matter, FrontMatter::default());
        assert_eq!(body, "Content.");
    }

    #[test]
    fn test_split_unterminated_is_error() {
        let result = split("---\ntitle: Broken\n\nContent.");

        assert!(result.is_err());
    }

    #[test]
    fn test_split_invalid_yaml_is_error() {
        let result = split("---\ntitle: [unclosed\n---\nContent.");

        assert!(result.is_err());
    }

    #[test]
    fn test_split_unknown_fields_ignored() {
        let (matter, _) = split("---\ntitle: T\nauthor: someone\n---\nBody").unwrap();

        assert_eq!(matter.title.as_deref(), Some("T"));
    }

    #[test]
    fn test_split_dashes_in_body_untouched() {
        let (matter, body) = split("No frontmatter\n---\nstill body").unwrap();

        assert_eq!(matter, FrontMatter::default());
        assert_eq!(body, "No frontmatter\n---\nstill body");
    }
}
