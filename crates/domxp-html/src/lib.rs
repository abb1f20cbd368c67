//! domxp HTML loader
//!
//! Parses HTML with html5ever and copies the recovered tree into an
//! sxd-document package, which is what the XPath layer queries.

mod document;
mod options;
mod parser;

pub use document::Document;
pub use options::ParseOptions;
pub use parser::{Html5everParser, HtmlParser};

/// Parse an HTML string into a Document with default options
pub fn parse(html: &str) -> Result<Document, ParseError> {
    Html5everParser::new().parse(html)
}

/// Parse error
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The loader refuses empty input outright.
    #[error("empty string is not a loadable HTML document")]
    EmptyInput,

    #[error("malformed HTML ({count} parse errors, first: {first})")]
    Malformed { count: usize, first: String },
}

impl ParseError {
    /// Whether this is the loader's illegal-argument condition rather than
    /// a complaint about the markup itself
    pub fn is_illegal_argument(&self) -> bool {
        matches!(self, ParseError::EmptyInput)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_illegal_argument() {
        let err = parse("").unwrap_err();
        assert!(err.is_illegal_argument());
        assert!(matches!(err, ParseError::EmptyInput));
    }

    #[test]
    fn test_malformed_is_not_illegal_argument() {
        let err = ParseError::Malformed { count: 1, first: "Unexpected token".into() };
        assert!(!err.is_illegal_argument());
        assert!(err.to_string().contains("1 parse errors"));
    }
}
