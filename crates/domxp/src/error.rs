//! Error types

use domxp_html::ParseError;
use domxp_xpath::QueryError;

pub type Result<T> = std::result::Result<T, Error>;

/// domxp error
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The parser refused the input outright (empty string).
    #[error("{message} : '{html}'")]
    InvalidHtmlProvided {
        message: String,
        html: String,
        #[source]
        source: ParseError,
    },

    /// Any other parser failure, e.g. strict parsing of broken markup
    #[error("failed to parse HTML")]
    Parse(#[source] ParseError),

    #[error(transparent)]
    Query(#[from] QueryError),
}

impl Error {
    pub(crate) fn invalid_html(target: &str, html: &str, source: ParseError) -> Self {
        Error::InvalidHtmlProvided {
            message: format!("Could not create {target} from provided html"),
            html: html.to_string(),
            source,
        }
    }

    /// Route a parser error: the illegal-argument case becomes
    /// `InvalidHtmlProvided`, everything else stays a parse error
    pub(crate) fn from_parse(target: &str, html: &str, source: ParseError) -> Self {
        if source.is_illegal_argument() {
            Self::invalid_html(target, html, source)
        } else {
            Error::Parse(source)
        }
    }

    pub fn is_invalid_html(&self) -> bool {
        matches!(self, Error::InvalidHtmlProvided { .. })
    }
}
