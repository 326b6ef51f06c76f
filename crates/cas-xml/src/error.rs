//! XML document errors.

use thiserror::Error;

/// Errors raised by the document layer while parsing or writing.
#[derive(Debug, Error)]
pub enum XmlError {
    /// The input is not well-formed XML.
    #[error("XML parse error: {0}")]
    Parse(String),

    /// The document contains no root element.
    #[error("document contains no root element")]
    NoRoot,

    /// Content was found after the document root element was closed.
    #[error("content after the document root element")]
    TrailingContent,

    /// Serializing an element tree failed.
    #[error("failed to write XML: {0}")]
    Write(String),
}

impl From<quick_xml::Error> for XmlError {
    fn from(err: quick_xml::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
