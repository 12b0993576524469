//! Trait seam between the session client and provider-specific extraction.
//!
//! A parser receives the landing page that the client fetched and turns it into
//! domain data. New providers add a parser; the client does not change.

use crate::error::ParseError;
use scraper::Html;

/// Core trait for parsing HTML content into domain-specific types.
///
/// # Example
/// ```ignore
/// use crate::dominion::parser_traits::HtmlParser;
/// use crate::error::ParseError;
/// use scraper::Html;
///
/// struct GreetingParser;
///
/// impl HtmlParser for GreetingParser {
///     type Output = String;
///
///     fn name(&self) -> &'static str {
///         "greeting"
///     }
///
///     fn parse(&self, _document: &Html) -> Result<Self::Output, ParseError> {
///         Ok("hello".to_string())
///     }
/// }
/// ```
pub trait HtmlParser {
    /// The type of data this parser produces
    type Output;

    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Parse HTML document into the output type
    fn parse(&self, document: &Html) -> Result<Self::Output, ParseError>;
}
