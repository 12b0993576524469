//! Helper functions for reading values out of the landing page.

use crate::error::ParseError;
use scraper::{ElementRef, Html, Selector};

/// Creates a CSS selector from a string.
///
/// This is a wrapper around scraper's Selector::parse that converts
/// parsing errors into [`ParseError`] for consistent error handling.
pub fn html_selector(selector: &str) -> Result<Selector, ParseError> {
    Selector::parse(selector).map_err(|e| ParseError::invalid_selector(selector, e))
}

/// Returns the first element in document order matching `selector`.
///
/// Duplicates are not an error; later matches are ignored.
pub fn select_first<'a>(document: &'a Html, selector: &str) -> Result<ElementRef<'a>, ParseError> {
    let selector_obj = html_selector(selector)?;
    document
        .select(&selector_obj)
        .next()
        .ok_or_else(|| ParseError::element_not_found(selector))
}

/// Like [`select_first`], searching only below `scope`.
pub fn select_first_in<'a>(
    scope: ElementRef<'a>,
    selector: &str,
) -> Result<ElementRef<'a>, ParseError> {
    let selector_obj = html_selector(selector)?;
    scope
        .select(&selector_obj)
        .next()
        .ok_or_else(|| ParseError::element_not_found(selector))
}

/// Immediate child elements of `parent`, skipping text and comment nodes.
pub fn child_elements<'a>(parent: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    parent.children().filter_map(ElementRef::wrap)
}

/// Concatenated text of an element with surrounding whitespace removed.
pub fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Reads the `value` attribute of an input element.
pub fn input_value<'a>(element: ElementRef<'a>, selector: &str) -> Result<&'a str, ParseError> {
    element
        .value()
        .attr("value")
        .ok_or_else(|| ParseError::element_not_found(format!("{}[value]", selector)))
}

/// Parses a dollar amount such as `$1,124.50` into a number.
///
/// Currency symbols, thousands separators and whitespace are ignored. A leading
/// minus (credit balance) is kept. Any other character makes the text invalid.
pub fn parse_amount(text: &str, element: &str) -> Result<f64, ParseError> {
    let trimmed = text.trim();
    let (sign, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", trimmed),
    };

    let mut cleaned = String::from(sign);
    for c in rest.chars() {
        match c {
            '0'..='9' | '.' => cleaned.push(c),
            '$' | ',' => {}
            c if c.is_whitespace() => {}
            c => {
                return Err(ParseError::number_parse(
                    element,
                    text,
                    format!("unexpected character '{}'", c),
                ))
            }
        }
    }
    cleaned
        .parse::<f64>()
        .map_err(|e| ParseError::number_parse(element, text, e))
}
