//! Extraction of the billing record from the Dominion Energy landing page.

use scraper::{ElementRef, Html, Node, Selector};

use crate::dominion::helper::{
    child_elements, element_text, html_selector, input_value, parse_amount, select_first,
    select_first_in,
};
use crate::dominion::literal::{parse_literal, Literal};
use crate::dominion::parser_traits::HtmlParser;
use crate::dominion::schema::LayoutSchema;
use crate::error::ParseError;
use crate::model::BillingRecord;

/// Position of the scan over the container's children.
///
/// The amount due block is the element immediately after the one holding the
/// heading. Only the first heading counts; the scan ends once that block has
/// been read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    SeekingHeader,
    CapturingNextBlock,
}

/// Parser for the landing page shown after logging in to the portal.
#[derive(Debug, Clone, Default)]
pub struct DominionParser {
    schema: LayoutSchema,
}

impl DominionParser {
    pub fn new(schema: LayoutSchema) -> Self {
        Self { schema }
    }

    /// Scans the container's children for the heading and reads the block after it.
    ///
    /// Returns `None` when no heading is present, or when it sits in the last child.
    fn scan_amount_due(&self, container: ElementRef) -> Result<Option<(String, f64)>, ParseError> {
        let heading = html_selector(self.schema.heading_selector())?;
        let mut state = ScanState::SeekingHeader;

        for child in child_elements(container) {
            match state {
                ScanState::SeekingHeader => {
                    if self.has_heading(child, &heading) {
                        tracing::debug!(
                            "Found '{}' heading in <{}>",
                            self.schema.heading_text,
                            child.value().name()
                        );
                        state = ScanState::CapturingNextBlock;
                    }
                }
                ScanState::CapturingNextBlock => {
                    return self.read_amount_due(child).map(Some);
                }
            }
        }

        tracing::debug!("No amount due block found (state: {:?})", state);
        Ok(None)
    }

    /// A heading matches only when its sole child is the marker text, untrimmed.
    fn has_heading(&self, element: ElementRef, heading: &Selector) -> bool {
        element.select(heading).any(|h| {
            let mut children = h.children();
            match (children.next().map(|node| node.value()), children.next()) {
                (Some(Node::Text(text)), None) => &**text == self.schema.heading_text,
                _ => false,
            }
        })
    }

    /// Reads due date then bill amount from the two value spans of `block`.
    fn read_amount_due(&self, block: ElementRef) -> Result<(String, f64), ParseError> {
        let value_selector = self.schema.value_selector();
        let selector = html_selector(&value_selector)?;
        let spans: Vec<String> = block.select(&selector).take(2).map(element_text).collect();

        let [due_date, bill_text] = <[String; 2]>::try_from(spans).map_err(|spans| {
            ParseError::unexpected_shape(
                &value_selector,
                format!(
                    "expected 2 spans after '{}', found {}",
                    self.schema.heading_text,
                    spans.len()
                ),
            )
        })?;

        if due_date.is_empty() {
            return Err(ParseError::unexpected_shape(
                &value_selector,
                "due date span is empty",
            ));
        }
        let bill = parse_amount(&bill_text, &value_selector)?;
        Ok((due_date, bill))
    }

    /// Reads usage and the service period from the hidden chart inputs.
    fn read_usage_period(&self, container: ElementRef) -> Result<(f64, String, String), ParseError> {
        let usage_selector = self.schema.usage_selector();
        let usage_input = select_first_in(container, &usage_selector)?;
        let literal = parse_literal(input_value(usage_input, &usage_selector)?, &usage_selector)?;
        let usage = first_row_usage(&literal, &usage_selector)?;

        let dates_selector = self.schema.dates_selector();
        let dates_input = select_first_in(container, &dates_selector)?;
        let dates: Vec<&str> = input_value(dates_input, &dates_selector)?
            .split(',')
            .map(str::trim)
            .collect();

        match dates.as_slice() {
            [end, start, ..] if !end.is_empty() && !start.is_empty() => {
                Ok((usage, start.to_string(), end.to_string()))
            }
            _ => Err(ParseError::unexpected_shape(
                dates_selector,
                format!("expected at least two dates, found {:?}", dates),
            )),
        }
    }
}

/// Second column of the first row of a list-of-lists usage literal.
fn first_row_usage(literal: &Literal, element: &str) -> Result<f64, ParseError> {
    let rows = literal
        .as_list()
        .ok_or_else(|| ParseError::unexpected_shape(element, "expected a list of rows"))?;

    if let Some(index) = rows.iter().position(|row| row.as_list().is_none()) {
        return Err(ParseError::unexpected_shape(
            element,
            format!("row {} is not a list", index),
        ));
    }

    let first = rows
        .first()
        .and_then(Literal::as_list)
        .ok_or_else(|| ParseError::unexpected_shape(element, "usage data has no rows"))?;

    match first.get(1) {
        Some(cell) => cell.as_f64().ok_or_else(|| {
            ParseError::unexpected_shape(
                element,
                format!("usage value is not numeric: {:?}", cell),
            )
        }),
        None => Err(ParseError::unexpected_shape(
            element,
            "first row has no usage column",
        )),
    }
}

impl HtmlParser for DominionParser {
    type Output = BillingRecord;

    fn name(&self) -> &'static str {
        "dominion"
    }

    fn parse(&self, document: &Html) -> Result<Self::Output, ParseError> {
        let container = select_first(document, &self.schema.container_selector())?;

        let amount_due = self.scan_amount_due(container)?;
        let (usage, service_start, service_end) = self.read_usage_period(container)?;

        let mut record = BillingRecord::default();
        if let Some((due_date, bill)) = amount_due {
            record.set_amount_due(due_date, bill);
        }
        record.set_usage_period(usage, service_start, service_end);
        Ok(record)
    }
}
