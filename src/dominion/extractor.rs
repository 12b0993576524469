//! Caller-facing field extractor.

use scraper::Html;

use crate::dominion::parser_traits::HtmlParser;
use crate::dominion::parsers::DominionParser;
use crate::dominion::schema::DOMINION_LANDING_PAGE;
use crate::error::ParseError;
use crate::model::BillingRecord;

/// Billing fields extracted from one landing page.
///
/// Extraction happens once, inside the constructor. The document can be
/// dropped afterwards; the extractor only keeps the record.
#[derive(Debug, Clone)]
pub struct BillExtractor {
    record: BillingRecord,
}

impl BillExtractor {
    /// Extracts with the Dominion Energy landing page layout.
    pub fn new(document: &Html) -> Result<Self, ParseError> {
        Self::with_parser(&DominionParser::new(DOMINION_LANDING_PAGE), document)
    }

    /// Extracts with any parser producing a [`BillingRecord`].
    pub fn with_parser<P>(parser: &P, document: &Html) -> Result<Self, ParseError>
    where
        P: HtmlParser<Output = BillingRecord>,
    {
        let record = parser.parse(document).inspect_err(|e| {
            tracing::debug!("{} parser failed at {}: {}", parser.name(), e.element(), e)
        })?;
        if !record.is_complete() {
            tracing::warn!("{} parser left some billing fields unset", parser.name());
        }
        Ok(Self { record })
    }

    pub fn usage(&self) -> Option<f64> {
        self.record.usage()
    }

    pub fn bill(&self) -> Option<f64> {
        self.record.bill()
    }

    pub fn service_start(&self) -> Option<&str> {
        self.record.service_start()
    }

    pub fn service_end(&self) -> Option<&str> {
        self.record.service_end()
    }

    pub fn due_date(&self) -> Option<&str> {
        self.record.due_date()
    }

    pub fn record(&self) -> &BillingRecord {
        &self.record
    }
}
