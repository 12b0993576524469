//! HTML generation utilities for testing.
//!
//! Builds landing pages shaped like the portal's post-login page, with knobs to
//! remove or alter each part the scraper depends on.

use scraper::Html;

/// Builder for landing page fixtures with a fluent API.
///
/// The default page yields usage 812, bill 124.50, due 03/15 and the period
/// 02/01 to 03/01. Hidden inputs come first inside the container so the amount
/// due block can be dropped without another sibling taking its place.
#[derive(Debug, Clone)]
pub struct LandingPageBuilder {
    heading_text: Option<String>,
    amount_block: Option<String>,
    extra_blocks: Vec<String>,
    usage_data: Option<String>,
    usage_dates: Option<String>,
}

impl Default for LandingPageBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LandingPageBuilder {
    /// Creates a builder for a well-formed landing page.
    pub fn new() -> Self {
        Self {
            heading_text: Some("Total Amount Due By".to_string()),
            amount_block: Some(amount_block("03/15", "124.50")),
            extra_blocks: Vec::new(),
            usage_data: Some("[[0, 812], [1, 790]]".to_string()),
            usage_dates: Some("03/01,02/01".to_string()),
        }
    }

    /// Sets the text of the level-5 heading.
    pub fn with_heading_text(mut self, text: &str) -> Self {
        self.heading_text = Some(text.to_string());
        self
    }

    /// Removes the heading entirely.
    pub fn without_heading(mut self) -> Self {
        self.heading_text = None;
        self
    }

    /// Sets the due date and bill amount spans.
    pub fn with_amount_due(mut self, due_date: &str, bill: &str) -> Self {
        self.amount_block = Some(amount_block(due_date, bill));
        self
    }

    /// Replaces the markup of the block following the heading.
    pub fn with_amount_block(mut self, markup: &str) -> Self {
        self.amount_block = Some(markup.to_string());
        self
    }

    /// Removes the block following the heading.
    pub fn without_amount_block(mut self) -> Self {
        self.amount_block = None;
        self
    }

    /// Appends markup after the amount due block.
    pub fn with_extra_block(mut self, markup: &str) -> Self {
        self.extra_blocks.push(markup.to_string());
        self
    }

    /// Sets the `value` of the usage chart input.
    pub fn with_usage_data(mut self, value: &str) -> Self {
        self.usage_data = Some(value.to_string());
        self
    }

    /// Removes the usage chart input.
    pub fn without_usage_data(mut self) -> Self {
        self.usage_data = None;
        self
    }

    /// Sets the `value` of the period dates input.
    pub fn with_usage_dates(mut self, value: &str) -> Self {
        self.usage_dates = Some(value.to_string());
        self
    }

    /// Builds only the `#homepageContent` container.
    pub fn container_markup(&self) -> String {
        let mut content = String::new();

        if let Some(value) = &self.usage_data {
            content.push_str(&format!(
                r#"<input type="hidden" id="UsageDataArrHdn" value="{}">"#,
                value.replace('"', "&quot;")
            ));
            content.push('\n');
        }
        if let Some(value) = &self.usage_dates {
            content.push_str(&format!(
                r#"<input type="hidden" id="UsageDateArrHdn" value="{}">"#,
                value
            ));
            content.push('\n');
        }

        content.push_str("<div class=\"accountSummary\"><p>Welcome back</p></div>\n");

        match &self.heading_text {
            Some(text) => content.push_str(&format!("<div><h5>{}</h5></div>\n", text)),
            None => content.push_str("<div><h5>Account Summary</h5></div>\n"),
        }
        if let Some(block) = &self.amount_block {
            content.push_str(block);
            content.push('\n');
        }
        for block in &self.extra_blocks {
            content.push_str(block);
            content.push('\n');
        }

        format!(r#"<div id="homepageContent">{}</div>"#, content)
    }

    /// Builds the full HTML string.
    pub fn build(&self) -> String {
        format!(
            r#"<html><head><title>My Account</title></head><body>{}</body></html>"#,
            self.container_markup()
        )
    }

    /// Builds and parses the HTML document.
    pub fn build_document(&self) -> Html {
        Html::parse_document(&self.build())
    }
}

fn amount_block(due_date: &str, bill: &str) -> String {
    format!(
        r#"<div><span class="bodyTextGreen">{}</span><br><span class="bodyTextGreen">{}</span></div>"#,
        due_date, bill
    )
}

/// A page the portal would serve when login did not go through.
pub fn create_login_form_html() -> String {
    r#"<html><body><form id="loginForm"><input name="USER"><input name="PASSWORD" type="password"></form></body></html>"#
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_landing_page() {
        let html = LandingPageBuilder::new().build();

        assert!(html.contains(r#"<div id="homepageContent">"#));
        assert!(html.contains("<h5>Total Amount Due By</h5>"));
        assert!(html.contains(r#"<span class="bodyTextGreen">03/15</span>"#));
        assert!(html.contains(r#"id="UsageDataArrHdn" value="[[0, 812], [1, 790]]""#));
        assert!(html.contains(r#"id="UsageDateArrHdn" value="03/01,02/01""#));
    }

    #[test]
    fn test_without_heading() {
        let html = LandingPageBuilder::new().without_heading().build();
        assert!(!html.contains("Total Amount Due By"));
    }

    #[test]
    fn test_usage_data_quotes_are_escaped() {
        let html = LandingPageBuilder::new()
            .with_usage_data(r#"[["Mar", 812]]"#)
            .build();
        assert!(html.contains("[[&quot;Mar&quot;, 812]]"));
    }

    #[test]
    fn test_build_document_parses() {
        let document = LandingPageBuilder::new().build_document();
        let selector = scraper::Selector::parse("#homepageContent").unwrap();
        assert_eq!(document.select(&selector).count(), 1);
    }
}
