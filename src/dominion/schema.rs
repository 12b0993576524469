//! Named locations of the billing fields on the landing page.
//!
//! All layout knowledge lives here. When the portal changes its markup, this is
//! the one place that needs to follow.

/// Selectors and marker text describing one landing page layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutSchema {
    /// Id of the element wrapping the billing widget.
    pub container_id: &'static str,
    /// Tag of the heading that announces the amount due block.
    pub heading_tag: &'static str,
    /// Exact text of that heading.
    pub heading_text: &'static str,
    /// Class of the spans holding due date then bill amount.
    pub value_class: &'static str,
    /// Id of the hidden input carrying the usage chart literal.
    pub usage_input_id: &'static str,
    /// Id of the hidden input carrying the comma separated period dates.
    pub dates_input_id: &'static str,
}

impl LayoutSchema {
    pub fn container_selector(&self) -> String {
        format!("#{}", self.container_id)
    }

    pub fn heading_selector(&self) -> &'static str {
        self.heading_tag
    }

    pub fn value_selector(&self) -> String {
        format!(".{}", self.value_class)
    }

    pub fn usage_selector(&self) -> String {
        format!("input#{}", self.usage_input_id)
    }

    pub fn dates_selector(&self) -> String {
        format!("input#{}", self.dates_input_id)
    }
}

pub const DOMINION_LANDING_PAGE: LayoutSchema = LayoutSchema {
    container_id: "homepageContent",
    heading_tag: "h5",
    heading_text: "Total Amount Due By",
    value_class: "bodyTextGreen",
    usage_input_id: "UsageDataArrHdn",
    dates_input_id: "UsageDateArrHdn",
};

impl Default for LayoutSchema {
    fn default() -> Self {
        DOMINION_LANDING_PAGE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dominion_selectors() {
        let schema = LayoutSchema::default();
        assert_eq!(schema.container_selector(), "#homepageContent");
        assert_eq!(schema.heading_selector(), "h5");
        assert_eq!(schema.value_selector(), ".bodyTextGreen");
        assert_eq!(schema.usage_selector(), "input#UsageDataArrHdn");
        assert_eq!(schema.dates_selector(), "input#UsageDateArrHdn");
    }
}
