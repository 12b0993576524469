//! Billing data extracted from the landing page.

use serde::Serialize;
use std::fmt;

/// The five fields of the current bill.
///
/// Every field starts unset. A parser fills each of them at most once; after a
/// successful scrape of a well-formed page all five are set. Bill and due date
/// stay unset when the page carries no "amount due" block at all.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BillingRecord {
    usage: Option<f64>,
    bill: Option<f64>,
    service_start: Option<String>,
    service_end: Option<String>,
    due_date: Option<String>,
}

impl BillingRecord {
    /// Usage for the current bill in kWh.
    pub fn usage(&self) -> Option<f64> {
        self.usage
    }

    /// Amount of the current bill in dollars.
    pub fn bill(&self) -> Option<f64> {
        self.bill
    }

    pub fn service_start(&self) -> Option<&str> {
        self.service_start.as_deref()
    }

    pub fn service_end(&self) -> Option<&str> {
        self.service_end.as_deref()
    }

    pub fn due_date(&self) -> Option<&str> {
        self.due_date.as_deref()
    }

    /// True once every field has been populated.
    pub fn is_complete(&self) -> bool {
        self.usage.is_some()
            && self.bill.is_some()
            && self.service_start.is_some()
            && self.service_end.is_some()
            && self.due_date.is_some()
    }

    pub(crate) fn set_amount_due(&mut self, due_date: String, bill: f64) {
        self.due_date = Some(due_date);
        self.bill = Some(bill);
    }

    pub(crate) fn set_usage_period(&mut self, usage: f64, service_start: String, service_end: String) {
        self.usage = Some(usage);
        self.service_start = Some(service_start);
        self.service_end = Some(service_end);
    }
}

struct Field<'a, T: ?Sized>(Option<&'a T>);

impl<T: fmt::Display + ?Sized> fmt::Display for Field<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{}", value),
            None => write!(f, "-"),
        }
    }
}

impl fmt::Display for BillingRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Bill information:")?;
        writeln!(f, "\tBill ($):\t{}", Field(self.bill.as_ref()))?;
        writeln!(f, "\tUsage (kWh):\t{}", Field(self.usage.as_ref()))?;
        writeln!(f, "\tStart:\t\t{}", Field(self.service_start.as_deref()))?;
        writeln!(f, "\tEnd:\t\t{}", Field(self.service_end.as_deref()))?;
        write!(f, "\tDue:\t\t{}", Field(self.due_date.as_deref()))
    }
}
