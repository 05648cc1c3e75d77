//! Wire-level schema of the supplier's quote endpoint.
//!
//! These shapes follow the supplier contract verbatim; mapping into the
//! domain types in [`crate::model`] happens in the service layer.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::model::MassageStatus;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuoteResponse {
    /// Upstream business error, e.g. a minimum-lead-time rejection.
    /// Absent or blank means the quote succeeded.
    #[serde(default)]
    pub error: Option<String>,

    #[serde(default)]
    pub massages: Vec<Massage>,
}

impl QuoteResponse {
    /// Whether the supplier reported a business error for this quote.
    pub fn has_error(&self) -> bool {
        self.error.as_deref().is_some_and(|e| !e.trim().is_empty())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Massage {
    pub code: String,
    pub name: String,
    pub status: MassageStatus,
    pub price: Price,

    /// Duration in seconds; the supplier omits it for some offers.
    #[serde(default)]
    pub duration: Option<i64>,

    #[serde(default)]
    pub cancellation_policies: Vec<CancellationPolicy>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Price {
    pub amount: f64,
    pub currency: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CancellationPolicy {
    pub date: NaiveDate,
    pub price: Price,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_quote_decodes() {
        let body = r#"{
            "error": null,
            "massages": [
                {
                    "code": "SWE-60",
                    "name": "Swedish massage",
                    "status": "AVAILABLE",
                    "price": { "amount": 25.0, "currency": "EUR" },
                    "duration": 3600,
                    "cancellationPolicies": [
                        { "date": "2024-03-01", "price": { "amount": 15.0, "currency": "EUR" } }
                    ]
                }
            ]
        }"#;

        let quote: QuoteResponse = serde_json::from_str(body).expect("quote should decode");

        assert!(!quote.has_error());
        assert_eq!(quote.massages.len(), 1);

        let massage = &quote.massages[0];
        assert_eq!(massage.code, "SWE-60");
        assert_eq!(massage.name, "Swedish massage");
        assert_eq!(massage.status, MassageStatus::Available);
        assert_eq!(massage.price.amount, 25.0);
        assert_eq!(massage.price.currency, "EUR");
        assert_eq!(massage.duration, Some(3600));
        assert_eq!(massage.cancellation_policies.len(), 1);
        assert_eq!(
            massage.cancellation_policies[0].date,
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
    }

    #[test]
    fn absent_lists_and_error_default_to_empty() {
        let quote: QuoteResponse = serde_json::from_str("{}").expect("empty object decodes");

        assert!(!quote.has_error());
        assert!(quote.massages.is_empty());
    }

    #[test]
    fn blank_error_counts_as_no_error() {
        let quote: QuoteResponse = serde_json::from_str(r#"{ "error": "  " }"#).unwrap();
        assert!(!quote.has_error());

        let quote: QuoteResponse =
            serde_json::from_str(r#"{ "error": "minimum lead time is 15 days" }"#).unwrap();
        assert!(quote.has_error());
    }

    #[test]
    fn unrecognized_status_decodes_as_unknown() {
        let body = r#"{
            "code": "1",
            "name": "Hot stone",
            "status": "SOLD_OUT",
            "price": { "amount": 10.0, "currency": "EUR" }
        }"#;

        let massage: Massage = serde_json::from_str(body).unwrap();
        assert_eq!(massage.status, MassageStatus::Unknown);
    }

    #[test]
    fn missing_name_is_a_decode_failure() {
        let body = r#"{
            "code": "1",
            "status": "AVAILABLE",
            "price": { "amount": 10.0, "currency": "EUR" }
        }"#;

        assert!(serde_json::from_str::<Massage>(body).is_err());
    }
}
