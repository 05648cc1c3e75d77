use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Lifecycle state of an offered massage, as reported by the supplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MassageStatus {
    Available,
    OnRequest,
    /// Any status string this client does not recognize.
    #[serde(other)]
    Unknown,
}

impl MassageStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MassageStatus::Available => "AVAILABLE",
            MassageStatus::OnRequest => "ON_REQUEST",
            MassageStatus::Unknown => "UNKNOWN",
        }
    }

    /// Whether the supplier will actually take a booking in this state.
    pub fn is_bookable(self) -> bool {
        matches!(self, MassageStatus::Available | MassageStatus::OnRequest)
    }
}

impl std::fmt::Display for MassageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A bookable massage offer, normalized for consumers of this crate.
#[derive(Debug, Clone, PartialEq)]
pub struct Massage {
    pub name: String,
    pub status: MassageStatus,
    pub amount: f64,
    pub currency: String,
    /// Supplier-side identifier to send back when booking.
    pub external_reference: String,
    pub duration: Option<Duration>,
    /// Date-ascending fee schedule; the last entry is the non-refundable point.
    pub cancellation_policies: Vec<CancellationPolicy>,
}

/// One step of a massage's cancellation fee schedule: cancelling on or after
/// `date` costs `amount` until the next step takes over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CancellationPolicy {
    pub date: NaiveDate,
    pub amount: f64,
    pub currency: String,
}

impl Massage {
    /// Human-readable cancellation schedule, one line per fee window.
    pub fn cancellation_summary(&self) -> Vec<String> {
        let policies = &self.cancellation_policies;
        let Some(first) = policies.first() else {
            return Vec::new();
        };

        let mut lines = Vec::with_capacity(policies.len() + 1);
        lines.push(format!("Free of charge until {}.", first.date - Duration::days(1)));

        for (i, policy) in policies.iter().enumerate() {
            if i + 1 == policies.len() {
                lines.push(format!("From {}: non-refundable.", policy.date));
            } else {
                let until = policies[i + 1].date - Duration::days(1);
                lines.push(format!(
                    "Between {} and {}: {:.2} {}.",
                    policy.date, until, policy.amount, policy.currency
                ));
            }
        }

        lines
    }
}
