use chrono::{Duration, NaiveDate, Utc};

use crate::{error::GatewayError, gateway::MassageGateway, model::Massage, policy};

/// Booking rules on top of a gateway: drops offers the supplier will not
/// actually honor and derives each survivor's cancellation schedule.
#[derive(Debug)]
pub struct MassageService {
    gateway: Box<dyn MassageGateway>,
}

impl MassageService {
    pub fn new(gateway: Box<dyn MassageGateway>) -> Self {
        Self { gateway }
    }

    /// Bookable massages for `date`.
    ///
    /// An upstream business error (e.g. minimum lead time not met) yields an
    /// empty list; transport, status and decode failures propagate.
    pub async fn available_massages(&self, date: NaiveDate) -> Result<Vec<Massage>, GatewayError> {
        let response = self.gateway.fetch(date).await?;

        if response.has_error() {
            let error = response.error.as_deref().unwrap_or_default();
            tracing::warn!(%error, %date, "massage service rejected quote request");
            return Ok(Vec::new());
        }

        let today = Utc::now().date_naive();

        let massages = response
            .massages
            .into_iter()
            .filter(|m| m.price.amount > 0.0 && m.status.is_bookable())
            .map(|m| {
                let cancellation_policies = policy::cancellation_schedule(today, date, &m);
                Massage {
                    name: m.name,
                    status: m.status,
                    amount: m.price.amount,
                    currency: m.price.currency,
                    external_reference: m.code,
                    duration: m.duration.map(Duration::seconds),
                    cancellation_policies,
                }
            })
            .collect();

        Ok(massages)
    }
}
