//! Derivation of a normalized cancellation fee schedule from the raw
//! policies the supplier attaches to a massage.
//!
//! The supplier's policies arrive unordered and occasionally inconsistent:
//! duplicate days, fees above the massage price, dates already in the past.
//! The schedule produced here is date-ascending with strictly increasing
//! fees, and always ends in a full-price (non-refundable) entry.

use chrono::NaiveDate;

use crate::{binding, model::CancellationPolicy};

/// Build the fee schedule for one massage quoted for `massage_date`.
///
/// `today` is the clock reference: past policy dates are clamped to it, and
/// an inconsistent policy set collapses to non-refundable starting today.
pub fn cancellation_schedule(
    today: NaiveDate,
    massage_date: NaiveDate,
    massage: &binding::Massage,
) -> Vec<CancellationPolicy> {
    build_schedule(today, massage_date, massage)
        .unwrap_or_else(|| vec![non_refundable(massage, today)])
}

/// `None` means the policy set is inconsistent and the whole schedule must
/// collapse to non-refundable.
fn build_schedule(
    today: NaiveDate,
    massage_date: NaiveDate,
    massage: &binding::Massage,
) -> Option<Vec<CancellationPolicy>> {
    let mut raw = massage.cancellation_policies.clone();
    raw.sort_by_key(|p| p.date);

    let mut schedule: Vec<CancellationPolicy> = Vec::new();

    for policy in &raw {
        if !price_valid(massage, policy) {
            return None;
        }

        let effective = effective_date(policy, today);
        if let Some(existing) = schedule.iter_mut().find(|c| c.date == effective) {
            // two policies land on the same effective day: keep the higher fee
            if policy.price.amount > existing.amount {
                existing.amount = policy.price.amount;
            }
        } else if policy.date < today {
            schedule.push(CancellationPolicy {
                date: today,
                amount: policy.price.amount,
                currency: policy.price.currency.clone(),
            });
        } else if policy.date == massage_date {
            schedule.push(non_refundable(massage, massage_date));
        } else if policy.date > massage_date {
            continue;
        } else if schedule.iter().any(|c| policy.price.amount <= c.amount) {
            // fees must increase towards the massage date
            continue;
        } else {
            schedule.push(CancellationPolicy {
                date: policy.date,
                amount: policy.price.amount,
                currency: policy.price.currency.clone(),
            });
        }
    }

    if schedule.is_empty() {
        schedule.push(non_refundable(massage, today));
    }

    if !schedule.iter().any(|c| c.amount == massage.price.amount) {
        schedule.push(non_refundable(massage, massage_date));
    }

    Some(schedule)
}

/// Past policy dates count as today.
fn effective_date(policy: &binding::CancellationPolicy, today: NaiveDate) -> NaiveDate {
    if policy.date > today { policy.date } else { today }
}

fn price_valid(massage: &binding::Massage, policy: &binding::CancellationPolicy) -> bool {
    policy.price.amount >= 0.0
        && massage.price.currency == policy.price.currency
        && massage.price.amount >= policy.price.amount
}

fn non_refundable(massage: &binding::Massage, date: NaiveDate) -> CancellationPolicy {
    CancellationPolicy {
        date,
        amount: massage.price.amount,
        currency: massage.price.currency.clone(),
    }
}
