use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A teaching period (term) instructor slots belong to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Period {
    pub id: Uuid,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Returns the period starting soonest after `today`.
///
/// Periods that already started (or start today) are not upcoming. When two
/// periods share a start date the one listed first wins.
pub fn next_period(periods: &[Period], today: NaiveDate) -> Option<&Period> {
    periods
        .iter()
        .filter(|period| period.start_date > today)
        .fold(None, |best: Option<&Period>, period| match best {
            Some(best) if best.start_date <= period.start_date => Some(best),
            _ => Some(period),
        })
}
