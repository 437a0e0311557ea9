//! Billing calendar and fee schedule.

use chrono::{Datelike, Months, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fixed monthly charges added to every rent invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeeSchedule {
    pub water_electricity_levy: Decimal,
    pub administration_fee: Decimal,
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            water_electricity_levy: Decimal::from(350),
            administration_fee: Decimal::from(150),
        }
    }
}

impl FeeSchedule {
    /// `PROPTECH_WATER_LEVY` / `PROPTECH_ADMIN_FEE`, falling back to the defaults.
    ///
    /// Unparseable or negative amounts are ignored.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            water_electricity_levy: env_amount("PROPTECH_WATER_LEVY").unwrap_or(defaults.water_electricity_levy),
            administration_fee: env_amount("PROPTECH_ADMIN_FEE").unwrap_or(defaults.administration_fee),
        }
    }
}

fn env_amount(key: &str) -> Option<Decimal> {
    std::env::var(key)
        .ok()
        .and_then(|raw| raw.trim().parse::<Decimal>().ok())
        .filter(|amount| !amount.is_sign_negative())
}

/// First day of the month containing `date`.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Invoice due date: the first day of the calendar month after `issue_date`.
pub fn next_month_start(issue_date: NaiveDate) -> NaiveDate {
    let start = month_start(issue_date);
    start.checked_add_months(Months::new(1)).unwrap_or(start)
}

/// A nominal statement period (inclusive on both ends).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl BillingPeriod {
    /// The calendar month containing `date`: day 1 through the last day.
    pub fn month_of(date: NaiveDate) -> Self {
        let start = month_start(date);
        let end = next_month_start(date).pred_opt().unwrap_or(start);
        Self { start, end }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn due_date_is_first_of_next_month() {
        assert_eq!(next_month_start(day(2026, 10, 14)), day(2026, 11, 1));
        assert_eq!(next_month_start(day(2026, 10, 1)), day(2026, 11, 1));
        assert_eq!(next_month_start(day(2026, 12, 31)), day(2027, 1, 1));
    }

    #[test]
    fn month_period_handles_leap_february() {
        let p = BillingPeriod::month_of(day(2028, 2, 10));
        assert_eq!(p.start, day(2028, 2, 1));
        assert_eq!(p.end, day(2028, 2, 29));
    }

    #[test]
    fn default_fees() {
        let fees = FeeSchedule::default();
        assert_eq!(fees.water_electricity_levy, Decimal::from(350));
        assert_eq!(fees.administration_fee, Decimal::from(150));
    }

    proptest! {
        #![proptest_config(ProptestConfig { cases: 256, ..ProptestConfig::default() })]

        #[test]
        fn due_date_always_month_start_after_issue(offset in 0i64..20_000) {
            let issue = day(2000, 1, 1) + chrono::Duration::days(offset);
            let due = next_month_start(issue);
            prop_assert_eq!(due.day(), 1);
            prop_assert!(due > issue);
            prop_assert!((due - issue).num_days() <= 31);
        }
    }
}
