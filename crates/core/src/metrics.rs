//! Lookups and counts derived from loaded collections.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use crate::attrition::Attrition;
use crate::bottleneck::Bottleneck;
use crate::offer::{Offer, OfferStatus};
use crate::role::{Role, RoleStatus};

/// Window for counting accepted offers as expected joiners.
pub const EXPECTED_JOINER_WINDOW_DAYS: i64 = 30;

pub fn find_role_by_title<'a>(roles: &'a [Role], title: &str) -> Option<&'a Role> {
    roles.iter().find(|r| r.title == title)
}

pub fn bottlenecks_for_role<'a>(bottlenecks: &'a [Bottleneck], title: &str) -> Vec<&'a Bottleneck> {
    bottlenecks.iter().filter(|b| b.role_title == title).collect()
}

/// Critical roles that are not closed, in input order.
pub fn critical_roles(roles: &[Role]) -> Vec<&Role> {
    roles
        .iter()
        .filter(|r| r.is_critical && r.status != RoleStatus::Closed)
        .collect()
}

/// Bottlenecks not attached to any open critical role.
pub fn remaining_bottlenecks<'a>(roles: &[Role], bottlenecks: &'a [Bottleneck]) -> Vec<&'a Bottleneck> {
    let critical = critical_roles(roles);
    bottlenecks
        .iter()
        .filter(|b| !critical.iter().any(|r| r.title == b.role_title))
        .collect()
}

pub fn active_role_count(roles: &[Role]) -> usize {
    roles.iter().filter(|r| r.is_active()).count()
}

/// Active role count per function, roles without one under `"Unassigned"`.
pub fn active_roles_by_function(roles: &[Role]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for role in roles.iter().filter(|r| r.is_active()) {
        *counts.entry(role.function_label().to_string()).or_insert(0) += 1;
    }
    counts
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyMetrics {
    /// Joined offers whose join date falls in the current month.
    pub new_joiners: usize,
    /// Accepted offers joining after today and within the next 30 days.
    pub expected_joiners: usize,
    /// Exits dated in the current month.
    pub attrition_this_month: usize,
}

fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// Counts for the month containing `today`.
pub fn current_month_metrics(
    offers: &[Offer],
    attrition: &[Attrition],
    today: NaiveDate,
) -> MonthlyMetrics {
    let window_end = today + Duration::days(EXPECTED_JOINER_WINDOW_DAYS);

    let new_joiners = offers
        .iter()
        .filter(|o| o.status == OfferStatus::Joined)
        .filter_map(|o| o.join_date)
        .filter(|d| same_month(*d, today))
        .count();

    let expected_joiners = offers
        .iter()
        .filter(|o| o.status == OfferStatus::Accepted)
        .filter_map(|o| o.join_date)
        .filter(|d| *d > today && *d <= window_end)
        .count();

    let attrition_this_month = attrition
        .iter()
        .filter(|a| same_month(a.exit_date, today))
        .count();

    MonthlyMetrics {
        new_joiners,
        expected_joiners,
        attrition_this_month,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DbId;

    fn role(title: &str, status: RoleStatus, critical: bool, function: Option<&str>) -> Role {
        Role {
            id: DbId::new_v4(),
            title: title.to_string(),
            ta_owner: "Yogiraj".to_string(),
            status,
            days_open: 5,
            pipeline_count: 0,
            interviews: 0,
            offer_status: String::new(),
            is_critical: critical,
            function: function.map(str::to_string),
        }
    }

    fn bottleneck(description: &str, role_title: &str) -> Bottleneck {
        Bottleneck {
            id: DbId::new_v4(),
            description: description.to_string(),
            role_title: role_title.to_string(),
        }
    }

    fn offer(status: OfferStatus, join_date: Option<NaiveDate>) -> Offer {
        Offer {
            id: DbId::new_v4(),
            candidate_name: "Priya Sharma".to_string(),
            role_title: "Sr. PM – AI/ML".to_string(),
            offer_date: None,
            join_date,
            status,
            package_amount: None,
        }
    }

    fn exit(date: NaiveDate) -> Attrition {
        Attrition {
            id: DbId::new_v4(),
            employee_name: "Kiran".to_string(),
            role: "Analyst".to_string(),
            exit_date: date,
            reason: None,
        }
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn closed_critical_roles_are_excluded() {
        let roles = vec![
            role("A", RoleStatus::Sourcing, true, None),
            role("B", RoleStatus::Closed, true, None),
            role("C", RoleStatus::Offer, false, None),
        ];
        let titles: Vec<_> = critical_roles(&roles).iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["A"]);
    }

    #[test]
    fn remaining_bottlenecks_skip_open_critical_roles() {
        let roles = vec![
            role("A", RoleStatus::Sourcing, true, None),
            role("B", RoleStatus::Closed, true, None),
        ];
        let bottlenecks = vec![
            bottleneck("Long notice periods", "A"),
            bottleneck("Salary expectations mismatch", "B"),
            bottleneck("Interview scheduling conflicts", "Z"),
        ];
        assert_eq!(bottlenecks_for_role(&bottlenecks, "A").len(), 1);
        let remaining: Vec<_> = remaining_bottlenecks(&roles, &bottlenecks)
            .iter()
            .map(|b| b.role_title.as_str())
            .collect();
        assert_eq!(remaining, vec!["B", "Z"]);
    }

    #[test]
    fn active_roles_grouped_by_function() {
        let roles = vec![
            role("A", RoleStatus::Sourcing, false, Some("Product")),
            role("B", RoleStatus::Offer, false, Some("Product")),
            role("C", RoleStatus::Research, false, None),
            role("D", RoleStatus::Closed, false, Some("Marketing")),
        ];
        assert_eq!(active_role_count(&roles), 3);
        let grouped = active_roles_by_function(&roles);
        assert_eq!(grouped.get("Product"), Some(&2));
        assert_eq!(grouped.get("Unassigned"), Some(&1));
        assert_eq!(grouped.get("Marketing"), None);
    }

    #[test]
    fn monthly_metrics_count_by_date_window() {
        let today = ymd(2025, 3, 10);
        let offers = vec![
            offer(OfferStatus::Joined, Some(ymd(2025, 3, 1))),
            offer(OfferStatus::Joined, Some(ymd(2024, 3, 1))),
            offer(OfferStatus::Joined, None),
            offer(OfferStatus::Accepted, Some(ymd(2025, 3, 10))),
            offer(OfferStatus::Accepted, Some(ymd(2025, 3, 11))),
            offer(OfferStatus::Accepted, Some(ymd(2025, 4, 9))),
            offer(OfferStatus::Accepted, Some(ymd(2025, 4, 10))),
            offer(OfferStatus::Pending, Some(ymd(2025, 3, 20))),
        ];
        let exits = vec![exit(ymd(2025, 3, 31)), exit(ymd(2025, 2, 28))];

        let metrics = current_month_metrics(&offers, &exits, today);
        assert_eq!(metrics.new_joiners, 1);
        assert_eq!(metrics.expected_joiners, 2);
        assert_eq!(metrics.attrition_this_month, 1);
    }

    #[test]
    fn metrics_are_zero_without_records() {
        assert_eq!(
            current_month_metrics(&[], &[], ymd(2025, 1, 1)),
            MonthlyMetrics::default()
        );
    }
}
