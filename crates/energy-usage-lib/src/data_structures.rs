use crate::appliance::BillableAppliance;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An appliance entered by hand in the calculator, described only by its
/// daily draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appliance {
    name: String,
    daily_watts: f64,
}

impl Appliance {
    pub fn new(name: String, daily_watts: f64) -> Self {
        Self { name, daily_watts }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn daily_watts(&self) -> f64 {
        self.daily_watts
    }
}

/// Consumption of one appliance over the fixed display horizons.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsumptionBreakdown {
    daily_watts: f64,
    weekly_watts: f64,
    biweekly_watts: f64,
    monthly_watts: f64,
}

impl ConsumptionBreakdown {
    pub fn new(daily_watts: f64, weekly_watts: f64, biweekly_watts: f64, monthly_watts: f64) -> Self {
        Self {
            daily_watts,
            weekly_watts,
            biweekly_watts,
            monthly_watts,
        }
    }

    pub fn daily_watts(&self) -> f64 {
        self.daily_watts
    }

    pub fn weekly_watts(&self) -> f64 {
        self.weekly_watts
    }

    pub fn biweekly_watts(&self) -> f64 {
        self.biweekly_watts
    }

    pub fn monthly_watts(&self) -> f64 {
        self.monthly_watts
    }

    /// Horizon label paired with its watt total, in display order.
    pub fn horizons(&self) -> [(&'static str, f64); 4] {
        [
            ("Daily", self.daily_watts),
            ("Weekly", self.weekly_watts),
            ("Biweekly", self.biweekly_watts),
            ("Monthly", self.monthly_watts),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UsageRecord {
    appliance: BillableAppliance,
    minutes_per_day: f64,
    days_per_month: i32,
}

impl UsageRecord {
    pub fn new(appliance: BillableAppliance, minutes_per_day: f64, days_per_month: i32) -> Self {
        Self {
            appliance,
            minutes_per_day,
            days_per_month,
        }
    }

    pub fn appliance(&self) -> &BillableAppliance {
        &self.appliance
    }

    pub fn minutes_per_day(&self) -> f64 {
        self.minutes_per_day
    }

    pub fn days_per_month(&self) -> i32 {
        self.days_per_month
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    name: String,
    monthly_kwh: f64,
    monthly_cost: f64,
}

impl ReportRow {
    pub fn new(name: String, monthly_kwh: f64, monthly_cost: f64) -> Self {
        Self {
            name,
            monthly_kwh,
            monthly_cost,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn monthly_kwh(&self) -> f64 {
        self.monthly_kwh
    }

    pub fn monthly_cost(&self) -> f64 {
        self.monthly_cost
    }
}

/// Rows of a non-empty report. Totals are accumulated from the unrounded row
/// values as rows are added.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSummary {
    generated_at: DateTime<Utc>,
    rows: Vec<ReportRow>,
    total_kwh: f64,
    total_cost: f64,
}

impl ReportSummary {
    pub fn new(generated_at: DateTime<Utc>) -> Self {
        Self {
            generated_at,
            rows: Vec::new(),
            total_kwh: 0.0,
            total_cost: 0.0,
        }
    }

    pub fn add_row(&mut self, row: ReportRow) {
        self.total_kwh += row.monthly_kwh;
        self.total_cost += row.monthly_cost;
        self.rows.push(row);
    }

    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    pub fn total_kwh(&self) -> f64 {
        self.total_kwh
    }

    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    /// Nothing has been registered in the ledger yet.
    Empty,
    Summary(ReportSummary),
}

impl Report {
    pub fn is_empty(&self) -> bool {
        matches!(self, Report::Empty)
    }

    pub fn summary(&self) -> Option<&ReportSummary> {
        match self {
            Report::Empty => None,
            Report::Summary(summary) => Some(summary),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_summary_accumulates_totals() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let mut summary = ReportSummary::new(at);
        summary.add_row(ReportRow::new("Fan".to_string(), 1.5, 0.225));
        summary.add_row(ReportRow::new("Iron".to_string(), 2.5, 0.375));

        assert_eq!(summary.rows().len(), 2);
        assert!((summary.total_kwh() - 4.0).abs() < 1e-9);
        assert!((summary.total_cost() - 0.6).abs() < 1e-9);
        assert_eq!(summary.generated_at(), at);
    }

    #[test]
    fn test_empty_report_has_no_summary() {
        assert!(Report::Empty.is_empty());
        assert!(Report::Empty.summary().is_none());
    }

    #[test]
    fn test_breakdown_horizons_order() {
        let breakdown = ConsumptionBreakdown::new(1.0, 7.0, 14.0, 30.0);
        let labels: Vec<&str> = breakdown.horizons().iter().map(|(l, _)| *l).collect();
        assert_eq!(labels, vec!["Daily", "Weekly", "Biweekly", "Monthly"]);
    }
}
