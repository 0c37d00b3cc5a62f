use crate::appliance::BillableAppliance;
use crate::data_structures::{Report, ReportRow, ReportSummary, UsageRecord};
use crate::error::{ConsumptionError, ConsumptionResult};
use chrono::{DateTime, Utc};
use tracing::debug;

pub const DEFAULT_TARIFF: f64 = 0.15;

/// Usage records collected during a billing session, priced at a tariff
/// fixed when the ledger is created.
#[derive(Debug, Clone)]
pub struct UsageLedger {
    records: Vec<UsageRecord>,
    tariff: f64,
}

impl UsageLedger {
    pub fn new(tariff: f64) -> ConsumptionResult<Self> {
        if !(tariff.is_finite() && tariff >= 0.0) {
            return Err(ConsumptionError::InvalidTariff(tariff));
        }

        Ok(Self {
            records: Vec::new(),
            tariff,
        })
    }

    pub fn add_usage(&mut self, appliance: BillableAppliance, minutes_per_day: f64, days_per_month: i32) {
        debug!(
            appliance = appliance.name(),
            minutes_per_day, days_per_month, "recording appliance usage"
        );
        self.records
            .push(UsageRecord::new(appliance, minutes_per_day, days_per_month));
    }

    pub fn records(&self) -> &[UsageRecord] {
        &self.records
    }

    pub fn tariff(&self) -> f64 {
        self.tariff
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn build_report(&self) -> ConsumptionResult<Report> {
        self.build_report_at(Utc::now())
    }

    pub fn build_report_at(&self, generated_at: DateTime<Utc>) -> ConsumptionResult<Report> {
        if self.records.is_empty() {
            return Ok(Report::Empty);
        }

        let mut summary = ReportSummary::new(generated_at);
        for record in &self.records {
            let appliance = record.appliance();
            let monthly_kwh =
                appliance.monthly_kwh(record.minutes_per_day(), record.days_per_month())?;
            let monthly_cost = appliance.monthly_cost(
                record.minutes_per_day(),
                record.days_per_month(),
                self.tariff,
            )?;

            summary.add_row(ReportRow::new(
                appliance.name().to_string(),
                monthly_kwh,
                monthly_cost,
            ));
        }

        debug!(
            rows = summary.rows().len(),
            total_kwh = summary.total_kwh(),
            total_cost = summary.total_cost(),
            "built consumption report"
        );

        Ok(Report::Summary(summary))
    }
}
