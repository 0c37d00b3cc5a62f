pub mod appliance;
pub mod calculator;
pub mod catalog;
pub mod data_structures;
pub mod error;
pub mod ledger;
pub mod report;

pub use appliance::{ApplianceKind, BillableAppliance};
pub use calculator::{BudgetStatus, Calculator, ENERGY_SAVING_TIPS};
pub use catalog::{Catalog, CatalogEntry};
pub use data_structures::{
    Appliance, ConsumptionBreakdown, Report, ReportRow, ReportSummary, UsageRecord,
};
pub use error::{ConsumptionError, ConsumptionResult};
pub use ledger::{UsageLedger, DEFAULT_TARIFF};
pub use report::{write_report, ReportSink, DEFAULT_REPORT_FILE};

pub use anyhow::Result;
pub use chrono::{DateTime, Utc};

pub mod prelude {
    pub use crate::appliance::BillableAppliance;
    pub use crate::calculator::{BudgetStatus, Calculator};
    pub use crate::catalog::Catalog;
    pub use crate::data_structures::{Appliance, Report};
    pub use crate::ledger::UsageLedger;
    pub use crate::report::{write_report, ReportSink};
    pub use anyhow::Result;
}
