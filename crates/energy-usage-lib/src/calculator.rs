use crate::data_structures::{Appliance, ConsumptionBreakdown};

pub const DAYS_PER_WEEK: u32 = 7;
pub const DAYS_PER_BIWEEK: u32 = 14;
pub const DAYS_PER_MONTH: u32 = 30;

pub const ENERGY_SAVING_TIPS: [&str; 5] = [
    "Turn off lights and devices when they are not in use.",
    "Unplug appliances when you are not using them.",
    "Use energy-efficient devices.",
    "Adjust the heating or air-conditioning thermostat.",
    "Wash clothes in cold water and use the dryer only when necessary.",
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BudgetStatus {
    Sustainable,
    Exceeded { over_by_kwh: f64 },
}

pub struct Calculator;

impl Calculator {
    pub fn new() -> Self {
        Self
    }

    pub fn consumption_over_days(&self, daily_watts: f64, days: u32) -> f64 {
        daily_watts * days as f64
    }

    pub fn watts_to_kwh(&self, watts: f64) -> f64 {
        watts / 1000.0
    }

    pub fn monthly_watts(&self, appliance: &Appliance) -> f64 {
        self.consumption_over_days(appliance.daily_watts(), DAYS_PER_MONTH)
    }

    pub fn monthly_kwh(&self, appliance: &Appliance) -> f64 {
        self.watts_to_kwh(self.monthly_watts(appliance))
    }

    pub fn breakdown(&self, appliance: &Appliance) -> ConsumptionBreakdown {
        let daily = appliance.daily_watts();
        ConsumptionBreakdown::new(
            daily,
            self.consumption_over_days(daily, DAYS_PER_WEEK),
            self.consumption_over_days(daily, DAYS_PER_BIWEEK),
            self.consumption_over_days(daily, DAYS_PER_MONTH),
        )
    }

    pub fn total_monthly_kwh(&self, appliances: &[Appliance]) -> f64 {
        appliances
            .iter()
            .map(|appliance| self.monthly_kwh(appliance))
            .sum()
    }

    /// First appliance with the greatest 30-day consumption.
    pub fn max_monthly_appliance<'a>(&self, appliances: &'a [Appliance]) -> Option<&'a Appliance> {
        let (first, rest) = appliances.split_first()?;
        Some(rest.iter().fold(first, |max, appliance| {
            if self.monthly_watts(appliance) > self.monthly_watts(max) {
                appliance
            } else {
                max
            }
        }))
    }

    /// First appliance with the smallest 30-day consumption.
    pub fn min_monthly_appliance<'a>(&self, appliances: &'a [Appliance]) -> Option<&'a Appliance> {
        let (first, rest) = appliances.split_first()?;
        Some(rest.iter().fold(first, |min, appliance| {
            if self.monthly_watts(appliance) < self.monthly_watts(min) {
                appliance
            } else {
                min
            }
        }))
    }

    pub fn budget_status(&self, total_monthly_kwh: f64, budget_kwh: f64) -> BudgetStatus {
        if total_monthly_kwh > budget_kwh {
            BudgetStatus::Exceeded {
                over_by_kwh: total_monthly_kwh - budget_kwh,
            }
        } else {
            BudgetStatus::Sustainable
        }
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}
