use crate::error::{ConsumptionError, ConsumptionResult};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ApplianceKind {
    Standard,
    /// Draw is derated by the device's own optimisation.
    Smart { efficiency: f64 },
}

/// A catalog appliance priced by its draw per minute of use.
#[derive(Debug, Clone, PartialEq)]
pub struct BillableAppliance {
    name: String,
    watts_per_minute: f64,
    kind: ApplianceKind,
}

impl BillableAppliance {
    pub fn standard(name: String, watts_per_minute: f64) -> Self {
        Self {
            name,
            watts_per_minute,
            kind: ApplianceKind::Standard,
        }
    }

    pub fn smart(name: String, watts_per_minute: f64, efficiency: f64) -> ConsumptionResult<Self> {
        validate_efficiency(efficiency)?;
        Ok(Self {
            name,
            watts_per_minute,
            kind: ApplianceKind::Smart { efficiency },
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn watts_per_minute(&self) -> f64 {
        self.watts_per_minute
    }

    pub fn kind(&self) -> ApplianceKind {
        self.kind
    }

    pub fn is_smart(&self) -> bool {
        matches!(self.kind, ApplianceKind::Smart { .. })
    }

    pub fn efficiency(&self) -> Option<f64> {
        match self.kind {
            ApplianceKind::Standard => None,
            ApplianceKind::Smart { efficiency } => Some(efficiency),
        }
    }

    pub fn set_efficiency(&mut self, value: f64) -> ConsumptionResult<()> {
        match &mut self.kind {
            ApplianceKind::Standard => Err(ConsumptionError::NotSmart(self.name.clone())),
            ApplianceKind::Smart { efficiency } => {
                validate_efficiency(value)?;
                *efficiency = value;
                Ok(())
            }
        }
    }

    pub fn monthly_kwh(&self, minutes_per_day: f64, days_per_month: i32) -> ConsumptionResult<f64> {
        // `!(x >= 0.0)` also rejects NaN
        if !(minutes_per_day >= 0.0) || days_per_month < 0 {
            return Err(ConsumptionError::NegativeUsage {
                minutes: minutes_per_day,
                days: days_per_month,
            });
        }

        let raw_kwh = self.watts_per_minute * minutes_per_day * days_per_month as f64 / 1000.0;

        Ok(match self.kind {
            ApplianceKind::Standard => raw_kwh,
            ApplianceKind::Smart { efficiency } => raw_kwh * efficiency,
        })
    }

    pub fn monthly_cost(
        &self,
        minutes_per_day: f64,
        days_per_month: i32,
        tariff: f64,
    ) -> ConsumptionResult<f64> {
        Ok(self.monthly_kwh(minutes_per_day, days_per_month)? * tariff)
    }

    /// Multi-line description of this appliance's monthly consumption and
    /// cost under the given usage pattern.
    pub fn render(
        &self,
        minutes_per_day: f64,
        days_per_month: i32,
        tariff: f64,
    ) -> ConsumptionResult<String> {
        let kwh = self.monthly_kwh(minutes_per_day, days_per_month)?;
        let cost = self.monthly_cost(minutes_per_day, days_per_month, tariff)?;

        let heading = match self.kind {
            ApplianceKind::Standard => format!(
                "Appliance: {}\nMonthly consumption: {:.2} kWh",
                self.name, kwh
            ),
            ApplianceKind::Smart { .. } => format!(
                "Smart appliance: {}\nMonthly consumption (efficiency applied): {:.2} kWh",
                self.name, kwh
            ),
        };

        Ok(format!("{}\nMonthly cost: {:.2} $\n", heading, cost))
    }
}

fn validate_efficiency(efficiency: f64) -> ConsumptionResult<()> {
    if efficiency > 0.0 && efficiency <= 1.0 {
        Ok(())
    } else {
        Err(ConsumptionError::InvalidEfficiency(efficiency))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn kettle() -> BillableAppliance {
        BillableAppliance::standard("Kettle".to_string(), 1.0)
    }

    #[test]
    fn test_standard_monthly_kwh_and_cost() {
        let appliance = kettle();
        let kwh = appliance.monthly_kwh(60.0, 30).unwrap();
        let cost = appliance.monthly_cost(60.0, 30, 0.15).unwrap();

        assert!((kwh - 1.8).abs() < EPSILON);
        assert!((cost - 0.27).abs() < EPSILON);
    }

    #[test]
    fn test_negative_usage_is_rejected() {
        let appliance = kettle();
        assert!(matches!(
            appliance.monthly_kwh(-1.0, 30),
            Err(ConsumptionError::NegativeUsage { .. })
        ));
        assert!(matches!(
            appliance.monthly_kwh(10.0, -1),
            Err(ConsumptionError::NegativeUsage { .. })
        ));
        assert!(appliance.monthly_kwh(f64::NAN, 1).is_err());
    }

    #[test]
    fn test_smart_appliance_enforces_non_negative_usage() {
        let appliance = BillableAppliance::smart("Speaker".to_string(), 0.05, 0.9).unwrap();
        assert!(appliance.monthly_kwh(-5.0, 10).is_err());
        assert!(appliance.monthly_cost(5.0, -10, 0.15).is_err());
    }

    #[test]
    fn test_zero_usage_is_zero() {
        let appliance = kettle();
        assert_eq!(appliance.monthly_kwh(0.0, 30).unwrap(), 0.0);
        assert_eq!(appliance.monthly_kwh(45.0, 0).unwrap(), 0.0);
    }

    #[test]
    fn test_monthly_kwh_is_monotonic() {
        let appliance = kettle();
        let mut previous = 0.0;
        for minutes in [0.0, 1.0, 10.0, 59.5, 120.0] {
            let kwh = appliance.monthly_kwh(minutes, 20).unwrap();
            assert!(kwh >= previous);
            previous = kwh;
        }

        let mut previous = 0.0;
        for days in [0, 1, 15, 30, 31] {
            let kwh = appliance.monthly_kwh(30.0, days).unwrap();
            assert!(kwh >= previous);
            previous = kwh;
        }
    }

    #[test]
    fn test_smart_applies_efficiency() {
        let standard = BillableAppliance::standard("Washer".to_string(), 4.5);
        let smart = BillableAppliance::smart("Washer".to_string(), 4.5, 0.8).unwrap();

        let expected = standard.monthly_kwh(50.0, 12).unwrap() * 0.8;
        assert!((smart.monthly_kwh(50.0, 12).unwrap() - expected).abs() < EPSILON);
    }

    #[test]
    fn test_smart_with_full_efficiency_matches_standard() {
        let standard = BillableAppliance::standard("Lamp".to_string(), 0.2);
        let smart = BillableAppliance::smart("Lamp".to_string(), 0.2, 1.0).unwrap();

        assert_eq!(
            standard.monthly_kwh(90.0, 25).unwrap(),
            smart.monthly_kwh(90.0, 25).unwrap()
        );
    }

    #[test]
    fn test_efficiency_bounds() {
        assert!(BillableAppliance::smart("A".to_string(), 1.0, 0.0).is_err());
        assert!(BillableAppliance::smart("A".to_string(), 1.0, 1.01).is_err());
        assert!(BillableAppliance::smart("A".to_string(), 1.0, f64::NAN).is_err());
        assert!(BillableAppliance::smart("A".to_string(), 1.0, 1.0).is_ok());
    }

    #[test]
    fn test_set_efficiency() {
        let mut smart = BillableAppliance::smart("Vacuum".to_string(), 1.2, 0.9).unwrap();
        let before = smart.monthly_kwh(100.0, 30).unwrap();
        smart.set_efficiency(0.5).unwrap();
        assert_eq!(smart.efficiency(), Some(0.5));

        let after = smart.monthly_kwh(100.0, 30).unwrap();
        assert!((after - 1.8).abs() < 1e-9);
        assert!((after - before * 0.5 / 0.9).abs() < 1e-9);

        assert_eq!(
            smart.set_efficiency(1.5),
            Err(ConsumptionError::InvalidEfficiency(1.5))
        );
        assert_eq!(smart.efficiency(), Some(0.5));

        let mut standard = kettle();
        assert_eq!(
            standard.set_efficiency(0.5),
            Err(ConsumptionError::NotSmart("Kettle".to_string()))
        );
    }

    #[test]
    fn test_render_labels_variant() {
        let standard = kettle().render(60.0, 30, 0.15).unwrap();
        assert!(standard.starts_with("Appliance: Kettle\n"));
        assert!(standard.contains("Monthly consumption: 1.80 kWh"));
        assert!(standard.contains("Monthly cost: 0.27 $"));

        let smart = BillableAppliance::smart("Thermostat".to_string(), 0.25, 0.85)
            .unwrap()
            .render(60.0, 30, 0.15)
            .unwrap();
        assert!(smart.starts_with("Smart appliance: Thermostat\n"));
        assert!(smart.contains("(efficiency applied)"));
    }
}
