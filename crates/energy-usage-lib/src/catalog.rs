use crate::appliance::BillableAppliance;
use crate::error::{ConsumptionError, ConsumptionResult};
use serde::{Deserialize, Serialize};

/// Catalog entry as written in a configuration file. `efficiency` marks a
/// smart appliance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub watts_per_minute: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub efficiency: Option<f64>,
}

impl TryFrom<CatalogEntry> for BillableAppliance {
    type Error = ConsumptionError;

    fn try_from(entry: CatalogEntry) -> ConsumptionResult<Self> {
        if !(entry.watts_per_minute.is_finite() && entry.watts_per_minute >= 0.0) {
            return Err(ConsumptionError::InvalidCatalogEntry {
                name: entry.name,
                reason: format!(
                    "watts per minute must be a finite, non-negative number, got {}",
                    entry.watts_per_minute
                ),
            });
        }

        match entry.efficiency {
            None => Ok(BillableAppliance::standard(entry.name, entry.watts_per_minute)),
            Some(efficiency) => {
                BillableAppliance::smart(entry.name.clone(), entry.watts_per_minute, efficiency)
                    .map_err(|e| ConsumptionError::InvalidCatalogEntry {
                        name: entry.name,
                        reason: e.to_string(),
                    })
            }
        }
    }
}

/// Fixed, ordered list of appliances offered for selection.
#[derive(Debug, Clone)]
pub struct Catalog {
    appliances: Vec<BillableAppliance>,
}

fn builtin_entries() -> Vec<CatalogEntry> {
    let standard = [
        ("LED bulb", 0.15),
        ("Fan", 0.8),
        ("LED television", 1.6),
        ("Refrigerator", 8.5),
        ("Microwave", 10.0),
        ("Blender", 5.0),
        ("Coffee maker", 3.5),
        ("Iron", 12.0),
    ];

    let smart = [
        ("Smart thermostat", 0.25, 0.85),
        ("Robot vacuum", 1.2, 0.9),
        ("Smart washing machine", 4.5, 0.8),
        ("Smart lighting", 0.2, 0.75),
        ("Smart speaker", 0.05, 0.9),
    ];

    standard
        .iter()
        .map(|(name, watts_per_minute)| CatalogEntry {
            name: name.to_string(),
            watts_per_minute: *watts_per_minute,
            efficiency: None,
        })
        .chain(
            smart
                .iter()
                .map(|(name, watts_per_minute, efficiency)| CatalogEntry {
                    name: name.to_string(),
                    watts_per_minute: *watts_per_minute,
                    efficiency: Some(*efficiency),
                }),
        )
        .collect()
}

impl Catalog {
    pub fn new() -> Self {
        Self::from_entries(builtin_entries()).expect("built-in catalog entries are valid")
    }

    pub fn from_entries(entries: Vec<CatalogEntry>) -> ConsumptionResult<Self> {
        let appliances = entries
            .into_iter()
            .map(BillableAppliance::try_from)
            .collect::<ConsumptionResult<Vec<_>>>()?;

        Ok(Self { appliances })
    }

    /// Appliances paired with their 1-based selection number.
    pub fn entries(&self) -> impl Iterator<Item = (usize, &BillableAppliance)> {
        self.appliances
            .iter()
            .enumerate()
            .map(|(index, appliance)| (index + 1, appliance))
    }

    /// Zero-based lookup.
    pub fn get(&self, index: usize) -> Option<&BillableAppliance> {
        self.appliances.get(index)
    }

    pub fn len(&self) -> usize {
        self.appliances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appliances.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_shape() {
        let catalog = Catalog::new();
        assert_eq!(catalog.len(), 13);

        let smart_count = catalog.entries().filter(|(_, a)| a.is_smart()).count();
        assert_eq!(smart_count, 5);

        let first = catalog.get(0).unwrap();
        assert_eq!(first.name(), "LED bulb");
        assert_eq!(first.watts_per_minute(), 0.15);

        let last = catalog.get(12).unwrap();
        assert_eq!(last.name(), "Smart speaker");
        assert_eq!(last.efficiency(), Some(0.9));

        assert!(catalog.get(13).is_none());
    }

    #[test]
    fn test_every_builtin_entry_converts() {
        let entries = builtin_entries();
        assert_eq!(entries.len(), 13);
        for entry in entries {
            let name = entry.name.clone();
            assert!(BillableAppliance::try_from(entry).is_ok(), "{} is invalid", name);
        }
    }

    #[test]
    fn test_entries_are_one_based() {
        let catalog = Catalog::new();
        let numbers: Vec<usize> = catalog.entries().map(|(n, _)| n).collect();
        assert_eq!(numbers, (1..=13).collect::<Vec<_>>());
    }

    #[test]
    fn test_from_entries() {
        let entries: Vec<CatalogEntry> = serde_json::from_str(
            r#"[
                {"name": "Kettle", "watts_per_minute": 30.0},
                {"name": "Smart plug", "watts_per_minute": 0.1, "efficiency": 0.5}
            ]"#,
        )
        .unwrap();

        let catalog = Catalog::from_entries(entries).unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(!catalog.get(0).unwrap().is_smart());
        assert_eq!(catalog.get(1).unwrap().efficiency(), Some(0.5));
    }

    #[test]
    fn test_from_entries_rejects_bad_efficiency() {
        let entries = vec![CatalogEntry {
            name: "Broken".to_string(),
            watts_per_minute: 1.0,
            efficiency: Some(2.0),
        }];

        match Catalog::from_entries(entries) {
            Err(ConsumptionError::InvalidCatalogEntry { name, .. }) => assert_eq!(name, "Broken"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_from_entries_rejects_negative_draw() {
        let entries = vec![CatalogEntry {
            name: "Generator".to_string(),
            watts_per_minute: -3.0,
            efficiency: None,
        }];

        assert!(Catalog::from_entries(entries).is_err());
    }
}
