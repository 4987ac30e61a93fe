use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::listview::aggregate;
use crate::listview::filter::Searchable;
use crate::models::{HasPrimaryKey, Identifiable, Index, IndexAware, Indexable};

/// One refueling event for a vehicle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FuelLogModel {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub logged_on: NaiveDate,
    pub liters: Decimal,
    pub cost: Decimal,
    /// Odometer reading in kilometers at the time of refueling
    pub odometer_km: u32,
}

impl Identifiable for FuelLogModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl Searchable for FuelLogModel {
    fn matches_search(&self, _term: &str) -> bool {
        // views search the parent vehicle
        false
    }
}

/// Index model for FuelLog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FuelLogIdxModel {
    pub id: Uuid,
    pub vehicle_id: Uuid,
}

impl IndexAware for FuelLogModel {
    type IndexType = FuelLogIdxModel;

    fn to_index(&self) -> Self::IndexType {
        FuelLogIdxModel {
            id: self.id,
            vehicle_id: self.vehicle_id,
        }
    }
}

impl Identifiable for FuelLogIdxModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl Index for FuelLogIdxModel {}

impl HasPrimaryKey for FuelLogIdxModel {
    fn primary_key(&self) -> Uuid {
        self.id
    }
}

impl Indexable for FuelLogIdxModel {
    fn i64_keys(&self) -> HashMap<String, Option<i64>> {
        HashMap::new()
    }

    fn uuid_keys(&self) -> HashMap<String, Option<Uuid>> {
        let mut keys = HashMap::new();
        keys.insert("vehicle_id".to_string(), Some(self.vehicle_id));
        keys
    }
}

/// Aggregates over the full filtered fuel log collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuelSummary {
    pub log_count: usize,
    pub total_liters: Decimal,
    pub total_cost: Decimal,
    /// Liters per 100 km over the odometer span of the logs.
    /// Zero when the span covers less than one kilometer.
    pub liters_per_100_km: Decimal,
}

impl FuelSummary {
    pub fn from_logs(logs: &[FuelLogModel]) -> Self {
        let total_liters = aggregate::sum_by(logs, |l| l.liters);
        let distance_km = odometer_span_km(logs);

        let liters_per_100_km = if distance_km == 0 {
            Decimal::ZERO
        } else {
            total_liters * Decimal::ONE_HUNDRED / Decimal::from(distance_km)
        };

        FuelSummary {
            log_count: logs.len(),
            total_liters,
            total_cost: aggregate::sum_by(logs, |l| l.cost),
            liters_per_100_km,
        }
    }
}

/// Kilometers between the lowest and highest odometer reading in the logs
fn odometer_span_km(logs: &[FuelLogModel]) -> u32 {
    let min = logs.iter().map(|l| l.odometer_km).min();
    let max = logs.iter().map(|l| l.odometer_km).max();
    match (min, max) {
        (Some(min), Some(max)) => max - min,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log(liters: i64, cost: i64, odometer_km: u32) -> FuelLogModel {
        FuelLogModel {
            id: Uuid::new_v4(),
            vehicle_id: Uuid::new_v4(),
            logged_on: NaiveDate::from_ymd_opt(2026, 3, 15).unwrap(),
            liters: Decimal::from(liters),
            cost: Decimal::from(cost),
            odometer_km,
        }
    }

    #[test]
    fn test_fuel_summary() {
        let logs = vec![log(40, 60, 10_000), log(45, 70, 10_500), log(42, 65, 11_000)];
        let summary = FuelSummary::from_logs(&logs);

        assert_eq!(summary.log_count, 3);
        assert_eq!(summary.total_liters, Decimal::from(127));
        assert_eq!(summary.total_cost, Decimal::from(195));
        // 127 liters over 1000 km
        assert_eq!(summary.liters_per_100_km, Decimal::new(127, 1));
    }

    #[test]
    fn test_fuel_summary_single_log_has_no_consumption() {
        let summary = FuelSummary::from_logs(&[log(40, 60, 10_000)]);
        assert_eq!(summary.liters_per_100_km, Decimal::ZERO);
        assert_eq!(summary.total_cost, Decimal::from(60));
    }

    #[test]
    fn test_fuel_summary_empty() {
        let summary = FuelSummary::from_logs(&[]);
        assert_eq!(summary.log_count, 0);
        assert_eq!(summary.total_liters, Decimal::ZERO);
        assert_eq!(summary.liters_per_100_km, Decimal::ZERO);
    }
}
