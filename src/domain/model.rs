use crate::core::tracking;
use crate::domain::ports::TrackingSource;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

/// An item for transport. Items are immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Item {
    tracking: u64,
    name: String,
    weight: i32,
}

impl Item {
    /// Creates an item numbered from the process-wide tracking counter.
    pub fn new(name: impl Into<String>, weight: i32) -> Self {
        Self::with_source(tracking::global(), name, weight)
    }

    /// Creates an item numbered from the given source.
    pub fn with_source<S: TrackingSource + ?Sized>(
        source: &S,
        name: impl Into<String>,
        weight: i32,
    ) -> Self {
        Self {
            tracking: source.next_tracking(),
            name: name.into(),
            weight,
        }
    }

    pub fn tracking(&self) -> u64 {
        self.tracking
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn weight(&self) -> i32 {
        self.weight
    }
}

/// Point-in-time aggregates of a cargo module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CargoSummary {
    pub max_weight: i32,
    pub item_count: usize,
    pub total_weight: i64,
    /// `None` when the module is empty (JSON has no NaN).
    pub average_weight: Option<f64>,
    pub is_over_weight: bool,
    pub heaviest: Option<ItemView>,
}

impl CargoSummary {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Owned copy of an item's fields for reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemView {
    pub tracking: u64,
    pub name: String,
    pub weight: i32,
}

impl From<&Item> for ItemView {
    fn from(item: &Item) -> Self {
        Self {
            tracking: item.tracking,
            name: item.name.clone(),
            weight: item.weight,
        }
    }
}
