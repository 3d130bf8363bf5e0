use crate::domain::model::{CargoSummary, Item, ItemView};
use crate::utils::error::{CargoError, Result};
use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, HashMap};

/// A cargo module holding items up to a weight capacity.
///
/// Items are keyed by tracking number and scanned in ascending tracking
/// order. Totals are recomputed from the stored items on every query.
#[derive(Debug, Clone)]
pub struct CargoModule {
    max_weight: i32,
    items: BTreeMap<u64, Item>,
}

impl CargoModule {
    /// Creates an empty module. The capacity is not validated; zero and
    /// negative capacities make any non-empty positive load overweight.
    pub fn new(max_weight: i32) -> Self {
        Self {
            max_weight,
            items: BTreeMap::new(),
        }
    }

    pub fn max_weight(&self) -> i32 {
        self.max_weight
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of the weights of all stored items; 0 when empty.
    pub fn total_weight(&self) -> i64 {
        sum_weights(self.items.values())
    }

    /// True iff the total weight exceeds the capacity.
    pub fn is_over_weight(&self) -> bool {
        self.total_weight() > i64::from(self.max_weight)
    }

    /// Adds an item. An item whose tracking number is already stored is
    /// ignored and the stored one kept.
    pub fn add(&mut self, item: Item) {
        if let Err(e) = self.try_add(item) {
            tracing::warn!("Ignoring add: {}", e);
        }
    }

    pub fn try_add(&mut self, item: Item) -> Result<()> {
        match self.items.entry(item.tracking()) {
            Entry::Occupied(_) => Err(CargoError::DuplicateTracking {
                tracking: item.tracking(),
            }),
            Entry::Vacant(slot) => {
                tracing::debug!(
                    "Adding item #{} '{}' ({})",
                    item.tracking(),
                    item.name(),
                    item.weight()
                );
                slot.insert(item);
                Ok(())
            }
        }
    }

    pub fn contains(&self, tracking: u64) -> bool {
        self.items.contains_key(&tracking)
    }

    pub fn get(&self, tracking: u64) -> Option<&Item> {
        self.items.get(&tracking)
    }

    /// Removes the item with the given tracking number; true iff one was removed.
    pub fn remove(&mut self, tracking: u64) -> bool {
        self.take(tracking).is_some()
    }

    /// Removes and returns the item with the given tracking number.
    pub fn take(&mut self, tracking: u64) -> Option<Item> {
        let removed = self.items.remove(&tracking);
        if removed.is_some() {
            tracing::debug!("Removed item #{}", tracking);
        }
        removed
    }

    /// All stored items in ascending tracking order.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    /// All items whose name equals `name` exactly.
    pub fn items_by_name(&self, name: &str) -> Vec<&Item> {
        self.items
            .values()
            .filter(|item| item.name() == name)
            .collect()
    }

    /// The heaviest stored item; on ties the lowest tracking number wins.
    pub fn heaviest(&self) -> Option<&Item> {
        heaviest_of(self.items.values())
    }

    /// The heaviest item named `name`, or `None` if no item has that name.
    pub fn heaviest_named(&self, name: &str) -> Option<&Item> {
        heaviest_of(self.items.values().filter(|item| item.name() == name))
    }

    /// Mean weight of the stored items; NaN when empty.
    pub fn average_weight(&self) -> f64 {
        average_of(self.items.values())
    }

    /// Mean weight of the items named `name`; NaN when none match.
    pub fn average_weight_named(&self, name: &str) -> f64 {
        average_of(self.items.values().filter(|item| item.name() == name))
    }

    /// Stored items whose tracking number is in `tracking`.
    ///
    /// `None` input gives `None`; a list with no stored numbers gives an empty
    /// vector. Repeated numbers in the input appear once in the output.
    pub fn items_by_tracking_numbers(&self, tracking: Option<&[u64]>) -> Option<Vec<&Item>> {
        let mut wanted = tracking?.to_vec();
        wanted.sort_unstable();
        wanted.dedup();

        Some(
            wanted
                .into_iter()
                .filter_map(|t| self.items.get(&t))
                .collect(),
        )
    }

    /// Maps every requested name to the stored items carrying it. Names with
    /// no items map to an empty vector. `None` input gives `None`.
    pub fn items_by_names<S: AsRef<str>>(
        &self,
        names: Option<&[S]>,
    ) -> Option<HashMap<String, Vec<&Item>>> {
        let names = names?;
        let mut map = HashMap::with_capacity(names.len());
        for name in names {
            let name = name.as_ref();
            map.entry(name.to_string())
                .or_insert_with(|| self.items_by_name(name));
        }
        Some(map)
    }

    pub fn summary(&self) -> CargoSummary {
        let average = self.average_weight();
        CargoSummary {
            max_weight: self.max_weight,
            item_count: self.item_count(),
            total_weight: self.total_weight(),
            average_weight: if average.is_nan() { None } else { Some(average) },
            is_over_weight: self.is_over_weight(),
            heaviest: self.heaviest().map(ItemView::from),
        }
    }
}

fn sum_weights<'a>(items: impl Iterator<Item = &'a Item>) -> i64 {
    items.map(|item| i64::from(item.weight())).sum()
}

fn heaviest_of<'a>(items: impl Iterator<Item = &'a Item>) -> Option<&'a Item> {
    let mut heaviest: Option<&Item> = None;
    for item in items {
        // strictly greater: first-seen wins on ties
        if heaviest.map_or(true, |h| item.weight() > h.weight()) {
            heaviest = Some(item);
        }
    }
    heaviest
}

fn average_of<'a>(items: impl Iterator<Item = &'a Item>) -> f64 {
    let (sum, count) = items.fold((0i64, 0usize), |(sum, count), item| {
        (sum + i64::from(item.weight()), count + 1)
    });
    if count == 0 {
        return f64::NAN;
    }
    sum as f64 / count as f64
}
