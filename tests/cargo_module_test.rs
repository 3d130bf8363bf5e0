use cargo_module::{CargoError, CargoModule, Item, TrackingCounter};
use std::collections::HashSet;

/// 模擬一連串 add/remove，每一步都比對實際內容
#[test]
fn test_count_and_total_follow_interleaved_mutations() {
    let counter = TrackingCounter::new();
    let mut module = CargoModule::new(60);
    let mut expected: Vec<Item> = Vec::new();

    let weights = [12, 7, 30, 0, 18, 5, 25];
    for (step, weight) in weights.iter().enumerate() {
        let item = Item::with_source(&counter, format!("item-{}", step % 3), *weight);
        expected.push(item.clone());
        module.add(item);

        // every third step removes the oldest remaining item
        if step % 3 == 2 {
            let oldest = expected.remove(0);
            assert!(module.remove(oldest.tracking()));
            assert!(!module.remove(oldest.tracking()));
        }

        let total: i64 = expected.iter().map(|i| i64::from(i.weight())).sum();
        assert_eq!(module.item_count(), expected.len());
        assert_eq!(module.total_weight(), total);
        assert_eq!(module.is_over_weight(), total > 60);
    }
}

#[test]
fn test_remove_absent_then_present() {
    let counter = TrackingCounter::new();
    let mut module = CargoModule::new(10);
    let item = Item::with_source(&counter, "crate", 3);
    let tracking = item.tracking();
    module.add(item);

    assert!(!module.remove(tracking + 1));
    assert_eq!(module.item_count(), 1);
    assert!(module.contains(tracking));

    assert!(module.remove(tracking));
    assert_eq!(module.item_count(), 0);
    assert!(!module.contains(tracking));
}

#[test]
fn test_overweight_with_negative_capacity() {
    let counter = TrackingCounter::new();
    let mut module = CargoModule::new(-10);
    assert!(module.is_over_weight());

    module.add(Item::with_source(&counter, "ballast", -20));
    assert_eq!(module.total_weight(), -20);
    assert!(!module.is_over_weight());
}

#[test]
fn test_heaviest_prefers_weight_over_order() {
    let counter = TrackingCounter::new();
    let mut module = CargoModule::new(100);
    assert!(module.heaviest().is_none());

    for weight in [5, 9, 9] {
        module.add(Item::with_source(&counter, "box", weight));
    }
    assert_eq!(module.heaviest().unwrap().weight(), 9);
    assert_eq!(module.heaviest_named("box").unwrap().weight(), 9);
    assert!(module.heaviest_named("crate").is_none());
}

#[test]
fn test_average_weight() {
    let counter = TrackingCounter::new();
    let mut module = CargoModule::new(100);
    assert!(module.average_weight().is_nan());

    module.add(Item::with_source(&counter, "a", 2));
    module.add(Item::with_source(&counter, "a", 4));
    assert_eq!(module.average_weight(), 3.0);
    assert_eq!(module.average_weight_named("a"), 3.0);
    assert!(module.average_weight_named("b").is_nan());
}

#[test]
fn test_items_by_tracking_numbers() {
    let counter = TrackingCounter::new();
    let mut module = CargoModule::new(100);
    let present = Item::with_source(&counter, "a", 1);
    let absent = Item::with_source(&counter, "b", 2);
    let (t1, t2) = (present.tracking(), absent.tracking());
    module.add(present);

    assert!(module.items_by_tracking_numbers(None).is_none());
    assert!(module.items_by_tracking_numbers(Some(&[])).unwrap().is_empty());

    let found = module
        .items_by_tracking_numbers(Some(&[t1, t1, t2]))
        .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].tracking(), t1);
}

#[test]
fn test_items_by_names_reports_every_requested_name() {
    let counter = TrackingCounter::new();
    let mut module = CargoModule::new(100);
    module.add(Item::with_source(&counter, "a", 1));
    module.add(Item::with_source(&counter, "a", 2));

    let names = vec!["a".to_string(), "b".to_string()];
    let map = module.items_by_names(Some(names.as_slice())).unwrap();

    assert_eq!(map.len(), 2);
    let weights: HashSet<i32> = map["a"].iter().map(|i| i.weight()).collect();
    assert_eq!(weights, HashSet::from([1, 2]));
    assert!(map["b"].is_empty());

    let missing: Option<&[String]> = None;
    assert!(module.items_by_names(missing).is_none());
}

#[test]
fn test_tracking_numbers_are_sequential() {
    let counter = TrackingCounter::new();
    let first = Item::with_source(&counter, "first", 1);
    let second = Item::with_source(&counter, "second", 1);
    assert_eq!(first.tracking(), 101);
    assert_eq!(second.tracking(), 102);

    let a = Item::new("global", 1);
    let b = Item::new("global", 1);
    assert!(b.tracking() > a.tracking());
}

#[test]
fn test_clone_collision_is_rejected() {
    let mut module = CargoModule::new(100);
    let item = Item::new("crate", 10);

    module.try_add(item.clone()).unwrap();
    let err = module.try_add(item.clone()).unwrap_err();
    assert!(matches!(err, CargoError::DuplicateTracking { tracking } if tracking == item.tracking()));

    module.add(item);
    assert_eq!(module.item_count(), 1);
}
