use crate::domain::model::{CargoSummary, Item};
use std::collections::HashMap;

pub fn render_summary(summary: &CargoSummary) -> String {
    let mut report = String::new();
    report.push_str("==================================================\n");
    report.push_str("                  Cargo Module Report             \n");
    report.push_str("==================================================\n");
    report.push_str(&format!("  Capacity:        {}\n", summary.max_weight));
    report.push_str(&format!("  Items:           {}\n", summary.item_count));
    report.push_str(&format!("  Total weight:    {}\n", summary.total_weight));
    match summary.average_weight {
        Some(avg) => report.push_str(&format!("  Average weight:  {:.2}\n", avg)),
        None => report.push_str("  Average weight:  n/a\n"),
    }
    match &summary.heaviest {
        Some(h) => report.push_str(&format!(
            "  Heaviest:        #{} {} ({})\n",
            h.tracking, h.name, h.weight
        )),
        None => report.push_str("  Heaviest:        n/a\n"),
    }
    if summary.is_over_weight {
        report.push_str(&format!(
            "  Status:          OVERWEIGHT by {}\n",
            summary.total_weight - i64::from(summary.max_weight)
        ));
    } else {
        report.push_str("  Status:          within capacity\n");
    }
    report.push_str("==================================================\n");
    report
}

/// One line per item, `#tracking name weight`.
pub fn render_items(items: &[&Item]) -> String {
    if items.is_empty() {
        return "  (none)\n".to_string();
    }
    items
        .iter()
        .map(|item| {
            format!(
                "  #{:<8} {:<20} {:>8}\n",
                item.tracking(),
                item.name(),
                item.weight()
            )
        })
        .collect()
}

/// Sections for each requested name, in the order the names were given.
pub fn render_by_name(names: &[String], groups: &HashMap<String, Vec<&Item>>) -> String {
    let mut report = String::new();
    for name in names {
        report.push_str(&format!("[{}]\n", name));
        let items = groups.get(name).map(Vec::as_slice).unwrap_or(&[]);
        report.push_str(&render_items(items));
    }
    report
}
