//! End-to-end label workflow: pool-seeded manager driving a deduplicated
//! legend across repeated draw calls.

use std::collections::BTreeMap;

use plotassist::{color_pool, PlotLabelManager, StyleArgs, StyleValue, LABEL_KEY};

#[test]
fn pooled_manager_deduplicates_legend_text() {
    let pools = BTreeMap::from([(
        "color".to_string(),
        vec![StyleValue::from("c1"), StyleValue::from("c2")],
    )]);
    let mut manager = PlotLabelManager::with_pools(pools);

    manager.add("series_a", "Series A", None).unwrap();
    manager.add("series_b", "Series B", None).unwrap();

    // First draw call for series_a: color from the pool tail, text present.
    let first = manager.get_args(&"series_a", true).unwrap();
    assert_eq!(first.get("color"), Some(&StyleValue::from("c2")));
    assert_eq!(first.get(LABEL_KEY), Some(&StyleValue::from("Series A")));

    // Later draw calls keep the color but suppress the legend text.
    let second = manager.get_args(&"series_a", true).unwrap();
    assert_eq!(second.get("color"), Some(&StyleValue::from("c2")));
    assert_eq!(second.get(LABEL_KEY), Some(&StyleValue::Null));

    // series_b is unaffected by series_a retrievals.
    let other = manager.get_args(&"series_b", true).unwrap();
    assert_eq!(other.get("color"), Some(&StyleValue::from("c1")));
    assert_eq!(other.get(LABEL_KEY), Some(&StyleValue::from("Series B")));
}

#[test]
fn generated_color_pool_feeds_many_series() {
    let pools = BTreeMap::from([("color".to_string(), color_pool(8))]);
    let mut manager = PlotLabelManager::with_pools(pools);

    for i in 0..8 {
        manager
            .add(format!("series_{i}"), format!("Series {i}"), None)
            .unwrap();
    }

    // Every series got a distinct color.
    let mut colors = std::collections::BTreeSet::new();
    for label in manager.get_all_labels() {
        match label.style_args().get("color") {
            Some(StyleValue::String(hex)) => {
                colors.insert(hex.clone());
            }
            other => panic!("expected hex color, got {other:?}"),
        }
    }
    assert_eq!(colors.len(), 8);
}

#[test]
fn style_args_round_trip_through_json() {
    let mut args = StyleArgs::new();
    args.insert("color".to_string(), StyleValue::from("#ff0000"));
    args.insert("linewidth".to_string(), StyleValue::from(2i64));
    args.insert("alpha".to_string(), StyleValue::from(0.5));
    args.insert("filled".to_string(), StyleValue::from(true));

    let encoded = serde_json::to_string(&args).unwrap();
    let decoded: StyleArgs = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, args);
}
