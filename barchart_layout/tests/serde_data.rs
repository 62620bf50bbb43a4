// Copyright 2025 the Barchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Series input in its JSON shape.

#![cfg(feature = "serde")]

use barchart_layout::{BarChartSpec, BarMode, Category, DataError, LayoutError, Series, Value};

const SALES: &str = r#"[
  { "id": "coffee", "data": [ { "x": "mon", "y": 4 }, { "x": "tue", "y": "6.5" } ] },
  { "id": "tea",    "data": [ { "x": "mon", "y": 2 }, { "x": 3,     "y": 1 } ] }
]"#;

#[test]
fn json_series_deserialize_untagged() {
    let series: Vec<Series> = serde_json::from_str(SALES).unwrap();
    assert_eq!(series.len(), 2);
    assert_eq!(series[0].data[1].y, Value::Text("6.5".into()));
    assert_eq!(series[1].data[1].x, Category::Number(3.0));
}

#[test]
fn json_series_lay_out_in_both_modes() {
    let series: Vec<Series> = serde_json::from_str(SALES).unwrap();
    for mode in [BarMode::Grouped, BarMode::Stacked] {
        let chart = BarChartSpec::new(300.0, 200.0)
            .with_mode(mode)
            .layout(&series)
            .unwrap();
        let keys: Vec<&str> = chart.bars.bars.iter().map(|b| b.key.as_str()).collect();
        assert_eq!(keys, ["coffee.mon", "tea.mon", "coffee.tue", "tea.3"]);
    }
}

#[test]
fn text_that_is_not_a_number_is_reported() {
    let series: Vec<Series> =
        serde_json::from_str(r#"[{ "id": "s", "data": [{ "x": "a", "y": "lots" }] }]"#).unwrap();
    let err = BarChartSpec::new(100.0, 100.0).layout(&series).unwrap_err();
    assert!(matches!(
        err,
        LayoutError::Data(DataError::NonNumeric { ref raw, .. }) if raw == "lots"
    ));
    assert_eq!(
        err.to_string(),
        "series `s` point 0: `lots` is not numeric"
    );
}
