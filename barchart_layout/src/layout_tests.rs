// Copyright 2025 the Barchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate std;

use alloc::vec;
use alloc::vec::Vec;

use peniko::color::palette::css;

use crate::{
    BarDiff, BarMode, Category, DataError, LayoutError, LayoutOptions, Point, Series,
    diff_bars, generate_grouped, generate_stacked,
};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn quarterly() -> Vec<Series> {
    vec![
        Series::new(
            "north",
            [
                Point::new("q1", 12),
                Point::new("q2", 15),
                Point::new("q3", 9),
            ],
        ),
        Series::new(
            "south",
            [
                Point::new("q1", 7),
                Point::new("q2", "11"),
                Point::new("q3", 14),
            ],
        ),
        Series::new("west", [Point::new("q2", 4), Point::new("q4", 6)]),
    ]
}

#[test]
fn both_modes_emit_the_same_keys() {
    let opts = LayoutOptions::default();
    let grouped = generate_grouped(&quarterly(), 400.0, 300.0, &[css::RED], &opts).unwrap();
    let stacked = generate_stacked(&quarterly(), 400.0, 300.0, &[css::RED], &opts).unwrap();

    let mut g: Vec<&str> = grouped.bars.iter().map(|b| b.key.as_str()).collect();
    let mut s: Vec<&str> = stacked.bars.iter().map(|b| b.key.as_str()).collect();
    assert_eq!(g.len(), 8);
    g.sort_unstable();
    s.sort_unstable();
    assert_eq!(g, s);
    assert_eq!(grouped.x_scale.count(), 4);
    assert_eq!(
        grouped.x_scale.domain()[3],
        Category::from("q4"),
        "categories keep first-occurrence order"
    );
}

#[test]
fn every_bar_stays_inside_its_band() {
    let layout = generate_grouped(
        &quarterly(),
        400.0,
        300.0,
        &[css::RED],
        &LayoutOptions::default().with_x_padding(0.3),
    )
    .unwrap();
    for bar in &layout.bars {
        let (x0, x1) = layout.x_scale.band(&bar.category).unwrap();
        assert!(bar.x >= x0 - 1e-9 && bar.x + bar.width <= x1 + 1e-9, "{}", bar.key);
        assert!(bar.width >= 0.0 && bar.height >= 0.0);
        assert!(bar.y >= -1e-9 && bar.y + bar.height <= 300.0 + 1e-9);
    }
}

#[test]
fn stacked_tops_reach_the_category_sums() {
    let layout = generate_stacked(
        &quarterly(),
        400.0,
        260.0,
        &[css::RED],
        &LayoutOptions::default(),
    )
    .unwrap();
    // q2 = 15 + 11 + 4 is the tallest stack.
    assert_eq!(layout.y_scale.domain(), (0.0, 30.0));
    let q2_top = layout
        .bars
        .iter()
        .filter(|b| b.category == Category::from("q2"))
        .map(|b| b.y)
        .fold(f64::INFINITY, f64::min);
    assert!(close(q2_top, 0.0));
    let west_q2 = layout.bars.iter().find(|b| b.key == "west.q2").unwrap();
    assert_eq!(west_q2.base, 26.0);
}

#[test]
fn colors_follow_series_position_and_wrap() {
    let layout = generate_stacked(
        &quarterly(),
        100.0,
        100.0,
        &[css::RED, css::BLUE],
        &LayoutOptions::default(),
    )
    .unwrap();
    let color_of = |key: &str| {
        layout
            .bars
            .iter()
            .find(|b| b.key == key)
            .map(|b| b.color.to_rgba8())
    };
    assert_eq!(color_of("north.q1"), Some(css::RED.to_rgba8()));
    assert_eq!(color_of("south.q3"), Some(css::BLUE.to_rgba8()));
    assert_eq!(color_of("west.q4"), Some(css::RED.to_rgba8()));
}

#[test]
fn relayout_after_a_value_change_is_all_updates() {
    let before = BarMode::Stacked
        .generate(&quarterly(), 200.0, 100.0, &[css::RED], &LayoutOptions::default())
        .unwrap();
    let mut changed = quarterly();
    changed[0].data[1] = Point::new("q2", 40);
    let after = BarMode::Stacked
        .generate(&changed, 200.0, 100.0, &[css::RED], &LayoutOptions::default())
        .unwrap();

    let diffs = diff_bars(&before.bars, &after.bars);
    assert_eq!(diffs.len(), before.bars.len());
    assert!(diffs.iter().all(|d| matches!(d, BarDiff::Update { .. })));
}

#[test]
fn numeric_categories_share_identity_with_their_labels() {
    let series = vec![
        Series::new("a", [Point::new(2020, 1), Point::new(2021, 2)]),
        Series::new("b", [Point::new("2020", 3)]),
    ];
    let layout =
        generate_grouped(&series, 100.0, 100.0, &[css::RED], &LayoutOptions::default()).unwrap();
    assert_eq!(layout.x_scale.count(), 2);
    let keys: Vec<&str> = layout.bars.iter().map(|b| b.key.as_str()).collect();
    assert_eq!(keys, ["a.2020", "b.2020", "a.2021"]);
}

#[test]
fn bad_data_reports_series_and_point() {
    let mut series = quarterly();
    series[1].data[2] = Point::new("q3", "n/a");
    let err = generate_stacked(&series, 100.0, 100.0, &[css::RED], &LayoutOptions::default())
        .unwrap_err();
    assert_eq!(
        err,
        LayoutError::Data(DataError::NonNumeric {
            series: "south".into(),
            index: 2,
            raw: "n/a".into(),
        })
    );
}

#[test]
fn dotted_ids_cannot_alias_another_bar() {
    let series = vec![
        Series::new("a.b", [Point::new("c", 1)]),
        Series::new("a", [Point::new("b.c", 2)]),
    ];
    for mode in [BarMode::Grouped, BarMode::Stacked] {
        let err = mode
            .generate(&series, 100.0, 100.0, &[css::RED], &LayoutOptions::default())
            .unwrap_err();
        assert!(
            matches!(err, LayoutError::Data(DataError::DuplicateKey { ref key, .. }) if key == "a.b.c"),
            "{mode:?}: {err:?}"
        );
    }
}
