// Copyright 2025 the Barchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input series data and its normalized, category-major form.
//!
//! Callers hand the generators a list of [`Series`], each an ordered list of `(x, y)` points.
//! Before any geometry is produced the input is validated and pivoted into a [`SeriesTable`]:
//! - categories are collected in first-occurrence order across all series,
//! - every `y` is coerced to a finite `f64`,
//! - each category gets the list of `(series, value)` cells present for it, in series order.

extern crate alloc;

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use hashbrown::{HashMap, HashSet};
use smallvec::SmallVec;

use crate::error::DataError;
use crate::format::format_number;
use crate::geometry::bar_key;

/// A category key on the band axis.
///
/// Two categories are the same category when their [labels](Category::label) are equal, so
/// `Number(1.0)` and `Text("1")` name one category.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum Category {
    /// A numeric key.
    Number(f64),
    /// A text key.
    Text(String),
}

impl Category {
    /// Returns the canonical label used for identity, bar keys and axis ticks.
    pub fn label(&self) -> Cow<'_, str> {
        match self {
            Self::Number(n) => Cow::Owned(format_number(*n)),
            Self::Text(s) => Cow::Borrowed(s),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        Self::Text(value.into())
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for Category {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Category {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

/// A raw `y` value: either a number or numeric text.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum Value {
    /// A number.
    Number(f64),
    /// Text that should parse as a number (surrounding whitespace is ignored).
    Text(String),
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.into())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// One `(category, value)` point of a series.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// Category key.
    pub x: Category,
    /// Value.
    pub y: Value,
}

impl Point {
    /// Creates a point.
    pub fn new(x: impl Into<Category>, y: impl Into<Value>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }
}

/// A named sequence of points.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Series {
    /// Unique series id.
    pub id: String,
    /// Points in declaration order.
    pub data: Vec<Point>,
}

impl Series {
    /// Creates a series.
    pub fn new(id: impl Into<String>, data: impl IntoIterator<Item = Point>) -> Self {
        Self {
            id: id.into(),
            data: data.into_iter().collect(),
        }
    }
}

/// One series' value within a category.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    /// Index of the series in declaration order.
    pub series: usize,
    /// The resolved value.
    pub value: f64,
}

/// Validated series data, pivoted to category-major order.
#[derive(Clone, Debug)]
pub struct SeriesTable<'a> {
    categories: Vec<Category>,
    series_ids: Vec<&'a str>,
    cells: Vec<SmallVec<[Cell; 4]>>,
}

impl<'a> SeriesTable<'a> {
    /// Categories in first-occurrence order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Series ids in declaration order.
    pub fn series_ids(&self) -> &[&'a str] {
        &self.series_ids
    }

    /// Cells for the category at `index`, in series order.
    ///
    /// Series without a point for the category have no cell.
    pub fn cells(&self, index: usize) -> &[Cell] {
        self.cells.get(index).map(|c| c.as_slice()).unwrap_or(&[])
    }

    /// Returns `true` if there are no categories (and therefore no points).
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Iterates over every resolved value.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.cells.iter().flatten().map(|c| c.value)
    }
}

/// Validates `series` and pivots it into a [`SeriesTable`].
///
/// Every accepted point yields a distinct [bar key](crate::bar_key); ids or labels containing `.`
/// that would make two keys equal are rejected with [`DataError::DuplicateKey`].
pub fn normalize(series: &[Series]) -> Result<SeriesTable<'_>, DataError> {
    let mut seen_ids: HashSet<&str> = HashSet::with_capacity(series.len());
    let mut index_by_label: HashMap<String, usize> = HashMap::new();
    let mut categories = Vec::new();
    let mut cells: Vec<SmallVec<[Cell; 4]>> = Vec::new();
    let mut series_ids = Vec::with_capacity(series.len());
    let mut keys: HashSet<String> = HashSet::new();

    for (s, serie) in series.iter().enumerate() {
        if !seen_ids.insert(serie.id.as_str()) {
            return Err(DataError::DuplicateSeries(serie.id.clone()));
        }
        series_ids.push(serie.id.as_str());

        for (index, point) in serie.data.iter().enumerate() {
            if let Category::Number(n) = point.x
                && !n.is_finite()
            {
                return Err(DataError::NonFiniteCategory {
                    series: serie.id.clone(),
                    index,
                    value: n,
                });
            }
            let value = resolve_value(&serie.id, index, &point.y)?;

            let label = point.x.label();
            let c = match index_by_label.get(label.as_ref()) {
                Some(&c) => c,
                None => {
                    let c = categories.len();
                    index_by_label.insert(label.into_owned(), c);
                    categories.push(point.x.clone());
                    cells.push(SmallVec::new());
                    c
                }
            };

            // Series are visited in order, so an earlier cell for `s` would be the last one.
            let column = &mut cells[c];
            if column.last().is_some_and(|cell| cell.series == s) {
                return Err(DataError::DuplicatePoint {
                    series: serie.id.clone(),
                    category: categories[c].label().into_owned(),
                });
            }
            let key = bar_key(&serie.id, &categories[c]);
            if !keys.insert(key.clone()) {
                return Err(DataError::DuplicateKey {
                    series: serie.id.clone(),
                    index,
                    key,
                });
            }
            column.push(Cell { series: s, value });
        }
    }

    Ok(SeriesTable {
        categories,
        series_ids,
        cells,
    })
}

fn resolve_value(series: &str, index: usize, y: &Value) -> Result<f64, DataError> {
    let v = match y {
        Value::Number(n) => *n,
        Value::Text(raw) => raw
            .trim()
            .parse::<f64>()
            .map_err(|_| DataError::NonNumeric {
                series: series.into(),
                index,
                raw: raw.clone(),
            })?,
    };
    if !v.is_finite() {
        return Err(DataError::NonFiniteValue {
            series: series.into(),
            index,
            value: v,
        });
    }
    Ok(v)
}
