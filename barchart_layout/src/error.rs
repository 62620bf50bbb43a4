// Copyright 2025 the Barchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for layout generation.

extern crate alloc;

use alloc::string::String;

use thiserror::Error;

/// Invalid layout configuration.
///
/// Configuration is always checked before any data is read, so a `ConfigError` is reported even
/// when the data would also be rejected.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// Band padding outside `[0, 1)`.
    #[error("padding must be in [0, 1), got {0}")]
    InvalidPadding(f64),
    /// The color palette has no entries.
    #[error("color palette is empty")]
    EmptyPalette,
    /// A band scale was requested over zero categories.
    #[error("band scale needs at least one category")]
    EmptyCategories,
    /// The same category label was passed to a band scale twice.
    #[error("duplicate band category `{0}`")]
    DuplicateCategory(String),
    /// A pixel dimension is zero, negative, or not finite.
    #[error("{name} must be a positive finite size, got {value}")]
    NonPositiveDimension {
        /// Which dimension was rejected (`width`, `height`, `size`).
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A margin is negative or not finite.
    #[error("{side} margin must be finite and non-negative, got {value}")]
    InvalidMargin {
        /// Which side was rejected.
        side: &'static str,
        /// The rejected value.
        value: f64,
    },
}

/// Malformed input series data.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum DataError {
    /// A `y` value given as text does not parse as a number.
    #[error("series `{series}` point {index}: `{raw}` is not numeric")]
    NonNumeric {
        /// Series id.
        series: String,
        /// Point index within the series.
        index: usize,
        /// The offending text.
        raw: String,
    },
    /// A `y` value is NaN or infinite.
    #[error("series `{series}` point {index}: value {value} is not finite")]
    NonFiniteValue {
        /// Series id.
        series: String,
        /// Point index within the series.
        index: usize,
        /// The offending value.
        value: f64,
    },
    /// A numeric `x` category is NaN or infinite.
    #[error("series `{series}` point {index}: category {value} is not finite")]
    NonFiniteCategory {
        /// Series id.
        series: String,
        /// Point index within the series.
        index: usize,
        /// The offending category value.
        value: f64,
    },
    /// Two series share an id.
    #[error("duplicate series id `{0}`")]
    DuplicateSeries(String),
    /// A series has two points for the same category.
    #[error("series `{series}` has more than one point for category `{category}`")]
    DuplicatePoint {
        /// Series id.
        series: String,
        /// Category label.
        category: String,
    },
    /// Two different `(series, category)` pairs produce the same bar key, e.g. series `a.b` at
    /// category `c` and series `a` at category `b.c`.
    #[error("series `{series}` point {index}: bar key `{key}` is already taken")]
    DuplicateKey {
        /// Series id of the later point.
        series: String,
        /// Point index within that series.
        index: usize,
        /// The colliding key.
        key: String,
    },
    /// A running stack total left the finite `f64` range.
    #[error("stack for category `{category}` overflows at series `{series}`")]
    StackOverflow {
        /// Category label.
        category: String,
        /// Series whose value overflowed the total.
        series: String,
    },
}

/// Any failure of a layout generator.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum LayoutError {
    /// Invalid configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Invalid data.
    #[error(transparent)]
    Data(#[from] DataError),
}
