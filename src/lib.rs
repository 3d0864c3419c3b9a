//! Projection NN - WASM Module
//!
//! This crate answers nearest-neighbor queries over a static set of 2D points.
//! Points are indexed once by sorting them on x; each query then seeds from
//! the closest x and expands outward, pruning with the x distance. It compiles
//! to WebAssembly and exposes a JavaScript-friendly API via wasm-bindgen, and
//! is equally usable as a plain Rust library.
//!
//! # Architecture
//!
//! - `geometry`: Point type and flat positions conversion
//! - `spatial`: Sorted projection index, search engine and brute-force reference
//! - `error`: Errors raised while loading positions
//! - `logging`: `log` backend for the browser console

use log::LevelFilter;
use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::prelude::*;

pub mod error;
pub mod geometry;
pub mod logging;
pub mod spatial;

pub use error::PositionsError;
pub use geometry::Point;
pub use spatial::{IndexConfig, NearestNeighborIndex, SearchStats, SeedRounding, XTieBreak};

use geometry::{points_from_positions, points_to_positions};

/// Initialize the WASM module.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    logging::init(LevelFilter::Info);
}

/// Set the console log level ("off", "error", "warn", "info", "debug", "trace").
#[wasm_bindgen(js_name = setLogLevel)]
pub fn set_log_level(level: &str) -> Result<(), JsValue> {
    let filter = logging::parse_level(level)
        .ok_or_else(|| JsValue::from_str(&format!("unknown log level: {level}")))?;
    logging::init(filter);
    Ok(())
}

fn to_js_error(err: PositionsError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Main entry point for nearest-neighbor queries.
///
/// This struct wraps the internal NearestNeighborIndex and provides the public
/// API exposed to JavaScript.
#[wasm_bindgen]
pub struct NearestNeighborWasm {
    index: NearestNeighborIndex,
}

#[wasm_bindgen]
impl NearestNeighborWasm {
    /// Index the points in a positions array [x0, y0, x1, y1, ...].
    ///
    /// Fails if the array has odd length or holds non-finite values.
    #[wasm_bindgen(constructor)]
    pub fn new(positions: &[f64]) -> Result<NearestNeighborWasm, JsValue> {
        let points = points_from_positions(positions).map_err(to_js_error)?;
        Ok(Self {
            index: NearestNeighborIndex::new(points),
        })
    }

    /// Index a positions array with explicit configuration.
    ///
    /// `config` is an object such as `{ seedRounding: "ceil", xTieBreak: "thenY" }`.
    /// Missing fields, `null` or `undefined` fall back to the defaults.
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(positions: &[f64], config: JsValue) -> Result<NearestNeighborWasm, JsValue> {
        let config: IndexConfig = if config.is_undefined() || config.is_null() {
            IndexConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)?
        };

        let points = points_from_positions(positions).map_err(to_js_error)?;
        Ok(Self {
            index: NearestNeighborIndex::with_config(points, config),
        })
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Find the nearest point to (x, y).
    ///
    /// Returns [x, y], or undefined if the index is empty.
    #[wasm_bindgen(js_name = findNearest)]
    pub fn find_nearest(&self, x: f64, y: f64) -> Option<Vec<f64>> {
        self.index
            .find_nearest(Point::new(x, y))
            .map(|p| vec![p.x, p.y])
    }

    /// Find the nearest point within a maximum distance.
    ///
    /// Returns [x, y], or undefined if no point is within the distance.
    #[wasm_bindgen(js_name = findNearestWithin)]
    pub fn find_nearest_within(&self, x: f64, y: f64, max_distance: f64) -> Option<Vec<f64>> {
        self.index
            .find_nearest_within(Point::new(x, y), max_distance)
            .map(|p| vec![p.x, p.y])
    }

    /// Find the nearest point as an `{ x, y }` object, or null if the index is empty.
    #[wasm_bindgen(js_name = findNearestPoint)]
    pub fn find_nearest_point(&self, x: f64, y: f64) -> Result<JsValue, JsValue> {
        let nearest = self.index.find_nearest(Point::new(x, y));
        let serializer = Serializer::new().serialize_missing_as_null(true);
        Ok(nearest.serialize(&serializer)?)
    }

    /// Find the nearest point in a positions array by checking every point.
    ///
    /// Does not build an index. Returns [x, y], or undefined if empty.
    #[wasm_bindgen(js_name = findNearestBruteForce)]
    pub fn find_nearest_brute_force(
        positions: &[f64],
        x: f64,
        y: f64,
    ) -> Result<Option<Vec<f64>>, JsValue> {
        let points = points_from_positions(positions).map_err(to_js_error)?;
        Ok(
            NearestNeighborIndex::find_nearest_brute_force(Point::new(x, y), &points)
                .map(|p| vec![p.x, p.y]),
        )
    }

    // =========================================================================
    // Index Utilities
    // =========================================================================

    /// Get the indexed positions in x-sorted order as [x0, y0, x1, y1, ...].
    #[wasm_bindgen(js_name = sortedPositions)]
    pub fn sorted_positions(&self) -> Vec<f64> {
        points_to_positions(self.index.sorted_points())
    }

    /// Get the smallest and largest x as [min_x, max_x], or undefined if empty.
    #[wasm_bindgen(js_name = xRange)]
    pub fn x_range(&self) -> Option<Vec<f64>> {
        self.index.x_range().map(|(min_x, max_x)| vec![min_x, max_x])
    }

    /// Get the number of indexed points.
    pub fn len(&self) -> u32 {
        u32::try_from(self.index.len()).unwrap_or(u32::MAX)
    }

    /// Check if the index is empty.
    #[wasm_bindgen(js_name = isEmpty)]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

impl NearestNeighborWasm {
    /// The underlying index.
    pub fn index(&self) -> &NearestNeighborIndex {
        &self.index
    }
}

impl Default for NearestNeighborWasm {
    fn default() -> Self {
        Self {
            index: NearestNeighborIndex::default(),
        }
    }
}
