//! The chart container: a body → longitude mapping with validation.
//!
//! A chart is supplied by an external collaborator that has already
//! computed the longitudes (ephemeris work is out of scope here). Any
//! subset of the 13 chart points may be present; absent bodies are not
//! an error anywhere in the analysis.

use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::{Deserialize, Serialize};

use crate::body::Body;
use crate::error::ChartError;
use crate::sign::{SignPosition, sign_from_longitude};

/// A computed chart: tropical ecliptic longitudes keyed by chart point.
///
/// Serializes transparently as the bare map, e.g. `{"sun": 10.0}`.
/// Iteration follows `Body` declaration order, so output derived from a
/// chart is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Chart {
    longitudes: BTreeMap<Body, f64>,
}

impl Chart {
    /// Empty chart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a chart from (body, longitude) pairs.
    ///
    /// Later pairs overwrite earlier ones for the same body.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (Body, f64)>,
    {
        Self {
            longitudes: pairs.into_iter().collect(),
        }
    }

    /// Set (or replace) the longitude for a body.
    pub fn set(&mut self, body: Body, lon_deg: f64) {
        self.longitudes.insert(body, lon_deg);
    }

    /// Longitude in degrees for a body, if present.
    pub fn longitude(&self, body: Body) -> Option<f64> {
        self.longitudes.get(&body).copied()
    }

    /// Whether the chart carries a longitude for this body.
    pub fn contains(&self, body: Body) -> bool {
        self.longitudes.contains_key(&body)
    }

    /// Bodies present in the chart, in declaration order.
    pub fn bodies(&self) -> impl Iterator<Item = Body> + '_ {
        self.longitudes.keys().copied()
    }

    /// (body, longitude) pairs in declaration order.
    pub fn iter(&self) -> btree_map::Iter<'_, Body, f64> {
        self.longitudes.iter()
    }

    /// Number of bodies present.
    pub fn len(&self) -> usize {
        self.longitudes.len()
    }

    /// Whether the chart carries no bodies at all.
    pub fn is_empty(&self) -> bool {
        self.longitudes.is_empty()
    }

    /// Zodiac sign placement for a body, if present.
    pub fn sign_position(&self, body: Body) -> Option<SignPosition> {
        self.longitude(body).map(sign_from_longitude)
    }

    /// Check every stored longitude is finite and in [0, 360).
    ///
    /// Aspect detection never re-normalizes its inputs, so out-of-range
    /// values are a caller contract violation and are rejected here
    /// rather than silently coerced. Run at every analysis entry point.
    pub fn validate(&self) -> Result<(), ChartError> {
        for (&body, &lon) in &self.longitudes {
            if !lon.is_finite() {
                return Err(ChartError::NonFiniteLongitude { body });
            }
            if !(0.0..360.0).contains(&lon) {
                return Err(ChartError::LongitudeOutOfRange {
                    body,
                    longitude_deg: lon,
                });
            }
        }
        Ok(())
    }
}

impl FromIterator<(Body, f64)> for Chart {
    fn from_iter<I: IntoIterator<Item = (Body, f64)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}
