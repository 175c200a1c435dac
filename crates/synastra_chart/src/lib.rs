//! Chart foundations for aspect analysis.
//!
//! This crate provides:
//! - The closed set of chart points (bodies) and the personal-planet subset
//! - Zodiac sign identification from ecliptic longitude
//! - The chart container (body → longitude mapping) with validation
//! - Shared angle utilities (normalization, shortest separation)
//!
//! Longitudes are tropical ecliptic degrees in `[0, 360)`. Computing them
//! is an external collaborator's job; this crate only stores, validates,
//! and measures them.

pub mod body;
pub mod chart;
pub mod error;
pub mod sign;
pub mod util;

pub use body::{ALL_BODIES, Body, PERSONAL_BODIES};
pub use chart::Chart;
pub use error::ChartError;
pub use sign::{ALL_SIGNS, SignPosition, ZodiacSign, sign_from_longitude};
pub use util::{normalize_360, separation_deg};
