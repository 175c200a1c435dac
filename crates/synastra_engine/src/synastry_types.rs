//! Types for synastry analysis results.

use serde::Serialize;

use synastra_chart::Body;

use crate::aspect::Aspect;
use crate::interpretation::Interpretation;

/// One cross-chart aspect found between the same body in two charts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DetectedAspect {
    /// The personal planet the aspect was found on.
    pub body: Body,
    /// The matched aspect.
    pub aspect: Aspect,
    /// Harmony/challenge framing for the aspect.
    pub interpretation: Interpretation,
}

/// Result of one synastry analysis.
///
/// Produced fresh per call and owned by the caller; the enclosing layer
/// serializes it for transport.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SynastryResult {
    /// Detected aspects in fixed personal-planet order (sun, moon, venus, mars).
    pub aspects: Vec<DetectedAspect>,
    /// One-line summary of the aspect counts.
    pub summary: String,
    /// Compatibility score in [0, 100].
    pub compatibility_score: u8,
}
