//! Natal aspect grid: pairwise aspects within a single chart.
//!
//! Every unordered pair of points the chart carries is checked, chart
//! angles (ascendant, midheaven) included. The first matching table row
//! per pair is recorded; pairs with no aspect are omitted.

use serde::Serialize;

use synastra_chart::{Body, Chart};

use crate::aspect::{Aspect, detect_aspect};
use crate::error::SynastryError;

/// One aspect between two points of the same chart.
///
/// `body_a` always precedes `body_b` in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NatalAspect {
    /// First point of the pair.
    pub body_a: Body,
    /// Second point of the pair.
    pub body_b: Body,
    /// The matched aspect.
    pub aspect: Aspect,
    /// Exact angle of the matched definition, in degrees.
    pub exact_angle_deg: f64,
    /// Computed deviation from the exact angle, in degrees.
    pub orb_deg: f64,
}

/// Compute the aspect grid over all pairs of points present in a chart.
///
/// Output order is deterministic: pairs are enumerated in declaration
/// order of the first, then the second body.
pub fn natal_aspects(chart: &Chart) -> Result<Vec<NatalAspect>, SynastryError> {
    chart.validate()?;

    let present: Vec<(Body, f64)> = chart.iter().map(|(&b, &lon)| (b, lon)).collect();
    let mut aspects = Vec::new();
    for (i, &(body_a, lon_a)) in present.iter().enumerate() {
        for &(body_b, lon_b) in &present[i + 1..] {
            if let Some(m) = detect_aspect(lon_a, lon_b) {
                aspects.push(NatalAspect {
                    body_a,
                    body_b,
                    aspect: m.aspect,
                    exact_angle_deg: m.exact_angle_deg,
                    orb_deg: m.orb_deg,
                });
            }
        }
    }
    Ok(aspects)
}
