//! Synastry analysis: cross-chart aspects, summary, compatibility score.
//!
//! Compares the four personal planets (sun, moon, venus, mars) between two
//! charts. A body absent from either chart is skipped, not an error; both
//! charts are validated up front so a bad longitude never yields partial
//! results. Pure and synchronous: at most four detections per call, no
//! shared state, identical inputs always produce identical results.

use synastra_chart::{Chart, PERSONAL_BODIES};

use crate::aspect::{AspectClass, detect_aspect};
use crate::error::SynastryError;
use crate::interpretation::interpretation;
use crate::synastry_types::{DetectedAspect, SynastryResult};

/// Baseline compatibility score before any aspect contributes.
const BASELINE_SCORE: i32 = 50;

/// Summary used when no aspects were found between the charts.
const EMPTY_SUMMARY: &str = "Minimal interaction aspects";

/// Analyze the synastry between two charts.
///
/// Walks the personal planets in fixed order, detecting the aspect (if
/// any) between each body's longitude in the two charts, and reduces the
/// detected set into a summary line and a compatibility score.
pub fn analyze(chart_a: &Chart, chart_b: &Chart) -> Result<SynastryResult, SynastryError> {
    chart_a.validate()?;
    chart_b.validate()?;

    let mut aspects = Vec::with_capacity(PERSONAL_BODIES.len());
    for body in PERSONAL_BODIES {
        let Some(lon_a) = chart_a.longitude(body) else {
            continue;
        };
        let Some(lon_b) = chart_b.longitude(body) else {
            continue;
        };
        if let Some(m) = detect_aspect(lon_a, lon_b) {
            aspects.push(DetectedAspect {
                body,
                aspect: m.aspect,
                interpretation: interpretation(m.aspect),
            });
        }
    }

    let summary = summary_line(&aspects);
    let compatibility_score = compatibility_score(&aspects);
    Ok(SynastryResult {
        aspects,
        summary,
        compatibility_score,
    })
}

/// Summary line for a detected-aspect list.
///
/// Empty list gets its own branch; otherwise the total plus the
/// harmonious (sextile/trine) and challenging (square/opposition) counts.
/// Conjunctions count toward the total only.
pub fn summary_line(aspects: &[DetectedAspect]) -> String {
    if aspects.is_empty() {
        return EMPTY_SUMMARY.to_string();
    }
    let harmonious = aspects
        .iter()
        .filter(|a| a.aspect.class() == AspectClass::Harmonious)
        .count();
    let challenging = aspects
        .iter()
        .filter(|a| a.aspect.class() == AspectClass::Challenging)
        .count();
    format!(
        "Total aspects: {} (harmonious: {harmonious}, challenging: {challenging})",
        aspects.len()
    )
}

/// Compatibility score for a detected-aspect list.
///
/// Integer accumulation from a baseline of 50: sextile/trine +10,
/// square/opposition -5, conjunction +5, clamped to [0, 100]. Total for
/// any aspect list, not only lists `analyze` can produce.
pub fn compatibility_score(aspects: &[DetectedAspect]) -> u8 {
    let score: i32 = aspects
        .iter()
        .fold(BASELINE_SCORE, |acc, a| acc + a.aspect.score_delta());
    score.clamp(0, 100) as u8
}
