//! Aspect detection: classify the angular separation of two longitudes.
//!
//! An aspect is a named angular relationship (conjunction, sextile, square,
//! trine, opposition) with an exact angle and an allowed deviation ("orb").
//! Detection is a pure scan over a fixed table; at the shipped angles and
//! orbs the windows never overlap, so at most one definition can match.

use serde::{Deserialize, Serialize};

use synastra_chart::separation_deg;

/// The 5 major aspects, in detection-table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Aspect {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
}

/// Harmony classification used by the synastry summary.
///
/// Conjunction is neutral: it counts toward neither partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AspectClass {
    Harmonious,
    Challenging,
    Neutral,
}

impl Aspect {
    /// Lowercase identifier, also the serialized name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Conjunction => "conjunction",
            Self::Sextile => "sextile",
            Self::Square => "square",
            Self::Trine => "trine",
            Self::Opposition => "opposition",
        }
    }

    /// Summary partition: sextile/trine harmonious, square/opposition
    /// challenging, conjunction neutral.
    pub const fn class(self) -> AspectClass {
        match self {
            Self::Sextile | Self::Trine => AspectClass::Harmonious,
            Self::Square | Self::Opposition => AspectClass::Challenging,
            Self::Conjunction => AspectClass::Neutral,
        }
    }

    /// Contribution to the compatibility score.
    pub const fn score_delta(self) -> i32 {
        match self {
            Self::Sextile | Self::Trine => 10,
            Self::Square | Self::Opposition => -5,
            Self::Conjunction => 5,
        }
    }
}

/// One row of the detection table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AspectDefinition {
    /// The aspect this row detects.
    pub aspect: Aspect,
    /// Exact angle of the aspect in degrees.
    pub exact_angle_deg: f64,
    /// Allowed deviation from the exact angle, in degrees, inclusive.
    pub orb_deg: f64,
}

/// The fixed detection table, scanned front to back.
///
/// First match wins. The shipped windows (0±8, 60±6, 90±8, 120±8, 180±8)
/// are pairwise non-overlapping, but table order is the binding tie-break
/// rule should a future row (say, semisextile at 30) introduce overlap.
pub const ASPECT_TABLE: [AspectDefinition; 5] = [
    AspectDefinition {
        aspect: Aspect::Conjunction,
        exact_angle_deg: 0.0,
        orb_deg: 8.0,
    },
    AspectDefinition {
        aspect: Aspect::Sextile,
        exact_angle_deg: 60.0,
        orb_deg: 6.0,
    },
    AspectDefinition {
        aspect: Aspect::Square,
        exact_angle_deg: 90.0,
        orb_deg: 8.0,
    },
    AspectDefinition {
        aspect: Aspect::Trine,
        exact_angle_deg: 120.0,
        orb_deg: 8.0,
    },
    AspectDefinition {
        aspect: Aspect::Opposition,
        exact_angle_deg: 180.0,
        orb_deg: 8.0,
    },
];

/// A detected aspect between two longitudes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AspectMatch {
    /// The matched aspect.
    pub aspect: Aspect,
    /// Exact angle of the matched definition, in degrees.
    pub exact_angle_deg: f64,
    /// Computed deviation from the exact angle, in degrees.
    pub orb_deg: f64,
}

/// Classify the angular separation of two longitudes.
///
/// Inputs are expected already normalized to [0, 360); no re-normalization
/// happens here. The shortest separation (in [0, 180]) is checked against
/// each table row in order; `None` means no aspect, a valid non-error
/// outcome. Pure and symmetric in its arguments.
pub fn detect_aspect(lon_a_deg: f64, lon_b_deg: f64) -> Option<AspectMatch> {
    let separation = separation_deg(lon_a_deg, lon_b_deg);
    for def in ASPECT_TABLE {
        let orb = (separation - def.exact_angle_deg).abs();
        if orb <= def.orb_deg {
            return Some(AspectMatch {
                aspect: def.aspect,
                exact_angle_deg: def.exact_angle_deg,
                orb_deg: orb,
            });
        }
    }
    None
}
