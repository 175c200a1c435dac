//! Harmony/challenge interpretation text for each aspect.
//!
//! The table is a compile-time constant lookup: the match is exhaustive
//! over [`Aspect`], so every aspect the detector can produce has an entry
//! and a detector/table desync cannot compile.

use serde::Serialize;

use crate::aspect::Aspect;

/// Descriptive framing of one aspect, from both angles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Interpretation {
    /// How the aspect reads at its best.
    pub harmony: &'static str,
    /// How the aspect reads under strain.
    pub challenge: &'static str,
}

/// Interpretation text for an aspect.
pub const fn interpretation(aspect: Aspect) -> Interpretation {
    match aspect {
        Aspect::Conjunction => Interpretation {
            harmony: "strong merging of energies",
            challenge: "possible fusion or conflict of interests",
        },
        Aspect::Sextile => Interpretation {
            harmony: "harmonious interaction",
            challenge: "mild tension",
        },
        Aspect::Square => Interpretation {
            harmony: "stimulus for growth",
            challenge: "tension and conflicts",
        },
        Aspect::Trine => Interpretation {
            harmony: "natural support",
            challenge: "possible passivity",
        },
        Aspect::Opposition => Interpretation {
            harmony: "balance of opposites",
            challenge: "polarity and confrontation",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aspect::ASPECT_TABLE;

    #[test]
    fn every_aspect_has_text() {
        for def in ASPECT_TABLE {
            let i = interpretation(def.aspect);
            assert!(!i.harmony.is_empty());
            assert!(!i.challenge.is_empty());
        }
    }

    #[test]
    fn texts_distinct_per_aspect() {
        let texts: Vec<&str> = ASPECT_TABLE
            .iter()
            .map(|d| interpretation(d.aspect).harmony)
            .collect();
        for (i, a) in texts.iter().enumerate() {
            for b in &texts[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn serializes_both_fields() {
        let json = serde_json::to_string(&interpretation(Aspect::Trine)).unwrap();
        assert_eq!(
            json,
            r#"{"harmony":"natural support","challenge":"possible passivity"}"#
        );
    }
}
