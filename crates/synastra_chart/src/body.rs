//! Chart points (bodies) recognized by the analysis.
//!
//! The set is closed: ten planets, the true lunar node, and the two chart
//! angles (ascendant, midheaven). Synastry comparison only ever looks at
//! the four personal planets; the natal grid takes every point a chart
//! carries.

use serde::{Deserialize, Serialize};

/// The 13 chart points a computed chart can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    TrueNode,
    Ascendant,
    Midheaven,
}

/// All 13 chart points in declaration order.
pub const ALL_BODIES: [Body; 13] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
    Body::Pluto,
    Body::TrueNode,
    Body::Ascendant,
    Body::Midheaven,
];

/// The personal planets compared in synastry, in fixed iteration order.
pub const PERSONAL_BODIES: [Body; 4] = [Body::Sun, Body::Moon, Body::Venus, Body::Mars];

impl Body {
    /// Lowercase identifier, also the serialized name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "sun",
            Self::Moon => "moon",
            Self::Mercury => "mercury",
            Self::Venus => "venus",
            Self::Mars => "mars",
            Self::Jupiter => "jupiter",
            Self::Saturn => "saturn",
            Self::Uranus => "uranus",
            Self::Neptune => "neptune",
            Self::Pluto => "pluto",
            Self::TrueNode => "true_node",
            Self::Ascendant => "ascendant",
            Self::Midheaven => "midheaven",
        }
    }

    /// 0-based index into ALL_BODIES.
    pub const fn index(self) -> u8 {
        match self {
            Self::Sun => 0,
            Self::Moon => 1,
            Self::Mercury => 2,
            Self::Venus => 3,
            Self::Mars => 4,
            Self::Jupiter => 5,
            Self::Saturn => 6,
            Self::Uranus => 7,
            Self::Neptune => 8,
            Self::Pluto => 9,
            Self::TrueNode => 10,
            Self::Ascendant => 11,
            Self::Midheaven => 12,
        }
    }

    /// Whether the body belongs to the synastry comparison set.
    pub const fn is_personal(self) -> bool {
        matches!(self, Self::Sun | Self::Moon | Self::Venus | Self::Mars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_bodies_count() {
        assert_eq!(ALL_BODIES.len(), 13);
    }

    #[test]
    fn personal_bodies_count() {
        assert_eq!(PERSONAL_BODIES.len(), 4);
    }

    #[test]
    fn body_indices_sequential() {
        for (i, b) in ALL_BODIES.iter().enumerate() {
            assert_eq!(b.index() as usize, i);
        }
    }

    #[test]
    fn body_names_nonempty() {
        for b in ALL_BODIES {
            assert!(!b.name().is_empty());
        }
    }

    #[test]
    fn personal_flag_matches_subset() {
        for b in ALL_BODIES {
            assert_eq!(b.is_personal(), PERSONAL_BODIES.contains(&b));
        }
    }

    #[test]
    fn personal_order_fixed() {
        assert_eq!(
            PERSONAL_BODIES,
            [Body::Sun, Body::Moon, Body::Venus, Body::Mars]
        );
    }

    #[test]
    fn ord_follows_declaration_order() {
        for pair in ALL_BODIES.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn serde_names_match_name() {
        for b in ALL_BODIES {
            let json = serde_json::to_string(&b).unwrap();
            assert_eq!(json, format!("\"{}\"", b.name()));
        }
    }
}
