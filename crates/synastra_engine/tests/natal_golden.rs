//! Golden-value integration tests for the natal aspect grid.

use synastra_chart::{ALL_BODIES, Body, Chart};
use synastra_engine::{Aspect, natal_aspects};

const EPS: f64 = 1e-10;

#[test]
fn grand_trine_chart() {
    // Three points 120 deg apart: every pair is a trine.
    let chart = Chart::from_pairs([
        (Body::Sun, 0.0),
        (Body::Jupiter, 120.0),
        (Body::Neptune, 240.0),
    ]);
    let grid = natal_aspects(&chart).unwrap();

    assert_eq!(grid.len(), 3);
    for a in &grid {
        assert_eq!(a.aspect, Aspect::Trine);
        assert!((a.exact_angle_deg - 120.0).abs() < EPS);
        assert!(a.orb_deg.abs() < EPS);
    }
    let pairs: Vec<(Body, Body)> = grid.iter().map(|a| (a.body_a, a.body_b)).collect();
    assert_eq!(
        pairs,
        [
            (Body::Sun, Body::Jupiter),
            (Body::Sun, Body::Neptune),
            (Body::Jupiter, Body::Neptune),
        ]
    );
}

#[test]
fn t_square_with_angles() {
    // Opposition across the horizon squared by the midheaven.
    let chart = Chart::from_pairs([
        (Body::Ascendant, 0.0),
        (Body::Midheaven, 270.0),
        (Body::Saturn, 180.0),
    ]);
    let grid = natal_aspects(&chart).unwrap();

    let found: Vec<(Body, Body, Aspect)> = grid
        .iter()
        .map(|a| (a.body_a, a.body_b, a.aspect))
        .collect();
    assert_eq!(
        found,
        [
            (Body::Saturn, Body::Ascendant, Aspect::Opposition),
            (Body::Saturn, Body::Midheaven, Aspect::Square),
            (Body::Ascendant, Body::Midheaven, Aspect::Square),
        ]
    );
}

#[test]
fn loose_orbs_recorded() {
    // Sun at 0, moon at 95: square with 5 deg orb.
    let chart = Chart::from_pairs([(Body::Sun, 0.0), (Body::Moon, 95.0)]);
    let grid = natal_aspects(&chart).unwrap();
    assert_eq!(grid.len(), 1);
    assert_eq!(grid[0].aspect, Aspect::Square);
    assert!((grid[0].orb_deg - 5.0).abs() < EPS);
}

#[test]
fn aspectless_chart() {
    // Separations 40, 111, and 151 deg all fall between orb windows.
    let chart = Chart::from_pairs([
        (Body::Sun, 0.0),
        (Body::Moon, 40.0),
        (Body::Venus, 249.0),
    ]);
    assert!(natal_aspects(&chart).unwrap().is_empty());
}

#[test]
fn full_thirteen_point_chart() {
    let chart: Chart = ALL_BODIES
        .iter()
        .enumerate()
        .map(|(i, &b)| (b, (i as f64 * 30.0) % 360.0))
        .collect();
    let grid = natal_aspects(&chart).unwrap();

    // 30-deg spacing: every pair lands exactly on a table angle or in the
    // 30/150 gaps; spot-check a few and require orderly output.
    assert!(!grid.is_empty());
    for a in &grid {
        assert!(a.body_a.index() < a.body_b.index());
        assert!(a.orb_deg.abs() < EPS); // all separations are exact multiples
    }
    // Sun (0 deg) to Mercury (60 deg) is an exact sextile.
    let sun_mercury = grid
        .iter()
        .find(|a| (a.body_a, a.body_b) == (Body::Sun, Body::Mercury))
        .unwrap();
    assert_eq!(sun_mercury.aspect, Aspect::Sextile);
    // Sun (0 deg) to Moon (30 deg) falls in a gap: absent.
    assert!(
        !grid
            .iter()
            .any(|a| (a.body_a, a.body_b) == (Body::Sun, Body::Moon))
    );
}

#[test]
fn serializes_with_wire_names() {
    let chart = Chart::from_pairs([(Body::Sun, 0.0), (Body::TrueNode, 180.0)]);
    let grid = natal_aspects(&chart).unwrap();
    let value = serde_json::to_value(&grid).unwrap();

    assert_eq!(value[0]["body_a"], "sun");
    assert_eq!(value[0]["body_b"], "true_node");
    assert_eq!(value[0]["aspect"], "opposition");
    assert_eq!(value[0]["exact_angle_deg"], 180.0);
    assert_eq!(value[0]["orb_deg"], 0.0);
}
