//! Synastry aspect-analysis engine.
//!
//! This crate provides:
//! - Aspect detection between two ecliptic longitudes (fixed table of the
//!   5 major aspects with per-aspect orbs, first match wins)
//! - A constant harmony/challenge interpretation lookup per aspect
//! - Synastry analysis: cross-chart aspects over the personal planets,
//!   reduced to a summary line and a compatibility score
//! - The natal aspect grid: pairwise aspects within a single chart
//!
//! Everything is pure, synchronous computation over caller-supplied
//! charts; there is no I/O and no shared mutable state, so concurrent
//! calls need no synchronization.

pub mod aspect;
pub mod error;
pub mod interpretation;
pub mod natal;
pub mod synastry;
pub mod synastry_types;

pub use aspect::{ASPECT_TABLE, Aspect, AspectClass, AspectDefinition, AspectMatch, detect_aspect};
pub use error::SynastryError;
pub use interpretation::{Interpretation, interpretation};
pub use natal::{NatalAspect, natal_aspects};
pub use synastry::{analyze, compatibility_score, summary_line};
pub use synastry_types::{DetectedAspect, SynastryResult};
