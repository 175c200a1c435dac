//! Error types for chart validation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::body::Body;

/// Errors from chart validation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// A stored longitude is NaN or infinite.
    NonFiniteLongitude {
        /// Body carrying the bad value.
        body: Body,
    },
    /// A stored longitude is outside [0, 360).
    LongitudeOutOfRange {
        /// Body carrying the bad value.
        body: Body,
        /// The offending longitude in degrees.
        longitude_deg: f64,
    },
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonFiniteLongitude { body } => {
                write!(f, "non-finite longitude for {}", body.name())
            }
            Self::LongitudeOutOfRange {
                body,
                longitude_deg,
            } => {
                write!(
                    f,
                    "longitude {longitude_deg} deg for {} outside [0, 360)",
                    body.name()
                )
            }
        }
    }
}

impl Error for ChartError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_non_finite() {
        let e = ChartError::NonFiniteLongitude { body: Body::Moon };
        assert_eq!(e.to_string(), "non-finite longitude for moon");
    }

    #[test]
    fn display_out_of_range() {
        let e = ChartError::LongitudeOutOfRange {
            body: Body::Sun,
            longitude_deg: 360.0,
        };
        assert_eq!(e.to_string(), "longitude 360 deg for sun outside [0, 360)");
    }
}
