//! Error types for synastry analysis.

use std::error::Error;
use std::fmt::{Display, Formatter};

use synastra_chart::ChartError;

/// Errors from synastry and natal-grid analysis.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SynastryError {
    /// An input chart failed validation.
    Chart(ChartError),
}

impl Display for SynastryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Chart(e) => write!(f, "chart error: {e}"),
        }
    }
}

impl Error for SynastryError {}

impl From<ChartError> for SynastryError {
    fn from(e: ChartError) -> Self {
        Self::Chart(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use synastra_chart::Body;

    #[test]
    fn wraps_chart_error() {
        let e: SynastryError = ChartError::NonFiniteLongitude { body: Body::Sun }.into();
        assert_eq!(e.to_string(), "chart error: non-finite longitude for sun");
    }
}
