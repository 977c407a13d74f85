use std::fmt;

use serde::{Deserialize, Serialize};

/// A single floating-average observation of an asset.
///
/// Decimal values are kept as the strings the upstream computation produced.
/// They are parsed only where a numeric comparison is needed, and always
/// echoed back verbatim when rendered, so no precision is lost or invented.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FloatingAverage {
    /// Display name of the observed asset (e.g. "Bitcoin").
    pub asset_name: String,
    /// Latest closing quote of the asset.
    pub latest_quote_value: String,
    /// Latest floating average over the observation window.
    pub latest_average: String,
    /// Deviation threshold in percent.
    pub deviation_threshold: String,
}

impl FloatingAverage {
    /// Create a snapshot from its four parts.
    pub fn new(
        asset_name: impl Into<String>,
        latest_quote_value: impl Into<String>,
        latest_average: impl Into<String>,
        deviation_threshold: impl Into<String>,
    ) -> Self {
        Self {
            asset_name: asset_name.into(),
            latest_quote_value: latest_quote_value.into(),
            latest_average: latest_average.into(),
            deviation_threshold: deviation_threshold.into(),
        }
    }

    pub fn with_latest_quote_value(mut self, value: impl Into<String>) -> Self {
        self.latest_quote_value = value.into();
        self
    }

    pub fn with_latest_average(mut self, value: impl Into<String>) -> Self {
        self.latest_average = value.into();
        self
    }

    pub fn with_deviation_threshold(mut self, value: impl Into<String>) -> Self {
        self.deviation_threshold = value.into();
        self
    }

    /// Name of the first empty field, if any.
    ///
    /// A snapshot is only evaluable when all four fields are present.
    pub fn missing_field(&self) -> Option<&'static str> {
        [
            ("asset_name", &self.asset_name),
            ("latest_quote_value", &self.latest_quote_value),
            ("latest_average", &self.latest_average),
            ("deviation_threshold", &self.deviation_threshold),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
    }
}

/// What to do about an asset whose quote left the threshold band.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Recommendation {
    Buy,
    Sell,
}

impl Recommendation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
