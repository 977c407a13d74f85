use std::str::FromStr;

use kiwi_types::{FloatingAverage, Recommendation};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AlertError, AlertResult};

/// How a snapshot's quote is turned into a recommendation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalPolicy {
    /// Recommend only when the quote leaves the band of `threshold` percent
    /// around the average: above it is a buy, below it a sell. Inside the band
    /// (including its edges) there is no recommendation.
    #[default]
    Threshold,
    /// Recommend by direction alone: above the average is a buy, below it a
    /// sell. For feeds that only alert once the threshold is known to be
    /// breached.
    Direction,
}

/// Decides and renders recommendations. Performs no I/O.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AlertEngine {
    policy: SignalPolicy,
}

impl AlertEngine {
    pub fn new(policy: SignalPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> SignalPolicy {
        self.policy
    }

    /// Decide what to recommend for one snapshot.
    ///
    /// Returns `Ok(None)` when the snapshot does not warrant a message.
    pub fn decide(&self, average: &FloatingAverage) -> AlertResult<Option<Recommendation>> {
        if let Some(field) = average.missing_field() {
            return Err(AlertError::IncompleteSnapshot {
                asset: average.asset_name.clone(),
                field,
            });
        }
        let quote = parse(average, "latest_quote_value", &average.latest_quote_value)?;
        let mean = parse(average, "latest_average", &average.latest_average)?;

        let recommendation = match self.policy {
            SignalPolicy::Threshold => {
                let threshold =
                    parse(average, "deviation_threshold", &average.deviation_threshold)?;
                if threshold.is_sign_negative() {
                    return Err(invalid(
                        average,
                        "deviation_threshold",
                        &average.deviation_threshold,
                    ));
                }
                let overflow = || AlertError::Overflow {
                    asset: average.asset_name.clone(),
                };
                let band = mean.checked_mul(threshold).ok_or_else(overflow)?.abs()
                    / Decimal::ONE_HUNDRED;
                let deviation = quote.checked_sub(mean).ok_or_else(overflow)?;
                if deviation > band {
                    Some(Recommendation::Buy)
                } else if deviation < -band {
                    Some(Recommendation::Sell)
                } else {
                    None
                }
            }
            SignalPolicy::Direction => match quote.cmp(&mean) {
                std::cmp::Ordering::Greater => Some(Recommendation::Buy),
                std::cmp::Ordering::Less => Some(Recommendation::Sell),
                std::cmp::Ordering::Equal => None,
            },
        };

        debug!(
            asset = %average.asset_name,
            quote = %quote,
            average = %mean,
            recommendation = ?recommendation,
            "decided"
        );
        Ok(recommendation)
    }

    /// Render the message for one snapshot.
    ///
    /// Every value is echoed exactly as the snapshot carries it.
    pub fn render(average: &FloatingAverage, recommendation: Recommendation) -> String {
        format!(
            "Recommendation: {recommendation} {asset}!\n\
             The current closing value {quote} of observed asset {asset} \
             deviates more than {threshold} percent from the current floating average of {mean}.",
            asset = average.asset_name,
            quote = average.latest_quote_value,
            threshold = average.deviation_threshold,
            mean = average.latest_average,
        )
    }

    /// Render all signalling snapshots into one message, in input order,
    /// separated by a blank line.
    ///
    /// Returns `Ok(None)` when no snapshot signals. Fails on the first
    /// malformed snapshot, so a batch is rendered completely or not at all.
    pub fn compose(&self, averages: &[FloatingAverage]) -> AlertResult<Option<String>> {
        let mut messages = Vec::with_capacity(averages.len());
        for average in averages {
            if let Some(recommendation) = self.decide(average)? {
                messages.push(Self::render(average, recommendation));
            }
        }
        if messages.is_empty() {
            return Ok(None);
        }
        Ok(Some(messages.join("\n\n")))
    }
}

fn parse(average: &FloatingAverage, field: &'static str, value: &str) -> AlertResult<Decimal> {
    Decimal::from_str(value.trim()).map_err(|_| invalid(average, field, value))
}

fn invalid(average: &FloatingAverage, field: &'static str, value: &str) -> AlertError {
    AlertError::InvalidDecimal {
        asset: average.asset_name.clone(),
        field,
        value: value.to_string(),
    }
}
