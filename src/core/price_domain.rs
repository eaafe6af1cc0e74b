use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{DisplayPoint, PriceDomain};
use crate::error::{ChartError, ChartResult};

pub const DEFAULT_DOMAIN_PADDING_RATIO: f64 = 0.10;
pub const DEFAULT_FLAT_RANGE_RATIO: f64 = 0.10;
pub const DEFAULT_FLAT_RANGE_FALLBACK: f64 = 1.0;
pub const DEFAULT_EMPTY_DOMAIN_MIN: f64 = 0.0;
pub const DEFAULT_EMPTY_DOMAIN_MAX: f64 = 100.0;

/// Tuning controls for the padded price-axis domain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceDomainTuning {
    /// Fraction of the observed range added below and above.
    pub padding_ratio: f64,
    /// Fraction of the price used as padding when the series is flat.
    pub flat_range_ratio: f64,
    /// Padding used when the flat-series padding still collapses to zero.
    pub flat_range_fallback: f64,
    pub empty_domain_min: f64,
    pub empty_domain_max: f64,
}

impl Default for PriceDomainTuning {
    fn default() -> Self {
        Self {
            padding_ratio: DEFAULT_DOMAIN_PADDING_RATIO,
            flat_range_ratio: DEFAULT_FLAT_RANGE_RATIO,
            flat_range_fallback: DEFAULT_FLAT_RANGE_FALLBACK,
            empty_domain_min: DEFAULT_EMPTY_DOMAIN_MIN,
            empty_domain_max: DEFAULT_EMPTY_DOMAIN_MAX,
        }
    }
}

impl PriceDomainTuning {
    pub fn validate(self) -> ChartResult<Self> {
        if !self.padding_ratio.is_finite()
            || !self.flat_range_ratio.is_finite()
            || self.padding_ratio < 0.0
            || self.flat_range_ratio < 0.0
        {
            return Err(ChartError::InvalidData(
                "price domain ratios must be finite and >= 0".to_owned(),
            ));
        }

        if !self.flat_range_fallback.is_finite() || self.flat_range_fallback <= 0.0 {
            return Err(ChartError::InvalidData(
                "price domain flat-range fallback must be finite and > 0".to_owned(),
            ));
        }

        if !self.empty_domain_min.is_finite()
            || !self.empty_domain_max.is_finite()
            || self.empty_domain_max <= self.empty_domain_min
        {
            return Err(ChartError::InvalidData(
                "empty price domain must be finite with max > min".to_owned(),
            ));
        }

        Ok(self)
    }
}

/// Computes the padded price domain with default tuning.
#[must_use]
pub fn compute_price_domain(series: &[DisplayPoint]) -> PriceDomain {
    compute_price_domain_with_tuning(series, PriceDomainTuning::default())
}

/// Computes the padded price domain over every OHLC field of the series.
///
/// Non-positive and non-finite prices are treated as missing. The lower bound
/// never drops below zero.
///
/// A flat series is padded by `flat_range_ratio` of its price on each side,
/// so a constant 50 spans `[45, 55]`. This is wider than padding a widened
/// range by `padding_ratio`, which would give `[49.5, 50.5]`. A series with no
/// usable price maps to the empty domain `[0, 100]` without padding, not to
/// the padded `[0, 110]`.
#[must_use]
pub fn compute_price_domain_with_tuning(
    series: &[DisplayPoint],
    tuning: PriceDomainTuning,
) -> PriceDomain {
    let valid = || {
        series
            .iter()
            .flat_map(DisplayPoint::prices)
            .filter(|price| price.is_finite() && *price > 0.0)
            .map(OrderedFloat)
    };

    let (Some(OrderedFloat(min)), Some(OrderedFloat(max))) = (valid().min(), valid().max()) else {
        debug!(
            points = series.len(),
            "no positive prices, using empty price domain"
        );
        return PriceDomain::new(tuning.empty_domain_min, tuning.empty_domain_max);
    };

    let range = max - min;
    let padding = if range > 0.0 {
        range * tuning.padding_ratio
    } else {
        // Flat series: the widened range is the padding itself, so a single
        // price of 50 spans [45, 55] at the default ratio.
        let widened = min * tuning.flat_range_ratio;
        let padding = if widened > 0.0 {
            widened
        } else {
            tuning.flat_range_fallback
        };
        debug!(price = min, padding, "flat price series, widened domain");
        padding
    };

    PriceDomain::new((min - padding).max(0.0), max + padding)
}
