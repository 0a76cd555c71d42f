use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::error::BillingError;

/// Value-added tax rate applied to the discounted subtotal (13%).
pub const TAX_RATE: Decimal = dec!(0.13);

/// Margin fraction used when no margin entry matches (25%).
pub const DEFAULT_MARGIN: Decimal = dec!(0.25);

/// Currency the defaults are calibrated for (Costa Rican colón).
pub const DEFAULT_CURRENCY: &str = "CRC";

/// Jurisdiction-level billing parameters.
///
/// The defaults reproduce [`TAX_RATE`] and [`DEFAULT_MARGIN`]; override them
/// to reuse the engine under a different tax regime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BillingConfig {
    /// VAT rate as a fraction (0.13 = 13%).
    pub tax_rate: Decimal,
    /// Margin fraction used when a key has no margin entry.
    pub default_margin: Decimal,
    /// ISO 4217 currency code, informational only.
    pub currency_code: String,
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            tax_rate: TAX_RATE,
            default_margin: DEFAULT_MARGIN,
            currency_code: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl BillingConfig {
    pub fn with_tax_rate(mut self, rate: Decimal) -> Self {
        self.tax_rate = rate;
        self
    }

    pub fn with_default_margin(mut self, margin: Decimal) -> Self {
        self.default_margin = margin;
        self
    }

    pub fn with_currency(mut self, code: impl Into<String>) -> Self {
        self.currency_code = code.into();
        self
    }

    /// Check that rates are fractions and the currency code is well formed.
    pub fn validate(&self) -> Result<(), BillingError> {
        if self.tax_rate < Decimal::ZERO || self.tax_rate > Decimal::ONE {
            return Err(BillingError::Config(format!(
                "tax_rate must be between 0 and 1, got {}",
                self.tax_rate
            )));
        }
        if self.default_margin < Decimal::ZERO || self.default_margin > Decimal::ONE {
            return Err(BillingError::Config(format!(
                "default_margin must be between 0 and 1, got {}",
                self.default_margin
            )));
        }
        if self.currency_code.len() != 3
            || !self.currency_code.chars().all(|c| c.is_ascii_uppercase())
        {
            return Err(BillingError::Config(format!(
                "currency_code must be 3 uppercase letters (ISO 4217), got '{}'",
                self.currency_code
            )));
        }
        Ok(())
    }
}
