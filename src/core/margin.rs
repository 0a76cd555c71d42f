use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::config::DEFAULT_MARGIN;
use super::totals::{non_negative, round2};
use super::types::MarginEntry;

/// Margin fractions keyed by warehouse or business identifier.
///
/// Lookup is an exact string match with a single fallback value; there is no
/// hierarchy between warehouses and businesses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarginTable {
    entries: HashMap<String, Decimal>,
    default_margin: Decimal,
}

impl Default for MarginTable {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            default_margin: DEFAULT_MARGIN,
        }
    }
}

impl MarginTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from entries. Later duplicates replace earlier ones.
    pub fn from_entries(entries: impl IntoIterator<Item = MarginEntry>) -> Self {
        let mut table = Self::new();
        for entry in entries {
            table.insert(entry);
        }
        table
    }

    /// Override the fallback used when a key has no entry.
    pub fn with_default_margin(mut self, margin: Decimal) -> Self {
        self.default_margin = margin;
        self
    }

    pub fn insert(&mut self, entry: MarginEntry) {
        self.entries
            .insert(entry.warehouse_or_business_id, entry.margin_fraction);
    }

    pub fn default_margin(&self) -> Decimal {
        self.default_margin
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Margin fraction for `key`, or the table default when absent.
    pub fn lookup(&self, key: &str) -> Decimal {
        match self.entries.get(key) {
            Some(margin) => *margin,
            None => {
                debug!(key, default = %self.default_margin, "no margin entry, using default");
                self.default_margin
            }
        }
    }
}

impl FromIterator<MarginEntry> for MarginTable {
    fn from_iter<I: IntoIterator<Item = MarginEntry>>(iter: I) -> Self {
        Self::from_entries(iter)
    }
}

/// Margin fraction for a warehouse or business id (0.25 when unknown).
pub fn lookup_margin(table: &MarginTable, key: &str) -> Decimal {
    table.lookup(key)
}

/// Suggested sale price: `round2(purchase_price * (1 + margin))`.
///
/// A negative purchase price is treated as zero; a result beyond the
/// `Decimal` range saturates at `Decimal::MAX`.
pub fn suggested_price(purchase_price: Decimal, margin_key: &str, table: &MarginTable) -> Decimal {
    let margin = table.lookup(margin_key);
    round2(non_negative(purchase_price).saturating_mul(Decimal::ONE.saturating_add(margin)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn business_margins() -> MarginTable {
        MarginTable::from_entries([MarginEntry::new("1", dec!(0.3)), MarginEntry::new("2", dec!(0.15))])
    }

    #[test]
    fn known_business_margin() {
        assert_eq!(lookup_margin(&business_margins(), "1"), dec!(0.3));
        assert_eq!(lookup_margin(&business_margins(), "2"), dec!(0.15));
    }

    #[test]
    fn unknown_business_uses_default() {
        assert_eq!(lookup_margin(&business_margins(), "99"), dec!(0.25));
        assert_eq!(lookup_margin(&MarginTable::new(), ""), dec!(0.25));
    }

    #[test]
    fn explicit_zero_margin_is_kept() {
        let table = MarginTable::from_entries([MarginEntry::new("7", Decimal::ZERO)]);
        assert_eq!(table.lookup("7"), Decimal::ZERO);
        assert_eq!(suggested_price(dec!(80), "7", &table), dec!(80.00));
    }

    #[test]
    fn key_match_is_exact() {
        let table = business_margins();
        assert_eq!(table.lookup(" 1"), dec!(0.25));
        assert_eq!(table.lookup("01"), dec!(0.25));
    }

    #[test]
    fn suggested_price_examples() {
        let table = business_margins();
        assert_eq!(suggested_price(dec!(100), "1", &table), dec!(130.00));
        assert_eq!(suggested_price(dec!(50), "99", &table), dec!(62.50));
    }

    #[test]
    fn suggested_price_rounds_half_up() {
        // 10.01 * 1.25 = 12.5125 → 12.51; 0.02 * 1.25 = 0.025 → 0.03
        let table = MarginTable::new();
        assert_eq!(suggested_price(dec!(10.01), "x", &table), dec!(12.51));
        assert_eq!(suggested_price(dec!(0.02), "x", &table), dec!(0.03));
    }

    #[test]
    fn max_purchase_price_saturates() {
        assert_eq!(suggested_price(Decimal::MAX, "x", &MarginTable::new()), Decimal::MAX);
    }

    #[test]
    fn custom_default_margin() {
        let table = MarginTable::new().with_default_margin(dec!(0.40));
        assert_eq!(suggested_price(dec!(100), "none", &table), dec!(140.00));
    }

    #[test]
    fn later_entry_replaces_earlier() {
        let table: MarginTable = [MarginEntry::new("1", dec!(0.1)), MarginEntry::new("1", dec!(0.2))]
            .into_iter()
            .collect();
        assert_eq!(table.len(), 1);
        assert_eq!(table.lookup("1"), dec!(0.2));
    }
}
