//! Variant Price Calculator
//!
//! Computes an item's effective price from its base price plus the
//! surcharges of the selected variant options, and order totals from
//! effective unit prices. Uses rust_decimal for precision; stored prices
//! are f64 in currency units.

use rust_decimal::prelude::*;

use shared::models::{CardType, CatalogItem, VariantSelection};

/// Rounding for monetary values (2 decimal places, half away from zero)
const DECIMAL_PLACES: u32 = 2;

// ==================== Conversion Helpers ====================

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

// ==================== Variant Surcharges ====================

/// Sum of surcharges for the selected options.
///
/// The selection maps variant name -> chosen option name; a selection
/// naming a variant the item does not define, or an option the variant does
/// not offer, contributes zero (treated as no selection, not an error).
/// Iteration follows the item's variant order, so the result is independent
/// of the selection map's iteration order.
pub fn option_surcharge(item: &CatalogItem, selection: &VariantSelection) -> f64 {
    let mut surcharge = Decimal::ZERO;
    for variant in &item.variants {
        let Some(chosen) = selection.get(&variant.name) else {
            continue;
        };
        if let Some(option) = variant.options.iter().find(|o| &o.name == chosen) {
            surcharge += to_decimal(option.price);
        }
    }
    to_f64(surcharge)
}

/// Effective unit price = base price + selected surcharges, floored at 0
/// when negative surcharges exceed the base price
pub fn effective_price(item: &CatalogItem, selection: &VariantSelection) -> f64 {
    let total = to_decimal(item.price) + to_decimal(option_surcharge(item, selection));
    to_f64(total.max(Decimal::ZERO))
}

/// Order total from (effective unit price, quantity) pairs
pub fn order_total(lines: &[(f64, i64)]) -> f64 {
    let mut total = Decimal::ZERO;
    for (unit_price, quantity) in lines {
        total += to_decimal(*unit_price) * Decimal::from(*quantity);
    }
    to_f64(total.max(Decimal::ZERO))
}

// ==================== Card Price Table ====================

/// Fixed per-unit rates for physical card products, in DZD
pub fn card_unit_price(card_type: CardType) -> f64 {
    match card_type {
        CardType::BusinessCards => 1500.0,
        CardType::NfcCards => 2500.0,
        CardType::Tags => 800.0,
        CardType::Stickers => 500.0,
    }
}

/// Total for a card order
pub fn card_total(card_type: CardType, quantity: i64) -> f64 {
    to_f64(to_decimal(card_unit_price(card_type)) * Decimal::from(quantity))
}

// ==================== Tests ====================
