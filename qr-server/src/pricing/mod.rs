//! Pricing Module
//!
//! Pure price computation: variant option surcharges on catalog items and
//! the fixed price table for physical card products. Always re-invoked
//! server-side at order time; client-submitted prices are never trusted.

pub mod calculator;

pub use calculator::{
    card_total, card_unit_price, effective_price, option_surcharge, order_total,
};
