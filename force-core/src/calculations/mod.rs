//! Subscription price calculations.
//!
//! The pricing calculator is a pure function of the plan fields; the UI
//! re-evaluates it on every change to render a live price preview.

pub mod common;
pub mod pricing;

pub use pricing::{PriceInput, PriceQuote, price, quote, starting_price};
