//! Pure arithmetic: wide-intermediate `mul_div`, constant-product swap
//! simulation, and deviation measurement.
//!
//! Nothing in this module touches policy, time, or external sources; every
//! function is a total function of its arguments.

mod deviation;
mod mul_div;
mod swap;

pub use deviation::{deviation_bps, BPS_DENOMINATOR, DEVIATION_MAX};
pub use mul_div::{mul_div, mul_div_up};
pub use swap::{
    quote_exact_in, quote_exact_out, ExactInQuote, ExactOutQuote, FEE_DENOMINATOR, FEE_NUMERATOR,
};
