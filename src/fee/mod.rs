//! Extra fee (payment surcharge) line item generation.
//!
//! Orders carry an optional fee amount under the `fee` data key. When the
//! extra fee feature is enabled for the order's store and the amount is not
//! negligible, [`ExtraFeeGenerator`] appends one payment surcharge item:
//! quantity 1, no VAT of its own, the fee passed through verbatim in the
//! order's base currency.

mod extra_fee;
mod label;

pub use extra_fee::{
    DEFAULT_FEE_LABEL, ExtraFeeGenerator, FEE_DATA_KEY, FEE_THRESHOLD, XML_PATH_EXTRAFEE_STATUS,
};
pub use label::{FixedLabel, LabelProvider};
