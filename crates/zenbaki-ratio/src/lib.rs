//! Proportionality for the ratios page: rule of three, percentages and
//! recognising proportional tables.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod proportion;

pub use proportion::{
    apply_percent_change, classify_table, direct_rule_of_three, inverse_rule_of_three,
    percent_of, Proportionality,
};
