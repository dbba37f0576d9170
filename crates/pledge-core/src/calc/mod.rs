//! Donation impact calculator
//!
//! Pure arithmetic and display formatting for the pledge calculator:
//! `impact` derives the statistics from (income, percent), `format` turns
//! them into display strings and handles the live regrouping of the income
//! field while the user types.

pub mod format;
pub mod impact;

pub use format::{
    format_lives_per_year, format_money, format_nets, format_ten_year, group_digits,
    reformat_with_cursor, strip_separators,
};
pub use impact::{CampaignMath, ImpactStats};
