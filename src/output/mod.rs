//! Terminal output formatting
//!
//! Display utilities for the console game and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_banner, print_event, print_history, print_result, print_rules, print_stats,
    print_status,
};
