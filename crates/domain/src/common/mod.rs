//! Common utility functions shared by the annotation value objects.
//!
//! # Design Principles
//!
//! - **Pure functions only** - no side effects, no I/O
//! - **Minimal dependencies** - only chrono for datetime utilities

pub mod datetime;

pub use datetime::{
    check_date_range, format_display, parse_annotation_timestamp, parse_date_input,
    parse_time_input, to_wire_timestamp,
};
