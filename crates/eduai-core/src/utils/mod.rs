//! Formatting helpers shared by page views.

pub mod format;

pub use format::{
    format_hours, format_timestamp, linkify, or_dash, split_topics, truncate, Segment,
};
