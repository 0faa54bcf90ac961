//! Subscription file extraction: filter and unwrap proxy subscription lines,
//! then render them as a timestamped report.

pub mod application;
pub mod domain;
pub mod error;
pub mod extractor;
pub mod ports;
pub mod report;
pub mod schedule;
pub mod utils;
