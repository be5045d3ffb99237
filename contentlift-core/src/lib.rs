//! # contentlift-core
//!
//! Core library for contentlift - joins content-publishing events with daily
//! sales and derives which content types line up with higher future revenue.
//!
//! This library provides:
//! - Domain types for content events and daily sales
//! - Date-key utilities and a small statistics toolkit
//! - The daily aggregate table (same-day counts, forward revenue, lagged posting)
//! - Derived analytics: lift, correlation, leaderboards, platform comparison
//! - Configuration management
//! - Logging infrastructure
//!
//! ## Architecture
//!
//! Data flows through three layers:
//! - **Layer 0 (Raw):** JSON input files, loaded by [`ingest`]
//! - **Layer 1 (Aggregate):** One [`DayAggregate`] per sales date
//! - **Layer 2 (Derived):** Analytics computed from the aggregate table
//!
//! Every step is a pure function of its inputs; nothing is cached between calls.
//! All comparisons are correlational, not causal.
//!
//! ## Example
//!
//! ```rust,no_run
//! use contentlift_core::analytics::DashboardReport;
//! use contentlift_core::{ingest, Config};
//! use std::path::Path;
//!
//! let config = Config::load().expect("failed to load config");
//! let events = ingest::load_content(Path::new("content_posts.json")).expect("bad content");
//! let sales = ingest::load_sales(Path::new("daily_sales.json")).expect("bad sales");
//!
//! let report = DashboardReport::build(&events, &sales, &config.analytics);
//! println!("baseline AFR: {:.2}", report.baseline_afr);
//! ```

// Re-export commonly used items at the crate root
pub use aggregate::{build_daily_aggregates, DayAggregate};
pub use config::Config;
pub use dates::{to_date_key, DateKey};
pub use error::{Error, Result};
pub use stats::{mean, pearson_correlation, Correlation};
pub use types::*;

// Public modules
pub mod aggregate;
pub mod analytics;
pub mod config;
pub mod dates;
pub mod error;
pub mod format;
pub mod ingest;
pub mod logging;
pub mod stats;
pub mod types;
