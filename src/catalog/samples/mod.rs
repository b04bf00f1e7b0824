//! Static sample datasets backing each case study's export.
//!
//! Every table is an ordered slice of uniformly-shaped records. Values that
//! the original dashboards derived at render time (status arrows, saved
//! hours, upper-cased trend labels) are pre-baked here, so the exporter only
//! copies values in column order.

// Submodule declarations
pub mod business;
pub mod customer;
pub mod ecommerce;
pub mod monitoring;
pub mod operational;
pub mod sales;
pub mod validation;
