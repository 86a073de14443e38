// src/ingest/mod.rs

//! Lineage-record ingestion for the JSON-lines driver.
//!
//! - [`record`] maps the exporter's JSON shape onto [`LineageRecord`].
//! - [`normalize`] strips environment noise from artifact paths.
//!
//! [`LineageRecord`]: crate::dag::LineageRecord

pub mod normalize;
pub mod record;

pub use normalize::Normalizer;
pub use record::{RawLineageLine, parse_line};
