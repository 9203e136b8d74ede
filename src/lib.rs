//! Produksi Form Library
//!
//! Machine-specific production form data entry for a small cigarette
//! factory: resolve a machine by id or barcode, prefill its paper-form
//! replica, compute SISA/HASIL from handwritten-style quantities, and
//! persist completed forms.

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod domain;
pub mod error;
pub mod export;
pub mod output;
pub mod registry;
pub mod store;
