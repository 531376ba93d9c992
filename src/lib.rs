//! Unit Converter Library
//!
//! This module exposes the conversion engine, persisted stores, and CLI
//! definitions for use by the binary and the integration tests.

pub mod cli;
pub mod convert;
pub mod export;
pub mod history;
pub mod rates;
pub mod summary;
pub mod units;
