//! Expense Tracker - terminal-based personal expense tracking
//!
//! This library provides the core of the `expense` binary: an in-memory
//! ledger of expenses, a query engine of pure filter and aggregate
//! functions over it, and a JSON persistence adapter that never fails on
//! load.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Expense records, money, ids and the ledger
//! - `query`: Filtering, sorting and aggregation over expense slices
//! - `storage`: Tolerant JSON load and atomic save
//! - `reports`: Budget status, monthly and category summaries
//! - `display`: Terminal formatting
//! - `export`: CSV, JSON and YAML export
//! - `cli`: One-shot command handlers
//! - `menu`: Interactive numbered menu
//! - `config`: Paths and user settings
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::storage::Storage;
//!
//! let (mut storage, warning) = Storage::open("expenses.json");
//! storage.ledger_mut().set_budget("500".parse()?);
//! storage.save()?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod menu;
pub mod models;
pub mod query;
pub mod reports;
pub mod storage;

pub use error::ExpenseError;
