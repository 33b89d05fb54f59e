//! Expense Tracker - terminal-based personal expense tracking
//!
//! This library provides the core functionality for the expense tracker:
//! a list of expenses persisted as JSON, an add/edit form, and a table
//! view that can be filtered, sorted and truncated to a page.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration, path management and logging setup
//! - `error`: Custom error types
//! - `models`: Core data models (expense, money, category, payment method)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer (mutations, form controller, view)
//! - `audit`: Audit logging system
//! - `display`: Terminal output formatting for the CLI
//! - `export`: CSV, JSON and YAML export
//! - `cli`: Command handlers
//! - `tui`: Interactive terminal interface
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::{ExpensePaths, Settings};
//! use expense_tracker::storage::Storage;
//!
//! let paths = ExpensePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut storage = Storage::new(paths)?;
//! storage.load_all();
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{ExpenseError, ExpenseResult};
