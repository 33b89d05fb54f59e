//! Audit logging system for the expense tracker
//!
//! Records every create, update and delete with before/after values in an
//! append-only log.
//!
//! # Architecture
//!
//! - `AuditEntry`: one log entry with timestamp, operation, expense id and
//!   the expense before and/or after the change.
//! - `AuditLogger`: writes entries as line-delimited JSON (JSONL).
//! - `generate_diff`: summarizes the fields an update changed.
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(audit_log_path);
//! logger.log(&AuditEntry::created(&expense))?;
//! ```

mod diff;
mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
