//! # Rollbook
//!
//! A single-user student record manager with:
//! - Create/read/update/delete by roll number
//! - Sorted views by marks or by name
//! - Derived letter grades that always match the marks
//! - Whole-file persistence to a comma-separated flat file
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Menu (bin/cli.rs)                        │
//! │              prompts, parsing, rendering                     │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                       Manager                                │
//! │              validation, typed errors                        │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │    Store    │          │    Codec    │
//!   │ (id index)  │          │ (flat file) │
//!   └──────┬──────┘          └─────────────┘
//!          │
//!          ▼
//!   ┌─────────────┐
//!   │   Record    │
//!   │  (+ grade)  │
//!   └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod store;
pub mod codec;
pub mod manager;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Result, RollbookError};
pub use config::Config;
pub use manager::Manager;
pub use record::{Grade, NamedEntity, Record, StudentId};
pub use store::{SortOrder, Store};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Rollbook
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
