//! # sql-repo-common
//!
//! Shared helpers for a SQL-backed metadata repository.
//!
//! ## Features
//!
//! - **Identifier Quoting**: Wrap schema, table, column, database and constraint names in backticks
//! - **Qualified Names**: Build `schema.table`, `table.column` and `schema.constraint` names with an optional qualifier
//! - **Literal Quoting**: Wrap string literals in single quotes
//! - **Best-Effort Cleanup**: Close statement and result-set handles, logging failures instead of returning them
//!
//! Quoting is lexical only. Quote characters embedded in a name or literal are
//! not escaped, so callers must not pass untrusted input.
//!
//! ## Quick Start
//!
//! ```rust
//! use sql_repo_common::sql::{escape_column_name, escape_literal_string, get_table_name};
//!
//! let query = format!(
//!     "SELECT * FROM {} WHERE {} = {}",
//!     get_table_name(Some("repo"), "links"),
//!     escape_column_name("status"),
//!     escape_literal_string("ENABLED"),
//! );
//!
//! assert_eq!(query, "SELECT * FROM `repo`.`links` WHERE `status` = 'ENABLED'");
//! ```
//!
//! ## Cleanup
//!
//! Handles implement [`Close`] plus one of the [`Statement`] or [`ResultSet`]
//! markers. [`close_statements`] and [`close_result_sets`] close every handle
//! in order and report failures through `tracing` at ERROR level; they never
//! return an error. [`ClosingGuard`] does the same for a single handle when it
//! goes out of scope.

pub mod error;
pub mod resource;
pub mod sql;

// Re-export main types for convenience
pub use error::{RepoError, Result};
pub use resource::{Close, ClosingGuard, ResultSet, Statement, close_result_sets, close_statements};

// Re-export SQL utilities
pub use sql::quote::{
    QUOTE_CHARACTER, SINGLE_QUOTE_CHARACTER, escape_column_name, escape_constraint_name,
    escape_database_name, escape_literal_string, escape_schema_name, escape_table_name,
    get_column_name, get_constraint_name, get_table_name,
};
