//! SQL text utilities for the repository
//!
//! Provides identifier and literal quoting and qualified-name building.

pub mod quote;

pub use quote::{
    QUOTE_CHARACTER, SINGLE_QUOTE_CHARACTER, escape_column_name, escape_constraint_name,
    escape_database_name, escape_literal_string, escape_schema_name, escape_table_name,
    get_column_name, get_constraint_name, get_table_name,
};
