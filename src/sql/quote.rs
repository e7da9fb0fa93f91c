//! SQL Identifier Quoting Utilities
//!
//! Wraps identifiers and literals in their delimiter characters and builds
//! qualified names for generated repository SQL.
//!
//! Quoting is purely lexical: quote characters embedded in the input are
//! copied through unchanged.

/// Delimiter used for identifiers (schemas, tables, columns, constraints)
pub const QUOTE_CHARACTER: &str = "`";

/// Delimiter used for string literals
pub const SINGLE_QUOTE_CHARACTER: &str = "'";

const NAME_SEPARATOR: &str = ".";

fn wrap(value: &str, quote: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2 * quote.len());
    out.push_str(quote);
    out.push_str(value);
    out.push_str(quote);
    out
}

fn qualify(qualifier: Option<String>, name: String) -> String {
    match qualifier {
        Some(qualifier) => format!("{}{}{}", qualifier, NAME_SEPARATOR, name),
        None => name,
    }
}

/// Quote a table name
///
/// # Example
/// ```
/// use sql_repo_common::sql::escape_table_name;
///
/// assert_eq!(escape_table_name("jobs"), "`jobs`");
/// ```
pub fn escape_table_name(table_name: &str) -> String {
    wrap(table_name, QUOTE_CHARACTER)
}

/// Quote a column name
pub fn escape_column_name(column_name: &str) -> String {
    wrap(column_name, QUOTE_CHARACTER)
}

/// Quote a schema name
pub fn escape_schema_name(schema_name: &str) -> String {
    wrap(schema_name, QUOTE_CHARACTER)
}

/// Quote a database name
pub fn escape_database_name(database_name: &str) -> String {
    wrap(database_name, QUOTE_CHARACTER)
}

/// Quote a constraint name
pub fn escape_constraint_name(constraint_name: &str) -> String {
    wrap(constraint_name, QUOTE_CHARACTER)
}

/// Wrap a value in single quotes for use as a SQL string literal
///
/// Single quotes inside `literal` are not doubled.
///
/// # Example
/// ```
/// use sql_repo_common::sql::escape_literal_string;
///
/// assert_eq!(escape_literal_string("ENABLED"), "'ENABLED'");
/// ```
pub fn escape_literal_string(literal: &str) -> String {
    wrap(literal, SINGLE_QUOTE_CHARACTER)
}

/// Build a table name, qualified by its schema when one is given
///
/// # Example
/// ```
/// use sql_repo_common::sql::get_table_name;
///
/// assert_eq!(get_table_name(Some("repo"), "links"), "`repo`.`links`");
/// assert_eq!(get_table_name(None, "links"), "`links`");
/// ```
pub fn get_table_name(schema_name: Option<&str>, table_name: &str) -> String {
    qualify(
        schema_name.map(escape_schema_name),
        escape_table_name(table_name),
    )
}

/// Build a column name, qualified by its table when one is given
pub fn get_column_name(table_name: Option<&str>, column_name: &str) -> String {
    qualify(
        table_name.map(escape_table_name),
        escape_column_name(column_name),
    )
}

/// Build a constraint name, qualified by its schema when one is given
pub fn get_constraint_name(schema_name: Option<&str>, constraint_name: &str) -> String {
    qualify(
        schema_name.map(escape_schema_name),
        escape_constraint_name(constraint_name),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Identifier Escaping Tests
    // =========================================================================

    #[test]
    fn test_escape_table_name_simple() {
        assert_eq!(escape_table_name("jobs"), "`jobs`");
        assert_eq!(escape_table_name("users"), "`users`");
        assert_eq!(escape_table_name("a"), "`a`");
    }

    #[test]
    fn test_escape_identifier_variants_share_quoting() {
        for name in ["connectors", "my table", "schema.table", "日本語"] {
            let expected = format!("`{}`", name);
            assert_eq!(escape_table_name(name), expected);
            assert_eq!(escape_column_name(name), expected);
            assert_eq!(escape_schema_name(name), expected);
            assert_eq!(escape_database_name(name), expected);
            assert_eq!(escape_constraint_name(name), expected);
        }
    }

    #[test]
    fn test_escape_empty_identifier() {
        assert_eq!(escape_table_name(""), "``");
        assert_eq!(escape_column_name(""), "``");
        assert_eq!(escape_constraint_name(""), "``");
    }

    #[test]
    fn test_escape_reserved_keyword() {
        assert_eq!(escape_table_name("select"), "`select`");
        assert_eq!(escape_column_name("order"), "`order`");
    }

    #[test]
    fn test_escape_uses_quote_constant() {
        let quoted = escape_schema_name("repo");
        assert!(quoted.starts_with(QUOTE_CHARACTER));
        assert!(quoted.ends_with(QUOTE_CHARACTER));
    }

    // =========================================================================
    // Literal Escaping Tests
    // =========================================================================

    #[test]
    fn test_escape_literal_string() {
        assert_eq!(escape_literal_string("ENABLED"), "'ENABLED'");
        assert_eq!(escape_literal_string(""), "''");
        assert_eq!(escape_literal_string("two words"), "'two words'");
    }

    #[test]
    fn test_escape_literal_keeps_backticks() {
        assert_eq!(escape_literal_string("`name`"), "'`name`'");
    }

    // =========================================================================
    // Qualified Name Tests
    // =========================================================================

    #[test]
    fn test_get_table_name() {
        assert_eq!(get_table_name(None, "t"), "`t`");
        assert_eq!(get_table_name(Some("s"), "t"), "`s`.`t`");
    }

    #[test]
    fn test_get_column_name() {
        assert_eq!(get_column_name(None, "c"), "`c`");
        assert_eq!(get_column_name(Some("t"), "c"), "`t`.`c`");
    }

    #[test]
    fn test_get_constraint_name() {
        assert_eq!(get_constraint_name(None, "k"), "`k`");
        assert_eq!(get_constraint_name(Some("s"), "k"), "`s`.`k`");
    }

    #[test]
    fn test_empty_qualifier_is_present() {
        assert_eq!(get_table_name(Some(""), "t"), "``.`t`");
        assert_eq!(get_column_name(Some(""), "c"), "``.`c`");
        assert_eq!(get_constraint_name(Some(""), "k"), "``.`k`");
    }

    #[test]
    fn test_qualified_names_are_repeatable() {
        assert_eq!(
            get_table_name(Some("repo"), "jobs"),
            get_table_name(Some("repo"), "jobs")
        );
        assert_eq!(get_column_name(None, "job_id"), get_column_name(None, "job_id"));
    }

    // =========================================================================
    // Known Limitation: embedded quotes pass through
    // =========================================================================

    #[test]
    fn test_known_limitation_embedded_backtick_not_escaped() {
        assert_eq!(escape_table_name("bad`name"), "`bad`name`");
        assert_eq!(get_column_name(Some("t`"), "c"), "`t``.`c`");
    }

    #[test]
    fn test_known_limitation_embedded_single_quote_not_escaped() {
        assert_eq!(escape_literal_string("it's"), "'it's'");
    }
}
