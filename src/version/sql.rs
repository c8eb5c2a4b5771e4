//! SQL contract for tables storing encoded versions
//!
//! Column widths follow the limits in [`crate::config`]. The ordering clause is
//! written for SQLite: the prefix is split on its dots and each part is cast to
//! an integer, standing in for MySQL's `INET_ATON` trick.

use crate::config::{
    ColumnConfig, MAX_BUILD_WORD_LENGTH, MAX_PREFIX_LENGTH, MAX_PRERELEASE_WORD_LENGTH,
};

/// `CREATE TABLE` statement for the configured table.
pub fn create_table_sql(columns: &ColumnConfig) -> String {
    format!(
        r#"CREATE TABLE IF NOT EXISTS {table} (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    {version} TEXT NOT NULL UNIQUE,
    {prefix} VARCHAR({prefix_len}) NOT NULL,
    {word} VARCHAR({word_len}) NOT NULL,
    {number} INTEGER NOT NULL,
    {build} VARCHAR({build_len}) NOT NULL
)"#,
        table = columns.table,
        version = columns.version,
        prefix = columns.prefix,
        prefix_len = MAX_PREFIX_LENGTH,
        word = columns.prerelease_word,
        word_len = MAX_PRERELEASE_WORD_LENGTH,
        number = columns.prerelease_number,
        build = columns.build,
        build_len = MAX_BUILD_WORD_LENGTH,
    )
}

/// `INSERT` statement binding the raw version followed by the four encoded columns.
pub fn insert_sql(columns: &ColumnConfig) -> String {
    format!(
        "INSERT INTO {} ({}, {}, {}, {}, {}) VALUES (?1, ?2, ?3, ?4, ?5)",
        columns.table,
        columns.version,
        columns.prefix,
        columns.prerelease_word,
        columns.prerelease_number,
        columns.build,
    )
}

/// `ORDER BY` clause reproducing version precedence over the encoded columns.
pub fn order_by_sql(columns: &ColumnConfig) -> String {
    let prefix = &columns.prefix;
    // Text after the first dot, e.g. "2.3" for "1.2.3"
    let minor_patch = format!("substr({prefix}, instr({prefix}, '.') + 1)");
    let patch = format!("substr({minor_patch}, instr({minor_patch}, '.') + 1)");

    format!(
        "ORDER BY CAST({prefix} AS INTEGER), CAST({minor_patch} AS INTEGER), CAST({patch} AS INTEGER), {}, {}, {}",
        columns.prerelease_word, columns.prerelease_number, columns.build,
    )
}

/// `SELECT` of the raw versions in precedence order.
pub fn select_ordered_sql(columns: &ColumnConfig) -> String {
    format!(
        "SELECT {} FROM {} {}",
        columns.version,
        columns.table,
        order_by_sql(columns)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_table_sql_uses_column_widths() {
        let sql = create_table_sql(&ColumnConfig::default());

        assert!(sql.starts_with("CREATE TABLE IF NOT EXISTS module_versions ("));
        assert!(sql.contains("version_prefix VARCHAR(16) NOT NULL"));
        assert!(sql.contains("prerelease_word VARCHAR(60) NOT NULL"));
        assert!(sql.contains("prerelease_number INTEGER NOT NULL"));
        assert!(sql.contains("version_build VARCHAR(60) NOT NULL"));
    }

    #[test]
    fn insert_sql_binds_version_and_encoded_columns() {
        assert_eq!(
            insert_sql(&ColumnConfig::default()),
            "INSERT INTO module_versions (version, version_prefix, prerelease_word, prerelease_number, version_build) VALUES (?1, ?2, ?3, ?4, ?5)"
        );
    }

    #[test]
    fn order_by_sql_ends_with_word_number_build() {
        let sql = order_by_sql(&ColumnConfig::default());

        assert!(sql.starts_with("ORDER BY CAST(version_prefix AS INTEGER), "));
        assert!(sql.ends_with(", prerelease_word, prerelease_number, version_build"));
    }

    #[test]
    fn select_ordered_sql_uses_configured_names() {
        let columns = ColumnConfig {
            table: "tf_module_version".to_string(),
            version: "name".to_string(),
            ..ColumnConfig::default()
        };
        let sql = select_ordered_sql(&columns);

        assert!(sql.starts_with("SELECT name FROM tf_module_version ORDER BY "));
    }
}
