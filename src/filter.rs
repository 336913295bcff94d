//! Conjunctive filter builder for the per-entity search statements.
//!
//! Each call adds one optional predicate; blank values are skipped, so a
//! search with no criteria degrades to the full table. Values are always
//! bound as named parameters (`:p0`, `:p1`, …) — never interpolated into the
//! SQL text. Substring predicates are wrapped with `%` wildcards here, at the
//! caller side of the DAL, and rely on SQLite's case-insensitive `LIKE`.

use rusqlite::ToSql;

/// Accumulates `AND`-combined predicates and their bound values.
#[derive(Debug, Default)]
pub struct Search {
    clauses: Vec<String>,
    params: Vec<(String, String)>,
}

impl Search {
    pub fn new() -> Self {
        Self::default()
    }

    /// Case-insensitive substring match. Skipped when `value` is blank.
    pub fn contains(&mut self, column: &str, value: &str) -> &mut Self {
        let value = value.trim();
        if !value.is_empty() {
            self.push(column, "LIKE", format!("%{value}%"));
        }
        self
    }

    /// Exact equality match. Skipped when `value` is blank.
    pub fn equals(&mut self, column: &str, value: &str) -> &mut Self {
        let value = value.trim();
        if !value.is_empty() {
            self.push(column, "=", value.to_string());
        }
        self
    }

    fn push(&mut self, column: &str, op: &str, value: String) {
        let name = format!(":p{}", self.params.len());
        self.clauses.push(format!("{column} {op} {name}"));
        self.params.push((name, value));
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// ` WHERE a AND b` fragment, or the empty string when no predicate was
    /// supplied. Column names come from fixed statement templates, never from
    /// caller input.
    pub fn where_clause(&self) -> String {
        if self.clauses.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", self.clauses.join(" AND "))
        }
    }

    /// Bound parameters in the shape the DAL's read primitive expects.
    pub fn params(&self) -> Vec<(&str, &dyn ToSql)> {
        self.params
            .iter()
            .map(|(name, value)| (name.as_str(), value as &dyn ToSql))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_predicates_yields_no_where() {
        let mut search = Search::new();
        search.contains("Name", "").contains("City", "   ");
        assert!(search.is_empty());
        assert_eq!(search.where_clause(), "");
        assert!(search.params().is_empty());
    }

    #[test]
    fn test_predicates_are_conjunctive() {
        let mut search = Search::new();
        search
            .contains("City", "Springfield")
            .equals("Status", "Pending");
        assert_eq!(
            search.where_clause(),
            " WHERE City LIKE :p0 AND Status = :p1"
        );
        let params = search.params();
        assert_eq!(params.len(), 2);
        assert_eq!(params[0].0, ":p0");
        assert_eq!(params[1].0, ":p1");
    }

    #[test]
    fn test_contains_wraps_wildcards() {
        let mut search = Search::new();
        search.contains("Name", "grocer");
        assert_eq!(search.params.len(), 1);
        assert_eq!(search.params[0].1, "%grocer%");
    }

    #[test]
    fn test_equals_does_not_wrap() {
        let mut search = Search::new();
        search.equals("Status", " Completed ");
        assert_eq!(search.params[0].1, "Completed");
    }
}
