use chrono::{DateTime, SecondsFormat, Utc};
use tracing::debug;

use crate::types::*;

/// Reserved storage key for STARTS_WITH clauses. A query holds at most one
/// prefix-search clause; repeated calls overwrite it.
const STARTS_WITH_KEY: &str = "__starts_with";

/// Accumulates named filter clauses and renders them into a single
/// visibility query string.
///
/// Clauses are keyed by search attribute: adding a second clause for the
/// same attribute replaces the first, in place (last write wins). Encoded
/// output follows call order. Every operation is total - values are not
/// validated here, a malformed query surfaces as a rejection from the
/// search endpoint.
///
/// Not thread-safe; give each concurrent query construction its own builder.
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    // (key, fully rendered fragment) pairs in call order. Each fragment
    // carries its own leading logical-operator text, decided at call time.
    clauses: Vec<(String, String)>,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// Add the first clause of a query. Only exists so the caller doesn't
    /// have to pick a logical operator that would be dropped anyway.
    pub fn start_clause(&mut self, attr: &str, op: ComparisonOp, value: &str) {
        let fragment = format!("{attr}{op}'{value}'");
        self.insert(attr, fragment);
    }

    /// Add a clause preceded by AND. With no preceding clause the operator
    /// is dropped, but `start_clause` reads better for the first entry.
    pub fn and(&mut self, attr: &str, op: ComparisonOp, value: &str) {
        self.clause(attr, op, value, LogicalOp::And);
    }

    /// Add a clause preceded by OR. With no preceding clause the operator
    /// is dropped, but `start_clause` reads better for the first entry.
    pub fn or(&mut self, attr: &str, op: ComparisonOp, value: &str) {
        self.clause(attr, op, value, LogicalOp::Or);
    }

    /// General form: `" <logical> "` prefix when the builder already holds
    /// clauses, then `attr<op>'value'`.
    pub fn clause(&mut self, attr: &str, op: ComparisonOp, value: &str, logical: LogicalOp) {
        let mut buf = self.prefix(logical);
        buf.push_str(attr);
        buf.push_str(op.as_str());
        buf.push('\'');
        buf.push_str(value);
        buf.push('\'');
        self.insert(attr, buf);
    }

    /// Parenthesized range clause, e.g.
    /// `(StartTime BETWEEN '2024-12-16T20:47:35Z' AND '2024-12-16T20:52:35Z')`.
    pub fn between(
        &mut self,
        attr: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        logical: LogicalOp,
    ) {
        let mut buf = self.prefix(logical);
        buf.push(DELIM_OPEN_PAREN);
        buf.push_str(attr);
        buf.push_str(&format!(
            " {TOKEN_BETWEEN} '{}' {TOKEN_AND} '{}'",
            format_timestamp(start),
            format_timestamp(end),
        ));
        buf.push(DELIM_CLOSE_PAREN);
        self.insert(attr, buf);
    }

    /// Membership clause, e.g. `WorkflowType IN ('TestMe', 'TestMeBackup')`.
    /// Values keep their input order; an empty slice renders `attr IN ()`.
    pub fn in_list(&mut self, attr: &str, values: &[&str], logical: LogicalOp) {
        let quoted: Vec<String> = values.iter().map(|v| format!("'{v}'")).collect();

        let mut buf = self.prefix(logical);
        buf.push_str(attr);
        buf.push_str(&format!(" {TOKEN_IN} "));
        buf.push(DELIM_OPEN_PAREN);
        buf.push_str(&quoted.join(", "));
        buf.push(DELIM_CLOSE_PAREN);
        self.insert(attr, buf);
    }

    /// Prefix-search clause, e.g. `STARTS_WITH 'billing-'`. Stored under a
    /// reserved key rather than an attribute name: one per query, and it can
    /// never collide with an attribute-keyed clause.
    pub fn starts_with(&mut self, value: &str, logical: LogicalOp) {
        let mut buf = self.prefix(logical);
        buf.push_str(TOKEN_STARTS_WITH);
        buf.push_str(&format!(" '{value}'"));
        self.insert(STARTS_WITH_KEY, buf);
    }

    /// Render the final query string. Each stored fragment already carries
    /// its own leading operator text, so fragments are concatenated with no
    /// separator. Non-destructive and idempotent; empty builder encodes to
    /// the empty string.
    pub fn encode(&self) -> String {
        let query: String = self
            .clauses
            .iter()
            .map(|(_, fragment)| fragment.as_str())
            .collect();
        debug!(%query, "encoded visibility query");
        query
    }

    // " <op> " when clauses already exist, empty otherwise.
    fn prefix(&self, logical: LogicalOp) -> String {
        if self.clauses.is_empty() {
            String::new()
        } else {
            format!(" {logical} ")
        }
    }

    // Replace in place when the key is already present so the fragment
    // keeps its position in the encoded output.
    fn insert(&mut self, key: &str, fragment: String) {
        match self.clauses.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = fragment,
            None => self.clauses.push((key.to_string(), fragment)),
        }
    }
}

// Seconds-precision RFC 3339 with a Z suffix, the form the search endpoint
// expects for datetime attributes.
fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}
