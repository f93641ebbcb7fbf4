use serde::{Deserialize, Serialize};
use std::fmt;

// Query delimiters
pub const DELIM_OPEN_PAREN: char = '(';
pub const DELIM_CLOSE_PAREN: char = ')';

// Keyword tokens of the visibility query language
pub const TOKEN_AND: &str = "AND";
pub const TOKEN_OR: &str = "OR";
pub const TOKEN_BETWEEN: &str = "BETWEEN";
pub const TOKEN_IN: &str = "IN";
pub const TOKEN_STARTS_WITH: &str = "STARTS_WITH";

// Default search attributes - used in queries. Advisory: the builder accepts
// any attribute name, these exist so callers don't hand-spell them.
pub const SEARCH_ATTR_BATCHER_USER: &str = "BatcherUser";
pub const SEARCH_ATTR_BINARY_CHECKSUMS: &str = "BinaryChecksums";
pub const SEARCH_ATTR_BUILD_IDS: &str = "BuildIds";
pub const SEARCH_ATTR_CLOSE_TIME: &str = "CloseTime";
pub const SEARCH_ATTR_EXECUTION_DURATION: &str = "ExecutionDuration";
pub const SEARCH_ATTR_EXECUTION_STATUS: &str = "ExecutionStatus";
pub const SEARCH_ATTR_EXECUTION_TIME: &str = "ExecutionTime";
pub const SEARCH_ATTR_HISTORY_LENGTH: &str = "HistoryLength";
pub const SEARCH_ATTR_HISTORY_SIZE_BYTES: &str = "HistorySizeBytes";
pub const SEARCH_ATTR_RUN_ID: &str = "RunId";
pub const SEARCH_ATTR_START_TIME: &str = "StartTime";
pub const SEARCH_ATTR_STATE_TRANSITION_COUNT: &str = "StateTransitionCount";
pub const SEARCH_ATTR_TASK_QUEUE: &str = "TaskQueue";
pub const SEARCH_ATTR_TEMPORAL_CHANGE_VERSION: &str = "TemporalChangeVersion";
pub const SEARCH_ATTR_TEMPORAL_SCHEDULED_START_TIME: &str = "TemporalScheduledStartTime";
pub const SEARCH_ATTR_TEMPORAL_SCHEDULED_BY_ID: &str = "TemporalScheduledById";
pub const SEARCH_ATTR_TEMPORAL_SCHEDULE_PAUSED: &str = "TemporalSchedulePaused";
pub const SEARCH_ATTR_WORKFLOW_ID: &str = "WorkflowId";
pub const SEARCH_ATTR_WORKFLOW_TYPE: &str = "WorkflowType";

/// Comparison operator placed between an attribute and its value.
///
/// Constrained to the relational symbols the query language understands, so
/// an arbitrary byte can't end up in the middle of a clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComparisonOp {
    Eq,
    Ne,
    Gt,
    Gte,
    Lt,
    Lte,
}

impl ComparisonOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComparisonOp::Eq => "=",
            ComparisonOp::Ne => "!=",
            ComparisonOp::Gt => ">",
            ComparisonOp::Gte => ">=",
            ComparisonOp::Lt => "<",
            ComparisonOp::Lte => "<=",
        }
    }
}

impl fmt::Display for ComparisonOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Logical operator joining two clauses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogicalOp {
    And,
    Or,
}

impl LogicalOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogicalOp::And => TOKEN_AND,
            LogicalOp::Or => TOKEN_OR,
        }
    }
}

impl fmt::Display for LogicalOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Workflow execution statuses recognized by the search endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExecutionStatus {
    Running,
    Completed,
    Failed,
    Canceled,
    Terminated,
    ContinuedAsNew,
    TimedOut,
}

impl ExecutionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutionStatus::Running => "Running",
            ExecutionStatus::Completed => "Completed",
            ExecutionStatus::Failed => "Failed",
            ExecutionStatus::Canceled => "Canceled",
            ExecutionStatus::Terminated => "Terminated",
            ExecutionStatus::ContinuedAsNew => "ContinuedAsNew",
            ExecutionStatus::TimedOut => "TimedOut",
        }
    }
}

impl fmt::Display for ExecutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
