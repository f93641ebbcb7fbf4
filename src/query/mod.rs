// Visibility query assembly
//
// Builds the textual filter expression consumed by the workflow search
// endpoint, e.g. "WorkflowType='TestMe' AND ExecutionStatus='Running'".
// One-directional: no parsing, no validation, no execution.

mod builder;


pub use builder::QueryBuilder;
