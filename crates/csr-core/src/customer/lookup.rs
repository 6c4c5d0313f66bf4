//! Customer assignment lookup.

use tracing::debug;

use super::model::LookupResult;
use crate::error::{ConsoleError, ConsoleResult};

/// Answers "who is serving this customer right now".
pub trait AssignmentLookup: Send + Sync {
    /// Resolve a non-blank, trimmed query.
    fn resolve(&self, query: &str) -> LookupResult;
}

/// Stub collaborator returning a fixed placeholder answer for any customer.
///
/// It does not consult the customer rule collection.
#[derive(Debug, Clone)]
pub struct StaticAssignmentLookup {
    pub current_handler: String,
    pub predicted_collaborator: String,
}

impl Default for StaticAssignmentLookup {
    fn default() -> Self {
        Self {
            current_handler: "周主管".to_string(),
            predicted_collaborator: "薪酬顾问A (当涉及薪酬问题时)".to_string(),
        }
    }
}

impl AssignmentLookup for StaticAssignmentLookup {
    fn resolve(&self, query: &str) -> LookupResult {
        LookupResult {
            query: query.to_string(),
            current_handler: self.current_handler.clone(),
            predicted_collaborator: self.predicted_collaborator.clone(),
        }
    }
}

/// Run a lookup, rejecting blank queries.
pub fn lookup(source: &dyn AssignmentLookup, query: &str) -> ConsoleResult<LookupResult> {
    let query = query.trim();
    if query.is_empty() {
        return Err(ConsoleError::EmptyQuery);
    }
    debug!(query, "Customer assignment lookup");
    Ok(source.resolve(query))
}
