//! Customer rule domain models.

use serde::{Deserialize, Serialize};

use crate::rule::{Record, RuleFields};

/// A VIP binding from a customer to a dedicated agent or skill group.
pub type CustomerRule = Record<CustomerFields>;

/// Editable fields of a customer rule. All are required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerFields {
    /// Customer id or name, free text.
    #[serde(default)]
    pub customer_id: String,
    /// Bound agent or skill group, free text.
    #[serde(default)]
    pub binding: String,
    #[serde(default)]
    pub description: String,
}

impl RuleFields for CustomerFields {
    const KIND: &'static str = "customer rule";

    fn normalize(&mut self) {
        for field in [&mut self.customer_id, &mut self.binding, &mut self.description] {
            *field = field.trim().to_string();
        }
    }

    fn first_blank(&self) -> Option<&'static str> {
        [
            ("customerId", &self.customer_id),
            ("binding", &self.binding),
            ("description", &self.description),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
    }
}

/// Answer to a "who handles this customer" lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupResult {
    /// The query as entered, trimmed.
    pub query: String,
    pub current_handler: String,
    pub predicted_collaborator: String,
}
