//! Intent rule domain models.

use serde::{Deserialize, Serialize};

use crate::rule::{Record, RuleFields};

/// An authored example mapping a customer question to a department.
pub type IntentRule = Record<IntentFields>;

/// Editable fields of an intent rule. All are required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentFields {
    /// Customer's original question (example utterance).
    #[serde(default)]
    pub question: String,
    /// Department the request is transferred to; doubles as the intent label.
    #[serde(default)]
    pub department: String,
    /// Action taken when the intent matches.
    #[serde(default)]
    pub action: String,
    /// Customer purpose, used as AI training annotation.
    #[serde(default)]
    pub purpose: String,
}

impl RuleFields for IntentFields {
    const KIND: &'static str = "intent rule";

    fn normalize(&mut self) {
        for field in [
            &mut self.question,
            &mut self.department,
            &mut self.action,
            &mut self.purpose,
        ] {
            *field = field.trim().to_string();
        }
    }

    fn first_blank(&self) -> Option<&'static str> {
        [
            ("question", &self.question),
            ("department", &self.department),
            ("action", &self.action),
            ("purpose", &self.purpose),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
    }
}
