//! Intent rules: example questions and where they get routed.

pub mod model;

pub use model::{IntentFields, IntentRule};

use crate::rule::{InMemoryRepository, Record};

/// Sample rules shown on first load.
pub fn seed() -> Vec<IntentRule> {
    vec![
        Record {
            id: "1".to_string(),
            fields: IntentFields {
                question: "本月工资批量发放失败，提示'账户信息有误'怎么办？".to_string(),
                department: "薪酬组".to_string(),
                action: "在群里拉入薪酬顾问".to_string(),
                purpose: "紧急处理发放故障，确保员工工资按时到账".to_string(),
            },
        },
        Record {
            id: "2".to_string(),
            fields: IntentFields {
                question: "我想咨询一下最新的员工福利政策，特别是关于年度体检的部分。".to_string(),
                department: "福利组".to_string(),
                action: "分配给福利专员".to_string(),
                purpose: "了解公司福利，为自己和家人做计划".to_string(),
            },
        },
    ]
}

/// Repository holding the sample rules.
pub fn seeded_repository() -> InMemoryRepository<IntentFields> {
    InMemoryRepository::with_records(seed())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::RuleFields;

    #[test]
    fn test_seed_is_valid() {
        for rule in seed() {
            assert_eq!(rule.fields.first_blank(), None);
        }
    }

    #[test]
    fn test_first_blank_reports_field_order() {
        let fields = IntentFields {
            question: "q".into(),
            department: String::new(),
            action: String::new(),
            purpose: "p".into(),
        };
        assert_eq!(fields.first_blank(), Some("department"));
    }

    #[test]
    fn test_serializes_flat() {
        let json = serde_json::to_value(&seed()[0]).unwrap();
        assert_eq!(json["id"], "1");
        assert_eq!(json["department"], "薪酬组");
        assert!(json.get("fields").is_none());
    }
}
