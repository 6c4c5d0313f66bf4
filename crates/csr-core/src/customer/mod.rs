//! Customer rules: VIP bindings plus the assignment lookup.

pub mod lookup;
pub mod model;

pub use lookup::{lookup, AssignmentLookup, StaticAssignmentLookup};
pub use model::{CustomerFields, CustomerRule, LookupResult};

use crate::rule::{InMemoryRepository, Record};

/// Sample rules shown on first load.
pub fn seed() -> Vec<CustomerRule> {
    vec![
        Record {
            id: "1".to_string(),
            fields: CustomerFields {
                customer_id: "大客户A (ID: C001)".to_string(),
                binding: "周主管 (个人)".to_string(),
                description: "所有来自客户A的请求，优先分配给周主管".to_string(),
            },
        },
        Record {
            id: "2".to_string(),
            fields: CustomerFields {
                customer_id: "连锁集团B (ID: G005)".to_string(),
                binding: "薪酬组 (技能组)".to_string(),
                description: "集团B的所有薪酬问题，直接转接薪酬组".to_string(),
            },
        },
    ]
}

/// Repository holding the sample rules.
pub fn seeded_repository() -> InMemoryRepository<CustomerFields> {
    InMemoryRepository::with_records(seed())
}
