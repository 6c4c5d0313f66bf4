//! Skill groups and the staff roster.

pub mod model;
pub mod staff;

pub use model::{SkillGroup, SkillGroupFields, Staff, StaffAssignment, StaffStatus};
pub use staff::StaffRoster;

use crate::rule::{InMemoryRepository, Record};

/// Sample groups shown on first load.
pub fn seed() -> Vec<SkillGroup> {
    let group = |id: &str, name: &str, members: &[&str]| Record {
        id: id.to_string(),
        fields: SkillGroupFields {
            name: name.to_string(),
            members: members.iter().map(|m| m.to_string()).collect(),
        },
    };
    vec![
        group("1", "默认组", &["李客服", "赵客服"]),
        group("2", "薪酬组", &["薪酬顾问A", "薪酬顾问B"]),
        group("3", "社保组", &["社保专员C"]),
    ]
}

/// Repository holding the sample groups.
pub fn seeded_repository() -> InMemoryRepository<SkillGroupFields> {
    InMemoryRepository::with_records(seed())
}
