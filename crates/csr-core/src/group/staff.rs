//! Read-only staff roster.

use super::model::{SkillGroup, Staff, StaffAssignment, StaffStatus};

/// Fixed list of agents, in display order.
#[derive(Debug, Clone)]
pub struct StaffRoster {
    staff: Vec<Staff>,
}

impl StaffRoster {
    pub fn new(staff: Vec<Staff>) -> Self {
        Self { staff }
    }

    /// Sample roster shown on first load.
    pub fn seeded() -> Self {
        let entry = |id: &str, name: &str, group: &str, status| Staff {
            id: id.to_string(),
            name: name.to_string(),
            group: group.to_string(),
            status,
        };
        Self::new(vec![
            entry("1", "薪酬顾问A", "薪酬组", StaffStatus::Online),
            entry("2", "薪酬顾问B", "薪酬组", StaffStatus::Online),
            entry("3", "社保专员C", "社保组", StaffStatus::Offline),
            entry("4", "李客服", "默认组", StaffStatus::Online),
            entry("5", "赵客服", "默认组", StaffStatus::Offline),
        ])
    }

    pub fn list_staff(&self) -> &[Staff] {
        &self.staff
    }

    pub fn online_count(&self) -> usize {
        self.staff
            .iter()
            .filter(|s| s.status == StaffStatus::Online)
            .count()
    }

    /// Pair every agent with its group, if that group still exists.
    ///
    /// Deleting a group never touches the roster; agents pointing at a
    /// deleted group come back unassigned here.
    pub fn assignments(&self, groups: &[SkillGroup]) -> Vec<StaffAssignment> {
        self.staff
            .iter()
            .map(|s| StaffAssignment {
                staff: s.clone(),
                group: groups
                    .iter()
                    .any(|g| g.fields.name == s.group)
                    .then(|| s.group.clone()),
            })
            .collect()
    }
}
