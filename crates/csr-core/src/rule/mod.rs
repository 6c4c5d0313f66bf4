//! Generic rule repository.
//!
//! Every rule screen (intent rules, customer rules, skill groups) keeps an
//! ordered, id-keyed collection and stages all mutations through a [`Draft`].
//! The screens differ only in their field set, which implements
//! [`RuleFields`].

pub mod ids;

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::error::{ConsoleError, ConsoleResult};
use ids::IdGenerator;

/// Field set of one rule domain.
pub trait RuleFields: Clone + Default + fmt::Debug + Serialize + Send + Sync + 'static {
    /// Record kind, used in errors and logs.
    const KIND: &'static str;

    /// Trim text fields and drop blank list entries.
    fn normalize(&mut self);

    /// First required field that is blank, if any.
    fn first_blank(&self) -> Option<&'static str>;
}

/// A stored rule: an id plus the domain fields, serialized flat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record<F> {
    pub id: String,
    #[serde(flatten)]
    pub fields: F,
}

/// Whether a draft creates a new record or edits an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditMode {
    Create,
    Edit(String),
}

/// Uncommitted edit buffer for one record.
#[derive(Debug, Clone)]
pub struct Draft<F> {
    pub mode: EditMode,
    pub fields: F,
}

impl<F: RuleFields> Draft<F> {
    /// A blank draft in create mode.
    pub fn create() -> Self {
        Self {
            mode: EditMode::Create,
            fields: F::default(),
        }
    }

    /// A create-mode draft carrying the given field values.
    pub fn create_with(fields: F) -> Self {
        Self {
            mode: EditMode::Create,
            fields,
        }
    }

    /// An edit-mode draft targeting `id`.
    pub fn edit(id: impl Into<String>, fields: F) -> Self {
        Self {
            mode: EditMode::Edit(id.into()),
            fields,
        }
    }

    pub fn is_create(&self) -> bool {
        self.mode == EditMode::Create
    }

    /// Id of the record being edited, `None` in create mode.
    pub fn target_id(&self) -> Option<&str> {
        match &self.mode {
            EditMode::Create => None,
            EditMode::Edit(id) => Some(id),
        }
    }
}

/// Outcome of a delete. Both variants count as success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    Removed,
    Absent,
}

/// Normalize `fields` and reject the first blank required field.
pub fn validate<F: RuleFields>(mut fields: F) -> ConsoleResult<F> {
    fields.normalize();
    match fields.first_blank() {
        Some(field) => Err(ConsoleError::required(F::KIND, field)),
        None => Ok(fields),
    }
}

/// Storage contract behind every rule screen.
pub trait RuleRepository<F: RuleFields>: Send + Sync {
    /// Snapshot of the collection in insertion order.
    fn list(&self) -> Vec<Record<F>>;

    /// Look up a single record.
    fn get(&self, id: &str) -> Option<Record<F>>;

    /// Open the edit surface in create mode.
    fn begin_create(&self) -> Draft<F> {
        Draft::create()
    }

    /// Open the edit surface on a detached copy of record `id`.
    fn begin_edit(&self, id: &str) -> ConsoleResult<Draft<F>> {
        self.get(id)
            .map(|record| Draft::edit(record.id, record.fields))
            .ok_or_else(|| ConsoleError::missing(F::KIND, id))
    }

    /// Validate and apply a draft, returning the stored record.
    fn commit(&mut self, draft: Draft<F>) -> ConsoleResult<Record<F>>;

    /// Delete record `id`. Deleting an absent id is not an error.
    fn remove(&mut self, id: &str) -> Removal;
}

/// Process-local repository backed by a `Vec`.
#[derive(Debug, Clone)]
pub struct InMemoryRepository<F> {
    records: Vec<Record<F>>,
    ids: IdGenerator,
}

impl<F: RuleFields> Default for InMemoryRepository<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: RuleFields> InMemoryRepository<F> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            ids: IdGenerator::new(),
        }
    }

    /// Repository pre-populated with `records`, kept in the given order.
    pub fn with_records(records: Vec<Record<F>>) -> Self {
        Self {
            records,
            ids: IdGenerator::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<F: RuleFields> RuleRepository<F> for InMemoryRepository<F> {
    fn list(&self) -> Vec<Record<F>> {
        self.records.clone()
    }

    fn get(&self, id: &str) -> Option<Record<F>> {
        self.records.iter().find(|r| r.id == id).cloned()
    }

    fn commit(&mut self, draft: Draft<F>) -> ConsoleResult<Record<F>> {
        let fields = validate(draft.fields)?;

        match draft.mode {
            EditMode::Create => {
                let id = self
                    .ids
                    .next_id(|candidate| self.records.iter().any(|r| r.id == candidate));
                let record = Record { id, fields };
                self.records.push(record.clone());
                debug!(kind = F::KIND, id = %record.id, "Record created");
                Ok(record)
            }
            EditMode::Edit(id) => {
                let record = self
                    .records
                    .iter_mut()
                    .find(|r| r.id == id)
                    .ok_or_else(|| ConsoleError::missing(F::KIND, id.as_str()))?;
                record.fields = fields;
                debug!(kind = F::KIND, id = %record.id, "Record updated");
                Ok(record.clone())
            }
        }
    }

    fn remove(&mut self, id: &str) -> Removal {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        if self.records.len() < before {
            debug!(kind = F::KIND, id, "Record removed");
            Removal::Removed
        } else {
            debug!(kind = F::KIND, id, "Remove of absent record ignored");
            Removal::Absent
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::customer::{self, CustomerFields};
    use crate::group::{self, SkillGroupFields};
    use crate::intent::{self, IntentFields};

    /// Create contract: blank drafts are rejected untouched, a valid one is
    /// appended with a fresh id.
    fn check_create<F: RuleFields + PartialEq>(
        mut repo: InMemoryRepository<F>,
        valid: F,
        blanked: Vec<F>,
    ) {
        let before = repo.list();

        for fields in blanked {
            let err = repo.commit(Draft::create_with(fields)).unwrap_err();
            assert!(matches!(err, ConsoleError::RequiredFieldEmpty { .. }));
            assert_eq!(repo.list().len(), before.len());
        }

        let created = repo.commit(Draft::create_with(valid.clone())).unwrap();
        let after = repo.list();
        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(after.last().unwrap(), &created);
        assert_eq!(created.fields, valid);
        assert!(before.iter().all(|r| r.id != created.id));
    }

    /// Edit contract: same length, same position, same id, new fields.
    fn check_edit<F: RuleFields + PartialEq>(mut repo: InMemoryRepository<F>, changed: F) {
        let before = repo.list();
        let target = before[1].id.clone();

        let mut draft = repo.begin_edit(&target).unwrap();
        draft.fields = changed.clone();
        let updated = repo.commit(draft).unwrap();

        let after = repo.list();
        assert_eq!(after.len(), before.len());
        assert_eq!(after[1].id, target);
        assert_eq!(after[1].fields, changed);
        assert_eq!(updated.id, target);
    }

    /// Every required field, each paired with a way to blank it.
    type Blanker<F> = (&'static str, fn(&mut F, &str));

    /// One variant per field and blank value, so each required field is
    /// checked empty and whitespace-only.
    fn blanked_variants<F: RuleFields>(valid: &F, blankers: &[Blanker<F>]) -> Vec<(&'static str, F)> {
        let mut variants = Vec::new();
        for (field, blank) in blankers {
            for value in ["", "  \t "] {
                let mut fields = valid.clone();
                blank(&mut fields, value);
                variants.push((*field, fields));
            }
        }
        variants
    }

    fn assert_each_blank_rejected<F: RuleFields>(valid: &F, blankers: &[Blanker<F>]) {
        let mut repo = InMemoryRepository::<F>::new();
        for (field, fields) in blanked_variants(valid, blankers) {
            let err = repo.commit(Draft::create_with(fields)).unwrap_err();
            assert!(
                matches!(err, ConsoleError::RequiredFieldEmpty { field: f, .. } if f == field),
                "{field}: {err}"
            );
            assert!(repo.is_empty());
        }
    }

    #[test]
    fn test_create_contract_intent() {
        let valid = IntentFields {
            question: "How do I reset my payroll password?".into(),
            department: "Payroll".into(),
            action: "Assign to payroll advisor".into(),
            purpose: "Regain access".into(),
        };
        let blankers: [Blanker<IntentFields>; 4] = [
            ("question", |f, v| f.question = v.into()),
            ("department", |f, v| f.department = v.into()),
            ("action", |f, v| f.action = v.into()),
            ("purpose", |f, v| f.purpose = v.into()),
        ];
        assert_each_blank_rejected(&valid, &blankers);
        let blanked = blanked_variants(&valid, &blankers).into_iter().map(|(_, f)| f).collect();
        check_create(intent::seeded_repository(), valid, blanked);
    }

    #[test]
    fn test_create_contract_customer() {
        let valid = CustomerFields {
            customer_id: "Retailer C (ID: C009)".into(),
            binding: "Benefits team".into(),
            description: "Route every request to benefits".into(),
        };
        let blankers: [Blanker<CustomerFields>; 3] = [
            ("customerId", |f, v| f.customer_id = v.into()),
            ("binding", |f, v| f.binding = v.into()),
            ("description", |f, v| f.description = v.into()),
        ];
        assert_each_blank_rejected(&valid, &blankers);
        let blanked = blanked_variants(&valid, &blankers).into_iter().map(|(_, f)| f).collect();
        check_create(customer::seeded_repository(), valid, blanked);
    }

    #[test]
    fn test_create_contract_group() {
        let valid = SkillGroupFields {
            name: "Escalations".into(),
            members: vec!["Agent Q".into()],
        };
        let no_members = SkillGroupFields {
            name: "Escalations".into(),
            members: vec![" ".into()],
        };
        let no_name = SkillGroupFields {
            name: String::new(),
            members: vec!["Agent Q".into()],
        };
        let blank_name = SkillGroupFields {
            name: " \t".into(),
            members: vec!["Agent Q".into()],
        };
        let empty_members = SkillGroupFields {
            name: "Escalations".into(),
            members: Vec::new(),
        };
        check_create(
            group::seeded_repository(),
            valid,
            vec![no_members, no_name, blank_name, empty_members],
        );
    }

    #[test]
    fn test_edit_contract_all_domains() {
        check_edit(
            intent::seeded_repository(),
            IntentFields {
                question: "q".into(),
                department: "d".into(),
                action: "a".into(),
                purpose: "p".into(),
            },
        );
        check_edit(
            customer::seeded_repository(),
            CustomerFields {
                customer_id: "c".into(),
                binding: "b".into(),
                description: "d".into(),
            },
        );
        check_edit(
            group::seeded_repository(),
            SkillGroupFields {
                name: "n".into(),
                members: vec!["m1".into(), "m2".into()],
            },
        );
    }

    #[test]
    fn test_begin_edit_is_detached() {
        let repo = intent::seeded_repository();
        let mut draft = repo.begin_edit("1").unwrap();
        draft.fields.question = "changed but never committed".into();
        assert_ne!(repo.get("1").unwrap().fields.question, draft.fields.question);
    }

    #[test]
    fn test_begin_edit_missing() {
        let repo = intent::seeded_repository();
        let err = repo.begin_edit("nope").unwrap_err();
        assert!(matches!(err, ConsoleError::RecordMissing { .. }));
    }

    #[test]
    fn test_begin_create_is_blank() {
        let repo = customer::seeded_repository();
        let draft = repo.begin_create();
        assert!(draft.is_create());
        assert_eq!(draft.fields, CustomerFields::default());
    }

    #[test]
    fn test_stale_edit_surfaces_missing() {
        let mut repo = intent::seeded_repository();
        let draft = repo.begin_edit("2").unwrap();
        assert_eq!(repo.remove("2"), Removal::Removed);

        let before = repo.list();
        let err = repo.commit(draft).unwrap_err();
        assert!(matches!(err, ConsoleError::RecordMissing { ref id, .. } if id == "2"));
        assert_eq!(repo.list(), before);
    }

    #[test]
    fn test_edit_validation_keeps_record() {
        let mut repo = intent::seeded_repository();
        let original = repo.get("1").unwrap();
        let mut draft = repo.begin_edit("1").unwrap();
        draft.fields.purpose = "  ".into();
        assert!(repo.commit(draft).is_err());
        assert_eq!(repo.get("1").unwrap(), original);
    }

    #[test]
    fn test_remove_present_and_absent() {
        let mut repo = group::seeded_repository();
        let before = repo.list();

        assert_eq!(repo.remove("missing"), Removal::Absent);
        assert_eq!(repo.list(), before);

        assert_eq!(repo.remove("2"), Removal::Removed);
        assert_eq!(repo.len(), before.len() - 1);
        assert!(repo.get("2").is_none());

        assert_eq!(repo.remove("2"), Removal::Absent);
        assert_eq!(repo.len(), before.len() - 1);
    }

    #[test]
    fn test_commit_trims_fields() {
        let mut repo = InMemoryRepository::<IntentFields>::new();
        let record = repo
            .commit(Draft::create_with(IntentFields {
                question: "  q  ".into(),
                department: " d".into(),
                action: "a ".into(),
                purpose: "p".into(),
            }))
            .unwrap();
        assert_eq!(record.fields.question, "q");
        assert_eq!(record.fields.department, "d");
        assert_eq!(record.fields.action, "a");
    }

    #[test]
    fn test_rapid_creates_get_unique_ids() {
        let mut repo = InMemoryRepository::<IntentFields>::new();
        let fields = IntentFields {
            question: "q".into(),
            department: "d".into(),
            action: "a".into(),
            purpose: "p".into(),
        };
        let a = repo.commit(Draft::create_with(fields.clone())).unwrap();
        let b = repo.commit(Draft::create_with(fields)).unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(repo.list().iter().map(|r| r.id.clone()).collect::<Vec<_>>(), vec![a.id, b.id]);
    }
}
