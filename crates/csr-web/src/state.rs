//! Application state.

use std::sync::{Arc, Mutex};
use tokio::sync::RwLock;

use csr_core::customer::{self, AssignmentLookup, CustomerFields, StaticAssignmentLookup};
use csr_core::group::{self, SkillGroupFields, StaffRoster};
use csr_core::intent::{self, IntentFields};
use csr_core::navigation::{self, Page};
use csr_core::request::{PassthroughSearch, RequestHistory, RequestSearch};
use csr_core::rule::{RuleFields, RuleRepository};
use csr_core::session::SessionStore;

use crate::views::Shell;

/// A rule repository shared between handlers.
pub type SharedRepository<F> = Arc<RwLock<Box<dyn RuleRepository<F>>>>;

/// Toast severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A one-shot notification shown on the next rendered page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn css_class(&self) -> &'static str {
        match self.kind {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
        }
    }
}

/// Application state shared across handlers.
///
/// Each rule page owns its own repository; the session store is the only
/// state read by every page.
///
/// The console serves a single operator. The session and the toast queue
/// are process-wide, so a toast queued by one request is shown on the next
/// page rendered for any client.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<RwLock<SessionStore>>,
    pub intents: SharedRepository<IntentFields>,
    pub customers: SharedRepository<CustomerFields>,
    pub groups: SharedRepository<SkillGroupFields>,
    pub staff: Arc<StaffRoster>,
    pub requests: Arc<RequestHistory>,
    pub lookup: Arc<dyn AssignmentLookup>,
    pub search: Arc<dyn RequestSearch>,
    toasts: Arc<Mutex<Vec<Toast>>>,
}

fn shared<F: RuleFields>(repo: impl RuleRepository<F> + 'static) -> SharedRepository<F> {
    Arc::new(RwLock::new(Box::new(repo)))
}

impl AppState {
    /// State with the sample data and stub collaborators.
    pub fn new(session: SessionStore) -> Self {
        Self {
            session: Arc::new(RwLock::new(session)),
            intents: shared(intent::seeded_repository()),
            customers: shared(customer::seeded_repository()),
            groups: shared(group::seeded_repository()),
            staff: Arc::new(StaffRoster::seeded()),
            requests: Arc::new(RequestHistory::seeded()),
            lookup: Arc::new(StaticAssignmentLookup::default()),
            search: Arc::new(PassthroughSearch),
            toasts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Replace the customer lookup collaborator.
    pub fn with_lookup(mut self, lookup: impl AssignmentLookup + 'static) -> Self {
        self.lookup = Arc::new(lookup);
        self
    }

    /// Replace the request search collaborator.
    pub fn with_search(mut self, search: impl RequestSearch + 'static) -> Self {
        self.search = Arc::new(search);
        self
    }

    /// Queue a toast for the next rendered page.
    pub fn notify(&self, kind: ToastKind, message: impl Into<String>) {
        let toast = Toast {
            kind,
            message: message.into(),
        };
        tracing::debug!(?toast, "Toast queued");
        self.toasts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(toast);
    }

    /// Drain queued toasts.
    pub fn take_toasts(&self) -> Vec<Toast> {
        let mut toasts = self
            .toasts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        std::mem::take(&mut *toasts)
    }

    /// Sidebar/header frame for `page`, consuming queued toasts.
    pub async fn shell(&self, page: Page) -> Shell {
        let session = self.session.read().await.current_session();
        Shell {
            title: page.label(),
            initial: session.initial(),
            username: session.username,
            menu: navigation::menu(page),
            toasts: self.take_toasts(),
        }
    }
}
