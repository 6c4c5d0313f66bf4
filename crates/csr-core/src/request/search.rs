//! Request history search.

use super::model::RequestRecord;

/// Filters the request history for the search box.
pub trait RequestSearch: Send + Sync {
    fn filter(&self, requests: &[RequestRecord], query: &str) -> Vec<RequestRecord>;
}

/// Stub collaborator: the search box is shown but never narrows the list.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughSearch;

impl RequestSearch for PassthroughSearch {
    fn filter(&self, requests: &[RequestRecord], _query: &str) -> Vec<RequestRecord> {
        requests.to_vec()
    }
}
