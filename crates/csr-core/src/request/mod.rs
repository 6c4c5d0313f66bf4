//! Request history viewer.

pub mod model;
pub mod search;

pub use model::{RequestRecord, RequestStatus};
pub use search::{PassthroughSearch, RequestSearch};

/// Read-only request history, newest first.
#[derive(Debug, Clone)]
pub struct RequestHistory {
    requests: Vec<RequestRecord>,
}

impl RequestHistory {
    pub fn new(requests: Vec<RequestRecord>) -> Self {
        Self { requests }
    }

    /// Sample history shown on first load.
    pub fn seeded() -> Self {
        let request = |id: &str, customer: &str, intent: &str, status: &str, history: &str, collaborators: &str| {
            RequestRecord {
                id: id.to_string(),
                customer: customer.to_string(),
                intent: intent.to_string(),
                status: RequestStatus::from_str(status),
                history: history.to_string(),
                collaborators: collaborators.to_string(),
            }
        };
        Self::new(vec![
            request("REQ-001278", "王五", "复杂售后", "resolved", "售后组 -> 技术专家组", "孙技术, 陈专家"),
            request("REQ-001277", "张三", "产品咨询", "completed", "售前组", "李客服"),
            request("REQ-001276", "李四", "技术支持", "processing", "技术组 -> 高级工程师", "王工程师, 张工程师"),
        ])
    }

    pub fn list(&self) -> &[RequestRecord] {
        &self.requests
    }

    /// Run the search box through `search`.
    pub fn search(&self, search: &dyn RequestSearch, query: &str) -> Vec<RequestRecord> {
        search.filter(&self.requests, query)
    }
}
