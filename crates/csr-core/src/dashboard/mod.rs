//! Metrics dashboard. The figures are static mock data.

pub mod model;

pub use model::{Allocation, Dashboard, DashboardStat, Tone};

use crate::request::RequestStatus;

/// The dashboard shown after login.
pub fn snapshot() -> Dashboard {
    let stat = |title: &str, value: &str, tone| DashboardStat {
        title: title.to_string(),
        value: value.to_string(),
        tone,
    };
    let allocation = |id: &str, customer: &str, intent: &str, assigned_to: &str, time: &str, status| Allocation {
        id: id.to_string(),
        customer: customer.to_string(),
        intent: intent.to_string(),
        assigned_to: assigned_to.to_string(),
        time: time.to_string(),
        status,
    };

    Dashboard {
        stats: vec![
            stat("今日请求总数", "1,280", Tone::Primary),
            stat("待处理", "32", Tone::Warning),
            stat("处理中", "125", Tone::Success),
            stat("已完成", "1,123", Tone::Indigo),
        ],
        recent_allocations: vec![
            allocation("REQ-001280", "张三", "产品咨询", "李客服 (售前组)", "2分钟前", RequestStatus::Processing),
            allocation("REQ-001279", "李四", "技术支持", "王工程师 (技术组)", "5分钟前", RequestStatus::Completed),
            allocation("REQ-001278", "王五", "售后服务", "赵客服 (售后组)", "10分钟前", RequestStatus::Pending),
        ],
    }
}
