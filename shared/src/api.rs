use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Approve,
    Reject,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionRequest {
    pub action: ActionKind,
    pub comment: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminResponse {
    pub action: String,
    pub admin_name: String,
    #[serde(default)]
    pub comment: Option<String>,
    pub responded_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestDetail {
    pub id: u64,
    // absent on the user-scoped endpoint
    #[serde(default)]
    pub user_name: Option<String>,
    pub resource_name: String,
    pub event_name: String,
    pub quantity: i64,
    pub urgency: String,
    pub status: String,
    pub created_at: String,
    #[serde(default)]
    pub response: Option<AdminResponse>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceUtilization {
    pub name: String,
    pub utilization: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemStats {
    pub total_users: u64,
    pub total_events: u64,
    pub total_donations: u64,
    #[serde(default)]
    pub total_requests: Option<u64>,
    #[serde(default)]
    pub pending_requests: Option<u64>,
    #[serde(default)]
    pub resource_utilization: Vec<ResourceUtilization>,
}

/// One row of the admin request listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestSummary {
    pub id: u64,
    pub user_name: String,
    pub resource_name: String,
    pub event_name: String,
    pub quantity: i64,
    pub urgency: String,
    pub status: String,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestPage {
    pub requests: Vec<RequestSummary>,
    pub total: u64,
    pub pages: u64,
    pub current_page: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceStock {
    pub id: u64,
    pub name: String,
    pub available_quantity: i64,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventSummary {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub severity: Option<String>,
}

pub mod endpoints {
    pub fn request_action(base: &str, id: u64) -> String {
        format!("{}/admin/requests/{}/action", base, id)
    }

    pub fn request_detail(base: &str, id: u64) -> String {
        format!("{}/user/requests/{}", base, id)
    }

    pub fn stats(base: &str) -> String {
        format!("{}/admin/stats", base)
    }

    /// The listing is paginated server side; pages count from 1.
    pub fn pending_requests(base: &str, page: u64) -> String {
        format!("{}/admin/requests?status=Pending&page={}", base, page)
    }

    pub fn admin_resources(base: &str) -> String {
        format!("{}/admin/resources", base)
    }

    pub fn user_resources(base: &str) -> String {
        format!("{}/user/resources", base)
    }

    pub fn user_events(base: &str) -> String {
        format!("{}/user/events", base)
    }

    pub fn donate(base: &str) -> String {
        format!("{}/user/donate", base)
    }

    pub fn submit_request(base: &str) -> String {
        format!("{}/user/requests", base)
    }
}
