//! Display-ready projections of server payloads. The client only lays these out.

use std::collections::HashMap;

use crate::api::{EventSummary, RequestDetail, RequestSummary, ResourceStock, SystemStats};
use crate::format::{
    bar_width, format_count, format_timestamp, status_badge, urgency_badge, UtilizationTier,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Counter {
    pub value: String,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UtilizationBar {
    pub label: String,
    pub value_text: String,
    pub width: f64,
    pub class: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatsView {
    pub counters: [Counter; 3],
    pub bars: Vec<UtilizationBar>,
}

impl From<&SystemStats> for StatsView {
    fn from(stats: &SystemStats) -> Self {
        StatsView {
            counters: [
                Counter {
                    value: format_count(stats.total_users),
                    label: "Users",
                },
                Counter {
                    value: format_count(stats.total_events),
                    label: "Events",
                },
                Counter {
                    value: format_count(stats.total_donations),
                    label: "Donations",
                },
            ],
            bars: stats
                .resource_utilization
                .iter()
                .map(|resource| UtilizationBar {
                    label: resource.name.clone(),
                    value_text: format!("{}%", resource.utilization),
                    width: bar_width(resource.utilization),
                    class: UtilizationTier::from_percent(resource.utilization).css_class(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResponseBlock {
    pub alert_class: &'static str,
    pub action: String,
    pub by: String,
    pub comment: String,
    pub responded: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub requester: Option<String>,
    pub resource: String,
    pub event: String,
    pub quantity: String,
    pub urgency: String,
    pub urgency_badge: &'static str,
    pub status: String,
    pub status_badge: &'static str,
    pub created: String,
    pub response: Option<ResponseBlock>,
}

impl From<&RequestDetail> for DetailView {
    fn from(detail: &RequestDetail) -> Self {
        DetailView {
            requester: detail.user_name.clone(),
            resource: detail.resource_name.clone(),
            event: detail.event_name.clone(),
            quantity: detail.quantity.to_string(),
            urgency: detail.urgency.clone(),
            urgency_badge: urgency_badge(&detail.urgency),
            status: detail.status.clone(),
            status_badge: status_badge(&detail.status),
            created: format_timestamp(&detail.created_at),
            response: detail.response.as_ref().map(|r| ResponseBlock {
                alert_class: if r.action == "Approved" {
                    "alert-success"
                } else {
                    "alert-danger"
                },
                action: r.action.clone(),
                by: r.admin_name.clone(),
                comment: r
                    .comment
                    .clone()
                    .filter(|c| !c.is_empty())
                    .unwrap_or_else(|| "No comment provided".to_string()),
                responded: format_timestamp(&r.responded_at),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PendingRow {
    pub id: u64,
    pub requester: String,
    pub resource: String,
    pub event: String,
    pub quantity: i64,
    pub available: Option<i64>,
    pub urgency: String,
    pub urgency_badge: &'static str,
    pub created: String,
    /// Approving would draw more than is in stock.
    pub insufficient: bool,
}

pub fn pending_rows(requests: &[RequestSummary], resources: &[ResourceStock]) -> Vec<PendingRow> {
    let stock: HashMap<&str, i64> = resources
        .iter()
        .map(|r| (r.name.as_str(), r.available_quantity))
        .collect();

    requests
        .iter()
        .filter(|r| r.status == "Pending")
        .map(|r| {
            let available = stock.get(r.resource_name.as_str()).copied();
            PendingRow {
                id: r.id,
                requester: r.user_name.clone(),
                resource: r.resource_name.clone(),
                event: r.event_name.clone(),
                quantity: r.quantity,
                available,
                urgency: r.urgency.clone(),
                urgency_badge: urgency_badge(&r.urgency),
                created: format_timestamp(&r.created_at),
                insufficient: available.map_or(true, |a| r.quantity > a),
            }
        })
        .collect()
}

/// Option text for the event select, e.g. `Flood (High)`.
pub fn event_label(event: &EventSummary) -> String {
    match event.severity.as_deref().filter(|s| !s.is_empty()) {
        Some(severity) => format!("{} ({})", event.name, severity),
        None => event.name.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::RequestPage;

    #[test]
    fn stats_example_renders_counters_and_critical_bar() {
        let stats: SystemStats = serde_json::from_str(
            r#"{"total_users":10,"total_events":2,"total_donations":50,
                "resource_utilization":[{"name":"Water","utilization":92}]}"#,
        )
        .unwrap();
        let view = StatsView::from(&stats);

        let values: Vec<_> = view.counters.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(values, vec!["10", "2", "50"]);
        assert_eq!(
            view.bars,
            vec![UtilizationBar {
                label: "Water".to_string(),
                value_text: "92%".to_string(),
                width: 92.0,
                class: "bg-danger",
            }]
        );
    }

    #[test]
    fn overcommitted_resource_keeps_real_value_but_clamps_width() {
        let stats: SystemStats = serde_json::from_str(
            r#"{"total_users":1,"total_events":1,"total_donations":1234,
                "resource_utilization":[{"name":"Tents","utilization":125.5},
                                        {"name":"Food","utilization":12.25}]}"#,
        )
        .unwrap();
        let view = StatsView::from(&stats);
        assert_eq!(view.counters[2].value, "1,234");
        assert_eq!(view.bars[0].value_text, "125.5%");
        assert_eq!(view.bars[0].width, 100.0);
        assert_eq!(view.bars[1].class, "bg-success");
    }

    #[test]
    fn detail_with_admin_response() {
        let detail: RequestDetail = serde_json::from_str(
            r#"{"id":4,"user_name":"Ana","resource_name":"Water","event_name":"Flood",
                "quantity":12,"urgency":"Critical","status":"Rejected",
                "created_at":"2024-03-01T10:15:00",
                "response":{"action":"Rejected","admin_name":"Root","comment":null,
                            "responded_at":"2024-03-02T08:00:00.5"}}"#,
        )
        .unwrap();
        let view = DetailView::from(&detail);

        assert_eq!(view.requester.as_deref(), Some("Ana"));
        assert_eq!(view.urgency_badge, "danger");
        assert_eq!(view.status_badge, "danger");
        assert_eq!(view.created, "2024-03-01 10:15");
        let block = view.response.unwrap();
        assert_eq!(block.alert_class, "alert-danger");
        assert_eq!(block.by, "Root");
        assert_eq!(block.comment, "No comment provided");
        assert_eq!(block.responded, "2024-03-02 08:00");
    }

    #[test]
    fn approved_response_is_green() {
        let detail: RequestDetail = serde_json::from_str(
            r#"{"id":1,"resource_name":"Food","event_name":"Fire","quantity":1,
                "urgency":"Low","status":"Approved","created_at":"2024-03-01T10:15:00",
                "response":{"action":"Approved","admin_name":"Root","comment":"ok",
                            "responded_at":"2024-03-01T11:00:00"}}"#,
        )
        .unwrap();
        let block = DetailView::from(&detail).response.unwrap();
        assert_eq!(block.alert_class, "alert-success");
        assert_eq!(block.comment, "ok");
    }

    #[test]
    fn pending_rows_flag_insufficient_stock() {
        let page: RequestPage = serde_json::from_str(
            r#"{"requests":[
                {"id":1,"user_name":"Ana","resource_name":"Water","event_name":"Flood",
                 "quantity":10,"urgency":"High","status":"Pending","created_at":"2024-03-01T10:15:00"},
                {"id":2,"user_name":"Ben","resource_name":"Water","event_name":"Flood",
                 "quantity":80,"urgency":"Low","status":"Pending","created_at":"2024-03-01T10:16:00"},
                {"id":3,"user_name":"Cy","resource_name":"Blankets","event_name":"Flood",
                 "quantity":1,"urgency":"Low","status":"Pending","created_at":"2024-03-01T10:17:00"},
                {"id":4,"user_name":"Di","resource_name":"Water","event_name":"Flood",
                 "quantity":1,"urgency":"Low","status":"Approved","created_at":"2024-03-01T10:18:00"}
               ],"total":4,"pages":1,"current_page":1}"#,
        )
        .unwrap();
        let resources = vec![ResourceStock {
            id: 1,
            name: "Water".to_string(),
            available_quantity: 50,
            unit: "litres".to_string(),
        }];

        let rows = pending_rows(&page.requests, &resources);
        let flags: Vec<_> = rows.iter().map(|r| (r.id, r.insufficient)).collect();
        assert_eq!(flags, vec![(1, false), (2, true), (3, true)]);
        assert_eq!(rows[0].available, Some(50));
        assert_eq!(rows[2].available, None);
    }

    #[test]
    fn event_label_includes_severity_when_known() {
        let events: Vec<EventSummary> = serde_json::from_str(
            r#"[{"id":1,"name":"Flood","severity":"High","description":"river"},
                {"id":2,"name":"Fire"},
                {"id":3,"name":"Storm","severity":""}]"#,
        )
        .unwrap();
        let labels: Vec<_> = events.iter().map(event_label).collect();
        assert_eq!(labels, vec!["Flood (High)", "Fire", "Storm"]);
    }
}
