use chrono::{DateTime, NaiveDateTime};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UtilizationTier {
    Healthy,
    Info,
    Warning,
    Critical,
}

impl UtilizationTier {
    pub fn from_percent(percent: f64) -> Self {
        if percent >= 80.0 {
            UtilizationTier::Critical
        } else if percent >= 60.0 {
            UtilizationTier::Warning
        } else if percent >= 40.0 {
            UtilizationTier::Info
        } else {
            UtilizationTier::Healthy
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            UtilizationTier::Critical => "bg-danger",
            UtilizationTier::Warning => "bg-warning",
            UtilizationTier::Info => "bg-info",
            UtilizationTier::Healthy => "bg-success",
        }
    }
}

/// Over-committed resources report more than 100%; the bar never overflows its track.
pub fn bar_width(percent: f64) -> f64 {
    percent.min(100.0).max(0.0)
}

pub fn urgency_badge(urgency: &str) -> &'static str {
    match urgency {
        "Critical" => "danger",
        "High" => "warning",
        "Medium" => "info",
        "Low" => "success",
        _ => "secondary",
    }
}

pub fn status_badge(status: &str) -> &'static str {
    match status {
        "Pending" => "warning",
        "Approved" => "success",
        "Rejected" => "danger",
        "Fulfilled" => "info",
        _ => "secondary",
    }
}

pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Server timestamps are ISO-8601, sometimes naive, sometimes with an offset.
pub fn format_timestamp(raw: &str) -> String {
    const OUT: &str = "%Y-%m-%d %H:%M";

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format(OUT).to_string();
    }
    match NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        Ok(dt) => dt.format(OUT).to_string(),
        Err(_) => raw.to_string(),
    }
}
