use campus_core::model::{AccessLog, SerialKey, SerialKeyStatus};

use crate::vm::time_fmt::format_datetime;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SerialKeyRowVm {
    pub code: String,
    pub course_title: String,
    pub status_label: &'static str,
    pub status_class: &'static str,
    pub redeemed_by: String,
}

impl From<&SerialKey> for SerialKeyRowVm {
    fn from(key: &SerialKey) -> Self {
        Self {
            code: key.code.clone(),
            course_title: key.course_title.clone(),
            status_label: key.status.label(),
            status_class: status_class(key.status),
            redeemed_by: key.redeemed_by.clone().unwrap_or_else(|| "-".to_string()),
        }
    }
}

fn status_class(status: SerialKeyStatus) -> &'static str {
    match status {
        SerialKeyStatus::Available => "badge badge-available",
        SerialKeyStatus::Redeemed => "badge badge-redeemed",
        SerialKeyStatus::Revoked => "badge badge-revoked",
    }
}

#[must_use]
pub fn map_serial_key_rows(keys: &[SerialKey]) -> Vec<SerialKeyRowVm> {
    keys.iter().map(SerialKeyRowVm::from).collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessLogRowVm {
    pub user_email: String,
    pub action: String,
    pub occurred_at_str: String,
}

impl From<&AccessLog> for AccessLogRowVm {
    fn from(log: &AccessLog) -> Self {
        Self {
            user_email: log.user_email.clone(),
            action: log.action.clone(),
            occurred_at_str: format_datetime(log.occurred_at),
        }
    }
}

#[must_use]
pub fn map_access_log_rows(logs: &[AccessLog]) -> Vec<AccessLogRowVm> {
    logs.iter().map(AccessLogRowVm::from).collect()
}

/// Value for the status `<select>`; the empty string means "all".
#[must_use]
pub fn status_filter_value(status: Option<SerialKeyStatus>) -> &'static str {
    status.map_or("", |status| match status {
        SerialKeyStatus::Available => "available",
        SerialKeyStatus::Redeemed => "redeemed",
        SerialKeyStatus::Revoked => "revoked",
    })
}

#[must_use]
pub fn parse_status_filter(value: &str) -> Option<SerialKeyStatus> {
    SerialKeyStatus::ALL
        .into_iter()
        .find(|status| status_filter_value(Some(*status)) == value)
}
