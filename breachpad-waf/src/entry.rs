use serde::{Deserialize, Serialize};

/// Sentinel for a field whose pattern matched nowhere in the line.
pub const FIELD_MISSING: &str = "N/A";

/// Sentinel for an absent rule message.
pub const NO_MESSAGE: &str = "No message found";

/// One access-denial decision extracted from the WAF error log.
///
/// Every field is always present; unextractable fields carry their sentinel
/// value rather than being omitted, so the dashboard never has to
/// null-check individual columns. All fields are strings — the wire format
/// emits strings even for the numeric-looking ones (`ruleId`, `severity`,
/// `status`), and the dashboard renders them verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WafLogEntry {
    /// `YYYY/MM/DD HH:MM:SS` as written at the start of the line.
    pub timestamp: String,
    /// Identifier of the triggered filtering rule.
    pub rule_id: String,
    /// Free-text rule description.
    pub message: String,
    pub severity: String,
    /// Dotted-quad source address.
    pub client_ip: String,
    /// Requested resource path.
    pub uri: String,
    /// HTTP verb from the request line.
    pub method: String,
    /// Denial status code.
    pub status: String,
}
