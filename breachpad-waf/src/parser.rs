use crate::entry::{FIELD_MISSING, NO_MESSAGE, WafLogEntry};
use regex::Regex;

/// Marker substring the filtering engine writes on every blocked request.
/// Lines without it never produce a record.
pub const DENIAL_MARKER: &str = "ModSecurity: Access denied";

/// Extracts structured [`WafLogEntry`] records from raw error-log text.
///
/// Each field has its own pattern matched independently against the line, so
/// the parser tolerates arbitrary surrounding text, reordered fields, and
/// partially-written lines — one extractor failing never blanks the others.
pub struct WafLogParser {
    timestamp: Regex,
    rule_id: Regex,
    message: Regex,
    severity: Regex,
    client_ip: Regex,
    uri: Regex,
    method: Regex,
    status: Regex,
}

impl WafLogParser {
    pub fn new() -> Self {
        Self {
            timestamp: Regex::new(r"^(\d{4}/\d{2}/\d{2} \d{2}:\d{2}:\d{2})").unwrap(),
            rule_id: Regex::new(r#" \[id "(\d+)"\]"#).unwrap(),
            // Non-greedy: must stop at the first closing quote
            message: Regex::new(r#" \[msg "(.*?)"\]"#).unwrap(),
            severity: Regex::new(r#"\[severity "(\d+)"\]"#).unwrap(),
            client_ip: Regex::new(r"\[client ([\d\.]+)\]").unwrap(),
            uri: Regex::new(r#"\[uri "(.*?)"\]"#).unwrap(),
            method: Regex::new(r#"request: "(\w+)"#).unwrap(),
            status: Regex::new(r"Access denied with code (\d+)").unwrap(),
        }
    }

    /// Parse a single log line into a record.
    ///
    /// Returns `None` for lines that do not carry the denial marker. For
    /// qualifying lines a full record is always produced, with sentinels
    /// substituted for any field whose pattern did not match.
    pub fn parse_line(&self, line: &str) -> Option<WafLogEntry> {
        if !line.contains(DENIAL_MARKER) {
            return None;
        }

        Some(WafLogEntry {
            timestamp: capture(&self.timestamp, line).unwrap_or_else(|| FIELD_MISSING.into()),
            rule_id: capture(&self.rule_id, line).unwrap_or_else(|| FIELD_MISSING.into()),
            message: capture(&self.message, line).unwrap_or_else(|| NO_MESSAGE.into()),
            severity: capture(&self.severity, line).unwrap_or_else(|| FIELD_MISSING.into()),
            client_ip: capture(&self.client_ip, line).unwrap_or_else(|| FIELD_MISSING.into()),
            uri: capture(&self.uri, line).unwrap_or_else(|| FIELD_MISSING.into()),
            method: capture(&self.method, line).unwrap_or_else(|| FIELD_MISSING.into()),
            status: capture(&self.status, line).unwrap_or_else(|| FIELD_MISSING.into()),
        })
    }

    /// Parse the full log content into records, most recent first.
    ///
    /// The file is append-only, so physical order is oldest-to-newest; the
    /// dashboard wants the latest decision at the top.
    pub fn parse(&self, content: &str) -> Vec<WafLogEntry> {
        let mut entries: Vec<WafLogEntry> = content
            .lines()
            .filter_map(|line| self.parse_line(line))
            .collect();
        entries.reverse();
        entries
    }
}

impl Default for WafLogParser {
    fn default() -> Self {
        Self::new()
    }
}

/// First capture group of `re` in `line`, if any.
fn capture(re: &Regex, line: &str) -> Option<String> {
    re.captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

// ─────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> WafLogParser {
        WafLogParser::new()
    }

    /// A realistic ModSecurity denial line with every field present.
    const FULL_LINE: &str = r#"2024/01/15 10:23:01 [error] 31#31: *1 [client 203.0.113.5] ModSecurity: Access denied with code 403 (phase 2). Matched "Operator `Rx' with parameter" at ARGS:q. [file "/etc/modsecurity.d/rules.conf"] [line "42"] [id "920100"] [msg "Invalid request"] [data "Matched Data: <script> found"] [severity "2"] [uri "/search"], client: 203.0.113.5, server: _, request: "GET /search?q=<script> HTTP/1.1", host: "localhost""#;

    // ── Gate ─────────────────────────────────────────────────────

    #[test]
    fn line_without_marker_yields_no_record() {
        let p = parser();
        assert!(p.parse_line("2024/01/15 10:23:01 [notice] worker process started").is_none());
    }

    #[test]
    fn file_of_only_unmarked_lines_yields_empty_sequence() {
        let p = parser();
        let content = "2024/01/15 09:00:00 [notice] start\n\
                       2024/01/15 09:00:01 [error] upstream timed out\n\
                       plain noise line\n";
        assert!(p.parse(content).is_empty());
    }

    #[test]
    fn marker_anywhere_in_line_qualifies() {
        let p = parser();
        let entry = p.parse_line("prefix junk ModSecurity: Access denied trailing junk").unwrap();
        // No extractable fields — every one degrades to its sentinel
        assert_eq!(entry.timestamp, FIELD_MISSING);
        assert_eq!(entry.message, NO_MESSAGE);
    }

    // ── Field extraction ─────────────────────────────────────────

    #[test]
    fn full_line_extracts_every_field() {
        let p = parser();
        let entry = p.parse_line(FULL_LINE).unwrap();
        assert_eq!(entry.timestamp, "2024/01/15 10:23:01");
        assert_eq!(entry.rule_id, "920100");
        assert_eq!(entry.message, "Invalid request");
        assert_eq!(entry.severity, "2");
        assert_eq!(entry.client_ip, "203.0.113.5");
        assert_eq!(entry.uri, "/search");
        assert_eq!(entry.method, "GET");
        assert_eq!(entry.status, "403");
    }

    #[test]
    fn missing_fields_degrade_to_sentinels_independently() {
        let p = parser();
        // Marker + rule id + client only; everything else absent
        let line = r#"ModSecurity: Access denied with code 406 [id "911100"] [client 10.0.0.9]"#;
        let entry = p.parse_line(line).unwrap();
        assert_eq!(entry.rule_id, "911100");
        assert_eq!(entry.client_ip, "10.0.0.9");
        assert_eq!(entry.status, "406");
        assert_eq!(entry.timestamp, FIELD_MISSING);
        assert_eq!(entry.message, NO_MESSAGE);
        assert_eq!(entry.severity, FIELD_MISSING);
        assert_eq!(entry.uri, FIELD_MISSING);
        assert_eq!(entry.method, FIELD_MISSING);
    }

    #[test]
    fn timestamp_must_be_anchored_at_line_start() {
        let p = parser();
        let line = "noise 2024/01/15 10:23:01 ModSecurity: Access denied with code 403";
        let entry = p.parse_line(line).unwrap();
        assert_eq!(entry.timestamp, FIELD_MISSING);
    }

    #[test]
    fn non_numeric_rule_id_is_not_captured() {
        let p = parser();
        let line = r#"ModSecurity: Access denied with code 403 [id "abc"]"#;
        let entry = p.parse_line(line).unwrap();
        assert_eq!(entry.rule_id, FIELD_MISSING);
    }

    #[test]
    fn message_capture_stops_at_first_closing_quote() {
        let p = parser();
        let line = r#"ModSecurity: Access denied with code 403 [msg "SQLi probe"] [data "' OR '1'='1"]"#;
        let entry = p.parse_line(line).unwrap();
        assert_eq!(entry.message, "SQLi probe");
    }

    #[test]
    fn uri_capture_stops_at_first_closing_quote() {
        let p = parser();
        let line = r#"ModSecurity: Access denied with code 403 [uri "/a"] [ref "o0,10"]"#;
        let entry = p.parse_line(line).unwrap();
        assert_eq!(entry.uri, "/a");
    }

    #[test]
    fn method_is_first_word_of_request_line() {
        let p = parser();
        let line = r#"ModSecurity: Access denied with code 403, request: "POST /login HTTP/1.1""#;
        let entry = p.parse_line(line).unwrap();
        assert_eq!(entry.method, "POST");
    }

    #[test]
    fn field_order_within_line_is_not_fixed() {
        let p = parser();
        let line = r#"[uri "/x"] [severity "3"] [client 192.0.2.1] [msg "Scanner"] ModSecurity: Access denied with code 401 [id "913100"]"#;
        let entry = p.parse_line(line).unwrap();
        assert_eq!(entry.uri, "/x");
        assert_eq!(entry.severity, "3");
        assert_eq!(entry.client_ip, "192.0.2.1");
        assert_eq!(entry.message, "Scanner");
        assert_eq!(entry.rule_id, "913100");
        assert_eq!(entry.status, "401");
    }

    // ── Ordering ─────────────────────────────────────────────────

    #[test]
    fn output_is_strictly_reversed_newest_first() {
        let p = parser();
        let content = r#"ModSecurity: Access denied with code 403 [id "1"]
not a denial line
ModSecurity: Access denied with code 403 [id "2"]
ModSecurity: Access denied with code 403 [id "3"]
"#;
        let entries = p.parse(content);
        let ids: Vec<&str> = entries.iter().map(|e| e.rule_id.as_str()).collect();
        assert_eq!(ids, ["3", "2", "1"]);
    }

    #[test]
    fn empty_content_yields_empty_sequence() {
        assert!(parser().parse("").is_empty());
    }

    // ── Round-trip ───────────────────────────────────────────────

    #[test]
    fn synthetic_line_round_trips_every_field() {
        let p = parser();
        let line = format!(
            r#"{ts} [error] 7#7: *9 [client {ip}] ModSecurity: Access denied with code {status} (phase 2). [id "{id}"] [msg "{msg}"] [severity "{sev}"] [uri "{uri}"], request: "{method} {uri} HTTP/1.1""#,
            ts = "2025/03/02 08:15:59",
            ip = "198.51.100.23",
            status = "406",
            id = "941160",
            msg = "NoScript XSS InjectionChecker",
            sev = "4",
            uri = "/posts",
            method = "PUT",
        );
        let entry = p.parse_line(&line).unwrap();
        assert_eq!(entry.timestamp, "2025/03/02 08:15:59");
        assert_eq!(entry.rule_id, "941160");
        assert_eq!(entry.message, "NoScript XSS InjectionChecker");
        assert_eq!(entry.severity, "4");
        assert_eq!(entry.client_ip, "198.51.100.23");
        assert_eq!(entry.uri, "/posts");
        assert_eq!(entry.method, "PUT");
        assert_eq!(entry.status, "406");
    }

    #[test]
    fn documented_scenario_line_parses_exactly() {
        let p = parser();
        let line = r#"2024/01/15 10:23:01 [id "920100"] [msg "Invalid request"] [severity "2"] [client 203.0.113.5] ModSecurity: Access denied with code 403, request: "GET /search?q=<script> HTTP/1.1" [uri "/search"]"#;
        let entry = p.parse_line(line).unwrap();
        assert_eq!(
            entry,
            WafLogEntry {
                timestamp: "2024/01/15 10:23:01".into(),
                rule_id: "920100".into(),
                message: "Invalid request".into(),
                severity: "2".into(),
                client_ip: "203.0.113.5".into(),
                uri: "/search".into(),
                method: "GET".into(),
                status: "403".into(),
            }
        );
    }
}
