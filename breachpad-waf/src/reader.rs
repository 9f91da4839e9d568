use crate::entry::WafLogEntry;
use crate::parser::WafLogParser;
use breachpad_core::BreachpadError;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Read the WAF log at `path` and extract denial records, most recent first.
///
/// The log is written by an external filtering proxy and may not exist yet:
/// a missing file means "no events so far" and yields an empty `Ok`. Every
/// other read failure (permissions, I/O) surfaces as
/// [`BreachpadError::WafLogRead`] — it must never be mistaken for an empty
/// feed.
pub fn read_waf_log(path: &Path, parser: &WafLogParser) -> Result<Vec<WafLogEntry>, BreachpadError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "WAF log not present yet");
            return Ok(Vec::new());
        }
        Err(e) => return Err(BreachpadError::WafLogRead(e)),
    };

    Ok(parser.parse(&content))
}
