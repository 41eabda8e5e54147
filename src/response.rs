//! Decoding of raw command output.

use serde_json::Value;

/// Extract the payload line from `coap-client` output.
///
/// The client interleaves its own diagnostics (message headers, DTLS noise)
/// with the response body; the body is the last remaining line.
///
/// # Examples
///
/// ```
/// use tradfri_rs::parse_result;
///
/// let output = "v:1 t:CON c:GET i:7d2a {} [ ]\ndecrypt_verify(): found 24 bytes cleartext\n[65537,65538]\n";
/// assert_eq!(parse_result(output), Some("[65537,65538]"));
/// assert_eq!(parse_result("\n\n"), None);
/// ```
pub fn parse_result(output: &str) -> Option<&str> {
    output
        .lines()
        .map(str::trim)
        .rev()
        .find(|line| !line.is_empty() && !is_diagnostic(line))
}

/// Decode a response body as JSON, falling back to the raw text.
///
/// The hub sometimes answers with bare scalars that are not valid JSON.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use tradfri_rs::decode;
///
/// assert_eq!(decode(r#"{"9003": 1}"#), json!({"9003": 1}));
/// assert_eq!(decode("4.01 Unauthorized"), json!("4.01 Unauthorized"));
/// ```
pub fn decode(body: &str) -> Value {
    serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()))
}

/// Severity tags libcoap prints after the timestamp of a log line.
const LOG_LEVELS: &[&str] = &[
    "EMRG", "ALRT", "CRIT", "ERR", "WARN", "NOTE", "INFO", "DEBG", "OSC",
];

fn is_diagnostic(line: &str) -> bool {
    line.starts_with("v:1 ") || line.starts_with("decrypt_verify") || is_log_line(line)
}

/// Matches libcoap's `Mon DD HH:MM:SS LEVEL message` log format.
fn is_log_line(line: &str) -> bool {
    let mut words = line.split_whitespace();
    let (Some(month), Some(day), Some(time), Some(level)) =
        (words.next(), words.next(), words.next(), words.next())
    else {
        return false;
    };

    month.len() == 3
        && month.chars().all(|c| c.is_ascii_alphabetic())
        && day.parse::<u8>().is_ok()
        && time.len() == 8
        && time.split(':').count() == 3
        && time.split(':').all(|part| part.parse::<u8>().is_ok())
        && LOG_LEVELS.contains(&level)
}

/// Read a list of integer ids out of a decoded listing response.
pub(crate) fn id_list(value: &Value) -> Option<Vec<u64>> {
    value
        .as_array()?
        .iter()
        .map(Value::as_u64)
        .collect::<Option<Vec<_>>>()
}
