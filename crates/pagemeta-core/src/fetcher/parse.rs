//! Parse raw response header lines into the status and `Location` of one response.

/// Status and redirect target of the last response block seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ResponseHead {
    /// Status code from the `HTTP/x y` line, if one was seen.
    pub status: Option<u32>,
    /// `Location` value if present.
    pub location: Option<String>,
}

/// Parse collected header lines into a ResponseHead.
///
/// A new status line starts a fresh block (interim `100 Continue`, proxy
/// `CONNECT` replies), so only the final response counts.
pub(crate) fn parse_headers(lines: &[String]) -> ResponseHead {
    let mut head = ResponseHead::default();

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with("HTTP/") {
            head = ResponseHead {
                status: parse_status_line(line),
                location: None,
            };
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            let value = value.trim();
            if name.trim().eq_ignore_ascii_case("location") && !value.is_empty() {
                head.location = Some(value.to_string());
            }
        }
    }

    head
}

fn parse_status_line(line: &str) -> Option<u32> {
    line.split_whitespace().nth(1)?.parse().ok()
}
