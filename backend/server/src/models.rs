use serde::Deserialize;

/// Query parameters of `/api/confirm`. Both arrive as strings; `name` is
/// checked by the handler and `peopleCount` goes through
/// [`people_count_or_default`].
#[derive(Deserialize)]
pub struct ConfirmParams {
    pub name: Option<String>,

    #[serde(rename = "peopleCount")]
    pub people_count: Option<String>,
}

/// The write path only requires "parseable integer": anything absent or
/// unparseable falls back to a party of one. Range checks (1-20 in the form
/// widget) are the client's business, not ours.
pub fn people_count_or_default(raw: Option<&str>) -> i32 {
    raw.and_then(|v| v.parse().ok()).unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::people_count_or_default;

    #[test]
    fn absent_defaults_to_one() {
        assert_eq!(people_count_or_default(None), 1);
    }

    #[test]
    fn unparseable_defaults_to_one() {
        assert_eq!(people_count_or_default(Some("")), 1);
        assert_eq!(people_count_or_default(Some("abc")), 1);
        assert_eq!(people_count_or_default(Some("2.5")), 1);
        assert_eq!(people_count_or_default(Some("12abc")), 1);
    }

    #[test]
    fn integers_pass_through() {
        assert_eq!(people_count_or_default(Some("5")), 5);
        assert_eq!(people_count_or_default(Some("0")), 0);
        // Negative counts are stored as-is; only the form enforces >= 0.
        assert_eq!(people_count_or_default(Some("-3")), -3);
    }
}
