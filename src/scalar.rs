use url::Url;

/// Pass a non-empty string through, absent otherwise.
///
/// # Examples
/// ```
/// use cfn_overrides::parse_string;
///
/// assert_eq!(parse_string("stack-name"), Some("stack-name"));
/// assert_eq!(parse_string(""), None);
/// ```
pub fn parse_string(raw: &str) -> Option<&str> {
    if raw.is_empty() {
        None
    } else {
        Some(raw)
    }
}

/// Split a comma-separated ARN list, segments untouched.
///
/// # Examples
/// ```
/// use cfn_overrides::parse_arns;
///
/// let arns = parse_arns("arn:aws:iam::1:role/a,arn:aws:iam::2:role/b");
/// assert_eq!(arns.unwrap().len(), 2);
/// assert_eq!(parse_arns(""), None);
/// ```
pub fn parse_arns(raw: &str) -> Option<Vec<&str>> {
    if raw.is_empty() {
        return None;
    }
    Some(raw.split(',').collect())
}

/// Split a comma-separated capability list, trimming each segment.
///
/// # Examples
/// ```
/// use cfn_overrides::parse_capabilities;
///
/// let caps = parse_capabilities("CAPABILITY_IAM, CAPABILITY_NAMED_IAM");
/// assert_eq!(caps, Some(vec!["CAPABILITY_IAM", "CAPABILITY_NAMED_IAM"]));
/// assert_eq!(parse_capabilities(""), None);
/// ```
pub fn parse_capabilities(raw: &str) -> Option<Vec<&str>> {
    if raw.is_empty() {
        return None;
    }
    Some(raw.split(',').map(str::trim).collect())
}

/// Extract a leading integer, ignoring trailing non-digit characters.
///
/// # Examples
/// ```
/// use cfn_overrides::parse_number;
///
/// assert_eq!(parse_number("10"), Some(10));
/// assert_eq!(parse_number("12abc"), Some(12));
/// assert_eq!(parse_number("abc"), None);
/// ```
pub fn parse_number(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let bytes = trimmed.as_bytes();
    let start = match bytes.first() {
        Some(b'+') | Some(b'-') => 1,
        _ => 0,
    };
    let end = bytes[start..]
        .iter()
        .position(|b| !b.is_ascii_digit())
        .map_or(bytes.len(), |pos| start + pos);
    if end == start {
        return None;
    }
    trimmed[..end].parse().ok()
}

/// True for absolute `https` URLs, which a template reference must be to
/// count as already remote.
///
/// # Examples
/// ```
/// use cfn_overrides::is_url;
///
/// assert!(is_url("https://bucket.s3.amazonaws.com/template.yml"));
/// assert!(!is_url("template.yml"));
/// ```
pub fn is_url(raw: &str) -> bool {
    Url::parse(raw).is_ok_and(|url| url.scheme() == "https")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rstest::rstest]
    fn test_parse_string() {
        assert_eq!(parse_string("value"), Some("value"));
        assert_eq!(parse_string(" "), Some(" "));
        assert_eq!(parse_string(""), None);
    }

    #[rstest::rstest]
    fn test_parse_arns_keeps_segments_verbatim() {
        assert_eq!(
            parse_arns("arn:a, arn:b"),
            Some(vec!["arn:a", " arn:b"])
        );
        assert_eq!(parse_arns("a,,b"), Some(vec!["a", "", "b"]));
        assert_eq!(parse_arns(""), None);
    }

    #[rstest::rstest]
    fn test_parse_capabilities_trims_segments() {
        assert_eq!(
            parse_capabilities(" CAPABILITY_IAM ,CAPABILITY_AUTO_EXPAND"),
            Some(vec!["CAPABILITY_IAM", "CAPABILITY_AUTO_EXPAND"])
        );
        assert_eq!(parse_capabilities(""), None);
    }

    #[rstest::rstest]
    fn test_parse_number_lenient_extraction() {
        assert_eq!(parse_number("10"), Some(10));
        assert_eq!(parse_number("12abc"), Some(12));
        assert_eq!(parse_number("  42"), Some(42));
        assert_eq!(parse_number("-5x"), Some(-5));
        assert_eq!(parse_number("+7"), Some(7));
        assert_eq!(parse_number("0"), Some(0));

        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("+"), None);
        assert_eq!(parse_number("-"), None);
        assert_eq!(parse_number("x12"), None);
        assert_eq!(parse_number("99999999999999999999"), None);
    }

    #[rstest::rstest]
    fn test_is_url_requires_absolute_https() {
        assert!(is_url("https://example.com/stack.yml"));
        assert!(!is_url("http://example.com/stack.yml"));
        assert!(!is_url("s3://bucket/stack.yml"));
        assert!(!is_url("./stack.yml"));
        assert!(!is_url(""));
    }
}
