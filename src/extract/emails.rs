use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

static EMAIL_SCAN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")
        .expect("hardcoded regex pattern is valid")
});

static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("hardcoded regex pattern is valid")
});

/// Extracts email addresses from raw page text
///
/// Two stages: a scan pattern picks up `local@domain.tld`-shaped tokens
/// anywhere in the text, then each candidate must pass the stricter anchored
/// shape check. Survivors are lower-cased, so duplicates that differ only in
/// case collapse to one entry. Cross-page duplicates are the email index's
/// concern, not this function's.
///
/// # Examples
///
/// ```
/// use mailsift::extract_emails;
///
/// let found = extract_emails("contact a@b.co or A@B.CO");
/// assert_eq!(found.len(), 1);
/// assert!(found.contains("a@b.co"));
/// ```
pub fn extract_emails(text: &str) -> BTreeSet<String> {
    EMAIL_SCAN
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|candidate| EMAIL_SHAPE.is_match(candidate))
        .map(|candidate| candidate.to_lowercase())
        .collect()
}
