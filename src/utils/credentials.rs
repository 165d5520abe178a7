use std::sync::LazyLock;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rand::RngCore;
use regex::Regex;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email regex is valid")
});

/// Syntactic email check: `local@domain` with a dot in the domain and a
/// TLD of at least two letters. No deliverability check.
pub fn is_email_valid(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Derives an initial password from the first two whitespace-separated name
/// tokens: their initials, a dash, then 8 random URL-safe base64 characters
/// (e.g. `AL-xK3p9Qz1`).
///
/// Returns `None` when the full name has fewer than two tokens; callers
/// treat that as a validation failure of the name, not an internal error.
pub fn generate_initial_password(fullname: &str) -> Option<String> {
    let mut tokens = fullname.split_whitespace();
    let first = tokens.next()?.chars().next()?;
    let second = tokens.next()?.chars().next()?;

    let mut bytes = [0u8; 6];
    rand::thread_rng().fill_bytes(&mut bytes);
    let suffix = URL_SAFE_NO_PAD.encode(bytes);

    Some(format!("{first}{second}-{suffix}"))
}
