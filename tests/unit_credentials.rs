use coursealloc::utils::credentials::{generate_initial_password, is_email_valid};

#[test]
fn accepts_ordinary_addresses() {
    assert!(is_email_valid("ada@example.com"));
    assert!(is_email_valid("first.last+tag@sub.example.co"));
    assert!(is_email_valid("user_100%legit@example-site.org"));
}

#[test]
fn rejects_malformed_addresses() {
    assert!(!is_email_valid(""));
    assert!(!is_email_valid("no-at-sign.example.com"));
    assert!(!is_email_valid("missing@tld"));
    assert!(!is_email_valid("one@letter.t"));
    assert!(!is_email_valid("spaces in@example.com"));
}

#[test]
fn initial_password_uses_the_name_initials() {
    let password = generate_initial_password("Ada Lovelace").unwrap();

    assert!(password.starts_with("AL-"));
    assert_eq!(password.len(), 11);
    assert!(
        password[3..]
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    );
}

#[test]
fn extra_name_tokens_beyond_the_first_two_are_ignored() {
    let password = generate_initial_password("Grace Brewster Murray Hopper").unwrap();
    assert!(password.starts_with("GB-"));
}

#[test]
fn single_token_names_cannot_derive_a_password() {
    assert!(generate_initial_password("Plato").is_none());
    assert!(generate_initial_password("").is_none());
    assert!(generate_initial_password("   ").is_none());
}

#[test]
fn passwords_are_randomized() {
    let first = generate_initial_password("Ada Lovelace").unwrap();
    let second = generate_initial_password("Ada Lovelace").unwrap();
    assert_ne!(first, second);
}
