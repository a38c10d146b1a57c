//! Field validators for the contact form.
//!
//! All predicates are pure. Marking inputs as invalid is the caller's job;
//! `validate_form` only reports which fields failed.

use crate::payload::{ContactPayload, FormField};
use regex::Regex;
use smallvec::SmallVec;
use std::sync::LazyLock;

/// Fields that failed a check, in form order, without duplicates.
pub type InvalidFields = SmallVec<[FormField; 4]>;

// The byte-order mark counts as blank in browsers but is not in Unicode
// `White_Space`, so it is listed next to `\s` explicitly.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$").expect("email pattern compiles")
});

// Applied after whitespace has been stripped, so `\s` in the separator
// class never matches in practice.
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+?\(?[0-9]{3}\)?[-\s.]?[0-9]{3}[-\s.]?[0-9]{4,6}$").expect("phone pattern compiles")
});

#[inline]
fn is_blank_char(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

#[inline]
fn trim_blank(text: &str) -> &str {
    text.trim_matches(is_blank_char)
}

#[inline]
pub fn is_valid_email(text: &str) -> bool {
    EMAIL_RE.is_match(text)
}

/// Loose phone check: optional `+`, optional `(ddd)`, then 3-3-4..6 digits
/// with optional `-`/`.` separators. Accepts many numbers that do not exist
/// and rejects international groupings other than 3-3-4.
pub fn is_valid_phone(text: &str) -> bool {
    let compact: String = text.chars().filter(|c| !is_blank_char(*c)).collect();
    PHONE_RE.is_match(&compact)
}

/// True iff every listed field has a non-blank value.
pub fn validate_required(fields: &[FormField], values: &ContactPayload) -> bool {
    fields.iter().all(|f| !trim_blank(values.get(*f)).is_empty())
}

/// Check a single input the way inline feedback does on blur.
pub fn validate_field(field: FormField, value: &str, required: bool) -> bool {
    let value = trim_blank(value);
    if value.is_empty() {
        return !required;
    }
    match field {
        FormField::Email => is_valid_email(value),
        FormField::Phone => is_valid_phone(value),
        _ => true,
    }
}

/// Full form check: required fields first, then email and phone format for
/// whatever was filled in.
pub fn validate_form(payload: &ContactPayload) -> InvalidFields {
    let mut invalid = InvalidFields::new();
    for field in FormField::REQUIRED {
        if trim_blank(payload.get(field)).is_empty() {
            invalid.push(field);
        }
    }
    let email = payload.get(FormField::Email);
    if !email.is_empty() && !is_valid_email(email) && !invalid.contains(&FormField::Email) {
        invalid.push(FormField::Email);
    }
    let phone = payload.get(FormField::Phone);
    if !phone.is_empty() && !is_valid_phone(phone) && !invalid.contains(&FormField::Phone) {
        invalid.push(FormField::Phone);
    }
    invalid.sort_by_key(|f| FormField::ALL.iter().position(|a| a == f));
    invalid
}
