// Host-side tests for the contact form validators.

use site_core::{
    is_valid_email, is_valid_phone, validate_field, validate_form, validate_required,
    ContactPayload, FormField,
};

fn filled() -> ContactPayload {
    ContactPayload {
        name: "Ada Lovelace".into(),
        email: "ada@example.com".into(),
        phone: "555-123-4567".into(),
        project_type: "website".into(),
        message: "Hello".into(),
    }
}

#[test]
fn email_accepts_plain_addresses() {
    for ok in [
        "a@b.co",
        "ada@example.com",
        "first.last@sub.domain.org",
        "x+tag@mail.io",
    ] {
        assert!(is_valid_email(ok), "expected {ok:?} to be valid");
    }
}

#[test]
fn email_rejects_whitespace_next_to_at() {
    for bad in ["ada @example.com", "ada@ example.com", "ada\t@example.com", "ada@\nexample.com"] {
        assert!(!is_valid_email(bad), "expected {bad:?} to be rejected");
    }
}

#[test]
fn byte_order_mark_counts_as_blank() {
    assert!(!is_valid_email("ada\u{FEFF}@example.com"));
    assert!(!is_valid_email("ada@example.com\u{FEFF}"));
    assert!(is_valid_phone("555\u{FEFF}123\u{FEFF}4567"));
    assert!(!validate_field(FormField::Name, "\u{FEFF} ", true));
    assert!(validate_field(FormField::Email, "\u{FEFF}ada@example.com", true));
}

#[test]
fn email_rejects_malformed() {
    for bad in ["", "@", "ada", "ada@example", "@example.com", "ada@@example.com", "ada@.com."] {
        assert!(!is_valid_email(bad), "expected {bad:?} to be rejected");
    }
}

#[test]
fn phone_accepts_ten_digits_with_common_separators() {
    for ok in [
        "5551234567",
        "555-123-4567",
        "555.123.4567",
        "555 123 4567",
        "(555)123-4567",
        "(555) 123 4567",
        "+5551234567",
        "555-123-456789",
    ] {
        assert!(is_valid_phone(ok), "expected {ok:?} to be valid");
    }
}

#[test]
fn phone_rejects_short_or_oddly_grouped_numbers() {
    for bad in ["", "555-1234", "555123456", "12-345-6789", "+44 20 7946", "555-123-4567890", "abc-def-ghij"] {
        assert!(!is_valid_phone(bad), "expected {bad:?} to be rejected");
    }
}

#[test]
fn required_check_trims_values() {
    let mut p = filled();
    assert!(validate_required(&FormField::REQUIRED, &p));
    p.name = "   ".into();
    assert!(!validate_required(&FormField::REQUIRED, &p));
    // Only the listed fields matter
    assert!(validate_required(&[FormField::Email, FormField::Phone], &p));
    p.message.clear();
    assert!(validate_required(&[FormField::Email], &p));
}

#[test]
fn missing_phone_flags_only_phone() {
    let mut p = filled();
    p.phone.clear();
    let invalid = validate_form(&p);
    assert_eq!(invalid.as_slice(), &[FormField::Phone]);
}

#[test]
fn bad_formats_are_reported_once_in_form_order() {
    let mut p = filled();
    p.email = "not-an-email".into();
    p.phone = "12".into();
    p.name.clear();
    let invalid = validate_form(&p);
    assert_eq!(
        invalid.as_slice(),
        &[FormField::Name, FormField::Email, FormField::Phone]
    );
}

#[test]
fn blank_email_is_flagged_once() {
    let mut p = filled();
    p.email = "  ".into();
    assert_eq!(validate_form(&p).as_slice(), &[FormField::Email]);
}

#[test]
fn message_is_never_required() {
    let mut p = filled();
    p.message.clear();
    assert!(validate_form(&p).is_empty());
}

#[test]
fn single_field_check_follows_required_and_format() {
    assert!(!validate_field(FormField::Name, "  ", true));
    assert!(validate_field(FormField::Message, "", false));
    assert!(validate_field(FormField::Email, " ada@example.com ", true));
    assert!(!validate_field(FormField::Email, "ada@", true));
    assert!(!validate_field(FormField::Phone, "123", false));
    assert!(validate_field(FormField::Phone, "", false));
}

#[test]
fn payload_from_pairs_maps_form_names() {
    let p = ContactPayload::from_pairs([
        ("name", "Ada"),
        ("email", "ada@example.com"),
        ("projectType", "ecommerce"),
        ("unknown", "ignored"),
    ]);
    assert_eq!(p.name, "Ada");
    assert_eq!(p.get(FormField::ProjectType), "ecommerce");
    assert!(p.phone.is_empty());
}

#[test]
fn payload_serializes_with_form_names() {
    let json = serde_json::to_value(filled()).unwrap();
    assert_eq!(json["projectType"], "website");
    assert_eq!(json["phone"], "555-123-4567");
    assert!(json.get("project_type").is_none());
}
