use super::*;

#[test]
fn encodes_fields_in_order() {
    let data: FormData = [("name", "Ada Lovelace"), ("email", "ada@example.com")]
        .into_iter()
        .collect();
    assert_eq!(data.encode(), "name=Ada+Lovelace&email=ada%40example.com");
}

#[test]
fn escapes_reserved_and_non_ascii_bytes() {
    let mut data = FormData::new();
    data.append("message", "a&b=c\nd é");
    assert_eq!(data.encode(), "message=a%26b%3Dc%0Ad+%C3%A9");
}

#[test]
fn get_returns_first_value_and_clear_resets() {
    let mut data = FormData::new();
    data.append("tag", "one");
    data.append("tag", "two");
    assert_eq!(data.get("tag"), Some("one"));
    assert_eq!(data.get("missing"), None);
    assert_eq!(data.fields().len(), 2);

    data.clear();
    assert!(data.is_empty());
    assert_eq!(data.encode(), "");
}

#[test]
fn set_replaces_existing_value() {
    let mut data = FormData::new();
    data.set("email", "a@x.io");
    data.set("name", "Ada");
    data.set("email", "b@x.io");
    assert_eq!(data.encode(), "email=b%40x.io&name=Ada");
}
