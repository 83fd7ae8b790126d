use actdef::{classify_verb, parse, parse_field, Error, NameKind, Verb};

#[test]
fn test_full_name_splits() {
    let tree = parse("ping\norder.create\nuser.profile.update\nshop.cart.item.listAll\n").unwrap();

    let ping = tree.get_record("ping").unwrap();
    assert_eq!((ping.property_name(), ping.action_name()), (None, None));

    let order = tree.get_record("order.create").unwrap();
    assert_eq!(order.property_name(), None);
    assert_eq!(order.action_name(), Some("create"));

    let shop = tree.get_record("shop.cart.item.listAll").unwrap();
    assert_eq!(shop.property_name(), Some("cart.item"));
    assert_eq!(shop.verb(), Some(Verb::List));
}

#[test]
fn test_only_first_token_names_record() {
    let tree = parse("user.get ignored words // Fetch\n").unwrap();
    let record = tree.get_record("user.get").unwrap();
    assert_eq!(record.description(), Some("Fetch"));
}

#[test]
fn test_indentation_is_free_form() {
    let tree = parse("a\n\tx\n  @s\n        y\n").unwrap();
    let record = tree.get_record("a").unwrap();
    assert!(record.get_field("main", "x").is_some());
    assert!(record.get_field("s", "y").is_some());
}

#[test]
fn test_unindented_section_header() {
    let tree = parse("a\n@s\n    y\n").unwrap();
    assert!(tree.get_record("a").unwrap().get_field("s", "y").is_some());
}

#[test]
fn test_comment_and_blank_lines() {
    let text = "// header\n\na   // first\n    // a note\n\n    x\n";
    let tree = parse(text).unwrap();
    let record = tree.get_record("a").unwrap();
    assert_eq!(record.description(), Some("first"));
    assert_eq!(record.main_section().len(), 1);
}

#[test]
fn test_field_examples() {
    let field = parse_field(r#"[port="8080"] min="1" max="65535" // Port number"#).unwrap();
    assert_eq!(field.name(), "port");
    assert!(field.is_optional());
    assert_eq!(field.default_value(), Some("8080"));
    assert_eq!(field.get_attribute("min"), Some("1"));
    assert_eq!(field.get_attribute("max"), Some("65535"));
    assert_eq!(field.description(), Some("Port number"));

    let field = parse_field("name? // optional field").unwrap();
    assert!(field.is_optional());
    assert_eq!(field.default_value(), None);
    assert_eq!(field.attribute_count(), 0);
    assert_eq!(field.description(), Some("optional field"));
}

#[test]
fn test_escaped_values_are_decoded() {
    let field = parse_field(r#"f hint="a \"b\"\nc" path='C:\\tmp'"#).unwrap();
    assert_eq!(field.get_attribute("hint"), Some("a \"b\"\nc"));
    assert_eq!(field.get_attribute("path"), Some(r"C:\tmp"));

    // Bare values are literal.
    let field = parse_field(r"f path=C:\\tmp").unwrap();
    assert_eq!(field.get_attribute("path"), Some(r"C:\\tmp"));
}

#[test]
fn test_error_taxonomy() {
    let err = parse("a\n    [x=\"1\"\n").unwrap_err();
    assert!(matches!(err.root(), Error::Format { .. }));

    let err = parse("a\n    !!!\n").unwrap_err();
    assert!(matches!(err.root(), Error::Format { .. }));

    let err = parse("a\n  @s\n  @s\n").unwrap_err();
    assert!(matches!(
        err.root(),
        Error::DuplicateName {
            kind: NameKind::Section,
            ..
        }
    ));

    let err = parse("a.b\na.b\n").unwrap_err();
    assert!(matches!(
        err.root(),
        Error::DuplicateName {
            kind: NameKind::Record,
            ..
        }
    ));

    let err = parse("a..b\n").unwrap_err();
    assert!(matches!(
        err.root(),
        Error::Validation {
            kind: NameKind::Property,
            ..
        }
    ));
}

#[test]
fn test_verb_table() {
    let cases = [
        ("getUser", Some(Verb::Get)),
        ("setName", Some(Verb::Set)),
        ("addItem", Some(Verb::Add)),
        ("deleteUser", Some(Verb::Delete)),
        ("listAll", Some(Verb::List)),
        ("checkHealth", Some(Verb::Check)),
        ("frobnicate", Some(Verb::Check)),
        ("update", Some(Verb::Set)),
    ];
    for (name, verb) in cases {
        assert_eq!(classify_verb(Some(name)), verb, "{name}");
    }
    assert_eq!(classify_verb(None), None);
}
