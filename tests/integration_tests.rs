use actdef::{parse, Field, Record, SerializeOptions, Tree, Verb};

const ACCOUNTS: &str = "\
// Account management
user.profile.update    // Updates a profile
    username    maxLength=\"32\"
    password?
    @audit
    [reason=\"manual\"] // Why the change was made

user.list    // All users
    [page=\"1\"] min=1
    [pageSize=\"20\"] min=1 max=100

user.delete
    id required

order.create
";

#[test]
fn test_parse_document() {
    let tree = parse(ACCOUNTS).unwrap();
    let names: Vec<_> = tree.list_record_names().collect();
    assert_eq!(
        names,
        vec!["user.profile.update", "user.list", "user.delete", "order.create"]
    );

    let verbs: Vec<_> = tree.list_records().map(Record::verb).collect();
    assert_eq!(
        verbs,
        vec![
            Some(Verb::Set),
            Some(Verb::List),
            Some(Verb::Delete),
            Some(Verb::Add)
        ]
    );
}

#[test]
fn test_end_to_end_example() {
    let tree = parse(ACCOUNTS).unwrap();
    let record = tree.get_record("user.profile.update").unwrap();

    assert_eq!(record.entity_name(), "user");
    assert_eq!(record.property_name(), Some("profile"));
    assert_eq!(record.action_name(), Some("update"));
    assert_eq!(record.description(), Some("Updates a profile"));

    let main = record.main_section();
    assert_eq!(main.len(), 2);
    assert_eq!(
        main.get_field("username").unwrap().get_attribute("maxLength"),
        Some("32")
    );
    assert!(main.get_field("password").unwrap().is_optional());

    let reason = record.get_field("audit", "reason").unwrap();
    assert_eq!(reason.default_value(), Some("manual"));
    assert_eq!(reason.description(), Some("Why the change was made"));
}

#[test]
fn test_structural_round_trip() {
    let tree = parse(ACCOUNTS).unwrap();
    let text = tree.serialize();
    println!("Serialized:\n{}", text);

    let back = parse(&text).unwrap();
    assert_eq!(back, tree);
    // Serializing again is a fixed point.
    assert_eq!(back.serialize(), text);
}

#[test]
fn test_round_trip_with_quotes_and_newlines() {
    let mut tree = Tree::new();
    let record = tree
        .add_record("note", None, Some("add"), Some("Adds a \"note\"\nwith two lines"))
        .unwrap();
    record
        .add_field(
            Field::optional("body", Some("say \"hi\" & it's\nfine"))
                .unwrap()
                .with_attribute("pattern", r"^\w+$")
                .with_description("Text & \"quotes\""),
        )
        .unwrap();

    let text = tree.serialize();
    assert!(!text.contains("\nwith"));
    let back = parse(&text).unwrap();
    assert_eq!(back, tree);
}

#[test]
fn test_build_then_parse() {
    let mut tree = Tree::new();
    tree.add_record("ping", None, None, None).unwrap();
    let record = tree
        .add_record("config", Some("server.http"), Some("setPort"), None)
        .unwrap();
    record
        .add_field(
            Field::optional("port", Some("8080"))
                .unwrap()
                .with_attribute("min", 1)
                .with_attribute("max", 65535)
                .with_description("Port number"),
        )
        .unwrap();

    let text = tree.serialize();
    assert_eq!(
        text,
        "ping\n\nconfig.server.http.setPort\n    [port=\"8080\"] min=\"1\" max=\"65535\" // Port number\n"
    );

    let back = parse(&text).unwrap();
    let record = back.get_record("config.server.http.setPort").unwrap();
    assert_eq!(record.property_name(), Some("server.http"));
    assert_eq!(record.verb(), Some(Verb::Set));
}

#[test]
fn test_duplicate_rejection_leaves_state() {
    let mut tree = Tree::new();
    let record = tree.add_record("a", None, Some("get"), None).unwrap();
    record.add_section("extra").unwrap();
    record.add_field(Field::required("x").unwrap()).unwrap();

    assert!(record.add_section("extra").unwrap_err().is_duplicate());
    assert!(record
        .add_field(Field::optional("x", None).unwrap())
        .unwrap_err()
        .is_duplicate());
    assert!(!record.get_field("main", "x").unwrap().is_optional());

    assert!(tree
        .add_record("a", None, Some("get"), None)
        .unwrap_err()
        .is_duplicate());
    assert_eq!(tree.len(), 1);
}

#[test]
fn test_parse_error_reports_line() {
    let text = "a\n    x\n    [y=\"1\"\n";
    let err = parse(text).unwrap_err();
    assert!(err.is_format());
    assert_eq!(err.line(), Some(3));
    let message = err.to_string();
    println!("{}", message);
    assert!(message.contains("Line 3"));
    assert!(message.contains("[y=\"1\""));
}

#[test]
fn test_mutation_after_parse() {
    let mut tree = parse(ACCOUNTS).unwrap();
    let record = tree.get_record_mut("user.delete").unwrap();
    record.set_description(Some("Removes a user"));
    record
        .get_section_mut("main")
        .unwrap()
        .get_field_mut("id")
        .unwrap()
        .delete_attribute("required");
    tree.delete_record("order.create");

    let text = tree.serialize_with_options(&SerializeOptions::new().with_comment_padding(1));
    assert!(text.contains("user.delete // Removes a user\n    id\n"));
    assert!(!text.contains("order.create"));
}

#[test]
fn test_hyphenated_names_round_trip() {
    let mut tree = Tree::new();
    let record = tree.add_record("user", None, Some("get"), None).unwrap();
    record.add_field(Field::required("user-id").unwrap()).unwrap();
    record
        .add_field_to("my-sec", Field::optional("max-len", Some("8")).unwrap())
        .unwrap();

    let text = tree.serialize();
    assert_eq!(
        text,
        "user.get\n    user-id\n    @my-sec\n    [max-len=\"8\"]\n"
    );

    let back = parse(&text).unwrap();
    assert_eq!(back, tree);
    let record = back.get_record("user.get").unwrap();
    assert_eq!(record.get_field("main", "user-id").unwrap().attribute_count(), 0);
    let sections: Vec<_> = record.list_sections().map(|s| s.name()).collect();
    assert_eq!(sections, vec!["main", "my-sec"]);
}

#[test]
fn test_property_without_action_is_rejected() {
    let mut tree = Tree::new();
    let err = tree.add_record("user", Some("profile"), None, None).unwrap_err();
    assert!(err.is_validation());
    assert!(tree.is_empty());
}
