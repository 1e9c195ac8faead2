use super::*;

#[test]
fn it_should_map_every_known_category_to_its_kind() {
    let table = [
        ("BROADCAST", AlertKind::Broadcast),
        ("MODERATION_ACTION", AlertKind::MsgModeration),
        ("MESSAGE_FLAGGED", AlertKind::Flagged),
        ("SYSTEM_ALERT", AlertKind::Broadcast),
        ("PERMISSION_CHANGE", AlertKind::User),
        ("USER_SLEEP", AlertKind::Warning),
        ("USER_SLEEP_ADMIN", AlertKind::Warning),
    ];

    for (category, kind) in table {
        assert_eq!(AlertKind::from(AlertCategory::from_wire(category)), kind);
    }
}

#[test]
fn it_should_map_unknown_categories_to_broadcast() {
    let category = AlertCategory::from_wire("FOO");
    assert_eq!(category, AlertCategory::Other("FOO".to_string()));
    assert_eq!(AlertKind::from(category), AlertKind::Broadcast);
}

#[test]
fn it_should_parse_wire_strings_into_the_closed_vocabularies() {
    assert_eq!(
        AlertCategory::from_wire("MODERATION_ACTION"),
        AlertCategory::ModerationAction
    );
    assert_eq!(
        AlertEntityType::from_wire("MESSAGE"),
        AlertEntityType::Message
    );
    assert_eq!(
        AlertEntityType::from_wire("BOGUS"),
        AlertEntityType::Other("BOGUS".to_string())
    );
}

#[test]
fn it_should_resolve_known_entity_links() {
    assert_eq!(AlertEntity::new("MESSAGE", Some(7)).link(), "/BroadCast");
    assert_eq!(AlertEntity::new("USER", Some(42)).link(), "/user/42");
    assert_eq!(
        AlertEntity::new("SYSTEM", None).link(),
        "/settings/notifications"
    );
}

#[test]
fn it_should_resolve_unknown_entities_to_the_noop_link() {
    assert_eq!(AlertEntity::new("BOGUS", Some(1)).link(), "#");
}

#[test]
fn it_should_resolve_a_user_entity_without_an_id_to_the_noop_link() {
    assert_eq!(AlertEntity::new("USER", None).link(), "#");
}

#[test]
fn it_should_deserialize_the_service_payload() {
    let payload = r#"{
        "NotificationID": 17,
        "NotificationType": "MESSAGE_FLAGGED",
        "EntityType": "USER",
        "EntityID": 42,
        "Title": "Message flagged",
        "Message": "A community report flagged this message",
        "CreatedAt": 1700000000,
        "IsRead": false
    }"#;

    let raw: RawAlert = serde_json::from_str(payload).unwrap();
    let alert = Alert::from(raw);

    assert_eq!(alert.id, 17);
    assert_eq!(alert.kind, AlertKind::Flagged);
    assert_eq!(alert.link, "/user/42");
    assert_eq!(alert.title, "Message flagged");
    assert_eq!(alert.body, "A community report flagged this message");
    assert!(!alert.is_read);
    assert_eq!(alert.created_at.timestamp(), 1_700_000_000);
}

#[test]
fn it_should_tolerate_a_missing_entity_id() {
    let payload = r#"{
        "NotificationID": 3,
        "NotificationType": "SYSTEM_ALERT",
        "EntityType": "SYSTEM",
        "Title": "Maintenance",
        "Message": "Scheduled maintenance tonight",
        "CreatedAt": 1700000100,
        "IsRead": true
    }"#;

    let alert = Alert::from(serde_json::from_str::<RawAlert>(payload).unwrap());
    assert_eq!(alert.kind, AlertKind::Broadcast);
    assert_eq!(alert.link, "/settings/notifications");
    assert!(alert.is_read);
}

#[test]
fn it_should_serialize_kinds_with_camel_case_tags() {
    let tags: Vec<String> = [
        AlertKind::User,
        AlertKind::Broadcast,
        AlertKind::Success,
        AlertKind::Flagged,
        AlertKind::MsgModeration,
        AlertKind::Warning,
    ]
    .iter()
    .map(|k| serde_json::to_string(k).unwrap())
    .collect();

    assert_eq!(
        tags,
        [
            r#""user""#,
            r#""broadcast""#,
            r#""success""#,
            r#""flagged""#,
            r#""msgModeration""#,
            r#""warning""#,
        ]
    );
}
