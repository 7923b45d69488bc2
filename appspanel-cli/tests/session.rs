use appspanel_cli::{CliError, Fixture, Session, script};
use appspanel_lib::{AddressError, PanelConfig, PanelError, RemovalMode};

const FIXTURE: &str = r#"{
    "tables": [
        {
            "name": "users",
            "id_column": { "name": "login", "caption": "Login" },
            "columns": [{ "name": "name" }],
            "rows": [
                { "login": "u3", "name": "Cid" },
                { "login": "u1", "name": "Ann" },
                { "login": "u2", "name": "Bob" }
            ],
            "confirm": { "title": "Delete users", "content": "Really delete?" }
        },
        {
            "name": "groups",
            "id_column": { "name": "id" },
            "rows": [{ "id": "admins" }, { "id": "staff" }]
        }
    ],
    "permissions": [
        { "id": "perm-view" },
        { "id": "perm-edit", "depends_on": "perm-view" }
    ]
}"#;

fn session(config: PanelConfig) -> Session {
    Session::new(Fixture::from_json(FIXTURE).unwrap(), config).unwrap()
}

// ============================================================================
// Scripts
// ============================================================================

#[test]
fn test_confirmed_delete() {
    let mut session = session(PanelConfig::default());

    script::run(
        &mut session,
        "check users_select_0\ncheck users_select_2\nclick users_delete_1\n",
    )
    .unwrap();

    let report = session.report();
    assert!(report.contains("selected: [u1, u3]"), "{report}");
    assert!(report.contains("awaiting confirmation: u1/u3"), "{report}");
    assert!(session.navigation().is_empty());

    script::run(&mut session, "answer users yes").unwrap();
    assert_eq!(session.navigation(), vec!["u1/u3/remove/"]);
}

#[test]
fn test_declined_delete_keeps_selection() {
    let mut session = session(PanelConfig::default());

    script::run(
        &mut session,
        "check users_select\nclick users_delete_2\nanswer users no\n",
    )
    .unwrap();

    let report = session.report();
    assert!(report.contains("selected: [u1, u2, u3]"), "{report}");
    assert!(report.contains("select all: checked"), "{report}");
    assert!(report.contains("delete buttons enabled: 2"), "{report}");
    assert!(session.navigation().is_empty());
}

#[test]
fn test_unconfirmed_table_removes_per_item() {
    let mut session = session(PanelConfig::default().with_removal_mode(RemovalMode::PerItem));

    script::run(&mut session, "check groups_select\nclick groups_delete_1").unwrap();

    assert_eq!(session.navigation(), vec!["admins/remove/", "staff/remove/"]);
}

#[test]
fn test_row_click_and_unload() {
    let mut session = session(PanelConfig::default());

    script::run(&mut session, "click users_row_1\nunload\ncheck users_select_0").unwrap();

    assert_eq!(session.navigation(), vec!["u2/details/"]);
    let report = session.report();
    assert!(report.contains("listeners: 0"), "{report}");
    // Ticked after unload, so nothing updated the buttons
    assert!(report.contains("delete buttons enabled: 0"), "{report}");
}

#[test]
fn test_permissions_from_fixture() {
    let mut session = session(PanelConfig::default());

    script::run(&mut session, "check perm-edit").unwrap();

    let view = session.page().document().get("perm-view").unwrap();
    assert!(view.checked && view.disabled);
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_unknown_table_reports_line() {
    let mut session = session(PanelConfig::default());

    let err = script::run(&mut session, "# setup\nanswer nobody yes").unwrap_err();

    match err {
        CliError::Script(e) => {
            assert_eq!(e.line, 2);
            assert!(e.message.contains("nobody"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_invalid_table_name() {
    let fixture = Fixture::from_json(r#"{"tables": [{"name": "", "id_column": {"name": "id"}}]}"#)
        .unwrap();

    let err = Session::new(fixture, PanelConfig::default()).unwrap_err();

    assert!(matches!(err, CliError::Panel(_)));
}

#[test]
fn test_table_name_with_separator() {
    let fixture = Fixture::from_json(
        r#"{"tables": [{"name": "shared_contacts", "id_column": {"name": "id"}}]}"#,
    )
    .unwrap();

    let err = Session::new(fixture, PanelConfig::default()).unwrap_err();

    assert!(matches!(
        err,
        CliError::Panel(PanelError::Address(AddressError::InvalidTableName(name)))
            if name == "shared_contacts"
    ));
}

#[test]
fn test_duplicate_table_in_fixture() {
    let fixture = Fixture::from_json(
        r#"{"tables": [
            {"name": "users", "id_column": {"name": "id"}},
            {"name": "users", "id_column": {"name": "id"}}
        ]}"#,
    )
    .unwrap();

    let err = Session::new(fixture, PanelConfig::default()).unwrap_err();

    assert!(matches!(err, CliError::Panel(PanelError::DuplicateTable(t)) if t.as_str() == "users"));
}
