use pretty_assertions::assert_eq;
use roster_store::{
    BoundaryError, DbConfig, ErrorKind, NewRecord, Position, PositionState, Record, RecordId,
    RecordPatch, Roster, TableName,
};

fn roster() -> Roster {
    Roster::open_in_memory().unwrap()
}

fn kind<T: std::fmt::Debug>(outcome: Result<T, BoundaryError>) -> ErrorKind {
    outcome.unwrap_err().kind
}

// ── Table lifecycle ───────────────────────────────────────────────

#[test]
fn create_exists_delete_cycle() {
    let r = roster();
    let ack = r.create_table("player1").unwrap();
    assert_eq!(ack.message, "Table 'player1' created successfully.");
    assert!(r.table_exists("player1").unwrap());

    let ack = r.delete_table("player1").unwrap();
    assert_eq!(ack.message, "Table 'player1' deleted successfully.");
    assert!(!r.table_exists("player1").unwrap());
}

#[test]
fn create_twice_is_already_exists() {
    let r = roster();
    r.create_table("player1").unwrap();
    assert_eq!(kind(r.create_table("player1")), ErrorKind::AlreadyExists);
}

#[test]
fn malformed_names_rejected_before_storage() {
    let r = roster();
    let long = "n".repeat(65);
    for raw in ["", "a-b", "x; DROP TABLE roster_tables", long.as_str()] {
        assert_eq!(kind(r.create_table(raw)), ErrorKind::InvalidName, "{raw:?}");
    }
    assert!(r.list_tables().unwrap().is_empty());
}

#[test]
fn malformed_name_reads_as_missing_table() {
    let r = roster();
    assert!(!r.table_exists("no such").unwrap());
    assert_eq!(kind(r.delete_table("no such")), ErrorKind::TableNotFound);
    assert_eq!(kind(r.count_records("bad;name")), ErrorKind::TableNotFound);
    assert_eq!(kind(r.get_position("bad;name")), ErrorKind::TableNotFound);
}

#[test]
fn list_tables_returns_names() {
    let r = roster();
    r.create_table("b").unwrap();
    r.create_table("a").unwrap();
    assert_eq!(r.list_tables().unwrap(), vec!["a", "b"]);
}

#[test]
fn recreated_table_has_no_memory() {
    let r = roster();
    r.create_table("t").unwrap();
    r.insert_record("t", "Hero", 10).unwrap();
    r.set_position("t", 1.0, 1.0).unwrap();
    r.delete_table("t").unwrap();

    r.create_table("t").unwrap();
    assert_eq!(r.count_records("t").unwrap(), 0);
    assert_eq!(r.get_position("t").unwrap(), PositionState::NotSet);
    assert_eq!(r.insert_record("t", "Hero", 10).unwrap(), RecordId::new(1));
}

// ── Position ──────────────────────────────────────────────────────

#[test]
fn position_roundtrip() {
    let r = roster();
    r.create_table("t").unwrap();
    assert_eq!(r.get_position("t").unwrap(), PositionState::NotSet);

    let ack = r.set_position("t", 1.5, -2.0).unwrap();
    assert_eq!(ack.message, "Position updated");
    let state = r.get_position("t").unwrap();
    assert_eq!(state, PositionState::Set { x: 1.5, y: -2.0 });
    assert_eq!(state.position().map(|p| (p.x, p.y)), Some((1.5, -2.0)));
}

#[test]
fn nan_position_is_stored_not_rejected() {
    let r = roster();
    r.create_table("t").unwrap();
    r.set_position("t", f64::NAN, 0.0).unwrap();
    match r.get_position("t").unwrap() {
        PositionState::Set { x, y } => {
            assert!(x.is_nan());
            assert_eq!(y, 0.0);
        }
        PositionState::NotSet => panic!("position should be set"),
    }
}

#[test]
fn position_on_missing_table() {
    let r = roster();
    assert_eq!(kind(r.set_position("ghost", 0.0, 0.0)), ErrorKind::TableNotFound);
    assert_eq!(kind(r.get_position("ghost")), ErrorKind::TableNotFound);
}

// ── Records ───────────────────────────────────────────────────────

#[test]
fn record_crud_through_facade() {
    let r = roster();
    r.create_table("t").unwrap();

    let id = r.insert_record("t", "Hero", 10).unwrap();
    assert_eq!(
        r.get_record("t", id).unwrap(),
        Record {
            id,
            name: "Hero".into(),
            level: 10
        }
    );
    assert_eq!(r.count_records("t").unwrap(), 1);

    let ack = r
        .update_record("t", id, &RecordPatch::new().name("NinjaHero").level(12))
        .unwrap();
    assert_eq!(ack.message, "Record updated.");
    assert_eq!(r.find_records("t", "NinjaHero").unwrap().len(), 1);
    assert!(r.find_records("t", "Hero").unwrap().is_empty());

    let ack = r.delete_record("t", id).unwrap();
    assert_eq!(ack.message, "Record deleted.");
    assert_eq!(kind(r.get_record("t", id)), ErrorKind::NotFound);
    assert_eq!(r.count_records("t").unwrap(), 0);
}

#[test]
fn list_records_in_id_order() {
    let r = roster();
    r.create_table("t").unwrap();
    let a = r.insert_record("t", "Hero", 10).unwrap();
    let b = r.insert_record("t", "Hero", 11).unwrap();
    let ids: Vec<RecordId> = r.list_records("t").unwrap().into_iter().map(|x| x.id).collect();
    assert_eq!(ids, vec![a, b]);
    assert_eq!(r.find_records("t", "Hero").unwrap().len(), 2);
}

#[test]
fn record_failures_map_to_kinds() {
    let r = roster();
    r.create_table("t").unwrap();
    let missing = RecordId::new(5);

    assert_eq!(kind(r.get_record("t", missing)), ErrorKind::NotFound);
    assert_eq!(
        kind(r.update_record("t", missing, &RecordPatch::new())),
        ErrorKind::NotFound
    );
    assert_eq!(kind(r.delete_record("t", missing)), ErrorKind::NotFound);

    assert_eq!(kind(r.insert_record("nope", "a", 1)), ErrorKind::TableNotFound);
    assert_eq!(kind(r.list_records("nope")), ErrorKind::TableNotFound);
    assert_eq!(kind(r.find_records("nope", "a")), ErrorKind::TableNotFound);
    assert_eq!(kind(r.get_record("nope", missing)), ErrorKind::TableNotFound);
}

#[test]
fn failed_operation_has_no_side_effects() {
    let r = roster();
    r.create_table("t").unwrap();
    r.insert_record("t", "Hero", 10).unwrap();

    let _ = r.update_record("t", RecordId::new(9), &RecordPatch::new().level(1));
    let _ = r.create_table("t");
    let _ = r.delete_record("t", RecordId::new(9));

    let records = r.list_records("t").unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].level, 10);
}

// ── Component access ──────────────────────────────────────────────

#[test]
fn components_share_the_facade_database() {
    let r = roster();
    let table = TableName::parse("shared").unwrap();
    r.registry().create(&table).unwrap();
    let id = r.records().insert(&table, &NewRecord::new("Hero", 10)).unwrap();
    r.positions().set(&table, Position::new(2.0, 3.0)).unwrap();

    assert!(r.table_exists("shared").unwrap());
    assert_eq!(r.get_record("shared", id).unwrap().name, "Hero");
    assert_eq!(
        r.get_position("shared").unwrap(),
        PositionState::Set { x: 2.0, y: 3.0 }
    );
}

// ── Boundary encoding ─────────────────────────────────────────────

#[test]
fn error_kinds_have_stable_status_and_wire_names() {
    let cases = [
        (ErrorKind::InvalidName, 400, "invalid_name"),
        (ErrorKind::AlreadyExists, 409, "already_exists"),
        (ErrorKind::TableNotFound, 404, "table_not_found"),
        (ErrorKind::NotFound, 404, "not_found"),
        (ErrorKind::Internal, 500, "internal"),
    ];
    for (kind, status, wire) in cases {
        assert_eq!(kind.http_status(), status);
        assert_eq!(kind.to_string(), wire);
        assert_eq!(serde_json::to_value(kind).unwrap(), serde_json::json!(wire));
    }
}

#[test]
fn boundary_error_serializes_kind_and_detail() {
    let r = roster();
    let err = r.delete_table("ghost").unwrap_err();
    let json = serde_json::to_value(&err).unwrap();
    assert_eq!(json["kind"], "table_not_found");
    assert!(json["detail"].as_str().unwrap().contains("ghost"));
    assert!(err.to_string().starts_with("table_not_found:"));
}

#[test]
fn position_state_wire_shape() {
    assert_eq!(
        serde_json::to_value(PositionState::Set { x: 1.5, y: -2.0 }).unwrap(),
        serde_json::json!({"status": "set", "x": 1.5, "y": -2.0})
    );
    assert_eq!(
        serde_json::to_value(PositionState::NotSet).unwrap(),
        serde_json::json!({"status": "not_set"})
    );
}

// ── Persistence ───────────────────────────────────────────────────

#[test]
fn file_backed_roster_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let config = DbConfig::at_path(dir.path().join("roster.db"));

    let id = {
        let r = Roster::open(&config).unwrap();
        r.create_table("saved").unwrap();
        r.set_position("saved", 3.0, 4.0).unwrap();
        r.insert_record("saved", "Hero", 10).unwrap()
    };

    let r = Roster::open(&config).unwrap();
    assert!(r.table_exists("saved").unwrap());
    assert_eq!(r.get_record("saved", id).unwrap().name, "Hero");
    assert_eq!(
        r.get_position("saved").unwrap(),
        PositionState::Set { x: 3.0, y: 4.0 }
    );
    assert!(r.insert_record("saved", "Next", 1).unwrap() > id);
}
