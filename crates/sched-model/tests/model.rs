//! Tests for sched-model types.

use sched_model::{
    Campus, DataDay, DataWeek, EntityKind, NewRoom, NewSemesterSubject, RawEntry, Record,
    RecordId, Room, SemesterId, SemesterSubject, SubjectId,
};

#[test]
fn room_key_includes_campus() {
    let attrs = NewRoom {
        name: "305".to_string(),
        campus: Campus::Kronverskiy,
    };
    let room = Room::from_attrs(RecordId::from_index(0), attrs.clone());
    assert_eq!(Room::key_of(&attrs), room.key());
    assert_ne!(
        room.key(),
        Some(("305".to_string(), Campus::Lomonosova))
    );
    assert_eq!(Room::KIND, EntityKind::Room);
}

#[test]
fn zeroed_semester_subject_has_no_quota() {
    let attrs = NewSemesterSubject::zeroed(SubjectId::from_index(2), SemesterId::from_index(0));
    let record = SemesterSubject::from_attrs(RecordId::from_index(5), attrs);
    assert_eq!(record.lecture_hours, 0);
    assert_eq!(record.laboratory_hours, 0);
    assert_eq!(record.practice_hours, 0);
    assert_eq!(
        record.key(),
        Some((SubjectId::from_index(2), SemesterId::from_index(0)))
    );
}

#[test]
fn raw_entry_deserializes_with_missing_day_and_week() {
    let json = r#"{
        "room": "305",
        "teacher": "Smith",
        "subjectTitle": "Algorithms(ЛЕК)",
        "place": "Кронверкский пр., д.49",
        "time": "8:20",
        "group": "M3201"
    }"#;
    let entry: RawEntry = serde_json::from_str(json).expect("deserialize entry");
    assert_eq!(entry.subject_title, "Algorithms(ЛЕК)");
    assert_eq!(entry.day, None);
    assert_eq!(entry.week, None);
}

#[test]
fn raw_entry_serializes_feed_enums_by_name() {
    let entry = RawEntry {
        room: "1".to_string(),
        teacher: "T".to_string(),
        subject_title: "S".to_string(),
        place: String::new(),
        time: "10:00".to_string(),
        day: Some(DataDay::Friday),
        week: Some(DataWeek::Even),
        group: "M3202".to_string(),
    };
    let value = serde_json::to_value(&entry).expect("serialize entry");
    assert_eq!(value["day"], "Friday");
    assert_eq!(value["week"], "Even");
}
