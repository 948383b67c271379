use std::fs;

use sched_ingest::{Seed, SourceError, install_seed, load_seed, read_entries};
use sched_model::{DataDay, DataWeek};
use sched_store::InMemoryStore;

#[test]
fn reads_json_feed() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("feed.json");
    fs::write(
        &path,
        r#"[
            {"room": "305", "teacher": "Smith", "subject_title": "Algorithms(ЛЕК)",
             "place": "Кронверкский пр., д.49", "time": "8:20",
             "day": "Monday", "week": "Both", "group": "M3201"},
            {"room": "101", "teacher": "Jones", "subjectTitle": "Physics(ЛАБ)",
             "place": "", "time": "10:00", "day": null, "group": "M3202"}
        ]"#,
    )
    .unwrap();

    let entries = read_entries(&path).expect("read json");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].day, Some(DataDay::Monday));
    assert_eq!(entries[0].week, Some(DataWeek::Both));
    assert_eq!(entries[1].subject_title, "Physics(ЛАБ)");
    assert_eq!(entries[1].day, None);
    assert_eq!(entries[1].week, None);
}

#[test]
fn reads_csv_feed_with_empty_enums() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("feed.csv");
    fs::write(
        &path,
        "room,teacher,subject_title,place,time,day,week,group\n\
         305,Smith,Algorithms(ЛЕК),Кронверкский пр.,8:20,Monday,Odd,M3201\n\
         101, Jones ,Physics(ЛАБ),,10:00,,,M3202\n",
    )
    .unwrap();

    let entries = read_entries(&path).expect("read csv");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].week, Some(DataWeek::Odd));
    assert_eq!(entries[1].teacher, "Jones");
    assert_eq!(entries[1].place, "");
    assert_eq!(entries[1].day, None);
    assert_eq!(entries[1].week, None);
}

#[test]
fn csv_parse_error_reports_line() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("feed.csv");
    fs::write(
        &path,
        "room,teacher,subject_title,place,time,day,week,group\n\
         305,Smith,Algorithms(ЛЕК),x,8:20,Funday,Odd,M3201\n",
    )
    .unwrap();

    match read_entries(&path) {
        Err(SourceError::CsvParse { line, .. }) => assert_eq!(line, 2),
        other => panic!("expected CSV parse error, got {other:?}"),
    }
}

#[test]
fn rejects_unknown_extension() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("feed.xml");
    fs::write(&path, "<feed/>").unwrap();
    assert!(matches!(
        read_entries(&path),
        Err(SourceError::UnsupportedFormat { .. })
    ));
}

#[test]
fn default_seed_lists_twelve_groups() {
    let seed = Seed::default();
    assert_eq!(seed.semester, "Fake_Semester");
    assert_eq!(seed.groups.len(), 12);
    assert_eq!(seed.groups.first().map(String::as_str), Some("M3201"));
    assert_eq!(seed.groups.last().map(String::as_str), Some("M3212"));
}

#[test]
fn seed_installs_once() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("seed.json");
    fs::write(
        &path,
        r#"{"course": "Y2", "semester": "Spring", "groups": ["M3201", "M3202"]}"#,
    )
    .unwrap();
    let seed = load_seed(&path).expect("load seed");

    let mut store = InMemoryStore::new();
    let first = install_seed(&mut store, &seed).unwrap();
    assert_eq!((first.courses, first.semesters, first.groups), (1, 1, 2));

    let second = install_seed(&mut store, &seed).unwrap();
    assert_eq!((second.courses, second.semesters, second.groups), (0, 0, 0));
    assert_eq!(store.groups.len(), 2);
    assert_eq!(store.semesters.iter().next().unwrap().name, "Spring");
}
