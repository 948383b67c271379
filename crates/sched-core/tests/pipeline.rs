//! Integration tests for the ingestion pipeline.

use sched_core::{DuplicatePolicy, ErrorMode, IngestError, IngestOptions, ingest};
use sched_model::{
    Campus, DataDay, DataWeek, DaySlot, EntityKind, LessonType, NewSemester, NewStudyCourse,
    NewStudyGroup, RawEntry, RawField, TimeSlot, WeekType,
};
use sched_store::{InMemoryStore, Repository};

fn seeded_store() -> InMemoryStore {
    let mut store = InMemoryStore::new();
    let course = store
        .courses
        .create(NewStudyCourse {
            name: "Fake_Course".to_string(),
        })
        .unwrap();
    store
        .semesters
        .create(NewSemester {
            name: "Fake_Semester".to_string(),
            course,
        })
        .unwrap();
    for group in ["M3201", "M3202"] {
        store
            .groups
            .create(NewStudyGroup {
                name: group.to_string(),
                course,
            })
            .unwrap();
    }
    store
}

fn entry(room: &str, teacher: &str, title: &str, place: &str, time: &str) -> RawEntry {
    RawEntry {
        room: room.to_string(),
        teacher: teacher.to_string(),
        subject_title: title.to_string(),
        place: place.to_string(),
        time: time.to_string(),
        day: Some(DataDay::Monday),
        week: Some(DataWeek::Both),
        group: "M3201".to_string(),
    }
}

fn algorithms_lecture() -> RawEntry {
    entry("305", "Smith", "Algorithms(ЛЕК)", "Кронверкский", "8:20")
}

#[test]
fn single_entry_end_to_end() {
    let mut store = seeded_store();
    let summary = ingest(&mut store, &[algorithms_lecture()], &IngestOptions::default())
        .expect("ingest");

    insta::assert_json_snapshot!(summary, @r#"
    {
      "entries": 1,
      "rooms": {
        "created": 1,
        "duplicates": 0,
        "stopped_at": null
      },
      "teachers": {
        "created": 1,
        "duplicates": 0,
        "stopped_at": null
      },
      "subjects": {
        "created": 1,
        "duplicates": 0,
        "stopped_at": null
      },
      "semester_subjects": 1,
      "lessons": 1,
      "skipped": []
    }
    "#);

    let room = store.rooms.iter().next().unwrap();
    assert_eq!(room.name, "305");
    assert_eq!(room.campus, Campus::Kronverskiy);
    assert_eq!(store.teachers.iter().next().unwrap().name, "Smith");
    let subject = store.subjects.iter().next().unwrap();
    assert_eq!(subject.name, "Algorithms");

    let link = store.semester_subjects.iter().next().unwrap();
    assert_eq!(link.subject, subject.id);
    let semester = store.semesters.iter().next().unwrap();
    assert_eq!(link.semester, semester.id);
    assert_eq!(
        (link.lecture_hours, link.laboratory_hours, link.practice_hours),
        (0, 0, 0)
    );

    let lesson = store.lessons.iter().next().unwrap();
    assert_eq!(lesson.semester_subject, link.id);
    assert_eq!(lesson.lesson_type, LessonType::Lecture);
    assert_eq!(store.groups.get(lesson.group).unwrap().name, "M3201");
    assert_eq!(lesson.teacher, store.teachers.iter().next().unwrap().id);
    assert_eq!(lesson.room, room.id);
    assert_eq!(lesson.time_slot, TimeSlot::Lesson1);
    assert_eq!(lesson.day, DaySlot::Monday);
    assert_eq!(lesson.week, WeekType::Both);
}

#[test]
fn unrecognized_time_fails_without_lessons() {
    let mut store = seeded_store();
    let entries = vec![
        algorithms_lecture(),
        entry("305", "Smith", "Algorithms(ПРАК)", "Кронверкский", "9:00"),
    ];
    let err = ingest(&mut store, &entries, &IngestOptions::default()).unwrap_err();

    assert_eq!(err.entry(), Some(1));
    assert_eq!(err.field(), Some(RawField::Time));
    assert_eq!(err.value(), Some("9:00"));
    assert!(matches!(err, IngestError::Classification { .. }));
    assert!(store.lessons.is_empty());
}

#[test]
fn second_run_creates_no_reference_entities() {
    let mut store = seeded_store();
    let entries = vec![
        algorithms_lecture(),
        entry("101", "Jones", "Physics(ЛАБ)", "ул. Ломоносова, д.9", "10:00"),
        entry("305", "Jones", "Algorithms(ПРАК)", "Кронверкский", "11:40"),
    ];
    let first = ingest(&mut store, &entries, &IngestOptions::default()).unwrap();
    assert_eq!(first.rooms.created, 2);
    assert_eq!(first.teachers.created, 2);
    assert_eq!(first.subjects.created, 2);
    assert_eq!(first.semester_subjects, 2);

    let second = ingest(&mut store, &entries, &IngestOptions::default()).unwrap();
    assert_eq!(second.rooms.created, 0);
    assert_eq!(second.teachers.created, 0);
    assert_eq!(second.subjects.created, 0);
    assert_eq!(second.semester_subjects, 0);
    assert_eq!(second.rooms.duplicates, 3);

    assert_eq!(store.rooms.len(), 2);
    assert_eq!(store.teachers.len(), 2);
    assert_eq!(store.subjects.len(), 2);
    assert_eq!(store.semester_subjects.len(), 2);
    // Lessons are not deduplicated across runs.
    assert_eq!(store.lessons.len(), 6);
}

#[test]
fn repeated_entries_produce_repeated_lessons() {
    let mut store = seeded_store();
    let entries = vec![algorithms_lecture(), algorithms_lecture()];
    let summary = ingest(&mut store, &entries, &IngestOptions::default()).unwrap();
    assert_eq!(summary.rooms.created, 1);
    assert_eq!(summary.rooms.duplicates, 1);
    assert_eq!(summary.lessons, 2);
}

#[test]
fn same_room_label_on_two_campuses_is_two_rooms() {
    let mut store = seeded_store();
    let entries = vec![
        algorithms_lecture(),
        entry("305", "Smith", "Algorithms(ЛЕК)", "ул. Ломоносова, д.9", "10:00"),
        entry("305", "Smith", "Algorithms(ЛЕК)", "Онлайн", "11:40"),
    ];
    ingest(&mut store, &entries, &IngestOptions::default()).unwrap();
    let campuses: Vec<Campus> = store.rooms.iter().map(|r| r.campus).collect();
    assert_eq!(
        campuses,
        vec![Campus::Kronverskiy, Campus::Lomonosova, Campus::Undefined]
    );
    let rooms: Vec<_> = store.lessons.iter().map(|l| l.room).collect();
    assert_eq!(rooms.len(), 3);
    assert!(rooms[0] != rooms[1] && rooms[1] != rooms[2]);
}

#[test]
fn every_lesson_reference_exists() {
    let mut store = seeded_store();
    let mut entries = Vec::new();
    for (i, time) in ["8:20", "10:00", "11:40", "13:30"].iter().enumerate() {
        let mut raw = entry(
            &format!("{}", 100 + i % 2),
            if i % 2 == 0 { "Smith" } else { "Jones" },
            if i < 2 { "Algorithms(ЛЕК)" } else { "Databases(ЛАБ)" },
            "Биржевая линия, д.14",
            time,
        );
        raw.group = if i % 2 == 0 { "M3201" } else { "M3202" }.to_string();
        entries.push(raw);
    }
    ingest(&mut store, &entries, &IngestOptions::default()).unwrap();

    assert_eq!(store.lessons.len(), 4);
    for lesson in store.lessons.iter() {
        assert!(store.semester_subjects.get(lesson.semester_subject).is_some());
        assert!(store.teachers.get(lesson.teacher).is_some());
        assert!(store.rooms.get(lesson.room).is_some());
        assert!(store.groups.get(lesson.group).is_some());
    }
}

#[test]
fn unknown_group_is_a_resolution_error() {
    let mut store = seeded_store();
    let mut raw = algorithms_lecture();
    raw.group = "K3140".to_string();
    let err = ingest(&mut store, &[raw], &IngestOptions::default()).unwrap_err();
    assert_eq!(
        err,
        IngestError::Resolution {
            entry: 0,
            entity: EntityKind::StudyGroup,
            field: RawField::Group,
            value: "K3140".to_string(),
        }
    );
    assert!(store.groups.iter().all(|g| g.name != "K3140"));
}

#[test]
fn sunday_and_missing_week_are_classification_errors() {
    let mut store = seeded_store();
    let mut sunday = algorithms_lecture();
    sunday.day = Some(DataDay::Sunday);
    let err = ingest(&mut store, &[sunday], &IngestOptions::default()).unwrap_err();
    assert_eq!(err.field(), Some(RawField::Day));

    let mut no_week = algorithms_lecture();
    no_week.week = None;
    let err = ingest(&mut store, &[no_week], &IngestOptions::default()).unwrap_err();
    assert_eq!(err.field(), Some(RawField::Week));
}

#[test]
fn missing_semester_fails_before_any_pass() {
    let mut store = seeded_store();
    let options = IngestOptions::default().with_semester("Fale_Semester");
    let err = ingest(&mut store, &[algorithms_lecture()], &options).unwrap_err();
    assert_eq!(
        err,
        IngestError::UnknownSemester {
            name: "Fale_Semester".to_string()
        }
    );
    assert!(store.rooms.is_empty());
}

#[test]
fn collect_mode_skips_bad_entries() {
    let mut store = seeded_store();
    let entries = vec![
        entry("305", "Smith", "Algorithms(СЕМ)", "Кронверкский", "8:20"),
        algorithms_lecture(),
        entry("305", "Smith", "Algorithms(ЛЕК)", "Кронверкский", "9:00"),
    ];
    let options = IngestOptions::default().with_error_mode(ErrorMode::CollectAndSkip);
    let summary = ingest(&mut store, &entries, &options).unwrap();

    assert_eq!(summary.lessons, 1);
    assert!(summary.has_skipped());
    let skipped: Vec<(usize, Option<RawField>)> =
        summary.skipped.iter().map(|s| (s.entry, s.field)).collect();
    assert_eq!(
        skipped,
        vec![(0, Some(RawField::LessonType)), (2, Some(RawField::Time))]
    );
    assert_eq!(summary.skipped[0].value.as_deref(), Some("СЕМ"));
    assert_eq!(store.lessons.len(), 1);
}

#[test]
fn skip_duplicate_policy_creates_every_distinct_entity() {
    let mut store = seeded_store();
    let entries = vec![
        algorithms_lecture(),
        algorithms_lecture(),
        entry("101", "Jones", "Physics(ЛАБ)", "ул. Ломоносова, д.9", "10:00"),
    ];
    let summary = ingest(&mut store, &entries, &IngestOptions::default()).unwrap();
    assert!(!summary.stopped_early());
    assert_eq!(summary.rooms.created, 2);
    assert_eq!(summary.teachers.created, 2);
    assert_eq!(summary.subjects.created, 2);
    assert_eq!(summary.lessons, 3);
}

#[test]
fn stop_pass_policy_reproduces_historical_truncation() {
    let mut store = seeded_store();
    let entries = vec![
        algorithms_lecture(),
        algorithms_lecture(),
        entry("101", "Jones", "Physics(ЛАБ)", "ул. Ломоносова, д.9", "10:00"),
    ];
    let options = IngestOptions::historical();
    assert_eq!(options.duplicate_policy, DuplicatePolicy::StopPass);

    let err = ingest(&mut store, &entries, &options).unwrap_err();

    // Every pass stopped at the repeated entry, so entry 2 never got its
    // subject and materialization cannot resolve it.
    assert_eq!(store.rooms.len(), 1);
    assert_eq!(store.teachers.len(), 1);
    assert_eq!(store.subjects.len(), 1);
    assert_eq!(
        err,
        IngestError::Resolution {
            entry: 2,
            entity: EntityKind::SemesterSubject,
            field: RawField::SubjectTitle,
            value: "Physics".to_string(),
        }
    );
    assert!(store.lessons.is_empty());
}
