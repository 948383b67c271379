//! Property tests for feed classification.

use proptest::prelude::*;

use sched_model::{Campus, DataDay, TimeSlot};
use sched_normalization::{
    CAMPUS_FRAGMENTS, campus, day_slot, lesson_type, subject_key, time_slot,
};

const KNOWN_TIMES: [&str; 8] = [
    "8:20", "10:00", "11:40", "13:30", "15:20", "17:00", "18:40", "20:20",
];

#[test]
fn every_known_time_classifies() {
    for (time, slot) in KNOWN_TIMES.iter().zip(TimeSlot::ALL) {
        assert_eq!(time_slot(time).unwrap(), slot);
    }
}

#[test]
fn every_weekday_classifies() {
    for day in DataDay::ALL {
        let result = day_slot(Some(day));
        if day == DataDay::Sunday {
            assert!(result.is_err());
        } else {
            assert_eq!(result.unwrap().as_str(), day.to_string());
        }
    }
}

proptest! {
    #[test]
    fn unknown_times_fail(text in "[0-9]{1,2}:[0-9]{2}") {
        prop_assume!(!KNOWN_TIMES.contains(&text.as_str()));
        prop_assert!(time_slot(&text).is_err());
    }

    #[test]
    fn unknown_qualifiers_fail(text in "\\PC{0,8}") {
        prop_assume!(!["ЛЕК", "ЛАБ", "ПРАК"].contains(&text.as_str()));
        let err = lesson_type(&text).unwrap_err();
        prop_assert_eq!(err.value, text);
    }

    #[test]
    fn places_without_fragments_are_undefined(place in "[a-zA-Z0-9 ,.]{0,40}") {
        prop_assert_eq!(campus(&place), Campus::Undefined);
    }

    #[test]
    fn places_with_a_fragment_are_classified(
        prefix in "[a-z ]{0,10}",
        suffix in "[a-z ]{0,10}",
        index in 0usize..3,
    ) {
        let (fragment, expected) = CAMPUS_FRAGMENTS[index];
        let place = format!("{prefix}{fragment}{suffix}");
        prop_assert_eq!(campus(&place), expected);
    }

    #[test]
    fn padded_times_fail(
        index in 0usize..8,
        before in "[ \t\n]{0,2}",
        after in "[ \t\n]{0,2}",
    ) {
        prop_assume!(!(before.is_empty() && after.is_empty()));
        let padded = format!("{before}{}{after}", KNOWN_TIMES[index]);
        prop_assert!(time_slot(&padded).is_err());
    }

    #[test]
    fn subject_key_ignores_the_qualifier(
        name in "[A-Za-zА-Яа-я][A-Za-zА-Яа-я ]{0,20}",
        first in "[^()]{0,8}",
        second in "[^()]{0,8}",
    ) {
        let tight = format!("{name}({first})");
        let spaced = format!("{name} ({second})");
        let key = subject_key(&tight);
        prop_assert_eq!(key, subject_key(&spaced));
        prop_assert_eq!(key, name.trim());
        prop_assert!(!key.contains('('));
    }
}
