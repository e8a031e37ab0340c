//! Draft Validation Tests
//!
//! Field rules and manual submission against a persisted selection.

use exam_planner::models::{ExamDraft, ExamField};
use exam_planner::services::exam_validation::{
    COURSE_MESSAGE, DATE_MESSAGE, DUPLICATE_MESSAGE, LENGTH_MESSAGE, REQUIRED_MESSAGE,
    SECTION_MESSAGE, TIME_MESSAGE,
};
use exam_planner::services::{submit_draft, DraftValidator, SelectionStore, SubmitError, ValidationMode};
use exam_planner::storage::MemoryStore;

fn strict() -> DraftValidator {
    DraftValidator::new(ValidationMode::Strict).unwrap()
}

fn draft() -> ExamDraft {
    ExamDraft {
        course: "CMPUT 175".to_string(),
        section: "A1".to_string(),
        date: "12/15/2024".to_string(),
        time: "09:00 AM".to_string(),
        length: "2".to_string(),
        window: "within 24h".to_string(),
        location: "Main Hall".to_string(),
    }
}

#[test]
fn test_course_rule() {
    let validator = strict();
    assert_eq!(validator.validate_course("CMPUT 175"), "");
    assert_eq!(validator.validate_course("CMPUT175"), "");
    assert_eq!(validator.validate_course("CMPUT17"), COURSE_MESSAGE);
    assert_eq!(validator.validate_course("cmput 175"), COURSE_MESSAGE);
    assert_eq!(validator.validate_course("C 175"), COURSE_MESSAGE);
}

#[test]
fn test_other_field_rules() {
    let validator = strict();
    assert_eq!(validator.validate_section("B02"), "");
    assert_eq!(validator.validate_section("A001"), SECTION_MESSAGE);
    assert_eq!(validator.validate_date("02/29/2024"), "");
    assert_eq!(validator.validate_date("13/01/2024"), DATE_MESSAGE);
    assert_eq!(validator.validate_time("9:05 pm"), "");
    assert_eq!(validator.validate_time("13:00 PM"), TIME_MESSAGE);
    assert_eq!(DraftValidator::validate_required("  "), REQUIRED_MESSAGE);
}

#[test]
fn test_length_rewrite() {
    let validator = strict();
    let normalized = validator.normalize_length("2");

    assert_eq!(normalized, "2 hours");
    assert_eq!(validator.validate_length(&normalized), "");
    assert_eq!(validator.validate_length(&validator.normalize_length("1.5")), "");
    assert_eq!(validator.validate_length("3 hrs"), "");
    assert_eq!(
        validator.validate_length(&validator.normalize_length("two hours")),
        LENGTH_MESSAGE
    );
}

#[test]
fn test_every_field_reported() {
    let errors = strict().validate(&ExamDraft::default());

    for field in [ExamField::Window, ExamField::Location] {
        assert_eq!(errors.get(field), REQUIRED_MESSAGE);
    }
    assert_eq!(errors.get(ExamField::Course), COURSE_MESSAGE);
    assert_eq!(errors.iter_invalid().count(), 7);
}

#[test]
fn test_manual_entry_scenario() {
    let mut storage = MemoryStore::default();
    {
        let mut store = SelectionStore::load(&mut storage);
        let record = submit_draft(&mut store, &strict(), &draft()).unwrap();
        assert_eq!(record.length, "2 hours");
    }

    let reloaded = SelectionStore::load(&mut storage);
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded.exams()[0].course, "CMPUT 175");
    assert_eq!(reloaded.exams()[0].length, "2 hours");
}

#[test]
fn test_rejected_draft_leaves_selection_untouched() {
    let mut storage = MemoryStore::default();
    let mut store = SelectionStore::load(&mut storage);
    let mut bad = draft();
    bad.time = "9 AM".to_string();

    let Err(SubmitError::Invalid(errors)) = submit_draft(&mut store, &strict(), &bad) else {
        panic!("draft with a bad time should be rejected");
    };
    assert_eq!(errors.get(ExamField::Time), TIME_MESSAGE);
    assert!(store.is_empty());

    submit_draft(&mut store, &strict(), &draft()).unwrap();
    let Err(SubmitError::Invalid(errors)) = submit_draft(&mut store, &strict(), &draft()) else {
        panic!("duplicate draft should be rejected");
    };
    assert_eq!(errors.get(ExamField::Section), DUPLICATE_MESSAGE);
    assert_eq!(store.len(), 1);
}
