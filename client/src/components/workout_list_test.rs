use std::cell::RefCell;

use super::*;
use chrono::NaiveDate;

fn workout(exercise: &str, day: u32) -> Workout {
    Workout {
        id: Uuid::new_v4(),
        exercise: exercise.to_owned(),
        duration: 45,
        calories: 380,
        date: NaiveDate::from_ymd_opt(2024, 4, day).unwrap(),
        user_id: Uuid::new_v4(),
    }
}

#[test]
fn duration_label_in_minutes() {
    assert_eq!(duration_label(&workout("Cycling", 9)), "45 min");
}

#[test]
fn calories_label_suffix() {
    assert_eq!(calories_label(&workout("Cycling", 9)), "380 cal");
}

// =============================================================
// list_view
// =============================================================

#[test]
fn list_view_empty_collection_is_placeholder_only() {
    assert_eq!(list_view(&[]), ListView::Empty);
}

#[test]
fn list_view_one_row_per_record_in_given_order() {
    // Deliberately not date-sorted: the list must not reorder.
    let rows = vec![workout("Yoga", 2), workout("Running", 9), workout("Swim", 5)];
    let ListView::Rows(items) = list_view(&rows) else {
        panic!("expected rows");
    };
    assert_eq!(items.len(), 3);
    for (item, record) in items.iter().zip(&rows) {
        assert_eq!(item.id, record.id);
        assert_eq!(&item.workout, record);
    }
}

// =============================================================
// dispatch_row_action
// =============================================================

#[test]
fn edit_reports_the_full_record_only_to_on_edit() {
    let record = workout("Running", 9);
    let item = RowItem { id: record.id, workout: record.clone() };
    let edited = RefCell::new(None);
    let deleted = RefCell::new(None);

    dispatch_row_action(&item, RowAction::Edit, |w| *edited.borrow_mut() = Some(w), |id| *deleted.borrow_mut() = Some(id));

    assert_eq!(edited.into_inner(), Some(record));
    assert_eq!(deleted.into_inner(), None);
}

#[test]
fn delete_reports_the_row_id_only_to_on_delete() {
    let record = workout("Running", 9);
    let item = RowItem { id: record.id, workout: record.clone() };
    let edited = RefCell::new(None);
    let deleted = RefCell::new(None);

    dispatch_row_action(&item, RowAction::Delete, |w| *edited.borrow_mut() = Some(w), |id| *deleted.borrow_mut() = Some(id));

    assert_eq!(deleted.into_inner(), Some(record.id));
    assert_eq!(edited.into_inner(), None);
}
