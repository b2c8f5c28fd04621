use calendar_core::{
    EventCandidate, EventForm, EventId, EventPatch, EventRepository, EventService,
    EventServiceError, EventValidationError, InMemoryEventStore, SequentialEventIdGenerator,
};
use chrono::{NaiveDate, NaiveDateTime};

type TestService = EventService<InMemoryEventStore<SequentialEventIdGenerator>>;

fn service() -> TestService {
    EventService::new(InMemoryEventStore::with_id_generator(
        SequentialEventIdGenerator::new(),
    ))
}

fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

fn candidate(title: &str, start: NaiveDateTime, end: NaiveDateTime) -> EventCandidate {
    EventCandidate {
        title: Some(title.to_string()),
        start: Some(start),
        end: Some(end),
        ..EventCandidate::default()
    }
}

#[test]
fn create_event_validates_before_store_write() {
    let mut service = service();

    let err = service
        .create_event(candidate("", at(19, 10, 0), at(19, 9, 0)))
        .unwrap_err();

    assert_eq!(
        err.validation_messages(),
        ["Title is required", "End date must be after start date"]
    );
    assert!(service.list_events().is_empty());
}

#[test]
fn create_event_stores_valid_candidate() {
    let mut service = service();

    let created = service
        .create_event(candidate("Standup", at(19, 9, 0), at(19, 9, 30)))
        .unwrap();

    assert_eq!(created.id.as_str(), "event_1");
    assert_eq!(service.get_event(&created.id), Some(&created));
    assert_eq!(service.events_on_date(at(19, 0, 0).date()), vec![&created]);
}

#[test]
fn update_event_replaces_fields_and_keeps_id() {
    let mut service = service();
    let mut original = candidate("Standup", at(19, 9, 0), at(19, 9, 30));
    original.category = Some("Work".to_string());
    let created = service.create_event(original).unwrap();

    let updated = service
        .update_event(&created.id, candidate("Retro", at(20, 14, 0), at(20, 15, 0)))
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "Retro");
    assert_eq!(updated.category, None);
    assert_eq!(service.list_events().len(), 1);
}

#[test]
fn update_event_unknown_id_is_not_found() {
    let mut service = service();
    let missing = EventId::new("event_404");

    let err = service
        .update_event(&missing, candidate("Retro", at(20, 14, 0), at(20, 15, 0)))
        .unwrap_err();

    assert_eq!(err, EventServiceError::EventNotFound(missing));
    assert_eq!(err.to_string(), "event not found: event_404");
}

#[test]
fn patch_event_rejects_invalid_merge_without_writing() {
    let mut service = service();
    let created = service
        .create_event(candidate("Standup", at(19, 9, 0), at(19, 9, 30)))
        .unwrap();

    let err = service
        .patch_event(&created.id, &EventPatch::default().end(at(19, 8, 0)))
        .unwrap_err();

    assert!(matches!(
        err,
        EventServiceError::Validation(ref errors)
            if errors.as_slice() == [EventValidationError::EndBeforeStart {
                start: at(19, 9, 0),
                end: at(19, 8, 0),
            }]
    ));
    assert_eq!(service.get_event(&created.id), Some(&created));
}

#[test]
fn patch_event_merges_single_field() {
    let mut service = service();
    let created = service
        .create_event(candidate("Standup", at(19, 9, 0), at(19, 9, 30)))
        .unwrap();

    let patched = service
        .patch_event(
            &created.id,
            &EventPatch::default().color(Some("#8b5cf6".to_string())),
        )
        .unwrap();

    assert_eq!(patched.color.as_deref(), Some("#8b5cf6"));
    assert_eq!(patched.title, created.title);
    assert_eq!(patched.start, created.start);
}

#[test]
fn delete_event_reports_missing_ids() {
    let mut service = service();
    let created = service
        .create_event(candidate("Standup", at(19, 9, 0), at(19, 9, 30)))
        .unwrap();

    assert_eq!(service.delete_event(&created.id).unwrap(), created);
    assert_eq!(
        service.delete_event(&created.id).unwrap_err(),
        EventServiceError::EventNotFound(created.id.clone())
    );
    assert!(service.into_repo().is_empty());
}

#[test]
fn save_form_creates_then_updates() {
    let mut service = service();
    let mut form = EventForm::for_new_event(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());
    form.title = "  Planning  ".to_string();

    let created = service.save_form(&form, None).unwrap();
    assert_eq!(created.title, "Planning");
    assert_eq!(created.start, at(19, 9, 0));
    assert_eq!(created.end, at(19, 10, 0));

    let mut edit = EventForm::from_event(&created);
    edit.end = "2026-10-19T11:30".to_string();
    let updated = service.save_form(&edit, Some(&created.id)).unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.end, at(19, 11, 30));
    assert_eq!(service.list_events().len(), 1);
}

#[test]
fn conflicts_for_lists_overlapping_stored_events() {
    let mut service = service();
    let first = service
        .create_event(candidate("Standup", at(19, 9, 0), at(19, 10, 30)))
        .unwrap();
    service
        .create_event(candidate("Lunch", at(19, 12, 0), at(19, 13, 0)))
        .unwrap();
    let touching = service
        .create_event(candidate("Focus", at(19, 10, 30), at(19, 11, 0)))
        .unwrap();

    let conflicts = service.conflicts_for(&first);
    assert!(conflicts.is_empty());

    let mut moved = touching.clone();
    moved.start = at(19, 10, 0);
    assert_eq!(service.conflicts_for(&moved), vec![&first]);
}
