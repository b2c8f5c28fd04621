use calendar_core::{
    EventDraft, EventId, EventPatch, EventRepository, InMemoryEventStore,
    SequentialEventIdGenerator,
};
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::HashSet;

fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

fn standup() -> EventDraft {
    let mut draft = EventDraft::new("Standup", at(19, 9, 0), at(19, 9, 30));
    draft.description = Some("daily sync".to_string());
    draft.color = Some("#10b981".to_string());
    draft.category = Some("Work".to_string());
    draft
}

fn sequential_store() -> InMemoryEventStore<SequentialEventIdGenerator> {
    InMemoryEventStore::with_id_generator(SequentialEventIdGenerator::new())
}

#[test]
fn add_then_get_returns_same_fields_with_generated_id() {
    let mut store = InMemoryEventStore::new();
    let draft = standup();

    let stored = store.add_event(draft.clone());

    assert!(!stored.id.as_str().is_empty());
    let loaded = store.get_event(&stored.id).unwrap();
    assert_eq!(loaded, &stored);
    assert_eq!(loaded.to_draft(), draft);
}

#[test]
fn add_appends_in_insertion_order_with_unique_ids() {
    let mut store = sequential_store();

    let first = store.add_event(standup());
    let second = store.add_event(EventDraft::new("Lunch", at(19, 12, 0), at(19, 13, 0)));
    let third = store.add_event(EventDraft::new("Review", at(18, 15, 0), at(18, 16, 0)));

    let titles: Vec<_> = store.list_events().iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, ["Standup", "Lunch", "Review"]);
    assert_eq!(first.id.as_str(), "event_1");
    assert_eq!(second.id.as_str(), "event_2");
    assert_eq!(third.id.as_str(), "event_3");
    assert_eq!(store.len(), 3);
}

#[test]
fn ids_stay_unique_after_deletes() {
    let mut store = sequential_store();
    let first = store.add_event(standup());
    store.delete_event(&first.id);

    let second = store.add_event(standup());

    assert_ne!(first.id, second.id);
    let ids: HashSet<_> = (0..50)
        .map(|_| store.add_event(standup()).id)
        .chain(std::iter::once(second.id))
        .collect();
    assert_eq!(ids.len(), 51);
}

#[test]
fn update_changes_only_patched_field() {
    let mut store = sequential_store();
    let stored = store.add_event(standup());

    let applied = store.update_event(&stored.id, &EventPatch::default().title("Team standup"));

    assert!(applied);
    let loaded = store.get_event(&stored.id).unwrap();
    assert_eq!(loaded.title, "Team standup");
    assert_eq!(loaded.id, stored.id);
    assert_eq!(loaded.description, stored.description);
    assert_eq!(loaded.start, stored.start);
    assert_eq!(loaded.end, stored.end);
    assert_eq!(loaded.color, stored.color);
    assert_eq!(loaded.category, stored.category);
}

#[test]
fn update_can_clear_optional_fields() {
    let mut store = sequential_store();
    let stored = store.add_event(standup());

    store.update_event(
        &stored.id,
        &EventPatch::default().category(None).end(at(19, 10, 0)),
    );

    let loaded = store.get_event(&stored.id).unwrap();
    assert_eq!(loaded.category, None);
    assert_eq!(loaded.end, at(19, 10, 0));
    assert_eq!(loaded.color.as_deref(), Some("#10b981"));
}

#[test]
fn update_unknown_id_is_noop() {
    let mut store = sequential_store();
    store.add_event(standup());
    let before = store.list_events().to_vec();

    let applied = store.update_event(
        &EventId::new("event_missing"),
        &EventPatch::default().title("ghost"),
    );

    assert!(!applied);
    assert_eq!(store.list_events(), before.as_slice());
}

#[test]
fn delete_removes_exactly_one_event() {
    let mut store = sequential_store();
    let first = store.add_event(standup());
    let second = store.add_event(EventDraft::new("Lunch", at(19, 12, 0), at(19, 13, 0)));

    let removed = store.delete_event(&first.id).unwrap();

    assert_eq!(removed, first);
    assert_eq!(store.len(), 1);
    assert!(store.get_event(&first.id).is_none());
    assert_eq!(store.get_event(&second.id), Some(&second));
}

#[test]
fn delete_unknown_id_is_noop() {
    let mut store = sequential_store();
    store.add_event(standup());
    let before = store.list_events().to_vec();

    assert!(store.delete_event(&EventId::new("event_missing")).is_none());
    assert_eq!(store.list_events(), before.as_slice());
}

#[test]
fn store_accepts_reversed_window_without_validation() {
    let mut store = InMemoryEventStore::new();

    let stored = store.add_event(EventDraft::new("Backwards", at(19, 11, 0), at(19, 10, 0)));

    assert!(stored.start > stored.end);
    assert!(store.get_event(&stored.id).is_some());
}

#[test]
fn stores_are_independent() {
    let mut first = sequential_store();
    let second = sequential_store();

    first.add_event(standup());

    assert_eq!(first.len(), 1);
    assert!(second.is_empty());
}

#[test]
fn calendar_event_serializes_with_plain_string_id() {
    let mut store = sequential_store();
    let stored = store.add_event(standup());

    let json = serde_json::to_value(&stored).unwrap();
    assert_eq!(json["id"], "event_1");
    assert_eq!(json["title"], "Standup");
    assert_eq!(json["start"], "2026-10-19T09:00:00");
    assert_eq!(json["category"], "Work");

    let decoded: calendar_core::CalendarEvent = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, stored);
}
