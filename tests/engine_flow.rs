//! End-to-end engine flows through [`DiaryClient`] with an in-memory store.
//!
//! These tests exercise whole round trips: an event goes in, store calls run,
//! responses feed back, and the resulting state and view model are checked.
//! The store keeps a shared handle so tests can flip it offline or mutate
//! records behind the engine's back.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use whispernote_core::{
    DiaryClient, DiaryError, Entry, EntryPatch, EntryStore, Event, FilterMode, Mood, NewEntry,
    NoticeKind, Result,
};

#[derive(Default)]
struct MemoryInner {
    entries: HashMap<String, Entry>,
    next_id: u64,
    offline: bool,
    /// Names of store methods invoked, in order.
    calls: Vec<&'static str>,
}

/// In-memory store with a shared handle for test orchestration.
#[derive(Clone, Default)]
struct MemoryStore {
    inner: Arc<Mutex<MemoryInner>>,
}

impl MemoryStore {
    fn set_offline(&self, offline: bool) {
        self.inner.lock().unwrap().offline = offline;
    }

    fn calls(&self) -> Vec<&'static str> {
        self.inner.lock().unwrap().calls.clone()
    }

    fn stored(&self, id: &str) -> Option<Entry> {
        self.inner.lock().unwrap().entries.get(id).cloned()
    }

    /// Removes an entry without going through the engine, simulating another
    /// device deleting it.
    fn remove_behind_the_scenes(&self, id: &str) {
        self.inner.lock().unwrap().entries.remove(id);
    }
}

impl EntryStore for MemoryStore {
    fn fetch_entries(&self, owner_id: &str) -> Result<Vec<Entry>> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push("fetch");
        if inner.offline {
            return Err(DiaryError::StoreUnavailable("offline".to_string()));
        }
        let mut entries: Vec<Entry> = inner
            .entries
            .values()
            .filter(|e| e.owner_id == owner_id)
            .cloned()
            .collect();
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| b.id.cmp(&a.id)));
        Ok(entries)
    }

    fn create_entry(&mut self, owner_id: &str, draft: &NewEntry) -> Result<Entry> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push("create");
        if inner.offline {
            return Err(DiaryError::StoreUnavailable("offline".to_string()));
        }
        inner.next_id += 1;
        let now = i64::try_from(inner.next_id).unwrap() * 1_000;
        let entry = Entry {
            id: format!("entry-{:04}", inner.next_id),
            owner_id: owner_id.to_string(),
            title: draft.title.clone(),
            content: draft.content.clone(),
            mood: draft.mood,
            tags: draft.tags.clone(),
            is_private: draft.is_private,
            bookmarked: false,
            created_at: Some(now),
            updated_at: Some(now),
        };
        inner.entries.insert(entry.id.clone(), entry.clone());
        Ok(entry)
    }

    fn update_entry(&mut self, id: &str, patch: &EntryPatch) -> Result<Entry> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push("update");
        if inner.offline {
            return Err(DiaryError::StoreUnavailable("offline".to_string()));
        }
        let entry = inner
            .entries
            .get_mut(id)
            .ok_or_else(|| DiaryError::NotFound(id.to_string()))?;
        patch.apply(entry);
        Ok(entry.clone())
    }

    fn delete_entry(&mut self, id: &str) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push("delete");
        if inner.offline {
            return Err(DiaryError::StoreUnavailable("offline".to_string()));
        }
        inner
            .entries
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| DiaryError::NotFound(id.to_string()))
    }
}

fn client_with_entries(titles: &[(&str, &str)]) -> (DiaryClient<MemoryStore>, MemoryStore) {
    let store = MemoryStore::default();
    let mut client = DiaryClient::new(store.clone());
    client.sign_in("user-1").unwrap();
    for (title, content) in titles {
        client
            .dispatch(Event::TitleChanged((*title).to_string()))
            .unwrap();
        client
            .dispatch(Event::ContentChanged((*content).to_string()))
            .unwrap();
        client.dispatch(Event::SubmitEntry).unwrap();
    }
    (client, store)
}

#[test]
fn created_entries_list_newest_first() {
    let (client, _store) = client_with_entries(&[
        ("Monday", "coffee"),
        ("Tuesday", "rain"),
        ("Wednesday", "sun"),
    ]);

    let vm = client.viewmodel();
    let titles: Vec<&str> = vm.items.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, vec!["Wednesday", "Tuesday", "Monday"]);
    assert_eq!(vm.total_entries, 3);
}

#[test]
fn search_matches_title_content_and_tags_case_insensitively() {
    let (mut client, _store) = client_with_entries(&[("Groceries", "bread and milk")]);
    client
        .dispatch(Event::TitleChanged("Trip".to_string()))
        .unwrap();
    client
        .dispatch(Event::ContentChanged("We walked along the Seine".to_string()))
        .unwrap();
    client
        .dispatch(Event::TagAdded("Paris".to_string()))
        .unwrap();
    client.dispatch(Event::SubmitEntry).unwrap();

    client
        .dispatch(Event::SearchChanged("paris".to_string()))
        .unwrap();
    let vm = client.viewmodel();
    assert_eq!(vm.items.len(), 1);
    assert_eq!(vm.items[0].title, "Trip");

    // Content matches too, mixed case.
    client
        .dispatch(Event::SearchChanged("SEINE".to_string()))
        .unwrap();
    assert_eq!(client.viewmodel().items.len(), 1);

    client.dispatch(Event::ClearSearch).unwrap();
    assert_eq!(client.viewmodel().items.len(), 2);
}

#[test]
fn bookmark_filter_tracks_toggles() {
    let (mut client, _store) = client_with_entries(&[("A", "a"), ("B", "b")]);
    let id = client.viewmodel().items[1].id.clone();

    client
        .dispatch(Event::FilterChanged(FilterMode::Bookmarked))
        .unwrap();
    assert!(client.viewmodel().items.is_empty());

    client.dispatch(Event::ToggleBookmark(id.clone())).unwrap();
    let vm = client.viewmodel();
    assert_eq!(vm.items.len(), 1);
    assert!(vm.items[0].is_bookmarked);

    // Toggling back empties the filter again.
    client.dispatch(Event::ToggleBookmark(id)).unwrap();
    assert!(client.viewmodel().items.is_empty());
}

#[test]
fn double_toggle_restores_the_stored_flag() {
    let (mut client, store) = client_with_entries(&[("A", "a")]);
    let id = client.viewmodel().items[0].id.clone();

    client.dispatch(Event::ToggleBookmark(id.clone())).unwrap();
    client.dispatch(Event::ToggleBookmark(id.clone())).unwrap();

    assert!(!client.state().entry(&id).unwrap().bookmarked);
    assert!(!store.stored(&id).unwrap().bookmarked);
}

#[test]
fn invalid_form_never_reaches_the_store() {
    let store = MemoryStore::default();
    let mut client = DiaryClient::new(store.clone());
    client.sign_in("user-1").unwrap();
    let calls_before = store.calls().len();

    client
        .dispatch(Event::ContentChanged("body without a title".to_string()))
        .unwrap();
    client.dispatch(Event::SubmitEntry).unwrap();

    assert_eq!(store.calls().len(), calls_before);
    let vm = client.viewmodel();
    let notice = vm.notice.unwrap();
    assert_eq!(notice.kind, NoticeKind::Error);
    assert!(notice.message.contains("title"));
    // Typed content survives so the user can fix the title.
    assert_eq!(vm.composer.content, "body without a title");
}

#[test]
fn edit_save_preserves_the_bookmark_flag() {
    let (mut client, store) = client_with_entries(&[("Draft", "first version")]);
    let id = client.viewmodel().items[0].id.clone();
    client.dispatch(Event::ToggleBookmark(id.clone())).unwrap();

    client.dispatch(Event::EditEntry(id.clone())).unwrap();
    client
        .dispatch(Event::ContentChanged("second version".to_string()))
        .unwrap();
    client.dispatch(Event::MoodChanged(Mood::Happy)).unwrap();
    client.dispatch(Event::SubmitEntry).unwrap();

    let stored = store.stored(&id).unwrap();
    assert_eq!(stored.content, "second version");
    assert_eq!(stored.mood, Mood::Happy);
    assert!(stored.bookmarked, "edit must not clear the bookmark");
    assert!(client.state().bookmarked.contains(&id));

    // Save resets the form back to new-entry mode.
    let vm = client.viewmodel();
    assert!(!vm.composer.is_editing);
    assert!(vm.composer.title.is_empty());
    assert_eq!(vm.composer.mood, Mood::Neutral);
}

#[test]
fn deleting_the_entry_being_edited_resets_the_form() {
    let (mut client, store) = client_with_entries(&[("Doomed", "soon gone")]);
    let id = client.viewmodel().items[0].id.clone();

    client.dispatch(Event::EditEntry(id.clone())).unwrap();
    client.dispatch(Event::RequestDelete(id.clone())).unwrap();
    assert!(client.viewmodel().items[0].is_pending_delete);

    client.dispatch(Event::ConfirmDelete(id.clone())).unwrap();
    assert!(store.stored(&id).is_none());
    let vm = client.viewmodel();
    assert!(vm.items.is_empty());
    assert!(!vm.composer.is_editing);
    assert_eq!(vm.empty_state.unwrap().message, "No entries yet");
}

#[test]
fn cancel_delete_disarms_the_gate() {
    let (mut client, store) = client_with_entries(&[("Kept", "still here")]);
    let id = client.viewmodel().items[0].id.clone();

    client.dispatch(Event::RequestDelete(id.clone())).unwrap();
    client.dispatch(Event::CancelDelete).unwrap();
    client.dispatch(Event::ConfirmDelete(id.clone())).unwrap();

    assert!(store.stored(&id).is_some());
    assert_eq!(client.viewmodel().items.len(), 1);
}

#[test]
fn offline_bookmark_toggle_rolls_back() {
    let (mut client, store) = client_with_entries(&[("A", "a")]);
    let id = client.viewmodel().items[0].id.clone();

    store.set_offline(true);
    client.dispatch(Event::ToggleBookmark(id.clone())).unwrap();

    assert!(!client.state().entry(&id).unwrap().bookmarked);
    assert!(!client.state().bookmarked.contains(&id));
    assert!(client.state().pending_bookmarks.is_empty());
    assert_eq!(
        client.viewmodel().notice.unwrap().kind,
        NoticeKind::Error
    );
}

#[test]
fn offline_save_keeps_the_form_for_retry() {
    let (mut client, store) = client_with_entries(&[]);
    client
        .dispatch(Event::TitleChanged("Unsent".to_string()))
        .unwrap();
    client
        .dispatch(Event::ContentChanged("try again later".to_string()))
        .unwrap();

    store.set_offline(true);
    client.dispatch(Event::SubmitEntry).unwrap();

    let vm = client.viewmodel();
    assert_eq!(vm.notice.unwrap().kind, NoticeKind::Error);
    assert_eq!(vm.composer.title, "Unsent");
    assert!(vm.items.is_empty());

    // Back online, the retry succeeds from the preserved form.
    store.set_offline(false);
    client.dispatch(Event::SubmitEntry).unwrap();
    assert_eq!(client.viewmodel().items.len(), 1);
}

#[test]
fn editing_a_vanished_entry_resyncs_the_cache() {
    let (mut client, store) = client_with_entries(&[("Gone", "deleted elsewhere"), ("Kept", "x")]);
    let gone = client.viewmodel().items[1].id.clone();

    client.dispatch(Event::EditEntry(gone.clone())).unwrap();
    store.remove_behind_the_scenes(&gone);
    client
        .dispatch(Event::TitleChanged("Gone, edited".to_string()))
        .unwrap();
    client.dispatch(Event::SubmitEntry).unwrap();

    // The failed update triggered a refetch that drops the vanished entry.
    let vm = client.viewmodel();
    assert_eq!(vm.items.len(), 1);
    assert_eq!(vm.items[0].title, "Kept");
    assert_eq!(vm.notice.unwrap().kind, NoticeKind::Error);

    // The form falls back to a new-entry draft with the text intact, so the
    // next submit creates instead of looping on the vanished id.
    assert!(!vm.composer.is_editing);
    assert_eq!(vm.composer.title, "Gone, edited");
    client.dispatch(Event::SubmitEntry).unwrap();
    assert_eq!(client.viewmodel().items.len(), 2);
}

#[test]
fn sign_out_stops_store_traffic_and_clears_state() {
    let (mut client, store) = client_with_entries(&[("Private thoughts", "secret")]);

    let actions = client.sign_out().unwrap();
    assert_eq!(actions.len(), 1, "shell receives the login redirect");

    assert!(client.state().entries.is_empty());
    let calls_before = store.calls().len();
    client
        .dispatch(Event::TitleChanged("ghost".to_string()))
        .unwrap();
    client.dispatch(Event::SubmitEntry).unwrap();
    assert_eq!(store.calls().len(), calls_before);
    assert!(client.viewmodel().notice.is_none());
}

#[test]
fn mood_filter_is_independent_of_the_form_mood() {
    let (mut client, _store) = client_with_entries(&[]);
    client
        .dispatch(Event::TitleChanged("Good day".to_string()))
        .unwrap();
    client
        .dispatch(Event::ContentChanged("sunshine".to_string()))
        .unwrap();
    client.dispatch(Event::MoodChanged(Mood::Happy)).unwrap();
    client.dispatch(Event::SubmitEntry).unwrap();

    client
        .dispatch(Event::FilterChanged(FilterMode::Mood(Mood::Happy)))
        .unwrap();
    assert_eq!(client.viewmodel().items.len(), 1);

    // Picking a different mood in the form does not move the filter.
    client.dispatch(Event::MoodChanged(Mood::Sad)).unwrap();
    let vm = client.viewmodel();
    assert_eq!(vm.items.len(), 1);
    assert_eq!(vm.filter_mode, FilterMode::Mood(Mood::Happy));
}

#[test]
fn expanded_entry_shows_full_content() {
    let store = MemoryStore::default();
    let mut client = DiaryClient::with_excerpt_chars(store.clone(), 10);
    client.sign_in("user-1").unwrap();
    client
        .dispatch(Event::TitleChanged("Long".to_string()))
        .unwrap();
    client
        .dispatch(Event::ContentChanged("a".repeat(80)))
        .unwrap();
    client.dispatch(Event::SubmitEntry).unwrap();
    let id = client.viewmodel().items[0].id.clone();

    assert_eq!(client.viewmodel().items[0].excerpt.chars().count(), 13);

    client.dispatch(Event::ToggleExpand(id.clone())).unwrap();
    let vm = client.viewmodel();
    assert!(vm.items[0].is_expanded);
    assert_eq!(vm.items[0].excerpt.chars().count(), 80);

    client.dispatch(Event::ToggleExpand(id)).unwrap();
    assert!(!client.viewmodel().items[0].is_expanded);
}

#[test]
fn narrow_filter_reports_a_distinct_empty_state() {
    let (mut client, _store) = client_with_entries(&[("A", "a")]);
    client
        .dispatch(Event::SearchChanged("no such words".to_string()))
        .unwrap();
    let vm = client.viewmodel();
    assert_eq!(vm.total_entries, 1);
    assert_eq!(vm.empty_state.unwrap().message, "No matching entries");
}
