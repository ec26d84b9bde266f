use crate::classifier::Classified;
use crate::emotion::Emotion;
use crate::journal_entry::JournalEntry;
use crate::mood_history::{mood_history, MoodPoint};
use crate::store::{EntryStore, StoreError};
use chrono::Utc;
use tracing::{error, info, warn};

#[derive(Debug, thiserror::Error)]
pub enum JournalError {
    #[error("Please write something in your journal first!")]
    EmptyEntry,
    #[error("Still analyzing the last entry")]
    AnalysisInFlight,
    #[error("No more entry ids are available")]
    IdsExhausted,
    #[error("Could not save the journal: {0}")]
    Storage(#[from] StoreError),
}

/// Session owner of the entry collection. Every append is followed by a full
/// write through the store.
pub struct JournalState {
    entries: Vec<JournalEntry>,
    last_id: u64,
    store: Box<dyn EntryStore>,
}

impl JournalState {
    pub fn new(store: Box<dyn EntryStore>) -> Self {
        JournalState {
            entries: Vec::new(),
            last_id: 0,
            store,
        }
    }

    /// Loads the stored collection. A stored value that cannot be read counts as
    /// no entries and is set aside so the next append does not overwrite it.
    pub fn open(store: Box<dyn EntryStore>) -> Self {
        let mut state = JournalState::new(store);
        match state.store.load() {
            Ok(entries) => {
                info!(count = entries.len(), "journal loaded");
                state.last_id = entries
                    .iter()
                    .filter_map(JournalEntry::numeric_id)
                    .max()
                    .unwrap_or(0);
                state.entries = entries;
            }
            Err(e) => {
                warn!(error = %e, "stored journal unreadable, starting empty");
                match state.store.set_aside() {
                    Ok(Some(backup)) => {
                        warn!(backup = %backup.display(), "unreadable journal moved aside")
                    }
                    Ok(None) => {}
                    Err(e) => error!(error = %e, "could not move the unreadable journal aside"),
                }
            }
        }
        state
    }

    /// Rejects empty or whitespace-only text.
    pub fn validate(text: &str) -> Result<(), JournalError> {
        if text.trim().is_empty() {
            return Err(JournalError::EmptyEntry);
        }
        Ok(())
    }

    /// Validates, classifies and records `text` in one step.
    pub fn submit(&mut self, text: &str) -> Result<&JournalEntry, JournalError> {
        Self::validate(text)?;
        self.record(Classified::new(text.to_string()))
    }

    /// Appends an entry for a classified text and persists the collection.
    pub fn record(&mut self, classified: Classified) -> Result<&JournalEntry, JournalError> {
        Self::validate(classified.text())?;

        let now = Utc::now();
        let id = self.next_id(now.timestamp_millis().max(0) as u64)?;
        let entry = JournalEntry::new(id, classified, now);
        info!(
            id = %entry.id,
            emotion = %entry.emotion,
            confidence = entry.confidence,
            "journal entry recorded"
        );
        let index = self.entries.len();
        self.entries.push(entry);

        if let Err(e) = self.store.save(&self.entries) {
            error!(error = %e, "failed to persist journal");
            return Err(e.into());
        }

        Ok(&self.entries[index])
    }

    fn next_id(&mut self, millis: u64) -> Result<u64, JournalError> {
        let after_last = self
            .last_id
            .checked_add(1)
            .ok_or(JournalError::IdsExhausted)?;
        let id = millis.max(after_last);
        self.last_id = id;
        Ok(id)
    }

    pub fn all(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn latest(&self) -> Option<&JournalEntry> {
        self.entries.last()
    }

    /// Emotion of the most recent entry; neutral before the first one.
    pub fn current_mood(&self) -> Emotion {
        self.latest().map(|e| e.emotion).unwrap_or_default()
    }

    pub fn mood_history(&self) -> Vec<MoodPoint> {
        mood_history(&self.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::classify;
    use crate::store::memory::MemoryStore;

    fn state_with(store: &MemoryStore) -> JournalState {
        JournalState::open(Box::new(store.clone()))
    }

    #[test]
    fn empty_and_whitespace_text_is_rejected_without_saving() {
        let store = MemoryStore::default();
        let mut journal = state_with(&store);

        for text in ["", "   ", "\n\t  \n"] {
            assert!(matches!(journal.submit(text), Err(JournalError::EmptyEntry)));
        }

        assert!(journal.is_empty());
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn submit_classifies_and_persists_the_whole_collection() {
        let store = MemoryStore::default();
        let mut journal = state_with(&store);

        let entry = journal.submit("I feel lonely").unwrap().clone();
        assert_eq!(entry.emotion, Emotion::Sad);
        assert_eq!(entry.text, "I feel lonely");
        let analysis = classify(&entry.text);
        assert_eq!(
            (entry.emotion, entry.confidence),
            (analysis.emotion, analysis.confidence)
        );

        journal.submit("so much fun today").unwrap();

        assert_eq!(store.save_count(), 2);
        let saved = store.last_save().unwrap();
        assert_eq!(saved.len(), 2);
        assert_eq!(saved, journal.all());
    }

    #[test]
    fn current_mood_follows_the_latest_entry() {
        let store = MemoryStore::default();
        let mut journal = state_with(&store);
        assert_eq!(journal.current_mood(), Emotion::Neutral);

        journal.submit("that was so unfair").unwrap();
        assert_eq!(journal.current_mood(), Emotion::Angry);

        journal.submit("we had pizza").unwrap();
        assert_eq!(journal.current_mood(), Emotion::Neutral);
    }

    #[test]
    fn ids_strictly_increase_within_a_burst() {
        let store = MemoryStore::default();
        let mut journal = state_with(&store);
        for i in 0..20 {
            journal.submit(&format!("entry {i}")).unwrap();
        }
        let ids: Vec<u64> = journal.all().iter().filter_map(JournalEntry::numeric_id).collect();
        assert_eq!(ids.len(), 20);
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn new_ids_continue_past_loaded_ones() {
        let far_future = u64::MAX / 2;
        let store = MemoryStore {
            initial: vec![JournalEntry::new(
                far_future,
                Classified::new("good".into()),
                Utc::now(),
            )],
            ..MemoryStore::default()
        };
        let mut journal = state_with(&store);
        assert_eq!(journal.current_mood(), Emotion::Happy);

        let id = journal.submit("hello").unwrap().numeric_id().unwrap();
        assert_eq!(id, far_future + 1);
    }

    #[test]
    fn exhausted_ids_are_an_error_not_a_wraparound() {
        let store = MemoryStore {
            initial: vec![JournalEntry::new(
                u64::MAX,
                Classified::new("good".into()),
                Utc::now(),
            )],
            ..MemoryStore::default()
        };
        let mut journal = state_with(&store);

        assert!(matches!(
            journal.submit("hello"),
            Err(JournalError::IdsExhausted)
        ));
        assert_eq!(journal.len(), 1);
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn recorded_entries_always_match_their_classification() {
        let store = MemoryStore::default();
        let mut journal = state_with(&store);
        let texts = [
            "I feel happy",
            "so lonely and tired",
            "unfair!",
            "lunch",
            "happy but mad",
        ];
        for text in texts {
            journal.record(Classified::new(text.to_string())).unwrap();
        }

        for entry in store.last_save().unwrap() {
            let analysis = classify(&entry.text);
            assert_eq!(
                (entry.emotion, entry.confidence),
                (analysis.emotion, analysis.confidence)
            );
        }
    }

    #[test]
    fn unreadable_journal_is_set_aside_before_the_next_save() {
        let store = MemoryStore {
            fail_loads: true,
            ..MemoryStore::default()
        };
        let mut journal = state_with(&store);
        assert!(journal.is_empty());
        assert_eq!(store.set_aside_count(), 1);

        journal.submit("good").unwrap();
        assert_eq!(store.save_count(), 1);
    }

    #[test]
    fn save_failure_is_reported_but_entry_is_kept() {
        let store = MemoryStore {
            fail_saves: true,
            ..MemoryStore::default()
        };
        let mut journal = state_with(&store);

        assert!(matches!(
            journal.submit("awesome"),
            Err(JournalError::Storage(_))
        ));
        assert_eq!(journal.len(), 1);
    }

    #[test]
    fn mood_history_has_one_point_per_entry() {
        let store = MemoryStore::default();
        let mut journal = state_with(&store);
        let texts = ["happy", "sad", "mad", "meh", "happy again"];
        for text in texts {
            journal.submit(text).unwrap();
        }

        let history = journal.mood_history();
        assert_eq!(history.len(), texts.len());
        let emotions: Vec<Emotion> = history.iter().map(|p| p.emotion).collect();
        assert_eq!(
            emotions,
            vec![
                Emotion::Happy,
                Emotion::Sad,
                Emotion::Angry,
                Emotion::Neutral,
                Emotion::Happy
            ]
        );
    }
}
