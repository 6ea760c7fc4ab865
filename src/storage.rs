use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::StoreError;
use crate::model::{
    Bookmark, CreateBookmark, CreateVerseExplanation, CrossReference, DEFAULT_FONT_SIZE,
    DEFAULT_LAST_READ_BOOK, DEFAULT_LAST_READ_CHAPTER, UpdateUserSettings, UserSettings,
    VerseExplanation,
};

/// Process-local store for bookmarks, explanations and settings. Nothing
/// survives a restart.
pub struct MemStorage {
    bookmarks: Mutex<HashMap<String, Bookmark>>,
    explanations: Mutex<HashMap<String, VerseExplanation>>,
    settings: Mutex<HashMap<String, UserSettings>>,
}

fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

impl MemStorage {
    /// An empty store without seed explanations.
    pub fn empty() -> Self {
        Self {
            bookmarks: Mutex::new(HashMap::new()),
            explanations: Mutex::new(HashMap::new()),
            settings: Mutex::new(HashMap::new()),
        }
    }

    pub fn new() -> Result<Self, StoreError> {
        let storage = Self::empty();
        for explanation in default_explanations() {
            storage.create_verse_explanation(explanation)?;
        }
        Ok(storage)
    }

    pub fn list_bookmarks(&self, user_id: Option<&str>) -> Result<Vec<Bookmark>, StoreError> {
        let bookmarks = self.bookmarks.lock()?;
        let mut found: Vec<Bookmark> = bookmarks
            .values()
            .filter(|b| b.user_id.as_deref() == user_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(found)
    }

    pub fn create_bookmark(&self, input: CreateBookmark) -> Result<Bookmark, StoreError> {
        let bookmark = Bookmark {
            id: new_id(),
            user_id: input.user_id,
            book: input.book,
            chapter: input.chapter,
            verse: input.verse,
            text: input.text,
            created_at: chrono::Utc::now().to_rfc3339(),
        };
        self.bookmarks
            .lock()?
            .insert(bookmark.id.clone(), bookmark.clone());
        Ok(bookmark)
    }

    pub fn delete_bookmark(&self, id: &str) -> Result<bool, StoreError> {
        Ok(self.bookmarks.lock()?.remove(id).is_some())
    }

    pub fn get_verse_explanation(
        &self,
        book: &str,
        chapter: u32,
        verse: u32,
    ) -> Result<Option<VerseExplanation>, StoreError> {
        let explanations = self.explanations.lock()?;
        Ok(explanations
            .values()
            .find(|e| e.book == book && e.chapter == chapter && e.verse == verse)
            .cloned())
    }

    pub fn create_verse_explanation(
        &self,
        input: CreateVerseExplanation,
    ) -> Result<VerseExplanation, StoreError> {
        let explanation = VerseExplanation {
            id: new_id(),
            book: input.book,
            chapter: input.chapter,
            verse: input.verse,
            commentary: input.commentary,
            key_themes: input.key_themes,
            cross_references: input.cross_references,
        };
        self.explanations
            .lock()?
            .insert(explanation.id.clone(), explanation.clone());
        Ok(explanation)
    }

    pub fn get_user_settings(&self, user_id: &str) -> Result<Option<UserSettings>, StoreError> {
        let settings = self.settings.lock()?;
        Ok(settings.values().find(|s| s.user_id == user_id).cloned())
    }

    /// Merges `update` into the user's settings, creating them from defaults
    /// when the user has none yet.
    pub fn update_user_settings(
        &self,
        user_id: &str,
        update: UpdateUserSettings,
    ) -> Result<UserSettings, StoreError> {
        let mut settings = self.settings.lock()?;

        let mut current = match settings.values().find(|s| s.user_id == user_id) {
            Some(existing) => existing.clone(),
            None => UserSettings {
                id: new_id(),
                user_id: user_id.to_string(),
                font_size: DEFAULT_FONT_SIZE.to_string(),
                highlighted_verses: HashMap::new(),
                last_read_book: DEFAULT_LAST_READ_BOOK.to_string(),
                last_read_chapter: DEFAULT_LAST_READ_CHAPTER,
            },
        };

        if let Some(font_size) = update.font_size {
            current.font_size = font_size;
        }
        if let Some(highlighted) = update.highlighted_verses {
            current.highlighted_verses = highlighted;
        }
        if let Some(book) = update.last_read_book {
            current.last_read_book = book;
        }
        if let Some(chapter) = update.last_read_chapter {
            current.last_read_chapter = chapter;
        }

        settings.insert(current.id.clone(), current.clone());
        Ok(current)
    }
}

fn cross_reference(reference: &str, text: &str) -> CrossReference {
    CrossReference {
        reference: reference.to_string(),
        text: text.to_string(),
    }
}

fn themes(items: &[&str]) -> Option<Vec<String>> {
    Some(items.iter().map(|t| t.to_string()).collect())
}

fn default_explanations() -> Vec<CreateVerseExplanation> {
    vec![
        CreateVerseExplanation {
            book: "genesis".to_string(),
            chapter: 1,
            verse: 1,
            commentary: "This verse establishes God as the Creator of all things. The Hebrew word 'bara' means to create something from nothing, demonstrating God's supreme power and authority over all creation.".to_string(),
            key_themes: themes(&["Creation", "Divine Authority", "Beginning of Time"]),
            cross_references: Some(vec![
                cross_reference(
                    "John 1:1",
                    "In the beginning was the Word, and the Word was with God, and the Word was God.",
                ),
                cross_reference(
                    "Hebrews 11:3",
                    "Through faith we understand that the worlds were framed by the word of God...",
                ),
            ]),
        },
        CreateVerseExplanation {
            book: "genesis".to_string(),
            chapter: 1,
            verse: 3,
            commentary: "This verse marks the first recorded words of God in Scripture, demonstrating His supreme authority over creation. The phrase 'Let there be light' shows God's power to create through His spoken word alone. This light was distinct from the sun, moon, and stars, which were created on the fourth day, suggesting it was the primordial light of God's presence.".to_string(),
            key_themes: themes(&[
                "Divine authority and creative power",
                "The Word of God as creative force",
                "Light as symbol of God's presence and goodness",
                "Order emerging from chaos",
            ]),
            cross_references: Some(vec![
                cross_reference("John 1:1-5", "In the beginning was the Word..."),
                cross_reference(
                    "2 Corinthians 4:6",
                    "God who commanded light to shine out of darkness",
                ),
                cross_reference("Psalm 33:6", "By the word of the Lord were the heavens made"),
            ]),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bookmark(user_id: Option<&str>, verse: u32) -> CreateBookmark {
        CreateBookmark {
            user_id: user_id.map(str::to_string),
            book: "john".to_string(),
            chapter: 3,
            verse,
            text: "verse text".to_string(),
        }
    }

    #[test]
    fn seeds_default_explanations() {
        let storage = MemStorage::new().unwrap();
        let first = storage.get_verse_explanation("genesis", 1, 1).unwrap().unwrap();
        assert!(first.commentary.contains("Creator"));
        assert_eq!(first.cross_references.unwrap().len(), 2);

        let third = storage.get_verse_explanation("genesis", 1, 3).unwrap().unwrap();
        assert_eq!(third.key_themes.unwrap().len(), 4);

        assert!(storage.get_verse_explanation("genesis", 1, 2).unwrap().is_none());
    }

    #[test]
    fn bookmarks_are_filtered_by_user() {
        let storage = MemStorage::empty();
        storage.create_bookmark(bookmark(Some("alice"), 16)).unwrap();
        storage.create_bookmark(bookmark(Some("bob"), 17)).unwrap();
        storage.create_bookmark(bookmark(None, 18)).unwrap();

        let alice = storage.list_bookmarks(Some("alice")).unwrap();
        assert_eq!(alice.len(), 1);
        assert_eq!(alice[0].verse, 16);

        let anonymous = storage.list_bookmarks(None).unwrap();
        assert_eq!(anonymous.len(), 1);
        assert_eq!(anonymous[0].verse, 18);
    }

    #[test]
    fn bookmarks_with_same_timestamp_order_by_id() {
        let storage = MemStorage::empty();
        {
            let mut bookmarks = storage.bookmarks.lock().unwrap();
            for id in ["c", "a", "b"] {
                bookmarks.insert(
                    id.to_string(),
                    Bookmark {
                        id: id.to_string(),
                        user_id: None,
                        book: "john".to_string(),
                        chapter: 3,
                        verse: 16,
                        text: "verse text".to_string(),
                        created_at: "2026-01-01T00:00:00+00:00".to_string(),
                    },
                );
            }
        }

        let ids: Vec<String> = storage
            .list_bookmarks(None)
            .unwrap()
            .into_iter()
            .map(|b| b.id)
            .collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn delete_bookmark_reports_missing() {
        let storage = MemStorage::empty();
        let created = storage.create_bookmark(bookmark(None, 1)).unwrap();
        assert!(storage.delete_bookmark(&created.id).unwrap());
        assert!(!storage.delete_bookmark(&created.id).unwrap());
        assert!(storage.list_bookmarks(None).unwrap().is_empty());
    }

    #[test]
    fn settings_created_with_defaults_then_merged() {
        let storage = MemStorage::empty();
        assert!(storage.get_user_settings("alice").unwrap().is_none());

        let created = storage
            .update_user_settings(
                "alice",
                UpdateUserSettings {
                    font_size: Some("text-xl".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(created.font_size, "text-xl");
        assert_eq!(created.last_read_book, "genesis");
        assert_eq!(created.last_read_chapter, 1);
        assert!(created.highlighted_verses.is_empty());

        let mut highlights = HashMap::new();
        highlights.insert("john-3".to_string(), vec![16, 17]);
        let updated = storage
            .update_user_settings(
                "alice",
                UpdateUserSettings {
                    highlighted_verses: Some(highlights),
                    last_read_chapter: Some(3),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.font_size, "text-xl");
        assert_eq!(updated.last_read_chapter, 3);
        assert_eq!(updated.highlighted_verses["john-3"], vec![16, 17]);

        let fetched = storage.get_user_settings("alice").unwrap().unwrap();
        assert_eq!(fetched.last_read_chapter, 3);
    }
}
