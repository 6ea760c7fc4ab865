use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Testament {
    Old,
    New,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub name: String,
    pub chapters: u32,
    pub testament: Testament,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verse {
    pub number: u32,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    pub book: String,
    pub chapter: u32,
    pub verses: Vec<Verse>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
    pub text: String,
    pub reference: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub id: String,
    pub user_id: Option<String>,
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
    pub text: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookmark {
    #[serde(default)]
    pub user_id: Option<String>,
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossReference {
    pub reference: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerseExplanation {
    pub id: String,
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
    pub commentary: String,
    pub key_themes: Option<Vec<String>>,
    pub cross_references: Option<Vec<CrossReference>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVerseExplanation {
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
    pub commentary: String,
    #[serde(default)]
    pub key_themes: Option<Vec<String>>,
    #[serde(default)]
    pub cross_references: Option<Vec<CrossReference>>,
}

/// Highlighted verse numbers keyed by `"{book}-{chapter}"`.
pub type HighlightedVerses = HashMap<String, Vec<u32>>;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    pub id: String,
    pub user_id: String,
    pub font_size: String,
    pub highlighted_verses: HighlightedVerses,
    pub last_read_book: String,
    pub last_read_chapter: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserSettings {
    #[serde(default)]
    pub font_size: Option<String>,
    #[serde(default)]
    pub highlighted_verses: Option<HighlightedVerses>,
    #[serde(default)]
    pub last_read_book: Option<String>,
    #[serde(default)]
    pub last_read_chapter: Option<u32>,
}

pub const DEFAULT_FONT_SIZE: &str = "text-lg";
pub const DEFAULT_LAST_READ_BOOK: &str = "genesis";
pub const DEFAULT_LAST_READ_CHAPTER: u32 = 1;

impl CreateBookmark {
    pub fn validate(&self) -> Result<(), String> {
        require_text("book", &self.book)?;
        require_text("text", &self.text)?;
        require_positive("chapter", self.chapter)?;
        require_positive("verse", self.verse)
    }
}

impl CreateVerseExplanation {
    pub fn validate(&self) -> Result<(), String> {
        require_text("book", &self.book)?;
        require_text("commentary", &self.commentary)?;
        require_positive("chapter", self.chapter)?;
        require_positive("verse", self.verse)
    }
}

impl UpdateUserSettings {
    pub fn validate(&self) -> Result<(), String> {
        if let Some(font_size) = &self.font_size {
            require_text("fontSize", font_size)?;
        }
        if let Some(book) = &self.last_read_book {
            require_text("lastReadBook", book)?;
        }
        if let Some(chapter) = self.last_read_chapter {
            require_positive("lastReadChapter", chapter)?;
        }
        Ok(())
    }
}

fn require_text(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{} must not be empty", field));
    }
    Ok(())
}

fn require_positive(field: &str, value: u32) -> Result<(), String> {
    if value == 0 {
        return Err(format!("{} must be positive", field));
    }
    Ok(())
}
