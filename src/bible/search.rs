use crate::config::Search;
use crate::model::{Chapter, SearchResult};
use crate::provider::ScriptureProvider;

/// Scans the configured books and chapters for verses containing `query`,
/// ignoring case. Chapters the provider fails to return are skipped, so the
/// result is always the matches found so far, capped at `max_results`.
pub async fn search_verses(
    provider: &dyn ScriptureProvider,
    bounds: &Search,
    query: &str,
) -> Vec<SearchResult> {
    let needle = query.to_lowercase();
    let mut results = Vec::new();

    for book in &bounds.books {
        for chapter_num in 1..=bounds.chapters_per_book {
            match provider.fetch_chapter(book, chapter_num).await {
                Ok(chapter) => collect_matches(&chapter, &needle, &mut results),
                Err(e) => {
                    tracing::warn!(
                        book = %book,
                        chapter = chapter_num,
                        error = %crate::unpack_error(&e),
                        "skipping chapter in search"
                    );
                }
            }
        }
    }

    results.truncate(bounds.max_results);
    results
}

fn collect_matches(chapter: &Chapter, needle: &str, results: &mut Vec<SearchResult>) {
    for verse in &chapter.verses {
        if verse.text.to_lowercase().contains(needle) {
            results.push(SearchResult {
                book: chapter.book.clone(),
                chapter: chapter.chapter,
                verse: verse.number,
                text: verse.text.clone(),
                reference: format!("{} {}:{}", chapter.book, chapter.chapter, verse.number),
            });
        }
    }
}
