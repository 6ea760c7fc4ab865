use crate::model::{Book, Testament};

const BOOKS: &[(&str, &str, u32, Testament)] = &[
    ("genesis", "Genesis", 50, Testament::Old),
    ("exodus", "Exodus", 40, Testament::Old),
    ("leviticus", "Leviticus", 27, Testament::Old),
    ("numbers", "Numbers", 36, Testament::Old),
    ("deuteronomy", "Deuteronomy", 34, Testament::Old),
    ("joshua", "Joshua", 24, Testament::Old),
    ("judges", "Judges", 21, Testament::Old),
    ("ruth", "Ruth", 4, Testament::Old),
    ("1samuel", "1 Samuel", 31, Testament::Old),
    ("2samuel", "2 Samuel", 24, Testament::Old),
    ("1kings", "1 Kings", 22, Testament::Old),
    ("2kings", "2 Kings", 25, Testament::Old),
    ("1chronicles", "1 Chronicles", 29, Testament::Old),
    ("2chronicles", "2 Chronicles", 36, Testament::Old),
    ("ezra", "Ezra", 10, Testament::Old),
    ("nehemiah", "Nehemiah", 13, Testament::Old),
    ("esther", "Esther", 10, Testament::Old),
    ("job", "Job", 42, Testament::Old),
    ("psalms", "Psalms", 150, Testament::Old),
    ("proverbs", "Proverbs", 31, Testament::Old),
    ("ecclesiastes", "Ecclesiastes", 12, Testament::Old),
    ("songofsolomon", "Song of Solomon", 8, Testament::Old),
    ("isaiah", "Isaiah", 66, Testament::Old),
    ("jeremiah", "Jeremiah", 52, Testament::Old),
    ("lamentations", "Lamentations", 5, Testament::Old),
    ("ezekiel", "Ezekiel", 48, Testament::Old),
    ("daniel", "Daniel", 12, Testament::Old),
    ("hosea", "Hosea", 14, Testament::Old),
    ("joel", "Joel", 3, Testament::Old),
    ("amos", "Amos", 9, Testament::Old),
    ("obadiah", "Obadiah", 1, Testament::Old),
    ("jonah", "Jonah", 4, Testament::Old),
    ("micah", "Micah", 7, Testament::Old),
    ("nahum", "Nahum", 3, Testament::Old),
    ("habakkuk", "Habakkuk", 3, Testament::Old),
    ("zephaniah", "Zephaniah", 3, Testament::Old),
    ("haggai", "Haggai", 2, Testament::Old),
    ("zechariah", "Zechariah", 14, Testament::Old),
    ("malachi", "Malachi", 4, Testament::Old),
    ("matthew", "Matthew", 28, Testament::New),
    ("mark", "Mark", 16, Testament::New),
    ("luke", "Luke", 24, Testament::New),
    ("john", "John", 21, Testament::New),
    ("acts", "Acts", 28, Testament::New),
    ("romans", "Romans", 16, Testament::New),
    ("1corinthians", "1 Corinthians", 16, Testament::New),
    ("2corinthians", "2 Corinthians", 13, Testament::New),
    ("galatians", "Galatians", 6, Testament::New),
    ("ephesians", "Ephesians", 6, Testament::New),
    ("philippians", "Philippians", 4, Testament::New),
    ("colossians", "Colossians", 4, Testament::New),
    ("1thessalonians", "1 Thessalonians", 5, Testament::New),
    ("2thessalonians", "2 Thessalonians", 3, Testament::New),
    ("1timothy", "1 Timothy", 6, Testament::New),
    ("2timothy", "2 Timothy", 4, Testament::New),
    ("titus", "Titus", 3, Testament::New),
    ("philemon", "Philemon", 1, Testament::New),
    ("hebrews", "Hebrews", 13, Testament::New),
    ("james", "James", 5, Testament::New),
    ("1peter", "1 Peter", 5, Testament::New),
    ("2peter", "2 Peter", 3, Testament::New),
    ("1john", "1 John", 5, Testament::New),
    ("2john", "2 John", 1, Testament::New),
    ("3john", "3 John", 1, Testament::New),
    ("jude", "Jude", 1, Testament::New),
    ("revelation", "Revelation", 22, Testament::New),
];

/// The fixed 66-book canon, Old Testament first.
pub fn books() -> Vec<Book> {
    BOOKS
        .iter()
        .map(|&(id, name, chapters, testament)| Book {
            id: id.to_string(),
            name: name.to_string(),
            chapters,
            testament,
        })
        .collect()
}
