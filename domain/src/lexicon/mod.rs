//! Lexical extraction: turns free text into candidate naming keywords.

mod keywords;

pub use keywords::{MAX_KEYWORDS, MIN_KEYWORD_LEN, STOP_WORDS, extract_keywords};
