//! Keyword extraction: tokenize, drop stopwords and non-alphabetic tokens, lemmatize.

mod lemma;
mod stopwords;

use std::collections::BTreeSet;

use unicode_segmentation::UnicodeSegmentation;

pub use lemma::lemmatize;
pub use stopwords::is_stop_word;

const APOSTROPHES: [char; 2] = ['\'', '\u{2019}'];

/// Negated contractions whose stem is not the text before `n't`.
const IRREGULAR_NEGATIONS: &[(&str, &str)] =
    &[("won", "will"), ("can", "can"), ("shan", "shall")];

/// Extracts the set of lowercase lemmas of content words in `text`.
pub fn extract(text: &str) -> BTreeSet<String> {
    text.unicode_words()
        .map(strip_clitic)
        .filter(|token| !token.is_empty() && token.chars().all(char::is_alphabetic))
        .filter(|token| !is_stop_word(token))
        .map(|token| lemmatize(&token.to_lowercase()))
        .collect()
}

/// Drops a trailing clitic: `doctor's` → `doctor`, `don't` → `do`, `won't` → `will`.
fn strip_clitic(token: &str) -> &str {
    let Some(pos) = token.find(APOSTROPHES) else {
        return token;
    };
    let (head, tail) = token.split_at(pos);
    let negated = tail.trim_start_matches(APOSTROPHES).eq_ignore_ascii_case("t");
    match head.strip_suffix(['n', 'N']) {
        Some(stem) if negated => IRREGULAR_NEGATIONS
            .iter()
            .find(|(form, _)| form.eq_ignore_ascii_case(head))
            .map_or(stem, |(_, base)| *base),
        _ => head,
    }
}
