//! Rule-based English lemmatizer.
//!
//! Irregular forms are looked up first, then plural suffixes are reduced.
//! Without part-of-speech tags, `-ing`/`-ed` verb forms are left alone so
//! nouns such as "engineering" keep their dictionary form.

const IRREGULAR: &[(&str, &str)] = &[
    ("children", "child"),
    ("women", "woman"),
    ("men", "man"),
    ("people", "person"),
    ("teeth", "tooth"),
    ("feet", "foot"),
    ("mice", "mouse"),
    ("criteria", "criterion"),
    ("phenomena", "phenomenon"),
    ("analyses", "analysis"),
    ("theses", "thesis"),
    ("diagnoses", "diagnosis"),
    ("went", "go"),
    ("gone", "go"),
    ("got", "get"),
    ("taught", "teach"),
    ("studied", "study"),
    ("studying", "study"),
    ("wanted", "want"),
    ("wants", "want"),
    ("wanting", "want"),
    ("better", "well"),
    ("best", "good"),
    ("was", "be"),
    ("were", "be"),
    ("is", "be"),
    ("are", "be"),
    ("has", "have"),
    ("had", "have"),
];

/// Words ending in `s` that are already in base form.
const INVARIANT_S: &[&str] = &["news", "series", "species", "physics", "mathematics", "economics"];

/// Reduces a lowercase word to its dictionary base form.
pub fn lemmatize(word: &str) -> String {
    if let Some((_, base)) = IRREGULAR.iter().find(|(form, _)| *form == word) {
        return (*base).to_string();
    }
    if INVARIANT_S.contains(&word) {
        return word.to_string();
    }
    reduce_plural(word).unwrap_or_else(|| word.to_string())
}

fn reduce_plural(word: &str) -> Option<String> {
    if word.len() <= 3 {
        return None;
    }
    if let Some(stem) = word.strip_suffix("ies")
        && stem.len() > 1
    {
        return Some(format!("{stem}y"));
    }
    if let Some(stem) = word.strip_suffix("sses") {
        return Some(format!("{stem}ss"));
    }
    for suffix in ["ches", "shes", "xes", "zes"] {
        if word.ends_with(suffix) {
            return Some(word[..word.len() - 2].to_string());
        }
    }
    if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
        return None;
    }
    word.strip_suffix('s').map(str::to_string)
}
