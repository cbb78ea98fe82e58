use std::fmt;

use clap::ValueEnum;

/// Languages the assistant answers in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    En,
    Hi,
    Mr,
}

impl Lang {
    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Hi => "hi",
            Lang::Mr => "mr",
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Language selection from the command line.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LangChoice {
    #[default]
    Auto,
    En,
    Hi,
    Mr,
}

impl LangChoice {
    /// The fixed language, or the detected one for `Auto`.
    pub fn resolve(self, text: &str) -> Lang {
        match self {
            LangChoice::Auto => detect_language(text),
            LangChoice::En => Lang::En,
            LangChoice::Hi => Lang::Hi,
            LangChoice::Mr => Lang::Mr,
        }
    }
}

/// Common function words that separate Marathi from Hindi in Devanagari text.
const MARATHI_MARKERS: &[&str] = &[
    "आहे", "आहेत", "काय", "मध्ये", "साठी", "कसे", "कसा", "कोणते", "कोणत्या", "मला", "आणि",
    "नाही", "होण्यासाठी", "करावे", "सांगा",
];
const HINDI_MARKERS: &[&str] = &[
    "है", "हैं", "क्या", "में", "लिए", "कैसे", "कौन", "मुझे", "और", "नहीं", "के", "की", "का",
    "बनने", "बताइए", "बताओ",
];

/// Offline language detection: Latin-only text is English; Devanagari text is
/// Marathi when its Marathi marker words outnumber the Hindi ones, else Hindi.
pub fn detect_language(text: &str) -> Lang {
    if !contains_devanagari(text) {
        return Lang::En;
    }
    let words: Vec<&str> = text
        .split(|c: char| c.is_whitespace() || c.is_ascii_punctuation() || c == '।')
        .filter(|w| !w.is_empty())
        .collect();
    let count = |markers: &[&str]| words.iter().filter(|w| markers.contains(w)).count();
    if count(MARATHI_MARKERS) > count(HINDI_MARKERS) {
        Lang::Mr
    } else {
        Lang::Hi
    }
}

fn contains_devanagari(text: &str) -> bool {
    text.chars().any(|c| matches!(c, '\u{0900}'..='\u{097F}'))
}
