//! Language detection and fail-open translation around the English-only resolver.

pub(crate) mod client;
mod lang;

pub use client::{GoogleTranslateClient, TranslateError, Translator};
pub use lang::{Lang, LangChoice, detect_language};

use tracing::warn;

/// Outcome of a translation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Translation {
    Translated(String),
    /// The original text, unchanged. `reason` is set when a provider call failed.
    Passthrough { text: String, reason: Option<String> },
}

impl Translation {
    pub fn text(&self) -> &str {
        match self {
            Translation::Translated(text) | Translation::Passthrough { text, .. } => text,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Translation::Translated(text) | Translation::Passthrough { text, .. } => text,
        }
    }

    pub fn is_translated(&self) -> bool {
        matches!(self, Translation::Translated(_))
    }
}

/// Wraps an optional translator; never fails, falls back to the original text.
pub struct TranslationGateway<T> {
    translator: Option<T>,
}

impl<T: Translator> TranslationGateway<T> {
    pub fn new(translator: T) -> Self {
        Self {
            translator: Some(translator),
        }
    }

    /// A gateway that passes every text through untouched.
    pub fn disabled() -> Self {
        Self { translator: None }
    }

    pub fn detect_language(&self, text: &str) -> Lang {
        detect_language(text)
    }

    pub async fn translate(&self, text: &str, source: Lang, target: Lang) -> Translation {
        let passthrough = |reason| Translation::Passthrough {
            text: text.to_string(),
            reason,
        };
        let Some(translator) = self.translator.as_ref().filter(|_| source != target) else {
            return passthrough(None);
        };
        match translator.translate(text, source, target).await {
            Ok(translated) => Translation::Translated(translated),
            Err(e) => {
                warn!(error = %e, %source, %target, "translation failed, using original text");
                passthrough(Some(e.to_string()))
            }
        }
    }
}
