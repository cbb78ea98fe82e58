//! Decides which attribute of a matched entity a question asks for.

/// The attribute a question is after.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntentKind {
    Eligibility,
    Exams,
    CareerPath,
    Colleges,
    Skills,
    /// No cue matched: answer with the entity's general information.
    Description,
}

/// Cue rules in priority order; the first rule with a cue present wins.
/// Devanagari cues cover questions that keep the native word after translation.
const RULES: &[(IntentKind, &[&str])] = &[
    (IntentKind::Eligibility, &["eligibility"]),
    (IntentKind::Exams, &["exams", "परीक्षा"]),
    (IntentKind::CareerPath, &["path", "how to become"]),
    (IntentKind::Colleges, &["colleges", "top colleges"]),
    (IntentKind::Skills, &["skills", "कौशल्य"]),
];

/// Classifies the raw question text (case-insensitive substring match).
pub fn classify(question: &str) -> IntentKind {
    let lower = question.to_lowercase();
    RULES
        .iter()
        .find(|(_, cues)| has_cue(&lower, cues))
        .map_or(IntentKind::Description, |(kind, _)| *kind)
}

/// True if the question carries any cue of `kind`, regardless of priority.
pub fn mentions(question: &str, kind: IntentKind) -> bool {
    let lower = question.to_lowercase();
    RULES
        .iter()
        .filter(|(rule_kind, _)| *rule_kind == kind)
        .any(|(_, cues)| has_cue(&lower, cues))
}

fn has_cue(lower: &str, cues: &[&str]) -> bool {
    cues.iter().any(|cue| lower.contains(cue))
}
