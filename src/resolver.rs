//! Single-pass, rule-based question answering over the knowledge base.

use std::collections::BTreeSet;

use tracing::debug;

use crate::format::{self, render_field};
use crate::intent::{self, IntentKind};
use crate::keywords;
use crate::knowledge::types::{Entity, FieldValue};
use crate::knowledge::{Category, KnowledgeBase};

pub const NO_ANSWER: &str = "Sorry, I don't have an answer to that.";

pub struct AnswerResolver {
    kb: KnowledgeBase,
}

impl AnswerResolver {
    pub fn new(kb: KnowledgeBase) -> Self {
        Self { kb }
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.kb
    }

    /// Answers an English question. Always returns text; `NO_ANSWER` when nothing matches.
    ///
    /// Scan order is fixed and the first hit ends the scan: government-jobs
    /// skills cue, streams, professions, government job types, government
    /// exams cue, then the literal words "vocational" and "diploma".
    pub fn resolve(&self, question: &str) -> String {
        let keywords = keywords::extract(question);
        let lower = question.to_lowercase();
        let jobs = self.kb.government_jobs();

        if intent::mentions(question, IntentKind::Skills) && !jobs.skills_required.is_empty() {
            debug!(?keywords, "government skills cue");
            return format::format_government_skills(jobs);
        }

        for category in [Category::Streams, Category::Professions] {
            let entities = match category {
                Category::Streams => self.kb.streams(),
                _ => self.kb.professions(),
            };
            if let Some((name, entity)) = find_entity(entities, &keywords) {
                let intent = intent::classify(question);
                debug!(?keywords, %category, entity = %name, ?intent, "entity matched");
                return answer_for(entity, intent);
            }
        }

        if jobs.types.iter().any(|job| matches_any(job, &keywords)) {
            debug!(?keywords, "government job type matched");
            return format::format_government_types(jobs);
        }

        if intent::mentions(question, IntentKind::Exams) && !jobs.exams.is_empty() {
            debug!("government exams cue");
            return format::format_government_exams(jobs);
        }

        if lower.contains("vocational") {
            return format::format_vocational_courses(self.kb.vocational_courses());
        }

        if lower.contains("diploma") {
            return format::format_diploma(self.kb.diploma());
        }

        debug!(?keywords, "no match");
        NO_ANSWER.to_string()
    }
}

/// First entity, in document order, whose name contains any keyword.
fn find_entity<'a>(
    entities: &'a [(String, Entity)],
    keywords: &BTreeSet<String>,
) -> Option<&'a (String, Entity)> {
    entities.iter().find(|(name, _)| matches_any(name, keywords))
}

fn matches_any(target: &str, keywords: &BTreeSet<String>) -> bool {
    let target = target.to_lowercase();
    keywords.iter().any(|k| target.contains(&k.to_lowercase()))
}

fn answer_for(entity: &Entity, intent: IntentKind) -> String {
    match intent {
        IntentKind::Eligibility => {
            render_field(entity.eligibility.as_ref(), format::NO_ELIGIBILITY)
        }
        IntentKind::Exams => render_field(entity.exams.as_ref(), format::NO_EXAMS),
        IntentKind::CareerPath => render_field(entity.career_path.as_ref(), format::NO_PATHWAY),
        IntentKind::Colleges => format::format_colleges(entity.top_colleges.as_ref()),
        IntentKind::Skills => render_field(entity.skills_required.as_ref(), format::NO_SKILLS),
        IntentKind::Description => default_answer(entity),
    }
}

fn default_answer(entity: &Entity) -> String {
    [&entity.career_options, &entity.description]
        .into_iter()
        .flatten()
        .find(|v| !v.is_empty())
        .map_or_else(|| format::NO_CAREER_OPTIONS.to_string(), FieldValue::render)
}
