//! Read-only career knowledge base loaded once at startup.

pub mod types;

use std::fmt;
use std::path::Path;

use tracing::{info, warn};

use types::{Catalog, DiplomaRecord, Entity, GovernmentJobs, VocationalCourse};

#[derive(Debug, thiserror::Error)]
pub enum KnowledgeError {
    #[error("failed to read knowledge file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid knowledge document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The fixed knowledge partitions, in resolver scan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Streams,
    Professions,
    GovernmentJobs,
    Vocational,
    Diploma,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Streams,
        Category::Professions,
        Category::GovernmentJobs,
        Category::Vocational,
        Category::Diploma,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Streams => "streams",
            Category::Professions => "professions",
            Category::GovernmentJobs => "government_jobs",
            Category::Vocational => "vocational",
            Category::Diploma => "diploma",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Borrowed view of one category's content.
#[derive(Debug, Clone, Copy)]
pub enum CategoryView<'a> {
    Entities(&'a [(String, Entity)]),
    GovernmentJobs(&'a GovernmentJobs),
    Courses(&'a [VocationalCourse]),
    Diploma(&'a DiplomaRecord),
}

impl CategoryView<'_> {
    /// Number of named entries (entities, job types, courses, diploma subjects).
    pub fn len(&self) -> usize {
        match self {
            CategoryView::Entities(entities) => entities.len(),
            CategoryView::GovernmentJobs(jobs) => jobs.types.len(),
            CategoryView::Courses(courses) => courses.len(),
            CategoryView::Diploma(diploma) => diploma.subjects.len(),
        }
    }
}

static EMPTY_GOVERNMENT_JOBS: GovernmentJobs = GovernmentJobs {
    types: Vec::new(),
    skills_required: Vec::new(),
    exams: Vec::new(),
};

static EMPTY_DIPLOMA: DiplomaRecord = DiplomaRecord {
    subjects: Vec::new(),
    career_options: Vec::new(),
    description: None,
    top_colleges: Vec::new(),
};

/// Knowledge base handed to the resolver at construction.
///
/// `NotLoaded` stands in for a missing or unreadable document: every category
/// reads as empty, so questions fall through to the no-answer text.
#[derive(Debug, Default)]
pub enum KnowledgeBase {
    Loaded(Catalog),
    #[default]
    NotLoaded,
}

impl KnowledgeBase {
    /// Loads the document at `path`, degrading to `NotLoaded` on any failure.
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(kb) => {
                info!(path = %path.display(), "knowledge base loaded");
                kb
            }
            Err(e) => {
                warn!(error = %e, "knowledge base unavailable, answering from an empty catalog");
                KnowledgeBase::NotLoaded
            }
        }
    }

    fn try_load(path: &Path) -> Result<Self, KnowledgeError> {
        let raw = std::fs::read_to_string(path).map_err(|source| KnowledgeError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, KnowledgeError> {
        let catalog: Catalog = serde_json::from_str(raw)?;
        Ok(KnowledgeBase::Loaded(catalog))
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, KnowledgeBase::Loaded(_))
    }

    pub fn streams(&self) -> &[(String, Entity)] {
        match self {
            KnowledgeBase::Loaded(catalog) => &catalog.streams,
            KnowledgeBase::NotLoaded => &[],
        }
    }

    pub fn professions(&self) -> &[(String, Entity)] {
        match self {
            KnowledgeBase::Loaded(catalog) => &catalog.professions,
            KnowledgeBase::NotLoaded => &[],
        }
    }

    pub fn government_jobs(&self) -> &GovernmentJobs {
        match self {
            KnowledgeBase::Loaded(catalog) => &catalog.government_jobs,
            KnowledgeBase::NotLoaded => &EMPTY_GOVERNMENT_JOBS,
        }
    }

    pub fn vocational_courses(&self) -> &[VocationalCourse] {
        match self {
            KnowledgeBase::Loaded(catalog) => &catalog.vocational.courses,
            KnowledgeBase::NotLoaded => &[],
        }
    }

    pub fn diploma(&self) -> &DiplomaRecord {
        match self {
            KnowledgeBase::Loaded(catalog) => &catalog.diploma,
            KnowledgeBase::NotLoaded => &EMPTY_DIPLOMA,
        }
    }

    pub fn get_category(&self, category: Category) -> CategoryView<'_> {
        match category {
            Category::Streams => CategoryView::Entities(self.streams()),
            Category::Professions => CategoryView::Entities(self.professions()),
            Category::GovernmentJobs => CategoryView::GovernmentJobs(self.government_jobs()),
            Category::Vocational => CategoryView::Courses(self.vocational_courses()),
            Category::Diploma => CategoryView::Diploma(self.diploma()),
        }
    }

    /// Entry counts per category, in scan order.
    pub fn summary(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .iter()
            .map(|&category| (category, self.get_category(category).len()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const SAMPLE: &str = r#"{
        "streams": {"Science": {"eligibility": "10th pass"}},
        "professions": {"Doctor": {}, "Engineer": {}},
        "government_jobs": {"types": ["Banking", "Railways"]},
        "Vocational": {"courses": [{"course_name": "Welding"}]},
        "Diploma": {"subjects": ["Civil", "Mechanical", "Electrical"]}
    }"#;

    #[test]
    fn load_reads_document_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let kb = KnowledgeBase::load(file.path());

        assert!(kb.is_loaded());
        assert_eq!(kb.streams()[0].0, "Science");
    }

    #[test]
    fn null_field_keeps_rest_of_document() {
        let kb = KnowledgeBase::from_json(
            r#"{"streams": {"Science": {"top_colleges": null, "career_options": ["Engineer"]}}}"#,
        )
        .unwrap();
        assert!(kb.is_loaded());
        assert_eq!(kb.streams()[0].0, "Science");
        assert!(kb.streams()[0].1.top_colleges.is_none());
    }

    #[test]
    fn missing_file_degrades_to_not_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let kb = KnowledgeBase::load(&dir.path().join("absent.json"));
        assert!(!kb.is_loaded());
        assert!(kb.streams().is_empty());
    }

    #[test]
    fn malformed_json_degrades_to_not_loaded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();
        assert!(!KnowledgeBase::load(file.path()).is_loaded());
    }

    #[test]
    fn from_json_reports_parse_errors() {
        let err = KnowledgeBase::from_json("[1, 2]").unwrap_err();
        assert!(matches!(err, KnowledgeError::Parse(_)));
    }

    #[test]
    fn not_loaded_reads_every_category_as_empty() {
        let kb = KnowledgeBase::NotLoaded;
        for (category, count) in kb.summary() {
            assert_eq!(count, 0, "{category} should be empty");
        }
        assert!(kb.government_jobs().skills_required.is_empty());
        assert!(kb.diploma().description.is_none());
    }

    #[test]
    fn summary_counts_entries_in_scan_order() {
        let kb = KnowledgeBase::from_json(SAMPLE).unwrap();
        assert_eq!(
            kb.summary(),
            vec![
                (Category::Streams, 1),
                (Category::Professions, 2),
                (Category::GovernmentJobs, 2),
                (Category::Vocational, 1),
                (Category::Diploma, 3),
            ]
        );
    }

    #[test]
    fn get_category_returns_matching_view() {
        let kb = KnowledgeBase::from_json(SAMPLE).unwrap();
        assert!(matches!(
            kb.get_category(Category::Professions),
            CategoryView::Entities(e) if e.len() == 2
        ));
        assert!(matches!(
            kb.get_category(Category::Vocational),
            CategoryView::Courses(c) if c[0].course_name.as_deref() == Some("Welding")
        ));
    }
}
