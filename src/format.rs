use crate::knowledge::types::{
    CollegeMap, DiplomaRecord, FieldValue, GovernmentJobs, VocationalCourse,
};

pub const NO_ELIGIBILITY: &str = "No eligibility information available.";
pub const NO_EXAMS: &str = "No exam information available.";
pub const NO_PATHWAY: &str = "No pathway information available.";
pub const NO_COLLEGES: &str = "No college information available.";
pub const NO_SKILLS: &str = "No skills information available.";
pub const NO_CAREER_OPTIONS: &str = "No career options available.";
pub const NO_VOCATIONAL: &str = "No vocational course information available.";
const NOT_SPECIFIED: &str = "not specified";

/// Renders an optional attribute, substituting `placeholder` when absent or empty.
pub fn render_field(value: Option<&FieldValue>, placeholder: &str) -> String {
    value
        .filter(|v| !v.is_empty())
        .map_or_else(|| placeholder.to_string(), FieldValue::render)
}

/// One `<category>: <name>, <name>` line per college category.
pub fn format_colleges(colleges: Option<&CollegeMap>) -> String {
    let Some(colleges) = colleges.filter(|c| !c.is_empty()) else {
        return NO_COLLEGES.to_string();
    };
    colleges
        .iter()
        .map(|(category, names)| format!("{category}: {}", names.join(", ")))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_vocational_courses(courses: &[VocationalCourse]) -> String {
    if courses.is_empty() {
        return NO_VOCATIONAL.to_string();
    }
    let mut out = String::from("Vocational courses include:\n");
    for course in courses {
        out.push_str(&format!(
            "- {} (Duration: {}, Career Options: {})\n",
            course.course_name.as_deref().unwrap_or(NOT_SPECIFIED),
            course.duration.as_deref().unwrap_or(NOT_SPECIFIED),
            course.career_options.join(", ")
        ));
    }
    out
}

pub fn format_diploma(diploma: &DiplomaRecord) -> String {
    let mut out = String::new();
    if let Some(desc) = diploma.description.as_deref().filter(|d| !d.trim().is_empty()) {
        out.push_str(&format!("{desc}\n"));
    }
    out.push_str(&format!(
        "Diploma courses available: {}\nCareer options: {}",
        diploma.subjects.join(", "),
        diploma.career_options.join(", ")
    ));
    if !diploma.top_colleges.is_empty() {
        out.push_str("\nTop colleges:\n");
        out.push_str(&format_colleges(Some(&diploma.top_colleges)));
    }
    out
}

pub fn format_government_skills(jobs: &GovernmentJobs) -> String {
    format!(
        "Skills required for government jobs include: {}",
        jobs.skills_required.join(", ")
    )
}

pub fn format_government_types(jobs: &GovernmentJobs) -> String {
    format!("Government job sectors include: {}", jobs.types.join(", "))
}

pub fn format_government_exams(jobs: &GovernmentJobs) -> String {
    let lines: Vec<_> = jobs
        .exams
        .iter()
        .map(|(job_type, exams)| format!("{job_type}: {}", exams.join(", ")))
        .collect();
    format!("Exams for government jobs include:\n{}", lines.join("\n"))
}
