// Prompt constants for the extraction pipeline.

use crate::resume::domains::{domain_listing, FALLBACK_DOMAIN};

/// System prompt for resume extraction; enforces JSON-only output and the
/// "empty object when not a resume" signal the pipeline relies on.
pub const EXTRACTION_SYSTEM: &str = "\
You are an expert resume parsing and evaluation system. \
Extract structured information from resume text. \
You MUST respond with valid JSON only, with no markdown fences, no explanations, \
no text outside the structured output. \
Extract only information explicitly present in the resume; never invent \
missing data. \
If the text is not a valid resume, return an empty JSON object.";

/// Extraction prompt template.
/// Replace `{domain_listing}`, `{domain_hint_note}` and `{resume_text}`
/// before sending.
pub const EXTRACTION_PROMPT_TEMPLATE: &str = r#"Extract the following fields from the resume text into a single JSON object.

BASIC INFORMATION (key "candidates"):
- phone (null if absent)
- bio (if not explicitly present, write a concise professional bio strictly from resume content)
- resume_json (structured JSON representation of the resume sections)
- domain (same value as the top-level domain below)

EDUCATION (key "education", list). For each entry:
- degree, field_of_study, college_name, university_name, gpa, start_year, end_year

CERTIFICATES (key "certificates", list). For each entry:
- certificate_name, certificate_issuer, certificate_date (YYYY-MM-DD if available, otherwise null)

PROJECTS (key "projects", list). For each entry:
- project_name, project_description, project_link (null if absent)

SKILLS (key "skills", list):
- skill_name: one entry per technical skill, no duplicates, original order of appearance

RULES:
1. If a section does not exist, return null for that field.
2. If a list section is empty or not present, return null, never an empty list.
3. Dates must be in ISO format (YYYY-MM-DD) if available.
4. Write the evaluation fields as direct feedback to the candidate: "you need to improve ...".

DOMAIN CLASSIFICATION:
Based strictly on the candidate's skills, education, and projects, select ONLY ONE
primary domain from the list below and return its label as "domain":
{domain_listing}
If no clear domain can be identified, return "{fallback_domain}".
{domain_hint_note}
EVALUATION:
- analysis: a short interviewer-style evaluation of the resume, naming strengths and weaknesses.
- resume_score: score out of 100 based on structure, clarity, impact, ATS optimization, technical depth, and presentation.
- skill_analysis: for the selected domain, which skills the candidate should improve and resources to learn them. If the candidate is strong and industry-ready, say exactly: "You are good to go."
- suggested_projects: 2-4 strong project ideas relevant to the domain. If already strong, say exactly: "You are good to go."

If the text is not a valid resume, return an empty JSON object.

RESUME TEXT:
{resume_text}"#;

/// Builds the extraction prompt for one document.
pub fn build_extraction_prompt(resume_text: &str, domain_hint: Option<&str>) -> String {
    let hint_note = match domain_hint {
        Some(hint) if !hint.trim().is_empty() => format!(
            "The caller expects the primary domain to be \"{}\"; verify it against the resume before using it.\n",
            hint.trim()
        ),
        _ => String::new(),
    };
    EXTRACTION_PROMPT_TEMPLATE
        .replace("{domain_listing}", &domain_listing())
        .replace("{fallback_domain}", FALLBACK_DOMAIN)
        .replace("{domain_hint_note}", &hint_note)
        .replace("{resume_text}", resume_text)
}
