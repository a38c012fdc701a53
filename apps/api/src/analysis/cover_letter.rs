//! Cover letter: tone rule plus opening, body and closing templates.

use crate::analysis::extractor::contains_term;
use crate::analysis::models::{CoverLetter, CoverLetterTone, Industry, JobPosting, ResumeProfile};

const FALLBACK_ACHIEVEMENT: &str = "delivered successful projects";
const FALLBACK_CULTURE: &str = "excellence";
const FALLBACK_SKILLS: &str = "the core areas of this role";

/// Technology postings get the technical tone; startup or dynamic cultures get
/// the enthusiastic one; everything else is professional.
pub fn select_tone(job: &JobPosting) -> CoverLetterTone {
    if job.industry == Industry::Technology {
        CoverLetterTone::Technical
    } else if job
        .culture_keywords
        .iter()
        .any(|k| k == "startup" || k == "dynamic")
    {
        CoverLetterTone::Enthusiastic
    } else {
        CoverLetterTone::Professional
    }
}

fn opening(tone: CoverLetterTone, job: &JobPosting) -> String {
    let (title, company) = (&job.job_title, &job.company);
    match tone {
        CoverLetterTone::Professional => format!(
            "Dear Hiring Manager,\n\nI am writing to express my strong interest in the {title} position at {company}. \
             With my proven track record and relevant expertise, I am confident I would be a valuable addition to your team."
        ),
        CoverLetterTone::Enthusiastic => format!(
            "Dear Hiring Team,\n\nI am thrilled to apply for the {title} role at {company}! \
             Your company's innovative approach and dynamic culture align perfectly with my career aspirations and professional values."
        ),
        CoverLetterTone::Technical => format!(
            "Dear Technical Hiring Manager,\n\nI am excited to submit my application for the {title} position at {company}. \
             My technical background and hands-on experience make me well-suited to contribute to your engineering objectives."
        ),
    }
}

/// First letter lowercased, terminal punctuation guaranteed.
fn as_clause(sentence: &str) -> String {
    let mut chars = sentence.trim().chars();
    let mut clause: String = match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => return format!("{FALLBACK_ACHIEVEMENT}."),
    };
    if !clause.ends_with(&['.', '!', '?'][..]) {
        clause.push('.');
    }
    clause
}

fn body(resume: &ResumeProfile, job: &JobPosting, matched_skills: &[String]) -> String {
    let skills = if matched_skills.is_empty() {
        FALLBACK_SKILLS.to_string()
    } else {
        matched_skills.iter().take(3).cloned().collect::<Vec<_>>().join(", ")
    };
    let achievement = as_clause(
        resume
            .achievements
            .first()
            .map(String::as_str)
            .unwrap_or(FALLBACK_ACHIEVEMENT),
    );
    let culture = job
        .culture_keywords
        .first()
        .map(String::as_str)
        .unwrap_or(FALLBACK_CULTURE);

    format!(
        "My {years}+ years of experience in {skills} directly align with your requirements. \
         In my previous roles, I have {achievement} This experience has equipped me with the technical depth \
         and problem-solving abilities essential for success in this position.\n\n\
         What particularly excites me about {company} is your commitment to {culture}. \
         I am eager to contribute my expertise while continuing to grow within your team.",
        years = resume.total_experience_years,
        company = job.company,
    )
}

fn closing(job: &JobPosting) -> String {
    format!(
        "Thank you for considering my application. I look forward to discussing how my background \
         and enthusiasm can contribute to {}'s continued success.\n\nSincerely,\n[Your Name]",
        job.company
    )
}

/// Share of job skills named in `content`, 0 – 100. 100 when the job lists none.
pub fn skill_coverage(content: &str, job_skills: &[String]) -> u32 {
    if job_skills.is_empty() {
        return 100;
    }
    let lower = content.to_lowercase();
    let named = job_skills
        .iter()
        .filter(|s| contains_term(&lower, &s.to_lowercase()))
        .count();
    (named as f64 / job_skills.len() as f64 * 100.0).round() as u32
}

pub fn generate_cover_letter(
    resume: &ResumeProfile,
    job: &JobPosting,
    matched_skills: &[String],
) -> CoverLetter {
    let tone = select_tone(job);
    let content = format!(
        "{}\n\n{}\n\n{}",
        opening(tone, job),
        body(resume, job, matched_skills),
        closing(job)
    );

    CoverLetter {
        word_count: content.split(' ').count(),
        keyword_density: skill_coverage(&content, &job.all_skills()),
        content,
        tone,
    }
}
