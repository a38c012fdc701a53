use crate::analysis::extractor::contains_term;
use crate::analysis::models::{
    JobPosting, Priority, Rating, ResumeAnalysis, ResumeProfile, ResumeStrength,
    ResumeSuggestion, ResumeWeakness, Severity, SkillsAnalysis, StrengthCategory,
    SuggestionType, WeaknessCategory,
};

pub const MAX_STRENGTHS: usize = 6;
pub const MAX_WEAKNESSES: usize = 5;
pub const MAX_SUGGESTIONS: usize = 6;
pub const MAX_MISSING_KEYWORDS: usize = 10;

const ATS_WEAKNESS_THRESHOLD: u32 = 70;
const READABILITY_THRESHOLD: u32 = 60;

const ATS_OPTIMIZATIONS: &[&str] = &[
    "Use standard section headings (Experience, Education, Skills)",
    "Include exact keywords from job posting",
    "Use bullet points for easy scanning",
    "Avoid graphics, tables, and complex formatting",
    "Save as both PDF and Word formats",
    "Include contact information at the top",
    "Use consistent date formatting",
    "Maintain proper spacing and margins",
];

/// Phrases that describe involvement rather than impact.
const VAGUE_PHRASES: &[&str] = &[
    "helped",
    "worked on",
    "assisted",
    "supported",
    "participated",
    "involved in",
    "responsible for",
];

const LEADERSHIP_TERMS: &[&str] = &["led", "lead", "managed", "mentored", "supervised", "leadership"];

/// Achievements that carry at least one digit.
pub fn count_quantified(achievements: &[String]) -> usize {
    achievements
        .iter()
        .filter(|a| a.chars().any(|c| c.is_ascii_digit()))
        .count()
}

/// First resume line that leans on a vague phrase and states no number,
/// percentage or currency amount.
pub fn find_vague_line(text: &str) -> Option<(String, &'static str)> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.chars().any(|c| c.is_ascii_digit() || matches!(c, '%' | '$' | '€' | '£')))
        .find_map(|line| {
            let lower = line.to_lowercase();
            VAGUE_PHRASES
                .iter()
                .find(|p| contains_term(&lower, p))
                .map(|p| (line.to_string(), *p))
        })
}

fn strength(category: StrengthCategory, description: String, impact: Rating, relevance_score: u32) -> ResumeStrength {
    ResumeStrength {
        category,
        description,
        impact,
        relevance_score,
    }
}

fn identify_strengths(
    resume: &ResumeProfile,
    job: &JobPosting,
    skills: &SkillsAnalysis,
    quantified: usize,
) -> Vec<ResumeStrength> {
    let lower = resume.raw_text.to_lowercase();
    let mut strengths = Vec::new();

    if resume.total_experience_years >= job.required_experience_years {
        strengths.push(strength(
            StrengthCategory::Experience,
            format!(
                "{}+ years of relevant experience meets job requirements",
                resume.total_experience_years
            ),
            Rating::High,
            95,
        ));
    }
    if !skills.matched_skills.is_empty() {
        strengths.push(strength(
            StrengthCategory::Skills,
            format!(
                "Strong technical alignment with {} matching skills",
                skills.matched_skills.len()
            ),
            Rating::High,
            90,
        ));
    }
    if resume.achievements.len() >= 3 {
        strengths.push(strength(
            StrengthCategory::Achievements,
            "Strong track record of quantifiable achievements".to_string(),
            Rating::High,
            90,
        ));
    } else if quantified >= 2 {
        strengths.push(strength(
            StrengthCategory::Achievements,
            "Demonstrates measurable impact with quantified achievements".to_string(),
            Rating::High,
            85,
        ));
    }
    if LEADERSHIP_TERMS.iter().any(|t| contains_term(&lower, t)) {
        strengths.push(strength(
            StrengthCategory::Leadership,
            "Demonstrated leadership and ownership of outcomes".to_string(),
            Rating::Medium,
            80,
        ));
    }
    if resume.writing_quality.action_verb_count >= 5 {
        strengths.push(strength(
            StrengthCategory::Experience,
            "Uses strong action verbs to describe accomplishments".to_string(),
            Rating::Medium,
            75,
        ));
    }
    if let Some(education) = resume.education.first() {
        strengths.push(strength(
            StrengthCategory::Education,
            format!("Relevant education: {education}"),
            Rating::Medium,
            70,
        ));
    }

    strengths.truncate(MAX_STRENGTHS);
    strengths
}

fn weakness(category: WeaknessCategory, issue: String, severity: Severity, recommendation: &str) -> ResumeWeakness {
    ResumeWeakness {
        category,
        issue,
        severity,
        recommendation: recommendation.to_string(),
    }
}

fn identify_weaknesses(
    resume: &ResumeProfile,
    job: &JobPosting,
    skills: &SkillsAnalysis,
    quantified: usize,
    ats: u32,
) -> Vec<ResumeWeakness> {
    let mut weaknesses = Vec::new();

    if !skills.missing_skills.is_empty() {
        let job_skill_count = job.required_skills.len() + job.preferred_skills.len();
        let severity = if skills.missing_skills.len() * 2 > job_skill_count {
            Severity::Critical
        } else {
            Severity::Moderate
        };
        weaknesses.push(weakness(
            WeaknessCategory::Skills,
            format!(
                "Missing {} of {} skills named in the job posting",
                skills.missing_skills.len(),
                job_skill_count
            ),
            severity,
            "Add the missing skills you genuinely have and plan to learn the rest",
        ));
    }
    if quantified < 2 {
        weaknesses.push(weakness(
            WeaknessCategory::Achievements,
            "Limited quantifiable achievements".to_string(),
            Severity::Moderate,
            "Add specific metrics and results to demonstrate impact",
        ));
    }
    if ats < ATS_WEAKNESS_THRESHOLD {
        weaknesses.push(weakness(
            WeaknessCategory::Formatting,
            "Structure may not parse cleanly in applicant tracking systems".to_string(),
            Severity::Moderate,
            "Use standard section headings, bullet points and common keywords",
        ));
    }
    if let Some((line, phrase)) = find_vague_line(&resume.raw_text) {
        weaknesses.push(weakness(
            WeaknessCategory::Content,
            format!("Vague phrasing '{phrase}' without measurable impact: \"{line}\""),
            Severity::Minor,
            "Replace involvement phrases with what you delivered and by how much",
        ));
    }
    if resume.writing_quality.readability_score < READABILITY_THRESHOLD {
        weaknesses.push(weakness(
            WeaknessCategory::Content,
            format!(
                "Long sentences (about {:.0} words on average) reduce readability",
                resume.writing_quality.avg_sentence_length
            ),
            Severity::Minor,
            "Keep bullet points to one idea and under 20 words",
        ));
    }
    if job
        .culture_keywords
        .iter()
        .any(|k| !resume.raw_text.to_lowercase().contains(k.as_str()))
        && weaknesses.len() < MAX_WEAKNESSES
    {
        weaknesses.push(weakness(
            WeaknessCategory::Keywords,
            "Does not reflect the culture language used in the posting".to_string(),
            Severity::Minor,
            "Echo the posting's culture terms where they honestly describe you",
        ));
    }

    weaknesses.truncate(MAX_WEAKNESSES);
    weaknesses
}

fn suggestion(
    kind: SuggestionType,
    section: &str,
    current: Option<String>,
    suggested: String,
    reasoning: &str,
    priority: Priority,
) -> ResumeSuggestion {
    ResumeSuggestion {
        kind,
        section: section.to_string(),
        current,
        suggested,
        reasoning: reasoning.to_string(),
        priority,
    }
}

fn generate_suggestions(
    resume: &ResumeProfile,
    job: &JobPosting,
    skills: &SkillsAnalysis,
    quantified: usize,
) -> Vec<ResumeSuggestion> {
    let resume_lower = resume.raw_text.to_lowercase();
    let job_lower = job.raw_text.to_lowercase();
    let mut suggestions = Vec::new();

    if !skills.missing_skills.is_empty() {
        let top: Vec<&str> = skills.missing_skills.iter().take(3).map(String::as_str).collect();
        suggestions.push(suggestion(
            SuggestionType::Add,
            "Skills",
            None,
            format!("Add missing critical skills: {}", top.join(", ")),
            "These skills are specifically mentioned in the job posting and will improve ATS compatibility",
            Priority::High,
        ));
    }
    if quantified < 2 {
        suggestions.push(suggestion(
            SuggestionType::Modify,
            "Experience",
            resume.achievements.first().cloned(),
            "Add specific metrics and quantifiable results to your achievements".to_string(),
            "Quantified achievements demonstrate concrete value and impact",
            Priority::High,
        ));
    }
    if resume.writing_quality.action_verb_count < 3 {
        suggestions.push(suggestion(
            SuggestionType::Modify,
            "Experience",
            find_vague_line(&resume.raw_text).map(|(line, _)| line),
            "Start bullet points with strong action verbs like \"Developed\", \"Implemented\", \"Led\"".to_string(),
            "Action verbs make your resume more dynamic and ATS-friendly",
            Priority::Medium,
        ));
    }
    if !resume_lower.contains("project") {
        suggestions.push(suggestion(
            SuggestionType::Add,
            "Projects",
            None,
            "Add a Key Projects section highlighting work relevant to this role".to_string(),
            "Projects give concrete evidence of the skills listed elsewhere",
            Priority::Medium,
        ));
    }
    if !resume_lower.contains("skill") {
        suggestions.push(suggestion(
            SuggestionType::Restructure,
            "Skills",
            None,
            "Add a dedicated Technical Skills section near the top".to_string(),
            "Applicant tracking systems look for a clearly labelled skills section",
            Priority::Medium,
        ));
    }
    if job_lower.contains("agile") && !resume_lower.contains("agile") {
        suggestions.push(suggestion(
            SuggestionType::Add,
            "Experience",
            None,
            "Mention experience with Agile delivery (Scrum, Kanban, sprints)".to_string(),
            "The job posting calls out Agile ways of working",
            Priority::Low,
        ));
    }
    if job_lower.contains("cloud") && !resume_lower.contains("cloud") {
        suggestions.push(suggestion(
            SuggestionType::Add,
            "Skills",
            None,
            "Highlight any cloud platform experience (AWS, Azure, Google Cloud)".to_string(),
            "The job posting expects familiarity with cloud platforms",
            Priority::Low,
        ));
    }

    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}

pub fn review_resume(
    resume: &ResumeProfile,
    job: &JobPosting,
    skills: &SkillsAnalysis,
    ats: u32,
) -> ResumeAnalysis {
    let quantified = count_quantified(&resume.achievements);

    ResumeAnalysis {
        strengths: identify_strengths(resume, job, skills, quantified),
        weaknesses: identify_weaknesses(resume, job, skills, quantified, ats),
        suggestions: generate_suggestions(resume, job, skills, quantified),
        missing_keywords: skills
            .missing_skills
            .iter()
            .take(MAX_MISSING_KEYWORDS)
            .cloned()
            .collect(),
        ats_optimizations: ATS_OPTIMIZATIONS.iter().map(|s| s.to_string()).collect(),
        quantifiable_achievements: quantified,
        action_verb_usage: resume.writing_quality.action_verb_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::models::{Industry, WritingQuality};

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn job(required: u32, skills: &[&str], raw: &str) -> JobPosting {
        JobPosting {
            company: "Initech".to_string(),
            job_title: "Backend Engineer".to_string(),
            location: "Unspecified".to_string(),
            industry: Industry::Technology,
            required_experience_years: required,
            salary_range: None,
            required_skills: strings(skills),
            preferred_skills: vec![],
            culture_keywords: vec![],
            responsibilities: vec![],
            raw_text: raw.to_string(),
        }
    }

    fn resume(years: u32, achievements: &[&str], verbs: usize, raw: &str) -> ResumeProfile {
        ResumeProfile {
            total_experience_years: years,
            skills: vec![],
            achievements: strings(achievements),
            education: vec![],
            certifications: vec![],
            writing_quality: WritingQuality {
                avg_sentence_length: 10.0,
                action_verb_count: verbs,
                readability_score: 100,
            },
            raw_text: raw.to_string(),
        }
    }

    fn analysis(matched: &[&str], missing: &[&str]) -> SkillsAnalysis {
        SkillsAnalysis {
            matched_skills: strings(matched),
            missing_skills: strings(missing),
            match_percentage: 0.0,
        }
    }

    #[test]
    fn test_strengths_for_experienced_candidate() {
        let r = resume(
            6,
            &["Cut costs 20%", "Grew revenue $1M", "Led 5 engineers"],
            6,
            "Led the platform team. Skills and projects.",
        );
        let result = review_resume(&r, &job(3, &["Rust"], ""), &analysis(&["Rust"], &[]), 100);
        let categories: Vec<StrengthCategory> = result.strengths.iter().map(|s| s.category).collect();
        assert!(categories.contains(&StrengthCategory::Experience));
        assert!(categories.contains(&StrengthCategory::Skills));
        assert!(categories.contains(&StrengthCategory::Achievements));
        assert!(categories.contains(&StrengthCategory::Leadership));
        assert_eq!(result.strengths[0].relevance_score, 95);
        assert!(result.strengths.len() <= MAX_STRENGTHS);
        assert_eq!(result.quantifiable_achievements, 3);
    }

    #[test]
    fn test_suggestions_for_weak_resume() {
        let r = resume(1, &[], 1, "Helped with various tasks");
        let a = analysis(&[], &["Rust", "Go", "Kafka", "Redis"]);
        let result = review_resume(&r, &job(5, &["Rust", "Go", "Kafka", "Redis"], "agile cloud team"), &a, 40);

        assert!(result.suggestions.len() <= MAX_SUGGESTIONS);
        let first = &result.suggestions[0];
        assert_eq!(first.kind, SuggestionType::Add);
        assert_eq!(first.suggested, "Add missing critical skills: Rust, Go, Kafka");
        assert_eq!(first.priority, Priority::High);

        let verbs = result
            .suggestions
            .iter()
            .find(|s| s.priority == Priority::Medium && s.section == "Experience")
            .unwrap();
        assert_eq!(verbs.current.as_deref(), Some("Helped with various tasks"));
    }

    #[test]
    fn test_weaknesses_are_capped_and_flag_missing_skills() {
        let r = resume(1, &[], 0, "Responsible for reports written in long winding sentences");
        let mut j = job(5, &["Rust", "Go"], "");
        j.culture_keywords = strings(&["collaborative"]);
        let result = review_resume(&r, &j, &analysis(&[], &["Rust", "Go"]), 40);
        assert!(result.weaknesses.len() <= MAX_WEAKNESSES);
        assert_eq!(result.weaknesses[0].category, WeaknessCategory::Skills);
        assert_eq!(result.weaknesses[0].severity, Severity::Critical);
        assert!(result
            .weaknesses
            .iter()
            .any(|w| w.category == WeaknessCategory::Content && w.issue.contains("responsible for")));
    }

    #[test]
    fn test_missing_keywords_capped_at_ten() {
        let missing: Vec<String> = (0..15).map(|i| format!("Skill{i}")).collect();
        let a = SkillsAnalysis {
            matched_skills: vec![],
            missing_skills: missing,
            match_percentage: 0.0,
        };
        let result = review_resume(&resume(1, &[], 0, ""), &job(0, &[], ""), &a, 100);
        assert_eq!(result.missing_keywords.len(), MAX_MISSING_KEYWORDS);
        assert_eq!(result.ats_optimizations.len(), 8);
    }

    #[test]
    fn test_vague_line_ignores_quantified_lines() {
        assert_eq!(find_vague_line("Helped ship 3 releases"), None);
        assert_eq!(
            find_vague_line("Built things\nAssisted the sales team"),
            Some(("Assisted the sales team".to_string(), "assisted"))
        );
    }
}
