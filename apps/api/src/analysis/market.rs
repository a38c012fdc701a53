use crate::analysis::dictionaries::KeywordDictionary;
use crate::analysis::models::{JobPosting, MarketAnalysis, ResumeProfile, SkillsAnalysis};

const PROGRESSION_PATHS: &[(&str, &[&str])] = &[
    (
        "Software Engineer",
        &["Senior Software Engineer", "Tech Lead", "Engineering Manager", "Principal Engineer"],
    ),
    (
        "Financial Analyst",
        &["Senior Financial Analyst", "Finance Manager", "Finance Director", "CFO"],
    ),
    (
        "Marketing Specialist",
        &["Marketing Manager", "Senior Marketing Manager", "Marketing Director", "VP Marketing"],
    ),
    (
        "Marketing Manager",
        &["Senior Marketing Manager", "Marketing Director", "VP Marketing", "CMO"],
    ),
    (
        "Data Analyst",
        &["Senior Data Analyst", "Data Scientist", "Analytics Manager", "Chief Data Officer"],
    ),
];

const DEFAULT_PROGRESSION: &[&str] = &[
    "Senior Role",
    "Management Position",
    "Director Level",
    "Executive Role",
];

const STRONG_POSITION: &str = "You are positioned as a strong candidate with excellent technical alignment \
    and experience that exceeds requirements. Your profile demonstrates clear value proposition for this role.";
const COMPETITIVE_POSITION: &str = "You are a competitive candidate with solid technical skills and relevant \
    experience. Focus on highlighting your unique achievements to stand out.";
const DEVELOPING_POSITION: &str = "You have potential but may need to strengthen certain skills or gain more \
    experience to be highly competitive. Consider the recommended action plan to improve your positioning.";

/// Candidate years as a percentage of required years; 100 when none are required.
fn experience_ratio(candidate_years: u32, required_years: u32) -> f64 {
    if required_years == 0 {
        100.0
    } else {
        candidate_years as f64 / required_years as f64 * 100.0
    }
}

pub fn competitive_positioning(skill_match: f64, candidate_years: u32, required_years: u32) -> &'static str {
    let experience = experience_ratio(candidate_years, required_years);
    if skill_match >= 80.0 && experience >= 100.0 {
        STRONG_POSITION
    } else if skill_match >= 60.0 && experience >= 80.0 {
        COMPETITIVE_POSITION
    } else {
        DEVELOPING_POSITION
    }
}

pub fn career_progression(job_title: &str) -> Vec<String> {
    let title = job_title.to_lowercase();
    PROGRESSION_PATHS
        .iter()
        .find(|(known, _)| title.contains(&known.to_lowercase()))
        .map(|(_, path)| *path)
        .unwrap_or(DEFAULT_PROGRESSION)
        .iter()
        .map(|s| s.to_string())
        .collect()
}

pub fn analyze_market(
    resume: &ResumeProfile,
    job: &JobPosting,
    skills: &SkillsAnalysis,
    dictionary: &KeywordDictionary,
) -> MarketAnalysis {
    MarketAnalysis {
        industry_trends: dictionary.market_trends(job.industry).to_vec(),
        competitive_positioning: competitive_positioning(
            skills.match_percentage,
            resume.total_experience_years,
            job.required_experience_years,
        )
        .to_string(),
        career_progression: career_progression(&job.job_title),
        risk_factors: dictionary.risk_factors(job.industry).to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::models::Industry;

    #[test]
    fn test_positioning_tiers() {
        assert_eq!(competitive_positioning(100.0, 5, 3), STRONG_POSITION);
        assert_eq!(competitive_positioning(70.0, 4, 5), COMPETITIVE_POSITION);
        assert_eq!(competitive_positioning(90.0, 1, 5), DEVELOPING_POSITION);
        assert_eq!(competitive_positioning(80.0, 0, 0), STRONG_POSITION);
    }

    #[test]
    fn test_progression_by_title() {
        assert_eq!(career_progression("Senior Software Engineer")[1], "Tech Lead");
        assert_eq!(career_progression("marketing manager, EMEA")[3], "CMO");
        assert_eq!(career_progression("Barista"), vec![
            "Senior Role".to_string(),
            "Management Position".to_string(),
            "Director Level".to_string(),
            "Executive Role".to_string(),
        ]);
    }

    #[test]
    fn test_trends_and_risks_follow_industry() {
        let dict = KeywordDictionary::builtin();
        assert_eq!(dict.market_trends(Industry::Finance).len(), 6);
        assert_eq!(dict.risk_factors(Industry::Marketing)[0], "Privacy regulations affecting data usage");
    }
}
