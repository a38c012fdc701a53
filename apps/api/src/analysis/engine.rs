//! `CareerAnalyzer` holds only immutable configuration, so one instance is
//! shared across requests behind an `Arc` and calls never interact.

use std::sync::Arc;

use tracing::debug;

use crate::analysis::action_plan::build_action_plan;
use crate::analysis::cover_letter::generate_cover_letter;
use crate::analysis::dictionaries::KeywordDictionary;
use crate::analysis::extractor::{extract_job_posting, extract_resume_profile};
use crate::analysis::interview::prepare_interview;
use crate::analysis::market::analyze_market;
use crate::analysis::matcher::match_skills;
use crate::analysis::models::CareerAnalysisResult;
use crate::analysis::resume_review::review_resume;
use crate::analysis::scoring::{compute_scores, ScoringWeights};
use crate::analysis::skills_report::build_skills_report;

#[derive(Debug, Clone)]
pub struct CareerAnalyzer {
    dictionary: Arc<KeywordDictionary>,
    weights: ScoringWeights,
}

impl Default for CareerAnalyzer {
    fn default() -> Self {
        Self::new(Arc::new(KeywordDictionary::builtin()), ScoringWeights::default())
    }
}

impl CareerAnalyzer {
    pub fn new(dictionary: Arc<KeywordDictionary>, weights: ScoringWeights) -> Self {
        Self { dictionary, weights }
    }

    pub fn dictionary(&self) -> &KeywordDictionary {
        &self.dictionary
    }

    /// Never fails: sparse or empty input yields a result built from defaults.
    pub fn analyze(&self, resume_text: &str, job_posting_text: &str) -> CareerAnalysisResult {
        let dictionary = self.dictionary.as_ref();

        let job = extract_job_posting(job_posting_text, dictionary);
        debug!(
            industry = %job.industry,
            company = %job.company,
            title = %job.job_title,
            required = job.required_skills.len(),
            preferred = job.preferred_skills.len(),
            "Extracted job posting"
        );

        let resume = extract_resume_profile(resume_text, job.industry, dictionary);
        debug!(
            years = resume.total_experience_years,
            skills = resume.skills.len(),
            achievements = resume.achievements.len(),
            "Extracted resume profile"
        );

        let skills = match_skills(&resume.skills, &job.all_skills());
        debug!(
            matched = skills.matched_skills.len(),
            missing = skills.missing_skills.len(),
            "Matched skills"
        );

        let scores = compute_scores(&resume, &job, &skills, dictionary, &self.weights);
        debug!(
            ats = scores.ats,
            keyword_density = scores.keyword_density,
            experience = scores.experience_alignment,
            skills = scores.skills_match,
            overall = scores.overall,
            "Computed scores"
        );

        let cover_letter = generate_cover_letter(&resume, &job, &skills.matched_skills);
        let resume_analysis = review_resume(&resume, &job, &skills, scores.ats);
        let interview_preparation = prepare_interview(&resume, &job, dictionary);
        let skills_report = build_skills_report(&resume, &job, &skills, dictionary);
        let market_analysis = analyze_market(&resume, &job, &skills, dictionary);
        let action_plan =
            build_action_plan(&skills, &scores, &skills_report.recommended_certifications);

        CareerAnalysisResult {
            overall_score: scores.overall,
            ats_compatibility_score: scores.ats,
            keyword_density_score: scores.keyword_density,
            experience_alignment_score: scores.experience_alignment,
            skills_match_score: scores.skills_match,
            cover_letter,
            resume_analysis,
            interview_preparation,
            skills_analysis: skills_report,
            market_analysis,
            action_plan,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::extractor::{DEFAULT_COMPANY, MAX_ACHIEVEMENTS};
    use crate::analysis::models::Industry;

    const RESUME: &str = "Jordan Example\n\
        Senior developer with 5 years of experience building web applications.\n\
        Experience\n\
        - Developed a React dashboard used by 12,000 users.\n\
        - Led a team of 4 engineers and increased release cadence by 30%.\n\
        - Implemented JavaScript tooling that reduced build times by 45%.\n\
        Skills: JavaScript, React, communication, collaboration\n\
        Education: B.S. Computer Science, State University";

    const JOB: &str = "Frontend Engineer at Vandelay Industries\n\
        Location: Chicago, IL\n\
        We need 3+ years of experience.\n\
        JavaScript, React required.";

    fn analyzer() -> CareerAnalyzer {
        CareerAnalyzer::default()
    }

    fn assert_scores_in_range(result: &CareerAnalysisResult) {
        for score in [
            result.overall_score,
            result.ats_compatibility_score,
            result.keyword_density_score,
            result.experience_alignment_score,
            result.skills_match_score,
        ] {
            assert!(score <= 100, "score {score} out of range");
        }
    }

    #[test]
    fn test_scenario_candidate_exceeds_requirement() {
        let result = analyzer().analyze(
            "I have 5 years of experience. Skills: JavaScript, React.",
            "3+ years of experience. JavaScript, React required.",
        );
        assert_eq!(result.experience_alignment_score, 100);
        assert_eq!(result.skills_match_score, 100);

        let matched: Vec<&str> = result
            .skills_analysis
            .matched_skills
            .iter()
            .map(|m| m.skill.as_str())
            .collect();
        assert_eq!(matched, vec!["JavaScript", "React"]);
        assert!(result.skills_analysis.skill_gaps.is_empty());
        assert!(result.resume_analysis.missing_keywords.is_empty());
    }

    #[test]
    fn test_job_without_dictionary_terms_is_full_skills_match() {
        let result = analyzer().analyze(RESUME, "Warehouse shift covering nights and weekends.");
        assert_eq!(result.skills_match_score, 100);
        assert!(result.resume_analysis.missing_keywords.is_empty());
    }

    #[test]
    fn test_short_resume_has_length_penalty() {
        let resume = "Experience, skills, education, work, team. Led, built and developed. \
                      - Increased sales 20%.";
        assert!(resume.len() < 500);
        let result = analyzer().analyze(resume, JOB);
        assert!(result.ats_compatibility_score <= 85);
    }

    #[test]
    fn test_analyze_is_idempotent() {
        let a = analyzer();
        assert_eq!(a.analyze(RESUME, JOB), a.analyze(RESUME, JOB));
    }

    #[test]
    fn test_shared_skill_is_matched_not_missing() {
        let result = analyzer().analyze(
            "Kubernetes operator work and Terraform modules",
            "Engineer role. Kubernetes required, Go required.",
        );
        let matched: Vec<&str> = result
            .skills_analysis
            .matched_skills
            .iter()
            .map(|m| m.skill.as_str())
            .collect();
        assert!(matched.contains(&"Kubernetes"));
        assert!(!result.resume_analysis.missing_keywords.contains(&"Kubernetes".to_string()));
        assert!(result.resume_analysis.missing_keywords.contains(&"Go".to_string()));
    }

    #[test]
    fn test_defaults_on_empty_input() {
        let result = analyzer().analyze("", "");
        assert_scores_in_range(&result);
        assert!(result.cover_letter.content.contains(DEFAULT_COMPANY));
        assert_eq!(result.skills_match_score, 100);
        assert_eq!(result.keyword_density_score, 0);
        assert_eq!(result.experience_alignment_score, 100);
    }

    #[test]
    fn test_full_result_for_realistic_input() {
        let result = analyzer().analyze(RESUME, JOB);
        assert_scores_in_range(&result);
        assert!(result.cover_letter.content.contains("Vandelay Industries"));
        assert!(result.interview_preparation.salary_insights.location_multiplier > 1.0);
        assert_eq!(result.market_analysis.industry_trends.len(), 6);
        assert_eq!(result.action_plan.immediate.len(), 2);
        assert!(result.resume_analysis.strengths.len() <= 6);
    }

    #[test]
    fn test_scores_stay_in_range_for_odd_inputs() {
        let huge = "- Increased revenue 50%. ".repeat(500);
        let inputs = [
            ("", "Rust Rust Rust"),
            (huge.as_str(), "50 years of experience required"),
            ("0 years of experience", "10 years of experience, Python, AWS, Docker, Kubernetes"),
            ("ünïcödé résumé — ✓", "poste: ingénieur • Zürich"),
        ];
        for (resume, job) in inputs {
            assert_scores_in_range(&analyzer().analyze(resume, job));
        }
    }

    #[test]
    fn test_achievements_respect_cap_through_pipeline() {
        let resume: String = (1..=30)
            .map(|i| format!("- Increased throughput {i}% for {i} customers saving ${i},000.\n"))
            .collect();
        let profile = crate::analysis::extractor::extract_resume_profile(
            &resume,
            Industry::General,
            analyzer().dictionary(),
        );
        assert!(profile.achievements.len() <= MAX_ACHIEVEMENTS);
    }

    #[test]
    fn test_equal_weights_change_overall_only() {
        let dictionary = Arc::new(KeywordDictionary::builtin());
        let weighted = CareerAnalyzer::new(dictionary.clone(), ScoringWeights::default()).analyze(RESUME, JOB);
        let equal = CareerAnalyzer::new(dictionary, ScoringWeights::equal()).analyze(RESUME, JOB);
        assert_eq!(weighted.ats_compatibility_score, equal.ats_compatibility_score);
        assert_eq!(weighted.skills_match_score, equal.skills_match_score);
        let expected = ((equal.ats_compatibility_score
            + equal.keyword_density_score
            + equal.experience_alignment_score
            + equal.skills_match_score) as f64
            / 4.0)
            .round() as u32;
        assert_eq!(equal.overall_score, expected);
    }
}
