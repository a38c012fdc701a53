//! Two skills match when, lowercased, they are equal or either contains the
//! other. This over-matches ("Java" covers "JavaScript") and the scores
//! downstream are calibrated against that behaviour.

use crate::analysis::models::SkillsAnalysis;

pub fn skills_match(a: &str, b: &str) -> bool {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    a == b || a.contains(&b) || b.contains(&a)
}

/// Job skills partitioned into matched / missing, in job order.
pub fn match_skills(resume_skills: &[String], job_skills: &[String]) -> SkillsAnalysis {
    let (matched_skills, missing_skills): (Vec<String>, Vec<String>) = job_skills
        .iter()
        .cloned()
        .partition(|job_skill| resume_skills.iter().any(|r| skills_match(r, job_skill)));

    let match_percentage = if job_skills.is_empty() {
        100.0
    } else {
        matched_skills.len() as f64 / job_skills.len() as f64 * 100.0
    };

    SkillsAnalysis {
        matched_skills,
        missing_skills,
        match_percentage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_exact_match_is_case_insensitive() {
        assert!(skills_match("react", "React"));
    }

    #[test]
    fn test_substring_matches_either_direction() {
        assert!(skills_match("Java", "JavaScript"));
        assert!(skills_match("JavaScript", "Java"));
        assert!(!skills_match("Python", "Ruby"));
    }

    #[test]
    fn test_match_partition_and_percentage() {
        let result = match_skills(
            &skills(&["Rust", "Docker"]),
            &skills(&["Rust", "Kubernetes", "Docker", "Terraform"]),
        );
        assert_eq!(result.matched_skills, skills(&["Rust", "Docker"]));
        assert_eq!(result.missing_skills, skills(&["Kubernetes", "Terraform"]));
        assert!((result.match_percentage - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_job_skills_is_full_match() {
        let result = match_skills(&skills(&["Rust"]), &[]);
        assert!(result.missing_skills.is_empty());
        assert!((result.match_percentage - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_no_resume_skills_misses_everything() {
        let result = match_skills(&[], &skills(&["SQL", "Excel VBA"]));
        assert!(result.matched_skills.is_empty());
        assert_eq!(result.missing_skills.len(), 2);
        assert_eq!(result.match_percentage, 0.0);
    }
}
