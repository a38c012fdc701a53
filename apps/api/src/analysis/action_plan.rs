//! Three-phase action plan: immediate, short term, long term.

use crate::analysis::models::{
    ActionItem, ActionPlan, Certification, CompatibilityScores, Priority, SkillsAnalysis,
};

/// Below this ATS score the resume fix is the first thing to do.
const ATS_TARGET: u32 = 85;

fn item(task: String, priority: Priority, timeframe: &str, resources: Vec<String>, success_metrics: &[&str]) -> ActionItem {
    ActionItem {
        task,
        priority,
        timeframe: timeframe.to_string(),
        resources,
        success_metrics: success_metrics.iter().map(|s| s.to_string()).collect(),
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn immediate(skills: &SkillsAnalysis, scores: &CompatibilityScores) -> Vec<ActionItem> {
    let resume_priority = if scores.ats < ATS_TARGET || !skills.missing_skills.is_empty() {
        Priority::Critical
    } else {
        Priority::High
    };
    let mut resume_resources = owned(&["Resume template", "ATS checker", "Professional review"]);
    if !skills.missing_skills.is_empty() {
        let top: Vec<&str> = skills.missing_skills.iter().take(5).map(String::as_str).collect();
        resume_resources.insert(0, format!("Keywords to add: {}", top.join(", ")));
    }

    vec![
        item(
            "Optimize resume with missing critical keywords and improve ATS compatibility".to_string(),
            resume_priority,
            "1-2 days",
            resume_resources,
            &["ATS compatibility score > 85%", "Keyword density > 75%", "Professional formatting achieved"],
        ),
        item(
            "Customize cover letter for specific role and company culture".to_string(),
            Priority::Critical,
            "1 day",
            owned(&["Company research", "Cover letter template", "Industry insights", "Professional examples"]),
            &["Personalized content created", "Company-specific value proposition included", "Professional tone achieved"],
        ),
    ]
}

fn short_term(skills: &SkillsAnalysis) -> Vec<ActionItem> {
    let missing = skills.missing_skills.len();
    let skills_item = if missing == 0 {
        item(
            "Deepen expertise in your matched skills with an advanced project".to_string(),
            Priority::Medium,
            "2-4 weeks",
            owned(&["Advanced courses", "Open source contributions", "Professional communities"]),
            &["Project published", "Portfolio updated with new work"],
        )
    } else {
        let top: Vec<&str> = skills.missing_skills.iter().take(3).map(String::as_str).collect();
        item(
            format!(
                "Develop {missing} missing technical skill{} ({}) through targeted learning and practice",
                if missing == 1 { "" } else { "s" },
                top.join(", ")
            ),
            Priority::High,
            if missing <= 2 { "2-4 weeks" } else { "2-8 weeks" },
            owned(&["Online courses", "Practice projects", "Mentorship", "Professional communities"]),
            &["Skill proficiency demonstrated", "Portfolio updated with new projects", "Certifications obtained"],
        )
    };

    vec![
        skills_item,
        item(
            "Prepare comprehensive interview strategy and practice sessions".to_string(),
            Priority::High,
            "1-2 weeks",
            owned(&["Interview guides", "Mock interview practice", "STAR method training", "Company research"]),
            &["5+ STAR stories prepared", "Confident delivery achieved", "Company knowledge demonstrated"],
        ),
    ]
}

fn long_term(certifications: &[Certification]) -> Vec<ActionItem> {
    let mut cert_resources: Vec<String> = certifications.iter().map(|c| c.name.clone()).collect();
    cert_resources.extend(owned(&["Advanced courses", "Industry conferences"]));

    vec![
        item(
            "Build comprehensive professional portfolio and online presence".to_string(),
            Priority::Medium,
            "3-6 months",
            owned(&["Portfolio platform", "Project ideas", "Professional network", "Content creation tools"]),
            &["5+ portfolio projects completed", "Professional online presence established", "Industry recognition gained"],
        ),
        item(
            "Pursue relevant certifications and advanced skill development".to_string(),
            Priority::Medium,
            "6-12 months",
            cert_resources,
            &["Professional certifications obtained", "Advanced skills demonstrated", "Industry expertise recognized"],
        ),
    ]
}

pub fn build_action_plan(
    skills: &SkillsAnalysis,
    scores: &CompatibilityScores,
    certifications: &[Certification],
) -> ActionPlan {
    ActionPlan {
        immediate: immediate(skills, scores),
        short_term: short_term(skills),
        long_term: long_term(certifications),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::models::Industry;
    use crate::analysis::skills_report::recommend_certifications;

    fn scores(ats: u32) -> CompatibilityScores {
        CompatibilityScores {
            ats,
            keyword_density: 50,
            experience_alignment: 100,
            skills_match: 50,
            overall: 70,
        }
    }

    fn analysis(missing: &[&str]) -> SkillsAnalysis {
        SkillsAnalysis {
            matched_skills: vec!["Rust".to_string()],
            missing_skills: missing.iter().map(|s| s.to_string()).collect(),
            match_percentage: 50.0,
        }
    }

    #[test]
    fn test_plan_has_two_items_per_phase() {
        let certs = recommend_certifications(Industry::Technology);
        let plan = build_action_plan(&analysis(&["Go"]), &scores(90), &certs);
        assert_eq!(plan.immediate.len(), 2);
        assert_eq!(plan.short_term.len(), 2);
        assert_eq!(plan.long_term.len(), 2);
        assert_eq!(plan.long_term[1].resources[0], "AWS Certified Solutions Architect");
    }

    #[test]
    fn test_missing_skills_shape_the_plan() {
        let plan = build_action_plan(&analysis(&["Go", "Kafka", "Redis", "Terraform"]), &scores(90), &[]);
        assert_eq!(plan.immediate[0].priority, Priority::Critical);
        assert_eq!(plan.immediate[0].resources[0], "Keywords to add: Go, Kafka, Redis, Terraform");
        assert_eq!(
            plan.short_term[0].task,
            "Develop 4 missing technical skills (Go, Kafka, Redis) through targeted learning and practice"
        );
        assert_eq!(plan.short_term[0].timeframe, "2-8 weeks");
    }

    #[test]
    fn test_no_missing_skills_and_good_ats() {
        let plan = build_action_plan(&analysis(&[]), &scores(95), &[]);
        assert_eq!(plan.immediate[0].priority, Priority::High);
        assert_eq!(plan.short_term[0].priority, Priority::Medium);
        assert!(plan.short_term[0].task.starts_with("Deepen expertise"));
    }
}
