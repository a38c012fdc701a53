use crate::analysis::dictionaries::KeywordDictionary;
use crate::analysis::extractor::{contains_term, sentences};
use crate::analysis::models::{
    Certification, Importance, Industry, JobPosting, LearningRecommendation, LearningResource,
    Rating, RequirementLevel, ResourceType, ResumeProfile, SkillGap, SkillLevel, SkillMatch,
    SkillsAnalysis, SkillsReport,
};

pub const MAX_SKILL_GAPS: usize = 8;
pub const MAX_EVIDENCE_LINES: usize = 2;
pub const LEARNING_PATH_LENGTH: usize = 3;

const CRITICAL_SKILLS: &[&str] = &["JavaScript", "Python", "Java", "React", "Node.js", "SQL", "AWS"];
const IMPORTANT_SKILLS: &[&str] = &["TypeScript", "Docker", "Kubernetes", "MongoDB", "Redis"];

const LEARNING_TIMES: &[(&str, &str)] = &[
    ("JavaScript", "2-3 months"),
    ("React", "1-2 months"),
    ("Python", "2-4 months"),
    ("AWS", "3-6 months"),
    ("Docker", "2-4 weeks"),
    ("Kubernetes", "2-3 months"),
];
const DEFAULT_LEARNING_TIME: &str = "1-3 months";

const LEARNING_RESOURCES: &[(&str, &[&str])] = &[
    ("JavaScript", &["MDN Web Docs", "JavaScript.info", "FreeCodeCamp", "Codecademy"]),
    ("React", &["React Official Docs", "React Tutorial", "Scrimba React Course", "Udemy React Courses"]),
    ("Python", &["Python.org Tutorial", "Automate the Boring Stuff", "Python Crash Course", "Codecademy Python"]),
    ("AWS", &["AWS Training", "A Cloud Guru", "Linux Academy", "AWS Documentation"]),
];
const DEFAULT_LEARNING_RESOURCES: &[&str] = &[
    "Online courses",
    "Official documentation",
    "Practice projects",
    "Community forums",
];

const ALTERNATIVE_SKILLS: &[(&str, &[&str])] = &[
    ("React", &["Vue.js", "Angular", "Svelte"]),
    ("AWS", &["Azure", "Google Cloud", "DigitalOcean"]),
    ("Python", &["JavaScript", "Java", "Go"]),
    ("MongoDB", &["PostgreSQL", "MySQL", "Redis"]),
];

fn lookup<'a, T: Copy>(table: &'a [(&'a str, T)], skill: &str) -> Option<T> {
    table
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(skill))
        .map(|(_, value)| *value)
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn skill_importance(skill: &str) -> Importance {
    if CRITICAL_SKILLS.iter().any(|s| s.eq_ignore_ascii_case(skill)) {
        Importance::Critical
    } else if IMPORTANT_SKILLS.iter().any(|s| s.eq_ignore_ascii_case(skill)) {
        Importance::Important
    } else {
        Importance::Beneficial
    }
}

pub fn learning_time(skill: &str) -> &'static str {
    lookup(LEARNING_TIMES, skill).unwrap_or(DEFAULT_LEARNING_TIME)
}

pub fn learning_resources(skill: &str) -> Vec<String> {
    owned(lookup(LEARNING_RESOURCES, skill).unwrap_or(DEFAULT_LEARNING_RESOURCES))
}

pub fn alternative_skills(skill: &str) -> Vec<String> {
    lookup(ALTERNATIVE_SKILLS, skill).map(owned).unwrap_or_default()
}

/// Resume sentences that name the skill.
fn evidence_for(skill: &str, resume_sentences: &[&str]) -> Vec<String> {
    let term = skill.to_lowercase();
    resume_sentences
        .iter()
        .filter(|s| contains_term(&s.to_lowercase(), &term))
        .map(|s| s.to_string())
        .collect()
}

/// Candidate level from how many resume sentences mention the skill.
pub fn level_from_mentions(mentions: usize) -> SkillLevel {
    match mentions {
        0 => SkillLevel::Beginner,
        1 => SkillLevel::Familiar,
        2..=3 => SkillLevel::Proficient,
        _ => SkillLevel::Expert,
    }
}

/// 60 for a match by name only, plus 10 per mentioning sentence, capped at 100.
pub fn match_strength(mentions: usize) -> u32 {
    (60 + 10 * mentions.min(4) as u32).min(100)
}

fn requirement_level(skill: &str, job: &JobPosting, dictionary: &KeywordDictionary) -> RequirementLevel {
    if job.required_skills.iter().any(|s| s == skill) {
        RequirementLevel::Required
    } else if dictionary.soft_skills.iter().any(|s| s == skill) {
        RequirementLevel::NiceToHave
    } else {
        RequirementLevel::Preferred
    }
}

pub fn describe_matches(
    resume: &ResumeProfile,
    job: &JobPosting,
    skills: &SkillsAnalysis,
    dictionary: &KeywordDictionary,
) -> Vec<SkillMatch> {
    let resume_sentences = sentences(&resume.raw_text);

    skills
        .matched_skills
        .iter()
        .map(|skill| {
            let evidence = evidence_for(skill, &resume_sentences);
            let mentions = evidence.len();
            SkillMatch {
                skill: skill.clone(),
                job_requirement: requirement_level(skill, job, dictionary),
                candidate_level: level_from_mentions(mentions),
                match_strength: match_strength(mentions),
                evidence_from_resume: evidence.into_iter().take(MAX_EVIDENCE_LINES).collect(),
            }
        })
        .collect()
}

pub fn skill_gaps(missing_skills: &[String]) -> Vec<SkillGap> {
    missing_skills
        .iter()
        .take(MAX_SKILL_GAPS)
        .map(|skill| SkillGap {
            skill: skill.clone(),
            importance: skill_importance(skill),
            time_to_acquire: learning_time(skill).to_string(),
            learning_resources: learning_resources(skill),
            alternative_skills: alternative_skills(skill),
        })
        .collect()
}

fn certification(
    name: &str,
    provider: &str,
    relevance_score: u32,
    time_to_complete: &str,
    cost: &str,
    industry_recognition: Rating,
) -> Certification {
    Certification {
        name: name.to_string(),
        provider: provider.to_string(),
        relevance_score,
        time_to_complete: time_to_complete.to_string(),
        cost: cost.to_string(),
        industry_recognition,
    }
}

/// Certifications worth pursuing for an industry. `General` gets the technology set.
pub fn recommend_certifications(industry: Industry) -> Vec<Certification> {
    match industry {
        Industry::Finance => vec![
            certification("CFA Level I", "CFA Institute", 95, "6-12 months", "$1,000", Rating::High),
            certification("Financial Risk Manager (FRM) Part I", "GARP", 85, "6 months", "$800", Rating::High),
        ],
        Industry::Marketing => vec![
            certification("Google Analytics Certified", "Google", 80, "1-2 weeks", "Free", Rating::Medium),
            certification("HubSpot Content Marketing", "HubSpot Academy", 70, "1 week", "Free", Rating::Medium),
        ],
        Industry::Technology | Industry::General => vec![
            certification(
                "AWS Certified Solutions Architect",
                "Amazon Web Services",
                90,
                "2-3 months",
                "$150",
                Rating::High,
            ),
            certification(
                "Google Cloud Professional Cloud Architect",
                "Google Cloud",
                85,
                "2-3 months",
                "$200",
                Rating::High,
            ),
        ],
    }
}

/// Beginner-to-proficient plans for the first few gaps.
pub fn learning_path(gaps: &[SkillGap]) -> Vec<LearningRecommendation> {
    gaps.iter()
        .take(LEARNING_PATH_LENGTH)
        .map(|gap| LearningRecommendation {
            skill: gap.skill.clone(),
            current_level: "beginner".to_string(),
            target_level: "proficient".to_string(),
            resources: gap
                .learning_resources
                .iter()
                .map(|provider| LearningResource {
                    kind: ResourceType::Course,
                    name: format!("{} Fundamentals", gap.skill),
                    provider: provider.clone(),
                    duration: gap.time_to_acquire.clone(),
                    cost: "Free - $50".to_string(),
                })
                .collect(),
            timeline: gap.time_to_acquire.clone(),
        })
        .collect()
}

pub fn build_skills_report(
    resume: &ResumeProfile,
    job: &JobPosting,
    skills: &SkillsAnalysis,
    dictionary: &KeywordDictionary,
) -> SkillsReport {
    let gaps = skill_gaps(&skills.missing_skills);
    SkillsReport {
        matched_skills: describe_matches(resume, job, skills, dictionary),
        recommended_certifications: recommend_certifications(job.industry),
        learning_path: learning_path(&gaps),
        skill_gaps: gaps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::models::WritingQuality;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn resume(raw: &str) -> ResumeProfile {
        ResumeProfile {
            total_experience_years: 3,
            skills: vec![],
            achievements: vec![],
            education: vec![],
            certifications: vec![],
            writing_quality: WritingQuality {
                avg_sentence_length: 8.0,
                action_verb_count: 1,
                readability_score: 100,
            },
            raw_text: raw.to_string(),
        }
    }

    fn job(required: &[&str], preferred: &[&str]) -> JobPosting {
        JobPosting {
            company: "Soylent".to_string(),
            job_title: "Engineer".to_string(),
            location: "Unspecified".to_string(),
            industry: Industry::Technology,
            required_experience_years: 2,
            salary_range: None,
            required_skills: strings(required),
            preferred_skills: strings(preferred),
            culture_keywords: vec![],
            responsibilities: vec![],
            raw_text: String::new(),
        }
    }

    #[test]
    fn test_gap_lookups() {
        assert_eq!(skill_importance("react"), Importance::Critical);
        assert_eq!(skill_importance("Docker"), Importance::Important);
        assert_eq!(skill_importance("Terraform"), Importance::Beneficial);
        assert_eq!(learning_time("Docker"), "2-4 weeks");
        assert_eq!(learning_time("Terraform"), DEFAULT_LEARNING_TIME);
        assert_eq!(learning_resources("AWS")[1], "A Cloud Guru");
        assert_eq!(learning_resources("Go").len(), 4);
        assert_eq!(alternative_skills("MongoDB"), strings(&["PostgreSQL", "MySQL", "Redis"]));
        assert!(alternative_skills("Go").is_empty());
    }

    #[test]
    fn test_gaps_are_capped() {
        let missing: Vec<String> = (0..12).map(|i| format!("Skill{i}")).collect();
        assert_eq!(skill_gaps(&missing).len(), MAX_SKILL_GAPS);
    }

    #[test]
    fn test_match_detail_is_deterministic_and_quotes_resume() {
        let r = resume("Built services in Rust. Rust in production for 3 years. Led Docker rollout.");
        let j = job(&["Rust"], &["Docker", "Leadership"]);
        let analysis = SkillsAnalysis {
            matched_skills: strings(&["Rust", "Docker", "Leadership"]),
            missing_skills: vec![],
            match_percentage: 100.0,
        };
        let dict = KeywordDictionary::builtin();
        let first = describe_matches(&r, &j, &analysis, &dict);
        let second = describe_matches(&r, &j, &analysis, &dict);
        assert_eq!(first, second);

        assert_eq!(first[0].job_requirement, RequirementLevel::Required);
        assert_eq!(first[0].candidate_level, SkillLevel::Proficient);
        assert_eq!(first[0].match_strength, 80);
        assert_eq!(first[0].evidence_from_resume, strings(&["Built services in Rust", "Rust in production for 3 years"]));

        assert_eq!(first[1].job_requirement, RequirementLevel::Preferred);
        assert_eq!(first[1].candidate_level, SkillLevel::Familiar);
        assert_eq!(first[2].job_requirement, RequirementLevel::NiceToHave);
        assert_eq!(first[2].match_strength, 60);
    }

    #[test]
    fn test_certifications_by_industry() {
        assert_eq!(recommend_certifications(Industry::Finance)[0].name, "CFA Level I");
        assert_eq!(recommend_certifications(Industry::Marketing)[0].cost, "Free");
        assert_eq!(
            recommend_certifications(Industry::General),
            recommend_certifications(Industry::Technology)
        );
    }

    #[test]
    fn test_learning_path_covers_top_three_gaps() {
        let gaps = skill_gaps(&strings(&["React", "AWS", "Python", "Go"]));
        let path = learning_path(&gaps);
        assert_eq!(path.len(), LEARNING_PATH_LENGTH);
        assert_eq!(path[0].skill, "React");
        assert_eq!(path[0].timeline, "1-2 months");
        assert_eq!(path[0].resources[0].name, "React Fundamentals");
        assert_eq!(path[0].resources[0].provider, "React Official Docs");
        assert_eq!(path[0].resources[0].kind, ResourceType::Course);
    }
}
