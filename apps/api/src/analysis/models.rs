//! Everything here is a value object built once per `analyze` call. Result types
//! serialize with camelCase field names, which is the shape the browser client reads.

use std::fmt;

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Extracted inputs
// ────────────────────────────────────────────────────────────────────────────

/// Industry bucket a job posting is classified into. Drives dictionary selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Industry {
    Technology,
    Finance,
    Marketing,
    #[default]
    General,
}

impl Industry {
    pub fn as_str(&self) -> &'static str {
        match self {
            Industry::Technology => "technology",
            Industry::Finance => "finance",
            Industry::Marketing => "marketing",
            Industry::General => "general",
        }
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A salary range stated in a job posting, in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: u32,
    pub max: u32,
}

/// Structured fields pulled out of a raw job posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub company: String,
    pub job_title: String,
    pub location: String,
    pub industry: Industry,
    pub required_experience_years: u32,
    pub salary_range: Option<SalaryRange>,
    pub required_skills: Vec<String>,
    pub preferred_skills: Vec<String>,
    pub culture_keywords: Vec<String>,
    /// At most 8, in posting order.
    pub responsibilities: Vec<String>,
    pub raw_text: String,
}

impl JobPosting {
    /// Required skills followed by preferred skills.
    pub fn all_skills(&self) -> Vec<String> {
        self.required_skills
            .iter()
            .chain(self.preferred_skills.iter())
            .cloned()
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WritingQuality {
    pub avg_sentence_length: f64,
    pub action_verb_count: usize,
    /// 0 – 100
    pub readability_score: u32,
}

/// Structured fields pulled out of a raw resume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeProfile {
    pub total_experience_years: u32,
    pub skills: Vec<String>,
    /// At most 8 achievement-shaped sentences.
    pub achievements: Vec<String>,
    /// At most 3 lines.
    pub education: Vec<String>,
    /// At most 5 lines.
    pub certifications: Vec<String>,
    pub writing_quality: WritingQuality,
    pub raw_text: String,
}

/// Outcome of matching resume skills against job skills.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillsAnalysis {
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    /// 0.0 – 100.0, not rounded. 100 when the job lists no skills.
    pub match_percentage: f64,
}

/// The four sub-scores and their weighted overall, each in 0 – 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityScores {
    pub ats: u32,
    pub keyword_density: u32,
    pub experience_alignment: u32,
    pub skills_match: u32,
    pub overall: u32,
}

// ────────────────────────────────────────────────────────────────────────────
// Shared enums
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Critical => "critical",
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

/// High / medium / low rating used for strength impact and certification recognition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    High,
    Medium,
    Low,
}

// ────────────────────────────────────────────────────────────────────────────
// Cover letter
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoverLetterTone {
    #[default]
    Professional,
    Enthusiastic,
    Technical,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverLetter {
    pub content: String,
    pub tone: CoverLetterTone,
    pub word_count: usize,
    /// Share of job skills named in the letter, 0 – 100.
    pub keyword_density: u32,
}

// ────────────────────────────────────────────────────────────────────────────
// Resume critique
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrengthCategory {
    Experience,
    Skills,
    Achievements,
    Education,
    Leadership,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeStrength {
    pub category: StrengthCategory,
    pub description: String,
    pub impact: Rating,
    pub relevance_score: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeaknessCategory {
    Formatting,
    Content,
    Keywords,
    Achievements,
    Skills,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Moderate,
    Minor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeWeakness {
    pub category: WeaknessCategory,
    pub issue: String,
    pub severity: Severity,
    pub recommendation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionType {
    Add,
    Modify,
    Remove,
    Restructure,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeSuggestion {
    #[serde(rename = "type")]
    pub kind: SuggestionType,
    pub section: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current: Option<String>,
    pub suggested: String,
    pub reasoning: String,
    pub priority: Priority,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeAnalysis {
    pub strengths: Vec<ResumeStrength>,
    pub weaknesses: Vec<ResumeWeakness>,
    pub suggestions: Vec<ResumeSuggestion>,
    pub missing_keywords: Vec<String>,
    pub ats_optimizations: Vec<String>,
    pub quantifiable_achievements: usize,
    pub action_verb_usage: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Interview preparation
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionType {
    Behavioral,
    Technical,
    Situational,
    CulturalFit,
}

impl QuestionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::Behavioral => "behavioral",
            QuestionType::Technical => "technical",
            QuestionType::Situational => "situational",
            QuestionType::CulturalFit => "cultural-fit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Entry,
    Mid,
    Senior,
    Executive,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Entry => "entry",
            Difficulty::Mid => "mid",
            Difficulty::Senior => "senior",
            Difficulty::Executive => "executive",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewQuestion {
    pub question: String,
    #[serde(rename = "type")]
    pub kind: QuestionType,
    pub difficulty: Difficulty,
    pub suggested_answer: String,
    pub key_points: Vec<String>,
    pub follow_up_questions: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InsightCategory {
    Culture,
    Values,
    RecentNews,
    Growth,
    Challenges,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyInsight {
    pub category: InsightCategory,
    pub insight: String,
    pub source: String,
    pub relevance_to_role: u32,
}

/// Salary band with a midpoint, in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBand {
    pub min: u32,
    pub max: u32,
    pub median: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryInsights {
    /// Market band for the title, adjusted for location.
    pub range: SalaryBand,
    /// Range stated in the posting, when there is one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posted_range: Option<SalaryRange>,
    pub location: String,
    pub location_multiplier: f64,
    pub factors: Vec<String>,
    pub negotiation_points: Vec<String>,
    pub market_comparison: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewPreparation {
    pub questions: Vec<InterviewQuestion>,
    pub company_research: Vec<CompanyInsight>,
    pub salary_insights: SalaryInsights,
    pub negotiation_tips: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Skills report
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RequirementLevel {
    Required,
    Preferred,
    NiceToHave,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Expert,
    Proficient,
    Familiar,
    Beginner,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillMatch {
    pub skill: String,
    pub job_requirement: RequirementLevel,
    pub candidate_level: SkillLevel,
    pub match_strength: u32,
    pub evidence_from_resume: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    Critical,
    Important,
    Beneficial,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGap {
    pub skill: String,
    pub importance: Importance,
    pub time_to_acquire: String,
    pub learning_resources: Vec<String>,
    pub alternative_skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub name: String,
    pub provider: String,
    pub relevance_score: u32,
    pub time_to_complete: String,
    pub cost: String,
    pub industry_recognition: Rating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Course,
    Book,
    Project,
    Certification,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningResource {
    #[serde(rename = "type")]
    pub kind: ResourceType,
    pub name: String,
    pub provider: String,
    pub duration: String,
    pub cost: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningRecommendation {
    pub skill: String,
    pub current_level: String,
    pub target_level: String,
    pub resources: Vec<LearningResource>,
    pub timeline: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillsReport {
    pub matched_skills: Vec<SkillMatch>,
    pub skill_gaps: Vec<SkillGap>,
    pub recommended_certifications: Vec<Certification>,
    pub learning_path: Vec<LearningRecommendation>,
}

// ────────────────────────────────────────────────────────────────────────────
// Market analysis & action plan
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketAnalysis {
    pub industry_trends: Vec<String>,
    pub competitive_positioning: String,
    pub career_progression: Vec<String>,
    pub risk_factors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionItem {
    pub task: String,
    pub priority: Priority,
    pub timeframe: String,
    pub resources: Vec<String>,
    pub success_metrics: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionPlan {
    pub immediate: Vec<ActionItem>,
    pub short_term: Vec<ActionItem>,
    pub long_term: Vec<ActionItem>,
}

// ────────────────────────────────────────────────────────────────────────────
// Aggregate
// ────────────────────────────────────────────────────────────────────────────

/// The full analysis bundle. Read-only once assembled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerAnalysisResult {
    pub overall_score: u32,
    pub ats_compatibility_score: u32,
    pub keyword_density_score: u32,
    pub experience_alignment_score: u32,
    pub skills_match_score: u32,
    pub cover_letter: CoverLetter,
    pub resume_analysis: ResumeAnalysis,
    pub interview_preparation: InterviewPreparation,
    pub skills_analysis: SkillsReport,
    pub market_analysis: MarketAnalysis,
    pub action_plan: ActionPlan,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_industry_serde_is_snake_case() {
        let json = serde_json::to_string(&Industry::Technology).unwrap();
        assert_eq!(json, r#""technology""#);
        let parsed: Industry = serde_json::from_str(r#""general""#).unwrap();
        assert_eq!(parsed, Industry::General);
    }

    #[test]
    fn test_question_type_cultural_fit_is_kebab_case() {
        let json = serde_json::to_string(&QuestionType::CulturalFit).unwrap();
        assert_eq!(json, r#""cultural-fit""#);
        assert_eq!(QuestionType::CulturalFit.as_str(), "cultural-fit");
    }

    #[test]
    fn test_suggestion_serializes_kind_as_type_and_skips_empty_current() {
        let suggestion = ResumeSuggestion {
            kind: SuggestionType::Add,
            section: "Skills".to_string(),
            current: None,
            suggested: "Add Rust".to_string(),
            reasoning: "Listed in the posting".to_string(),
            priority: Priority::High,
        };
        let value = serde_json::to_value(&suggestion).unwrap();
        assert_eq!(value["type"], "add");
        assert_eq!(value["priority"], "high");
        assert!(value.get("current").is_none());
    }

    #[test]
    fn test_all_skills_lists_required_before_preferred() {
        let job = JobPosting {
            company: "the company".to_string(),
            job_title: "this position".to_string(),
            location: "Unspecified".to_string(),
            industry: Industry::General,
            required_experience_years: 0,
            salary_range: None,
            required_skills: vec!["Rust".to_string()],
            preferred_skills: vec!["Kafka".to_string()],
            culture_keywords: vec![],
            responsibilities: vec![],
            raw_text: String::new(),
        };
        assert_eq!(job.all_skills(), vec!["Rust".to_string(), "Kafka".to_string()]);
    }
}
