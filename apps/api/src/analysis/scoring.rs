//! All scores are integers clamped to 0 – 100.

use std::collections::HashSet;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analysis::dictionaries::KeywordDictionary;
use crate::analysis::extractor::count_action_verbs;
use crate::analysis::models::{CompatibilityScores, JobPosting, ResumeProfile, SkillsAnalysis};

const MIN_ATS_KEYWORDS: usize = 5;
const MIN_ACTION_VERBS: usize = 3;
const SHORT_RESUME_CHARS: usize = 500;
const LONG_RESUME_CHARS: usize = 3000;

const MISSING_KEYWORDS_PENALTY: i32 = 20;
const SHORT_RESUME_PENALTY: i32 = 15;
const LONG_RESUME_PENALTY: i32 = 10;
const NO_METRICS_PENALTY: i32 = 15;
const FEW_VERBS_PENALTY: i32 = 10;
const NO_BULLETS_PENALTY: i32 = 10;

/// Tokens this short never count toward keyword density.
const MIN_TOKEN_CHARS: usize = 4;

static QUANTIFIED_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\d+%|\d+\+|increased|improved|reduced|achieved|generated|\$[\d,]+")
        .unwrap_or_else(|e| panic!("invalid quantified-achievement pattern: {e}"))
});

/// Weights of the four sub-scores in the overall score. They sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub ats: f64,
    pub keyword_density: f64,
    pub experience_alignment: f64,
    pub skills_match: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            ats: 0.30,
            keyword_density: 0.25,
            experience_alignment: 0.25,
            skills_match: 0.20,
        }
    }
}

impl ScoringWeights {
    pub fn equal() -> Self {
        Self {
            ats: 0.25,
            keyword_density: 0.25,
            experience_alignment: 0.25,
            skills_match: 0.25,
        }
    }
}

/// Named weight presets selectable from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScoringProfile {
    #[default]
    Weighted,
    Equal,
}

impl ScoringProfile {
    pub fn weights(self) -> ScoringWeights {
        match self {
            ScoringProfile::Weighted => ScoringWeights::default(),
            ScoringProfile::Equal => ScoringWeights::equal(),
        }
    }
}

impl FromStr for ScoringProfile {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "weighted" => Ok(ScoringProfile::Weighted),
            "equal" => Ok(ScoringProfile::Equal),
            other => Err(anyhow::anyhow!(
                "unknown scoring profile '{other}', expected 'weighted' or 'equal'"
            )),
        }
    }
}

fn clamp_score(value: f64) -> u32 {
    value.round().clamp(0.0, 100.0) as u32
}

/// Heuristic ATS-friendliness of a resume: 100 minus rule penalties.
pub fn ats_score(resume_text: &str, dictionary: &KeywordDictionary) -> u32 {
    let lower = resume_text.to_lowercase();
    let mut score: i32 = 100;

    let keyword_hits = dictionary
        .ats_keywords
        .iter()
        .filter(|k| lower.contains(k.as_str()))
        .count();
    if keyword_hits < MIN_ATS_KEYWORDS {
        score -= MISSING_KEYWORDS_PENALTY;
    }

    let length = resume_text.chars().count();
    if length < SHORT_RESUME_CHARS {
        score -= SHORT_RESUME_PENALTY;
    } else if length > LONG_RESUME_CHARS {
        score -= LONG_RESUME_PENALTY;
    }

    if !QUANTIFIED_RE.is_match(resume_text) {
        score -= NO_METRICS_PENALTY;
    }

    if count_action_verbs(resume_text, dictionary) < MIN_ACTION_VERBS {
        score -= FEW_VERBS_PENALTY;
    }

    if !resume_text.contains(&['•', '-', '*'][..]) {
        score -= NO_BULLETS_PENALTY;
    }

    score.clamp(0, 100) as u32
}

/// Unique job-posting vocabulary: whitespace tokens, edge punctuation trimmed,
/// lowercased, stop-words and short tokens dropped.
pub fn vocabulary_tokens(text: &str, stop_words: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    text.split_whitespace()
        .map(|t| {
            t.trim_matches(|c: char| !c.is_alphanumeric() && c != '+' && c != '#')
                .to_lowercase()
        })
        .filter(|t| t.chars().count() >= MIN_TOKEN_CHARS)
        .filter(|t| !stop_words.iter().any(|s| s == t))
        .filter(|t| seen.insert(t.clone()))
        .collect()
}

/// Share of the job's unique vocabulary that also appears in the resume.
pub fn keyword_density_score(job_text: &str, resume_text: &str, stop_words: &[String]) -> u32 {
    let tokens = vocabulary_tokens(job_text, stop_words);
    if tokens.is_empty() {
        return 0;
    }
    let resume_lower = resume_text.to_lowercase();
    let found = tokens
        .iter()
        .filter(|t| resume_lower.contains(t.as_str()))
        .count();
    clamp_score(found as f64 / tokens.len() as f64 * 100.0)
}

pub fn experience_alignment_score(candidate_years: u32, required_years: u32) -> u32 {
    if required_years == 0 {
        return 100;
    }
    clamp_score(candidate_years as f64 / required_years as f64 * 100.0)
}

pub fn skills_match_score(skills: &SkillsAnalysis) -> u32 {
    clamp_score(skills.match_percentage)
}

pub fn overall_score(
    weights: &ScoringWeights,
    ats: u32,
    keyword_density: u32,
    experience_alignment: u32,
    skills_match: u32,
) -> u32 {
    clamp_score(
        weights.ats * ats as f64
            + weights.keyword_density * keyword_density as f64
            + weights.experience_alignment * experience_alignment as f64
            + weights.skills_match * skills_match as f64,
    )
}

pub fn compute_scores(
    resume: &ResumeProfile,
    job: &JobPosting,
    skills: &SkillsAnalysis,
    dictionary: &KeywordDictionary,
    weights: &ScoringWeights,
) -> CompatibilityScores {
    let ats = ats_score(&resume.raw_text, dictionary);
    let keyword_density =
        keyword_density_score(&job.raw_text, &resume.raw_text, &dictionary.stop_words);
    let experience_alignment = experience_alignment_score(
        resume.total_experience_years,
        job.required_experience_years,
    );
    let skills_match = skills_match_score(skills);

    CompatibilityScores {
        ats,
        keyword_density,
        experience_alignment,
        skills_match,
        overall: overall_score(weights, ats, keyword_density, experience_alignment, skills_match),
    }
}
