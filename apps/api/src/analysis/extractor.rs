//! Pulls structured fields out of raw job-posting and resume text.
//!
//! Every field is resolved by an ordered chain of rules: the first rule that
//! matches wins, and a constant fallback covers the rest. Nothing here fails.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::analysis::dictionaries::KeywordDictionary;
use crate::analysis::models::{Industry, JobPosting, ResumeProfile, SalaryRange, WritingQuality};

pub const DEFAULT_COMPANY: &str = "the company";
pub const DEFAULT_JOB_TITLE: &str = "this position";
pub const DEFAULT_LOCATION: &str = "Unspecified";

pub const MAX_RESPONSIBILITIES: usize = 8;
pub const MAX_ACHIEVEMENTS: usize = 8;
pub const MAX_EDUCATION_LINES: usize = 3;
pub const MAX_CERTIFICATION_LINES: usize = 5;

/// Achievement sentences taken per pattern before moving to the next one.
const ACHIEVEMENTS_PER_PATTERN: usize = 2;

// ────────────────────────────────────────────────────────────────────────────
// Rule chains
// ────────────────────────────────────────────────────────────────────────────

/// One extraction attempt. The first capture group is the extracted value.
pub enum FieldRule {
    /// Search the whole text.
    Anywhere(Regex),
    /// Search only the first non-blank line.
    FirstLine(Regex),
}

impl FieldRule {
    fn apply(&self, text: &str) -> Option<String> {
        let (pattern, haystack) = match self {
            FieldRule::Anywhere(re) => (re, text),
            FieldRule::FirstLine(re) => (re, text.lines().find(|l| !l.trim().is_empty())?),
        };
        let value = pattern.captures(haystack)?.get(1)?.as_str();
        let value = value
            .trim()
            .trim_end_matches(|c| matches!(c, '.' | ',' | '!' | ':' | ';'))
            .trim();
        (!value.is_empty()).then(|| value.to_string())
    }
}

pub struct RuleChain {
    rules: Vec<FieldRule>,
    fallback: &'static str,
}

impl RuleChain {
    pub fn extract(&self, text: &str) -> String {
        self.rules
            .iter()
            .find_map(|rule| rule.apply(text))
            .unwrap_or_else(|| self.fallback.to_string())
    }
}

fn regex(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid built-in pattern {pattern}: {e}"))
}

static COMPANY_RULES: Lazy<RuleChain> = Lazy::new(|| RuleChain {
    rules: vec![
        FieldRule::Anywhere(regex(
            r"\b(?i:at|join|company|organization)\s+([A-Z][\w&.'-]*(?:[ \t]+[A-Z][\w&.'-]*)*)",
        )),
        FieldRule::Anywhere(regex(
            r"([A-Z][\w&.'-]*(?:[ \t]+[A-Z][\w&.'-]*)*)\s+(?i:is)\s+(?i:looking|seeking|hiring)",
        )),
    ],
    fallback: DEFAULT_COMPANY,
});

static TITLE_RULES: Lazy<RuleChain> = Lazy::new(|| RuleChain {
    rules: vec![
        FieldRule::Anywhere(regex(
            r"(?i)\b(?:job\s+title|position|role|title)[ \t]*:[ \t]*([^\n\r]+)",
        )),
        FieldRule::FirstLine(regex(
            r"(?i)^\s*(.+?)(?:\s*[-–—|]\s|\s+at\s|\s+position\b)",
        )),
        FieldRule::Anywhere(regex(
            r"(?i)\bhiring\s+(?:an?\s+)?([^\n\r,.!]+?)(?:\s+(?:to|who|for|at|in)\b|[,.!\n\r]|$)",
        )),
    ],
    fallback: DEFAULT_JOB_TITLE,
});

static LOCATION_RULES: Lazy<RuleChain> = Lazy::new(|| RuleChain {
    rules: vec![
        FieldRule::Anywhere(regex(r"(?i)\blocation[ \t]*:[ \t]*([^\n\r]+)")),
        FieldRule::Anywhere(regex(
            r"\b(?i:based|located)\s+(?i:in)\s+([A-Z][a-zA-Z]+(?:[ \t]+[A-Z][a-zA-Z]+)*(?:,[ \t]*[A-Z]{2}\b)?)",
        )),
        FieldRule::Anywhere(regex(
            r"\b(?i:in|at)\s+([A-Z][a-zA-Z]+(?:[ \t]+[A-Z][a-zA-Z]+)*,[ \t]*[A-Z]{2})\b",
        )),
        FieldRule::Anywhere(regex(
            r"\b(?i:in|at)\s+([A-Z][a-zA-Z]+(?:[ \t]+[A-Z][a-zA-Z]+)*)",
        )),
    ],
    fallback: DEFAULT_LOCATION,
});

static EXPERIENCE_RE: Lazy<Regex> = Lazy::new(|| {
    regex(r"(?i)(\d+)[+-]?\s*(?:to\s*\d+\s*)?years?\s*(?:of\s*)?(?:experience|exp)")
});

static YEAR_TOKEN_RE: Lazy<Regex> = Lazy::new(|| regex(r"\b(?:19|20)\d{2}\b"));

// A range counts as salary when it carries a currency sign, a `k` suffix, or
// amounts too large to be a count, so "3-5 years" is never read as pay.
static SALARY_CURRENCY_RE: Lazy<Regex> = Lazy::new(|| {
    regex(
        r"(?i)\$\s*(?P<min>\d{1,3}(?:,\d{3})+|\d+(?:\.\d+)?)\s*(?P<min_k>k)?\s*(?:-|–|to)\s*\$?\s*(?P<max>\d{1,3}(?:,\d{3})+|\d+(?:\.\d+)?)\s*(?P<max_k>k)?",
    )
});

static SALARY_K_RE: Lazy<Regex> = Lazy::new(|| {
    regex(
        r"(?i)\b(?P<min>\d+(?:\.\d+)?)\s*(?P<min_k>k)?\s*(?:-|–|to)\s*(?P<max>\d+(?:\.\d+)?)\s*(?P<max_k>k)\b",
    )
});

static SALARY_BARE_RE: Lazy<Regex> = Lazy::new(|| {
    regex(
        r"\b(?P<min>\d{1,3}(?:,\d{3})+|\d{4,})\s*(?:-|–|to)\s*(?P<max>\d{1,3}(?:,\d{3})+|\d{4,})\b",
    )
});

static SENTENCE_SPLIT_RE: Lazy<Regex> = Lazy::new(|| regex(r"[.!?](?:\s+|$)|[\n\r]+"));

static QUALITY_SENTENCE_SPLIT_RE: Lazy<Regex> = Lazy::new(|| regex(r"[.!?]+"));

static BULLET_RE: Lazy<Regex> = Lazy::new(|| regex(r"^\s*(?:[•*-]|\d+\.)\s+(.+)$"));

static ACHIEVEMENT_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        regex(
            r"(?i)\b(?:increased|improved|reduced|optimized|enhanced|delivered|achieved|generated|saved|grew|built|led|managed)\b",
        ),
        regex(r"\d+(?:\.\d+)?%"),
        regex(r"\$[\d,]+"),
        regex(r"(?i)\d+\+?\s*(?:users|customers|clients|projects|team members)"),
    ]
});

// ────────────────────────────────────────────────────────────────────────────
// Shared text helpers
// ────────────────────────────────────────────────────────────────────────────

/// Case-insensitive containment of `term` in `haystack_lower` where the match is
/// not glued to a neighbouring letter or digit. Both arguments must already be
/// lowercase. Edges of the term that are not alphanumeric (`c++`, `.net`) are
/// not boundary-checked.
pub fn contains_term(haystack_lower: &str, term_lower: &str) -> bool {
    if term_lower.is_empty() {
        return false;
    }
    let check_start = term_lower.chars().next().is_some_and(|c| c.is_alphanumeric());
    let check_end = term_lower.chars().last().is_some_and(|c| c.is_alphanumeric());

    haystack_lower.match_indices(term_lower).any(|(start, matched)| {
        let end = start + matched.len();
        let before_ok = !check_start
            || haystack_lower[..start]
                .chars()
                .next_back()
                .map_or(true, |c| !c.is_alphanumeric());
        let after_ok = !check_end
            || haystack_lower[end..]
                .chars()
                .next()
                .map_or(true, |c| !c.is_alphanumeric());
        before_ok && after_ok
    })
}

/// The term and its squashed spellings: `spring boot` → `springboot`,
/// `node.js` → `nodejs`.
fn term_variants(term: &str) -> Vec<String> {
    let lower = term.to_lowercase();
    let no_spaces: String = lower.chars().filter(|c| !c.is_whitespace()).collect();
    let no_punct: String = lower.chars().filter(|c| !matches!(c, '.' | '-')).collect();

    let mut variants = vec![lower];
    for v in [no_spaces, no_punct] {
        if !v.is_empty() && !variants.contains(&v) {
            variants.push(v);
        }
    }
    variants
}

/// Sentence-ish fragments: split on terminal punctuation followed by whitespace,
/// and on line breaks. `Node.js` stays in one piece.
pub fn sentences(text: &str) -> Vec<&str> {
    SENTENCE_SPLIT_RE
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

fn strip_bullet(line: &str) -> &str {
    line.trim_start_matches(|c: char| matches!(c, '•' | '*' | '-') || c.is_whitespace())
        .trim()
}

// ────────────────────────────────────────────────────────────────────────────
// Job posting fields
// ────────────────────────────────────────────────────────────────────────────

/// Counts detection-keyword hits per industry. The highest count wins, ties go
/// to the industry listed first, and no hits at all means `General`.
pub fn detect_industry(text: &str, dictionary: &KeywordDictionary) -> Industry {
    let lower = text.to_lowercase();
    let mut best = (Industry::General, 0usize);

    for (industry, profile) in &dictionary.industries {
        let hits = profile
            .detection_keywords
            .iter()
            .filter(|k| lower.contains(k.to_lowercase().as_str()))
            .count();
        if hits > best.1 {
            best = (*industry, hits);
        }
    }
    best.0
}

pub fn extract_company(text: &str) -> String {
    COMPANY_RULES.extract(text)
}

pub fn extract_job_title(text: &str) -> String {
    TITLE_RULES.extract(text)
}

pub fn extract_location(text: &str) -> String {
    LOCATION_RULES.extract(text)
}

/// Years stated as "N years of experience", if any.
pub fn extract_experience_years(text: &str) -> Option<u32> {
    EXPERIENCE_RE
        .captures(text)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Stated years, or an estimate of one year per two calendar-year mentions
/// (at least 1).
pub fn estimate_experience_years(text: &str) -> u32 {
    extract_experience_years(text).unwrap_or_else(|| {
        let year_mentions = YEAR_TOKEN_RE.find_iter(text).count() as u32;
        (year_mentions / 2).max(1)
    })
}

fn parse_amount(number: &str, thousands: bool) -> Option<u32> {
    let value: f64 = number.replace(',', "").parse().ok()?;
    let value = if thousands { value * 1000.0 } else { value };
    (value.is_finite() && value > 0.0 && value <= u32::MAX as f64).then(|| value.round() as u32)
}

/// "2015 - 2018" in a work history is a date span, not pay.
fn is_year_span(min: &str, max: &str) -> bool {
    [min, max]
        .iter()
        .all(|n| n.len() == 4 && YEAR_TOKEN_RE.is_match(n))
}

fn salary_from(caps: &Captures<'_>) -> Option<SalaryRange> {
    let min_raw = caps.name("min")?.as_str();
    let max_raw = caps.name("max")?.as_str();
    if is_year_span(min_raw, max_raw) {
        return None;
    }
    let min_k = caps.name("min_k").is_some();
    let max_k = caps.name("max_k").is_some();
    // "80-120k": a suffix on the upper bound applies to both
    let min = parse_amount(min_raw, min_k || max_k)?;
    let max = parse_amount(max_raw, max_k)?;
    (min <= max).then_some(SalaryRange { min, max })
}

pub fn extract_salary_range(text: &str) -> Option<SalaryRange> {
    [&*SALARY_CURRENCY_RE, &*SALARY_K_RE, &*SALARY_BARE_RE]
        .into_iter()
        .find_map(|re| re.captures_iter(text).find_map(|caps| salary_from(&caps)))
}

/// Vocabulary entries present in `text`, in vocabulary order.
pub fn extract_skills(text: &str, vocabulary: &[String]) -> Vec<String> {
    let lower = text.to_lowercase();
    vocabulary
        .iter()
        .filter(|skill| {
            term_variants(skill)
                .iter()
                .any(|v| contains_term(&lower, v))
        })
        .cloned()
        .collect()
}

/// Splits job skills into (required, preferred). A skill is preferred only when
/// every sentence that names it also carries a preference indicator.
pub fn split_required_preferred(
    text: &str,
    skills: Vec<String>,
    preference_indicators: &[String],
) -> (Vec<String>, Vec<String>) {
    let lowered: Vec<String> = sentences(text).iter().map(|s| s.to_lowercase()).collect();
    let indicators: Vec<String> = preference_indicators.iter().map(|i| i.to_lowercase()).collect();

    skills.into_iter().partition(|skill| {
        let variants = term_variants(skill);
        let mut mentions = lowered
            .iter()
            .filter(|s| variants.iter().any(|v| contains_term(s, v)))
            .peekable();
        if mentions.peek().is_none() {
            return true;
        }
        !mentions.all(|s| indicators.iter().any(|i| contains_term(s, i)))
    })
}

pub fn extract_culture_keywords(text: &str, dictionary: &KeywordDictionary) -> Vec<String> {
    let lower = text.to_lowercase();
    dictionary
        .culture_keywords
        .iter()
        .filter(|k| lower.contains(k.as_str()))
        .cloned()
        .collect()
}

/// Bulleted or numbered lines, marker stripped, in order.
pub fn extract_responsibilities(text: &str) -> Vec<String> {
    text.lines()
        .filter_map(|line| BULLET_RE.captures(line))
        .filter_map(|c| c.get(1).map(|m| m.as_str().trim().to_string()))
        .filter(|l| !l.is_empty())
        .take(MAX_RESPONSIBILITIES)
        .collect()
}

pub fn extract_job_posting(text: &str, dictionary: &KeywordDictionary) -> JobPosting {
    let industry = detect_industry(text, dictionary);
    let skills = extract_skills(text, &dictionary.skill_vocabulary(industry));
    let (required_skills, preferred_skills) =
        split_required_preferred(text, skills, &dictionary.preference_indicators);

    JobPosting {
        company: extract_company(text),
        job_title: extract_job_title(text),
        location: extract_location(text),
        industry,
        required_experience_years: extract_experience_years(text).unwrap_or(0),
        salary_range: extract_salary_range(text),
        required_skills,
        preferred_skills,
        culture_keywords: extract_culture_keywords(text, dictionary),
        responsibilities: extract_responsibilities(text),
        raw_text: text.to_string(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Resume fields
// ────────────────────────────────────────────────────────────────────────────

/// Achievement-shaped sentences: each pattern contributes up to two sentences
/// not already taken, in pattern order.
pub fn extract_achievements(text: &str) -> Vec<String> {
    let candidates = sentences(text);
    let mut found: Vec<String> = Vec::new();

    for pattern in ACHIEVEMENT_PATTERNS.iter() {
        let fresh: Vec<String> = candidates
            .iter()
            .filter(|s| pattern.is_match(s))
            .map(|s| strip_bullet(s).to_string())
            .filter(|s| !s.is_empty() && !found.contains(s))
            .take(ACHIEVEMENTS_PER_PATTERN)
            .collect();
        found.extend(fresh);
    }

    found.truncate(MAX_ACHIEVEMENTS);
    found
}

fn lines_mentioning(text: &str, keywords: &[String], cap: usize) -> Vec<String> {
    text.lines()
        .map(strip_bullet)
        .filter(|line| {
            let lower = line.to_lowercase();
            keywords.iter().any(|k| contains_term(&lower, k))
        })
        .map(str::to_string)
        .take(cap)
        .collect()
}

pub fn extract_education(text: &str, dictionary: &KeywordDictionary) -> Vec<String> {
    lines_mentioning(text, &dictionary.education_keywords, MAX_EDUCATION_LINES)
}

pub fn extract_certifications(text: &str, dictionary: &KeywordDictionary) -> Vec<String> {
    lines_mentioning(text, &dictionary.certification_keywords, MAX_CERTIFICATION_LINES)
}

/// Number of distinct dictionary action verbs used in `text`.
pub fn count_action_verbs(text: &str, dictionary: &KeywordDictionary) -> usize {
    let lower = text.to_lowercase();
    dictionary
        .action_verbs
        .iter()
        .filter(|v| contains_term(&lower, v))
        .count()
}

pub fn assess_writing_quality(text: &str, dictionary: &KeywordDictionary) -> WritingQuality {
    let word_counts: Vec<usize> = QUALITY_SENTENCE_SPLIT_RE
        .split(text)
        .map(|s| s.split_whitespace().count())
        .filter(|&n| n > 0)
        .collect();

    let avg_sentence_length = if word_counts.is_empty() {
        0.0
    } else {
        word_counts.iter().sum::<usize>() as f64 / word_counts.len() as f64
    };
    let readability = (100.0 - (avg_sentence_length - 15.0) * 2.0).clamp(0.0, 100.0);

    WritingQuality {
        avg_sentence_length,
        action_verb_count: count_action_verbs(text, dictionary),
        readability_score: readability.round() as u32,
    }
}

/// Resume fields. Skills are searched with the vocabulary of the job's industry.
pub fn extract_resume_profile(
    text: &str,
    industry: Industry,
    dictionary: &KeywordDictionary,
) -> ResumeProfile {
    ResumeProfile {
        total_experience_years: estimate_experience_years(text),
        skills: extract_skills(text, &dictionary.skill_vocabulary(industry)),
        achievements: extract_achievements(text),
        education: extract_education(text, dictionary),
        certifications: extract_certifications(text, dictionary),
        writing_quality: assess_writing_quality(text, dictionary),
        raw_text: text.to_string(),
    }
}
