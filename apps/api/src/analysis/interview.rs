//! Question selection depends on which technologies the posting names and
//! whether the resume shows leadership. Suggested answers follow the STAR shape
//! and switch a sentence or two depending on what the resume mentions.

use crate::analysis::dictionaries::KeywordDictionary;
use crate::analysis::models::{
    CompanyInsight, Difficulty, Industry, InsightCategory, InterviewPreparation,
    InterviewQuestion, JobPosting, QuestionType, ResumeProfile,
};
use crate::analysis::salary::salary_insights;

pub const MAX_QUESTIONS: usize = 8;

const NEGOTIATION_TIPS: &[&str] = &[
    "Research industry salary benchmarks before negotiating",
    "Highlight your unique value proposition and achievements",
    "Consider total compensation package, not just base salary",
    "Be prepared to discuss your impact in previous roles",
    "Practice your negotiation conversation beforehand",
    "Know your minimum acceptable offer before starting negotiations",
];

/// What the resume says about the candidate, as far as answer wording goes.
#[derive(Debug, Clone, Copy, Default)]
struct ResumeSignals {
    leadership: bool,
    teamwork: bool,
    hands_on: bool,
    testing: bool,
}

impl ResumeSignals {
    fn from_text(text: &str) -> Self {
        let lower = text.to_lowercase();
        Self {
            leadership: mentions_any(&lower, &["lead", "manage"]),
            teamwork: mentions_any(&lower, &["team", "collaborat"]),
            hands_on: mentions_any(&lower, &["develop", "build", "built"]),
            testing: mentions_any(&lower, &["test", "quality"]),
        }
    }
}

fn mentions_any(lower: &str, words: &[&str]) -> bool {
    words.iter().any(|w| lower.contains(w))
}

/// Interview level implied by the years of experience a posting asks for.
pub fn difficulty_for(required_years: u32) -> Difficulty {
    match required_years {
        0..=1 => Difficulty::Entry,
        2..=4 => Difficulty::Mid,
        5..=9 => Difficulty::Senior,
        _ => Difficulty::Executive,
    }
}

fn question(
    text: String,
    kind: QuestionType,
    difficulty: Difficulty,
    suggested_answer: String,
    key_points: &[&str],
    follow_ups: &[&str],
) -> InterviewQuestion {
    InterviewQuestion {
        question: text,
        kind,
        difficulty,
        suggested_answer,
        key_points: key_points.iter().map(|s| s.to_string()).collect(),
        follow_up_questions: follow_ups.iter().map(|s| s.to_string()).collect(),
    }
}

fn project_challenge_answer(s: ResumeSignals) -> String {
    let middle = if s.teamwork {
        "I coordinated closely with team members to ensure everyone understood their responsibilities."
    } else {
        "I maintained regular progress updates and adjusted the timeline as needed."
    };
    format!(
        "Situation: In my previous role we had to deliver a complex feature under a tight deadline. \
         Task: I owned breaking the work down and keeping stakeholders informed. \
         Action: I split the requirements into manageable tasks, identified risks early and set up clear communication channels. {middle} \
         Result: We delivered on time while keeping quality high."
    )
}

fn difficult_colleague_answer(s: ResumeSignals) -> String {
    let middle = if s.leadership {
        "Having led teams before, I adapted my communication style and wrote structured documentation that helped them excel."
    } else {
        "I adjusted my approach to their preferences while keeping the project goals on track."
    };
    format!(
        "Situation: A colleague and I had very different working styles, which was starting to cause friction. \
         Task: I wanted us to work together effectively without escalating. \
         Action: I set up a one-on-one conversation and learned they preferred written, detailed specifications. {middle} \
         Result: We delivered the project together and I learned the value of flexibility and empathy in a team."
    )
}

fn leadership_answer(s: ResumeSignals) -> String {
    let action = if s.leadership {
        "Drawing on my leadership roles, I mapped each person's strengths, career goals and preferred learning style."
    } else {
        "While mentoring colleagues, I started by understanding their individual strengths and development areas."
    };
    format!(
        "Situation: A team I worked with had a mix of junior and senior engineers and uneven delivery. \
         Task: I needed everyone growing and contributing at their level. \
         Action: {action} Junior members got pairing and hands-on guidance; senior members got strategic discussions \
         and blockers removed. I gave regular feedback and made sure everyone felt heard. \
         Result: Delivery became predictable and two junior engineers took ownership of features within a quarter."
    )
}

fn code_quality_answer(s: ResumeSignals) -> String {
    let tests = if s.testing {
        "as I have done in my previous projects"
    } else {
        "with meaningful coverage targets"
    };
    let situation = if s.hands_on {
        "On an application I was building, regressions kept slipping into releases."
    } else {
        "On a previous team, regressions kept slipping into releases."
    };
    format!(
        "Situation: {situation} \
         Task: I set out to raise code quality without slowing the team down. \
         Action: I introduced unit and integration tests {tests}, thorough code reviews, shared coding standards \
         with linting and an automated CI/CD pipeline, and scheduled regular refactoring to keep technical debt in check. \
         Result: Production defects dropped noticeably and reviews became faster because the code was clean and self-documenting."
    )
}

fn database_answer(s: ResumeSignals) -> String {
    let experience = if s.hands_on {
        "having worked with both SQL and NoSQL stores in my projects"
    } else {
        "weighing SQL against NoSQL stores for the data shape and scale"
    };
    format!(
        "Situation: A service I supported had slow queries and a schema that had grown without a plan. \
         Task: I was asked to redesign the data model and bring response times down. \
         Action: I started from the business requirements and data relationships, {experience}. I normalised to \
         remove redundancy, denormalised only where performance demanded it, studied query patterns, added targeted \
         indexes and designed backups and security in from the start. \
         Result: Key queries became several times faster and the schema was easier to extend."
    )
}

fn debugging_answer(s: ResumeSignals) -> String {
    let action = if s.hands_on {
        "Drawing on my development experience, I reproduced the issue reliably and collected logs, user steps and environment details."
    } else {
        "I reproduced the issue reliably and collected logs, user steps and environment details."
    };
    format!(
        "Situation: Users reported an intermittent failure in production that nobody could reproduce. \
         Task: I was responsible for finding the root cause and fixing it safely. \
         Action: {action} I isolated it by reviewing recent changes, reading stack traces and using the right \
         debugging tools, and asked a colleague for a second pair of eyes when I got stuck. \
         Result: I shipped a targeted fix with tests and documented the root cause so it did not recur."
    )
}

fn cultural_fit_answer(job: &JobPosting) -> String {
    let culture = if job.culture_keywords.is_empty() {
        "its focus on quality and professional growth".to_string()
    } else {
        format!("its {} culture", job.culture_keywords.iter().take(2).cloned().collect::<Vec<_>>().join(" and "))
    };
    format!(
        "I'm drawn to {company} because of {culture}. The {title} role lines up with where I want to grow, \
         and I'm excited to contribute to meaningful projects in a supportive environment.",
        company = job.company,
        title = job.job_title,
    )
}

pub fn generate_questions(resume: &ResumeProfile, job: &JobPosting) -> Vec<InterviewQuestion> {
    let signals = ResumeSignals::from_text(&resume.raw_text);
    let level = difficulty_for(job.required_experience_years);
    let job_lower = job.raw_text.to_lowercase();
    let mut questions = Vec::new();

    questions.push(question(
        "Tell me about a challenging project you worked on. How did you overcome the obstacles?".to_string(),
        QuestionType::Behavioral,
        level,
        project_challenge_answer(signals),
        &["Problem-solving approach", "Stakeholder communication", "Measurable results"],
        &["What would you do differently next time?", "How did you prioritise under pressure?"],
    ));
    questions.push(question(
        "Describe a time when you had to work with a difficult team member. How did you handle it?".to_string(),
        QuestionType::Behavioral,
        level,
        difficult_colleague_answer(signals),
        &["Emotional intelligence", "Adaptability", "Communication skills"],
        &["How do you handle conflict?", "What makes a good team member?"],
    ));

    if job_lower.contains("javascript") || job_lower.contains("react") {
        questions.push(question(
            "How do you ensure code quality and maintainability in your JavaScript/React projects?".to_string(),
            QuestionType::Technical,
            level,
            code_quality_answer(signals),
            &["Automated testing", "Code review", "Refactoring discipline"],
            &["How do you decide what to test?", "How do you handle legacy code?"],
        ));
    }
    if job_lower.contains("database") || job_lower.contains("sql") {
        questions.push(question(
            "How do you approach database design and optimization?".to_string(),
            QuestionType::Technical,
            level,
            database_answer(signals),
            &["Normalisation trade-offs", "Indexing strategy", "Choosing SQL vs NoSQL"],
            &["Describe a slow query you fixed.", "How do you plan schema migrations?"],
        ));
    }
    questions.push(question(
        "Walk me through your approach to debugging a complex technical issue.".to_string(),
        QuestionType::Technical,
        level,
        debugging_answer(signals),
        &["Reproduce first", "Isolate systematically", "Document the root cause"],
        &["What tools do you reach for first?", "Tell me about the hardest bug you fixed."],
    ));
    if signals.leadership {
        questions.push(question(
            "How do you motivate and guide team members with different skill levels?".to_string(),
            QuestionType::Behavioral,
            level,
            leadership_answer(signals),
            &["Individual development", "Regular feedback", "Leading by example"],
            &["How do you handle underperformance?", "How do you delegate?"],
        ));
    }
    questions.push(question(
        format!("What interests you most about working at {}?", job.company),
        QuestionType::CulturalFit,
        Difficulty::Entry,
        cultural_fit_answer(job),
        &["Company research", "Cultural alignment", "Growth mindset"],
        &["What do you know about our products?", "How do you see yourself fitting into our team?"],
    ));

    questions.truncate(MAX_QUESTIONS);
    questions
}

fn insight(category: InsightCategory, insight: String, source: &str, relevance_to_role: u32) -> CompanyInsight {
    CompanyInsight {
        category,
        insight,
        source: source.to_string(),
        relevance_to_role,
    }
}

pub fn research_company(job: &JobPosting) -> Vec<CompanyInsight> {
    let mut insights = Vec::new();

    if job.culture_keywords.is_empty() {
        insights.push(insight(
            InsightCategory::Culture,
            format!("{} does not describe its culture in the posting; ask about team norms and ways of working", job.company),
            "Job posting analysis",
            60,
        ));
    } else {
        insights.push(insight(
            InsightCategory::Culture,
            format!("{} describes a {} work environment", job.company, job.culture_keywords.join(", ")),
            "Job posting analysis",
            85,
        ));
    }

    if job
        .culture_keywords
        .iter()
        .any(|k| k == "inclusive" || k == "diverse")
    {
        insights.push(insight(
            InsightCategory::Values,
            "Inclusion and diversity are called out as company values".to_string(),
            "Job posting analysis",
            70,
        ));
    }

    let area = match job.industry {
        Industry::General => "core".to_string(),
        other => other.to_string(),
    };
    insights.push(insight(
        InsightCategory::Growth,
        format!("{} appears to be expanding its {} capabilities", job.company, area),
        "Industry analysis",
        75,
    ));

    if !job.responsibilities.is_empty() {
        let focus: Vec<&str> = job.responsibilities.iter().take(2).map(String::as_str).collect();
        insights.push(insight(
            InsightCategory::Challenges,
            format!("Day-to-day focus of the role: {}", focus.join("; ")),
            "Job posting analysis",
            80,
        ));
    }

    insights
}

pub fn prepare_interview(
    resume: &ResumeProfile,
    job: &JobPosting,
    dictionary: &KeywordDictionary,
) -> InterviewPreparation {
    InterviewPreparation {
        questions: generate_questions(resume, job),
        company_research: research_company(job),
        salary_insights: salary_insights(job, dictionary),
        negotiation_tips: NEGOTIATION_TIPS.iter().map(|s| s.to_string()).collect(),
    }
}
