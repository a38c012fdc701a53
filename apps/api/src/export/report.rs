//! Plain-text career analysis report.

use std::fmt::Write;

use chrono::NaiveDate;

use crate::analysis::models::{ActionItem, CareerAnalysisResult};

pub const REPORT_TITLE: &str = "AI CAREER ADVISOR - COMPLETE CAREER ANALYSIS";
const RULE_WIDTH: usize = 80;

/// `career-analysis-report-YYYY-MM-DD.txt`
pub fn report_filename(date: NaiveDate) -> String {
    format!("career-analysis-report-{}.txt", date.format("%Y-%m-%d"))
}

fn section(out: &mut String, title: &str, underline: usize) {
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{}", "-".repeat(underline));
}

fn action_items(out: &mut String, label: &str, items: &[ActionItem]) {
    let _ = writeln!(out, "{label}:");
    for (i, item) in items.iter().enumerate() {
        let _ = writeln!(out, "{}. {} ({})", i + 1, item.task, item.timeframe);
    }
    out.push('\n');
}

pub fn render_text_report(result: &CareerAnalysisResult) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{REPORT_TITLE}");
    let _ = writeln!(out, "{}\n", "=".repeat(RULE_WIDTH));

    section(&mut out, "EXECUTIVE SUMMARY", 20);
    let _ = writeln!(out, "Overall Match: {}%", result.overall_score);
    let _ = writeln!(out, "ATS Compatibility: {}%", result.ats_compatibility_score);
    let _ = writeln!(out, "Keyword Density: {}%", result.keyword_density_score);
    let _ = writeln!(out, "Experience Match: {}%", result.experience_alignment_score);
    let _ = writeln!(out, "Skills Alignment: {}%\n", result.skills_match_score);

    section(&mut out, "COVER LETTER", 30);
    let _ = writeln!(out, "{}\n", result.cover_letter.content);

    section(&mut out, "RESUME OPTIMIZATION", 40);
    for (i, suggestion) in result.resume_analysis.suggestions.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}. [{}] {}\n   Reasoning: {}",
            i + 1,
            suggestion.priority.as_str().to_uppercase(),
            suggestion.suggested,
            suggestion.reasoning
        );
    }
    out.push('\n');

    section(&mut out, "INTERVIEW PREPARATION", 50);
    for (i, qa) in result.interview_preparation.questions.iter().enumerate() {
        let _ = writeln!(
            out,
            "\nQuestion {} ({} - {} LEVEL):\n{}\n\nStrategic Response:\n{}\n\nKey Points: {}",
            i + 1,
            qa.kind.as_str().to_uppercase(),
            qa.difficulty.as_str().to_uppercase(),
            qa.question,
            qa.suggested_answer,
            qa.key_points.join(", ")
        );
    }
    out.push('\n');

    let skills = &result.skills_analysis;
    section(&mut out, "SKILLS ANALYSIS", 30);
    let matched: Vec<&str> = skills.matched_skills.iter().map(|s| s.skill.as_str()).collect();
    let gaps: Vec<&str> = skills.skill_gaps.iter().map(|s| s.skill.as_str()).collect();
    let _ = writeln!(out, "Matched Skills: {}", matched.join(", "));
    let _ = writeln!(out, "Skill Gaps: {}\n", gaps.join(", "));

    section(&mut out, "ACTION PLAN", 35);
    action_items(&mut out, "IMMEDIATE", &result.action_plan.immediate);
    action_items(&mut out, "SHORT TERM", &result.action_plan.short_term);
    action_items(&mut out, "LONG TERM", &result.action_plan.long_term);

    let market = &result.market_analysis;
    section(&mut out, "MARKET ANALYSIS", 25);
    let _ = writeln!(out, "Industry Trends: {}", market.industry_trends.join(", "));
    let _ = writeln!(out, "Competitive Positioning: {}", market.competitive_positioning);
    let _ = writeln!(out, "Career Progression: {}\n", market.career_progression.join(" → "));

    out.push_str("---\nGenerated by AI Career Advisor\n");
    out
}
