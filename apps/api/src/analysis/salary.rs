//! Market salary band for the posted title, scaled by cost of living.

use crate::analysis::dictionaries::{CostOfLiving, KeywordDictionary};
use crate::analysis::models::{Industry, JobPosting, SalaryBand, SalaryInsights, SalaryRange};

const SALARY_FACTORS: &[&str] = &[
    "Experience level",
    "Location",
    "Company size",
    "Industry demand",
    "Specialized skills",
];

const NEGOTIATION_POINTS: &[&str] = &[
    "Highlight unique skills and certifications",
    "Demonstrate quantifiable value from previous roles",
    "Research market rates for similar positions",
    "Consider total compensation package including benefits",
];

/// A posted midpoint within this share of the market median reads as "in line".
const COMPARISON_TOLERANCE: f64 = 0.10;

pub fn location_multiplier(location: &str, cost_of_living: &CostOfLiving) -> f64 {
    let lower = location.to_lowercase();
    let listed = |areas: &[String]| areas.iter().any(|a| lower.contains(a.to_lowercase().as_str()));

    if listed(&cost_of_living.high_cost_areas[..]) {
        cost_of_living.high_cost_multiplier
    } else if listed(&cost_of_living.medium_cost_areas[..]) {
        cost_of_living.medium_cost_multiplier
    } else {
        1.0
    }
}

/// Unadjusted band for a title: the first table title that contains, or is
/// contained in, the job title. `General` searches every industry's table.
pub fn market_band(job_title: &str, industry: Industry, dictionary: &KeywordDictionary) -> SalaryBand {
    let title = job_title.trim().to_lowercase();
    if title.is_empty() {
        return dictionary.default_salary_band;
    }

    let tables: Vec<_> = match dictionary.profile(industry) {
        Some(profile) => vec![profile],
        None => dictionary.industries.values().collect(),
    };

    tables
        .into_iter()
        .flat_map(|p| p.salary_bands.iter())
        .find(|entry| {
            let known = entry.title.to_lowercase();
            title.contains(&known) || known.contains(&title)
        })
        .map(|entry| entry.band)
        .unwrap_or(dictionary.default_salary_band)
}

fn scale(band: SalaryBand, multiplier: f64) -> SalaryBand {
    let adjust = |v: u32| (v as f64 * multiplier).round() as u32;
    SalaryBand {
        min: adjust(band.min),
        max: adjust(band.max),
        median: adjust(band.median),
    }
}

fn compare(posted: Option<SalaryRange>, market: SalaryBand) -> String {
    let Some(posted) = posted else {
        return "No salary stated in the posting; the range shown is a market estimate for this role and location"
            .to_string();
    };
    let midpoint = (posted.min as f64 + posted.max as f64) / 2.0;
    let median = market.median as f64;
    let delta = (midpoint - median) / median.max(1.0);

    if delta > COMPARISON_TOLERANCE {
        format!(
            "Posted range ${}-${} is above the market median of ${} for this role and location",
            posted.min, posted.max, market.median
        )
    } else if delta < -COMPARISON_TOLERANCE {
        format!(
            "Posted range ${}-${} is below the market median of ${}; there may be room to negotiate",
            posted.min, posted.max, market.median
        )
    } else {
        format!(
            "Posted range ${}-${} is in line with the market median of ${}",
            posted.min, posted.max, market.median
        )
    }
}

pub fn salary_insights(job: &JobPosting, dictionary: &KeywordDictionary) -> SalaryInsights {
    let multiplier = location_multiplier(&job.location, &dictionary.cost_of_living);
    let range = scale(market_band(&job.job_title, job.industry, dictionary), multiplier);

    SalaryInsights {
        range,
        posted_range: job.salary_range,
        location: job.location.clone(),
        location_multiplier: multiplier,
        factors: SALARY_FACTORS.iter().map(|s| s.to_string()).collect(),
        negotiation_points: NEGOTIATION_POINTS.iter().map(|s| s.to_string()).collect(),
        market_comparison: compare(job.salary_range, range),
    }
}
