//! Pure data. A `KeywordDictionary` is built once at startup (built-in or from a
//! JSON file) and shared behind an `Arc`, so tests and deployments can swap it
//! without touching the extractor or scorer.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::analysis::models::{Industry, SalaryBand};

/// A named group of skills inside one industry, e.g. `frameworks`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<String>,
}

/// Market salary band for a job title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitledSalaryBand {
    pub title: String,
    pub band: SalaryBand,
}

/// Everything the engine knows about one industry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndustryProfile {
    /// Lowercase words whose presence in a posting votes for this industry.
    pub detection_keywords: Vec<String>,
    pub skill_categories: Vec<SkillCategory>,
    pub salary_bands: Vec<TitledSalaryBand>,
    pub market_trends: Vec<String>,
    pub risk_factors: Vec<String>,
}

/// Cost-of-living tiers applied to salary bands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostOfLiving {
    pub high_cost_areas: Vec<String>,
    pub high_cost_multiplier: f64,
    pub medium_cost_areas: Vec<String>,
    pub medium_cost_multiplier: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordDictionary {
    pub industries: BTreeMap<Industry, IndustryProfile>,
    pub soft_skills: Vec<String>,
    /// Section and vocabulary words an ATS expects to see in a resume.
    pub ats_keywords: Vec<String>,
    /// Lowercase action verbs.
    pub action_verbs: Vec<String>,
    pub culture_keywords: Vec<String>,
    pub stop_words: Vec<String>,
    /// Words that mark a posting sentence as optional rather than required.
    pub preference_indicators: Vec<String>,
    pub education_keywords: Vec<String>,
    pub certification_keywords: Vec<String>,
    pub cost_of_living: CostOfLiving,
    pub default_salary_band: SalaryBand,
    pub general_trends: Vec<String>,
    pub general_risk_factors: Vec<String>,
}

impl Default for KeywordDictionary {
    fn default() -> Self {
        Self::builtin()
    }
}

impl KeywordDictionary {
    /// Loads a full dictionary from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read keyword dictionary at {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Keyword dictionary at {} is not valid", path.display()))
    }

    pub fn profile(&self, industry: Industry) -> Option<&IndustryProfile> {
        self.industries.get(&industry)
    }

    /// Skill vocabulary for an industry, followed by the soft skills.
    ///
    /// `General` (or an industry with no profile) searches every industry's skills.
    /// Entries are deduplicated case-insensitively, keeping the first spelling.
    pub fn skill_vocabulary(&self, industry: Industry) -> Vec<String> {
        let industry_skills: Vec<&String> = match self.profile(industry) {
            Some(profile) if industry != Industry::General => profile
                .skill_categories
                .iter()
                .flat_map(|c| c.skills.iter())
                .collect(),
            _ => self
                .industries
                .values()
                .flat_map(|p| p.skill_categories.iter())
                .flat_map(|c| c.skills.iter())
                .collect(),
        };

        let mut seen = std::collections::HashSet::new();
        industry_skills
            .into_iter()
            .chain(self.soft_skills.iter())
            .filter(|s| seen.insert(s.to_lowercase()))
            .cloned()
            .collect()
    }

    pub fn market_trends(&self, industry: Industry) -> &[String] {
        self.profile(industry)
            .map(|p| p.market_trends.as_slice())
            .filter(|t| !t.is_empty())
            .unwrap_or(&self.general_trends)
    }

    pub fn risk_factors(&self, industry: Industry) -> &[String] {
        self.profile(industry)
            .map(|p| p.risk_factors.as_slice())
            .filter(|r| !r.is_empty())
            .unwrap_or(&self.general_risk_factors)
    }

    /// The dictionary shipped with the service.
    pub fn builtin() -> Self {
        let mut industries = BTreeMap::new();

        industries.insert(
            Industry::Technology,
            IndustryProfile {
                detection_keywords: strings(&[
                    "software",
                    "developer",
                    "engineer",
                    "programming",
                    "code",
                    "technical",
                    "technology",
                ]),
                skill_categories: vec![
                    category(
                        "programming",
                        &[
                            "JavaScript", "TypeScript", "Python", "Java", "C++", "C#", "Go",
                            "Rust", "Swift", "Kotlin", "PHP", "Ruby", "SQL",
                        ],
                    ),
                    category(
                        "frameworks",
                        &[
                            "React", "Angular", "Vue.js", "Node.js", "Express", "Django",
                            "Flask", "Spring Boot", "Laravel", "Rails",
                        ],
                    ),
                    category(
                        "databases",
                        &[
                            "PostgreSQL", "MySQL", "MongoDB", "Redis", "Elasticsearch",
                            "Cassandra", "DynamoDB", "Oracle",
                        ],
                    ),
                    category(
                        "cloud",
                        &[
                            "AWS", "Azure", "Google Cloud", "GCP", "Docker", "Kubernetes",
                            "Terraform", "Jenkins", "GitLab CI",
                        ],
                    ),
                    category(
                        "data_ai",
                        &[
                            "Machine Learning", "Deep Learning", "TensorFlow", "PyTorch",
                            "Scikit-learn",
                        ],
                    ),
                    category(
                        "apis",
                        &["REST API", "GraphQL", "gRPC", "WebSocket", "OAuth", "JWT"],
                    ),
                    category(
                        "methodologies",
                        &[
                            "Agile", "Scrum", "Kanban", "DevOps", "CI/CD", "TDD", "BDD",
                            "Microservices",
                        ],
                    ),
                ],
                salary_bands: vec![
                    band("Senior Software Engineer", 100_000, 200_000, 140_000),
                    band("Software Engineer", 70_000, 150_000, 95_000),
                    band("Tech Lead", 120_000, 220_000, 160_000),
                    band("Engineering Manager", 140_000, 250_000, 180_000),
                ],
                market_trends: strings(&[
                    "Advanced automation and machine learning adoption accelerating across industries",
                    "Cloud-first strategies becoming standard for enterprise infrastructure",
                    "Remote and hybrid work models permanently reshaping tech employment",
                    "Cybersecurity expertise in critical demand due to increasing threats",
                    "Low-code/no-code platforms democratizing software development",
                    "Edge computing gaining traction for real-time applications",
                ]),
                risk_factors: strings(&[
                    "Rapid technology changes requiring continuous learning",
                    "Market saturation in some areas",
                    "Economic sensitivity affecting tech hiring",
                ]),
            },
        );

        industries.insert(
            Industry::Finance,
            IndustryProfile {
                detection_keywords: strings(&[
                    "finance",
                    "financial",
                    "banking",
                    "investment",
                    "analyst",
                    "accounting",
                    "treasury",
                ]),
                skill_categories: vec![
                    category(
                        "analysis",
                        &[
                            "Financial Modeling", "Risk Management", "Portfolio Management",
                            "Derivatives", "Fixed Income", "Equity Research",
                        ],
                    ),
                    category(
                        "software",
                        &[
                            "Bloomberg Terminal", "Reuters", "FactSet", "Morningstar",
                            "Capital IQ", "Excel VBA", "Tableau", "Power BI", "MATLAB", "SAS",
                        ],
                    ),
                    category(
                        "regulations",
                        &[
                            "Basel III", "IFRS", "GAAP", "Sarbanes-Oxley", "Dodd-Frank",
                            "MiFID II",
                        ],
                    ),
                    category(
                        "certifications",
                        &["CFA", "FRM", "CPA", "CAIA", "PRM", "Series 7", "Series 63"],
                    ),
                ],
                salary_bands: vec![
                    band("Senior Financial Analyst", 80_000, 150_000, 110_000),
                    band("Financial Analyst", 60_000, 120_000, 80_000),
                    band("Finance Manager", 100_000, 180_000, 130_000),
                    band("Finance Director", 150_000, 300_000, 200_000),
                ],
                market_trends: strings(&[
                    "Digital transformation accelerating in traditional banking institutions",
                    "ESG (Environmental, Social, Governance) investing becoming mainstream",
                    "Cryptocurrency and blockchain technology integration expanding",
                    "Regulatory technology (RegTech) solutions in high demand",
                    "Robo-advisors and automated investment platforms growing",
                    "Open banking and API-first financial services emerging",
                ]),
                risk_factors: strings(&[
                    "Regulatory changes impacting industry practices",
                    "Market volatility affecting job security",
                    "Automation impact on traditional roles",
                ]),
            },
        );

        industries.insert(
            Industry::Marketing,
            IndustryProfile {
                detection_keywords: strings(&[
                    "marketing",
                    "brand",
                    "digital",
                    "campaign",
                    "advertising",
                    "promotion",
                    "social media",
                ]),
                skill_categories: vec![
                    category(
                        "digital",
                        &[
                            "SEO", "SEM", "PPC", "Social Media Marketing", "Content Marketing",
                            "Email Marketing", "Marketing Automation", "Lead Generation",
                        ],
                    ),
                    category(
                        "analytics",
                        &[
                            "Google Analytics", "Google Ads", "Facebook Ads", "LinkedIn Ads",
                            "HubSpot", "Salesforce", "A/B Testing",
                        ],
                    ),
                    category(
                        "strategy",
                        &[
                            "Brand Management", "Product Marketing", "Growth Hacking",
                            "Influencer Marketing", "Customer Segmentation",
                        ],
                    ),
                    category(
                        "metrics",
                        &[
                            "Marketing Attribution", "Customer Lifetime Value",
                            "Return on Ad Spend", "Cost Per Acquisition",
                        ],
                    ),
                ],
                salary_bands: vec![
                    band("Marketing Specialist", 45_000, 85_000, 60_000),
                    band("Senior Marketing Manager", 85_000, 150_000, 110_000),
                    band("Marketing Manager", 65_000, 120_000, 85_000),
                    band("Marketing Director", 120_000, 220_000, 160_000),
                ],
                market_trends: strings(&[
                    "Privacy-first marketing strategies due to data protection regulations",
                    "Advanced personalization and customer experience optimization",
                    "Video content and live streaming dominating engagement metrics",
                    "Influencer marketing evolving into long-term brand partnerships",
                    "Voice search optimization becoming essential for SEO",
                    "Sustainability and social responsibility driving brand loyalty",
                ]),
                risk_factors: strings(&[
                    "Privacy regulations affecting data usage",
                    "Platform dependency risks",
                    "Attribution challenges with new technologies",
                ]),
            },
        );

        KeywordDictionary {
            industries,
            soft_skills: strings(&[
                "Leadership",
                "Communication",
                "Problem Solving",
                "Critical Thinking",
                "Creativity",
                "Teamwork",
                "Collaboration",
                "Adaptability",
                "Time Management",
                "Project Management",
                "Decision Making",
                "Conflict Resolution",
                "Negotiation",
                "Mentoring",
                "Public Speaking",
            ]),
            ats_keywords: strings(&[
                "experience",
                "skills",
                "education",
                "work",
                "employment",
                "achievements",
                "projects",
                "leadership",
                "management",
                "team",
                "collaboration",
                "communication",
                "problem solving",
                "analytical",
                "strategic",
                "innovative",
                "results-driven",
                "detail-oriented",
            ]),
            action_verbs: strings(&[
                "achieved",
                "accelerated",
                "accomplished",
                "analyzed",
                "built",
                "created",
                "delivered",
                "developed",
                "designed",
                "enhanced",
                "established",
                "executed",
                "generated",
                "implemented",
                "improved",
                "increased",
                "initiated",
                "launched",
                "led",
                "managed",
                "optimized",
                "orchestrated",
                "pioneered",
                "reduced",
                "resolved",
                "spearheaded",
                "streamlined",
                "transformed",
            ]),
            culture_keywords: strings(&[
                "collaborative",
                "innovative",
                "fast-paced",
                "dynamic",
                "flexible",
                "remote",
                "startup",
                "enterprise",
                "agile",
                "creative",
                "inclusive",
                "diverse",
                "growth-oriented",
            ]),
            stop_words: strings(&[
                "the", "and", "for", "with", "this", "that", "will", "are", "have", "from",
                "your", "you", "our", "who", "what", "about", "into", "their", "they",
                "been", "were", "also",
            ]),
            preference_indicators: strings(&["preferred", "nice to have", "bonus", "plus"]),
            education_keywords: strings(&[
                "degree",
                "university",
                "college",
                "bachelor",
                "master",
                "phd",
                "mba",
            ]),
            certification_keywords: strings(&[
                "certified",
                "certification",
                "certificate",
                "pmp",
                "cissp",
            ]),
            cost_of_living: CostOfLiving {
                high_cost_areas: strings(&[
                    "san francisco",
                    "new york",
                    "seattle",
                    "boston",
                    "los angeles",
                ]),
                high_cost_multiplier: 1.3,
                medium_cost_areas: strings(&["austin", "denver", "chicago", "atlanta", "portland"]),
                medium_cost_multiplier: 1.1,
            },
            default_salary_band: SalaryBand {
                min: 60_000,
                max: 120_000,
                median: 80_000,
            },
            general_trends: strings(&[
                "Digital transformation reshaping roles across every sector",
                "Remote and hybrid work becoming a permanent option",
                "Sustainability and ESG commitments influencing hiring priorities",
            ]),
            general_risk_factors: strings(&[
                "Market changes",
                "Economic factors",
                "Industry disruption",
            ]),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn category(name: &str, skills: &[&str]) -> SkillCategory {
    SkillCategory {
        name: name.to_string(),
        skills: strings(skills),
    }
}

fn band(title: &str, min: u32, max: u32, median: u32) -> TitledSalaryBand {
    TitledSalaryBand {
        title: title.to_string(),
        band: SalaryBand { min, max, median },
    }
}
