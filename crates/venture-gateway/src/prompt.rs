//! Prompt templates for the two gateway operations.

/// Number of ideas the idea prompt asks for.
pub const IDEA_COUNT: usize = 3;

/// Criteria collected by the idea form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdeaCriteria {
    pub industry: String,
    pub target_audience: String,
    pub budget_range: String,
    pub problem_focus: String,
}

/// An idea submitted for market validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdeaSubmission {
    pub name: String,
    pub description: String,
    pub target_market: String,
}

#[must_use]
pub fn idea_prompt(criteria: &IdeaCriteria) -> String {
    format!(
        r#"Generate {IDEA_COUNT} innovative startup ideas for the following criteria:

Industry: {industry}
Target Audience: {audience}
Budget Range: {budget}
Problem Focus: {problem}

For each idea include a startup name, a 2-3 sentence description, the unique value
proposition, the target market size, the revenue model, 3-4 key features and the
competitive advantage.

Respond with a single JSON object and nothing else, using exactly this structure:
{{
    "ideas": [
        {{
            "name": "Startup Name",
            "description": "Brief description",
            "value_proposition": "Unique value proposition",
            "market_size": "Target market size",
            "revenue_model": "Revenue model",
            "key_features": ["Feature 1", "Feature 2", "Feature 3"],
            "competitive_advantage": "Competitive advantage"
        }}
    ]
}}"#,
        industry = criteria.industry,
        audience = criteria.target_audience,
        budget = criteria.budget_range,
        problem = criteria.problem_focus,
    )
}

#[must_use]
pub fn validation_prompt(idea: &IdeaSubmission) -> String {
    format!(
        r#"Perform a comprehensive market validation analysis for this startup idea:

Startup Name: {name}
Description: {description}
Target Market: {market}

Cover the market opportunity score (1-10), the competition level (Low, Medium or
High), market trends, a SWOT analysis, a go-to-market strategy, financial
projections for years 1-3, a risk assessment, the success probability (1-10), key
metrics to track and recommendations.

Respond with a single JSON object and nothing else, using exactly this structure:
{{
    "market_opportunity_score": 8,
    "competition_level": "Medium",
    "market_trends": "Analysis of current market trends",
    "swot": {{
        "strengths": ["Strength 1", "Strength 2"],
        "weaknesses": ["Weakness 1", "Weakness 2"],
        "opportunities": ["Opportunity 1", "Opportunity 2"],
        "threats": ["Threat 1", "Threat 2"]
    }},
    "go_to_market": "Go-to-market strategy",
    "financial_projections": {{
        "year_1": "Year 1 projection",
        "year_2": "Year 2 projection",
        "year_3": "Year 3 projection"
    }},
    "risk_assessment": "Risk assessment details",
    "success_probability": 7,
    "key_metrics": ["Metric 1", "Metric 2", "Metric 3"],
    "recommendations": ["Recommendation 1", "Recommendation 2"]
}}"#,
        name = idea.name,
        description = idea.description,
        market = idea.target_market,
    )
}
