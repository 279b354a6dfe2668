use venture_core::{ChartInputs, ValidationReport};

use super::{charts, escape};

fn list(items: &[String], marker: &str) -> String {
    items
        .iter()
        .map(|item| format!("<li>{marker} {}</li>", escape(item)))
        .collect()
}

/// Metric tiles, analysis card, SWOT, projections, metrics and recommendations.
pub fn details(report: &ValidationReport) -> String {
    let swot = &report.swot;
    let projections = report
        .financial_projections
        .by_year()
        .iter()
        .map(|(label, text)| format!("<div><strong>{label}:</strong> {}</div>", escape(text)))
        .collect::<String>();

    format!(
        r#"<div class="metrics">
<div class="metric"><span>Market Opportunity</span><b>{opportunity}/10</b></div>
<div class="metric"><span>Competition Level</span><b>{competition}</b></div>
<div class="metric"><span>Success Probability</span><b>{success}/10</b></div>
</div>
<article class="validation-card">
<h3>📊 Market Analysis for {name}</h3>
<p><strong>Market Trends:</strong> {trends}</p>
<p><strong>Go-to-Market Strategy:</strong> {gtm}</p>
<p><strong>Risk Assessment:</strong> {risk}</p>
</article>
<h3>SWOT Analysis</h3>
<div class="swot">
<div><h4>Strengths</h4><ul>{strengths}</ul></div>
<div><h4>Weaknesses</h4><ul>{weaknesses}</ul></div>
<div><h4>Opportunities</h4><ul>{opportunities}</ul></div>
<div><h4>Threats</h4><ul>{threats}</ul></div>
</div>
<h3>Financial Projections</h3>
<div class="columns">{projections}</div>
<div class="columns">
<div><h3>Key Metrics to Track</h3><ul>{metrics}</ul></div>
<div><h3>Recommendations</h3><ul>{recommendations}</ul></div>
</div>"#,
        opportunity = report.market_opportunity_score,
        competition = report.competition_level,
        success = report.success_probability,
        name = escape(&report.startup_name),
        trends = escape(&report.market_trends),
        gtm = escape(&report.go_to_market_strategy),
        risk = escape(&report.risk_assessment),
        strengths = list(&swot.strengths, "✅"),
        weaknesses = list(&swot.weaknesses, "⚠️"),
        opportunities = list(&swot.opportunities, "🚀"),
        threats = list(&swot.threats, "🚨"),
        metrics = list(&report.key_metrics, "📊"),
        recommendations = list(&report.recommendations, "💡"),
    )
}

/// Charts for the most recent report, or a placeholder.
pub fn analytics(report: Option<&ValidationReport>) -> String {
    let Some(report) = report else {
        return r#"<h2 class="section-header">Analytics Dashboard</h2>
<div class="notice info">Generate and validate a startup idea to see analytics!</div>"#
            .to_string();
    };
    let inputs = ChartInputs::from_report(report);
    format!(
        r#"<h2 class="section-header">Analytics Dashboard</h2>
<div class="columns">
<figure><figcaption>Validation Scores</figcaption>{scores}</figure>
<figure><figcaption>SWOT Analysis Distribution</figcaption>{swot}</figure>
</div>
<figure><figcaption>Competition Level</figcaption>{gauge}</figure>"#,
        scores = charts::score_bars(&inputs.scores),
        swot = charts::swot_pie(&inputs),
        gauge = charts::competition_gauge(&inputs),
    )
}
