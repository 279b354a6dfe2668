use venture_core::StartupIdea;

use super::escape;

/// One card per idea, each with a button that pre-fills the validation form.
pub fn cards(ideas: &[StartupIdea]) -> String {
    ideas.iter().map(card).collect()
}

fn card(idea: &StartupIdea) -> String {
    let features = idea
        .key_features
        .iter()
        .map(|feature| format!("<li>{}</li>", escape(feature)))
        .collect::<String>();
    format!(
        r#"<article class="idea-card">
<h3>💡 {name}</h3>
<p><strong>Description:</strong> {description}</p>
<p><strong>Value Proposition:</strong> {value}</p>
<p><strong>Market Size:</strong> {market}</p>
<p><strong>Revenue Model:</strong> {revenue}</p>
<p><strong>Competitive Advantage:</strong> {advantage}</p>
<p><strong>Key Features:</strong></p>
<ul>{features}</ul>
<form method="get" action="/#validate">
<input type="hidden" name="name" value="{name}">
<input type="hidden" name="description" value="{description}">
<input type="hidden" name="target_market" value="{market}">
<button type="submit">🔍 Validate This Idea</button>
</form>
</article>"#,
        name = escape(&idea.name),
        description = escape(&idea.description),
        value = escape(&idea.value_proposition),
        market = escape(&idea.market_size),
        revenue = escape(&idea.revenue_model),
        advantage = escape(&idea.competitive_advantage),
    )
}
