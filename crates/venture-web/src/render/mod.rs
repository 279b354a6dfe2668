//! Server-side HTML rendering.
//!
//! The page is rebuilt from a [`PageState`] on every request; nothing is kept
//! between requests, so a reload starts from an empty page.

mod charts;
mod ideas;
mod report;
mod style;

use venture_config::DotenvStatus;
use venture_core::options::{BUDGET_RANGES, INDUSTRIES};
use venture_core::{StartupIdea, ValidationReport};
use venture_gateway::{ErrorKind, GatewayError, IdeaCriteria, IdeaSubmission};

/// Facts about the running server shown on every page.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    pub configured: bool,
    pub model: &'a str,
    pub dotenv: DotenvStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warning,
    Error,
}

impl Level {
    const fn class(self) -> &'static str {
        match self {
            Self::Info => "notice info",
            Self::Warning => "notice warning",
            Self::Error => "notice error",
        }
    }
}

/// An inline message scoped to one form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: Level,
    pub title: String,
    pub detail: Option<String>,
    pub raw: Option<String>,
    pub hint: Option<&'static str>,
}

impl Notice {
    #[must_use]
    pub fn warning(title: impl Into<String>) -> Self {
        Self {
            level: Level::Warning,
            title: title.into(),
            detail: None,
            raw: None,
            hint: None,
        }
    }

    #[must_use]
    pub fn from_error(error: &GatewayError) -> Self {
        match error.kind() {
            ErrorKind::Configuration => Self {
                level: Level::Error,
                title: "OpenRouter API key not found".to_string(),
                detail: Some(error.to_string()),
                raw: None,
                hint: Some(SETUP_HINT),
            },
            ErrorKind::Transport => Self {
                level: Level::Error,
                title: error.status().map_or_else(
                    || "API Error".to_string(),
                    |status| format!("API Error (HTTP {status})"),
                ),
                detail: Some(error.to_string()),
                raw: None,
                hint: None,
            },
            ErrorKind::Format => Self {
                level: Level::Error,
                title: "Failed to parse AI response".to_string(),
                detail: Some(error.to_string()),
                raw: error.raw_excerpt().map(str::to_string),
                hint: Some("Please try again. The AI sometimes returns malformed JSON."),
            },
        }
    }
}

const SETUP_HINT: &str = "Create a .env file next to the server with OPENROUTER_API_KEY=your_key_here, \
     or export OPENROUTER_API_KEY before starting venture.";

/// Everything one page render needs.
#[derive(Debug, Clone, Default)]
pub struct PageState {
    /// Last submitted idea criteria, echoed back into the form.
    pub criteria: IdeaCriteria,
    /// Validation form contents.
    pub submission: IdeaSubmission,
    /// Set when the validation form was pre-filled from a generated idea.
    pub prefilled_from: Option<String>,
    pub ideas: Vec<StartupIdea>,
    pub report: Option<ValidationReport>,
    pub idea_notice: Option<Notice>,
    pub validation_notice: Option<Notice>,
}

/// Escape text for element content and double-quoted attributes.
#[must_use]
pub fn escape(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[must_use]
pub fn page(ctx: PageContext<'_>, state: &PageState) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>AI Startup Idea Generator &amp; Market Validator</title>
<style>{css}</style>
</head>
<body>
<aside class="sidebar">{sidebar}</aside>
<main>
<h1 class="main-header">🚀 AI Startup Idea Generator &amp; Market Validator</h1>
<nav class="tabs"><a href="#generate">💡 Generate Ideas</a><a href="#validate">🔍 Validate Ideas</a><a href="#analytics">📈 Analytics</a></nav>
<section id="generate">{generate}</section>
<section id="validate">{validate}</section>
<section id="analytics">{analytics}</section>
<footer>Powered by OpenRouter · {model}</footer>
</main>
</body>
</html>
"##,
        css = style::CSS,
        sidebar = sidebar(ctx),
        generate = generate_section(ctx, state),
        validate = validate_section(ctx, state),
        analytics = report::analytics(state.report.as_ref()),
        model = escape(ctx.model),
    )
}

/// A bare page for 404/405 responses.
#[must_use]
pub fn status_page(status: u16, message: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\"><head><meta charset=\"utf-8\"><title>{status}</title></head>\
         <body><h1>{status}</h1><p>{message}</p><p><a href=\"/\">Back to Venture</a></p></body></html>\n",
        message = escape(message),
    )
}

fn sidebar(ctx: PageContext<'_>) -> String {
    let status = if ctx.configured {
        r#"<div class="notice success">✅ API key configured</div>"#.to_string()
    } else {
        format!(
            r#"<div class="notice error">❌ API key not found</div><p class="hint">{}</p>{}"#,
            escape(SETUP_HINT),
            debug_info(ctx.dotenv)
        )
    };
    format!(
        r#"<h2>⚙️ Configuration</h2>{status}
<p>Model: <code>{model}</code></p>
<h2>💡 Tips</h2>
<ul><li>Be specific about your target audience</li><li>Focus on real problems</li><li>Validate ideas before investing</li></ul>"#,
        model = escape(ctx.model),
    )
}

fn debug_info(dotenv: DotenvStatus) -> String {
    let mark = |ok: bool| if ok { "✅" } else { "❌" };
    format!(
        r#"<details class="debug"><summary>🔧 Debug Info</summary><ul>
<li>{} .env file found</li>
<li>{} OPENROUTER_API_KEY set in .env</li>
</ul></details>"#,
        mark(dotenv.found),
        mark(dotenv.has_api_key),
    )
}

fn notice(notice: Option<&Notice>) -> String {
    let Some(notice) = notice else {
        return String::new();
    };
    let detail = notice
        .detail
        .as_deref()
        .map(|detail| format!("<p>{}</p>", escape(detail)))
        .unwrap_or_default();
    let raw = notice
        .raw
        .as_deref()
        .map(|raw| format!("<p>Raw response for debugging:</p><pre>{}</pre>", escape(raw)))
        .unwrap_or_default();
    let hint = notice
        .hint
        .map(|hint| format!(r#"<p class="hint">{}</p>"#, escape(hint)))
        .unwrap_or_default();
    format!(
        r#"<div class="{class}"><strong>{title}</strong>{detail}{raw}{hint}</div>"#,
        class = notice.level.class(),
        title = escape(&notice.title),
    )
}

fn select(name: &str, options: &[&str], selected: &str) -> String {
    let options = options
        .iter()
        .map(|option| {
            let marker = if *option == selected { " selected" } else { "" };
            format!(
                r#"<option value="{value}"{marker}>{value}</option>"#,
                value = escape(option)
            )
        })
        .collect::<String>();
    format!(r#"<select id="{name}" name="{name}">{options}</select>"#)
}

const fn disabled(configured: bool) -> &'static str {
    if configured { "" } else { " disabled" }
}

fn generate_section(ctx: PageContext<'_>, state: &PageState) -> String {
    let criteria = &state.criteria;
    format!(
        r#"<h2 class="section-header">Generate Startup Ideas</h2>
<form method="post" action="/ideas#generate" class="grid">
<label for="industry">Industry/Sector</label>{industry}
<label for="target_audience">Target Audience</label>
<input id="target_audience" name="target_audience" value="{audience}" placeholder="e.g., Small business owners, Students, Remote workers">
<label for="budget_range">Initial Budget Range</label>{budget}
<label for="problem_focus">Problem/Pain Point to Address</label>
<textarea id="problem_focus" name="problem_focus" placeholder="Describe the main problem your startup should solve">{problem}</textarea>
<button type="submit"{disabled}>🚀 Generate Startup Ideas</button>
</form>
{notice}{ideas}"#,
        industry = select("industry", INDUSTRIES, &criteria.industry),
        audience = escape(&criteria.target_audience),
        budget = select("budget_range", BUDGET_RANGES, &criteria.budget_range),
        problem = escape(&criteria.problem_focus),
        disabled = disabled(ctx.configured),
        notice = notice(state.idea_notice.as_ref()),
        ideas = ideas::cards(&state.ideas),
    )
}

fn validate_section(ctx: PageContext<'_>, state: &PageState) -> String {
    let submission = &state.submission;
    let banner = state
        .prefilled_from
        .as_deref()
        .map(|name| {
            format!(
                r#"<div class="{}">Validating: <strong>{}</strong></div>"#,
                Level::Info.class(),
                escape(name)
            )
        })
        .unwrap_or_default();
    let report = state.report.as_ref().map(report::details).unwrap_or_default();
    format!(
        r#"<h2 class="section-header">Market Validation</h2>
{banner}
<form method="post" action="/validate#validate" class="grid">
<label for="name">Startup Name</label>
<input id="name" name="name" value="{name}" placeholder="Enter your startup idea name">
<label for="description">Description</label>
<textarea id="description" name="description" placeholder="Describe your startup idea">{description}</textarea>
<label for="target_market">Target Market</label>
<input id="target_market" name="target_market" value="{market}" placeholder="Describe your target market">
<button type="submit"{disabled}>🔍 Validate Idea</button>
</form>
{notice}{report}"#,
        name = escape(&submission.name),
        description = escape(&submission.description),
        market = escape(&submission.target_market),
        disabled = disabled(ctx.configured),
        notice = notice(state.validation_notice.as_ref()),
    )
}
