//! Request routing.
//!
//! Form inputs come from the request itself. Generated ideas and the last
//! report live in the browser's session, so they survive later requests
//! until a new successful generation or validation replaces them.

use venture_config::DotenvStatus;
use venture_gateway::{Gateway, HttpTransport, IdeaCriteria, IdeaSubmission, Transport};

use super::form::Form;
use super::session::{self, Session, SessionStore};
use crate::render::{self, Notice, PageContext, PageState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Other,
}

impl From<&tiny_http::Method> for Method {
    fn from(method: &tiny_http::Method) -> Self {
        match method {
            tiny_http::Method::Get => Self::Get,
            tiny_http::Method::Post => Self::Post,
            _ => Self::Other,
        }
    }
}

/// The parts of an HTTP request the app looks at.
#[derive(Debug, Clone, Copy)]
pub struct Request<'a> {
    pub method: Method,
    /// Request target including any query.
    pub url: &'a str,
    /// Raw `Cookie` header.
    pub cookie: Option<&'a str>,
    pub body: &'a str,
}

/// A rendered HTML response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub html: String,
    /// Newly issued session id, to be sent as a cookie.
    pub new_session: Option<String>,
}

impl Reply {
    const fn ok(html: String) -> Self {
        Self {
            status: 200,
            html,
            new_session: None,
        }
    }

    pub fn status(status: u16, message: &str) -> Self {
        Self {
            status,
            html: render::status_page(status, message),
            new_session: None,
        }
    }
}

pub struct App<T: Transport = HttpTransport> {
    gateway: Gateway<T>,
    dotenv: DotenvStatus,
    sessions: SessionStore,
}

impl<T: Transport> App<T> {
    #[must_use]
    pub fn new(gateway: Gateway<T>, dotenv: DotenvStatus) -> Self {
        Self {
            gateway,
            dotenv,
            sessions: SessionStore::default(),
        }
    }

    fn context(&self) -> PageContext<'_> {
        PageContext {
            configured: self.gateway.is_configured(),
            model: self.gateway.model(),
            dotenv: self.dotenv,
        }
    }

    /// Render `state`, filling the result slots it leaves empty from the session.
    fn render(&self, session: Option<&str>, mut state: PageState) -> Reply {
        if let Some(id) = session {
            let Session { ideas, report } = self.sessions.get(id);
            if state.ideas.is_empty() {
                state.ideas = ideas;
            }
            if state.report.is_none() {
                state.report = report;
            }
        }
        Reply::ok(render::page(self.context(), &state))
    }

    fn remember(&self, session: Option<&str>, change: impl FnOnce(&mut Session)) {
        if let Some(id) = session {
            self.sessions.update(id, change);
        }
    }

    /// Route one request.
    pub async fn handle(&self, request: Request<'_>) -> Reply {
        let (path, query) = request.url.split_once('?').unwrap_or((request.url, ""));
        if !matches!(path, "/" | "/ideas" | "/validate") {
            return Reply::status(404, "Page not found");
        }

        let existing = request.cookie.and_then(session::id_from_cookie);
        let issued = match existing {
            Some(_) => None,
            None => session::new_id()
                .inspect_err(|error| tracing::warn!(%error, "could not create a session id"))
                .ok(),
        };
        let session = existing.or(issued.as_deref());

        let mut reply = match (request.method, path) {
            (Method::Get, "/") => self.index(session, &Form::parse(query)),
            (Method::Post, "/ideas") => self.ideas(session, &Form::parse(request.body)).await,
            (Method::Post, "/validate") => {
                self.validate(session, &Form::parse(request.body)).await
            }
            _ => Reply::status(405, "Method not allowed"),
        };
        reply.new_session = issued;
        reply
    }

    /// The page, with the validation form pre-filled from a generated idea's
    /// "Validate This Idea" button when the query carries one.
    fn index(&self, session: Option<&str>, query: &Form) -> Reply {
        let submission = submission(query);
        let prefilled_from = (!submission.name.is_empty()).then(|| submission.name.clone());
        self.render(
            session,
            PageState {
                submission,
                prefilled_from,
                ..PageState::default()
            },
        )
    }

    async fn ideas(&self, session: Option<&str>, form: &Form) -> Reply {
        let criteria = IdeaCriteria {
            industry: form.text("industry"),
            target_audience: form.text("target_audience"),
            budget_range: form.text("budget_range"),
            problem_focus: form.text("problem_focus"),
        };
        let mut state = PageState::default();

        let complete = [
            &criteria.industry,
            &criteria.target_audience,
            &criteria.budget_range,
            &criteria.problem_focus,
        ]
        .iter()
        .all(|field| !field.is_empty());

        if complete {
            match self.gateway.generate_ideas(&criteria).await {
                Ok(ideas) => {
                    self.remember(session, |stored| stored.ideas.clone_from(&ideas));
                    state.ideas = ideas;
                }
                Err(error) => state.idea_notice = Some(Notice::from_error(&error)),
            }
        } else {
            state.idea_notice = Some(Notice::warning(
                "Please fill in all fields to generate ideas.",
            ));
        }
        state.criteria = criteria;
        self.render(session, state)
    }

    async fn validate(&self, session: Option<&str>, form: &Form) -> Reply {
        let submission = submission(form);
        let mut state = PageState::default();

        let complete = [
            &submission.name,
            &submission.description,
            &submission.target_market,
        ]
        .iter()
        .all(|field| !field.is_empty());

        if complete {
            match self.gateway.validate_idea(&submission).await {
                Ok(report) => {
                    self.remember(session, |stored| stored.report = Some(report.clone()));
                    state.report = Some(report);
                }
                Err(error) => state.validation_notice = Some(Notice::from_error(&error)),
            }
        } else {
            state.validation_notice = Some(Notice::warning(
                "Please fill in all fields for validation.",
            ));
        }
        state.submission = submission;
        self.render(session, state)
    }
}

fn submission(form: &Form) -> IdeaSubmission {
    IdeaSubmission {
        name: form.text("name"),
        description: form.text("description"),
        target_market: form.text("target_market"),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use pretty_assertions::assert_eq;
    use venture_config::{GatewayConfig, OpenRouterConfig};
    use venture_gateway::CompletionCall;

    struct FakeTransport {
        status: u16,
        body: String,
        calls: AtomicUsize,
    }

    impl FakeTransport {
        fn replying(content: &str) -> Self {
            let body = serde_json::json!({
                "choices": [{"message": {"role": "assistant", "content": content}}]
            });
            Self {
                status: 200,
                body: body.to_string(),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing(status: u16, body: &str) -> Self {
            Self {
                status,
                body: body.to_string(),
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl Transport for FakeTransport {
        fn send(
            &self,
            _call: CompletionCall<'_>,
        ) -> impl Future<Output = Result<reqwest::Response, reqwest::Error>> + Send {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let response = reqwest::Response::from(
                http::Response::builder()
                    .status(self.status)
                    .body(self.body.clone())
                    .unwrap(),
            );
            async move { Ok(response) }
        }
    }

    fn app(transport: FakeTransport, api_key: &str) -> App<FakeTransport> {
        let openrouter = OpenRouterConfig {
            api_key: api_key.into(),
            ..Default::default()
        };
        App::new(
            Gateway::with_transport(transport, openrouter, GatewayConfig::default()),
            DotenvStatus::default(),
        )
    }

    async fn send(app: &App<FakeTransport>, method: Method, url: &str, body: &str) -> Reply {
        app.handle(Request {
            method,
            url,
            cookie: None,
            body,
        })
        .await
    }

    /// Send with the session cookie a previous reply issued.
    async fn send_in(
        app: &App<FakeTransport>,
        session: &str,
        method: Method,
        url: &str,
        body: &str,
    ) -> Reply {
        let cookie = format!("{}={session}", session::COOKIE_NAME);
        app.handle(Request {
            method,
            url,
            cookie: Some(&cookie),
            body,
        })
        .await
    }

    fn calls(app: &App<FakeTransport>) -> usize {
        app.gateway.transport().calls.load(Ordering::SeqCst)
    }

    const IDEAS_FORM: &str = "industry=Technology&target_audience=Students\
        &budget_range=%2410K+-+%2450K&problem_focus=Note+taking";
    const SESSION_A: &str = "0123456789abcdef0123456789abcdef";
    const SESSION_B: &str = "fedcba9876543210fedcba9876543210";
    const VALIDATE_FORM: &str = "name=PantryPal&description=Tracks+groceries&target_market=Families";

    fn ideas_json() -> String {
        let idea = |name: &str| {
            serde_json::json!({
                "name": name,
                "description": "d",
                "value_proposition": "v",
                "market_size": "Large",
                "revenue_model": "SaaS",
                "key_features": ["a", "b", "c"],
                "competitive_advantage": "c"
            })
        };
        serde_json::json!({"ideas": [idea("Alpha"), idea("Beta"), idea("Gamma")]}).to_string()
    }

    fn validation_json() -> String {
        serde_json::json!({
            "market_opportunity_score": 7,
            "competition_level": "Medium",
            "market_trends": "Growing",
            "swot": {
                "strengths": ["s"],
                "weaknesses": ["w"],
                "opportunities": ["o"],
                "threats": ["t"]
            },
            "go_to_market": "Partnerships",
            "financial_projections": {"year_1": "$1", "year_2": "$2", "year_3": "$3"},
            "risk_assessment": "Moderate",
            "success_probability": 6,
            "key_metrics": ["MAU"],
            "recommendations": ["Ship"]
        })
        .to_string()
    }

    #[tokio::test]
    async fn index_renders_empty_page() {
        let app = app(FakeTransport::replying("{}"), "sk-test");
        let reply = send(&app, Method::Get, "/", "").await;
        assert_eq!(reply.status, 200);
        assert!(reply.html.contains("Generate Startup Ideas"));
        assert!(!reply.html.contains("Validating:"));
        assert_eq!(calls(&app), 0);
    }

    #[tokio::test]
    async fn index_prefills_validation_from_query() {
        let app = app(FakeTransport::replying("{}"), "sk-test");
        let reply = send(
            &app,
            Method::Get,
            "/?name=Rent+Split&description=Share+bills&target_market=30M+renters",
            "",
        )
        .await;
        assert!(reply.html.contains("Validating: <strong>Rent Split</strong>"));
        assert!(reply.html.contains(r#"value="30M renters""#));
    }

    #[tokio::test]
    async fn unknown_path_is_404_and_wrong_method_is_405() {
        let app = app(FakeTransport::replying("{}"), "sk-test");
        assert_eq!(send(&app, Method::Get, "/favicon.ico", "").await.status, 404);
        assert_eq!(send(&app, Method::Get, "/ideas", "").await.status, 405);
        assert_eq!(send(&app, Method::Other, "/", "").await.status, 405);
        assert_eq!(send(&app, Method::Post, "/", "").await.status, 405);
    }

    #[tokio::test]
    async fn incomplete_idea_form_warns_without_calling_gateway() {
        let app = app(FakeTransport::replying(&ideas_json()), "sk-test");
        let form = "industry=Technology&target_audience=+";
        let reply = send(&app, Method::Post, "/ideas", form).await;
        assert!(reply.html.contains("Please fill in all fields to generate ideas."));
        assert_eq!(calls(&app), 0);
    }

    #[tokio::test]
    async fn idea_form_renders_cards() {
        let app = app(FakeTransport::replying(&ideas_json()), "sk-test");
        let reply = send(&app, Method::Post, "/ideas", IDEAS_FORM).await;
        assert_eq!(reply.status, 200);
        assert_eq!(reply.html.matches(r#"<article class="idea-card">"#).count(), 3);
        assert!(reply.html.contains(r#"<option value="$10K - $50K" selected>"#));
        assert_eq!(calls(&app), 1);
    }

    #[tokio::test]
    async fn malformed_reply_shows_format_notice() {
        let app = app(
            FakeTransport::replying("Here are your ideas: {\"ideas\": []}"),
            "sk-test",
        );
        let reply = send(&app, Method::Post, "/ideas", IDEAS_FORM).await;
        assert!(reply.html.contains("Failed to parse AI response"));
        assert!(reply.html.contains("Raw response for debugging:"));
        assert!(!reply.html.contains(r#"<article class="idea-card">"#));
    }

    #[tokio::test]
    async fn missing_key_renders_configuration_notice() {
        let app = app(FakeTransport::replying(&ideas_json()), "");
        let reply = send(&app, Method::Post, "/ideas", IDEAS_FORM).await;
        assert!(reply.html.contains("OpenRouter API key not found"));
        assert_eq!(calls(&app), 0);
    }

    #[tokio::test]
    async fn incomplete_validation_form_warns() {
        let app = app(FakeTransport::replying(&validation_json()), "sk-test");
        let reply = send(&app, Method::Post, "/validate", "name=PantryPal").await;
        assert!(reply.html.contains("Please fill in all fields for validation."));
        assert!(reply.html.contains(r#"value="PantryPal""#));
        assert_eq!(calls(&app), 0);
    }

    #[tokio::test]
    async fn validation_renders_report_and_charts() {
        let app = app(FakeTransport::replying(&validation_json()), "sk-test");
        let reply = send(&app, Method::Post, "/validate", VALIDATE_FORM).await;
        assert!(reply.html.contains("Market Analysis for PantryPal"));
        assert!(reply.html.contains("<b>7/10</b>"));
        assert_eq!(reply.html.matches("<svg").count(), 3);
    }

    #[tokio::test]
    async fn api_failure_renders_status() {
        let app = app(
            FakeTransport::failing(401, r#"{"error":{"message":"No auth credentials found"}}"#),
            "sk-test",
        );
        let reply = send(&app, Method::Post, "/validate", VALIDATE_FORM).await;
        assert!(reply.html.contains("API Error (HTTP 401)"));
        assert!(reply.html.contains("Generate and validate a startup idea to see analytics!"));
    }

    #[tokio::test]
    async fn first_request_issues_a_session_and_later_ones_reuse_it() {
        let app = app(FakeTransport::replying("{}"), "sk-test");
        let first = send(&app, Method::Get, "/", "").await;
        let id = first.new_session.expect("session issued");
        assert!(session::is_valid_id(&id));

        let again = send_in(&app, &id, Method::Get, "/", "").await;
        assert_eq!(again.new_session, None);
    }

    #[tokio::test]
    async fn report_survives_later_page_loads_in_the_same_session() {
        let app = app(FakeTransport::replying(&validation_json()), "sk-test");
        let validated = send(&app, Method::Post, "/validate", VALIDATE_FORM).await;
        let id = validated.new_session.expect("session issued");
        assert_eq!(validated.html.matches("<svg").count(), 3);

        let reloaded = send_in(&app, &id, Method::Get, "/", "").await;
        assert_eq!(reloaded.html.matches("<svg").count(), 3);
        assert!(reloaded.html.contains("Market Analysis for PantryPal"));
        assert_eq!(calls(&app), 1);
    }

    #[tokio::test]
    async fn sessions_do_not_share_results() {
        let app = app(FakeTransport::replying(&validation_json()), "sk-test");
        send_in(&app, SESSION_A, Method::Post, "/validate", VALIDATE_FORM).await;

        let other = send_in(&app, SESSION_B, Method::Get, "/", "").await;
        assert!(other.html.contains("Generate and validate a startup idea to see analytics!"));
    }

    #[tokio::test]
    async fn failed_generation_keeps_the_stored_report() {
        // The validation reply is not an idea batch, so generation fails.
        let app = app(FakeTransport::replying(&validation_json()), "sk-test");
        send_in(&app, SESSION_A, Method::Post, "/validate", VALIDATE_FORM).await;

        let reply = send_in(&app, SESSION_A, Method::Post, "/ideas", IDEAS_FORM).await;
        assert!(reply.html.contains("Failed to parse AI response"));
        assert_eq!(reply.html.matches("<svg").count(), 3);
    }

    #[tokio::test]
    async fn new_ideas_replace_only_the_idea_slot() {
        let app = app(FakeTransport::replying(&ideas_json()), "sk-test");
        send_in(&app, SESSION_A, Method::Post, "/ideas", IDEAS_FORM).await;

        let reloaded = send_in(&app, SESSION_A, Method::Get, "/", "").await;
        assert_eq!(reloaded.html.matches(r#"<article class="idea-card">"#).count(), 3);
        assert!(reloaded.html.contains("Generate and validate a startup idea to see analytics!"));
    }
}
