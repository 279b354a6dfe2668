//! `tiny_http` front end.
//!
//! One blocking thread accepts requests and serves them in order, driving
//! each gateway call to completion with the runtime handle.

mod app;
mod form;
mod session;

use std::io::{self, Read};
use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use tokio::runtime::Handle;
use venture_gateway::Transport;

use app::{Method, Reply, Request};
pub use app::App;

/// Largest accepted form body. Larger bodies are refused with 413.
const MAX_BODY_BYTES: u64 = 64 * 1024;

/// Serve the page on `bind` until ctrl-c.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the request loop dies.
pub async fn serve<T: Transport + 'static>(bind: &str, app: App<T>) -> anyhow::Result<()> {
    let server = tiny_http::Server::http(bind)
        .map_err(|e| anyhow::anyhow!("failed to bind {bind}: {e}"))?;
    let server = Arc::new(server);

    let address = server
        .server_addr()
        .to_ip()
        .map_or_else(|| bind.to_string(), |addr| addr.to_string());
    tracing::info!(%address, "venture listening on http://{address}/");

    let runtime = Handle::current();
    let worker = Arc::clone(&server);
    let mut accept = tokio::task::spawn_blocking(move || accept_loop(&worker, &app, &runtime));

    tokio::select! {
        joined = &mut accept => joined.context("request loop panicked")?,
        signal = tokio::signal::ctrl_c() => {
            signal.context("failed to listen for ctrl-c")?;
            tracing::info!("shutting down");
            server.unblock();
            accept.await.context("request loop panicked")?;
        }
    }
    Ok(())
}

fn accept_loop<T: Transport>(server: &tiny_http::Server, app: &App<T>, runtime: &Handle) {
    for request in server.incoming_requests() {
        respond(request, app, runtime);
    }
    tracing::debug!("request loop stopped");
}

/// Read a request body of at most [`MAX_BODY_BYTES`]; `None` when it is larger.
fn read_body(reader: impl Read) -> io::Result<Option<String>> {
    let mut bytes = Vec::new();
    reader.take(MAX_BODY_BYTES + 1).read_to_end(&mut bytes)?;
    if bytes.len() > usize::try_from(MAX_BODY_BYTES).unwrap_or(usize::MAX) {
        return Ok(None);
    }
    String::from_utf8(bytes)
        .map(Some)
        .map_err(|error| io::Error::new(io::ErrorKind::InvalidData, error))
}

fn header_value<'a>(request: &'a tiny_http::Request, name: &'static str) -> Option<&'a str> {
    request
        .headers()
        .iter()
        .find(|header| header.field.equiv(name))
        .map(|header| header.value.as_str())
}

fn respond<T: Transport>(mut request: tiny_http::Request, app: &App<T>, runtime: &Handle) {
    let started = Instant::now();
    let method = Method::from(request.method());
    let url = request.url().to_string();
    let path = url.split('?').next().unwrap_or_default();
    let cookie = header_value(&request, "Cookie").map(str::to_string);

    let reply = match read_body(request.as_reader()) {
        Ok(Some(body)) => runtime.block_on(app.handle(Request {
            method,
            url: &url,
            cookie: cookie.as_deref(),
            body: &body,
        })),
        Ok(None) => {
            tracing::warn!(path, limit = MAX_BODY_BYTES, "request body too large");
            Reply::status(413, "Form submission too large")
        }
        Err(error) => {
            tracing::warn!(path, %error, "unreadable request body");
            Reply::status(400, "Unreadable form submission")
        }
    };

    let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    tracing::info!(method = ?method, path, status = reply.status, elapsed_ms, "request");

    let mut response = tiny_http::Response::from_data(reply.html).with_status_code(reply.status);
    let mut headers = vec![("Content-Type", "text/html; charset=utf-8".to_string())];
    if let Some(id) = &reply.new_session {
        headers.push(("Set-Cookie", session::set_cookie(id)));
    }
    for (name, value) in headers {
        match tiny_http::Header::from_bytes(name, value) {
            Ok(header) => response = response.with_header(header),
            Err(()) => tracing::warn!(name, "invalid response header dropped"),
        }
    }
    if let Err(error) = request.respond(response) {
        tracing::warn!(path, %error, "failed to write response");
    }
}
