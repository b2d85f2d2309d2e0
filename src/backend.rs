use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, DefaultBodyLimit, State},
    http::{header, HeaderMap, HeaderValue, Method, StatusCode, Uri},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use futures_util::StreamExt;
use reqwest::header::AUTHORIZATION;
use serde::Serialize;
use std::{
    cmp::Ordering,
    path::PathBuf,
    sync::atomic::{AtomicU64, Ordering as AtomicOrdering},
    time::{Duration, SystemTime, UNIX_EPOCH},
};
use tokio::time::Instant;
use tower_http::services::{ServeDir, ServeFile};
use url::Url;

use crate::contact::{ContactAck, ContactInquiry, ContactRejection, SUBMIT_FAILED_MESSAGE};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_SITE_DIST_DIR: &str = "dist";
const DEFAULT_CONTACT_FORWARD_TIMEOUT_MS: u64 = 6_000;
const DEFAULT_CONTACT_FORWARD_CONNECT_TIMEOUT_MS: u64 = 3_000;
const DEFAULT_CONTACT_MAX_BODY_BYTES: usize = 16 * 1024;
const DEFAULT_CONTACT_FORWARD_RESPONSE_MAX_BYTES: usize = 64 * 1024;
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

const CONTACT_FORWARD_TIMEOUT_MS_BOUNDS: (u64, u64) = (100, 120_000);
const CONTACT_FORWARD_CONNECT_TIMEOUT_MS_BOUNDS: (u64, u64) = (100, 30_000);
const CONTACT_MAX_BODY_BYTES_BOUNDS: (usize, usize) = (1_024, 1024 * 1024);
const CONTACT_FORWARD_RESPONSE_MAX_BYTES_BOUNDS: (usize, usize) = (1_024, 1024 * 1024);
const USER_AGENT: &str = "protorev-contact-relay/1.0";
const REQUEST_ID_HEADER: &str = "x-request-id";

const ACCEPTED_MESSAGE: &str = "Inquiry received";
const INVALID_BODY_MESSAGE: &str = "Invalid request body";
const BODY_TOO_LARGE_MESSAGE: &str = "Request body too large";
const DELIVERY_UNCONFIGURED_MESSAGE: &str = "Contact delivery is not configured";

static REQUEST_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LogLevel {
    Debug,
    Info,
}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        fn rank(level: LogLevel) -> u8 {
            match level {
                LogLevel::Debug => 0,
                LogLevel::Info => 1,
            }
        }

        rank(*self).cmp(&rank(*other))
    }
}

impl LogLevel {
    fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
        }
    }
}

#[derive(Clone, Debug)]
struct ServerConfig {
    port: u16,
    site_dist_dir: PathBuf,
    contact_forward_url: Option<Url>,
    contact_forward_token: Option<String>,
    contact_forward_timeout: Duration,
    contact_forward_connect_timeout: Duration,
    contact_max_body_bytes: usize,
    contact_forward_response_max_bytes: usize,
    log_level: LogLevel,
}

impl ServerConfig {
    fn from_env() -> Self {
        Self::from_lookup(&|name: &str| std::env::var(name).ok())
    }

    fn from_lookup(env: &dyn Fn(&str) -> Option<String>) -> Self {
        let port = parse_env_non_empty_string(env, "PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let site_dist_dir = parse_env_non_empty_string(env, "SITE_DIST_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SITE_DIST_DIR));
        let contact_forward_url = parse_env_http_url(env, "CONTACT_FORWARD_URL");
        let contact_forward_token = parse_env_non_empty_string(env, "CONTACT_FORWARD_TOKEN");
        let contact_forward_timeout_ms = parse_env_u64_with_bounds(
            env,
            "CONTACT_FORWARD_TIMEOUT_MS",
            DEFAULT_CONTACT_FORWARD_TIMEOUT_MS,
            CONTACT_FORWARD_TIMEOUT_MS_BOUNDS,
        );
        let contact_forward_connect_timeout_ms = parse_env_u64_with_bounds(
            env,
            "CONTACT_FORWARD_CONNECT_TIMEOUT_MS",
            DEFAULT_CONTACT_FORWARD_CONNECT_TIMEOUT_MS,
            CONTACT_FORWARD_CONNECT_TIMEOUT_MS_BOUNDS,
        );
        let contact_max_body_bytes = parse_env_usize_with_bounds(
            env,
            "CONTACT_MAX_BODY_BYTES",
            DEFAULT_CONTACT_MAX_BODY_BYTES,
            CONTACT_MAX_BODY_BYTES_BOUNDS,
        );
        let contact_forward_response_max_bytes = parse_env_usize_with_bounds(
            env,
            "CONTACT_FORWARD_RESPONSE_MAX_BYTES",
            DEFAULT_CONTACT_FORWARD_RESPONSE_MAX_BYTES,
            CONTACT_FORWARD_RESPONSE_MAX_BYTES_BOUNDS,
        );
        let log_level = parse_log_level(env, "LOG_LEVEL", DEFAULT_LOG_LEVEL);

        Self {
            port,
            site_dist_dir,
            contact_forward_url,
            contact_forward_token,
            contact_forward_timeout: Duration::from_millis(contact_forward_timeout_ms),
            contact_forward_connect_timeout: Duration::from_millis(
                contact_forward_connect_timeout_ms,
            ),
            contact_max_body_bytes,
            contact_forward_response_max_bytes,
            log_level,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    config: ServerConfig,
    client: reqwest::Client,
}

impl AppState {
    fn new(config: ServerConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(config.contact_forward_timeout)
            .connect_timeout(config.contact_forward_connect_timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { config, client })
    }
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum ContactResponse {
    Accepted(ContactAck),
    Rejected(ContactRejection),
}

#[derive(Debug)]
struct ContactOutcome {
    status: StatusCode,
    response: ContactResponse,
    reason: Option<&'static str>,
}

impl ContactOutcome {
    fn accepted() -> Self {
        Self {
            status: StatusCode::OK,
            response: ContactResponse::Accepted(ContactAck {
                success: true,
                message: ACCEPTED_MESSAGE.to_string(),
            }),
            reason: None,
        }
    }

    fn rejected(status: StatusCode, message: &str, reason: &'static str) -> Self {
        Self {
            status,
            response: ContactResponse::Rejected(ContactRejection::new(message)),
            reason: Some(reason),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ForwardFailure {
    Status(StatusCode),
    Unreachable,
    BodyTooLarge,
    InvalidBody,
}

impl ForwardFailure {
    fn reason(self) -> &'static str {
        match self {
            Self::Status(_) => "upstream_status",
            Self::Unreachable => "upstream_unreachable",
            Self::BodyTooLarge => "upstream_body_too_large",
            Self::InvalidBody => "upstream_invalid_body",
        }
    }
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env();
    let bind_address = format!("0.0.0.0:{}", config.port);
    let state = AppState::new(config)?;

    log_event(
        &state.config,
        LogLevel::Info,
        "server_starting",
        serde_json::json!({
            "bind_address": bind_address.as_str(),
            "site_dist_dir": state.config.site_dist_dir.display().to_string(),
            "contact_delivery": state.config.contact_forward_url.is_some(),
        }),
    );

    let app = router(state);
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn router(state: AppState) -> Router {
    let dist = state.config.site_dist_dir.clone();
    let static_service = ServeDir::new(&dist).fallback(ServeFile::new(dist.join("index.html")));
    let body_limit = state.config.contact_max_body_bytes;

    Router::new()
        .route("/api/contact", post(submit_contact))
        .layer(DefaultBodyLimit::max(body_limit))
        .fallback_service(static_service)
        .with_state(state)
}

async fn submit_contact(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> axum::response::Response {
    let request_started_at = Instant::now();
    let request_id = resolve_request_id(&headers);

    log_event(
        &state.config,
        LogLevel::Info,
        "contact_request_start",
        serde_json::json!({
            "request_id": request_id.as_str(),
            "method": method.as_str(),
            "path": uri.path(),
        }),
    );

    let outcome = match body {
        Ok(bytes) => process_contact(&state, &request_id, &bytes).await,
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            ContactOutcome::rejected(
                StatusCode::PAYLOAD_TOO_LARGE,
                BODY_TOO_LARGE_MESSAGE,
                "body_too_large",
            )
        }
        Err(_) => ContactOutcome::rejected(
            StatusCode::BAD_REQUEST,
            INVALID_BODY_MESSAGE,
            "unreadable_body",
        ),
    };

    log_event(
        &state.config,
        LogLevel::Info,
        "contact_request_complete",
        serde_json::json!({
            "request_id": request_id.as_str(),
            "status": outcome.status.as_u16(),
            "duration_ms": request_started_at.elapsed().as_millis(),
            "reason": outcome.reason,
        }),
    );

    let mut response_headers = HeaderMap::new();
    response_headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    response_with_request_id(
        outcome.status,
        response_headers,
        Json(outcome.response),
        &request_id,
    )
}

async fn process_contact(state: &AppState, request_id: &str, body: &[u8]) -> ContactOutcome {
    if body.len() > state.config.contact_max_body_bytes {
        return ContactOutcome::rejected(
            StatusCode::PAYLOAD_TOO_LARGE,
            BODY_TOO_LARGE_MESSAGE,
            "body_too_large",
        );
    }

    let Ok(inquiry) = serde_json::from_slice::<ContactInquiry>(body) else {
        return ContactOutcome::rejected(
            StatusCode::BAD_REQUEST,
            INVALID_BODY_MESSAGE,
            "invalid_body",
        );
    };

    if let Err(errors) = inquiry.validate() {
        return ContactOutcome {
            status: StatusCode::BAD_REQUEST,
            response: ContactResponse::Rejected(ContactRejection::from_field_errors(&errors)),
            reason: Some("validation"),
        };
    }

    let Some(forward_url) = state.config.contact_forward_url.as_ref() else {
        return ContactOutcome::rejected(
            StatusCode::SERVICE_UNAVAILABLE,
            DELIVERY_UNCONFIGURED_MESSAGE,
            "delivery_unconfigured",
        );
    };

    log_event(
        &state.config,
        LogLevel::Debug,
        "contact_forward_start",
        serde_json::json!({
            "request_id": request_id,
            "forward_host": forward_url.host_str().unwrap_or("unknown"),
            "name_chars": inquiry.name.chars().count(),
            "message_chars": inquiry.message.chars().count(),
            "has_company": !inquiry.company.is_empty(),
            "email_domain": email_domain(&inquiry.email),
        }),
    );

    match forward_inquiry(state, forward_url, &inquiry, request_id).await {
        Ok(()) => ContactOutcome::accepted(),
        Err(failure) => {
            log_event(
                &state.config,
                LogLevel::Info,
                "contact_forward_failed",
                serde_json::json!({
                    "request_id": request_id,
                    "reason": failure.reason(),
                    "upstream_status": match failure {
                        ForwardFailure::Status(status) => Some(status.as_u16()),
                        _ => None,
                    },
                    "upstream_status_class": match failure {
                        ForwardFailure::Status(status) => Some(http_status_class(status)),
                        _ => None,
                    },
                }),
            );
            ContactOutcome::rejected(StatusCode::BAD_GATEWAY, SUBMIT_FAILED_MESSAGE, failure.reason())
        }
    }
}

async fn forward_inquiry(
    state: &AppState,
    forward_url: &Url,
    inquiry: &ContactInquiry,
    request_id: &str,
) -> Result<(), ForwardFailure> {
    let mut request = state
        .client
        .post(forward_url.clone())
        .json(inquiry)
        .header(REQUEST_ID_HEADER, request_id);
    if let Some(token) = state.config.contact_forward_token.as_ref() {
        request = request.header(AUTHORIZATION, format!("Bearer {token}"));
    }

    let response = request
        .send()
        .await
        .map_err(|_| ForwardFailure::Unreachable)?;
    let status = response.status();
    if !status.is_success() {
        return Err(ForwardFailure::Status(status));
    }

    let body = read_limited_body(response, state.config.contact_forward_response_max_bytes).await?;
    serde_json::from_slice::<serde_json::Value>(&body).map_err(|_| ForwardFailure::InvalidBody)?;

    Ok(())
}

async fn read_limited_body(
    response: reqwest::Response,
    max_response_bytes: usize,
) -> Result<Vec<u8>, ForwardFailure> {
    let mut stream = response.bytes_stream();
    let mut body: Vec<u8> = Vec::with_capacity(1024);

    while let Some(chunk_result) = stream.next().await {
        let chunk = chunk_result.map_err(|_| ForwardFailure::Unreachable)?;

        if body.len() + chunk.len() > max_response_bytes {
            return Err(ForwardFailure::BodyTooLarge);
        }

        body.extend_from_slice(&chunk);
    }

    Ok(body)
}

fn http_status_class(status: StatusCode) -> &'static str {
    if status.is_informational() {
        return "1xx";
    }

    if status.is_success() {
        return "2xx";
    }

    if status.is_redirection() {
        return "3xx";
    }

    if status.is_client_error() {
        return "4xx";
    }

    if status.is_server_error() {
        return "5xx";
    }

    "unknown"
}

fn email_domain(email: &str) -> &str {
    email
        .rsplit_once('@')
        .map(|(_, domain)| domain)
        .unwrap_or("unknown")
}

fn parse_env_u64_with_bounds(
    env: &dyn Fn(&str) -> Option<String>,
    name: &str,
    default: u64,
    bounds: (u64, u64),
) -> u64 {
    env(name)
        .and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_env_usize_with_bounds(
    env: &dyn Fn(&str) -> Option<String>,
    name: &str,
    default: usize,
    bounds: (usize, usize),
) -> usize {
    env(name)
        .and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_env_non_empty_string(env: &dyn Fn(&str) -> Option<String>, name: &str) -> Option<String> {
    env(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_env_http_url(env: &dyn Fn(&str) -> Option<String>, name: &str) -> Option<Url> {
    let value = parse_env_non_empty_string(env, name)?;
    let parsed = Url::parse(&value).ok()?;

    if parsed.scheme() == "http" || parsed.scheme() == "https" {
        Some(parsed)
    } else {
        None
    }
}

fn parse_log_level(
    env: &dyn Fn(&str) -> Option<String>,
    name: &str,
    default: LogLevel,
) -> LogLevel {
    match parse_env_non_empty_string(env, name)
        .unwrap_or_else(|| default.as_str().to_string())
        .to_ascii_lowercase()
        .as_str()
    {
        "debug" => LogLevel::Debug,
        "info" => LogLevel::Info,
        _ => default,
    }
}

fn now_unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis())
        .unwrap_or(0)
}

fn now_unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_secs())
        .unwrap_or(0)
}

fn generate_request_id() -> String {
    let counter = REQUEST_ID_COUNTER.fetch_add(1, AtomicOrdering::Relaxed);
    format!("req-{}-{counter}", now_unix_millis())
}

fn resolve_request_id(headers: &HeaderMap) -> String {
    let value = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|raw| raw.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string);

    value.unwrap_or_else(generate_request_id)
}

fn response_with_request_id(
    status: StatusCode,
    mut headers: HeaderMap,
    payload: impl IntoResponse,
    request_id: &str,
) -> axum::response::Response {
    if let Ok(request_id_header) = HeaderValue::from_str(request_id) {
        headers.insert(REQUEST_ID_HEADER, request_id_header);
    }
    (status, headers, payload).into_response()
}

fn log_event(config: &ServerConfig, level: LogLevel, event: &str, fields: serde_json::Value) {
    if level < config.log_level {
        return;
    }

    let mut payload = serde_json::Map::new();
    payload.insert(
        "ts".to_string(),
        serde_json::Value::Number(serde_json::Number::from(now_unix_seconds())),
    );
    payload.insert("level".to_string(), serde_json::Value::String(level.as_str().to_string()));
    payload.insert("event".to_string(), serde_json::Value::String(event.to_string()));

    if let serde_json::Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    println!("{}", serde_json::Value::Object(payload));
}
