//! Stand-in sign-in and GraphQL endpoints served by axum on an ephemeral port.

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode, Uri},
    response::IntoResponse,
    routing::post,
    Router,
};
use std::sync::Arc;
use std::time::Duration;

pub const TOKEN: &str = "header.payload.signature";
pub const SIGNIN_PATH: &str = "/api/auth/signin";
pub const GRAPHQL_PATH: &str = "/api/graphql-engine/v1/graphql";

/// The parts of a request the handlers look at
#[derive(Clone, Debug)]
pub struct Request {
    pub path: String,
    pub authorization: Option<String>,
    pub body: String,
}

pub type Handler = Arc<dyn Fn(&Request) -> (u16, String) + Send + Sync>;

async fn dispatch(
    State(handler): State<Handler>,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> impl IntoResponse {
    let request = Request {
        path: uri.path().to_string(),
        authorization: headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string),
        body,
    };
    let (status, body) = handler(&request);
    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, [(header::CONTENT_TYPE, "application/json")], body)
}

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    format!("http://{}", addr)
}

/// Serve `handler` behind both endpoints and return the base URL
pub async fn spawn_server(handler: Handler) -> String {
    let router = Router::new()
        .route(SIGNIN_PATH, post(dispatch))
        .route(GRAPHQL_PATH, post(dispatch))
        .with_state(handler);
    serve(router).await
}

/// A GraphQL endpoint that answers only after `delay`
pub async fn spawn_slow_server(delay: Duration) -> String {
    let router = Router::new().route(
        GRAPHQL_PATH,
        post(move || async move {
            tokio::time::sleep(delay).await;
            (StatusCode::OK, r#"{"data":{"user":[]}}"#)
        }),
    );
    serve(router).await
}

/// Canned GraphQL data for the five collections
pub fn graphql_data(body: &str) -> String {
    if body.contains("user {") {
        r#"{"data":{"user":[{"id":1234,"login":"jdoe"}]}}"#.to_string()
    } else if body.contains("transaction {") {
        r#"{"data":{"transaction":[
            {"type":"xp","amount":100,"createdAt":"2024-01-01T10:00:00.000+00:00","path":"/kisumu/module/go-reloaded","objectId":1,"eventId":20},
            {"type":"xp","amount":50,"createdAt":"2024-01-02T11:00:00.000+00:00","path":"/kisumu/module/ascii-art","objectId":2,"eventId":20},
            {"type":"xp","amount":25,"createdAt":"2024-01-02T15:00:00.000+00:00","path":"/kisumu/piscine-js/quest-01","objectId":2,"eventId":72},
            {"type":"up","amount":900,"createdAt":"2024-01-03T10:00:00.000+00:00","path":"/kisumu/module/go-reloaded","objectId":1,"eventId":20},
            {"type":"level","amount":3,"createdAt":"2024-01-03T10:00:00.000+00:00","path":"/kisumu/module","objectId":null,"eventId":20}
        ]}}"#
            .to_string()
    } else if body.contains("result {") {
        r#"{"data":{"result":[
            {"grade":1,"objectId":1,"type":"tester"},
            {"grade":0,"objectId":2,"type":"tester"},
            {"grade":1.4,"objectId":2,"type":"user_audit"},
            {"grade":null,"objectId":3,"type":"user_audit"},
            {"grade":0,"objectId":3,"type":"admin_selection"}
        ]}}"#
            .to_string()
    } else if body.contains("object {") {
        r#"{"data":{"object":[
            {"id":1,"name":"go-reloaded","type":"project"},
            {"id":2,"name":"ascii-art","type":"project"}
        ]}}"#
            .to_string()
    } else if body.contains("event {") {
        r#"{"data":{"event":[{"id":20,"path":"/kisumu/module","objectId":100}]}}"#.to_string()
    } else {
        r#"{"errors":[{"message":"unknown query"}]}"#.to_string()
    }
}

/// Sign-in accepting `jdoe:secret`, GraphQL requiring the bearer token
pub fn platform(request: &Request) -> (u16, String) {
    match request.path.as_str() {
        SIGNIN_PATH => {
            // base64("jdoe:secret")
            if request.authorization.as_deref() == Some("Basic amRvZTpzZWNyZXQ=") {
                (200, format!("\"{}\"", TOKEN))
            } else {
                (401, r#"{"error":"User does not exist or password incorrect"}"#.to_string())
            }
        }
        GRAPHQL_PATH => {
            if request.authorization.as_deref() == Some(format!("Bearer {}", TOKEN).as_str()) {
                (200, graphql_data(&request.body))
            } else {
                (401, r#"{"error":"invalid token"}"#.to_string())
            }
        }
        _ => (404, "{}".to_string()),
    }
}
