use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::Body;
use axum::extract::{Request, State};
use axum::middleware::{Next, from_fn_with_state};
use axum::response::{Html, IntoResponse, Response};
use axum::{Router, routing::get};
use cors_gate::http::{merge_headers, request_context};
use cors_gate::{AllowedHeaders, AllowedOrigins, Cors, CorsOptions, TracingLogger};
use tracing_subscriber::EnvFilter;

type SharedCors = Arc<Cors>;

fn build_cors() -> Result<SharedCors, cors_gate::ValidationError> {
    let options = CorsOptions {
        allowed_origins: AllowedOrigins::list(["http://localhost:3000", "http://127.0.0.1:3000"]),
        allowed_headers: AllowedHeaders::list(["Content-Type", "Authorization", "X-Request-Id"]),
        max_age: 600,
        ..CorsOptions::default()
    }
    .with_logger(TracingLogger);

    Cors::try_new(options).map(Arc::new)
}

async fn cors_middleware(State(cors): State<SharedCors>, request: Request, next: Next) -> Response {
    let mut staged = Response::new(Body::empty());
    let decision = cors.serve(&request_context(&request), &mut staged, |_| {});
    if !decision.forwarded {
        return staged;
    }

    let mut response = next.run(request).await;
    merge_headers(staged.headers(), response.headers_mut());
    response
}

async fn greet() -> impl IntoResponse {
    Html("<h1>Hello</h1><p>Call this endpoint from http://localhost:3000 to see CORS in action.</p>")
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cors_gate=debug,info")),
        )
        .init();

    let cors = build_cors()?;
    let app = Router::new()
        .route("/greet", get(greet))
        .layer(from_fn_with_state(cors, cors_middleware));

    let addr: SocketAddr = "127.0.0.1:5001".parse()?;
    tracing::info!("axum demo running on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
