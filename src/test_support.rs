use axum::{http::StatusCode, response::Html, routing::get, Router};

/// Serve `body` with `status` on an ephemeral local port and return the page URL.
pub async fn serve_once(status: StatusCode, body: &'static str) -> String {
    let app = Router::new().route(
        "/leagues/football/nfl",
        get(move || async move { (status, Html(body)) }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}/leagues/football/nfl", addr)
}
