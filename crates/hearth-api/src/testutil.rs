//! Stub backend helpers for the HTTP tests.

use axum::Router;

/// Bind the router on an ephemeral port and return the base URL.
///
/// The server task runs until the test's runtime is torn down.
pub(crate) async fn spawn_stub(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr = listener.local_addr().expect("stub local addr");

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("stub server");
    });

    format!("http://{addr}")
}
