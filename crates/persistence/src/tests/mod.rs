// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]


use crate::{HttpBackend, HttpBackendConfig};
use axum::Router;

/// Binds an ephemeral-port stub service and serves the router in the
/// background, returning the base URL to point a client at.
pub async fn spawn_stub(router: Router) -> String {
    let listener: tokio::net::TcpListener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .unwrap();
    let addr: std::net::SocketAddr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// The token every stub expects.
pub const TEST_TOKEN: &str = "secret-token";

pub fn backend_for(base_url: &str) -> HttpBackend {
    HttpBackend::new(HttpBackendConfig::new(base_url, TEST_TOKEN)).unwrap()
}
