use axum::{Extension, Router, routing::get};
use std::{net::SocketAddr, str::FromStr, sync::Arc};

use crate::{api, config::Config, error, info};

pub async fn start_api_server(config: Arc<Config>) {
    let app = Router::new()
        .route("/key", get(api::key))
        .route("/getLyrics/{trackId}", get(api::lyrics))
        .route("/getLyricsByName/{musician}/{track}", get(api::lyrics_by_name))
        .layer(Extension(config.clone()));

    let addr = match SocketAddr::from_str(&config.server_address) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address: {}", e),
    };

    info!("Server started on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
