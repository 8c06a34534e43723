use crate::{
    frontend::app::{shell, App},
    server::{config::TradukoConfig, error::ServerResult},
};
use assets::file_and_error_handler;
use axum::Router;
use leptos::config::get_config_from_str;
use leptos_axum::{generate_route_list, LeptosRoutes};
use log::info;
use tokio::net::TcpListener;
use tower_http::{compression::CompressionLayer, cors::CorsLayer};

mod assets;
pub mod config;
pub mod error;

/// Serve the rendered app and its static assets. Everything the pages show
/// comes from the external platform api, there are no data routes here.
pub async fn start(config: TradukoConfig) -> ServerResult<()> {
    let mut leptos_options = get_config_from_str(include_str!("../../Cargo.toml"))?;
    leptos_options.site_addr = config.bind;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(file_and_error_handler)
        .with_state(leptos_options)
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new());

    info!("Listening on {addr}");
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
