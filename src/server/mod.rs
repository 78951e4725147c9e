//! HTTP listener and server-render shim.
//!
//! Static assets are served under `/dist`; every other path gets the
//! template spliced around server-rendered markup for that route. The
//! response streams: prefix first, markup chunks as produced, then the
//! suffix, with the final byte sequence identical to a synchronous
//! render.

mod render;
mod template;

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{Uri, header};
use axum::response::{IntoResponse, Response};
use tokio::net::TcpListener;
use tower_http::services::ServeDir;

pub use render::{Route, render_chunks, render_route};
pub use template::{Template, rewrite_asset_paths};

use crate::error::Result;
use crate::models::ServerConfig;

/// Run the HTTP listener until shutdown.
///
/// Template problems are reported here, before binding the socket.
pub async fn serve(config: &ServerConfig) -> Result<()> {
    let template = Arc::new(Template::load(&config.template_path, &config.marker)?);
    let app = router(template, &config.asset_dir);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.effective_port()));
    let listener = TcpListener::bind(addr).await?;
    log::info!("listening on {addr}");
    axum::serve(listener, app).await?;
    Ok(())
}

/// Build the application router.
pub fn router(template: Arc<Template>, asset_dir: &str) -> Router {
    Router::new()
        .nest_service("/dist", ServeDir::new(asset_dir))
        .fallback(render_page)
        .with_state(template)
}

async fn render_page(State(template): State<Arc<Template>>, uri: Uri) -> Response {
    let parts = template.render_parts(render_chunks(uri.path()));
    let stream = futures::stream::iter(
        parts
            .into_iter()
            .map(|part| Ok::<_, Infallible>(Bytes::from(part))),
    );
    (
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        Body::from_stream(stream),
    )
        .into_response()
}
