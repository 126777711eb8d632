use std::{path::PathBuf, sync::Arc};

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Router,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::configuration::StaticSiteSettings;

pub struct StaticSite {
    listener: TcpListener,
    router: Router,
    port: u16,
}

#[derive(Clone)]
struct StaticSiteState {
    file_path: Arc<PathBuf>,
}

impl StaticSite {
    pub async fn build(settings: StaticSiteSettings) -> Result<Self, std::io::Error> {
        let address = format!("{}:{}", settings.host, settings.port);
        let listener = TcpListener::bind(address).await?;
        let port = listener.local_addr()?.port();

        let state = StaticSiteState {
            file_path: Arc::new(PathBuf::from(settings.file_path)),
        };

        // Every request gets the same handling, whatever the method or path.
        let router = Router::new()
            .fallback(serve_index)
            .layer(TraceLayer::new_for_http())
            .with_state(state);

        Ok(Self {
            listener,
            router,
            port,
        })
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        tracing::info!("listening on {}", self.listener.local_addr()?);
        axum::serve(self.listener, self.router).await
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

// The file is re-read on every request; updates show up without a restart.
async fn serve_index(State(state): State<StaticSiteState>) -> Response {
    match tokio::fs::read(&*state.file_path).await {
        Ok(contents) => (
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            contents,
        )
            .into_response(),
        Err(_) => (StatusCode::NOT_FOUND, "sorry").into_response(),
    }
}
