use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::{DefaultMakeSpan, TraceLayer};

use crate::{
    configuration::Settings,
    routes::pet_routes,
    store::{MongoPetStore, PetStore},
};

pub struct Application {
    listener: TcpListener,
    router: Router,
    port: u16,
}

#[derive(Clone)]
pub struct ApplicationState {
    pub store: Arc<dyn PetStore>,
}

impl Application {
    pub async fn build(settings: Settings) -> Result<Self, std::io::Error> {
        let store = MongoPetStore::connect(&settings.database)
            .await
            .map_err(std::io::Error::other)?;

        Self::build_with_store(settings, Arc::new(store)).await
    }

    pub async fn build_with_store(
        settings: Settings,
        store: Arc<dyn PetStore>,
    ) -> Result<Self, std::io::Error> {
        let address = format!(
            "{}:{}",
            settings.application.host, settings.application.port
        );

        let listener = TcpListener::bind(address).await?;
        let port = listener.local_addr()?.port();

        let application_state = ApplicationState { store };

        let router = pet_routes()
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(DefaultMakeSpan::default().include_headers(true)),
            )
            .with_state(application_state);

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
