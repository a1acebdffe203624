use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Router};
use tracing::info;

use crate::catalog::Catalog;
use crate::config::app_conf::AppConfig;
use crate::router::contact_router::contact_router;
use crate::router::quote_router::quote_router;
use crate::service::contact_service::ContactServiceImpl;
use crate::service::quote_service::QuoteServiceImpl;
use crate::util::sink::{SubmissionSink, TracingSink};

pub struct App {
    config: AppConfig,
    router: Router,
    pub catalog: Arc<Catalog>,
    pub contact_service: Arc<ContactServiceImpl>,
    pub quote_service: Arc<QuoteServiceImpl>,
}

impl App {
    pub async fn new() -> Self {
        let config = AppConfig::from_env().expect("App config error");

        // The catalog is built once and injected everywhere it is needed.
        let catalog = Arc::new(Catalog::new());
        let stats = catalog.stats();
        info!(
            "Loaded supplies catalog: {} products in {} categories ({} featured), {} locations, {} care services",
            stats.total_products,
            stats.total_categories,
            stats.featured_products,
            catalog.locations().len(),
            catalog.care_services().len(),
        );

        let sink: Arc<dyn SubmissionSink> = Arc::new(TracingSink);
        let contact_service = Arc::new(ContactServiceImpl::new(sink.clone()));
        let quote_service = Arc::new(QuoteServiceImpl::new(catalog.clone(), sink));

        let mut app = App {
            config,
            router: Router::new(),
            catalog,
            contact_service,
            quote_service,
        };
        app.router = app.create_router();
        app
    }

    fn create_router(&self) -> Router {
        Router::new()
            .merge(contact_router(self.contact_service.clone()))
            .merge(quote_router(self.quote_service.clone()))
            .route("/health", get(|| async { "OK" }))
    }

    pub async fn start(self) {
        let addr = SocketAddr::new(self.config.host.parse().expect("Invalid host"), self.config.port);
        info!("🚀 Server running at http://{}", addr);
        let listener = tokio::net::TcpListener::bind(addr).await.expect("Failed to bind address");
        axum::serve(listener, self.router).await.expect("Failed to start server");
    }
}
