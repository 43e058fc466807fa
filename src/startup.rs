//! Application Startup
//!
//! Application building and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::{extract::DefaultBodyLimit, Router};
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower_http::compression::CompressionLayer;

use crate::config::{Settings, StorageBackend};
use crate::domain::{CarStore, CustomerStore};
use crate::infrastructure::database;
use crate::infrastructure::memory::{InMemoryCarStore, InMemoryCustomerStore};
use crate::infrastructure::repositories::{PgCarStore, PgCustomerStore};
use crate::presentation::http::{handlers, routes};
use crate::presentation::middleware::{cors, logging, recover};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub cars: Arc<dyn CarStore>,
    pub customers: Arc<dyn CustomerStore>,
    /// Present only for the PostgreSQL backend, used by readiness checks
    pub db: Option<PgPool>,
    pub settings: Arc<Settings>,
}

impl AppState {
    /// State backed by PostgreSQL stores sharing one pool.
    pub fn postgres(pool: PgPool, settings: Settings) -> Self {
        Self {
            cars: Arc::new(PgCarStore::new(pool.clone())),
            customers: Arc::new(PgCustomerStore::new(pool.clone())),
            db: Some(pool),
            settings: Arc::new(settings),
        }
    }

    /// State backed by fresh, empty in-memory stores.
    pub fn in_memory(settings: Settings) -> Self {
        Self {
            cars: Arc::new(InMemoryCarStore::new()),
            customers: Arc::new(InMemoryCustomerStore::new()),
            db: None,
            settings: Arc::new(settings),
        }
    }
}

/// Build the full router with middleware, as served in production.
pub fn build_router(state: AppState) -> Router {
    let settings = state.settings.clone();

    routes::create_router(state)
        .layer(recover::create_catch_panic_layer())
        .layer(DefaultBodyLimit::max(settings.http.body_limit_bytes))
        .layer(CompressionLayer::new())
        .layer(logging::create_trace_layer())
        .layer(cors::create_cors_layer(&settings.cors))
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        handlers::health::init_server_start();

        let state = match settings.storage.backend {
            StorageBackend::Postgres => {
                let pool = database::create_pool(&settings.database).await?;
                tracing::info!("Database connection pool created");

                if settings.database.run_migrations {
                    database::run_migrations(&pool).await?;
                    tracing::info!("Database migrations applied");
                }

                AppState::postgres(pool, settings.clone())
            }
            StorageBackend::Memory => {
                tracing::warn!("Using in-memory storage, data is lost on restart");
                AppState::in_memory(settings.clone())
            }
        };

        let router = build_router(state);

        // Bind to address
        let addr: SocketAddr = settings.server_addr().parse()?;
        let listener = TcpListener::bind(addr).await?;
        tracing::info!("Listening on {}", listener.local_addr()?);

        Ok(Self { listener, router })
    }

    /// Run the server until stopped
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        tracing::info!("Server stopped");
        Ok(())
    }
}

/// Resolve on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
