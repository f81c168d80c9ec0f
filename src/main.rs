use anyhow::Result;
use article_desk::application::{
    notifications::NotificationDispatcher,
    ports::{
        archive::BundleArchiver, notification::Mailer, permission::PermissionGate,
        security::TokenManager, storage::UploadStore, time::Clock,
    },
    services::{ApplicationServices, ServiceDependencies},
};
use article_desk::config::AppConfig;
use article_desk::domain::{
    article::{ArticleReadRepository, ArticleWriteRepository},
    files::FileRegistry,
    user::DepartmentDirectory,
};
use article_desk::infrastructure::{
    database,
    files::InMemoryFileRegistry,
    notifications::{LogMailer, NotificationWorker, SmtpMailer, notification_channel},
    repositories::{
        PostgresArticleReadRepository, PostgresArticleWriteRepository,
        PostgresDepartmentDirectory, PostgresPermissionGate,
    },
    security::token::BiscuitTokenManager,
    storage::{LocalUploadStore, ZipBundleArchiver},
    time::SystemClock,
};
use article_desk::presentation::http::{routes::build_router_with_options, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let article_write_repo: Arc<dyn ArticleWriteRepository> =
        Arc::new(PostgresArticleWriteRepository::new(pool.clone()));
    let article_read_repo: Arc<dyn ArticleReadRepository> =
        Arc::new(PostgresArticleReadRepository::new(pool.clone()));
    let directory: Arc<dyn DepartmentDirectory> =
        Arc::new(PostgresDepartmentDirectory::new(pool.clone()));
    let permission_gate: Arc<dyn PermissionGate> = Arc::new(PostgresPermissionGate::new(pool));

    let file_registry: Arc<dyn FileRegistry> = Arc::new(InMemoryFileRegistry::new());
    let upload_store: Arc<dyn UploadStore> = Arc::new(LocalUploadStore::new(
        config.upload_dir().clone(),
        config.export_scratch_dir().clone(),
    ));
    let archiver: Arc<dyn BundleArchiver> = Arc::new(ZipBundleArchiver);

    let mailer: Arc<dyn Mailer> = match config.smtp() {
        Some(smtp) => {
            tracing::info!(host = %smtp.host, port = smtp.port, "smtp delivery enabled");
            Arc::new(SmtpMailer::new(smtp)?)
        }
        None => {
            tracing::warn!("SMTP_HOST not set; notification emails will only be logged");
            Arc::new(LogMailer)
        }
    };
    let dispatcher = Arc::new(NotificationDispatcher::new(directory, mailer));
    let (queue, receiver) = notification_channel(config.notification_queue_capacity());
    let worker = NotificationWorker::new(dispatcher, config.retry_policy()).spawn(receiver);

    let token_manager: Arc<dyn TokenManager> = Arc::new(BiscuitTokenManager::new(
        config.biscuit_private_key(),
        config.token_ttl(),
    )?);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let services = Arc::new(ApplicationServices::new(ServiceDependencies {
        article_write_repo,
        article_read_repo,
        file_registry,
        upload_store,
        archiver,
        permission_gate,
        permissions: config.permissions().clone(),
        notifications: Arc::new(queue),
        token_manager,
        clock,
    }));

    let state = HttpState::new(services)
        .with_error_envelope(config.error_envelope())
        .with_max_upload_bytes(config.max_upload_bytes());

    let app = build_router_with_options(state, config.allowed_origins(), config.rate_limit());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    // The router held the last queue sender; the worker drains what is left.
    if let Err(err) = worker.await {
        tracing::warn!(error = %err, "notification worker ended abnormally");
    }

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
