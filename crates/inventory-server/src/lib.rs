//! Ядро сервиса реестра серверов.

pub mod api;
pub mod config;
pub mod error;
pub mod services;


use api::AppState;
use config::ServerConfig;
use inventory_migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};
use tokio::sync::watch;
use tracing::info;

/// Запустить сервис реестра серверов.
pub async fn run(config: ServerConfig) -> anyhow::Result<()> {
    let config = config.validated()?;

    // 1. Подключение к БД
    info!("Подключение к базе данных: {}", config.db_url);
    let db: DatabaseConnection = Database::connect(&config.db_url).await?;

    // 2. Автоматические миграции
    info!("Выполнение миграций...");
    Migrator::up(&db, None).await?;

    // 3. Маршрутизатор
    let state = AppState {
        db,
        defaults: config.defaults.clone(),
    };
    let app = api::build_router(state);

    // 4. Graceful shutdown
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.ok();
        info!("Получен сигнал завершения, останавливаю сервер...");
        let _ = shutdown_tx.send(true);
    });

    // 5. Запуск
    serve(&config, app, shutdown_rx).await?;

    info!("Сервис реестра остановлен");
    Ok(())
}

/// HTTP-сервер до получения сигнала завершения.
async fn serve(
    config: &ServerConfig,
    app: axum::Router,
    mut shutdown_rx: watch::Receiver<bool>,
) -> anyhow::Result<()> {
    let addr = config.listen_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Сервис реестра слушает {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            while !*shutdown_rx.borrow_and_update() {
                if shutdown_rx.changed().await.is_err() {
                    break;
                }
            }
        })
        .await?;
    Ok(())
}
