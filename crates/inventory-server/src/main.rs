//! Точка входа сервиса реестра серверов.

use clap::{ArgAction, Parser};
use inventory_server::config::ServerConfig;
use inventory_server::services::defaults::{
    FieldDefaults, DEFAULT_DESCRIPTION, DEFAULT_IP_ADDRESS,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "inventory-server",
    about = "REST-сервис учёта серверов: имя, IP, описание, активность"
)]
struct Cli {
    /// Адрес для прослушивания (host:port)
    #[arg(long, default_value = "0.0.0.0:8000", env = "LISTEN_ADDR")]
    listen: String,

    /// URL базы данных
    #[arg(
        long,
        default_value = "sqlite:./inventory.db?mode=rwc",
        env = "DATABASE_URL"
    )]
    db_url: String,

    /// IP-адрес по умолчанию для новых серверов
    #[arg(long, default_value = DEFAULT_IP_ADDRESS, env = "DEFAULT_IP_ADDRESS")]
    default_ip_address: String,

    /// Описание по умолчанию
    #[arg(long, default_value = DEFAULT_DESCRIPTION, env = "DEFAULT_DESCRIPTION")]
    default_description: String,

    /// Флаг активности по умолчанию (true/false)
    #[arg(long, default_value_t = false, action = ArgAction::Set, env = "DEFAULT_ACTIVE")]
    default_active: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Инициализация логгера; без RUST_LOG пишем info
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = ServerConfig {
        listen: cli.listen,
        db_url: cli.db_url,
        defaults: FieldDefaults {
            ip_address: cli.default_ip_address,
            description: cli.default_description,
            server_is_active: cli.default_active,
        },
    };

    inventory_server::run(config).await
}
