/// Postbox Server - users and messages over HTTP
use clap::{Parser, Subcommand};
use postbox_core::{types::NewUser, Store};
use postbox_server::{api, config::ServerConfig, services::PasswordService, state::AppState};
use postbox_storage::SqliteStore;
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "postbox-server")]
#[command(about = "Postbox users and messages API", long_about = None)]
struct Cli {
    /// Configuration file path (defaults to ./config.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Register a new user
    AddUser {
        /// Username
        #[arg(short, long)]
        username: String,
        /// Email address
        #[arg(short, long)]
        email: String,
        /// Password
        #[arg(short, long)]
        password: String,
        /// Role tag
        #[arg(short, long, default_value = "user")]
        role: String,
    },
    /// List all users
    ListUsers,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "postbox_server=info,postbox_storage=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = ServerConfig::load_from(cli.config.as_deref())?;
    config.validate()?;

    match cli.command {
        Commands::Serve => {
            serve(config).await?;
        }
        Commands::AddUser {
            username,
            email,
            password,
            role,
        } => {
            add_user(config, username, email, &password, role).await?;
        }
        Commands::ListUsers => {
            list_users(config).await?;
        }
    }

    Ok(())
}

async fn open_store(config: &ServerConfig) -> anyhow::Result<SqliteStore> {
    let pool = postbox_storage::create_pool(&config.storage.database_url).await?;
    postbox_storage::init_schema(&pool).await?;
    Ok(SqliteStore::new(pool))
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    tracing::info!("Starting Postbox Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    let store: Arc<dyn Store> = Arc::new(open_store(&config).await?);
    tracing::info!("Database connected");

    let passwords = PasswordService::new(config.auth.bcrypt_cost);
    tracing::info!("Password hashing cost: {}", passwords.cost());

    let app_state = AppState::new(store, passwords);

    let app = api::router(app_state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive());

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn add_user(
    config: ServerConfig,
    username: String,
    email: String,
    password: &str,
    role: String,
) -> anyhow::Result<()> {
    let store = open_store(&config).await?;
    let passwords = PasswordService::new(config.auth.bcrypt_cost);

    let password_hash = passwords.hash(password).await?;
    let id = store
        .create_user(NewUser {
            username: username.clone(),
            email,
            password_hash,
            role,
        })
        .await?;

    tracing::info!("Created user {} with id {}", username, id);
    println!("{}", id);

    Ok(())
}

async fn list_users(config: ServerConfig) -> anyhow::Result<()> {
    let store = open_store(&config).await?;
    let users = store.list_users().await?;

    println!("Users:");
    for user in users {
        println!("  {} - {} <{}> [{}]", user.id, user.username, user.email, user.role);
    }

    Ok(())
}
