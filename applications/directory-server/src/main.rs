/// User Directory Server - CRUD service for user records
use clap::{Parser, Subcommand};
use directory_core::{UserDraft, UserFilter, UserStore};
use directory_server::{api, config::ServerConfig, state::AppState};
use directory_storage::SqliteUserStore;
use std::{path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "directory-server")]
#[command(about = "User directory REST service", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "USERDIR_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Create a new user
    AddUser {
        /// Unique user name
        #[arg(short, long)]
        name: String,
        /// Unique email address
        #[arg(short, long)]
        email: String,
    },
    /// List users
    ListUsers {
        /// Only users whose name contains this text
        #[arg(long)]
        name: Option<String>,
        /// Only users whose email contains this text
        #[arg(long)]
        email: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "directory_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = ServerConfig::load(cli.config.as_deref())?;
    config.validate()?;

    match cli.command {
        Commands::Serve => {
            serve(&config).await?;
        }
        Commands::AddUser { name, email } => {
            add_user(&config, name, email).await?;
        }
        Commands::ListUsers { name, email } => {
            list_users(&config, UserFilter::new(name, email)).await?;
        }
    }

    Ok(())
}

async fn open_store(config: &ServerConfig) -> anyhow::Result<SqliteUserStore> {
    let store = SqliteUserStore::open(&config.storage.database_url).await?;
    tracing::info!("Database ready at {}", config.storage.database_url);
    Ok(store)
}

async fn serve(config: &ServerConfig) -> anyhow::Result<()> {
    tracing::info!("Starting User Directory Server");

    let store = open_store(config).await?;
    let app_state = AppState::new(Arc::new(store));
    let app = api::router(app_state);

    let addr = config.socket_addr()?;
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn add_user(config: &ServerConfig, name: String, email: String) -> anyhow::Result<()> {
    let store = open_store(config).await?;

    let new_user = UserDraft::new(name, email).validate()?;
    let user = store.create_user(new_user).await?;

    println!("Created user {} - {}", user.id, user);
    Ok(())
}

async fn list_users(config: &ServerConfig, filter: UserFilter) -> anyhow::Result<()> {
    let store = open_store(config).await?;
    let users = store.list_users(&filter).await?;

    println!("Users:");
    for user in users {
        println!("  {} - {}", user.id, user);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn parse_add_user() {
        let cli = Cli::try_parse_from([
            "directory-server",
            "add-user",
            "--name",
            "Alice",
            "--email",
            "alice@x.com",
        ])
        .unwrap();

        match cli.command {
            Commands::AddUser { name, email } => {
                assert_eq!(name, "Alice");
                assert_eq!(email, "alice@x.com");
            }
            _ => panic!("expected add-user"),
        }
    }

    #[test]
    fn parse_add_user_short_flags() {
        let cli =
            Cli::try_parse_from(["directory-server", "add-user", "-n", "Bob", "-e", "bob@x.com"])
                .unwrap();

        assert!(matches!(
            cli.command,
            Commands::AddUser { ref name, ref email } if name == "Bob" && email == "bob@x.com"
        ));
    }

    #[test]
    fn add_user_requires_email() {
        let err = Cli::try_parse_from(["directory-server", "add-user", "--name", "Alice"])
            .err()
            .unwrap();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn parse_list_users_filters() {
        let cli = Cli::try_parse_from(["directory-server", "list-users", "--name", "Ali"]).unwrap();

        match cli.command {
            Commands::ListUsers { name, email } => {
                assert_eq!(name.as_deref(), Some("Ali"));
                assert_eq!(email, None);
            }
            _ => panic!("expected list-users"),
        }
    }

    #[test]
    fn config_flag_is_global() {
        let cli =
            Cli::try_parse_from(["directory-server", "serve", "--config", "custom.toml"]).unwrap();

        assert!(matches!(cli.command, Commands::Serve));
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
    }

    #[test]
    fn unknown_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["directory-server", "remove-user"]).is_err());
    }

    #[tokio::test]
    async fn add_user_then_list_users() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut config = ServerConfig::default();
        config.storage.database_url =
            format!("sqlite://{}", temp_dir.path().join("cli.db").display());

        add_user(&config, "Alice".to_string(), "alice@x.com".to_string())
            .await
            .unwrap();
        list_users(&config, UserFilter::default()).await.unwrap();

        let store = open_store(&config).await.unwrap();
        let users = store.list_users(&UserFilter::default()).await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].name, "Alice");

        // Blank names are refused before reaching the store
        assert!(add_user(&config, " ".to_string(), "b@x.com".to_string())
            .await
            .is_err());
        assert!(add_user(&config, "Bob".to_string(), "alice@x.com".to_string())
            .await
            .is_err());
    }
}
