use std::rc::Rc;

use clap::{Args, Parser, Subcommand};
use forum_api::config::{API_BASE_URL_ENV, DEFAULT_API_BASE_URL};
use forum_api::posts::DEFAULT_PAGE_SIZE;
use forum_api::types::{LoginRequest, PostDraft, RegisterRequest};
use forum_api::{ApiClient, ApiError, AuthApi, ClientConfig, ConfigError, PostApi, Session};
use serde::Serialize;
use serde_json::json;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::store::{DEFAULT_TOKEN_FILE, FileTokenStore, TerminalNavigator};
use crate::transport::ReqwestTransport;

mod store;
mod transport;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{0}")]
    Api(#[from] ApiError),
    #[error("login rejected: {0}")]
    LoginRejected(String),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "forum-cli", about = "Forum API command-line client")]
struct Cli {
    #[arg(long, env = API_BASE_URL_ENV, default_value = DEFAULT_API_BASE_URL)]
    base_url: String,

    #[arg(long, env = "FORUM_TOKEN_FILE", default_value = DEFAULT_TOKEN_FILE)]
    token_file: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    Logout,
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        nickname: String,
        #[arg(long)]
        password: String,
    },
    Whoami,
    Post(PostCommand),
}

#[derive(Args, Debug)]
struct PostCommand {
    #[command(subcommand)]
    command: PostSubcommand,
}

#[derive(Subcommand, Debug)]
enum PostSubcommand {
    List {
        #[arg(long, default_value_t = 0)]
        page: u32,
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        size: u32,
    },
    Get {
        id: i64,
    },
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        body: String,
    },
    Update {
        id: i64,
        #[arg(long)]
        title: String,
        #[arg(long)]
        body: String,
    },
    Delete {
        id: i64,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), CliError> {
    init_tracing();
    let cli = Cli::parse();

    let config = ClientConfig::from_value(Some(cli.base_url.as_str()))?;
    let tokens = Rc::new(FileTokenStore::new(&cli.token_file));
    let client = ApiClient::new(Rc::new(ReqwestTransport::new(config)?), tokens, Rc::new(TerminalNavigator));

    match cli.command {
        Command::Login { username, password } => run_login(&client, LoginRequest { username, password }).await,
        Command::Logout => {
            Session::restore(client.token_store()).logout(client.token_store());
            print_json(&json!({ "success": true }))
        }
        Command::Register { username, email, nickname, password } => {
            let request = RegisterRequest { username, email, nickname, password };
            print_json(&AuthApi::new(&client).register(&request).await?)
        }
        Command::Whoami => {
            let session = Session::restore(client.token_store());
            print_json(&json!({
                "authenticated": session.is_authenticated(),
                "username": session.username,
            }))
        }
        Command::Post(post) => run_post(&client, post).await,
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}

async fn run_login(client: &ApiClient, request: LoginRequest) -> Result<(), CliError> {
    let envelope = AuthApi::new(client).login(&request).await?;
    if !envelope.success {
        return Err(CliError::LoginRejected(envelope.message));
    }
    let message = envelope.message.clone();
    let credentials = envelope
        .into_data()
        .ok_or_else(|| CliError::LoginRejected("response carried no tokens".to_owned()))?;

    let mut session = Session::default();
    session.set_credentials(client.token_store(), credentials);
    tracing::info!(username = ?session.username, "logged in");
    print_json(&json!({
        "success": true,
        "message": message,
        "username": session.username,
    }))
}

async fn run_post(client: &ApiClient, post: PostCommand) -> Result<(), CliError> {
    let api = PostApi::new(client);
    match post.command {
        PostSubcommand::List { page, size } => print_json(&api.list(page, size).await?),
        PostSubcommand::Get { id } => print_json(&api.get(id).await?),
        PostSubcommand::Create { title, body } => print_json(&api.create(&PostDraft { title, body }).await?),
        PostSubcommand::Update { id, title, body } => {
            print_json(&api.update(id, &PostDraft { title, body }).await?)
        }
        PostSubcommand::Delete { id } => print_json(&api.delete(id).await?),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
