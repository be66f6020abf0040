use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, anyhow};
use app::db_url::{DEFAULT_DB_URL, normalize_sqlite_url, prepare_sqlite_file};
use app::{AppState, router};
use clap::{Parser, Subcommand};
use services::{Clock, ExplainConfig, ExplainService, QuizLoopService};
use storage::repository::Storage;

const DEFAULT_LOG_FILTER: &str = "quiz_core=info,storage=info,services=info,app=info";

#[derive(Parser, Debug)]
#[command(version, about = "Multiple-choice quiz trainer")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the explanation endpoint.
    Serve {
        /// The address to bind to.
        #[arg(short, long, env = "QUIZ_ADDRESS", default_value = "127.0.0.1:3000")]
        address: SocketAddr,
    },
    /// Import a JSON question file into the question store.
    Import {
        file: PathBuf,

        /// SQLite database holding the question store.
        #[arg(long, env = "QUIZ_DB_URL", default_value = DEFAULT_DB_URL)]
        db: String,
    },
    /// Show what the question store currently holds.
    Status {
        #[arg(long, env = "QUIZ_DB_URL", default_value = DEFAULT_DB_URL)]
        db: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_owned());
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();
    match args.command {
        Command::Serve { address } => serve(address).await,
        Command::Import { file, db } => import(&file, &db).await,
        Command::Status { db } => status(&db).await,
    }
}

async fn serve(address: SocketAddr) -> anyhow::Result<()> {
    let config = ExplainConfig::from_env()
        .ok_or_else(|| anyhow!("QUIZ_MODEL_ENDPOINT must be set to a valid URL"))?;
    let explain = ExplainService::from_config(config)?;
    tracing::info!(model = explain.model_id(), "explanation service configured");

    let app = router(AppState {
        explain: Arc::new(explain),
    });
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .with_context(|| format!("binding {address}"))?;
    tracing::info!(%address, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}

async fn open_loop(db: &str) -> anyhow::Result<QuizLoopService> {
    let db_url = normalize_sqlite_url(db);
    prepare_sqlite_file(&db_url)?;
    let storage = Storage::sqlite(&db_url).await?;
    Ok(QuizLoopService::new(
        Clock::default_clock(),
        storage.question_store(),
    ))
}

async fn import(file: &Path, db: &str) -> anyhow::Result<()> {
    let document = tokio::fs::read_to_string(file)
        .await
        .with_context(|| format!("reading {}", file.display()))?;
    let quiz = open_loop(db).await?;
    let (_, report) = quiz.import_questions(&document).await?;

    println!(
        "imported {} question(s), skipped {}",
        report.imported, report.skipped
    );
    Ok(())
}

async fn status(db: &str) -> anyhow::Result<()> {
    let quiz = open_loop(db).await?;
    let Some(questions) = quiz.load_questions().await? else {
        println!("no questions imported");
        return Ok(());
    };

    let multi = questions.iter().filter(|q| q.is_multi_answer()).count();
    println!(
        "{} question(s) stored, {multi} multi-answer",
        questions.len()
    );
    Ok(())
}
