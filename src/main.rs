//! qbank-admin · command-line front end for the question bank backend.
//!
//! Important env variables:
//!   QBANK_API_BASE_URL : API base (default "https://capstone-1-y2mc.onrender.com/api")
//!   QBANK_SESSION_DIR  : where the durable session record lives
//!   QBANK_CONFIG_PATH  : optional TOML overriding the two above
//!   QBANK_PASSWORD     : password for `login` when --password is omitted
//!   LOG_LEVEL          : tracing filter, e.g. "debug" or full directives
//!   LOG_FORMAT         : "pretty" (default) or "json"

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::info;

use qbank_admin::forms::{CreateForm, Dashboard, DifficultyFilter, Phase, QuestionDraft};
use qbank_admin::{telemetry, ClientConfig, FileStorage, Notice, Question, QuestionApi, SessionStore};

#[derive(Parser)]
#[command(name = "qbank-admin", version, about = "Manage the coding-question catalog")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Authenticate and store the session
    Login {
        user_name: String,
        #[arg(long, env = "QBANK_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget the stored session
    Logout,
    /// Show the current role
    Whoami,
    /// List questions, optionally filtered
    List {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, default_value = "all")]
        difficulty: DifficultyFilter,
    },
    /// Count questions per difficulty
    Stats,
    /// Print one question as JSON
    Show { question_id: i64 },
    /// Create a question from a JSON draft
    Create { file: PathBuf },
    /// Update a listed question, optionally replacing its fields from a JSON draft
    Update {
        question_id: i64,
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    telemetry::init_tracing();
    let cli = Cli::parse();

    let cfg = ClientConfig::from_env();
    info!(target: "qbank_admin", base_url = %cfg.base_url, session_dir = %cfg.session_dir.display(), "Client configured");
    let api = QuestionApi::from_config(&cfg)?;
    let session = SessionStore::open(api, Arc::new(FileStorage::from_config(&cfg)));

    let needs_session = !matches!(cli.command, Command::Login { .. } | Command::Logout | Command::Whoami);
    if needs_session && !session.is_logged_in().await {
        eprintln!("Not logged in. Run `qbank-admin login <user>` first.");
        return Ok(ExitCode::FAILURE);
    }

    let notice = match cli.command {
        Command::Login { user_name, password } => Some(Notice::login(session.login(&user_name, &password).await)),
        Command::Logout => {
            session.logout().await;
            Some(Notice::logged_out())
        }
        Command::Whoami => {
            match session.role().await {
                Some(role) => println!("Welcome, {}", role),
                None => println!("Not logged in"),
            }
            None
        }
        Command::List { search, difficulty } => {
            let mut board = Dashboard::new();
            let notice = board.refresh(&session).await;
            board.set_search(search);
            board.set_filter(difficulty);
            for s in board.filtered() {
                println!("{:>5}  {:<6}  {}  [{}]", s.question_id, s.question_difficulty.as_str(), s.question_name, s.topics.join(", "));
            }
            if notice.is_none() && board.filtered().is_empty() {
                println!("No questions found matching your criteria.");
            }
            notice
        }
        Command::Stats => {
            let mut board = Dashboard::new();
            let notice = board.refresh(&session).await;
            let st = board.stats();
            println!("Total: {}  Easy: {}  Medium: {}  Hard: {}", st.total, st.easy, st.medium, st.hard);
            notice
        }
        Command::Show { question_id } => match session.token().await {
            Some(token) => match session.api().fetch_by_id(&token, question_id).await {
                Ok(q) => {
                    println!("{}", serde_json::to_string_pretty(&q)?);
                    None
                }
                Err(e) => Some(Notice::error(e.to_string())),
            },
            None => None,
        },
        Command::Create { file } => {
            let mut form = CreateForm::with_draft(read_draft(&file)?);
            let notice = form.submit(&session).await;
            if let Some(n) = &notice {
                reload_after_write(&mut Dashboard::new(), &session, n).await;
            }
            notice
        }
        Command::Update { question_id, file } => update(&session, question_id, file.as_deref()).await?,
    };

    match notice {
        Some(n) if !n.is_success() => {
            eprintln!("{}", n);
            Ok(ExitCode::FAILURE)
        }
        Some(n) => {
            println!("{}", n);
            Ok(ExitCode::SUCCESS)
        }
        None => Ok(ExitCode::SUCCESS),
    }
}

async fn update(
    session: &SessionStore,
    question_id: i64,
    file: Option<&Path>,
) -> Result<Option<Notice>, Box<dyn std::error::Error>> {
    let mut board = Dashboard::new();
    if let Some(n) = board.refresh(session).await {
        return Ok(Some(n));
    }
    let Some(mut form) = board.select(question_id) else {
        return Ok(Some(Notice::error(format!("Question {} is not in the list", question_id))));
    };

    if let Some(n) = form.load(session).await {
        eprintln!("{}", n);
    }
    if form.phase() != Phase::Editing {
        return Ok(None);
    }
    if let Some(path) = file {
        let mut draft = read_draft(path)?;
        draft.id = draft.id.or_else(|| form.draft.id.clone());
        form.draft = draft;
    }
    let notice = form.submit(session).await;
    if let Some(n) = &notice {
        reload_after_write(&mut board, session, n).await;
    }
    Ok(notice)
}

async fn reload_after_write(board: &mut Dashboard, session: &SessionStore, write: &Notice) {
    match board.after_write(session, write).await {
        Some(failed) => eprintln!("{}", failed),
        None if write.is_success() => info!(count = board.summaries().len(), "Question list reloaded"),
        None => {}
    }
}

fn read_draft(path: &Path) -> Result<QuestionDraft, Box<dyn std::error::Error>> {
    let raw = std::fs::read_to_string(path)?;
    let question: Question = serde_json::from_str(&raw)?;
    Ok(QuestionDraft::from(question))
}
