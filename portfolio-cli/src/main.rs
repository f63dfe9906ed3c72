mod config;
mod logging;
mod store;

use crate::config::CliConfig;
use crate::logging::init_logging;
use crate::store::JsonFileStore;
use clap::{Parser, Subcommand};
use portfolio_board::render::{date_label, newest_first};
use portfolio_board::storage::encode;
use portfolio_board::{BoardController, QuestionId};
use std::path::PathBuf;
use tracing::info;

/// Maintains an exported Q&A board file.
#[derive(Parser, Debug)]
struct Cli {
    /// Board file; defaults to $BOARD_FILE or ./board.json.
    #[clap(short, long)]
    file: Option<PathBuf>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List questions, newest first.
    List {
        #[clap(long)]
        limit: Option<usize>,
    },
    /// Show one question with its answers.
    Show { id: u64 },
    Ask {
        #[clap(long)]
        author: String,
        #[clap(long)]
        title: String,
        #[clap(long)]
        content: String,
    },
    Answer {
        question_id: u64,
        #[clap(long)]
        author: String,
        #[clap(long)]
        content: String,
    },
    /// Print the board markup as the site renders it.
    Render,
    /// Print the raw stored value, ready to paste into browser storage.
    Export,
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let args = Cli::parse();
    let config = CliConfig::from_env();
    let path = args.file.unwrap_or(config.board_file);

    let mut board = BoardController::new(JsonFileStore::new(path));
    info!(path = %board.store().path().display(), "board opened");

    match args.command {
        Command::List { limit } => {
            let questions = board.questions();
            if questions.is_empty() {
                println!("No questions yet.");
            }
            let shown = limit.unwrap_or(usize::MAX);
            for question in newest_first(&questions).into_iter().take(shown) {
                println!(
                    "- [{}] {} (by {}, {}, {} answers)",
                    question.id,
                    question.title,
                    question.author,
                    date_label(&question.date),
                    question.answers.len()
                );
            }
        }
        Command::Show { id } => {
            let question = board
                .questions()
                .into_iter()
                .find(|q| q.id == QuestionId(id))
                .ok_or_else(|| anyhow::anyhow!("question {} not found", id))?;
            println!("{} (by {}, {})", question.title, question.author, date_label(&question.date));
            println!();
            println!("{}", question.content);
            for answer in &question.answers {
                println!();
                println!("  > {} ({})", answer.author, date_label(&answer.date));
                for line in answer.content.lines() {
                    println!("    {}", line);
                }
            }
        }
        Command::Ask {
            author,
            title,
            content,
        } => {
            let question = board.create_question(&author, &title, &content)?;
            println!("Question posted! ID: {}", question.id);
        }
        Command::Answer {
            question_id,
            author,
            content,
        } => {
            let answer = board.submit_answer(QuestionId(question_id), &author, &content)?;
            println!("Answer posted! ID: {}", answer.id);
        }
        Command::Render => {
            print!("{}", board.view().to_html());
        }
        Command::Export => {
            println!("{}", encode(&board.questions())?);
        }
    }

    Ok(())
}
