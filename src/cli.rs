use std::sync::Arc;

use anyhow::{bail, Context, Result};
use tokio::sync::mpsc;

use crate::app::{Action, App, Panel, Phase};
use crate::config::AppConfig;
use crate::providers::trello::TrelloClient;
use crate::ui::board_panel::board_lines;

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Dashboard,
    Snapshot { board: Option<String> },
    Help,
}

/// Parse the arguments after the program name.
///
/// Supported forms:
///   orderstatus
///   orderstatus snapshot [board name or id]
///   orderstatus help | -h | --help
pub fn parse_args(args: &[String]) -> Result<Command> {
    match args.first().map(String::as_str) {
        None => Ok(Command::Dashboard),
        Some("help" | "-h" | "--help") => Ok(Command::Help),
        Some("snapshot") => {
            let board = args[1..].join(" ");
            Ok(Command::Snapshot {
                board: (!board.is_empty()).then_some(board),
            })
        }
        Some(other) => bail!("Unknown command '{other}'. Run `orderstatus help` for usage."),
    }
}

/// Run one fetch cycle for a board and print it to stdout.
pub async fn handle_snapshot(config: &AppConfig, board: Option<&str>) -> Result<()> {
    for line in snapshot_lines(config, board).await? {
        println!("{line}");
    }
    Ok(())
}

/// Run one fetch cycle for a board and render it as plain text lines.
pub async fn snapshot_lines(config: &AppConfig, board: Option<&str>) -> Result<Vec<String>> {
    let trello = config.require_trello()?;
    if config.boards.is_empty() {
        bail!("No boards configured. Add a [[boards]] entry or set TRELLO_BOARD_ID");
    }

    let index = match board {
        Some(needle) => config
            .board_index(needle)
            .with_context(|| format!("No configured board matches '{needle}'"))?,
        None => 0,
    };
    let board = &config.boards[index];

    let (tx, mut rx) = mpsc::unbounded_channel();
    let source = Arc::new(TrelloClient::from_config(trello));
    let mut app = App::new(config.boards.clone(), source, tx);
    app.activate(Panel::Board(index));

    while let Some(action) = rx.recv().await {
        let done = matches!(
            action,
            Action::CycleSettled { .. } | Action::ListsFailed { .. }
        );
        app.update(action);
        if done {
            break;
        }
    }

    let view = app
        .view(&board.id)
        .context("Board view missing after fetch")?;
    if let Phase::Error(message) = &view.phase {
        bail!("{message}");
    }

    let mut lines = vec![
        format!("{} · {} ordrar", board.name, view.card_count()),
        String::new(),
    ];
    lines.extend(
        board_lines(view, 0)
            .into_iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect::<String>()),
    );
    Ok(lines)
}

pub fn print_help() {
    println!("orderstatus — terminal dashboard for order status on Trello boards\n");
    println!("USAGE:");
    println!("  orderstatus                    Launch the TUI dashboard");
    println!("  orderstatus snapshot [board]   Fetch one board and print it");
    println!("  orderstatus help               Show this help");
    println!();
    println!("CONFIG:");
    println!("  ~/.orderstatus/config.toml with [trello] api_key/token and [[boards]] id/name");
    println!("  TRELLO_API_KEY, TRELLO_TOKEN, TRELLO_BOARD_ID, TRELLO_BASE_URL override the file");
    println!("  RUST_LOG controls the log level (log file: ~/.orderstatus/orderstatus.log)");
}
