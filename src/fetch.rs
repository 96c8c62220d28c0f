use std::sync::Arc;

use futures::future::join_all;
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::app::Action;
use crate::providers::BoardSource;

/// One fetch pass for a board.
///
/// Lists are fetched and reported first. Then every list's cards are
/// fetched concurrently and reported one by one as they resolve, so a slow
/// list never holds back the others. A failed card fetch is logged and
/// reported as an empty list. Every action carries `cycle` so the receiver
/// can drop results from a superseded pass.
pub async fn run_cycle(
    source: Arc<dyn BoardSource>,
    board_id: String,
    cycle: u64,
    tx: mpsc::UnboundedSender<Action>,
) {
    info!(board = %board_id, cycle, "fetch cycle started");

    let lists = match source.fetch_lists(&board_id).await {
        Ok(lists) => lists,
        Err(e) => {
            warn!(board = %board_id, cycle, error = %e, "list fetch failed");
            let _ = tx.send(Action::ListsFailed {
                board_id,
                cycle,
                message: e.to_string(),
            });
            return;
        }
    };

    let _ = tx.send(Action::ListsLoaded {
        board_id: board_id.clone(),
        cycle,
        lists: lists.clone(),
    });

    let fetches = lists.into_iter().map(|list| {
        let source = source.clone();
        let tx = tx.clone();
        let board_id = board_id.clone();
        async move {
            let cards = match source.fetch_cards(&list.id).await {
                Ok(cards) => cards,
                Err(e) => {
                    warn!(list = %list.name, error = %e, "card fetch failed, showing list as empty");
                    Vec::new()
                }
            };
            let _ = tx.send(Action::CardsLoaded {
                board_id,
                cycle,
                list_id: list.id,
                cards,
            });
        }
    });
    join_all(fetches).await;

    info!(board = %board_id, cycle, "fetch cycle settled");
    let _ = tx.send(Action::CycleSettled { board_id, cycle });
}
