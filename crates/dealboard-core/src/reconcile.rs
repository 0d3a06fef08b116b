use dealboard_gui_shared::{BoardDto, PipelineDto};
use tracing::debug;

use crate::query_params::QueryParams;
use crate::selection::PersistedSelection;

/// Hard-navigation target when a URL board id resolves to nothing.
pub const DEFAULT_BOARD_ROUTE: &str = "/deal/board";

/// State of one of the board queries as the collaborator reports it.
/// `Skipped` means the skip policy suppressed the fetch this pass;
/// `Ready(None)` means the fetch completed without a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteQuery<T> {
    Skipped,
    Loading,
    Ready(Option<T>),
}

impl<T> RemoteQuery<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, RemoteQuery::Loading)
    }

    pub fn record(&self) -> Option<&T> {
        match self {
            RemoteQuery::Ready(record) => record.as_ref(),
            _ => None,
        }
    }
}

/// Skip policy: the last-used-board query only runs when the URL
/// carries no board id.
pub fn wants_last_used(params: &QueryParams) -> bool {
    url_board_id(params).is_none()
}

/// Skip policy: the board-detail query only runs for a URL board id.
pub fn wants_board_detail(params: &QueryParams) -> Option<&str> {
    url_board_id(params)
}

fn url_board_id(params: &QueryParams) -> Option<&str> {
    params.first("id").filter(|id| !id.is_empty())
}

fn url_pipeline_id(params: &QueryParams) -> Option<&str> {
    params.first("pipelineId").filter(|id| !id.is_empty())
}

#[derive(Debug)]
pub struct ResolveInput<'a> {
    pub query_params: &'a QueryParams,
    pub persisted: &'a PersistedSelection,
    pub boards: &'a RemoteQuery<Vec<BoardDto>>,
    pub last_used: &'a RemoteQuery<BoardDto>,
    pub board_detail: &'a RemoteQuery<BoardDto>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingFetch {
    Boards,
    BoardDetail,
    LastUsedBoard,
}

/// A deferred pass: push these params, render nothing, and let the
/// next resolution read the updated URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Redirect {
    ToPersisted { board_id: String, pipeline_id: String },
    ToLastUsed { board_id: String, pipeline_id: String },
}

impl Redirect {
    /// The `{id, pipelineId}` update the caller should push.
    pub fn query_params(&self) -> QueryParams {
        let (board_id, pipeline_id) = match self {
            Redirect::ToPersisted { board_id, pipeline_id }
            | Redirect::ToLastUsed { board_id, pipeline_id } => (board_id, pipeline_id),
        };
        let mut params = QueryParams::new();
        params.insert("id", board_id.clone());
        params.insert("pipelineId", pipeline_id.clone());
        params
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Decision {
    /// A fetch this pass depends on is still in flight.
    Loading(PendingFetch),
    /// Redirect and render nothing this pass.
    Defer(Redirect),
    /// URL board id did not resolve: clear the store (via the persist
    /// effect) and hard-navigate to [`DEFAULT_BOARD_ROUTE`].
    RecoverInvalidId,
    /// No board to show.
    Nothing,
    /// Render the toolbar with this board and pipeline.
    Resolved {
        board: BoardDto,
        pipeline: Option<PipelineDto>,
    },
}

/// One resolution pass. `persist` is the single write the caller must
/// apply to the durable store before acting on `decision`.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub persist: Option<PersistedSelection>,
    pub decision: Decision,
}

/// Decides where the current board and pipeline come from. Branch
/// order is load-bearing: boards-list gate, persist effect, remaining
/// loading gates, persisted redirect, last-used redirect, invalid-id
/// recovery, resolved.
#[tracing::instrument(skip_all)]
pub fn resolve(input: &ResolveInput<'_>) -> Outcome {
    if input.boards.is_loading() {
        debug!("boards list still loading");
        return Outcome {
            persist: None,
            decision: Decision::Loading(PendingFetch::Boards),
        };
    }

    let board_id = url_board_id(input.query_params);
    let pipeline_id = url_pipeline_id(input.query_params);

    // Both ids in the URL: remember them before any branch can defer,
    // even while the detail fetch is still pending or failing.
    let persist = match (board_id, pipeline_id) {
        (Some(board), Some(pipeline)) => Some(PersistedSelection::new(board, pipeline)),
        _ => None,
    };

    // A URL board id whose detail query is still `Skipped` means the
    // fetch the skip policy mandates has not been issued yet; that
    // pass waits exactly like an in-flight one.
    if input.board_detail.is_loading()
        || (board_id.is_some() && matches!(input.board_detail, RemoteQuery::Skipped))
    {
        debug!("board detail not ready");
        return Outcome {
            persist,
            decision: Decision::Loading(PendingFetch::BoardDetail),
        };
    }

    if input.last_used.is_loading() {
        debug!("last used board still loading");
        return Outcome {
            persist,
            decision: Decision::Loading(PendingFetch::LastUsedBoard),
        };
    }

    if board_id.is_none() && input.persisted.has_board() {
        debug!(
            board_id = %input.persisted.board_id,
            pipeline_id = %input.persisted.pipeline_id,
            "no board in URL; deferring to persisted selection"
        );
        return Outcome {
            persist,
            decision: Decision::Defer(Redirect::ToPersisted {
                board_id: input.persisted.board_id.clone(),
                pipeline_id: input.persisted.pipeline_id.clone(),
            }),
        };
    }

    if board_id.is_none()
        && let Some(last) = input.last_used.record()
        && let Some(first_pipeline) = last.pipelines.first()
    {
        debug!(
            board_id = %last.id,
            pipeline_id = %first_pipeline.id,
            "no board in URL; deferring to last used board"
        );
        return Outcome {
            persist,
            decision: Decision::Defer(Redirect::ToLastUsed {
                board_id: last.id.clone(),
                pipeline_id: first_pipeline.id.clone(),
            }),
        };
    }

    let detail = input.board_detail.record();

    // Recovery needs a completed fetch with no record; anything short
    // of `Ready(None)` is not evidence the id is bad.
    if board_id.is_some() && matches!(input.board_detail, RemoteQuery::Ready(None)) {
        debug!(board_id = ?board_id, "URL board id did not resolve; recovering");
        return Outcome {
            persist: Some(PersistedSelection::cleared()),
            decision: Decision::RecoverInvalidId,
        };
    }

    let Some(board) = detail else {
        debug!("no board resolvable");
        return Outcome {
            persist,
            decision: Decision::Nothing,
        };
    };

    // URL pipeline when it exists on the board, else the first one.
    let pipeline = pipeline_id
        .and_then(|id| board.pipelines.iter().find(|pipeline| pipeline.id == id))
        .or_else(|| board.pipelines.first())
        .cloned();

    debug!(
        board_id = %board.id,
        pipeline_id = pipeline.as_ref().map(|p| p.id.as_str()),
        "selection resolved"
    );
    Outcome {
        persist,
        decision: Decision::Resolved {
            board: board.clone(),
            pipeline,
        },
    }
}
