use tracing::debug;

/// Durable key-value keys for the last used board and pipeline. An
/// empty stored string means "cleared".
pub const STORAGE_BOARD_KEY: &str = "currentBoardId";
pub const STORAGE_PIPELINE_KEY: &str = "currentPipelineId";

/// The durable key-value collaborator (browser local storage in the
/// frontend, a map in tests). Writes that fail are swallowed by the
/// implementation; the reconciler never depends on a write landing.
pub trait SelectionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// The board/pipeline pair remembered across sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersistedSelection {
    pub board_id: String,
    pub pipeline_id: String,
}

impl PersistedSelection {
    pub fn new(board_id: impl Into<String>, pipeline_id: impl Into<String>) -> Self {
        Self {
            board_id: board_id.into(),
            pipeline_id: pipeline_id.into(),
        }
    }

    /// The cleared state: empty strings under both keys.
    pub fn cleared() -> Self {
        Self::default()
    }

    pub fn load(store: &dyn SelectionStore) -> Self {
        Self {
            board_id: store.get(STORAGE_BOARD_KEY).unwrap_or_default(),
            pipeline_id: store.get(STORAGE_PIPELINE_KEY).unwrap_or_default(),
        }
    }

    pub fn save(&self, store: &dyn SelectionStore) {
        store.set(STORAGE_BOARD_KEY, &self.board_id);
        store.set(STORAGE_PIPELINE_KEY, &self.pipeline_id);
        debug!(
            board_id = %self.board_id,
            pipeline_id = %self.pipeline_id,
            "persisted selection"
        );
    }

    pub fn has_board(&self) -> bool {
        !self.board_id.is_empty()
    }
}
