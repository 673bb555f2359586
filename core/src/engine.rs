use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum EngineState {
    Playing,
    Won,
}

impl EngineState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won)
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::Playing
    }
}

/// One game session: a board plus the `Playing`/`Won` state machine around it.
///
/// `Won` is terminal, once reached every further move is rejected.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "SavedEngine")]
pub struct PlayEngine {
    board: Board,
    state: EngineState,
    move_count: u32,
}

/// Deserialized form of [`PlayEngine`]. The state is derived from the board again.
#[derive(Deserialize)]
struct SavedEngine {
    board: Board,
    move_count: u32,
}

impl From<SavedEngine> for PlayEngine {
    fn from(SavedEngine { board, move_count }: SavedEngine) -> Self {
        Self {
            move_count,
            ..Self::new(board)
        }
    }
}

impl PlayEngine {
    /// A board that is already clear starts the session as won.
    pub fn new(board: Board) -> Self {
        let state = if board.has_won() {
            EngineState::Won
        } else {
            EngineState::Playing
        };
        log::debug!(
            "New session on {:?} board with {} lit, state: {:?}",
            board.size(),
            board.lit_count(),
            state
        );
        Self {
            board,
            state,
            move_count: 0,
        }
    }

    pub fn generate(generator: impl BoardGenerator, config: BoardConfig) -> Self {
        Self::new(generator.generate(config))
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> Coord2 {
        self.board.size()
    }

    pub fn is_lit(&self, coords: Coord2) -> bool {
        self.board.is_lit(coords)
    }

    pub fn lit_count(&self) -> CellCount {
        self.board.lit_count()
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.board.contains(coords) {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn toggle(&mut self, coords: Coord2) -> Result<ToggleOutcome> {
        self.check_playing()?;
        let coords = self.validate_coords(coords)?;

        self.board.toggle_around(coords);
        self.move_count = self.move_count.saturating_add(1);
        log::trace!("toggled {:?}, {} lit", coords, self.board.lit_count());

        if self.board.has_won() {
            self.state = EngineState::Won;
            log::debug!("Board cleared after {} moves", self.move_count);
            Ok(ToggleOutcome::Won)
        } else {
            Ok(ToggleOutcome::Toggled)
        }
    }

    fn check_playing(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}
