#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod board;
mod engine;
mod error;
mod generator;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBoardConfig")]
pub struct BoardConfig {
    pub rows: Coord,
    pub cols: Coord,
    /// Independent chance of each cell starting lit.
    pub lit_probability: f64,
}

/// Deserialized form of [`BoardConfig`], missing fields take the defaults.
#[derive(Deserialize)]
#[serde(default)]
struct RawBoardConfig {
    rows: Coord,
    cols: Coord,
    lit_probability: f64,
}

impl Default for RawBoardConfig {
    fn default() -> Self {
        let BoardConfig {
            rows,
            cols,
            lit_probability,
        } = BoardConfig::DEFAULT;
        Self {
            rows,
            cols,
            lit_probability,
        }
    }
}

impl TryFrom<RawBoardConfig> for BoardConfig {
    type Error = GameError;

    fn try_from(raw: RawBoardConfig) -> Result<Self> {
        Self::new(raw.rows, raw.cols, raw.lit_probability)
    }
}

impl BoardConfig {
    pub const DEFAULT: Self = Self::new_unchecked(5, 5, 0.25);

    pub const fn new_unchecked(rows: Coord, cols: Coord, lit_probability: f64) -> Self {
        Self {
            rows,
            cols,
            lit_probability,
        }
    }

    pub fn new(rows: Coord, cols: Coord, lit_probability: f64) -> Result<Self> {
        Self::new_unchecked(rows, cols, lit_probability).validate()
    }

    /// Rejects empty boards and probabilities outside `[0, 1]`, NaN included.
    pub fn validate(self) -> Result<Self> {
        if self.rows == 0 || self.cols == 0 {
            return Err(GameError::InvalidDimensions);
        }
        if !(0.0..=1.0).contains(&self.lit_probability) {
            return Err(GameError::InvalidProbability);
        }
        Ok(self)
    }

    pub const fn size(&self) -> Coord2 {
        (self.rows, self.cols)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.cols)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ToggleOutcome {
    Toggled,
    Won,
}

impl ToggleOutcome {
    pub const fn is_won(self) -> bool {
        matches!(self, Self::Won)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn default_config_is_five_by_five_quarter_lit() {
        let config = BoardConfig::default();

        assert_eq!(config.size(), (5, 5));
        assert_eq!(config.lit_probability, 0.25);
        assert_eq!(config.total_cells(), 25);
        assert_eq!(config.validate(), Ok(config));
    }

    #[test]
    fn new_rejects_empty_dimensions() {
        assert_eq!(
            BoardConfig::new(0, 5, 0.25),
            Err(GameError::InvalidDimensions)
        );
        assert_eq!(
            BoardConfig::new(5, 0, 0.25),
            Err(GameError::InvalidDimensions)
        );
    }

    #[test]
    fn new_rejects_probability_out_of_range() {
        assert_eq!(
            BoardConfig::new(5, 5, -0.1),
            Err(GameError::InvalidProbability)
        );
        assert_eq!(
            BoardConfig::new(5, 5, 1.5),
            Err(GameError::InvalidProbability)
        );
        assert_eq!(
            BoardConfig::new(5, 5, f64::NAN),
            Err(GameError::InvalidProbability)
        );
    }

    #[test]
    fn new_accepts_probability_bounds() {
        assert!(BoardConfig::new(1, 1, 0.0).is_ok());
        assert!(BoardConfig::new(1, 1, 1.0).is_ok());
    }

    #[test]
    fn partial_config_fills_in_defaults() {
        let config: BoardConfig = serde_json::from_str(r#"{"rows": 3}"#).unwrap();

        assert_eq!(config, BoardConfig::new_unchecked(3, 5, 0.25));
    }

    #[test]
    fn deserializing_rejects_invalid_config() {
        let empty = serde_json::from_str::<BoardConfig>(r#"{"rows": 0}"#).unwrap_err();
        assert!(empty.to_string().contains("at least one row"), "{empty}");

        let chance = serde_json::from_str::<BoardConfig>(r#"{"lit_probability": 7.0}"#);
        assert!(chance.is_err());

        let both = r#"{"rows": 0, "lit_probability": 7.0}"#;
        assert!(serde_json::from_str::<BoardConfig>(both).is_err());
    }

    #[test]
    fn total_cells_does_not_overflow() {
        let config = BoardConfig::new(Coord::MAX, Coord::MAX, 0.5).unwrap();

        assert_eq!(config.total_cells(), 255 * 255);
    }
}
