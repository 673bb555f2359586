use core::fmt;
use core::ops::Index;
use ndarray::Array2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::*;

/// Grid of lights indexed by `(row, col)`, `true` meaning lit.
///
/// The shape is fixed once the board exists; the only mutation is [`Board::toggle_around`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Array2<bool>", into = "Array2<bool>")]
pub struct Board {
    lights: Array2<bool>,
}

impl TryFrom<Array2<bool>> for Board {
    type Error = GameError;

    fn try_from(lights: Array2<bool>) -> Result<Self> {
        Self::from_lights(lights)
    }
}

impl From<Board> for Array2<bool> {
    fn from(board: Board) -> Self {
        board.lights
    }
}

impl Board {
    pub fn unlit(config: &BoardConfig) -> Self {
        Self {
            lights: Array2::default(config.size().to_nd_index()),
        }
    }

    /// Fills every cell with an independent draw from `rng`, lit with `config.lit_probability`.
    pub fn random<R: Rng + ?Sized>(config: &BoardConfig, rng: &mut R) -> Self {
        let chance = if (0.0..=1.0).contains(&config.lit_probability) {
            config.lit_probability
        } else {
            log::warn!(
                "Invalid lit probability {}, generating an unlit board",
                config.lit_probability
            );
            0.0
        };

        let lights = Array2::from_shape_fn(config.size().to_nd_index(), |_| {
            rng.random_bool(chance)
        });
        Self { lights }
    }

    pub fn from_lights(lights: Array2<bool>) -> Result<Self> {
        let (rows, cols) = lights.dim();
        let max = usize::from(Coord::MAX);
        if rows == 0 || cols == 0 || rows > max || cols > max {
            return Err(GameError::InvalidBoardShape);
        }
        Ok(Self { lights })
    }

    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self> {
        let cols = rows.first().map_or(0, |row| row.as_ref().len());
        if rows.iter().any(|row| row.as_ref().len() != cols) {
            return Err(GameError::InvalidBoardShape);
        }

        let lights = Array2::from_shape_fn((rows.len(), cols), |(row, col)| {
            rows[row].as_ref()[col]
        });
        Self::from_lights(lights)
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.lights.dim();
        (
            Coord::try_from(rows).unwrap_or(Coord::MAX),
            Coord::try_from(cols).unwrap_or(Coord::MAX),
        )
    }

    pub fn rows(&self) -> Coord {
        self.size().0
    }

    pub fn cols(&self) -> Coord {
        self.size().1
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        let (rows, cols) = self.size();
        coords.0 < rows && coords.1 < cols
    }

    /// Out-of-bounds coordinates read as unlit.
    pub fn is_lit(&self, coords: Coord2) -> bool {
        self.lights
            .get(coords.to_nd_index())
            .copied()
            .unwrap_or(false)
    }

    pub fn lit_count(&self) -> CellCount {
        let count = self.lights.iter().filter(|&&lit| lit).count();
        CellCount::try_from(count).unwrap_or(CellCount::MAX)
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = impl Iterator<Item = bool> + '_> + '_ {
        self.lights
            .rows()
            .into_iter()
            .map(|row| row.into_iter().copied())
    }

    /// Flips the cell at `coords` and its orthogonal neighbors. Positions off the board are skipped.
    pub fn toggle_around(&mut self, coords: Coord2) {
        for pos in self.lights.iter_cross(coords) {
            let light = &mut self.lights[pos.to_nd_index()];
            *light = !*light;
        }
    }

    pub fn has_won(&self) -> bool {
        self.lights.iter().all(|&lit| !lit)
    }
}

impl Index<Coord2> for Board {
    type Output = bool;

    fn index(&self, (row, col): Coord2) -> &Self::Output {
        &self.lights[(row as usize, col as usize)]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            for lit in row {
                f.write_str(if lit { "O" } else { "." })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec::Vec;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    const F: bool = false;
    const T: bool = true;

    fn board<const N: usize>(rows: &[[bool; N]]) -> Board {
        Board::from_rows(rows).unwrap()
    }

    fn cells(board: &Board) -> Vec<Vec<bool>> {
        board.iter_rows().map(|row| row.collect()).collect()
    }

    #[test]
    fn random_board_with_zero_chance_is_unlit() {
        let config = BoardConfig::new(4, 6, 0.0).unwrap();
        let mut rng = SmallRng::seed_from_u64(7);

        let board = Board::random(&config, &mut rng);

        assert_eq!(board, Board::unlit(&config));
        assert!(board.has_won());
    }

    #[test]
    fn random_board_with_full_chance_is_all_lit() {
        let config = BoardConfig::new(4, 6, 1.0).unwrap();
        let mut rng = SmallRng::seed_from_u64(7);

        let board = Board::random(&config, &mut rng);

        assert_eq!(board.lit_count(), 24);
    }

    #[test]
    fn random_board_has_configured_shape() {
        for (rows, cols) in [(1, 1), (1, 9), (9, 1), (5, 5), (3, 8)] {
            let config = BoardConfig::new(rows, cols, 0.5).unwrap();
            let mut rng = SmallRng::seed_from_u64(u64::from(rows) * 31 + u64::from(cols));

            let mut board = Board::random(&config, &mut rng);
            assert_eq!(board.size(), (rows, cols));

            board.toggle_around((0, 0));
            board.toggle_around((rows - 1, cols - 1));
            let cells = cells(&board);
            assert_eq!(cells.len(), usize::from(rows));
            assert!(cells.iter().all(|row| row.len() == usize::from(cols)));
        }
    }

    #[test]
    fn toggle_twice_restores_board() {
        let config = BoardConfig::new(5, 5, 0.5).unwrap();
        let mut rng = SmallRng::seed_from_u64(42);
        let original = Board::random(&config, &mut rng);

        for coords in [(0, 0), (2, 2), (4, 0), (0, 4), (4, 4), (1, 3)] {
            let mut board = original.clone();
            board.toggle_around(coords);
            assert_ne!(board, original);
            board.toggle_around(coords);
            assert_eq!(board, original);
        }
    }

    #[test]
    fn toggle_corner_skips_neighbors_off_the_board() {
        let mut board = board(&[[F, F, F], [F, F, F], [F, F, F]]);

        board.toggle_around((0, 0));

        assert_eq!(board, self::board(&[[T, T, F], [T, F, F], [F, F, F]]));
    }

    #[test]
    fn toggle_center_flips_cross() {
        let mut board = board(&[[T, F, T], [F, T, F], [T, F, T]]);

        board.toggle_around((1, 1));

        assert_eq!(board, self::board(&[[T, T, T], [T, F, T], [T, T, T]]));
    }

    #[test]
    fn toggle_outside_board_only_touches_cells_on_the_board() {
        let mut board = board(&[[F, F], [F, F]]);

        board.toggle_around((2, 1));
        assert_eq!(board, self::board(&[[F, F], [F, T]]));

        board.toggle_around((9, 9));
        assert_eq!(board, self::board(&[[F, F], [F, T]]));
    }

    #[test]
    fn two_by_two_clear_sequence() {
        let mut board = board(&[[T, T], [T, T]]);

        board.toggle_around((0, 0));
        assert_eq!(board, self::board(&[[F, F], [F, T]]));

        board.toggle_around((1, 1));
        assert_eq!(board, self::board(&[[F, T], [T, F]]));
    }

    #[test]
    fn has_won_only_when_every_cell_is_unlit() {
        let unlit = board(&[[F, F, F], [F, F, F], [F, F, F]]);
        assert!(unlit.has_won());

        for row in 0..3 {
            for col in 0..3 {
                let mut cells = [[F; 3]; 3];
                cells[row][col] = T;
                assert!(!board(&cells).has_won());
            }
        }
    }

    #[test]
    fn from_rows_rejects_bad_shapes() {
        let empty: [[bool; 0]; 0] = [];
        assert_eq!(Board::from_rows(&empty), Err(GameError::InvalidBoardShape));
        assert_eq!(
            Board::from_rows(&[[F; 0]]),
            Err(GameError::InvalidBoardShape)
        );

        let ragged: [&[bool]; 2] = [&[F, T], &[F]];
        assert_eq!(Board::from_rows(&ragged), Err(GameError::InvalidBoardShape));
    }

    #[test]
    fn deserializing_checks_board_shape() {
        let board = board(&[[F, T, F], [T, F, F]]);
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(serde_json::from_str::<Board>(&json).unwrap(), board);

        let empty: Array2<bool> = Array2::default((0, 5));
        let json = serde_json::to_string(&empty).unwrap();
        assert!(serde_json::from_str::<Board>(&json).is_err());
    }

    #[test]
    fn reads_by_row_and_column() {
        let board = board(&[[F, T, F], [F, F, T]]);

        assert_eq!(board.size(), (2, 3));
        assert!(board[(0, 1)]);
        assert!(board.is_lit((1, 2)));
        assert!(!board.is_lit((1, 0)));
        assert!(!board.is_lit((5, 5)));
        assert!(board.contains((1, 2)));
        assert!(!board.contains((2, 0)));
        assert_eq!(board.lit_count(), 2);
    }

    #[test]
    fn display_draws_lit_cells_as_o() {
        let board = board(&[[F, F, F], [T, T, F], [F, F, F]]);

        assert_eq!(board.to_string(), "...\nOO.\n...\n");
    }
}
