use super::*;

/// Generation strategy that lights every cell independently with the configured chance.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomBoardGenerator {
    seed: u64,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self, config: BoardConfig) -> Board {
        use rand::SeedableRng;
        use rand::rngs::SmallRng;

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let board = Board::random(&config, &mut rng);
        log::debug!(
            "Generated {}x{} board from seed {}, {} of {} lit",
            config.rows,
            config.cols,
            self.seed,
            board.lit_count(),
            config.total_cells()
        );
        board
    }
}
