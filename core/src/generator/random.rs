use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;

/// Generation strategy that scatters bombs uniformly over the interior, then opens any enclosure so every safe cell
/// is reachable from the border.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMinefieldGenerator {
    seed: u64,
    budget: Option<RepairBudget>,
}

impl RandomMinefieldGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed, budget: None }
    }

    /// Overrides the enclosure repair budget, which otherwise scales with the board.
    pub fn with_budget(mut self, budget: RepairBudget) -> Self {
        self.budget = Some(budget);
        self
    }
}

impl MinefieldGenerator for RandomMinefieldGenerator {
    fn generate(self, config: &GameConfig) -> Result<Minefield> {
        let size = config.size();
        let bombs = config.bomb_count();
        let mut rng = SmallRng::seed_from_u64(self.seed);

        let mut minefield = Minefield::blank(size);
        log::info!(
            "Grid initialized, width: {}, height: {}, seed: {}",
            size.0,
            size.1,
            self.seed
        );

        place_bombs(&mut minefield, bombs, &mut rng)?;
        let budget = self.budget.unwrap_or_else(|| RepairBudget::for_size(size));
        resolve_enclosures(&mut minefield, &mut rng, budget)?;
        compute_numbers(&mut minefield);

        // double check bomb count
        if minefield.bomb_count() != bombs {
            log::warn!(
                "Generated minefield count mismatch, actual: {}, requested: {}",
                minefield.bomb_count(),
                bombs
            );
        }
        if log::log_enabled!(log::Level::Trace) {
            let mask = minefield.bomb_mask();
            let labels = label_components(size, Adjacency::Four, |coords| !mask.is_bomb(coords));
            log::trace!("Safe regions:\n{:?}", labels.t());
        }
        Ok(minefield)
    }
}
