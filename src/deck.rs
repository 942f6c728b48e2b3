use rand::Rng;

use crate::card::{build_grid, Grid};
use crate::config::CardConfig;
use crate::words::WordSet;

/// Build `cfg.num_cards` independent cards from one rng stream.
///
/// Cards share nothing but the word set; two cards may come out identical.
pub fn build_cards<R: Rng + ?Sized>(words: &WordSet, cfg: &CardConfig, rng: &mut R) -> Vec<Grid> {
    let cells = cfg.cells_per_card();
    if words.len() < cells {
        log::warn!(
            "only {} unique words for {} cells per card; remaining cells stay empty",
            words.len(),
            cells
        );
    }

    let cards: Vec<Grid> = (0..cfg.num_cards)
        .map(|i| {
            let grid = build_grid(words, cfg.card_size, cfg.include_bonus, &mut *rng);
            log::debug!(
                "card {}: {} words, {} empty, {} bonus",
                i + 1,
                grid.normal_count(),
                grid.empty_count(),
                grid.bonus_count()
            );
            grid
        })
        .collect();

    log::info!(
        "built {} card(s) of {}x{}",
        cards.len(),
        cfg.card_size,
        cfg.card_size
    );
    cards
}
