//! Cells, grids and the card builder.

use rand::seq::index;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::words::WordSet;

/// One position on a card.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Cell {
    /// A term drawn from the word set.
    Normal(String),
    /// Padding when the word set has fewer terms than the card has cells.
    Empty,
    /// Free field that counts as already marked.
    Bonus,
}

impl Cell {
    pub fn word(&self) -> Option<&str> {
        match self {
            Cell::Normal(word) => Some(word),
            Cell::Empty | Cell::Bonus => None,
        }
    }
}

/// A square card laid out row-major. Built once by [`build_grid`] and never
/// modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    /// Group a flat row-major sequence into rows of `size` cells.
    fn from_cells(cells: Vec<Cell>, size: usize) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        if size == 0 {
            return Self { rows: Vec::new() };
        }
        let rows = cells.chunks(size).map(<[Cell]>::to_vec).collect();
        Self { rows }
    }

    /// Number of rows, which is also the number of columns.
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.rows.iter().flatten()
    }

    /// Words placed on the card, in row-major order.
    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.cells().filter_map(Cell::word)
    }

    pub fn normal_count(&self) -> usize {
        self.words().count()
    }

    pub fn empty_count(&self) -> usize {
        self.cells().filter(|c| **c == Cell::Empty).count()
    }

    pub fn bonus_count(&self) -> usize {
        self.cells().filter(|c| **c == Cell::Bonus).count()
    }
}

/// Build one `size` x `size` card.
///
/// Draws `min(size², |words|)` distinct words uniformly at random and in
/// random order, pads the rest with [`Cell::Empty`] and, when
/// `include_bonus` is set, overwrites one uniformly chosen position with
/// [`Cell::Bonus`]. The overwritten cell may hold a word, which is then
/// dropped from the card.
pub fn build_grid<R: Rng + ?Sized>(
    words: &WordSet,
    size: usize,
    include_bonus: bool,
    rng: &mut R,
) -> Grid {
    let total = size * size;
    let pool: Vec<&String> = words.iter().collect();
    let sample_len = total.min(pool.len());

    let mut cells = Vec::with_capacity(total);
    if sample_len > 0 {
        for i in index::sample(rng, pool.len(), sample_len).iter() {
            cells.push(Cell::Normal(pool[i].clone()));
        }
    }
    cells.resize(total, Cell::Empty);

    if include_bonus && total > 0 {
        let pos = rng.gen_range(0..total);
        cells[pos] = Cell::Bonus;
    }

    Grid::from_cells(cells, size)
}
