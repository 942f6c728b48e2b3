use crate::BingoError;

/// Rows and columns of a card when none are requested.
pub const DEFAULT_CARD_SIZE: usize = 5;
/// Largest accepted card size. 64 x 64 is already far beyond a printable page.
pub const MAX_CARD_SIZE: usize = 64;
/// Largest number of cards produced in one run.
pub const MAX_NUM_CARDS: usize = 10_000;
/// Heading printed above every card.
pub const DEFAULT_TITLE: &str = "Bullshit Bingo";

/// Parameters shared by every card of a deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardConfig {
    /// Number of rows (and columns) per card.
    pub card_size: usize,
    /// Number of cards to build.
    pub num_cards: usize,
    /// Replace one random cell per card with the bonus marker.
    pub include_bonus: bool,
    /// Heading rendered above each card.
    pub title: String,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            card_size: DEFAULT_CARD_SIZE,
            num_cards: 1,
            include_bonus: false,
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl CardConfig {
    /// Total number of cells on one card.
    pub fn cells_per_card(&self) -> usize {
        self.card_size * self.card_size
    }

    /// Reject sizes and counts that make no sense before any card is built.
    pub fn validate(&self) -> Result<(), BingoError> {
        if self.card_size == 0 {
            return Err(BingoError::Config(
                "card size must be at least 1".to_string(),
            ));
        }
        if self.card_size > MAX_CARD_SIZE {
            return Err(BingoError::Config(format!(
                "card size {} exceeds the maximum of {}",
                self.card_size, MAX_CARD_SIZE
            )));
        }
        if self.num_cards == 0 {
            return Err(BingoError::Config(
                "number of cards must be at least 1".to_string(),
            ));
        }
        if self.num_cards > MAX_NUM_CARDS {
            return Err(BingoError::Config(format!(
                "number of cards {} exceeds the maximum of {}",
                self.num_cards, MAX_NUM_CARDS
            )));
        }
        Ok(())
    }
}
