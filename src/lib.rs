//! Randomized bingo cards from a word list.
//!
//! A run loads a [`WordSet`], builds a deck of independent square
//! [`Grid`]s with [`build_cards`] and renders them with [`render_html`]
//! (or [`render_json`]). All randomness comes from the rng passed in, so a
//! seeded rng reproduces the same deck.

pub mod card;
pub mod config;
pub mod deck;
mod error;
pub mod io_utils;
pub mod logging;
pub mod render;
pub mod words;

pub use card::{build_grid, Cell, Grid};
pub use config::CardConfig;
pub use deck::build_cards;
pub use error::BingoError;
pub use io_utils::CliError;
pub use render::{escape_html, render_html, render_json};
pub use words::{load_words, parse_words, WordSet};
