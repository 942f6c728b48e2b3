use std::fs;

use bingo_cards::{build_cards, load_words, CardConfig, Cell};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

#[test]
fn four_words_fill_two_by_two() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("words.txt");
    fs::write(&path, "alpha\nbeta\ngamma\ndelta\n").unwrap();

    let words = load_words(&path).unwrap();
    let cfg = CardConfig {
        card_size: 2,
        ..CardConfig::default()
    };
    let cards = build_cards(&words, &cfg, &mut ChaCha20Rng::seed_from_u64(7));
    assert_eq!(cards.len(), 1);

    let grid = &cards[0];
    assert_eq!(grid.rows().len(), 2);
    assert!(grid.rows().iter().all(|row| row.len() == 2));
    let mut placed: Vec<&str> = grid.words().collect();
    placed.sort_unstable();
    assert_eq!(placed, vec!["alpha", "beta", "delta", "gamma"]);
}

#[test]
fn single_word_with_bonus() {
    let words = ["only".to_string()].into_iter().collect();
    let cfg = CardConfig {
        card_size: 3,
        include_bonus: true,
        ..CardConfig::default()
    };
    for seed in 0..50 {
        let cards = build_cards(&words, &cfg, &mut ChaCha20Rng::seed_from_u64(seed));
        let grid = &cards[0];
        assert_eq!(grid.cells().count(), 9);
        assert_eq!(grid.bonus_count(), 1);
        match grid.normal_count() {
            1 => assert_eq!(grid.empty_count(), 7),
            0 => assert_eq!(grid.empty_count(), 8),
            n => panic!("unexpected word count {n}"),
        }
    }
}

#[test]
fn empty_word_file_gives_empty_cards() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.txt");
    fs::write(&path, "\n   \n").unwrap();

    let words = load_words(&path).unwrap();
    assert!(words.is_empty());
    let cfg = CardConfig {
        num_cards: 2,
        ..CardConfig::default()
    };
    let cards = build_cards(&words, &cfg, &mut ChaCha20Rng::seed_from_u64(0));
    assert_eq!(cards.len(), 2);
    for grid in &cards {
        assert_eq!(grid.cells().count(), 25);
        assert!(grid.cells().all(|c| *c == Cell::Empty));
    }
}

#[test]
fn duplicates_and_unicode_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("words.txt");
    fs::write(&path, "Synergie\n  Synergie  \nÜberholspur\n\n日本語\n").unwrap();

    let words = load_words(&path).unwrap();
    assert_eq!(words.len(), 3);
    assert!(words.contains("Überholspur"));
    assert!(words.contains("日本語"));
}

#[test]
fn seeded_decks_repeat() {
    let words = (0..40).map(|i| format!("term {i}")).collect();
    let cfg = CardConfig {
        num_cards: 5,
        include_bonus: true,
        ..CardConfig::default()
    };
    let a = build_cards(&words, &cfg, &mut ChaCha20Rng::seed_from_u64(99));
    let b = build_cards(&words, &cfg, &mut ChaCha20Rng::seed_from_u64(99));
    assert_eq!(a, b);
}

#[test]
fn cards_in_a_deck_differ() {
    let words = (0..100).map(|i| format!("term {i}")).collect();
    let cfg = CardConfig {
        num_cards: 3,
        ..CardConfig::default()
    };
    let cards = build_cards(&words, &cfg, &mut ChaCha20Rng::seed_from_u64(5));
    assert_ne!(cards[0], cards[1]);
    assert_ne!(cards[1], cards[2]);
}
