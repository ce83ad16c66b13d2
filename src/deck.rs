use std::fmt;

use rand::{seq::SliceRandom, Rng};

use crate::error::GameError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    Hearts,
    Clubs,
    Spades,
    Diamonds,
}

impl Suit {
    /// Order in which suits are laid out within each rank before shuffling.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Clubs, Suit::Spades, Suit::Diamonds];

    pub fn symbol(&self) -> char {
        match self {
            Suit::Hearts => 'h',
            Suit::Clubs => 'c',
            Suit::Spades => 's',
            Suit::Diamonds => 'd',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Point value with the ace counted low. Hand scoring decides when an
    /// ace is worth 11.
    pub fn value(&self) -> u8 {
        match self {
            Rank::Ace => 1,
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Card { rank, suit }
    }

    pub fn is_ace(&self) -> bool {
        self.rank == Rank::Ace
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.symbol())
    }
}

pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// A full 52-card deck shuffled with `rng`. Callers keep the rng across
    /// rounds so a fixed seed replays the same sequence of decks.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = Vec::with_capacity(52);
        for rank in Rank::ALL {
            for suit in Suit::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        cards.shuffle(rng);
        Deck { cards }
    }

    /// Deck that deals `cards` in the given order.
    pub fn stacked(cards: &[Card]) -> Self {
        let mut cards = cards.to_vec();
        cards.reverse();
        Deck { cards }
    }

    pub fn draw(&mut self) -> Result<Card, GameError> {
        self.cards.pop().ok_or(GameError::DeckExhausted)
    }

    pub fn remaining_cards(&self) -> usize {
        self.cards.len()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::{rngs::SmallRng, SeedableRng};

    use super::*;

    fn drain(deck: &mut Deck) -> Vec<Card> {
        let mut out = Vec::new();
        while let Ok(card) = deck.draw() {
            out.push(card);
        }
        out
    }

    #[test]
    fn test_deck_has_52_unique_cards() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut deck = Deck::shuffled(&mut rng);
        assert_eq!(deck.remaining_cards(), 52);

        let cards = drain(&mut deck);
        let unique: HashSet<_> = cards.iter().collect();
        assert_eq!(unique.len(), 52);
    }

    #[test]
    fn test_same_seed_same_decks() {
        let mut rng1 = SmallRng::seed_from_u64(42);
        let mut rng2 = SmallRng::seed_from_u64(42);

        for _ in 0..3 {
            let a = drain(&mut Deck::shuffled(&mut rng1));
            let b = drain(&mut Deck::shuffled(&mut rng2));
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_consecutive_rounds_differ() {
        let mut rng = SmallRng::seed_from_u64(42);
        let first = drain(&mut Deck::shuffled(&mut rng));
        let second = drain(&mut Deck::shuffled(&mut rng));
        assert_ne!(first, second);
    }

    #[test]
    fn test_stacked_deck_deals_in_order() {
        let cards = [
            Card::new(Rank::King, Suit::Spades),
            Card::new(Rank::Ace, Suit::Hearts),
        ];
        let mut deck = Deck::stacked(&cards);
        assert_eq!(deck.draw().unwrap(), cards[0]);
        assert_eq!(deck.draw().unwrap(), cards[1]);
        assert!(matches!(deck.draw(), Err(GameError::DeckExhausted)));
    }

    #[test]
    fn test_card_display() {
        assert_eq!(Card::new(Rank::Ace, Suit::Hearts).to_string(), "Ah");
        assert_eq!(Card::new(Rank::Ten, Suit::Diamonds).to_string(), "10d");
        assert_eq!(Card::new(Rank::King, Suit::Clubs).to_string(), "Kc");
    }

    #[test]
    fn test_face_cards_worth_ten() {
        for rank in [Rank::Ten, Rank::Jack, Rank::Queen, Rank::King] {
            assert_eq!(rank.value(), 10);
        }
        assert_eq!(Rank::Ace.value(), 1);
    }
}
