use std::fmt;

use crate::deck::Card;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    /// Every ace counted as 1.
    pub hard: u8,
    /// One ace counted as 11, present only while that stays at or under 21.
    pub soft: Option<u8>,
}

impl Score {
    pub fn best(&self) -> u8 {
        self.soft.unwrap_or(self.hard)
    }

    pub fn is_soft(&self) -> bool {
        self.soft.is_some()
    }

    pub fn is_bust(&self) -> bool {
        self.hard > 21
    }
}

pub fn hand_value(cards: &[Card]) -> Score {
    let mut hard = 0u8;
    let mut has_ace = false;

    for card in cards {
        hard = hard.saturating_add(card.rank.value());
        if card.is_ace() {
            has_ace = true;
        }
    }

    let soft = if has_ace && hard <= 11 {
        Some(hard + 10)
    } else {
        None
    };

    Score { hard, soft }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Hand { cards: Vec::new() }
    }

    pub fn from_cards(cards: &[Card]) -> Self {
        Hand {
            cards: cards.to_vec(),
        }
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn score(&self) -> Score {
        hand_value(&self.cards)
    }

    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.score().best() == 21
    }

    pub fn is_bust(&self) -> bool {
        self.score().is_bust()
    }

    /// Text shown after the cards: a verdict, a single total, or both
    /// totals when an ace can still count either way.
    pub fn score_label(&self) -> String {
        let score = self.score();
        if self.is_blackjack() {
            return "Blackjack!".to_string();
        }
        if score.is_bust() {
            return "Bust!".to_string();
        }
        match score.soft {
            Some(soft) => format!("{} or {}", score.hard, soft),
            None => score.hard.to_string(),
        }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in &self.cards {
            write!(f, "{card} ")?;
        }
        write!(f, "-> {}", self.score_label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::{Rank, Suit};

    fn hand(ranks: &[Rank]) -> Hand {
        let cards: Vec<Card> = ranks.iter().map(|&r| Card::new(r, Suit::Spades)).collect();
        Hand::from_cards(&cards)
    }

    #[test]
    fn test_no_aces() {
        let h = hand(&[Rank::King, Rank::Seven]);
        assert_eq!(h.score(), Score { hard: 17, soft: None });
        assert_eq!(h.score_label(), "17");
    }

    #[test]
    fn test_one_ace_soft() {
        let h = hand(&[Rank::Ace, Rank::Six]);
        assert_eq!(h.score(), Score { hard: 7, soft: Some(17) });
        assert_eq!(h.score().best(), 17);
        assert_eq!(h.score_label(), "7 or 17");
    }

    #[test]
    fn test_one_ace_forced_hard() {
        let h = hand(&[Rank::Ace, Rank::Six, Rank::Nine]);
        assert_eq!(h.score(), Score { hard: 16, soft: None });
        assert_eq!(h.score_label(), "16");
    }

    #[test]
    fn test_two_aces() {
        let h = hand(&[Rank::Ace, Rank::Ace]);
        assert_eq!(h.score(), Score { hard: 2, soft: Some(12) });
        assert_eq!(h.score_label(), "2 or 12");

        let h = hand(&[Rank::Ace, Rank::Ace, Rank::Nine]);
        assert_eq!(h.score().best(), 21);
        assert_eq!(h.score_label(), "11 or 21");

        let h = hand(&[Rank::Ace, Rank::Ace, Rank::King, Rank::Nine]);
        assert_eq!(h.score(), Score { hard: 21, soft: None });
    }

    #[test]
    fn test_blackjack() {
        let h = hand(&[Rank::Ace, Rank::Queen]);
        assert!(h.is_blackjack());
        assert_eq!(h.score_label(), "Blackjack!");

        let h = hand(&[Rank::Seven, Rank::Seven, Rank::Seven]);
        assert!(!h.is_blackjack());
        assert_eq!(h.score_label(), "21");
    }

    #[test]
    fn test_bust() {
        let h = hand(&[Rank::King, Rank::Queen, Rank::Two]);
        assert!(h.is_bust());
        assert_eq!(h.score_label(), "Bust!");

        let h = hand(&[Rank::King, Rank::Queen, Rank::Ace]);
        assert!(!h.is_bust());
        assert_eq!(h.score_label(), "21");
    }

    #[test]
    fn test_empty_hand() {
        let h = Hand::new();
        assert!(h.cards().is_empty());
        assert_eq!(h.score(), Score { hard: 0, soft: None });
    }

    #[test]
    fn test_display() {
        let cards = [
            Card::new(Rank::Ace, Suit::Hearts),
            Card::new(Rank::Five, Suit::Clubs),
        ];
        assert_eq!(Hand::from_cards(&cards).to_string(), "Ah 5c -> 6 or 16");
    }
}
