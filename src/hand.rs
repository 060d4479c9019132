//! Hands and hand evaluation.

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;

/// Highest hand value that is not a bust.
pub const BLACKJACK_VALUE: u8 = 21;

/// Amount removed from the total when an Ace is counted as 1 instead of 11.
const ACE_DOWNGRADE: u8 = 10;

fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(card.value());
    }

    while value > BLACKJACK_VALUE && aces > 0 {
        value -= ACE_DOWNGRADE;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= BLACKJACK_VALUE;
    (value, is_soft)
}

/// Calculates the blackjack value of a set of cards.
///
/// Every Ace starts at 11 and is downgraded to 1, one at a time, while the
/// total is over 21. The result is the best total not over 21 if one exists,
/// otherwise the smallest possible total.
///
/// ```
/// use blackjack::{Card, Rank, Suit, hand};
///
/// let cards = [
///     Card::new(Rank::Ace, Suit::Hearts),
///     Card::new(Rank::Ace, Suit::Spades),
///     Card::new(Rank::Nine, Suit::Clubs),
/// ];
/// assert_eq!(hand::value(&cards), 21);
/// ```
#[must_use]
pub fn value(cards: &[Card]) -> u8 {
    evaluate_cards(cards).0
}

/// Returns whether the cards are worth more than 21.
#[must_use]
pub fn is_busted(cards: &[Card]) -> bool {
    value(cards) > BLACKJACK_VALUE
}

/// Returns whether the cards are a natural blackjack: exactly two cards
/// worth 21.
#[must_use]
pub fn is_natural_blackjack(cards: &[Card]) -> bool {
    cards.len() == 2 && value(cards) == BLACKJACK_VALUE
}

/// Returns whether at least one Ace is still counted as 11.
#[must_use]
pub fn is_soft(cards: &[Card]) -> bool {
    evaluate_cards(cards).1
}

/// A participant's hand.
///
/// Card order only matters for display; the value does not depend on it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand, in the order they were dealt.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes every card from the hand.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the first card dealt, if any.
    #[must_use]
    pub fn first_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Calculates the value of the hand.
    ///
    /// Aces are counted as 11 if possible without busting, otherwise as 1.
    #[must_use]
    pub fn value(&self) -> u8 {
        value(&self.cards)
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_busted(&self) -> bool {
        is_busted(&self.cards)
    }

    /// Returns whether the hand is a natural blackjack.
    #[must_use]
    pub fn is_natural_blackjack(&self) -> bool {
        is_natural_blackjack(&self.cards)
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        is_soft(&self.cards)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some((first, rest)) = self.cards.split_first() else {
            return f.write_str("Empty hand");
        };

        write!(f, "{first}")?;
        for card in rest {
            write!(f, ", {card}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;
    use crate::card::{Rank, Suit};

    fn hand_of(ranks: &[Rank]) -> Hand {
        let mut hand = Hand::new();
        for (index, &rank) in ranks.iter().enumerate() {
            hand.add_card(Card::new(rank, Suit::ALL[index % 4]));
        }
        hand
    }

    #[test]
    fn two_aces_and_nine_is_soft_21_not_blackjack() {
        let hand = hand_of(&[Rank::Ace, Rank::Ace, Rank::Nine]);
        assert_eq!(hand.value(), 21);
        assert!(!hand.is_natural_blackjack());
        assert!(!hand.is_busted());
        assert!(hand.is_soft());
    }

    #[test]
    fn ace_king_is_natural_blackjack() {
        let hand = hand_of(&[Rank::Ace, Rank::King]);
        assert_eq!(hand.value(), 21);
        assert!(hand.is_natural_blackjack());
    }

    #[test]
    fn three_card_21_is_not_natural() {
        let hand = hand_of(&[Rank::Seven, Rank::Seven, Rank::Seven]);
        assert_eq!(hand.value(), 21);
        assert!(!hand.is_natural_blackjack());
    }

    #[test]
    fn aces_downgrade_only_as_needed() {
        assert_eq!(hand_of(&[Rank::Ace, Rank::Six]).value(), 17);
        assert!(hand_of(&[Rank::Ace, Rank::Six]).is_soft());

        let hard = hand_of(&[Rank::Ace, Rank::Six, Rank::Ten]);
        assert_eq!(hard.value(), 17);
        assert!(!hard.is_soft());

        assert_eq!(hand_of(&[Rank::Ace, Rank::Ace]).value(), 12);
        assert_eq!(
            hand_of(&[Rank::Ace, Rank::Ace, Rank::Ace, Rank::Ace]).value(),
            14
        );
    }

    #[test]
    fn bust_reports_minimal_total() {
        let hand = hand_of(&[Rank::King, Rank::Queen, Rank::Ace, Rank::Five]);
        assert_eq!(hand.value(), 26);
        assert!(hand.is_busted());
    }

    #[test]
    fn value_ignores_card_order() {
        let forward = hand_of(&[Rank::Ace, Rank::Five, Rank::Nine]);
        let backward = hand_of(&[Rank::Nine, Rank::Five, Rank::Ace]);
        assert_eq!(forward.value(), backward.value());
    }

    #[test]
    fn clear_empties_the_hand() {
        let mut hand = hand_of(&[Rank::Two, Rank::Three]);
        hand.clear();
        assert!(hand.is_empty());
        assert_eq!(hand.value(), 0);
    }

    #[test]
    fn display_joins_cards() {
        assert_eq!(Hand::new().to_string(), "Empty hand");
        let mut hand = Hand::new();
        hand.add_card(Card::new(Rank::Ace, Suit::Spades));
        hand.add_card(Card::new(Rank::Ten, Suit::Hearts));
        assert_eq!(hand.to_string(), "Ace of Spades, Ten of Hearts");
    }
}
