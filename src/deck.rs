//! The deck of cards dealt during a session.

use alloc::vec::Vec;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, trace, warn};

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// A single 52-card deck that depletes as cards are dealt.
///
/// The deck never contains duplicates. It refills itself in two ways: on
/// request through [`Deck::ensure_minimum_cards`], and silently when a card
/// is dealt from an empty deck.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Remaining cards. The last element is dealt next.
    cards: Vec<Card>,
    /// Random number generator used for every shuffle.
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a full, shuffled deck.
    ///
    /// The same seed always yields the same sequence of decks, including the
    /// decks created when the deck refills itself.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack::{DECK_SIZE, Deck};
    ///
    /// let mut deck = Deck::new(7);
    /// assert_eq!(deck.len(), DECK_SIZE);
    ///
    /// let _card = deck.deal_card();
    /// assert_eq!(deck.len(), DECK_SIZE - 1);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut deck = Self {
            cards: Vec::with_capacity(DECK_SIZE),
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        deck.initialize();
        deck.shuffle();
        deck
    }

    /// Creates a deck that deals the given cards in order, first card first.
    ///
    /// Repeated cards are dropped after their first occurrence. Once the
    /// stacked cards run out or the deck is refilled, it behaves like a deck
    /// created with [`Deck::new`] and the same seed.
    #[must_use]
    pub fn stacked(cards: &[Card], seed: u64) -> Self {
        let mut unique: Vec<Card> = Vec::with_capacity(cards.len());
        for &card in cards {
            if !unique.contains(&card) {
                unique.push(card);
            }
        }
        unique.reverse();

        Self {
            cards: unique,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Replaces the contents with the full 52-card universe, unshuffled.
    pub fn initialize(&mut self) {
        self.cards.clear();
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                self.cards.push(Card::new(rank, suit));
            }
        }
        debug!(cards = self.cards.len(), "new deck created");
    }

    /// Shuffles the remaining cards into a uniformly random order.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
        debug!(cards = self.cards.len(), "deck shuffled");
    }

    /// Removes and returns the next card.
    ///
    /// An empty deck is reinitialized and reshuffled first, so dealing never
    /// fails.
    pub fn deal_card(&mut self) -> Card {
        loop {
            if let Some(card) = self.cards.pop() {
                trace!(%card, remaining = self.cards.len(), "dealt card");
                return card;
            }
            warn!("deck ran out of cards, reinitializing");
            self.refill();
        }
    }

    /// Refills the deck when fewer than `threshold` cards remain.
    ///
    /// Any remaining cards are discarded and replaced by a freshly shuffled
    /// full deck. Returns `true` if a refill happened.
    pub fn ensure_minimum_cards(&mut self, threshold: usize) -> bool {
        if self.cards.len() >= threshold {
            return false;
        }

        info!(
            remaining = self.cards.len(),
            threshold, "deck below minimum, refilling"
        );
        self.refill();
        true
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the remaining cards. The last card is dealt next.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    fn refill(&mut self) {
        self.initialize();
        self.shuffle();
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    fn is_full_universe(cards: &[Card]) -> bool {
        cards.len() == DECK_SIZE
            && Suit::ALL.iter().all(|&suit| {
                Rank::ALL
                    .iter()
                    .all(|&rank| cards.contains(&Card::new(rank, suit)))
            })
    }

    #[test]
    fn new_deck_holds_every_card_once() {
        let deck = Deck::new(1);
        assert!(is_full_universe(deck.cards()));
    }

    #[test]
    fn initialize_discards_dealt_state() {
        let mut deck = Deck::new(2);
        for _ in 0..20 {
            deck.deal_card();
        }
        deck.initialize();
        assert!(is_full_universe(deck.cards()));
    }

    #[test]
    fn shuffle_keeps_the_same_cards() {
        let mut deck = Deck::new(3);
        let before: Vec<Card> = deck.cards().to_vec();
        deck.shuffle();
        assert_eq!(deck.len(), before.len());
        assert!(before.iter().all(|card| deck.cards().contains(card)));
    }

    #[test]
    fn same_seed_deals_same_sequence() {
        let mut a = Deck::new(42);
        let mut b = Deck::new(42);
        for _ in 0..60 {
            assert_eq!(a.deal_card(), b.deal_card());
        }
    }

    #[test]
    fn dealing_past_the_end_reinitializes() {
        let mut deck = Deck::new(9);
        let mut dealt = Vec::new();
        for _ in 0..DECK_SIZE {
            dealt.push(deck.deal_card());
        }
        assert!(deck.is_empty());
        assert!(is_full_universe(&dealt));

        let _ = deck.deal_card();
        assert_eq!(deck.len(), DECK_SIZE - 1);
    }

    #[test]
    fn ensure_minimum_refills_short_deck() {
        let mut deck = Deck::new(4);
        while deck.len() > 5 {
            deck.deal_card();
        }

        assert!(deck.ensure_minimum_cards(10));
        assert!(is_full_universe(deck.cards()));
    }

    #[test]
    fn ensure_minimum_leaves_large_deck_alone() {
        let mut deck = Deck::new(5);
        deck.deal_card();
        let before: Vec<Card> = deck.cards().to_vec();

        assert!(!deck.ensure_minimum_cards(10));
        assert_eq!(deck.cards(), before.as_slice());
    }

    #[test]
    fn ensure_minimum_at_threshold_does_not_refill() {
        let mut deck = Deck::new(6);
        while deck.len() > 10 {
            deck.deal_card();
        }
        assert!(!deck.ensure_minimum_cards(10));
        assert_eq!(deck.len(), 10);
    }

    #[test]
    fn stacked_deck_deals_in_order_and_drops_repeats() {
        let ace = Card::new(Rank::Ace, Suit::Hearts);
        let king = Card::new(Rank::King, Suit::Clubs);
        let mut deck = Deck::stacked(&[ace, king, ace], 0);

        assert_eq!(deck.len(), 2);
        assert_eq!(deck.deal_card(), ace);
        assert_eq!(deck.deal_card(), king);

        let _ = deck.deal_card();
        assert_eq!(deck.len(), DECK_SIZE - 1);
    }
}
