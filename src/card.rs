//! Card types.

use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All four suits.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Hearts => "Hearts",
            Self::Diamonds => "Diamonds",
            Self::Clubs => "Clubs",
            Self::Spades => "Spades",
        };
        f.write_str(name)
    }
}

/// Card rank.
///
/// Each rank carries a fixed point value. An Ace is stored at its soft value
/// of 11; counting it as 1 is left to hand evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

impl Rank {
    /// All thirteen ranks, lowest first.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Returns the blackjack point value of the rank.
    ///
    /// ```
    /// use blackjack::Rank;
    ///
    /// assert_eq!(Rank::Seven.value(), 7);
    /// assert_eq!(Rank::Queen.value(), 10);
    /// assert_eq!(Rank::Ace.value(), 11);
    /// ```
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
            Self::Ten | Self::Jack | Self::Queen | Self::King => 10,
            Self::Ace => 11,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Two => "Two",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
            Self::Six => "Six",
            Self::Seven => "Seven",
            Self::Eight => "Eight",
            Self::Nine => "Nine",
            Self::Ten => "Ten",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
            Self::Ace => "Ace",
        };
        f.write_str(name)
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Returns the point value of the card's rank.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.rank.value()
    }

    /// Returns whether the card is an Ace.
    #[must_use]
    pub const fn is_ace(self) -> bool {
        matches!(self.rank, Rank::Ace)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn face_cards_are_worth_ten() {
        for rank in [Rank::Ten, Rank::Jack, Rank::Queen, Rank::King] {
            assert_eq!(rank.value(), 10);
        }
    }

    #[test]
    fn universe_has_deck_size_cards() {
        assert_eq!(Rank::ALL.len() * Suit::ALL.len(), DECK_SIZE);
    }

    #[test]
    fn card_displays_rank_and_suit() {
        let card = Card::new(Rank::Ace, Suit::Spades);
        assert_eq!(card.to_string(), "Ace of Spades");
        assert!(card.is_ace());
        assert_eq!(card.value(), 11);
    }
}
