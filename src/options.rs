//! Session configuration options.

use alloc::string::String;

/// Configuration options for a blackjack session.
///
/// The rules themselves are fixed. Options only cover the table setup.
///
/// ```
/// use blackjack::SessionOptions;
///
/// let options = SessionOptions::default()
///     .with_starting_chips(250)
///     .with_minimum_deck_size(15)
///     .with_seed(7);
/// assert_eq!(options.starting_chips, 250);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    /// Chips the player starts the session with.
    pub starting_chips: usize,
    /// The deck is replaced before a deal when fewer cards remain.
    pub minimum_deck_size: usize,
    /// Name shown for the dealer.
    pub dealer_name: String,
    /// Seed for the deck's random number generator.
    pub seed: u64,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            starting_chips: 100,
            minimum_deck_size: 10,
            dealer_name: String::from("Dealer"),
            seed: 0,
        }
    }
}

impl SessionOptions {
    /// Sets the starting chip balance.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack::SessionOptions;
    ///
    /// let options = SessionOptions::default().with_starting_chips(500);
    /// assert_eq!(options.starting_chips, 500);
    /// ```
    #[must_use]
    pub const fn with_starting_chips(mut self, chips: usize) -> Self {
        self.starting_chips = chips;
        self
    }

    /// Sets the minimum number of cards required before a deal.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack::SessionOptions;
    ///
    /// let options = SessionOptions::default().with_minimum_deck_size(20);
    /// assert_eq!(options.minimum_deck_size, 20);
    /// ```
    #[must_use]
    pub const fn with_minimum_deck_size(mut self, cards: usize) -> Self {
        self.minimum_deck_size = cards;
        self
    }

    /// Sets the dealer's display name.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack::SessionOptions;
    ///
    /// let options = SessionOptions::default().with_dealer_name("House");
    /// assert_eq!(options.dealer_name, "House");
    /// ```
    #[must_use]
    pub fn with_dealer_name(mut self, name: impl Into<String>) -> Self {
        self.dealer_name = name.into();
        self
    }

    /// Sets the deck seed.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack::SessionOptions;
    ///
    /// let options = SessionOptions::default().with_seed(42);
    /// assert_eq!(options.seed, 42);
    /// ```
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
