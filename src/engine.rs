//! Round rules: state transitions, dealer policy and result determination.
//!
//! Everything here is pure. The [`Session`](crate::Session) calls into these
//! functions and performs the side effects itself.

use crate::game::{GameState, TurnFacts};
use crate::hand::Hand;
use crate::result::{GameResult, PayoutType, Winner};

/// The dealer stands on this value or higher, soft or hard.
pub const DEALER_STAND_VALUE: u8 = 17;

/// Returns the state that follows `state` given the observed `facts`.
///
/// [`GameState::GameOver`] is never produced here. The controller enters it
/// on its own after a bet of zero or a declined rematch; once there, it
/// stays there.
///
/// ```
/// use blackjack::{GameState, TurnFacts, engine};
///
/// assert_eq!(
///     engine::next_state(GameState::PlayerTurn, TurnFacts::STAND),
///     GameState::DealerTurn
/// );
/// assert_eq!(
///     engine::next_state(GameState::PlayerTurn, TurnFacts::NONE),
///     GameState::PlayerTurn
/// );
/// ```
#[must_use]
pub const fn next_state(state: GameState, facts: TurnFacts) -> GameState {
    match state {
        GameState::AwaitingBet => GameState::DealingCards,
        GameState::DealingCards => GameState::PlayerTurn,
        GameState::PlayerTurn => {
            if facts.player_busts || facts.player_stands {
                GameState::DealerTurn
            } else {
                GameState::PlayerTurn
            }
        }
        GameState::DealerTurn => {
            if facts.dealer_finished {
                GameState::RoundOver
            } else {
                GameState::DealerTurn
            }
        }
        GameState::RoundOver => GameState::AwaitingBet,
        GameState::GameOver => GameState::GameOver,
    }
}

/// Returns whether the dealer must draw another card.
///
/// There is no soft 17 rule: the dealer stands on every 17.
#[must_use]
pub fn should_dealer_hit(dealer_hand: &Hand) -> bool {
    dealer_hand.value() < DEALER_STAND_VALUE
}

/// Decides the winner and payout of a finished round.
///
/// Rules are checked in order and the first match wins:
/// 1. A busted player loses, whatever the dealer holds.
/// 2. A busted dealer loses; a player natural is still paid 3:2.
/// 3. Two naturals push.
/// 4. A lone player natural wins 3:2.
/// 5. A lone dealer natural wins.
/// 6. Otherwise the higher value wins and equal values push.
#[must_use]
pub fn determine_result(player_hand: &Hand, dealer_hand: &Hand) -> GameResult {
    if player_hand.is_busted() {
        return GameResult::new(Winner::Dealer, PayoutType::Standard);
    }

    let player_blackjack = player_hand.is_natural_blackjack();

    if dealer_hand.is_busted() {
        let payout_type = if player_blackjack {
            PayoutType::Blackjack
        } else {
            PayoutType::Standard
        };
        return GameResult::new(Winner::Player, payout_type);
    }

    match (player_blackjack, dealer_hand.is_natural_blackjack()) {
        (true, true) => push(),
        (true, false) => GameResult::new(Winner::Player, PayoutType::Blackjack),
        (false, true) => GameResult::new(Winner::Dealer, PayoutType::Standard),
        (false, false) => compare_values(player_hand.value(), dealer_hand.value()),
    }
}

fn compare_values(player_value: u8, dealer_value: u8) -> GameResult {
    match player_value.cmp(&dealer_value) {
        core::cmp::Ordering::Greater => GameResult::new(Winner::Player, PayoutType::Standard),
        core::cmp::Ordering::Less => GameResult::new(Winner::Dealer, PayoutType::Standard),
        core::cmp::Ordering::Equal => push(),
    }
}

const fn push() -> GameResult {
    GameResult::new(Winner::Tie, PayoutType::Tie)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Card, Rank, Suit};

    fn hand_of(ranks: &[Rank]) -> Hand {
        let mut hand = Hand::new();
        for (index, &rank) in ranks.iter().enumerate() {
            hand.add_card(Card::new(rank, Suit::ALL[index % 4]));
        }
        hand
    }

    fn all_facts() -> impl Iterator<Item = TurnFacts> {
        (0u8..8).map(|bits| TurnFacts {
            player_stands: bits & 1 != 0,
            player_busts: bits & 2 != 0,
            dealer_finished: bits & 4 != 0,
        })
    }

    #[test]
    fn transitions_match_the_table_for_every_input() {
        for state in GameState::ALL {
            for facts in all_facts() {
                let expected = match state {
                    GameState::AwaitingBet => GameState::DealingCards,
                    GameState::DealingCards => GameState::PlayerTurn,
                    GameState::PlayerTurn if facts.player_busts || facts.player_stands => {
                        GameState::DealerTurn
                    }
                    GameState::PlayerTurn => GameState::PlayerTurn,
                    GameState::DealerTurn if facts.dealer_finished => GameState::RoundOver,
                    GameState::DealerTurn => GameState::DealerTurn,
                    GameState::RoundOver => GameState::AwaitingBet,
                    GameState::GameOver => GameState::GameOver,
                };
                assert_eq!(next_state(state, facts), expected, "{state:?} {facts:?}");
            }
        }
    }

    #[test]
    fn game_over_is_never_entered_by_the_table() {
        for state in GameState::ALL {
            if state == GameState::GameOver {
                continue;
            }
            for facts in all_facts() {
                assert_ne!(next_state(state, facts), GameState::GameOver);
            }
        }
    }

    #[test]
    fn dealer_hits_below_17_and_stands_on_soft_17() {
        assert!(should_dealer_hit(&hand_of(&[Rank::Ten, Rank::Six])));
        assert!(!should_dealer_hit(&hand_of(&[Rank::Ten, Rank::Seven])));
        assert!(!should_dealer_hit(&hand_of(&[Rank::Ace, Rank::Six])));
        assert!(should_dealer_hit(&hand_of(&[Rank::Ace, Rank::Five])));
    }

    #[test]
    fn player_bust_loses_even_against_dealer_bust() {
        let player = hand_of(&[Rank::King, Rank::Queen, Rank::Two]);
        let dealer = hand_of(&[Rank::Ten, Rank::Eight]);
        assert_eq!(
            determine_result(&player, &dealer),
            GameResult::new(Winner::Dealer, PayoutType::Standard)
        );

        let dealer_bust = hand_of(&[Rank::Ten, Rank::Six, Rank::Nine]);
        assert_eq!(
            determine_result(&player, &dealer_bust),
            GameResult::new(Winner::Dealer, PayoutType::Standard)
        );
    }

    #[test]
    fn dealer_bust_pays_standard_without_natural() {
        let player = hand_of(&[Rank::Ten, Rank::Seven]);
        let dealer = hand_of(&[Rank::Ten, Rank::Four, Rank::Nine]);
        assert_eq!(
            determine_result(&player, &dealer),
            GameResult::new(Winner::Player, PayoutType::Standard)
        );
    }

    #[test]
    fn player_natural_beats_twenty() {
        let player = hand_of(&[Rank::Ace, Rank::Jack]);
        let dealer = hand_of(&[Rank::King, Rank::Queen]);
        assert_eq!(
            determine_result(&player, &dealer),
            GameResult::new(Winner::Player, PayoutType::Blackjack)
        );
    }

    #[test]
    fn two_naturals_push() {
        let player = hand_of(&[Rank::Ace, Rank::Jack]);
        let dealer = hand_of(&[Rank::Ten, Rank::Ace]);
        assert_eq!(
            determine_result(&player, &dealer),
            GameResult::new(Winner::Tie, PayoutType::Tie)
        );
    }

    #[test]
    fn dealer_natural_beats_three_card_21() {
        let player = hand_of(&[Rank::Seven, Rank::Seven, Rank::Seven]);
        let dealer = hand_of(&[Rank::Ace, Rank::King]);
        assert_eq!(
            determine_result(&player, &dealer),
            GameResult::new(Winner::Dealer, PayoutType::Standard)
        );
    }

    #[test]
    fn higher_value_wins_and_equal_values_push() {
        let twenty = hand_of(&[Rank::King, Rank::Queen]);
        let other_twenty = hand_of(&[Rank::Jack, Rank::Ten]);
        let nineteen = hand_of(&[Rank::Ten, Rank::Nine]);

        assert_eq!(
            determine_result(&twenty, &other_twenty),
            GameResult::new(Winner::Tie, PayoutType::Tie)
        );
        assert_eq!(
            determine_result(&twenty, &nineteen),
            GameResult::new(Winner::Player, PayoutType::Standard)
        );
        assert_eq!(
            determine_result(&nineteen, &twenty),
            GameResult::new(Winner::Dealer, PayoutType::Standard)
        );
    }
}
