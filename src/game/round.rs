use crate::error::RoundError;
use crate::result::{Outcome, RoundEvent};

use super::{Decision, DecisionSource, EventSink, Game, RoundState};

impl Game {
    /// Returns whether the house may take another card: its hand value is
    /// at or below the player's current value and at or below 16.
    ///
    /// This same predicate also gates the player's turn loop, so the
    /// house's hand (hidden card included) decides whether the player is
    /// offered more cards. That coupling is kept deliberately.
    #[must_use]
    pub fn house_may_draw(&self) -> bool {
        let house_value = self.house.hand.value();
        house_value <= self.player.hand.value() && house_value <= 16
    }

    /// Evaluates the round outcome from the current hands, in fixed
    /// priority order so exactly one variant applies:
    ///
    /// 1. Player wins on a natural blackjack, or with a non-bust value
    ///    above the house's, or when the house busts.
    /// 2. House wins on its own natural blackjack, or when the player
    ///    busts, or with a non-bust value above the player's.
    /// 3. Push otherwise.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        let player_value = self.player.hand.value();
        let house_value = self.house.hand.value();

        if self.player.hand.is_blackjack()
            || (player_value <= 21 && (player_value > house_value || house_value > 21))
        {
            Outcome::PlayerWin
        } else if self.house.hand.is_blackjack()
            || player_value > 21
            || (player_value < house_value && house_value <= 21)
        {
            Outcome::HouseWin
        } else {
            Outcome::Push
        }
    }

    /// Plays a dealt round to completion: player decisions, house
    /// auto-play, settlement, and cleanup. Decisions are pulled from
    /// `decisions`; table state is reported through `sink`.
    ///
    /// A natural blackjack on the deal settles immediately as a player
    /// win without the house acting.
    ///
    /// # Errors
    ///
    /// Returns an error if no round has been dealt.
    pub fn play_round<D, S>(&mut self, decisions: &mut D, sink: &mut S) -> Result<Outcome, RoundError>
    where
        D: DecisionSource + ?Sized,
        S: EventSink + ?Sized,
    {
        if self.state != RoundState::PlayerTurn {
            return Err(RoundError::InvalidState);
        }

        if self.player.hand.is_blackjack() {
            sink.on_event(RoundEvent::NaturalTwentyOne);
            return Ok(self.settle(sink));
        }

        // Re-evaluated against the current hands every iteration; the
        // player is only offered a card while the house could still draw.
        while self.player.hand.value() <= 21 && self.house_may_draw() {
            sink.on_event(RoundEvent::PlayerTurn {
                hand: self.player.hand.clone(),
                value: self.player.hand.value(),
            });

            match decisions.hit_or_stand() {
                Decision::Hit => {
                    if let Some(card) = self.deck.draw(false) {
                        self.player.hand.add_card(card);
                        sink.on_event(RoundEvent::PlayerDrew {
                            card,
                            hand: self.player.hand.clone(),
                            value: self.player.hand.value(),
                        });
                    } else {
                        sink.on_event(RoundEvent::DeckExhausted);
                        break;
                    }

                    if self.player.hand.is_blackjack() {
                        sink.on_event(RoundEvent::NaturalTwentyOne);
                        return Ok(self.settle(sink));
                    }
                }
                Decision::Stand => break,
            }
        }

        self.house_play(sink);
        Ok(self.settle(sink))
    }

    /// Reveals the house's hidden card and draws while the house-may-draw
    /// predicate holds, stopping early if the deck runs out.
    fn house_play<S: EventSink + ?Sized>(&mut self, sink: &mut S) {
        self.state = RoundState::HouseTurn;
        self.house.hand.reveal_all();

        while self.house_may_draw() {
            match self.deck.draw(false) {
                Some(card) => self.house.hand.add_card(card),
                None => break,
            }
        }

        sink.on_event(RoundEvent::HouseShowdown {
            hand: self.house.hand.clone(),
            value: self.house.hand.value(),
        });
    }

    /// Applies the outcome to the chip balance, reports it, and clears the
    /// table for the next round.
    fn settle<S: EventSink + ?Sized>(&mut self, sink: &mut S) -> Outcome {
        self.state = RoundState::Settlement;

        let player_value = self.player.hand.value();
        let house_value = self.house.hand.value();
        let outcome = self.outcome();

        match outcome {
            Outcome::PlayerWin => self.player.add_chips(self.bet),
            Outcome::HouseWin => self.player.take_chips(self.bet),
            Outcome::Push => {}
        }

        sink.on_event(RoundEvent::Settled {
            outcome,
            player_value,
            house_value,
        });

        self.player.hand.clear();
        self.house.hand.clear();
        self.bet = 0;
        self.state = RoundState::NotStarted;

        outcome
    }
}
