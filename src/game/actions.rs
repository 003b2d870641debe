use tracing::{debug, info};

use crate::card::{Card, Suit};
use crate::error::{ActionError, DrawError, PlayError, StateError};
use crate::opponent::Action;
use crate::options::DrawPolicy;
use crate::result::{Actor, DrawOutcome, PlayOutcome};

use super::{GameState, Status};

impl GameState {
    fn ensure_play_turn(&self, actor: Actor) -> Result<(), PlayError> {
        if self.status != Status::InProgress {
            return Err(PlayError::InvalidState);
        }

        if self.turn != actor {
            return Err(PlayError::NotYourTurn);
        }

        Ok(())
    }

    fn ensure_draw_turn(&self, actor: Actor) -> Result<(), DrawError> {
        if self.status != Status::InProgress {
            return Err(DrawError::InvalidState);
        }

        if self.turn != actor {
            return Err(DrawError::NotYourTurn);
        }

        Ok(())
    }

    fn declare(&mut self, suit: Suit) {
        self.active_suit = suit;
        self.status = Status::InProgress;
        self.turn = self.turn.other();
    }

    /// Starts a dealt game.
    ///
    /// # Errors
    ///
    /// Returns an error if the game has already been started.
    pub fn start(&self) -> Result<Self, StateError> {
        if self.status != Status::NotStarted {
            return Err(StateError::AlreadyStarted);
        }

        let mut next = self.clone();
        next.status = Status::InProgress;
        debug!("game started");
        Ok(next)
    }

    /// Plays `card` from `actor`'s hand onto the discard pile.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in progress, it is not `actor`'s
    /// turn, the card is not in their hand, or the card is not playable.
    pub fn play_card(&self, card: Card, actor: Actor) -> Result<Self, PlayError> {
        self.play_card_with_outcome(card, actor).map(|(next, _)| next)
    }

    /// Like [`GameState::play_card`], also reporting what the play led to.
    ///
    /// Emptying the hand wins at once, even with a wild card. Otherwise a
    /// wild card leaves the turn with `actor` until a suit is chosen, and any
    /// other card sets the active suit and passes the turn.
    ///
    /// # Errors
    ///
    /// See [`GameState::play_card`].
    pub fn play_card_with_outcome(
        &self,
        card: Card,
        actor: Actor,
    ) -> Result<(Self, PlayOutcome), PlayError> {
        self.ensure_play_turn(actor)?;

        if !self.hand(actor).contains(card) {
            return Err(PlayError::CardNotInHand);
        }

        if !self.is_playable(card) {
            return Err(PlayError::NotPlayable);
        }

        let mut next = self.clone();
        next.hand_mut(actor).remove(card);
        next.discard_pile.push(card);
        debug!(%actor, %card, remaining = next.hand(actor).len(), "card played");

        if next.hand(actor).is_empty() {
            if !card.is_wild() {
                next.active_suit = card.suit;
                next.turn = actor.other();
            }
            next.status = Status::won_by(actor);
            info!(winner = %actor, "game over");
            return Ok((next, PlayOutcome::Won(actor)));
        }

        if card.is_wild() {
            next.status = Status::AwaitingSuit;
            return Ok((next, PlayOutcome::AwaitingSuit));
        }

        next.active_suit = card.suit;
        next.turn = actor.other();
        Ok((next, PlayOutcome::Continue))
    }

    /// Plays a wild card and declares `suit` in one step.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError::NotWild`] for a non-wild card, otherwise the same
    /// errors as [`GameState::play_card`].
    pub fn play_wild(
        &self,
        card: Card,
        suit: Suit,
        actor: Actor,
    ) -> Result<(Self, PlayOutcome), PlayError> {
        if !card.is_wild() {
            return Err(PlayError::NotWild);
        }

        let (mut next, outcome) = self.play_card_with_outcome(card, actor)?;
        if outcome != PlayOutcome::AwaitingSuit {
            return Ok((next, outcome));
        }

        next.declare(suit);
        debug!(%actor, %suit, "suit declared");
        Ok((next, PlayOutcome::SuitDeclared(suit)))
    }

    /// Declares the active suit after a wild card and passes the turn.
    ///
    /// # Errors
    ///
    /// Returns an error if no wild card is waiting for a suit.
    pub fn choose_suit(&self, suit: Suit) -> Result<Self, StateError> {
        if self.status != Status::AwaitingSuit {
            return Err(StateError::NotAwaitingSuit);
        }

        let mut next = self.clone();
        next.declare(suit);
        debug!(actor = %self.turn, %suit, "suit chosen");
        Ok(next)
    }

    /// Draws the top card of the deck into `actor`'s hand.
    ///
    /// # Errors
    ///
    /// See [`GameState::draw_card_with_outcome`].
    pub fn draw_card(&self, actor: Actor) -> Result<Self, DrawError> {
        self.draw_card_with_outcome(actor).map(|(next, _)| next)
    }

    /// Like [`GameState::draw_card`], also reporting the drawn card.
    ///
    /// With [`DrawPolicy::Hold`] the actor keeps the turn after drawing. With
    /// [`DrawPolicy::PassIfUnplayable`] the turn passes when the drawn card
    /// cannot be played. Drawing from an empty deck skips the actor's turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in progress or it is not
    /// `actor`'s turn.
    pub fn draw_card_with_outcome(&self, actor: Actor) -> Result<(Self, DrawOutcome), DrawError> {
        self.ensure_draw_turn(actor)?;

        let mut next = self.clone();
        let Some(card) = next.deck.pop() else {
            next.turn = actor.other();
            debug!(%actor, "deck empty, turn skipped");
            return Ok((next, DrawOutcome::Skipped));
        };

        next.hand_mut(actor).add_card(card);
        debug!(%actor, deck = next.deck.len(), "card drawn");

        if next.options.draw_policy == DrawPolicy::PassIfUnplayable && !next.is_playable(card) {
            next.turn = actor.other();
        }

        Ok((next, DrawOutcome::Drew(card)))
    }

    /// Passes `actor`'s turn when there is nothing left to draw.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in progress, it is not `actor`'s
    /// turn, or the deck still has cards.
    pub fn skip(&self, actor: Actor) -> Result<Self, DrawError> {
        self.ensure_draw_turn(actor)?;

        if !self.deck.is_empty() {
            return Err(DrawError::DeckNotEmpty);
        }

        let mut next = self.clone();
        next.turn = actor.other();
        debug!(%actor, "turn skipped");
        Ok(next)
    }

    /// Applies a decided [`Action`] for `actor` as a single transition.
    ///
    /// # Errors
    ///
    /// Returns the error of the underlying transition. A wild card sent as
    /// [`Action::PlayNonWild`] is rejected with [`PlayError::SuitRequired`].
    pub fn apply(&self, actor: Actor, action: Action) -> Result<Self, ActionError> {
        match action {
            Action::PlayNonWild(card) => {
                if card.is_wild() {
                    return Err(PlayError::SuitRequired.into());
                }
                Ok(self.play_card(card, actor)?)
            }
            Action::PlayWild(card, suit) => Ok(self.play_wild(card, suit, actor)?.0),
            Action::Draw => Ok(self.draw_card(actor)?),
            Action::Skip => Ok(self.skip(actor)?),
        }
    }
}
