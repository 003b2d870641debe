//! Game configuration options.

/// What happens to the turn after a successful draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum DrawPolicy {
    /// The drawer keeps the turn and may play or draw again.
    #[default]
    Hold,
    /// The drawer keeps the turn only if the drawn card is playable;
    /// otherwise the turn passes.
    PassIfUnplayable,
}

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use eights::{DrawPolicy, GameOptions};
///
/// let options = GameOptions::default()
///     .with_auto_start(true)
///     .with_draw_policy(DrawPolicy::PassIfUnplayable);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameOptions {
    /// Whether a fresh deal starts in progress instead of waiting for
    /// an explicit start.
    pub auto_start: bool,
    /// Turn handling after a draw.
    pub draw_policy: DrawPolicy,
}

impl GameOptions {
    /// Sets whether a deal starts the game immediately.
    ///
    /// # Example
    ///
    /// ```
    /// use eights::GameOptions;
    ///
    /// let options = GameOptions::default().with_auto_start(true);
    /// assert!(options.auto_start);
    /// ```
    #[must_use]
    pub const fn with_auto_start(mut self, auto_start: bool) -> Self {
        self.auto_start = auto_start;
        self
    }

    /// Sets the draw policy.
    ///
    /// # Example
    ///
    /// ```
    /// use eights::{DrawPolicy, GameOptions};
    ///
    /// let options = GameOptions::default().with_draw_policy(DrawPolicy::PassIfUnplayable);
    /// assert_eq!(options.draw_policy, DrawPolicy::PassIfUnplayable);
    /// ```
    #[must_use]
    pub const fn with_draw_policy(mut self, policy: DrawPolicy) -> Self {
        self.draw_policy = policy;
        self
    }
}
