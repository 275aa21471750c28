/// Where a combinator is in its lifecycle.
///
/// ```text
/// Active --(exhausted or unrecovered error)--> Exhausted
/// Active | Exhausted --(close)--> Closed
/// ```
///
/// Once a combinator has left `Active` it no longer forwards calls: resuming
/// signals exhaustion and raising hands the error straight back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum State {
    /// Rounds are forwarded to the inner steppers.
    #[default]
    Active,
    /// A round ended in exhaustion or an error nothing recovered from.
    Exhausted,
    /// The combinator was closed. This state is terminal.
    Closed,
}

impl State {
    /// Returns `true` while rounds are still being forwarded.
    pub fn is_active(&self) -> bool {
        matches!(self, State::Active)
    }
}
