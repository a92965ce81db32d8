//! Turn log trait

use super::entities::Turn;

/// Read access to an ordered conversation history.
///
/// This is the only view of the session store the sentiment engine needs;
/// turns must be in chronological order.
pub trait TurnLog {
    /// All turns, oldest first
    fn all_turns(&self) -> &[Turn];

    /// Turns authored by the human party, oldest first
    fn human_turns(&self) -> impl Iterator<Item = &Turn> {
        self.all_turns().iter().filter(|t| t.is_human())
    }
}
