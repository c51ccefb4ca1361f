//! Transition tables mapping `(state, event)` pairs to next states.

use super::state::{Event, State};

/// A fixed, deterministic transition table.
///
/// Each event moves the machine to exactly one target state, and is only
/// accepted from the states listed by [`sources`](TransitionTable::sources).
/// Implementations are pure: no side effects, same answer every time.
///
/// # Example
///
/// ```rust
/// use daycycle::core::TransitionTable;
/// use daycycle::routine::{Activity, DailyRoutine, RoutineEvent};
///
/// assert_eq!(
///     DailyRoutine::next(Activity::Normal, RoutineEvent::Study),
///     Some(Activity::Busy)
/// );
/// assert_eq!(DailyRoutine::next(Activity::Normal, RoutineEvent::Eat), None);
/// ```
pub trait TransitionTable: Send + Sync + 'static {
    type State: State;
    type Event: Event;

    /// Next state for `event` fired from `from`, or `None` if the event is
    /// not accepted there.
    fn next(from: Self::State, event: Self::Event) -> Option<Self::State>;

    /// States from which `event` is accepted, in table order.
    fn sources(event: Self::Event) -> &'static [Self::State];

    /// Whether `event` is accepted from `from`.
    fn accepts(from: Self::State, event: Self::Event) -> bool {
        Self::next(from, event).is_some()
    }

    /// Events accepted from `from`, in declaration order.
    fn events_from(from: Self::State) -> Vec<Self::Event> {
        Self::Event::ALL
            .iter()
            .copied()
            .filter(|event| Self::accepts(from, *event))
            .collect()
    }
}
