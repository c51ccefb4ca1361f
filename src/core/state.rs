//! Token traits for the closed sets of states and events.
//!
//! States and events travel across the engine boundary as plain string
//! tokens. These traits tie each token to a variant of a closed enum so the
//! transition logic can match on variants instead of comparing strings.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// Implementors are small fieldless enums. Every variant has a stable,
/// unique token name used at the string boundary.
///
/// # Example
///
/// ```rust
/// use daycycle::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
/// enum Door {
///     Open,
///     Closed,
/// }
///
/// impl State for Door {
///     const ALL: &'static [Self] = &[Self::Open, Self::Closed];
///
///     fn name(&self) -> &'static str {
///         match self {
///             Self::Open => "open",
///             Self::Closed => "closed",
///         }
///     }
/// }
///
/// assert_eq!(Door::from_name("closed"), Some(Door::Closed));
/// assert_eq!(Door::from_name("ajar"), None);
/// ```
pub trait State:
    Copy + Eq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync + 'static
{
    /// Every variant, in declaration order.
    const ALL: &'static [Self];

    /// Token name of this state.
    fn name(&self) -> &'static str;

    /// Look up the variant whose token name is `name`.
    ///
    /// Returns `None` for any token outside the closed set.
    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.name() == name)
    }
}

/// Trait for events that drive transitions.
///
/// Mirrors [`State`]: a closed enum with one token name per variant.
pub trait Event:
    Copy + Eq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync + 'static
{
    /// Every variant, in declaration order.
    const ALL: &'static [Self];

    /// Token name of this event.
    fn name(&self) -> &'static str;

    /// Look up the variant whose token name is `name`.
    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|e| e.name() == name)
    }
}
