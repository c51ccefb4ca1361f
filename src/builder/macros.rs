//! Macros for declaring state and event enums.

#[doc(hidden)]
#[macro_export]
macro_rules! __token_enum {
    (
        $trait_path:path;
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $token:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                #[serde(rename = $token)]
                $variant
            ),*
        }

        impl $trait_path for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),*];

            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => $token),*
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(<Self as $trait_path>::name(self))
            }
        }
    };
}

/// Generate a `State` implementation for a fieldless enum.
///
/// Each variant is paired with its token name, which is also its serde
/// representation.
///
/// # Example
///
/// ```
/// use daycycle::core::State;
/// use daycycle::state_enum;
///
/// state_enum! {
///     pub enum Phase {
///         Draft => "draft",
///         Review => "review",
///         Published => "published",
///     }
/// }
///
/// assert_eq!(Phase::Review.name(), "review");
/// assert_eq!(Phase::from_name("published"), Some(Phase::Published));
/// ```
#[macro_export]
macro_rules! state_enum {
    ($($body:tt)*) => {
        $crate::__token_enum! { $crate::core::State; $($body)* }
    };
}

/// Generate an `Event` implementation for a fieldless enum.
///
/// # Example
///
/// ```
/// use daycycle::core::Event;
/// use daycycle::event_enum;
///
/// event_enum! {
///     pub enum Action {
///         Submit => "submit",
///         Approve => "approve",
///     }
/// }
///
/// assert_eq!(Action::from_name("submit"), Some(Action::Submit));
/// assert_eq!(Action::Approve.to_string(), "approve");
/// ```
#[macro_export]
macro_rules! event_enum {
    ($($body:tt)*) => {
        $crate::__token_enum! { $crate::core::Event; $($body)* }
    };
}
