use serde::{Deserialize, Serialize};
use std::fmt;

use super::ContentError;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Creates a new identifier, rejecting blank values.
            ///
            /// # Errors
            ///
            /// Returns `ContentError::EmptyId` if the value is blank.
            pub fn new(value: impl Into<String>) -> Result<Self, ContentError> {
                let value = value.into();
                if value.trim().is_empty() {
                    return Err(ContentError::EmptyId);
                }
                Ok(Self(value))
            }

            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = ContentError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> String {
                id.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({:?})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(
    /// Lookup key of a lesson document.
    LessonId
);

string_id!(
    /// Lookup key of a quiz bank (e.g. `grammar`).
    QuizCategory
);

string_id!(
    /// Identifier shared by a tab button and the pane it shows.
    TabId
);
