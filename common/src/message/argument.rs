use std::fmt;

use serde::{Deserialize, Serialize};

/// Positional argument substituted into a resolved message.
///
/// Arguments keep value semantics so that two [`ResultMessage`]s carrying the
/// same code and arguments compare equal.
///
/// [`ResultMessage`]: super::ResultMessage
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MessageArgument {
    /// Free-form text.
    Text(String),
    /// Signed integer.
    Integer(i64),
    /// Boolean flag.
    Boolean(bool),
}

impl fmt::Display for MessageArgument {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(value) => formatter.write_str(value),
            Self::Integer(value) => write!(formatter, "{value}"),
            Self::Boolean(value) => write!(formatter, "{value}"),
        }
    }
}

impl From<&str> for MessageArgument {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for MessageArgument {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for MessageArgument {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

macro_rules! integer_argument {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for MessageArgument {
                fn from(value: $ty) -> Self {
                    Self::Integer(i64::from(value))
                }
            }
        )*
    };
}

integer_argument!(i8, i16, i32, i64, u8, u16, u32);
