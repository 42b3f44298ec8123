//! Name newtypes accepted by the facade services.

use serde::{Deserialize, Serialize};

macro_rules! name_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// The name as a single percent-encoded path segment.
            pub(crate) fn encoded(&self) -> String {
                crate::util::url::encode_segment(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self::new(value)
            }
        }

        impl From<&String> for $name {
            fn from(value: &String) -> Self {
                Self::new(value.as_str())
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

name_type!(
    /// A top-level job name.
    JobName
);
name_type!(
    /// A view name.
    ViewName
);
name_type!(
    /// A computer (node) display name. The built-in node is `(master)` or `(built-in)`.
    ComputerName
);
name_type!(
    /// A label expression atom, e.g. `linux`.
    LabelName
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_encode_as_one_segment() {
        assert_eq!(JobName::from("my job").encoded(), "my%20job");
        assert_eq!(ViewName::from("a/b").encoded(), "a%2Fb");
        assert_eq!(LabelName::from("linux&&x64").encoded(), "linux%26%26x64");
    }
}
