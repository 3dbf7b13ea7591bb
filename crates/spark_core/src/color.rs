//! Opaque color tokens carried by particles

use std::fmt;
use std::sync::Arc;

/// A color as the caller names it (usually a CSS color string).
///
/// The engine never looks inside; render backends resolve it. Cloning is a
/// reference count bump, so a burst shares one allocation across all of
/// its particles.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ColorToken(Arc<str>);

impl ColorToken {
    pub fn new(token: impl AsRef<str>) -> Self {
        Self(Arc::from(token.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ColorToken {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl From<String> for ColorToken {
    fn from(token: String) -> Self {
        Self(Arc::from(token))
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_storage() {
        let a = ColorToken::from("#ff0000");
        let b = a.clone();
        assert!(Arc::ptr_eq(&a.0, &b.0));
        assert_eq!(b.as_str(), "#ff0000");
    }

    #[test]
    fn tokens_are_not_normalized() {
        assert_ne!(ColorToken::from("#FF0000"), ColorToken::from("#ff0000"));
        assert_eq!(ColorToken::from("red".to_string()).to_string(), "red");
    }
}
