//! Login session model

/// Who, if anyone, is logged in for this process
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated(String),
}

impl Session {
    /// Build from a persisted slot value; blank means anonymous.
    pub fn from_slot(slot: Option<String>) -> Self {
        match slot {
            Some(username) if !username.trim().is_empty() => {
                Session::Authenticated(username.trim().to_string())
            }
            _ => Session::Anonymous,
        }
    }

    pub fn current_user(&self) -> Option<&str> {
        match self {
            Session::Authenticated(username) => Some(username),
            Session::Anonymous => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_slot() {
        assert_eq!(Session::from_slot(None), Session::Anonymous);
        assert_eq!(Session::from_slot(Some("   ".into())), Session::Anonymous);
        assert_eq!(
            Session::from_slot(Some("alice\n".into())),
            Session::Authenticated("alice".into())
        );
    }

    #[test]
    fn test_queries() {
        let session = Session::Authenticated("bob".into());
        assert!(session.is_authenticated());
        assert_eq!(session.current_user(), Some("bob"));
        assert!(!Session::default().is_authenticated());
        assert_eq!(Session::default().current_user(), None);
    }
}
