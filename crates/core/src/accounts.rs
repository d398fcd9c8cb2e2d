//! Account registration and login

use tracing::{info, instrument, warn};

use crate::error::{Error, Result};
use crate::hashing::{hash_password, verify_password};
use crate::models::Session;
use crate::storage::{SessionRepository, UserRepository};

/// Create an account. Does not log the new user in.
///
/// Usernames must be non-blank and carry no surrounding whitespace, since
/// the session slot stores them trimmed and treats blank as logged out.
#[instrument(skip(repo, password))]
pub fn register<R: UserRepository + ?Sized>(repo: &R, username: &str, password: &str) -> Result<()> {
    validate_username(username)?;
    repo.create_user(username, &hash_password(password))?;
    info!("Account created");
    Ok(())
}

/// Log in, replacing the session on success.
///
/// Unknown usernames and wrong passwords both fail with
/// `InvalidCredentials`; the session is left untouched on failure.
#[instrument(skip(repo, session, password))]
pub fn login<R>(repo: &R, session: &mut Session, username: &str, password: &str) -> Result<()>
where
    R: UserRepository + SessionRepository + ?Sized,
{
    if username.trim().is_empty() {
        warn!("Login rejected");
        return Err(Error::InvalidCredentials);
    }

    let verified = repo
        .find_digest(username)?
        .is_some_and(|digest| verify_password(password, &digest));

    if !verified {
        warn!("Login rejected");
        return Err(Error::InvalidCredentials);
    }

    repo.save_session(username)?;
    *session = Session::Authenticated(username.to_string());
    info!("Logged in");
    Ok(())
}

/// A username the session slot can hold unchanged
pub fn validate_username(username: &str) -> Result<()> {
    if username.trim().is_empty() {
        return Err(Error::InvalidInput("username must not be blank".into()));
    }
    if username.trim() != username {
        return Err(Error::InvalidInput(
            "username must not start or end with whitespace".into(),
        ));
    }
    Ok(())
}

/// Log out. Safe to call when nobody is logged in.
#[instrument(skip(repo, session))]
pub fn logout<R: SessionRepository + ?Sized>(repo: &R, session: &mut Session) -> Result<()> {
    repo.clear_session()?;
    *session = Session::Anonymous;
    Ok(())
}

/// Session stored in the slot, dropped if its user no longer exists.
pub fn restore_session<R>(repo: &R) -> Result<Session>
where
    R: UserRepository + SessionRepository + ?Sized,
{
    let session = Session::from_slot(repo.load_session()?);

    if let Some(username) = session.current_user() {
        if repo.find_digest(username)?.is_none() {
            warn!(username, "Session refers to an unknown user, clearing it");
            repo.clear_session()?;
            return Ok(Session::Anonymous);
        }
    }

    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Storage;
    use tempfile::tempdir;

    #[test]
    fn test_register_then_login() {
        let dir = tempdir().unwrap();
        let storage = Storage::in_dir(dir.path());
        let mut session = Session::Anonymous;

        register(&storage, "alice", "secret").unwrap();
        assert_eq!(session, Session::Anonymous);

        login(&storage, &mut session, "alice", "secret").unwrap();
        assert_eq!(session.current_user(), Some("alice"));
        assert_eq!(storage.load_session().unwrap().as_deref(), Some("alice"));
    }

    #[test]
    fn test_register_stores_digest() {
        let dir = tempdir().unwrap();
        let storage = Storage::in_dir(dir.path());

        register(&storage, "alice", "secret").unwrap();
        assert_eq!(
            storage.find_digest("alice").unwrap(),
            Some(hash_password("secret"))
        );
    }

    #[test]
    fn test_duplicate_register_keeps_digest() {
        let dir = tempdir().unwrap();
        let storage = Storage::in_dir(dir.path());

        register(&storage, "alice", "secret").unwrap();
        let err = register(&storage, "alice", "other").unwrap_err();
        assert!(matches!(err, Error::DuplicateUser(_)));
        assert_eq!(
            storage.find_digest("alice").unwrap(),
            Some(hash_password("secret"))
        );
    }

    #[test]
    fn test_bad_credentials_are_indistinguishable() {
        let dir = tempdir().unwrap();
        let storage = Storage::in_dir(dir.path());
        let mut session = Session::Anonymous;
        register(&storage, "alice", "secret").unwrap();

        let wrong_password = login(&storage, &mut session, "alice", "nope").unwrap_err();
        let unknown_user = login(&storage, &mut session, "mallory", "secret").unwrap_err();

        assert!(matches!(wrong_password, Error::InvalidCredentials));
        assert!(matches!(unknown_user, Error::InvalidCredentials));
        assert_eq!(wrong_password.to_string(), unknown_user.to_string());
        assert_eq!(session, Session::Anonymous);
        assert_eq!(storage.load_session().unwrap(), None);
    }

    #[test]
    fn test_register_rejects_blank_and_padded_names() {
        let dir = tempdir().unwrap();
        let storage = Storage::in_dir(dir.path());

        for name in ["", "   ", " alice", "alice\t"] {
            let err = register(&storage, name, "pw").unwrap_err();
            assert!(matches!(err, Error::InvalidInput(_)), "{name:?}");
        }
        assert!(storage.find_digest("").unwrap().is_none());
        assert!(storage.find_digest(" alice").unwrap().is_none());
    }

    #[test]
    fn test_blank_login_is_invalid_credentials() {
        let dir = tempdir().unwrap();
        let storage = Storage::in_dir(dir.path());
        // A store written by hand can still hold an empty name
        storage.create_user("", &hash_password("pw")).unwrap();
        let mut session = Session::Anonymous;

        let err = login(&storage, &mut session, "", "pw").unwrap_err();
        assert!(matches!(err, Error::InvalidCredentials));
        let err = login(&storage, &mut session, "  ", "pw").unwrap_err();
        assert!(matches!(err, Error::InvalidCredentials));
        assert_eq!(session, Session::Anonymous);
        assert_eq!(storage.load_session().unwrap(), None);
    }

    #[test]
    fn test_logout_idempotent() {
        let dir = tempdir().unwrap();
        let storage = Storage::in_dir(dir.path());
        let mut session = Session::Anonymous;
        register(&storage, "alice", "secret").unwrap();
        login(&storage, &mut session, "alice", "secret").unwrap();

        logout(&storage, &mut session).unwrap();
        assert_eq!(session, Session::Anonymous);
        logout(&storage, &mut session).unwrap();
        assert_eq!(session, Session::Anonymous);
        assert_eq!(storage.load_session().unwrap(), None);
    }

    #[test]
    fn test_restore_session() {
        let dir = tempdir().unwrap();
        let storage = Storage::in_dir(dir.path());
        register(&storage, "alice", "secret").unwrap();

        storage.save_session("alice").unwrap();
        assert_eq!(
            restore_session(&storage).unwrap(),
            Session::Authenticated("alice".into())
        );

        storage.save_session("ghost").unwrap();
        assert_eq!(restore_session(&storage).unwrap(), Session::Anonymous);
        assert_eq!(storage.load_session().unwrap(), None);
    }
}
