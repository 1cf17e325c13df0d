//! Precondition checks shared by every endpoint method.
//!
//! Each check either returns silently or fails with a typed `Error` naming
//! the offending parameter. Checks run in declared parameter order, before
//! any request is built, so an invalid call never reaches the network.

use crate::client::{Error, Result};

/// The string must contain at least one non-whitespace character.
pub(crate) fn non_blank(value: &str, name: &'static str) -> Result<()> {
    if value.trim().is_empty() {
        Err(Error::BlankArgument(name))
    } else {
        Ok(())
    }
}

/// The id must be non-zero; `0` never addresses a real resource.
pub(crate) fn positive(id: u64, name: &'static str) -> Result<()> {
    if id == 0 {
        Err(Error::InvalidId(name))
    } else {
        Ok(())
    }
}

/// The collection must contain at least one element.
pub(crate) fn non_empty<T>(values: &[T], name: &'static str) -> Result<()> {
    if values.is_empty() {
        Err(Error::EmptyList(name))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::{non_blank, non_empty, positive};
    use crate::client::Error;

    #[test]
    fn non_blank_accepts_text() {
        assert!(non_blank("octocat", "owner").is_ok());
    }

    #[test]
    fn non_blank_rejects_empty_and_whitespace() {
        for value in &["", " ", "\t", "\n", "\n\r", " \t \n"] {
            match non_blank(value, "owner") {
                Err(Error::BlankArgument("owner")) => {}
                other => panic!("{:?} for input {:?}", other, value),
            }
        }
    }

    #[test]
    fn positive_rejects_zero() {
        match positive(0, "repository_id") {
            Err(Error::InvalidId("repository_id")) => {}
            other => panic!("{:?}", other),
        }
        assert!(positive(1, "repository_id").is_ok());
    }

    #[test]
    fn non_empty_rejects_empty_slice() {
        match non_empty::<&str>(&[], "assignees") {
            Err(Error::EmptyList("assignees")) => {}
            other => panic!("{:?}", other),
        }
        assert!(non_empty(&["hubot"], "assignees").is_ok());
    }
}
