//! Relative URI construction.
//!
//! Every endpoint method builds its path through `Route` so the joining,
//! validation, and encoding rules live in one place. Paths are relative to
//! the client's base URL, carry no trailing slash, and substitute values
//! into the documented templates byte for byte.

use crate::client::{guard, Result};

/// The two interchangeable ways a repository is addressed in the v3 API:
/// by `owner`/`name` pair or by its numeric id.
#[derive(Clone, Copy, Debug)]
pub enum RepoTarget<'a> {
    OwnerRepo { owner: &'a str, repo: &'a str },
    RepositoryId(u64),
}

impl<'a> RepoTarget<'a> {
    pub fn owner_repo(owner: &'a str, repo: &'a str) -> Self {
        RepoTarget::OwnerRepo { owner, repo }
    }

    pub fn repository_id(id: u64) -> Self {
        RepoTarget::RepositoryId(id)
    }
}

#[derive(Debug)]
pub(crate) struct Route {
    path: String,
}

impl Route {
    /// Start from a fixed root resource, e.g. `issues`.
    pub(crate) fn root(resource: &'static str) -> Self {
        Self {
            path: resource.to_owned(),
        }
    }

    /// Start from `repos/{owner}/{repo}` or `repositories/{id}` depending on
    /// the addressing mode. Validates the target before any segment lands in
    /// the path.
    pub(crate) fn repo(target: RepoTarget<'_>) -> Result<Self> {
        match target {
            RepoTarget::OwnerRepo { owner, repo } => {
                guard::non_blank(owner, "owner")?;
                guard::non_blank(repo, "repo")?;
                Ok(Self {
                    path: format!(
                        "repos/{}/{}",
                        urlencoding::encode(owner),
                        urlencoding::encode(repo)
                    ),
                })
            }
            RepoTarget::RepositoryId(id) => {
                guard::positive(id, "repository_id")?;
                Ok(Self {
                    path: format!("repositories/{}", id),
                })
            }
        }
    }

    /// Start from `orgs/{org}`.
    pub(crate) fn org(org: &str) -> Result<Self> {
        guard::non_blank(org, "org")?;
        Ok(Self {
            path: format!("orgs/{}", urlencoding::encode(org)),
        })
    }

    /// Append a literal segment from the API's routing table, e.g. `rerun`.
    pub(crate) fn literal(mut self, segment: &'static str) -> Self {
        self.path.push('/');
        self.path.push_str(segment);
        self
    }

    /// Append a caller-supplied string segment. Validated, then
    /// percent-encoded so values containing `/` or other reserved
    /// characters cannot splice extra path segments.
    pub(crate) fn arg(mut self, value: &str, name: &'static str) -> Result<Self> {
        guard::non_blank(value, name)?;
        self.path.push('/');
        self.path.push_str(&urlencoding::encode(value));
        Ok(self)
    }

    /// Append a numeric identifier segment, rendered as decimal.
    pub(crate) fn id(mut self, id: u64, name: &'static str) -> Result<Self> {
        guard::positive(id, name)?;
        self.path.push('/');
        self.path.push_str(&id.to_string());
        Ok(self)
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.path
    }
}

#[cfg(test)]
mod test {
    use super::{RepoTarget, Route};
    use crate::client::Error;

    #[test]
    fn owner_repo_prefix() {
        let route = Route::repo(RepoTarget::owner_repo("fake", "repo"))
            .unwrap()
            .literal("actions")
            .literal("jobs")
            .id(123, "job_id")
            .unwrap();
        assert_eq!(route.as_str(), "repos/fake/repo/actions/jobs/123");
    }

    #[test]
    fn repository_id_prefix() {
        let route = Route::repo(RepoTarget::repository_id(1))
            .unwrap()
            .literal("actions")
            .literal("jobs")
            .id(123, "job_id")
            .unwrap();
        assert_eq!(route.as_str(), "repositories/1/actions/jobs/123");
    }

    #[test]
    fn literal_suffix() {
        let route = Route::repo(RepoTarget::owner_repo("fake", "repo"))
            .unwrap()
            .literal("actions")
            .literal("jobs")
            .id(123, "job_id")
            .unwrap()
            .literal("rerun");
        assert_eq!(route.as_str(), "repos/fake/repo/actions/jobs/123/rerun");
    }

    #[test]
    fn environment_secret_template() {
        let route = Route::repo(RepoTarget::repository_id(1))
            .unwrap()
            .literal("environments")
            .arg("production", "environment")
            .unwrap()
            .literal("secrets")
            .arg("TOKEN", "secret_name")
            .unwrap();
        assert_eq!(
            route.as_str(),
            "repositories/1/environments/production/secrets/TOKEN"
        );
    }

    #[test]
    fn org_root() {
        let route = Route::org("org")
            .unwrap()
            .literal("actions")
            .literal("runner-groups");
        assert_eq!(route.as_str(), "orgs/org/actions/runner-groups");
    }

    #[test]
    fn reserved_characters_are_encoded() {
        let route = Route::repo(RepoTarget::owner_repo("fake", "repo"))
            .unwrap()
            .literal("environments")
            .arg("staging/eu", "environment")
            .unwrap();
        assert_eq!(
            route.as_str(),
            "repos/fake/repo/environments/staging%2Feu"
        );
    }

    #[test]
    fn owner_is_checked_before_repo() {
        match Route::repo(RepoTarget::owner_repo("", "")) {
            Err(Error::BlankArgument("owner")) => {}
            other => panic!("{:?}", other),
        }
        match Route::repo(RepoTarget::owner_repo("fake", "\t")) {
            Err(Error::BlankArgument("repo")) => {}
            other => panic!("{:?}", other),
        }
    }

    #[test]
    fn zero_repository_id_is_rejected() {
        match Route::repo(RepoTarget::repository_id(0)) {
            Err(Error::InvalidId("repository_id")) => {}
            other => panic!("{:?}", other),
        }
    }
}
