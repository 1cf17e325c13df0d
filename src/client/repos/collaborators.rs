use super::RepositoryClient;
use crate::{
    client::{
        accept,
        route::{RepoTarget, Route},
        ApiOptions, Response, Result,
    },
    User,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CollaboratorAffiliation {
    Outside,
    Direct,
    All,
}

#[derive(Debug, Default, Serialize)]
pub struct ListCollaboratorsOptions {
    /// Filter collaborators by their affiliation to the repository.
    /// Default: all
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affiliation: Option<CollaboratorAffiliation>,
}

// Implementation for the collaborators endpoint
// https://developer.github.com/v3/repos/collaborators/
impl RepositoryClient<'_> {
    /// List Collaborators
    ///
    /// GitHub API docs: https://developer.github.com/v3/repos/collaborators/#list-collaborators
    pub async fn list_collaborators(
        &self,
        repo: RepoTarget<'_>,
        options: Option<ListCollaboratorsOptions>,
        pagination: ApiOptions,
    ) -> Result<Vec<User>> {
        let url = Route::repo(repo)?.literal("collaborators");
        self.inner
            .get_all::<Vec<User>, _>(url.as_str(), accept::STABLE, options.as_ref(), pagination)
            .await
    }

    /// Check if a user is a collaborator. `204` means yes, `404` means no.
    ///
    /// GitHub API docs: https://developer.github.com/v3/repos/collaborators/#check-if-a-user-is-a-collaborator
    pub async fn is_collaborator(
        &self,
        repo: RepoTarget<'_>,
        username: &str,
    ) -> Result<Response<bool>> {
        let url = Route::repo(repo)?
            .literal("collaborators")
            .arg(username, "username")?;
        let response = self.inner.get(url.as_str(), accept::STABLE).send().await?;

        self.inner.boolean(response).await
    }

    /// Checks the repository permission of a collaborator. The possible repository permissions are
    /// admin, write, read, and none.
    ///
    /// GitHub API docs: https://developer.github.com/v3/repos/collaborators/#review-a-users-permission-level
    pub async fn get_collaborator_permission_level(
        &self,
        repo: RepoTarget<'_>,
        username: &str,
    ) -> Result<Response<String>> {
        #[derive(Debug, Deserialize)]
        struct PermissionLevelResponse {
            permission: String,
        }

        let url = Route::repo(repo)?
            .literal("collaborators")
            .arg(username, "username")?
            .literal("permission");
        let response = self.inner.get(url.as_str(), accept::STABLE).send().await?;

        let (pagination, rate, permission_level_response) = self
            .inner
            .json::<PermissionLevelResponse>(response)
            .await?
            .into_parts();

        Ok(Response::new(
            pagination,
            rate,
            permission_level_response.permission,
        ))
    }

    /// Add a user as a collaborator
    ///
    /// GitHub API docs: https://developer.github.com/v3/repos/collaborators/#add-user-as-a-collaborator
    pub async fn add_collaborator(
        &self,
        repo: RepoTarget<'_>,
        username: &str,
        permission: Option<&str>,
    ) -> Result<Response<()>> {
        #[derive(Debug, Serialize)]
        struct AddCollaboratorRequest<'a> {
            #[serde(skip_serializing_if = "Option::is_none")]
            permission: Option<&'a str>,
        }

        let url = Route::repo(repo)?
            .literal("collaborators")
            .arg(username, "username")?;
        let request = AddCollaboratorRequest { permission };
        let response = self
            .inner
            .put(url.as_str(), accept::STABLE)
            .json(&request)
            .send()
            .await?;

        self.inner.empty(response).await
    }

    /// Remove a collaborator
    ///
    /// GitHub API docs: https://developer.github.com/v3/repos/collaborators/#remove-user-as-a-collaborator
    pub async fn remove_collaborator(
        &self,
        repo: RepoTarget<'_>,
        username: &str,
    ) -> Result<Response<()>> {
        let url = Route::repo(repo)?
            .literal("collaborators")
            .arg(username, "username")?;
        let response = self
            .inner
            .delete(url.as_str(), accept::STABLE)
            .send()
            .await?;

        self.inner.empty(response).await
    }
}

#[cfg(test)]
mod test {
    use super::{CollaboratorAffiliation, ListCollaboratorsOptions};

    #[test]
    fn affiliation_query() {
        let options = ListCollaboratorsOptions {
            affiliation: Some(CollaboratorAffiliation::Direct),
        };
        assert_eq!(
            serde_urlencoded::to_string(&options).unwrap(),
            "affiliation=direct"
        );
    }

    #[test]
    fn default_options_compose_no_query() {
        let options = ListCollaboratorsOptions::default();
        assert_eq!(serde_urlencoded::to_string(&options).unwrap(), "");
    }
}
