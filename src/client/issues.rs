use crate::{
    client::{
        accept, guard,
        pagination::comma_separated,
        route::{RepoTarget, Route},
        ApiOptions, Client, Response, Result, SortDirection, SortPages, StateFilter,
    },
    Comment, DateTime, Issue, State, User,
};
use serde::Serialize;

#[derive(Debug, Default, Serialize)]
pub struct ListIssuesOptions {
    /// Indicates the state of the issues to return. Default: open
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<StateFilter>,

    /// Label names the issues must all carry, sent comma separated.
    /// Example: bug,ui,@high
    #[serde(serialize_with = "comma_separated")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,

    /// What to sort results by. Default: created
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortPages>,

    /// The direction of the sort. Default: desc
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<SortDirection>,

    /// Only issues updated at or after this time are returned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since: Option<DateTime>,
}

#[derive(Debug, Default, Serialize)]
pub struct ListIssueCommentsOptions {
    /// What to sort results by. Default: created
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortPages>,

    /// The direction of the sort. Default: desc
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<SortDirection>,

    /// Only comments updated at or after this time are returned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since: Option<DateTime>,
}

#[derive(Debug, Default, Serialize)]
pub struct IssueRequest {
    /// The title of the issue
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// The contents of the issue
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// State of the issue
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<State>,
    /// Labels to associate with this issue. Send an empty array to clear
    /// all labels. Only users with push access can set labels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    /// Logins to assign to this issue. Send an empty array to clear all
    /// assignees. Only users with push access can set assignees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignees: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
struct AssigneesRequest<'a> {
    assignees: &'a [&'a str],
}

/// `IssuesClient` handles communication with the issues related methods of the GitHub API.
///
/// GitHub API docs: https://developer.github.com/v3/issues/
pub struct IssuesClient<'a> {
    inner: &'a Client,
}

impl<'a> IssuesClient<'a> {
    pub(super) fn new(client: &'a Client) -> Self {
        Self { inner: client }
    }

    /// Get a single issue
    ///
    /// GitHub API docs: https://developer.github.com/v3/issues/#get-an-issue
    pub async fn get(&self, repo: RepoTarget<'_>, issue_number: u64) -> Result<Response<Issue>> {
        let url = Route::repo(repo)?
            .literal("issues")
            .id(issue_number, "issue_number")?;
        let response = self
            .inner
            .get(url.as_str(), accept::ISSUES)
            .send()
            .await?;

        self.inner.json(response).await
    }

    /// Update an issue
    ///
    /// GitHub API docs: https://developer.github.com/v3/issues/#update-an-issue
    pub async fn update(
        &self,
        repo: RepoTarget<'_>,
        issue_number: u64,
        request: IssueRequest,
    ) -> Result<Response<Issue>> {
        let url = Route::repo(repo)?
            .literal("issues")
            .id(issue_number, "issue_number")?;
        let response = self
            .inner
            .patch(url.as_str(), accept::STABLE)
            .json(&request)
            .send()
            .await?;

        self.inner.json(response).await
    }

    /// List issues for a repository
    ///
    /// GitHub API docs: https://developer.github.com/v3/issues/#list-repository-issues
    pub async fn list_for_repo(
        &self,
        repo: RepoTarget<'_>,
        options: Option<ListIssuesOptions>,
        pagination: ApiOptions,
    ) -> Result<Vec<Issue>> {
        let url = Route::repo(repo)?.literal("issues");
        self.inner
            .get_all::<Vec<Issue>, _>(
                url.as_str(),
                accept::ISSUES,
                options.as_ref(),
                pagination,
            )
            .await
    }

    /// List comments on an issue
    ///
    /// GitHub API docs: https://developer.github.com/v3/issues/comments/#list-issue-comments
    pub async fn list_comments(
        &self,
        repo: RepoTarget<'_>,
        issue_number: u64,
        options: Option<ListIssueCommentsOptions>,
        pagination: ApiOptions,
    ) -> Result<Vec<Comment>> {
        let url = Route::repo(repo)?
            .literal("issues")
            .id(issue_number, "issue_number")?
            .literal("comments");
        self.inner
            .get_all::<Vec<Comment>, _>(url.as_str(), accept::STABLE, options.as_ref(), pagination)
            .await
    }

    /// List the available assignees for issues in a repository
    ///
    /// GitHub API docs: https://developer.github.com/v3/issues/assignees/#list-assignees
    pub async fn list_assignees(
        &self,
        repo: RepoTarget<'_>,
        pagination: ApiOptions,
    ) -> Result<Vec<User>> {
        let url = Route::repo(repo)?.literal("assignees");
        self.inner
            .get_all::<Vec<User>, ()>(url.as_str(), accept::STABLE, None, pagination)
            .await
    }

    /// Check if a user can be assigned to issues in a repository.
    /// `204` means yes, `404` means no.
    ///
    /// GitHub API docs: https://developer.github.com/v3/issues/assignees/#check-assignee
    pub async fn check_assignee(
        &self,
        repo: RepoTarget<'_>,
        assignee: &str,
    ) -> Result<Response<bool>> {
        let url = Route::repo(repo)?
            .literal("assignees")
            .arg(assignee, "assignee")?;
        let response = self.inner.get(url.as_str(), accept::STABLE).send().await?;

        self.inner.boolean(response).await
    }

    /// Add assignees to an issue
    ///
    /// GitHub API docs: https://developer.github.com/v3/issues/assignees/#add-assignees-to-an-issue
    pub async fn add_assignees(
        &self,
        repo: RepoTarget<'_>,
        issue_number: u64,
        assignees: &[&str],
    ) -> Result<Response<Issue>> {
        let url = Route::repo(repo)?
            .literal("issues")
            .id(issue_number, "issue_number")?
            .literal("assignees");
        guard::non_empty(assignees, "assignees")?;
        let request = AssigneesRequest { assignees };
        let response = self
            .inner
            .post(url.as_str(), accept::STABLE)
            .json(&request)
            .send()
            .await?;

        self.inner.json(response).await
    }

    /// Remove assignees from an issue
    ///
    /// GitHub API docs: https://developer.github.com/v3/issues/assignees/#remove-assignees-from-an-issue
    pub async fn remove_assignees(
        &self,
        repo: RepoTarget<'_>,
        issue_number: u64,
        assignees: &[&str],
    ) -> Result<Response<Issue>> {
        let url = Route::repo(repo)?
            .literal("issues")
            .id(issue_number, "issue_number")?
            .literal("assignees");
        guard::non_empty(assignees, "assignees")?;
        let request = AssigneesRequest { assignees };
        let response = self
            .inner
            .delete(url.as_str(), accept::STABLE)
            .json(&request)
            .send()
            .await?;

        self.inner.json(response).await
    }
}

#[cfg(test)]
mod test {
    use super::ListIssuesOptions;
    use crate::client::{SortDirection, StateFilter};

    #[test]
    fn unset_fields_are_absent() {
        let options = ListIssuesOptions::default();
        assert_eq!(serde_urlencoded::to_string(&options).unwrap(), "");
    }

    #[test]
    fn set_fields_surface_documented_keys() {
        let options = ListIssuesOptions {
            state: Some(StateFilter::Closed),
            direction: Some(SortDirection::Descending),
            ..Default::default()
        };
        assert_eq!(
            serde_urlencoded::to_string(&options).unwrap(),
            "state=closed&direction=desc"
        );
    }

    #[test]
    fn comment_sort_keys() {
        let options = super::ListIssueCommentsOptions {
            sort: Some(crate::client::SortPages::Updated),
            direction: Some(SortDirection::Ascending),
            ..Default::default()
        };
        assert_eq!(
            serde_urlencoded::to_string(&options).unwrap(),
            "sort=updated&direction=asc"
        );
    }

    #[test]
    fn labels_comma_join() {
        let options = ListIssuesOptions {
            labels: Some(vec!["bug".to_owned(), "ui".to_owned()]),
            ..Default::default()
        };
        // serde_urlencoded percent-encodes the joining comma
        assert_eq!(
            serde_urlencoded::to_string(&options).unwrap(),
            "labels=bug%2Cui"
        );
    }
}
