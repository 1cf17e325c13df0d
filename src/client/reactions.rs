use crate::{
    client::{
        accept,
        route::{RepoTarget, Route},
        ApiOptions, Client, Response, Result,
    },
    Reaction, ReactionType,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ReactionsRequest {
    content: ReactionType,
}

#[derive(Debug, Default, Serialize)]
pub struct ListReactionsOptions {
    /// Return only reactions of this type. Default: all types
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<ReactionType>,
}

/// `ReactionsClient` handles communication with the reactions related methods of the GitHub API.
///
/// GitHub API docs: https://developer.github.com/v3/reactions/
pub struct ReactionsClient<'a> {
    inner: &'a Client,
}

impl<'a> ReactionsClient<'a> {
    pub(super) fn new(client: &'a Client) -> Self {
        Self { inner: client }
    }

    async fn list_reactions(
        &self,
        url: &str,
        options: Option<&ListReactionsOptions>,
        pagination: ApiOptions,
    ) -> Result<Vec<Reaction>> {
        self.inner
            .get_all::<Vec<Reaction>, _>(url, accept::REACTIONS, options, pagination)
            .await
    }

    async fn create_reaction(&self, url: &str, reaction: ReactionType) -> Result<Response<Reaction>> {
        let request = ReactionsRequest { content: reaction };
        let response = self
            .inner
            .post(url, accept::REACTIONS)
            .json(&request)
            .send()
            .await?;

        self.inner.json(response).await
    }

    async fn delete_reaction(&self, url: &str) -> Result<Response<()>> {
        let response = self.inner.delete(url, accept::REACTIONS).send().await?;

        self.inner.empty(response).await
    }

    /// List the reactions for a commit comment
    ///
    /// GitHub API docs: https://developer.github.com/v3/reactions/#list-reactions-for-a-commit-comment
    pub async fn list_for_commit_comment(
        &self,
        repo: RepoTarget<'_>,
        comment_id: u64,
        options: Option<ListReactionsOptions>,
        pagination: ApiOptions,
    ) -> Result<Vec<Reaction>> {
        let url = Route::repo(repo)?
            .literal("comments")
            .id(comment_id, "comment_id")?
            .literal("reactions");
        self.list_reactions(url.as_str(), options.as_ref(), pagination)
            .await
    }

    /// Create a reaction for a commit comment
    ///
    /// Note that if a reaction of the provided type already exists,
    /// the existing reaction will be returned.
    ///
    /// GitHub API docs: https://developer.github.com/v3/reactions/#create-reaction-for-a-commit-comment
    pub async fn create_for_commit_comment(
        &self,
        repo: RepoTarget<'_>,
        comment_id: u64,
        reaction: ReactionType,
    ) -> Result<Response<Reaction>> {
        let url = Route::repo(repo)?
            .literal("comments")
            .id(comment_id, "comment_id")?
            .literal("reactions");
        self.create_reaction(url.as_str(), reaction).await
    }

    /// Delete a reaction for a commit comment
    ///
    /// GitHub API docs: https://developer.github.com/v3/reactions/#delete-a-commit-comment-reaction
    pub async fn delete_for_commit_comment(
        &self,
        repo: RepoTarget<'_>,
        comment_id: u64,
        reaction_id: u64,
    ) -> Result<Response<()>> {
        let url = Route::repo(repo)?
            .literal("comments")
            .id(comment_id, "comment_id")?
            .literal("reactions")
            .id(reaction_id, "reaction_id")?;
        self.delete_reaction(url.as_str()).await
    }

    /// List the reactions for an issue comment
    ///
    /// GitHub API docs: https://developer.github.com/v3/reactions/#list-reactions-for-an-issue-comment
    pub async fn list_for_issue_comment(
        &self,
        repo: RepoTarget<'_>,
        comment_id: u64,
        options: Option<ListReactionsOptions>,
        pagination: ApiOptions,
    ) -> Result<Vec<Reaction>> {
        let url = Route::repo(repo)?
            .literal("issues")
            .literal("comments")
            .id(comment_id, "comment_id")?
            .literal("reactions");
        self.list_reactions(url.as_str(), options.as_ref(), pagination)
            .await
    }

    /// Create a reaction for an issue comment
    ///
    /// GitHub API docs: https://developer.github.com/v3/reactions/#create-reaction-for-an-issue-comment
    pub async fn create_for_issue_comment(
        &self,
        repo: RepoTarget<'_>,
        comment_id: u64,
        reaction: ReactionType,
    ) -> Result<Response<Reaction>> {
        let url = Route::repo(repo)?
            .literal("issues")
            .literal("comments")
            .id(comment_id, "comment_id")?
            .literal("reactions");
        self.create_reaction(url.as_str(), reaction).await
    }

    /// Delete a reaction for an issue comment
    ///
    /// GitHub API docs: https://developer.github.com/v3/reactions/#delete-an-issue-comment-reaction
    pub async fn delete_for_issue_comment(
        &self,
        repo: RepoTarget<'_>,
        comment_id: u64,
        reaction_id: u64,
    ) -> Result<Response<()>> {
        let url = Route::repo(repo)?
            .literal("issues")
            .literal("comments")
            .id(comment_id, "comment_id")?
            .literal("reactions")
            .id(reaction_id, "reaction_id")?;
        self.delete_reaction(url.as_str()).await
    }
}

#[cfg(test)]
mod test {
    use super::ListReactionsOptions;
    use crate::ReactionType;

    #[test]
    fn content_filter_uses_wire_name() {
        let options = ListReactionsOptions {
            content: Some(ReactionType::PlusOne),
        };
        assert_eq!(
            serde_urlencoded::to_string(&options).unwrap(),
            "content=%2B1"
        );
    }
}
