use crate::{
    client::{
        accept,
        route::Route,
        ApiOptions, Client, Response, Result,
    },
    User,
};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum MemberFilter {
    /// Members without two-factor authentication enabled. Requires org
    /// owner privileges.
    #[serde(rename = "2fa_disabled")]
    TwoFactorDisabled,
    #[serde(rename = "all")]
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberRole {
    All,
    Admin,
    Member,
}

#[derive(Debug, Default, Serialize)]
pub struct ListMembersOptions {
    /// Filter members returned in the list. Default: all
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<MemberFilter>,

    /// Filter members returned by their role. Default: all
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<MemberRole>,
}

/// `OrgsClient` handles communication with the organization related methods of the GitHub API.
///
/// GitHub API docs: https://developer.github.com/v3/orgs/
pub struct OrgsClient<'a> {
    inner: &'a Client,
}

impl<'a> OrgsClient<'a> {
    pub(super) fn new(client: &'a Client) -> Self {
        Self { inner: client }
    }

    /// List members of an organization
    ///
    /// GitHub API docs: https://developer.github.com/v3/orgs/members/#members-list
    pub async fn list_members(
        &self,
        org: &str,
        options: Option<ListMembersOptions>,
        pagination: ApiOptions,
    ) -> Result<Vec<User>> {
        let url = Route::org(org)?.literal("members");
        self.inner
            .get_all::<Vec<User>, _>(url.as_str(), accept::STABLE, options.as_ref(), pagination)
            .await
    }

    /// Check if a user is, publicly or privately, a member of the
    /// organization. `204` means yes, `404` means no.
    ///
    /// GitHub API docs: https://developer.github.com/v3/orgs/members/#check-membership
    pub async fn check_membership(&self, org: &str, username: &str) -> Result<Response<bool>> {
        let url = Route::org(org)?
            .literal("members")
            .arg(username, "username")?;
        let response = self.inner.get(url.as_str(), accept::STABLE).send().await?;

        self.inner.boolean(response).await
    }

    /// Remove a member from all teams and repositories of the organization
    ///
    /// GitHub API docs: https://developer.github.com/v3/orgs/members/#remove-a-member
    pub async fn remove_member(&self, org: &str, username: &str) -> Result<Response<()>> {
        let url = Route::org(org)?
            .literal("members")
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
    use super::{ListMembersOptions, MemberFilter, MemberRole};

    #[test]
    fn member_filter_wire_names() {
        let options = ListMembersOptions {
            filter: Some(MemberFilter::TwoFactorDisabled),
            role: Some(MemberRole::Admin),
        };
        assert_eq!(
            serde_urlencoded::to_string(&options).unwrap(),
            "filter=2fa_disabled&role=admin"
        );
    }
}
