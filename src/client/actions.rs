use crate::{
    client::{
        accept,
        pagination::Page,
        route::{RepoTarget, Route},
        ApiOptions, Client, Response, Result,
    },
    ActionsSecret, OrganizationSecret, RunnerGroup, WorkflowJob,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunJobsFilter {
    Latest,
    All,
}

#[derive(Debug, Default, Serialize)]
pub struct ListRunJobsOptions {
    /// `latest` returns jobs from the most recent run attempt only;
    /// `all` returns jobs from every attempt. Default: latest
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<RunJobsFilter>,
}

#[derive(Debug, Deserialize)]
struct JobsPage {
    #[allow(unused)]
    total_count: u64,
    jobs: Vec<WorkflowJob>,
}

impl Page for JobsPage {
    type Item = WorkflowJob;

    fn into_items(self) -> Vec<WorkflowJob> {
        self.jobs
    }
}

#[derive(Debug, Deserialize)]
struct RunnerGroupsPage {
    #[allow(unused)]
    total_count: u64,
    runner_groups: Vec<RunnerGroup>,
}

impl Page for RunnerGroupsPage {
    type Item = RunnerGroup;

    fn into_items(self) -> Vec<RunnerGroup> {
        self.runner_groups
    }
}

#[derive(Debug, Deserialize)]
struct SecretsPage {
    #[allow(unused)]
    total_count: u64,
    secrets: Vec<ActionsSecret>,
}

impl Page for SecretsPage {
    type Item = ActionsSecret;

    fn into_items(self) -> Vec<ActionsSecret> {
        self.secrets
    }
}

/// `ActionsClient` handles communication with the Actions related methods of the GitHub API.
///
/// GitHub API docs: https://developer.github.com/v3/actions/
pub struct ActionsClient<'a> {
    inner: &'a Client,
}

impl<'a> ActionsClient<'a> {
    pub(super) fn new(client: &'a Client) -> Self {
        Self { inner: client }
    }

    /// Get a specific job in a workflow run
    ///
    /// GitHub API docs: https://developer.github.com/v3/actions/workflow-jobs/#get-a-job-for-a-workflow-run
    pub async fn get_job(
        &self,
        repo: RepoTarget<'_>,
        job_id: u64,
    ) -> Result<Response<WorkflowJob>> {
        let url = Route::repo(repo)?
            .literal("actions")
            .literal("jobs")
            .id(job_id, "job_id")?;
        let response = self.inner.get(url.as_str(), accept::STABLE).send().await?;

        self.inner.json(response).await
    }

    /// List jobs for a workflow run
    ///
    /// GitHub API docs: https://developer.github.com/v3/actions/workflow-jobs/#list-jobs-for-a-workflow-run
    pub async fn list_run_jobs(
        &self,
        repo: RepoTarget<'_>,
        run_id: u64,
        options: Option<ListRunJobsOptions>,
        pagination: ApiOptions,
    ) -> Result<Vec<WorkflowJob>> {
        let url = Route::repo(repo)?
            .literal("actions")
            .literal("runs")
            .id(run_id, "run_id")?
            .literal("jobs");
        self.inner
            .get_all::<JobsPage, _>(url.as_str(), accept::STABLE, options.as_ref(), pagination)
            .await
    }

    /// Re-run a job from a workflow run
    ///
    /// GitHub API docs: https://developer.github.com/v3/actions/workflow-runs/#re-run-a-job-from-a-workflow-run
    pub async fn rerun_job(&self, repo: RepoTarget<'_>, job_id: u64) -> Result<Response<()>> {
        let url = Route::repo(repo)?
            .literal("actions")
            .literal("jobs")
            .id(job_id, "job_id")?
            .literal("rerun");
        let response = self.inner.post(url.as_str(), accept::STABLE).send().await?;

        self.inner.empty(response).await
    }

    /// List self-hosted runner groups for an organization
    ///
    /// GitHub API docs: https://developer.github.com/v3/actions/self-hosted-runner-groups/#list-self-hosted-runner-groups-for-an-organization
    pub async fn list_runner_groups(
        &self,
        org: &str,
        pagination: ApiOptions,
    ) -> Result<Vec<RunnerGroup>> {
        let url = Route::org(org)?.literal("actions").literal("runner-groups");
        self.inner
            .get_all::<RunnerGroupsPage, ()>(url.as_str(), accept::STABLE, None, pagination)
            .await
    }

    /// Get a self-hosted runner group for an organization
    ///
    /// GitHub API docs: https://developer.github.com/v3/actions/self-hosted-runner-groups/#get-a-self-hosted-runner-group-for-an-organization
    pub async fn get_runner_group(
        &self,
        org: &str,
        group_id: u64,
    ) -> Result<Response<RunnerGroup>> {
        let url = Route::org(org)?
            .literal("actions")
            .literal("runner-groups")
            .id(group_id, "group_id")?;
        let response = self.inner.get(url.as_str(), accept::STABLE).send().await?;

        self.inner.json(response).await
    }

    /// Get an organization secret's metadata
    ///
    /// GitHub API docs: https://developer.github.com/v3/actions/secrets/#get-an-organization-secret
    pub async fn get_org_secret(
        &self,
        org: &str,
        secret_name: &str,
    ) -> Result<Response<OrganizationSecret>> {
        let url = Route::org(org)?
            .literal("actions")
            .literal("secrets")
            .arg(secret_name, "secret_name")?;
        let response = self.inner.get(url.as_str(), accept::STABLE).send().await?;

        self.inner.json(response).await
    }

    /// Add a repository to an organization secret whose visibility is
    /// `selected`. Issues a bodyless PUT.
    ///
    /// GitHub API docs: https://developer.github.com/v3/actions/secrets/#add-selected-repository-to-an-organization-secret
    pub async fn add_selected_repo_to_org_secret(
        &self,
        org: &str,
        secret_name: &str,
        repository_id: u64,
    ) -> Result<Response<()>> {
        let url = Route::org(org)?
            .literal("actions")
            .literal("secrets")
            .arg(secret_name, "secret_name")?
            .literal("repositories")
            .id(repository_id, "repository_id")?;
        let response = self.inner.put(url.as_str(), accept::STABLE).send().await?;

        self.inner.empty(response).await
    }

    /// Remove a repository from an organization secret whose visibility is
    /// `selected`.
    ///
    /// GitHub API docs: https://developer.github.com/v3/actions/secrets/#remove-selected-repository-from-an-organization-secret
    pub async fn remove_selected_repo_from_org_secret(
        &self,
        org: &str,
        secret_name: &str,
        repository_id: u64,
    ) -> Result<Response<()>> {
        let url = Route::org(org)?
            .literal("actions")
            .literal("secrets")
            .arg(secret_name, "secret_name")?
            .literal("repositories")
            .id(repository_id, "repository_id")?;
        let response = self
            .inner
            .delete(url.as_str(), accept::STABLE)
            .send()
            .await?;

        self.inner.empty(response).await
    }

    /// List secrets available in an environment. Environments hang off the
    /// repository id form only.
    ///
    /// GitHub API docs: https://developer.github.com/v3/actions/secrets/#list-environment-secrets
    pub async fn list_environment_secrets(
        &self,
        repository_id: u64,
        environment: &str,
        pagination: ApiOptions,
    ) -> Result<Vec<ActionsSecret>> {
        let url = Route::repo(RepoTarget::repository_id(repository_id))?
            .literal("environments")
            .arg(environment, "environment")?
            .literal("secrets");
        self.inner
            .get_all::<SecretsPage, ()>(url.as_str(), accept::STABLE, None, pagination)
            .await
    }

    /// Get an environment secret's metadata
    ///
    /// GitHub API docs: https://developer.github.com/v3/actions/secrets/#get-an-environment-secret
    pub async fn get_environment_secret(
        &self,
        repository_id: u64,
        environment: &str,
        secret_name: &str,
    ) -> Result<Response<ActionsSecret>> {
        let url = Route::repo(RepoTarget::repository_id(repository_id))?
            .literal("environments")
            .arg(environment, "environment")?
            .literal("secrets")
            .arg(secret_name, "secret_name")?;
        let response = self.inner.get(url.as_str(), accept::STABLE).send().await?;

        self.inner.json(response).await
    }
}

#[cfg(test)]
mod test {
    use super::{ListRunJobsOptions, RunJobsFilter};

    #[test]
    fn run_jobs_filter_query() {
        let options = ListRunJobsOptions {
            filter: Some(RunJobsFilter::Latest),
        };
        assert_eq!(serde_urlencoded::to_string(&options).unwrap(), "filter=latest");
    }

    #[test]
    fn default_options_compose_no_query() {
        let options = ListRunJobsOptions::default();
        assert_eq!(serde_urlencoded::to_string(&options).unwrap(), "");
    }
}
