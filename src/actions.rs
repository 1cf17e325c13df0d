use crate::{DateTime, NodeId, Oid};
use serde::Deserialize;

// GitHub API docs: https://developer.github.com/v3/actions/

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Queued,
    InProgress,
    Completed,
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobConclusion {
    Success,
    Failure,
    Neutral,
    Cancelled,
    Skipped,
    TimedOut,
    ActionRequired,
}

#[derive(Clone, Debug, Deserialize)]
pub struct JobStep {
    pub name: String,
    pub number: u64,
    pub status: JobStatus,
    pub conclusion: Option<JobConclusion>,
    pub started_at: Option<DateTime>,
    pub completed_at: Option<DateTime>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct WorkflowJob {
    pub id: u64,
    pub run_id: u64,
    pub node_id: NodeId,
    pub head_sha: Oid,
    pub status: JobStatus,
    pub conclusion: Option<JobConclusion>,
    pub name: String,
    pub started_at: Option<DateTime>,
    pub completed_at: Option<DateTime>,
    #[serde(default)]
    pub steps: Vec<JobStep>,
    pub url: String,
    pub html_url: String,
    pub run_url: String,
    pub check_run_url: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RunnerGroup {
    pub id: u64,
    pub name: String,
    pub visibility: String,
    pub default: bool,
    pub inherited: bool,
    pub allows_public_repositories: bool,
    pub runners_url: String,
}

/// A repository or environment scoped Actions secret. Secret values are
/// write-only in the API; only metadata ever comes back.
#[derive(Clone, Debug, Deserialize)]
pub struct ActionsSecret {
    pub name: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecretVisibility {
    All,
    Private,
    Selected,
}

#[derive(Clone, Debug, Deserialize)]
pub struct OrganizationSecret {
    pub name: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
    pub visibility: SecretVisibility,
    pub selected_repositories_url: Option<String>,
}

#[cfg(test)]
mod test {
    use super::{JobConclusion, JobStatus, WorkflowJob};

    #[test]
    fn workflow_job() {
        const JOB_JSON: &str = r#"
            {
                "id": 399444496,
                "run_id": 29679449,
                "run_url": "https://api.github.com/repos/octo-org/octo-repo/actions/runs/29679449",
                "node_id": "MDg6Q2hlY2tSdW4zOTk0NDQ0OTY=",
                "head_sha": "f83a356604ae3c5d03e1b46ef4d1ca77d64a90b0",
                "url": "https://api.github.com/repos/octo-org/octo-repo/actions/jobs/399444496",
                "html_url": "https://github.com/octo-org/octo-repo/runs/399444496",
                "status": "completed",
                "conclusion": "success",
                "started_at": "2020-01-20T17:42:40Z",
                "completed_at": "2020-01-20T17:44:39Z",
                "name": "build",
                "steps": [
                    {
                        "name": "Set up job",
                        "status": "completed",
                        "conclusion": "success",
                        "number": 1,
                        "started_at": "2020-01-20T09:42:40.000-08:00",
                        "completed_at": "2020-01-20T09:42:41.000-08:00"
                    }
                ],
                "check_run_url": "https://api.github.com/repos/octo-org/octo-repo/check-runs/399444496"
            }
        "#;

        let job: WorkflowJob = serde_json::from_str(JOB_JSON).unwrap();
        assert_eq!(job.status, JobStatus::Completed);
        assert_eq!(job.conclusion, Some(JobConclusion::Success));
        assert_eq!(job.steps.len(), 1);
    }
}
