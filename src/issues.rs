use super::{DateTime, NodeId, User};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum State {
    Open,
    Closed,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Label {
    pub id: u64,
    pub node_id: NodeId,
    pub name: String,
    pub color: String,
    pub default: bool,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Issue {
    pub id: u64,
    pub node_id: NodeId,
    pub number: u64,
    pub state: State,
    pub title: String,
    pub body: Option<String>,
    pub user: User,
    pub labels: Vec<Label>,
    pub assignees: Vec<User>,
    pub locked: bool,
    pub comments: u64,
    pub created_at: DateTime,
    pub updated_at: DateTime,
    pub closed_at: Option<DateTime>,
    pub url: String,
    pub html_url: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Comment {
    pub id: u64,
    pub node_id: NodeId,
    pub user: User,
    pub body: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
    pub url: String,
    pub html_url: String,
}
