#![forbid(unsafe_code)]

use super::entity::Entity;
use super::status::{MembershipRole, ProposalStatus, TaskStatus};
use serde::{Deserialize, Serialize};

// Timestamps stay as the ISO-8601 strings the backend sent; the client never does
// arithmetic on them.

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaoPayload {
    pub id: i64,
    pub created_at: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub owner_address: String,
    pub version: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalPayload {
    pub id: i64,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub dao_key: String,
    #[serde(default)]
    pub status: ProposalStatus,
    pub version: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPayload {
    pub id: i64,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub proposal_key: String,
    pub dao_key: String,
    #[serde(default)]
    pub status: TaskStatus,
    pub version: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipPayload {
    pub user_address: String,
    pub dao_key: String,
    pub role: MembershipRole,
    pub created_at: String,
    pub version: i64,
}

pub type DaoEntity = Entity<DaoPayload>;
pub type ProposalEntity = Entity<ProposalPayload>;
pub type TaskEntity = Entity<TaskPayload>;
pub type MembershipEntity = Entity<MembershipPayload>;
