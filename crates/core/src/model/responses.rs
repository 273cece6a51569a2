#![forbid(unsafe_code)]

use super::payloads::{DaoEntity, MembershipEntity, ProposalEntity, TaskEntity};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaoListResponse {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub daos: Vec<DaoEntity>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaoDetailResponse {
    pub dao_key: String,
    #[serde(default)]
    pub dao: Option<DaoEntity>,
    #[serde(default)]
    pub memberships: Vec<MembershipEntity>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaoBoardResponse {
    pub dao_key: String,
    #[serde(default)]
    pub dao: Option<DaoEntity>,
    #[serde(default)]
    pub proposals: Vec<ProposalEntity>,
    #[serde(default)]
    pub tasks: Vec<TaskEntity>,
}

impl DaoBoardResponse {
    /// The DAO entity, only when its payload decoded.
    pub fn usable_dao(&self) -> Option<&DaoEntity> {
        self.dao.as_ref().filter(|dao| dao.payload.is_some())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDaoResponse {
    pub dao_key: String,
    pub dao_tx_hash: String,
    pub membership_key: String,
    pub membership_tx_hash: String,
    pub owner_address: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddMemberResponse {
    pub membership_key: String,
    pub tx_hash: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalListResponse {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub proposals: Vec<ProposalEntity>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalsByDaoResponse {
    pub dao_key: String,
    #[serde(default)]
    pub proposals: Vec<ProposalEntity>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalDetailResponse {
    pub proposal_key: String,
    pub dao_key: String,
    pub proposal: ProposalEntity,
    #[serde(default)]
    pub tasks: Vec<TaskEntity>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProposalResponse {
    pub proposal_key: String,
    pub tx_hash: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskListResponse {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub tasks: Vec<TaskEntity>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TasksByProposalResponse {
    pub proposal_key: String,
    #[serde(default)]
    pub tasks: Vec<TaskEntity>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDetailResponse {
    pub task_key: String,
    pub task: TaskEntity,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskResponse {
    pub task_key: String,
    pub tx_hash: String,
}
