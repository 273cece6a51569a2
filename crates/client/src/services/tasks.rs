#![forbid(unsafe_code)]

use super::API_PREFIX;
use crate::{ApiClient, ClientError, encode_segment};
use dao_ops_core::{
    CreateTaskInput, CreateTaskResponse, TaskDetailResponse, TaskListResponse,
    TasksByProposalResponse,
};

#[derive(Clone, Debug)]
pub struct TaskService {
    client: ApiClient,
}

impl TaskService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn list_path() -> String {
        format!("{API_PREFIX}/tasks")
    }

    pub fn by_proposal_path(proposal_key: &str) -> String {
        format!("{API_PREFIX}/tasks/by-proposal/{}", encode_segment(proposal_key))
    }

    pub fn detail_path(task_key: &str) -> String {
        format!("{API_PREFIX}/tasks/{}", encode_segment(task_key))
    }

    pub fn list(&self) -> Result<TaskListResponse, ClientError> {
        self.client.get(&Self::list_path())
    }

    pub fn by_proposal(&self, proposal_key: &str) -> Result<TasksByProposalResponse, ClientError> {
        self.client.get(&Self::by_proposal_path(proposal_key))
    }

    pub fn detail(&self, task_key: &str) -> Result<TaskDetailResponse, ClientError> {
        self.client.get(&Self::detail_path(task_key))
    }

    pub fn create(&self, input: &CreateTaskInput) -> Result<CreateTaskResponse, ClientError> {
        self.client.post(&Self::list_path(), input)
    }
}
