#![forbid(unsafe_code)]

use crate::{Mutation, Query};
use dao_ops_client::TaskService;
use dao_ops_core::{
    CreateTaskInput, CreateTaskResponse, TaskDetailResponse, TaskEntity, TaskListResponse,
    TasksByProposalResponse,
};
use std::sync::Arc;

pub type TaskListQuery = Query<(), TaskListResponse>;
pub type TasksByProposalQuery = Query<String, TasksByProposalResponse>;
pub type TaskDetailQuery = Query<String, TaskDetailResponse>;
pub type CreateTask = Mutation<CreateTaskInput, CreateTaskResponse>;

pub fn list(service: &TaskService) -> TaskListQuery {
    let service = service.clone();
    Query::new("tasks.list", Some(()), Arc::new(move |_: &()| service.list()))
}

pub fn by_proposal(service: &TaskService, proposal_key: Option<String>) -> TasksByProposalQuery {
    let service = service.clone();
    Query::new(
        "tasks.by_proposal",
        proposal_key,
        Arc::new(move |key: &String| service.by_proposal(key)),
    )
}

pub fn detail(service: &TaskService, task_key: Option<String>) -> TaskDetailQuery {
    let service = service.clone();
    Query::new(
        "tasks.detail",
        task_key,
        Arc::new(move |key: &String| service.detail(key)),
    )
}

pub fn create(service: &TaskService) -> CreateTask {
    let service = service.clone();
    Mutation::new(
        "tasks.create",
        Arc::new(move |input: &CreateTaskInput| service.create(input)),
    )
}

impl Query<(), TaskListResponse> {
    pub fn tasks(&self) -> Vec<TaskEntity> {
        self.with_data(|data| data.map(|d| d.tasks.clone()).unwrap_or_default())
    }
}

impl Query<String, TasksByProposalResponse> {
    pub fn tasks(&self) -> Vec<TaskEntity> {
        self.with_data(|data| data.map(|d| d.tasks.clone()).unwrap_or_default())
    }
}

impl Query<String, TaskDetailResponse> {
    pub fn task(&self) -> Option<TaskEntity> {
        self.with_data(|data| data.map(|d| d.task.clone()))
    }
}
