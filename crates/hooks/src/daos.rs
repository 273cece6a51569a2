#![forbid(unsafe_code)]

use crate::{Mutation, Query};
use dao_ops_client::DaoService;
use dao_ops_core::{
    AddMemberInput, AddMemberResponse, CreateDaoInput, CreateDaoResponse, DaoBoardResponse,
    DaoDetailResponse, DaoEntity, DaoListResponse, MembershipEntity, ProposalEntity, TaskEntity,
};
use std::sync::Arc;

pub type DaoListQuery = Query<(), DaoListResponse>;
pub type DaoDetailQuery = Query<String, DaoDetailResponse>;
pub type DaoBoardQuery = Query<String, DaoBoardResponse>;
pub type CreateDao = Mutation<CreateDaoInput, CreateDaoResponse>;
pub type AddMember = Mutation<AddMemberInput, AddMemberResponse>;

pub fn list(service: &DaoService) -> DaoListQuery {
    let service = service.clone();
    Query::new("daos.list", Some(()), Arc::new(move |_: &()| service.list()))
}

pub fn detail(service: &DaoService, dao_key: Option<String>) -> DaoDetailQuery {
    let service = service.clone();
    Query::new(
        "daos.detail",
        dao_key,
        Arc::new(move |key: &String| service.detail(key)),
    )
}

pub fn board(service: &DaoService, dao_key: Option<String>) -> DaoBoardQuery {
    let service = service.clone();
    Query::new(
        "daos.board",
        dao_key,
        Arc::new(move |key: &String| service.board(key)),
    )
}

pub fn create(service: &DaoService) -> CreateDao {
    let service = service.clone();
    Mutation::new(
        "daos.create",
        Arc::new(move |input: &CreateDaoInput| service.create(input)),
    )
}

pub fn add_member(service: &DaoService, dao_key: String) -> AddMember {
    let service = service.clone();
    Mutation::new(
        "daos.add_member",
        Arc::new(move |input: &AddMemberInput| service.add_member(&dao_key, input)),
    )
}

impl Query<(), DaoListResponse> {
    pub fn daos(&self) -> Vec<DaoEntity> {
        self.with_data(|data| data.map(|d| d.daos.clone()).unwrap_or_default())
    }
}

impl Query<String, DaoDetailResponse> {
    pub fn dao(&self) -> Option<DaoEntity> {
        self.with_data(|data| data.and_then(|d| d.dao.clone()))
    }

    pub fn memberships(&self) -> Vec<MembershipEntity> {
        self.with_data(|data| data.map(|d| d.memberships.clone()).unwrap_or_default())
    }
}

impl Query<String, DaoBoardResponse> {
    pub fn dao(&self) -> Option<DaoEntity> {
        self.with_data(|data| data.and_then(|d| d.dao.clone()))
    }

    pub fn proposals(&self) -> Vec<ProposalEntity> {
        self.with_data(|data| data.map(|d| d.proposals.clone()).unwrap_or_default())
    }

    pub fn tasks(&self) -> Vec<TaskEntity> {
        self.with_data(|data| data.map(|d| d.tasks.clone()).unwrap_or_default())
    }
}
