#![forbid(unsafe_code)]

use crate::{Mutation, Query};
use dao_ops_client::ProposalService;
use dao_ops_core::{
    CreateProposalInput, CreateProposalResponse, ProposalDetailResponse, ProposalEntity,
    ProposalListResponse, ProposalsByDaoResponse, TaskEntity,
};
use std::sync::Arc;

pub type ProposalListQuery = Query<(), ProposalListResponse>;
pub type ProposalsByDaoQuery = Query<String, ProposalsByDaoResponse>;
pub type ProposalDetailQuery = Query<String, ProposalDetailResponse>;
pub type CreateProposal = Mutation<CreateProposalInput, CreateProposalResponse>;

pub fn list(service: &ProposalService) -> ProposalListQuery {
    let service = service.clone();
    Query::new(
        "proposals.list",
        Some(()),
        Arc::new(move |_: &()| service.list()),
    )
}

pub fn by_dao(service: &ProposalService, dao_key: Option<String>) -> ProposalsByDaoQuery {
    let service = service.clone();
    Query::new(
        "proposals.by_dao",
        dao_key,
        Arc::new(move |key: &String| service.by_dao(key)),
    )
}

pub fn detail(service: &ProposalService, proposal_key: Option<String>) -> ProposalDetailQuery {
    let service = service.clone();
    Query::new(
        "proposals.detail",
        proposal_key,
        Arc::new(move |key: &String| service.detail(key)),
    )
}

pub fn create(service: &ProposalService) -> CreateProposal {
    let service = service.clone();
    Mutation::new(
        "proposals.create",
        Arc::new(move |input: &CreateProposalInput| service.create(input)),
    )
}

impl Query<(), ProposalListResponse> {
    pub fn proposals(&self) -> Vec<ProposalEntity> {
        self.with_data(|data| data.map(|d| d.proposals.clone()).unwrap_or_default())
    }
}

impl Query<String, ProposalsByDaoResponse> {
    pub fn proposals(&self) -> Vec<ProposalEntity> {
        self.with_data(|data| data.map(|d| d.proposals.clone()).unwrap_or_default())
    }
}

impl Query<String, ProposalDetailResponse> {
    pub fn proposal(&self) -> Option<ProposalEntity> {
        self.with_data(|data| data.map(|d| d.proposal.clone()))
    }

    pub fn tasks(&self) -> Vec<TaskEntity> {
        self.with_data(|data| data.map(|d| d.tasks.clone()).unwrap_or_default())
    }

    /// The owning DAO as reported by the last successful fetch.
    pub fn dao_key(&self) -> Option<String> {
        self.with_data(|data| data.map(|d| d.dao_key.clone()))
    }
}
