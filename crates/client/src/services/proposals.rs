#![forbid(unsafe_code)]

use super::API_PREFIX;
use crate::{ApiClient, ClientError, encode_segment};
use dao_ops_core::{
    CreateProposalInput, CreateProposalResponse, ProposalDetailResponse, ProposalListResponse,
    ProposalsByDaoResponse,
};

#[derive(Clone, Debug)]
pub struct ProposalService {
    client: ApiClient,
}

impl ProposalService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn list_path() -> String {
        format!("{API_PREFIX}/proposals")
    }

    pub fn by_dao_path(dao_key: &str) -> String {
        format!("{API_PREFIX}/proposals/by-dao/{}", encode_segment(dao_key))
    }

    pub fn detail_path(proposal_key: &str) -> String {
        format!("{API_PREFIX}/proposals/{}", encode_segment(proposal_key))
    }

    pub fn list(&self) -> Result<ProposalListResponse, ClientError> {
        self.client.get(&Self::list_path())
    }

    pub fn by_dao(&self, dao_key: &str) -> Result<ProposalsByDaoResponse, ClientError> {
        self.client.get(&Self::by_dao_path(dao_key))
    }

    /// The proposal plus its tasks.
    pub fn detail(&self, proposal_key: &str) -> Result<ProposalDetailResponse, ClientError> {
        self.client.get(&Self::detail_path(proposal_key))
    }

    pub fn create(
        &self,
        input: &CreateProposalInput,
    ) -> Result<CreateProposalResponse, ClientError> {
        self.client.post(&Self::list_path(), input)
    }
}
