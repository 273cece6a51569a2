#![forbid(unsafe_code)]

use super::API_PREFIX;
use crate::{ApiClient, ClientError, encode_segment};
use dao_ops_core::{
    AddMemberInput, AddMemberResponse, CreateDaoInput, CreateDaoResponse, DaoBoardResponse,
    DaoDetailResponse, DaoListResponse,
};

#[derive(Clone, Debug)]
pub struct DaoService {
    client: ApiClient,
}

impl DaoService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn list_path() -> String {
        format!("{API_PREFIX}/daos")
    }

    pub fn detail_path(dao_key: &str) -> String {
        format!("{API_PREFIX}/daos/{}", encode_segment(dao_key))
    }

    pub fn board_path(dao_key: &str) -> String {
        format!("{API_PREFIX}/daos/{}/board", encode_segment(dao_key))
    }

    pub fn members_path(dao_key: &str) -> String {
        format!("{API_PREFIX}/daos/{}/members", encode_segment(dao_key))
    }

    /// `GET /api/arkiv/daos`
    pub fn list(&self) -> Result<DaoListResponse, ClientError> {
        self.client.get(&Self::list_path())
    }

    /// `GET /api/arkiv/daos/:daoKey`, the DAO plus its memberships.
    pub fn detail(&self, dao_key: &str) -> Result<DaoDetailResponse, ClientError> {
        self.client.get(&Self::detail_path(dao_key))
    }

    /// `GET /api/arkiv/daos/:daoKey/board`, the DAO plus its proposals and tasks.
    pub fn board(&self, dao_key: &str) -> Result<DaoBoardResponse, ClientError> {
        self.client.get(&Self::board_path(dao_key))
    }

    pub fn create(&self, input: &CreateDaoInput) -> Result<CreateDaoResponse, ClientError> {
        self.client.post(&Self::list_path(), input)
    }

    pub fn add_member(
        &self,
        dao_key: &str,
        input: &AddMemberInput,
    ) -> Result<AddMemberResponse, ClientError> {
        self.client.post(&Self::members_path(dao_key), input)
    }
}
