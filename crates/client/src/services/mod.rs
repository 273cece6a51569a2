#![forbid(unsafe_code)]

mod daos;
mod proposals;
mod tasks;

pub use daos::*;
pub use proposals::*;
pub use tasks::*;

use crate::{ApiClient, ClientConfig};

pub const API_PREFIX: &str = "/api/arkiv";

/// The three resource services over one shared client.
#[derive(Clone, Debug)]
pub struct Services {
    pub daos: DaoService,
    pub proposals: ProposalService,
    pub tasks: TaskService,
}

impl Services {
    pub fn new(client: ApiClient) -> Self {
        Self {
            daos: DaoService::new(client.clone()),
            proposals: ProposalService::new(client.clone()),
            tasks: TaskService::new(client),
        }
    }

    pub fn http(config: &ClientConfig) -> Self {
        Self::new(ApiClient::http(config))
    }
}
