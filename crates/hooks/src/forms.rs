#![forbid(unsafe_code)]

use crate::daos::CreateDao;
use crate::proposals::CreateProposal;
use crate::tasks::CreateTask;
use dao_ops_client::ClientError;
use dao_ops_core::{
    CreateDaoInput, CreateDaoResponse, CreateProposalInput, CreateProposalResponse,
    CreateTaskInput, CreateTaskResponse, FormError, ProposalStatus, TaskStatus,
    deadline_to_utc_iso, non_blank, parse_budget,
};
use thiserror::Error;
use time::{PrimitiveDateTime, UtcOffset};

/// Local offset for a picked wall time.
pub type OffsetAt<'a> = &'a dyn Fn(PrimitiveDateTime) -> UtcOffset;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// Nothing was sent.
    #[error(transparent)]
    Invalid(#[from] FormError),
    #[error("missing daoKey")]
    MissingDaoKey,
    /// The request went out and failed; the form keeps its fields.
    #[error("{0}")]
    Rejected(ClientError),
}

// All three forms follow the same order: validate, send, clear on success, then
// hand control to the page's reload callback.

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DaoForm {
    pub name: String,
    pub description: String,
    pub owner_address: String,
}

impl DaoForm {
    pub fn can_submit(&self) -> bool {
        non_blank(&self.name).is_some()
    }

    pub fn input(&self) -> Result<CreateDaoInput, FormError> {
        let name = non_blank(&self.name).ok_or(FormError::MissingName)?;
        Ok(CreateDaoInput {
            name,
            description: non_blank(&self.description),
            owner_address: non_blank(&self.owner_address),
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn submit(
        &mut self,
        mutation: &CreateDao,
        on_created: impl FnOnce(),
    ) -> Result<CreateDaoResponse, SubmitError> {
        let input = self.input()?;
        let created = mutation.mutate(&input).map_err(SubmitError::Rejected)?;
        self.clear();
        on_created();
        Ok(created)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProposalForm {
    pub title: String,
    pub description: String,
    /// Raw decimal text.
    pub budget: String,
    /// Raw `datetime-local` text.
    pub deadline: String,
}

impl ProposalForm {
    pub fn can_submit(&self) -> bool {
        non_blank(&self.title).is_some()
    }

    pub fn input(
        &self,
        dao_key: &str,
        offset_at: OffsetAt<'_>,
    ) -> Result<CreateProposalInput, FormError> {
        let title = non_blank(&self.title).ok_or(FormError::MissingTitle)?;
        Ok(CreateProposalInput {
            dao_key: dao_key.to_string(),
            title,
            description: non_blank(&self.description),
            budget: parse_budget(&self.budget)?,
            deadline: deadline_to_utc_iso(&self.deadline, offset_at)?,
            status: Some(ProposalStatus::Open),
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn submit(
        &mut self,
        mutation: &CreateProposal,
        dao_key: &str,
        offset_at: OffsetAt<'_>,
        on_created: impl FnOnce(),
    ) -> Result<CreateProposalResponse, SubmitError> {
        let input = self.input(dao_key, offset_at)?;
        let created = mutation.mutate(&input).map_err(SubmitError::Rejected)?;
        self.clear();
        on_created();
        Ok(created)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    pub budget: String,
    pub deadline: String,
}

impl TaskForm {
    pub fn can_submit(&self, proposal_key: Option<&str>) -> bool {
        proposal_key.is_some() && non_blank(&self.title).is_some()
    }

    pub fn input(
        &self,
        dao_key: &str,
        proposal_key: Option<&str>,
        offset_at: OffsetAt<'_>,
    ) -> Result<CreateTaskInput, FormError> {
        let proposal_key = proposal_key.ok_or(FormError::MissingProposal)?;
        let title = non_blank(&self.title).ok_or(FormError::MissingTitle)?;
        Ok(CreateTaskInput {
            dao_key: dao_key.to_string(),
            proposal_key: proposal_key.to_string(),
            title,
            description: non_blank(&self.description),
            budget: parse_budget(&self.budget)?,
            deadline: deadline_to_utc_iso(&self.deadline, offset_at)?,
            status: Some(TaskStatus::Todo),
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn submit(
        &mut self,
        mutation: &CreateTask,
        dao_key: &str,
        proposal_key: Option<&str>,
        offset_at: OffsetAt<'_>,
        on_created: impl FnOnce(),
    ) -> Result<CreateTaskResponse, SubmitError> {
        let input = self.input(dao_key, proposal_key, offset_at)?;
        let created = mutation.mutate(&input).map_err(SubmitError::Rejected)?;
        self.clear();
        on_created();
        Ok(created)
    }
}
