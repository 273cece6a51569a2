#![forbid(unsafe_code)]

use crate::daos::{self, DaoBoardQuery};
use crate::proposals::{self, CreateProposal};
use crate::tasks::{self, CreateTask};
use crate::{Phase, ProposalForm, SubmitError, TaskForm, render};
use dao_ops_client::Services;
use dao_ops_core::{
    BoardSelection, CreateProposalResponse, CreateTaskResponse, OffsetResolver, TaskEntity,
    host_offsets, non_blank, select_proposal_key,
};

/// One DAO with its proposals and tasks.
///
/// Only the user's explicit pick is stored. The highlighted proposal and the task
/// subset are derived from the board data on every read.
pub struct BoardPage {
    dao_key: Option<String>,
    board: DaoBoardQuery,
    user_selected_proposal: Option<String>,
    create_proposal: CreateProposal,
    create_task: CreateTask,
    pub proposal_form: ProposalForm,
    pub task_form: TaskForm,
    offsets: OffsetResolver,
}

impl BoardPage {
    pub fn new(services: &Services, dao_key: Option<String>) -> Self {
        let dao_key = dao_key.and_then(|key| non_blank(&key));
        Self {
            board: daos::board(&services.daos, dao_key.clone()),
            dao_key,
            user_selected_proposal: None,
            create_proposal: proposals::create(&services.proposals),
            create_task: tasks::create(&services.tasks),
            proposal_form: ProposalForm::default(),
            task_form: TaskForm::default(),
            offsets: host_offsets(),
        }
    }

    /// How deadline pickers are read; the host zone by default.
    pub fn with_offsets(mut self, offsets: OffsetResolver) -> Self {
        self.offsets = offsets;
        self
    }

    pub fn mount(&self) -> Phase {
        self.board.mount()
    }

    pub fn reload(&self) -> Phase {
        self.board.refetch()
    }

    pub fn dao_key(&self) -> Option<&str> {
        self.dao_key.as_deref()
    }

    pub fn board(&self) -> &DaoBoardQuery {
        &self.board
    }

    pub fn create_proposal(&self) -> &CreateProposal {
        &self.create_proposal
    }

    pub fn create_task(&self) -> &CreateTask {
        &self.create_task
    }

    pub fn select_proposal(&mut self, proposal_key: impl Into<String>) {
        self.user_selected_proposal = non_blank(&proposal_key.into());
    }

    pub fn user_selected_proposal(&self) -> Option<&str> {
        self.user_selected_proposal.as_deref()
    }

    pub fn selected_proposal_key(&self) -> Option<String> {
        let choice = self.user_selected_proposal.as_deref();
        self.board.with_data(|data| {
            data.and_then(|board| select_proposal_key(&board.proposals, choice))
                .map(str::to_string)
        })
    }

    pub fn visible_tasks(&self) -> Vec<TaskEntity> {
        let choice = self.user_selected_proposal.as_deref();
        self.board.with_data(|data| {
            let Some(board) = data else {
                return Vec::new();
            };
            BoardSelection::derive(&board.proposals, &board.tasks, choice)
                .visible_tasks
                .into_iter()
                .cloned()
                .collect()
        })
    }

    pub fn submit_proposal(&mut self) -> Result<CreateProposalResponse, SubmitError> {
        let dao_key = self.dao_key.clone().ok_or(SubmitError::MissingDaoKey)?;
        let board = self.board.clone();
        self.proposal_form.submit(
            &self.create_proposal,
            &dao_key,
            &*self.offsets,
            move || {
                board.refetch();
            },
        )
    }

    pub fn submit_task(&mut self) -> Result<CreateTaskResponse, SubmitError> {
        let dao_key = self.dao_key.clone().ok_or(SubmitError::MissingDaoKey)?;
        let proposal_key = self.selected_proposal_key();
        let board = self.board.clone();
        self.task_form.submit(
            &self.create_task,
            &dao_key,
            proposal_key.as_deref(),
            &*self.offsets,
            move || {
                board.refetch();
            },
        )
    }

    pub fn render(&self) -> String {
        render::board_page(self)
    }
}
