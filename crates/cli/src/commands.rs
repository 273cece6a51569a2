#![forbid(unsafe_code)]

use crate::args::Command;
use dao_ops_client::Services;
use dao_ops_hooks::{
    BoardPage, DaosPage, Phase, SubmitError, daos, proposals, render, tasks,
};
use dao_ops_core::OffsetResolver;

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Failure {
    /// Rejected before anything was sent.
    Usage(String),
    Request(String),
}

impl Failure {
    pub(crate) fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(_) => 2,
            Self::Request(_) => 1,
        }
    }

    pub(crate) fn message(&self) -> &str {
        match self {
            Self::Usage(message) | Self::Request(message) => message,
        }
    }
}

/// What one invocation prints: the rendered view, plus the failure that decides
/// the exit code.
#[derive(Debug)]
pub(crate) struct Outcome {
    pub(crate) stdout: String,
    pub(crate) failure: Option<Failure>,
}

impl Outcome {
    fn view(stdout: String, phase: Phase, error: Option<String>) -> Self {
        let failure = match phase {
            Phase::Error => Some(Failure::Request(
                error.unwrap_or_else(|| dao_ops_hooks::UNEXPECTED_ERROR.to_string()),
            )),
            _ => None,
        };
        Self { stdout, failure }
    }

    fn failed(failure: Failure) -> Self {
        Self {
            stdout: String::new(),
            failure: Some(failure),
        }
    }
}

fn submit_failure(err: SubmitError) -> Failure {
    match err {
        SubmitError::Rejected(_) => Failure::Request(err.to_string()),
        SubmitError::Invalid(_) | SubmitError::MissingDaoKey => Failure::Usage(err.to_string()),
    }
}

pub(crate) fn run(command: Command, services: &Services, offsets: OffsetResolver) -> Outcome {
    match command {
        Command::Daos => {
            let page = DaosPage::new(services);
            let phase = page.mount();
            Outcome::view(page.render(), phase, page.list().error())
        }
        Command::Dao { dao_key } => {
            let query = daos::detail(&services.daos, Some(dao_key));
            let phase = query.mount();
            Outcome::view(render::dao_detail(&query.snapshot()), phase, query.error())
        }
        Command::Board { dao_key, proposal } => {
            let mut page = BoardPage::new(services, Some(dao_key));
            if let Some(proposal) = proposal {
                page.select_proposal(proposal);
            }
            let phase = page.mount();
            Outcome::view(page.render(), phase, page.board().error())
        }
        Command::Proposals { dao: Some(dao_key) } => {
            let query = proposals::by_dao(&services.proposals, Some(dao_key));
            let phase = query.mount();
            let state = query.snapshot();
            let list = state.data.map(|d| d.proposals).unwrap_or_default();
            let text = render::proposal_list(&list, state.loading, state.error.as_deref(), None);
            Outcome::view(text, phase, state.error)
        }
        Command::Proposals { dao: None } => {
            let query = proposals::list(&services.proposals);
            let phase = query.mount();
            let state = query.snapshot();
            let list = state.data.map(|d| d.proposals).unwrap_or_default();
            let text = render::proposal_list(&list, state.loading, state.error.as_deref(), None);
            Outcome::view(text, phase, state.error)
        }
        Command::Proposal { proposal_key } => {
            let query = proposals::detail(&services.proposals, Some(proposal_key));
            let phase = query.mount();
            Outcome::view(render::proposal_detail(&query.snapshot()), phase, query.error())
        }
        Command::Tasks {
            proposal: Some(proposal_key),
        } => {
            let query = tasks::by_proposal(&services.tasks, Some(proposal_key.clone()));
            let phase = query.mount();
            let state = query.snapshot();
            let list = state.data.map(|d| d.tasks).unwrap_or_default();
            let text = render::task_list(
                &list,
                state.loading,
                state.error.as_deref(),
                Some(proposal_key.as_str()),
            );
            Outcome::view(text, phase, state.error)
        }
        Command::Tasks { proposal: None } => {
            let query = tasks::list(&services.tasks);
            let phase = query.mount();
            let state = query.snapshot();
            let list = state.data.map(|d| d.tasks).unwrap_or_default();
            let text = render::task_index(&list, state.loading, state.error.as_deref());
            Outcome::view(text, phase, state.error)
        }
        Command::Task { task_key } => {
            let query = tasks::detail(&services.tasks, Some(task_key));
            let phase = query.mount();
            Outcome::view(render::task_detail(&query.snapshot()), phase, query.error())
        }
        Command::CreateDao(form) => {
            let mut page = DaosPage::new(services);
            page.form = form;
            match page.submit() {
                Ok(created) => Outcome {
                    stdout: format!(
                        "Created DAO {} (tx {})\n\n{}",
                        created.dao_key,
                        created.dao_tx_hash,
                        page.render()
                    ),
                    failure: None,
                },
                Err(err) => Outcome::failed(submit_failure(err)),
            }
        }
        Command::AddMember { dao_key, input } => {
            let add = daos::add_member(&services.daos, dao_key);
            match add.mutate(&input) {
                Ok(added) => Outcome {
                    stdout: format!("Added member {} (tx {})", added.membership_key, added.tx_hash),
                    failure: None,
                },
                Err(_) => Outcome::failed(Failure::Request(
                    add.error()
                        .unwrap_or_else(|| dao_ops_hooks::UNEXPECTED_ERROR.to_string()),
                )),
            }
        }
        Command::CreateProposal { dao_key, form } => {
            let mut page = BoardPage::new(services, Some(dao_key)).with_offsets(offsets);
            page.proposal_form = form;
            match page.submit_proposal() {
                Ok(created) => {
                    page.select_proposal(created.proposal_key.clone());
                    Outcome {
                        stdout: format!(
                            "Created proposal {} (tx {})\n\n{}",
                            created.proposal_key,
                            created.tx_hash,
                            page.render()
                        ),
                        failure: None,
                    }
                }
                Err(err) => Outcome::failed(submit_failure(err)),
            }
        }
        Command::CreateTask {
            dao_key,
            proposal_key,
            form,
        } => {
            let mut page = BoardPage::new(services, Some(dao_key)).with_offsets(offsets);
            if page.mount() == Phase::Error {
                let error = page.board().error();
                return Outcome::view(page.render(), Phase::Error, error);
            }
            page.select_proposal(proposal_key.clone());
            // the board falls back to its first proposal; a task must never land there silently
            if page.selected_proposal_key().as_deref() != Some(proposal_key.as_str()) {
                return Outcome::failed(Failure::Usage(format!(
                    "proposal {proposal_key} is not on this DAO's board"
                )));
            }
            page.task_form = form;
            match page.submit_task() {
                Ok(created) => Outcome {
                    stdout: format!(
                        "Created task {} (tx {})\n\n{}",
                        created.task_key,
                        created.tx_hash,
                        page.render()
                    ),
                    failure: None,
                },
                Err(err) => Outcome::failed(submit_failure(err)),
            }
        }
    }
}
