#![forbid(unsafe_code)]

//! Selection state derived from the arrays a board fetch returned.
//!
//! Nothing here is cached: callers recompute on every change of the proposal list,
//! the task list or the user's choice, so a choice that disappeared after a refetch
//! silently falls back to the first proposal.

use crate::model::{ProposalEntity, TaskEntity};

/// The proposal the board should highlight.
///
/// The user's explicit choice wins while it is still present in `proposals`;
/// otherwise the first keyed proposal in backend order; otherwise none.
/// Proposals without a key are never selected.
pub fn select_proposal_key<'a>(
    proposals: &'a [ProposalEntity],
    user_choice: Option<&str>,
) -> Option<&'a str> {
    let mut keyed = proposals.iter().filter(|p| p.has_key());
    if let Some(choice) = user_choice {
        if let Some(found) = keyed.clone().find(|p| p.entity_key == choice) {
            return Some(found.key());
        }
    }
    keyed.next().map(|p| p.key())
}

/// Tasks whose payload points at `proposal_key`. Tasks without a decoded payload
/// never match.
pub fn tasks_for_proposal<'a>(
    tasks: &'a [TaskEntity],
    proposal_key: Option<&str>,
) -> Vec<&'a TaskEntity> {
    let Some(proposal_key) = proposal_key else {
        return Vec::new();
    };
    tasks
        .iter()
        .filter(|task| {
            task.payload
                .as_ref()
                .is_some_and(|payload| payload.proposal_key == proposal_key)
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct BoardSelection<'a> {
    pub selected_proposal_key: Option<&'a str>,
    pub visible_tasks: Vec<&'a TaskEntity>,
}

impl<'a> BoardSelection<'a> {
    pub fn derive(
        proposals: &'a [ProposalEntity],
        tasks: &'a [TaskEntity],
        user_choice: Option<&str>,
    ) -> Self {
        let selected_proposal_key = select_proposal_key(proposals, user_choice);
        let visible_tasks = tasks_for_proposal(tasks, selected_proposal_key);
        Self {
            selected_proposal_key,
            visible_tasks,
        }
    }
}

#[cfg(test)]
mod tests;
