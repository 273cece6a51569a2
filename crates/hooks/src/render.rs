#![forbid(unsafe_code)]

//! Plain-text views. Each function takes the state it shows and returns the lines
//! to print; none of them fetch.

use crate::{BoardPage, DaosPage, QueryState};
use dao_ops_core::{
    DaoDetailResponse, DaoEntity, DaoListResponse, MembershipEntity, ProposalDetailResponse,
    ProposalEntity, TaskDetailResponse, TaskEntity,
};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;

pub const NO_DAOS: &str = "No DAOs yet. Create the first one.";
pub const NO_PROPOSALS: &str = "No proposals for this DAO yet. Create the first one.";
pub const NO_TASKS: &str = "This proposal has no tasks yet.";
pub const SELECT_PROPOSAL: &str = "Select a proposal to see its tasks.";
pub const DAO_NOT_FOUND: &str = "DAO not found in Arkiv.";
pub const MISSING_DAO_KEY: &str = "Missing daoKey parameter.";

/// `2025-01-31 21:30 UTC`, or the raw text when it is not RFC 3339.
pub fn format_timestamp(raw: &str) -> String {
    let short = format_description!("[year]-[month]-[day] [hour]:[minute] UTC");
    OffsetDateTime::parse(raw.trim(), &Rfc3339)
        .ok()
        .and_then(|instant| instant.to_offset(time::UtcOffset::UTC).format(&short).ok())
        .unwrap_or_else(|| raw.to_string())
}

pub fn format_budget(budget: f64) -> String {
    if budget.fract() == 0.0 && budget.abs() < 1e15 {
        format!("{}", budget as i64)
    } else {
        format!("{budget}")
    }
}

fn status_lines(lines: &mut Vec<String>, what: &str, loading: bool, error: Option<&str>) {
    if loading {
        lines.push(format!("Loading {what} from Arkiv..."));
    }
    if let Some(error) = error {
        lines.push(format!("Error loading {what}: {error}"));
    }
}

pub fn dao_list(state: &QueryState<DaoListResponse>) -> String {
    let mut lines = vec!["DAOs".to_string()];
    let daos = state.data.as_ref().map(|d| d.daos.as_slice()).unwrap_or(&[]);
    status_lines(&mut lines, "DAOs", state.loading, state.error.as_deref());
    if !state.loading && state.error.is_none() && daos.is_empty() {
        lines.push(NO_DAOS.to_string());
    }
    for dao in daos {
        let Some(payload) = dao.payload.as_ref() else {
            continue;
        };
        let kind = dao.attribute("type").unwrap_or("dao");
        let mut head = format!("- {} [{kind}]", payload.name);
        if dao.has_key() {
            head.push_str(&format!("  {}", dao.key()));
        }
        lines.push(head);
        if let Some(description) = payload.description.as_deref() {
            lines.push(format!("    {description}"));
        }
        let owner = dao
            .attribute("ownerAddress")
            .unwrap_or(payload.owner_address.as_str());
        lines.push(format!("    owner: {owner}"));
        lines.push(format!("    created: {}", format_timestamp(&payload.created_at)));
    }
    lines.join("\n")
}

pub fn dao_header(dao: Option<&DaoEntity>) -> String {
    let Some((dao, payload)) = dao.and_then(|dao| dao.payload.as_ref().map(|p| (dao, p))) else {
        return format!("{DAO_NOT_FOUND}\nThe DAO data could not be loaded.");
    };
    let mut lines = vec![format!("{} [DAO]", payload.name)];
    lines.push(
        payload
            .description
            .clone()
            .unwrap_or_else(|| "DAO without description".to_string()),
    );
    lines.push(format!("key: {}", key_label(dao.key())));
    lines.push(format!("created: {}", format_timestamp(&payload.created_at)));
    lines.push(format!("owner: {}", payload.owner_address));
    lines.join("\n")
}

pub fn membership_list(memberships: &[MembershipEntity]) -> String {
    let mut lines = vec!["Members".to_string()];
    let rows = memberships
        .iter()
        .filter_map(|m| m.payload.as_ref())
        .map(|p| format!("- {} {}", p.role.as_str(), p.user_address))
        .collect::<Vec<_>>();
    if rows.is_empty() {
        lines.push("No members recorded.".to_string());
    }
    lines.extend(rows);
    lines.join("\n")
}

fn key_label(key: &str) -> &str {
    if key.is_empty() { "(no key)" } else { key }
}

fn proposal_row(lines: &mut Vec<String>, proposal: &ProposalEntity, selected: bool) {
    let Some(payload) = proposal.payload.as_ref() else {
        return;
    };
    let marker = if selected { ">" } else { " " };
    let mut head = format!("{marker} {} [{}]", payload.title, payload.status.as_str());
    if let Some(budget) = payload.budget {
        head.push_str(&format!("  budget {}", format_budget(budget)));
    }
    lines.push(head);
    if let Some(description) = payload.description.as_deref() {
        lines.push(format!("    {description}"));
    }
    if proposal.has_key() {
        lines.push(format!("    {}", proposal.key()));
    }
    lines.push(format!("    created: {}", format_timestamp(&payload.created_at)));
    if let Some(deadline) = payload.deadline.as_deref() {
        lines.push(format!("    deadline: {}", format_timestamp(deadline)));
    }
}

pub fn proposal_list(
    proposals: &[ProposalEntity],
    loading: bool,
    error: Option<&str>,
    selected: Option<&str>,
) -> String {
    let mut lines = vec!["Proposals".to_string()];
    status_lines(&mut lines, "proposals", loading, error);
    if !loading && error.is_none() && proposals.is_empty() {
        lines.push(NO_PROPOSALS.to_string());
    }
    for proposal in proposals {
        let is_selected = proposal.has_key() && selected == Some(proposal.key());
        proposal_row(&mut lines, proposal, is_selected);
    }
    lines.join("\n")
}

fn task_row(lines: &mut Vec<String>, task: &TaskEntity) {
    let Some(payload) = task.payload.as_ref() else {
        return;
    };
    let mut head = format!("- {} [{}]", payload.title, payload.status.as_str());
    if let Some(budget) = payload.budget {
        head.push_str(&format!("  budget {}", format_budget(budget)));
    }
    lines.push(head);
    if let Some(description) = payload.description.as_deref() {
        lines.push(format!("    {description}"));
    }
    if task.has_key() {
        lines.push(format!("    {}", task.key()));
    }
    lines.push(format!("    created: {}", format_timestamp(&payload.created_at)));
    if let Some(deadline) = payload.deadline.as_deref() {
        lines.push(format!("    deadline: {}", format_timestamp(deadline)));
    }
}

/// `selected` is the proposal the tasks belong to; without one there is nothing to list.
pub fn task_list(
    tasks: &[TaskEntity],
    loading: bool,
    error: Option<&str>,
    selected: Option<&str>,
) -> String {
    let mut lines = vec!["Tasks".to_string()];
    if selected.is_none() {
        lines.push(SELECT_PROPOSAL.to_string());
        return lines.join("\n");
    }
    status_lines(&mut lines, "tasks", loading, error);
    if !loading && error.is_none() && tasks.is_empty() {
        lines.push(NO_TASKS.to_string());
    }
    for task in tasks {
        task_row(&mut lines, task);
    }
    lines.join("\n")
}

/// A flat task index, not scoped to any proposal.
pub fn task_index(tasks: &[TaskEntity], loading: bool, error: Option<&str>) -> String {
    let mut lines = vec!["Tasks".to_string()];
    status_lines(&mut lines, "tasks", loading, error);
    if !loading && error.is_none() && tasks.is_empty() {
        lines.push("No tasks yet.".to_string());
    }
    for task in tasks {
        task_row(&mut lines, task);
    }
    lines.join("\n")
}

pub fn daos_page(page: &DaosPage) -> String {
    let mut sections = vec![dao_list(&page.list().snapshot())];
    if let Some(error) = page.create().error() {
        sections.push(format!("Error creating DAO: {error}"));
    }
    sections.join("\n\n")
}

pub fn board_page(page: &BoardPage) -> String {
    let mut sections = vec!["DAO Board".to_string()];
    if page.dao_key().is_none() {
        sections.push(MISSING_DAO_KEY.to_string());
        return sections.join("\n\n");
    }

    let state = page.board().snapshot();
    let dao = state.data.as_ref().and_then(|board| board.usable_dao());
    let error = state.error.as_deref();

    if dao.is_none() && state.loading {
        sections.push("Loading DAO from Arkiv...".to_string());
    }
    if dao.is_none() && !state.loading && error.is_none() {
        sections.push(DAO_NOT_FOUND.to_string());
    }
    if let Some(error) = error {
        sections.push(format!("Error loading board: {error}"));
    }
    if dao.is_none() {
        return sections.join("\n\n");
    }

    let proposals = state
        .data
        .as_ref()
        .map(|board| board.proposals.as_slice())
        .unwrap_or(&[]);
    let selected = page.selected_proposal_key();
    sections.push(dao_header(dao));
    sections.push(proposal_list(
        proposals,
        state.loading,
        error,
        selected.as_deref(),
    ));
    sections.push(task_list(
        &page.visible_tasks(),
        state.loading,
        error,
        selected.as_deref(),
    ));
    if let Some(error) = page.create_proposal().error() {
        sections.push(format!("Error creating proposal: {error}"));
    }
    if let Some(error) = page.create_task().error() {
        sections.push(format!("Error creating task: {error}"));
    }
    sections.join("\n\n")
}

pub fn dao_detail(state: &QueryState<DaoDetailResponse>) -> String {
    let mut lines = Vec::new();
    status_lines(&mut lines, "DAO", state.loading, state.error.as_deref());
    if let Some(detail) = state.data.as_ref() {
        lines.push(dao_header(detail.dao.as_ref()));
        lines.push(String::new());
        lines.push(membership_list(&detail.memberships));
    }
    lines.join("\n")
}

pub fn proposal_detail(state: &QueryState<ProposalDetailResponse>) -> String {
    let mut lines = Vec::new();
    status_lines(&mut lines, "proposal", state.loading, state.error.as_deref());
    if let Some(detail) = state.data.as_ref() {
        lines.push(format!("DAO: {}", detail.dao_key));
        if detail.proposal.payload.is_some() {
            proposal_row(&mut lines, &detail.proposal, false);
        } else {
            lines.push(format!(
                "{} (undecodable payload)",
                key_label(detail.proposal.key())
            ));
        }
        lines.push(String::new());
        lines.push(task_list(&detail.tasks, false, None, Some(detail.proposal_key.as_str())));
    }
    lines.join("\n")
}

pub fn task_detail(state: &QueryState<TaskDetailResponse>) -> String {
    let mut lines = Vec::new();
    status_lines(&mut lines, "task", state.loading, state.error.as_deref());
    if let Some(detail) = state.data.as_ref() {
        match detail.task.payload.as_ref() {
            Some(payload) => {
                task_row(&mut lines, &detail.task);
                lines.push(format!("    proposal: {}", payload.proposal_key));
                lines.push(format!("    dao: {}", payload.dao_key));
            }
            None => lines.push(format!(
                "{} (undecodable payload)",
                key_label(detail.task.key())
            )),
        }
    }
    lines.join("\n")
}
