use super::*;
use crate::model::{Entity, TaskPayload, TaskStatus};
use std::collections::BTreeMap;

fn proposal(key: &str) -> ProposalEntity {
    Entity {
        entity_key: key.to_string(),
        attributes: BTreeMap::new(),
        payload: None,
        expires_at_block: None,
    }
}

fn task(key: &str, proposal_key: Option<&str>) -> TaskEntity {
    Entity {
        entity_key: key.to_string(),
        attributes: BTreeMap::new(),
        payload: proposal_key.map(|proposal_key| TaskPayload {
            id: 1,
            created_at: "2025-01-01T00:00:00.000Z".to_string(),
            deadline: None,
            title: format!("task {key}"),
            budget: None,
            description: None,
            proposal_key: proposal_key.to_string(),
            dao_key: "D1".to_string(),
            status: TaskStatus::Todo,
            version: 1,
        }),
        expires_at_block: None,
    }
}

#[test]
fn defaults_to_first_proposal() {
    let proposals = vec![proposal("P1"), proposal("P2")];
    assert_eq!(select_proposal_key(&proposals, None), Some("P1"));
}

#[test]
fn explicit_choice_wins_while_present() {
    let proposals = vec![proposal("P1"), proposal("P2")];
    assert_eq!(select_proposal_key(&proposals, Some("P2")), Some("P2"));
}

#[test]
fn stale_choice_falls_back_to_first() {
    let after_refetch = vec![proposal("P1")];
    assert_eq!(select_proposal_key(&after_refetch, Some("P2")), Some("P1"));
}

#[test]
fn keyless_proposals_are_never_selected() {
    let proposals = vec![proposal(""), proposal("P2")];
    assert_eq!(select_proposal_key(&proposals, None), Some("P2"));
    assert_eq!(select_proposal_key(&proposals, Some("")), Some("P2"));
    assert_eq!(select_proposal_key(&[proposal("")], None), None);
}

#[test]
fn empty_list_selects_nothing() {
    assert_eq!(select_proposal_key(&[], Some("P1")), None);
    assert_eq!(select_proposal_key(&[], None), None);
}

#[test]
fn task_filter_matches_selected_proposal_only() {
    let tasks = vec![task("T1", Some("P1")), task("T2", Some("P2"))];
    let visible = tasks_for_proposal(&tasks, Some("P1"));
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].entity_key, "T1");
}

#[test]
fn task_filter_drops_tasks_without_payload() {
    let tasks = vec![task("T1", None), task("T2", Some("P1"))];
    let visible = tasks_for_proposal(&tasks, Some("P1"));
    assert_eq!(
        visible.iter().map(|t| t.key()).collect::<Vec<_>>(),
        vec!["T2"]
    );
    assert!(tasks_for_proposal(&tasks, None).is_empty());
}

#[test]
fn selection_derives_from_current_arrays() {
    let proposals = vec![proposal("P1"), proposal("P2")];
    let tasks = vec![
        task("T1", Some("P1")),
        task("T2", Some("P2")),
        task("T3", Some("P2")),
    ];
    let selection = BoardSelection::derive(&proposals, &tasks, Some("P2"));
    assert_eq!(selection.selected_proposal_key, Some("P2"));
    assert_eq!(selection.visible_tasks.len(), 2);

    let none = BoardSelection::derive(&[], &tasks, None);
    assert_eq!(none.selected_proposal_key, None);
    assert!(none.visible_tasks.is_empty());
}
