#![forbid(unsafe_code)]

use dao_ops_client::{ClientConfig, ClientError, Services};
use dao_ops_core::{CreateDaoInput, CreateTaskInput, TaskStatus};
use httpmock::Method::{GET, POST};
use httpmock::MockServer;
use serde_json::json;

fn services_for(server: &MockServer) -> Services {
    let config = ClientConfig::new(&server.base_url()).expect("config");
    Services::http(&config)
}

#[test]
fn list_daos_decodes_envelopes() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/arkiv/daos");
        then.status(200).json_body(json!({
            "count": 2,
            "daos": [
                {
                    "entityKey": "0xdao1",
                    "attributes": { "type": "dao" },
                    "payload": {
                        "id": 1,
                        "createdAt": "2025-01-01T00:00:00.000Z",
                        "name": "Acme",
                        "ownerAddress": "0xowner",
                        "version": 1
                    },
                    "expiresAtBlock": "99"
                },
                { "entityKey": "0xdao2", "attributes": {}, "payload": null, "expiresAtBlock": null }
            ]
        }));
    });

    let list = services_for(&server).daos.list().expect("list daos");
    mock.assert();
    assert_eq!(list.count, 2);
    assert_eq!(list.daos[0].payload.as_ref().map(|p| p.name.as_str()), Some("Acme"));
    assert!(list.daos[1].payload.is_none());
}

#[test]
fn create_dao_posts_json_body() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/arkiv/daos")
            .json_body(json!({ "name": "Acme" }));
        then.status(201).json_body(json!({
            "daoKey": "k1",
            "daoTxHash": "0xtx1",
            "membershipKey": "m1",
            "membershipTxHash": "0xtx2",
            "ownerAddress": "0xowner"
        }));
    });

    let created = services_for(&server)
        .daos
        .create(&CreateDaoInput {
            name: "Acme".to_string(),
            ..Default::default()
        })
        .expect("create dao");
    mock.assert();
    assert_eq!(created.dao_key, "k1");
    assert_eq!(created.membership_key, "m1");
}

#[test]
fn backend_rejection_surfaces_message() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/arkiv/tasks");
        then.status(400)
            .json_body(json!({ "error": "budget must be positive" }));
    });

    let err = services_for(&server)
        .tasks
        .create(&CreateTaskInput {
            dao_key: "d".to_string(),
            proposal_key: "p".to_string(),
            title: "t".to_string(),
            budget: Some(-1.0),
            status: Some(TaskStatus::Todo),
            ..Default::default()
        })
        .expect_err("rejected");
    assert_eq!(err.status(), Some(400));
    assert_eq!(err.message(), "budget must be positive");
}

#[test]
fn bearer_token_is_attached_when_configured() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/arkiv/tasks/0xt1")
            .header("Authorization", "Bearer s3cret");
        then.status(200).json_body(json!({
            "taskKey": "0xt1",
            "task": { "entityKey": "0xt1", "attributes": {}, "payload": null, "expiresAtBlock": null }
        }));
    });

    let config = ClientConfig::new(&server.base_url())
        .expect("config")
        .with_auth_token(Some("s3cret".to_string()));
    let detail = Services::http(&config).tasks.detail("0xt1").expect("task detail");
    mock.assert();
    assert_eq!(detail.task_key, "0xt1");
}

#[test]
fn wrong_shape_is_a_decode_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/arkiv/proposals/0xp1");
        then.status(200).json_body(json!({ "unexpected": true }));
    });

    let err = services_for(&server)
        .proposals
        .detail("0xp1")
        .expect_err("decode failure");
    assert!(matches!(err, ClientError::Decode { .. }), "got {err:?}");
}

#[test]
fn unreachable_backend_is_a_transport_error() {
    let config = ClientConfig::new("http://127.0.0.1:9").expect("config");
    let err = Services::http(&config).daos.list().expect_err("no server");
    assert!(matches!(err, ClientError::Transport(_)), "got {err:?}");
    assert!(!err.message().trim().is_empty());
}
