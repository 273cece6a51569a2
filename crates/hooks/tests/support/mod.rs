#![forbid(unsafe_code)]
#![allow(dead_code)]

use dao_ops_client::{ApiClient, ClientError, Services, Transport};
use serde_json::{Value, json};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Recorded {
    pub(crate) method: &'static str,
    pub(crate) path: String,
    pub(crate) body: Option<Value>,
}

type Reply = Result<Value, ClientError>;

/// In-memory backend. Replies queue per `(method, path)`; the last one queued
/// keeps answering once the others are used up.
#[derive(Default)]
pub(crate) struct FakeBackend {
    replies: Mutex<HashMap<(&'static str, String), VecDeque<Reply>>>,
    log: Mutex<Vec<Recorded>>,
}

impl FakeBackend {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub(crate) fn services(self: &Arc<Self>) -> Services {
        let transport: Arc<dyn Transport> = self.clone();
        Services::new(ApiClient::new(transport))
    }

    pub(crate) fn on_get(&self, path: &str, reply: Reply) {
        self.push("GET", path, reply);
    }

    pub(crate) fn on_post(&self, path: &str, reply: Reply) {
        self.push("POST", path, reply);
    }

    fn push(&self, method: &'static str, path: &str, reply: Reply) {
        self.replies
            .lock()
            .expect("replies lock")
            .entry((method, path.to_string()))
            .or_default()
            .push_back(reply);
    }

    pub(crate) fn requests(&self) -> Vec<Recorded> {
        self.log.lock().expect("log lock").clone()
    }

    pub(crate) fn count(&self, method: &str, path: &str) -> usize {
        self.requests()
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }

    fn answer(&self, method: &'static str, path: &str, body: Option<&Value>) -> Reply {
        self.log.lock().expect("log lock").push(Recorded {
            method,
            path: path.to_string(),
            body: body.cloned(),
        });
        let mut replies = self.replies.lock().expect("replies lock");
        let Some(queue) = replies.get_mut(&(method, path.to_string())) else {
            return Err(ClientError::Status {
                status: 404,
                message: format!("no route for {method} {path}"),
            });
        };
        if queue.len() > 1 {
            queue.pop_front().expect("queued reply")
        } else {
            queue.front().cloned().expect("queued reply")
        }
    }
}

impl Transport for FakeBackend {
    fn get(&self, path: &str) -> Result<Value, ClientError> {
        self.answer("GET", path, None)
    }

    fn post(&self, path: &str, body: &Value) -> Result<Value, ClientError> {
        self.answer("POST", path, Some(body))
    }
}

pub(crate) fn rejected(status: u16, message: &str) -> ClientError {
    ClientError::Status {
        status,
        message: message.to_string(),
    }
}

pub(crate) fn dao(key: &str, name: &str) -> Value {
    json!({
        "entityKey": key,
        "attributes": { "type": "dao", "ownerAddress": "0xowner" },
        "payload": {
            "id": 1,
            "createdAt": "2025-01-31T21:30:00.000Z",
            "name": name,
            "ownerAddress": "0xowner",
            "version": 1
        }
    })
}

pub(crate) fn proposal(key: &str, dao_key: &str, title: &str) -> Value {
    json!({
        "entityKey": key,
        "attributes": { "type": "proposal", "daoKey": dao_key },
        "payload": {
            "id": 2,
            "createdAt": "2025-02-01T08:00:00.000Z",
            "title": title,
            "daoKey": dao_key,
            "status": "open",
            "version": 1
        }
    })
}

pub(crate) fn task(key: &str, dao_key: &str, proposal_key: &str, title: &str) -> Value {
    json!({
        "entityKey": key,
        "attributes": { "type": "task", "proposalKey": proposal_key },
        "payload": {
            "id": 3,
            "createdAt": "2025-02-02T08:00:00.000Z",
            "title": title,
            "proposalKey": proposal_key,
            "daoKey": dao_key,
            "status": "todo",
            "version": 1
        }
    })
}

pub(crate) fn board(dao_key: &str, proposals: Vec<Value>, tasks: Vec<Value>) -> Value {
    json!({
        "daoKey": dao_key,
        "dao": dao(dao_key, "Guild"),
        "proposals": proposals,
        "tasks": tasks
    })
}
