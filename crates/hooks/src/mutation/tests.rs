use super::*;

#[test]
fn success_stores_last_result_and_clears_error() {
    let mutation: Mutation<String, String> = Mutation::new(
        "echo",
        Arc::new(|input: &String| {
            if input.is_empty() {
                Err(ClientError::Status {
                    status: 400,
                    message: "name is required".to_string(),
                })
            } else {
                Ok(format!("created {input}"))
            }
        }),
    );

    let err = mutation.mutate(&String::new()).expect_err("rejected");
    assert_eq!(err.message(), "name is required");
    assert_eq!(mutation.error().as_deref(), Some("name is required"));
    assert!(mutation.last_result().is_none());

    let ok = mutation.mutate(&"acme".to_string()).expect("created");
    assert_eq!(ok, "created acme");
    let state = mutation.snapshot();
    assert!(!state.loading);
    assert!(state.error.is_none());
    assert_eq!(state.last_result.as_deref(), Some("created acme"));
}

#[test]
fn failure_keeps_previous_result() {
    let mutation: Mutation<bool, u32> = Mutation::new(
        "flaky",
        Arc::new(|fail: &bool| {
            if *fail {
                Err(ClientError::Transport("timed out".to_string()))
            } else {
                Ok(1)
            }
        }),
    );
    mutation.mutate(&false).expect("first");
    assert!(mutation.mutate(&true).is_err());
    assert_eq!(mutation.last_result(), Some(1));
    assert_eq!(mutation.error().as_deref(), Some("timed out"));
    assert!(!mutation.is_loading());
}
