use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;
use std::time::Duration;

fn counting_query(
    key: Option<String>,
    fail_on: Option<&'static str>,
) -> (Query<String, String>, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let fetcher: Fetcher<String, String> = Arc::new(move |key: &String| {
        counter.fetch_add(1, Ordering::SeqCst);
        if Some(key.as_str()) == fail_on {
            Err(ClientError::Transport("connection refused".to_string()))
        } else {
            Ok(format!("data for {key}"))
        }
    });
    (Query::new("test.query", key, fetcher), calls)
}

#[test]
fn initial_phase_follows_key_presence() {
    let (with_key, _) = counting_query(Some("a".to_string()), None);
    assert_eq!(with_key.phase(), Phase::Loading);

    let (without_key, calls) = counting_query(None, None);
    assert_eq!(without_key.phase(), Phase::Idle);
    assert_eq!(without_key.mount(), Phase::Idle);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn null_key_never_fetches_and_transition_fetches_once() {
    let (query, calls) = counting_query(None, None);
    query.mount();
    query.refetch();
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    assert_eq!(query.set_key(Some("k1".to_string())), Phase::Success);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(query.data().as_deref(), Some("data for k1"));

    // same key again is not a change
    query.set_key(Some("k1".to_string()));
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    query.set_key(Some("k2".to_string()));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert_eq!(query.data().as_deref(), Some("data for k2"));

    query.set_key(None);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert_eq!(query.data().as_deref(), Some("data for k2"));
}

#[test]
fn clearing_key_before_mount_is_idle() {
    let (query, calls) = counting_query(Some("k1".to_string()), None);
    assert_eq!(query.phase(), Phase::Loading);

    assert_eq!(query.set_key(None), Phase::Idle);
    assert!(!query.snapshot().loading);
    assert_eq!(query.mount(), Phase::Idle);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn refetch_always_settles() {
    let (query, calls) = counting_query(Some("k".to_string()), None);
    for _ in 0..5 {
        assert_eq!(query.refetch(), Phase::Success);
        assert!(!query.is_loading());
    }
    assert_eq!(calls.load(Ordering::SeqCst), 5);
}

#[test]
fn error_keeps_last_good_data() {
    let (query, _) = counting_query(Some("good".to_string()), Some("bad"));
    assert_eq!(query.mount(), Phase::Success);

    assert_eq!(query.set_key(Some("bad".to_string())), Phase::Error);
    let state = query.snapshot();
    assert_eq!(state.error.as_deref(), Some("connection refused"));
    assert_eq!(state.data.as_deref(), Some("data for good"));
    assert!(!state.loading);

    // a later success clears the error slot
    assert_eq!(query.set_key(Some("good".to_string())), Phase::Success);
    assert!(query.error().is_none());
}

#[test]
fn blank_error_message_falls_back() {
    let fetcher: Fetcher<(), u32> =
        Arc::new(|_: &()| Err(ClientError::Transport("  ".to_string())));
    let query = Query::new("blank", Some(()), fetcher);
    query.mount();
    assert_eq!(query.error().as_deref(), Some(crate::UNEXPECTED_ERROR));
}

#[test]
fn settlement_after_unmount_is_dropped() {
    let (started_tx, started_rx) = mpsc::channel::<()>();
    let (release_tx, release_rx) = mpsc::channel::<()>();
    let release_rx = Mutex::new(release_rx);
    let fetcher: Fetcher<(), u32> = Arc::new(move |_: &()| {
        let _ = started_tx.send(());
        let _ = release_rx
            .lock()
            .expect("release lock")
            .recv_timeout(Duration::from_secs(5));
        Ok(7)
    });
    let query = Query::new("unmount", Some(()), fetcher);
    let in_flight = query.clone();
    let worker = std::thread::spawn(move || in_flight.refetch());

    started_rx
        .recv_timeout(Duration::from_secs(5))
        .expect("fetch started");
    query.unmount();
    release_tx.send(()).expect("release fetch");
    worker.join().expect("worker");

    assert!(query.data().is_none());
    // a refetch on an unmounted handle does not issue anything either
    assert_eq!(query.refetch(), Phase::Loading);
}

#[test]
fn overlapping_refetches_last_settled_wins() {
    let (slow_started_tx, slow_started_rx) = mpsc::channel::<()>();
    let (release_tx, release_rx) = mpsc::channel::<()>();
    let release_rx = Mutex::new(release_rx);
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let fetcher: Fetcher<(), usize> = Arc::new(move |_: &()| {
        let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
        if n == 1 {
            let _ = slow_started_tx.send(());
            let _ = release_rx
                .lock()
                .expect("release lock")
                .recv_timeout(Duration::from_secs(5));
        }
        Ok(n)
    });
    let query = Query::new("race", Some(()), fetcher);

    let slow = query.clone();
    let worker = std::thread::spawn(move || slow.refetch());
    slow_started_rx
        .recv_timeout(Duration::from_secs(5))
        .expect("slow fetch started");

    // the second request settles first
    assert_eq!(query.refetch(), Phase::Success);
    assert_eq!(query.data(), Some(2));

    release_tx.send(()).expect("release slow fetch");
    worker.join().expect("worker");
    assert_eq!(query.data(), Some(1));
    assert_eq!(query.phase(), Phase::Success);
}

#[test]
fn refetch_all_settles_every_handle() {
    let (a, a_calls) = counting_query(Some("a".to_string()), None);
    let (b, b_calls) = counting_query(Some("b".to_string()), Some("b"));
    let handles: [&dyn Refetch; 2] = [&a, &b];
    let phases = refetch_all(&handles);
    assert_eq!(phases, vec![Phase::Success, Phase::Error]);
    assert_eq!(a_calls.load(Ordering::SeqCst), 1);
    assert_eq!(b_calls.load(Ordering::SeqCst), 1);
}
