//! Concurrent status-sequence requests against one shared cursor.

use std::collections::HashMap;

mod common;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_requests_follow_the_cycle() {
    let server = common::start_default_server().await;
    let client = common::client();
    let url = server.url("/?echo_code=200-201-202-203-204");

    let concurrency = 10;
    let requests_per_task = 10;

    let mut tasks = Vec::new();
    for _ in 0..concurrency {
        let client = client.clone();
        let url = url.clone();
        tasks.push(tokio::spawn(async move {
            let mut codes = Vec::new();
            for _ in 0..requests_per_task {
                let res = client.get(&url).send().await.unwrap();
                codes.push(res.status().as_u16());
            }
            codes
        }));
    }

    let mut counts: HashMap<u16, usize> = HashMap::new();
    for task in tasks {
        for code in task.await.unwrap() {
            *counts.entry(code).or_default() += 1;
        }
    }

    // 100 consecutive steps over a 5-code cycle: 20 of each, none skipped
    assert_eq!(counts.len(), 5);
    for code in 200..=204 {
        assert_eq!(counts[&code], concurrency * requests_per_task / 5);
    }
    assert_eq!(server.cursor.position(), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_time_requests_leave_cursor_alone() {
    let server = common::start_default_server().await;
    let client = common::client();

    client
        .get(server.url("/?echo_code=200-500"))
        .send()
        .await
        .unwrap();

    let mut tasks = Vec::new();
    for _ in 0..20 {
        let client = client.clone();
        let url = server.url("/?echo_time");
        tasks.push(tokio::spawn(async move {
            client.get(&url).send().await.unwrap().status()
        }));
    }
    for task in tasks {
        assert!(task.await.unwrap().is_success());
    }

    assert_eq!(server.cursor.position(), 1);
}
