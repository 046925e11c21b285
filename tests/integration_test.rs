use leetcode_autosubmit::services::ProgressStore;
use leetcode_autosubmit::{App, Config, SelectionMode, StopReason};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use wiremock::matchers::{body_json, body_partial_json, header, method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TWO_SUM_PAGE: &str = r#"
    <html><body>
      <h1><a href="https://platform.example/problems/two-sum/">1. Two Sum</a></h1>
      <div class="tabbed-set">
        <label>Java</label><label>Python</label>
        <div class="tabbed-block"><pre><code>class Solution {}</code></pre></div>
        <div class="tabbed-block"><pre><code>class Solution: pass</code></pre></div>
      </div>
    </body></html>
"#;

/// 指向 mock 服务的测试配置
fn test_config(server: &MockServer, dir: &TempDir, max_problem: u32) -> Config {
    Config {
        max_problem,
        selection: SelectionMode::Exhaustive,
        reference_url_template: format!("{}/LeetCode/problems/{{id}}/", server.uri()),
        reference_timeout_secs: 2,
        platform_base_url: server.uri(),
        platform_timeout_secs: 2,
        progress_file: dir.path().join("progress.json").to_string_lossy().to_string(),
        skip_file: dir.path().join("skipped.log").to_string_lossy().to_string(),
        session_token: "session".to_string(),
        csrf_token: "csrf".to_string(),
        ..Config::default()
    }
}

fn seeded() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn read_skip_log(dir: &TempDir) -> String {
    fs::read_to_string(dir.path().join("skipped.log")).unwrap_or_default()
}

fn load_progress(dir: &TempDir) -> leetcode_autosubmit::ProgressRecord {
    ProgressStore::new(dir.path().join("progress.json"))
        .load()
        .expect("进度文件应当可读")
}

async fn mount_question_id(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_partial_json(json!({ "operationName": "questionData" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "data": { "question": { "questionId": 1 } } })),
        )
        .mount(server)
        .await;
}

fn write_completed(path: &Path, ids: impl IntoIterator<Item = u32>) {
    let mut record = leetcode_autosubmit::ProgressRecord::new();
    for id in ids {
        record.record(id, true);
    }
    ProgressStore::new(path).save(&record).unwrap();
}

#[tokio::test]
async fn test_successful_submission_is_recorded() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    write_completed(&dir.path().join("progress.json"), 1..=41);

    Mock::given(method("GET"))
        .and(path("/LeetCode/problems/42/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(TWO_SUM_PAGE))
        .expect(1)
        .mount(&server)
        .await;
    mount_question_id(&server).await;
    Mock::given(method("POST"))
        .and(path("/problems/two-sum/submit/"))
        .and(header("referer", "https://platform.example/problems/two-sum/"))
        .and(header("x-csrftoken", "csrf"))
        .and(body_json(json!({
            "lang": "java",
            "question_id": "1",
            "typed_code": "class Solution {}"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "submission_id": "99" })))
        .expect(1)
        .mount(&server)
        .await;

    let config = test_config(&server, &dir, 42);
    let mut app = App::initialize_with_rng(config, seeded()).await.unwrap();
    let summary = app.run().await.unwrap();

    assert_eq!(summary.stop, StopReason::Submitted(42));
    assert_eq!(summary.submitted(), Some(42));
    assert_eq!(summary.attempts, 1);
    assert_eq!(app.record().get(42), Some(true));

    let saved = load_progress(&dir);
    assert_eq!(saved.get(42), Some(true));
    assert_eq!(saved.completed_count(), 42);
    assert!(!dir.path().join("skipped.log").exists());
}

#[tokio::test]
async fn test_missing_pages_are_skipped_and_loop_continues() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    // 没有挂载任何页面，所有请求都是 404
    let config = test_config(&server, &dir, 7);
    let mut app = App::initialize_with_rng(config, seeded()).await.unwrap();
    let summary = app.run().await.unwrap();

    assert_eq!(summary.stop, StopReason::NoCandidate);
    assert_eq!(summary.attempts, 7);
    assert_eq!(summary.skipped, 7);

    let skip_log = read_skip_log(&dir);
    assert!(skip_log.lines().any(|line| line == "7: page not found"));
    assert_eq!(skip_log.lines().count(), 7);

    let saved = load_progress(&dir);
    assert_eq!(saved.get(7), Some(false));
    assert_eq!(saved.len(), 7);
    assert_eq!(saved.completed_count(), 0);
}

#[tokio::test]
async fn test_no_candidate_writes_nothing() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let progress_path = dir.path().join("progress.json");
    fs::write(&progress_path, r#"{"1": true, "2": true, "3": true}"#).unwrap();

    let config = test_config(&server, &dir, 3);
    let mut app = App::initialize_with_rng(config, seeded()).await.unwrap();
    let summary = app.run().await.unwrap();

    assert_eq!(summary.stop, StopReason::NoCandidate);
    assert_eq!(summary.attempts, 0);
    assert_eq!(
        fs::read_to_string(&progress_path).unwrap(),
        r#"{"1": true, "2": true, "3": true}"#
    );
    assert!(!dir.path().join("skipped.log").exists());
}

#[tokio::test]
async fn test_corrupt_progress_aborts_without_overwriting() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let progress_path = dir.path().join("progress.json");
    fs::write(&progress_path, "not json").unwrap();

    let config = test_config(&server, &dir, 3);
    let result = App::initialize_with_rng(config, seeded()).await;

    assert!(result.is_err());
    assert_eq!(fs::read_to_string(&progress_path).unwrap(), "not json");
}

#[tokio::test]
async fn test_missing_credentials_is_fatal() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    let config = Config {
        session_token: String::new(),
        csrf_token: String::new(),
        ..test_config(&server, &dir, 3)
    };
    assert!(App::initialize_with_rng(config, seeded()).await.is_err());
}

#[tokio::test]
async fn test_repeated_blocks_stop_the_run() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path_regex(r"^/LeetCode/problems/\d+/$"))
        .respond_with(ResponseTemplate::new(200).set_body_string(TWO_SUM_PAGE))
        .mount(&server)
        .await;
    mount_question_id(&server).await;
    Mock::given(method("POST"))
        .and(path("/problems/two-sum/submit/"))
        .respond_with(ResponseTemplate::new(429).set_body_string("Too Many Requests"))
        .mount(&server)
        .await;

    let config = Config {
        max_block_rejections: 2,
        ..test_config(&server, &dir, 10)
    };
    let mut app = App::initialize_with_rng(config, seeded()).await.unwrap();
    let summary = app.run().await.unwrap();

    assert_eq!(summary.stop, StopReason::TooManyBlocks);
    assert_eq!(summary.blocked, 2);
    assert_eq!(summary.attempts, 2);

    let skip_log = read_skip_log(&dir);
    assert_eq!(skip_log.lines().count(), 2);
    assert!(skip_log
        .lines()
        .all(|line| line.ends_with(": blocked or rate-limited (status 429): Too Many Requests")));
    assert_eq!(load_progress(&dir).len(), 2);
}

#[tokio::test]
async fn test_rejected_submission_logs_reason_and_moves_on() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path_regex(r"^/LeetCode/problems/\d+/$"))
        .respond_with(ResponseTemplate::new(200).set_body_string(TWO_SUM_PAGE))
        .mount(&server)
        .await;
    mount_question_id(&server).await;
    Mock::given(method("POST"))
        .and(path("/problems/two-sum/submit/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "try later" })))
        .mount(&server)
        .await;

    let config = test_config(&server, &dir, 2);
    let mut app = App::initialize_with_rng(config, seeded()).await.unwrap();
    let summary = app.run().await.unwrap();

    assert_eq!(summary.stop, StopReason::NoCandidate);
    assert_eq!(summary.attempts, 2);

    let skip_log = read_skip_log(&dir);
    assert!(skip_log.contains("1: submission failed: try later\n"));
    assert!(skip_log.contains("2: submission failed: try later\n"));
}

#[tokio::test]
async fn test_attempt_limit_caps_the_skip_chain() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    let config = Config {
        max_total_attempts: 3,
        ..test_config(&server, &dir, 10)
    };
    let mut app = App::initialize_with_rng(config, seeded()).await.unwrap();
    let summary = app.run().await.unwrap();

    assert_eq!(summary.stop, StopReason::AttemptLimit);
    assert_eq!(summary.attempts, 3);
    assert_eq!(load_progress(&dir).len(), 3);
}

#[tokio::test]
async fn test_solved_sync_excludes_platform_solved_ids() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_partial_json(json!({ "operationName": "problemsetQuestionListV2" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "problemsetQuestionListV2": {
                "questions": [
                    { "questionFrontendId": "1", "status": "SOLVED" },
                    { "questionFrontendId": "2", "status": "SOLVED" }
                ],
                "hasMore": false
            } }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = Config {
        sync_solved: true,
        ..test_config(&server, &dir, 3)
    };
    let mut app = App::initialize_with_rng(config, seeded()).await.unwrap();
    let summary = app.run().await.unwrap();

    assert_eq!(summary.attempts, 1);
    assert_eq!(read_skip_log(&dir), "3: page not found\n");
}

#[tokio::test]
async fn test_blocked_submission_keeps_platform_reason() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/LeetCode/problems/1/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(TWO_SUM_PAGE))
        .mount(&server)
        .await;
    mount_question_id(&server).await;
    Mock::given(method("POST"))
        .and(path("/problems/two-sum/submit/"))
        .respond_with(
            ResponseTemplate::new(403).set_body_json(json!({ "error": "CSRF verification failed" })),
        )
        .mount(&server)
        .await;

    let config = test_config(&server, &dir, 1);
    let mut app = App::initialize_with_rng(config, seeded()).await.unwrap();
    let summary = app.run().await.unwrap();

    assert_eq!(summary.blocked, 1);
    assert_eq!(
        read_skip_log(&dir),
        "1: blocked or rate-limited (status 403): CSRF verification failed\n"
    );
}

#[tokio::test]
async fn test_html_error_page_is_one_skip_line() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/LeetCode/problems/1/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(TWO_SUM_PAGE))
        .mount(&server)
        .await;
    mount_question_id(&server).await;
    Mock::given(method("POST"))
        .and(path("/problems/two-sum/submit/"))
        .respond_with(ResponseTemplate::new(502).set_body_string(
            "<html>\r\n<head><title>502 Bad Gateway</title></head>\r\n</html>",
        ))
        .mount(&server)
        .await;

    let config = test_config(&server, &dir, 1);
    let mut app = App::initialize_with_rng(config, seeded()).await.unwrap();
    app.run().await.unwrap();

    assert_eq!(
        read_skip_log(&dir),
        "1: submission failed: <html> <head><title>502 Bad Gateway</title></head> </html>\n"
    );
}
