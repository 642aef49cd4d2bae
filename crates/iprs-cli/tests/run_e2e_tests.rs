//! End-to-end tests for the `iprs run` command
//!
//! These tests validate the full submission workflow:
//! - Local validation before any network traffic
//! - Job submission and job-id reporting
//! - Submission rejection handling
//! - The synchronous submit -> poll -> fetch flow

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const JOB_ID: &str = "iprscan5-R20240227-123456-0600-12345678-p1m";

fn result_types_xml(entries: &[(&str, &str)]) -> String {
    let mut xml = String::from(r#"<?xml version="1.0" encoding="UTF-8"?><types>"#);
    for (identifier, suffix) in entries {
        xml.push_str(&format!(
            "<type><identifier>{}</identifier><fileSuffix>{}</fileSuffix></type>",
            identifier, suffix
        ));
    }
    xml.push_str("</types>");
    xml
}

fn iprs_cmd(server: &MockServer) -> Command {
    let mut cmd = Command::cargo_bin("iprs").expect("binary builds");
    cmd.arg("--base-url").arg(server.uri());
    cmd
}

#[tokio::test]
async fn test_run_no_wait_prints_job_id() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/run/"))
        .and(body_string_contains("email=user%40example.org"))
        .respond_with(ResponseTemplate::new(200).set_body_string(JOB_ID))
        .expect(1)
        .mount(&server)
        .await;

    let mut cmd = iprs_cmd(&server);
    cmd.arg("run")
        .arg("--email")
        .arg("user@example.org")
        .arg("--sequence")
        .arg("MKTAYIAKQRQISFVKSHFSRQLEERLGLIEVQ")
        .arg("--no-wait");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(JOB_ID));
}

#[tokio::test]
async fn test_run_invalid_email_makes_no_network_call() {
    let server = MockServer::start().await;

    // Any request at all would be a bug
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string(JOB_ID))
        .expect(0)
        .mount(&server)
        .await;

    let mut cmd = iprs_cmd(&server);
    cmd.arg("run")
        .arg("--email")
        .arg("not-an-email")
        .arg("--sequence")
        .arg("MKTAYIAKQR")
        .arg("--no-wait");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid e-mail address"));
}

#[tokio::test]
async fn test_run_empty_sequence_makes_no_network_call() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string(JOB_ID))
        .expect(0)
        .mount(&server)
        .await;

    let mut cmd = iprs_cmd(&server);
    cmd.arg("run")
        .arg("--email")
        .arg("user@example.org")
        .arg("--sequence")
        .arg("   ")
        .arg("--no-wait");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid sequence input"));
}

#[tokio::test]
async fn test_run_surfaces_submission_rejection() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/run/"))
        .respond_with(
            ResponseTemplate::new(400).set_body_string("Please enter a valid email address"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut cmd = iprs_cmd(&server);
    cmd.arg("run")
        .arg("--email")
        .arg("user@example.org")
        .arg("--sequence")
        .arg("MKTAYIAKQR")
        .arg("--no-wait");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Submission rejected"))
        .stderr(predicate::str::contains("valid email address"));
}

#[tokio::test]
async fn test_run_passes_tool_parameters_through() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/run/"))
        .and(body_string_contains("goterms=true"))
        .and(body_string_contains("appl=PfamA"))
        .and(body_string_contains("appl=SMART"))
        .and(body_string_contains("title=my+job"))
        .respond_with(ResponseTemplate::new(200).set_body_string(JOB_ID))
        .expect(1)
        .mount(&server)
        .await;

    let mut cmd = iprs_cmd(&server);
    cmd.arg("run")
        .arg("--email")
        .arg("user@example.org")
        .arg("--sequence")
        .arg("MKTAYIAKQR")
        .arg("--title")
        .arg("my job")
        .arg("--appl")
        .arg("PfamA,SMART")
        .arg("--goterms")
        .arg("--no-wait");

    cmd.assert().success();
}

#[tokio::test]
async fn test_run_sync_flow_submits_polls_and_fetches() {
    let server = MockServer::start().await;
    let workdir = TempDir::new().expect("temp dir");

    Mock::given(method("POST"))
        .and(path("/run/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(JOB_ID))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/status/{}", JOB_ID)))
        .respond_with(ResponseTemplate::new(200).set_body_string("FINISHED"))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/result_types/{}", JOB_ID)))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(result_types_xml(&[("tsv", "tsv")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/result/{}/tsv", JOB_ID)))
        .respond_with(ResponseTemplate::new(200).set_body_string("P01308\tPfam\tPF00049"))
        .expect(1)
        .mount(&server)
        .await;

    let mut cmd = iprs_cmd(&server);
    cmd.current_dir(workdir.path())
        .arg("run")
        .arg("--email")
        .arg("user@example.org")
        .arg("--sequence")
        .arg("MKTAYIAKQR")
        .arg("--poll-interval")
        .arg("0");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(format!("{}.tsv", JOB_ID)));

    let written = std::fs::read_to_string(workdir.path().join(format!("{}.tsv", JOB_ID)))
        .expect("result file exists");
    assert_eq!(written, "P01308\tPfam\tPF00049");
}
