use assert_cmd::Command;
use httpmock::prelude::*;
use predicates::prelude::*;
use serde_json::{Value, json};

fn cli() -> Command {
    let mut cmd = Command::cargo_bin("vnstock-cli").unwrap();
    cmd.env_remove("VNSTOCK_API_KEY")
        .env_remove("VNFIN_LOG")
        .env_remove("VNFIN_TIMEOUT_SECS")
        // Nothing listens here; tests that reach the network override it.
        .env("VNFIN_TCBS_BASE_URL", "http://127.0.0.1:9");
    cmd
}

fn stdout_json(output: &std::process::Output) -> Value {
    let text = String::from_utf8(output.stdout.clone()).unwrap();
    assert_eq!(text.lines().count(), 1, "stdout: {text}");
    serde_json::from_str(text.trim_end()).unwrap()
}

#[test]
fn no_arguments() {
    cli()
        .assert()
        .code(1)
        .stdout("{\"success\": false, \"error\": \"No command provided\"}\n");
}

#[test]
fn missing_ticker() {
    cli()
        .arg("income_statement")
        .assert()
        .code(1)
        .stdout("{\"success\": false, \"error\": \"Ticker required\"}\n");
}

#[test]
fn unknown_command() {
    cli()
        .args(["frobnicate", "AAA"])
        .assert()
        .code(1)
        .stdout("{\"success\": false, \"error\": \"Unknown command: frobnicate\"}\n");
}

#[test]
fn invalid_limit_and_unknown_flag() {
    cli()
        .args(["cash_flow", "FPT", "year", "abc"])
        .assert()
        .code(1)
        .stdout("{\"success\": false, \"error\": \"Invalid limit: abc\"}\n");
    cli()
        .args(["--frobnicate"])
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("{\"success\": false, \"error\": "));
}

#[test]
fn help_and_version_flags_are_command_names() {
    cli()
        .arg("--help")
        .assert()
        .code(1)
        .stdout("{\"success\": false, \"error\": \"Ticker required\"}\n");
    cli()
        .args(["-V", "FPT"])
        .assert()
        .code(1)
        .stdout("{\"success\": false, \"error\": \"Unknown command: -V\"}\n");
}

#[test]
fn rows_keep_provider_layout() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.path("/tcanalysis/v1/finance/FPT/income_statement");
        then.status(200).header("content-type", "application/json").body(
            r#"[{"ticker":"FPT","year":2023,"quarter":4,"revenue":14000,"costOfGoodSold":-9000}]"#,
        );
    });

    cli()
        .env("VNFIN_TCBS_BASE_URL", server.base_url())
        .args(["income_statement", "FPT"])
        .assert()
        .code(0)
        .stdout(concat!(
            r#"{"success": true, "data": [{"ticker": "FPT", "year": 2023, "#,
            r#""quarter": 4, "revenue": 14000, "costOfGoodSold": -9000}]}"#,
            "\n"
        ));
}

#[test]
fn statements_are_truncated() {
    let server = MockServer::start();
    let rows: Vec<Value> = (0..8).map(|i| json!({"year": 2023 - i, "revenue": i})).collect();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/tcanalysis/v1/finance/FPT/balance_sheet")
            .query_param("yearly", "0");
        then.status(200).json_body(Value::Array(rows));
    });

    let output = cli()
        .env("VNFIN_TCBS_BASE_URL", server.base_url())
        .args(["balance_sheet", "FPT", "year", "5"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0));
    mock.assert();

    let v = stdout_json(&output);
    assert_eq!(v["success"], true);
    let data = v["data"].as_array().unwrap();
    assert_eq!(data.len(), 5);
    assert_eq!(data[0]["year"], 2023);
    assert_eq!(data[4]["year"], 2019);
}

#[test]
fn provider_error_exits_zero_with_one_envelope() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.path("/tcanalysis/v1/finance/FPT/financialratio");
        then.status(500).body("boom");
    });

    let output = cli()
        .env("VNFIN_TCBS_BASE_URL", server.base_url())
        .args(["ratios", "FPT"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0));
    let v = stdout_json(&output);
    assert_eq!(v["success"], false);
    assert!(v["error"].as_str().unwrap().contains("500"));
    assert!(v.get("data").is_none());
}

#[test]
fn api_key_is_registered_without_polluting_stdout() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.path("/tcanalysis/v1/ticker/FPT/activity-news")
            .query_param("size", "2")
            .header("authorization", "Bearer k-123");
        then.status(200).json_body(json!({
            "listActivityNews": [{"title": "a"}, {"title": "b"}]
        }));
    });

    let output = cli()
        .env("VNFIN_TCBS_BASE_URL", server.base_url())
        .env("VNSTOCK_API_KEY", "k-123")
        .args(["news", "FPT", "2"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0));
    mock.assert();
    let v = stdout_json(&output);
    assert_eq!(v["data"].as_array().unwrap().len(), 2);
}

#[test]
fn bad_configuration_is_rejected() {
    cli()
        .env("VNFIN_TIMEOUT_SECS", "soon")
        .args(["ratios", "FPT"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Invalid configuration"));
}
