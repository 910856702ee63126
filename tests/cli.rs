use assert_cmd::Command;
use camino::Utf8PathBuf;
use httpmock::{Method::POST, MockServer};
use indoc::indoc;
use predicates::prelude::*;
use schema_codec::{dump_schema, ExecutionContext, Schema, OPERATION_NAME, PKG_VERSION};
use serde_json::Value;
use tempfile::TempDir;

const AWESOME_SDL: &str = indoc! {"
    schema {
      query: AwesomeQuery
    }

    type AwesomeQuery {
      version: Int!
    }
"};

fn awesome_introspection() -> Value {
    let schema = Schema::parse(AWESOME_SDL, "awesome.graphql").unwrap();
    dump_schema(&schema, None, &ExecutionContext::new()).unwrap()
}

fn temp_dir() -> (TempDir, Utf8PathBuf) {
    let dir = TempDir::new().expect("failed to create temporary directory");
    let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
    (dir, root)
}

fn schema_codec() -> Command {
    Command::cargo_bin("schema-codec").unwrap()
}

#[test]
fn its_executable() {
    // running the CLI with no command prints usage to stderr
    schema_codec()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn it_prints_its_version() {
    schema_codec()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(PKG_VERSION));
}

#[test]
fn it_prints_sdl_from_an_introspection_file() {
    let (_dir, root) = temp_dir();
    let path = root.join("schema.json");
    std::fs::write(&path, awesome_introspection().to_string()).unwrap();

    schema_codec()
        .args(["sdl", path.as_str()])
        .assert()
        .success()
        .stdout(AWESOME_SDL);
}

#[test]
fn it_prints_introspection_json_from_an_sdl_file() {
    let (_dir, root) = temp_dir();
    let path = root.join("schema.graphql");
    std::fs::write(&path, AWESOME_SDL).unwrap();

    let output = schema_codec()
        .args(["json", path.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{\n  \"data\""))
        .get_output()
        .stdout
        .clone();

    let value: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value, awesome_introspection());
}

#[test]
fn it_reads_either_format_from_stdin() {
    schema_codec()
        .args(["sdl", "-"])
        .write_stdin(AWESOME_SDL)
        .assert()
        .success()
        .stdout(AWESOME_SDL);

    schema_codec()
        .args(["sdl", "-"])
        .write_stdin(awesome_introspection().to_string())
        .assert()
        .success()
        .stdout(AWESOME_SDL);
}

#[test]
fn it_writes_to_the_output_path() {
    let (_dir, root) = temp_dir();
    let input = root.join("schema.graphql");
    let output = root.join("out/schema.json");
    std::fs::write(&input, AWESOME_SDL).unwrap();

    schema_codec()
        .args(["json", input.as_str(), "--output", output.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written: Value = serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(written, awesome_introspection());
}

#[test]
fn it_fails_when_the_schema_file_is_missing() {
    let (_dir, root) = temp_dir();
    let missing = root.join("missing.graphql");

    schema_codec()
        .args(["sdl", missing.as_str()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no schema found"));
}

#[test]
fn it_fails_on_malformed_sdl() {
    schema_codec()
        .args(["json", "-"])
        .write_stdin("type AwesomeQuery {")
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not parse SDL"));
}

#[test]
fn it_introspects_an_endpoint() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/graphql")
            .header("x-api-key", "secret")
            .json_body_includes(serde_json::json!({ "operationName": OPERATION_NAME }).to_string());
        then.status(200).json_body(awesome_introspection());
    });

    schema_codec()
        .args(["introspect", &server.url("/graphql"), "-H", "x-api-key:secret"])
        .assert()
        .success()
        .stdout(AWESOME_SDL);

    mock.assert();
}

#[test]
fn it_reports_introspection_errors() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/graphql");
        then.status(200)
            .json_body(serde_json::json!({ "errors": [{ "message": "introspection is disabled" }] }));
    });

    schema_codec()
        .args(["introspect", &server.url("/graphql"), "--format", "json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("introspection is disabled"));
}
