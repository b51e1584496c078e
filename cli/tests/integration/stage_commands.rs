//! Integration tests for the release and compile commands.

#![allow(clippy::expect_used)]

use std::path::Path;

use predicates::prelude::*;

use crate::cli_tests::{buildpack, write};

fn web_command(stdout: &[u8]) -> String {
    let value: serde_yaml::Value = serde_yaml::from_slice(stdout).expect("release yaml");
    value["default_process_types"]["web"]
        .as_str()
        .expect("web process")
        .to_string()
}

fn galleon_app(root: &Path) -> std::path::PathBuf {
    let app = root.join("app");
    write(&app, "WEB-INF/provisioning.xml", "<installation/>");
    app
}

#[test]
fn test_release_galleon_prints_process_yaml() {
    let home = tempfile::tempdir().expect("tempdir");
    let app = galleon_app(home.path());
    let droplet = home.path().join("droplet");

    let out = buildpack(home.path())
        .arg("release")
        .arg(&app)
        .arg(&droplet)
        .output()
        .expect("run");
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(
        web_command(&out.stdout),
        "JAVA_OPTS=$JAVA_OPTS JAVA_HOME=$PWD/.java-buildpack/open_jdk_jre \
         exec $PWD/.java-buildpack/galleon/wildfly/bin/standalone.sh -b 0.0.0.0"
    );
}

#[test]
fn test_release_prepends_environment_entries_in_order() {
    let home = tempfile::tempdir().expect("tempdir");
    let app = home.path().join("app");
    write(&app, "wildfly-custom.yml", "archive: https://example.com/wf.zip\n");
    let droplet = home.path().join("droplet");

    let out = buildpack(home.path())
        .arg("release")
        .arg(&app)
        .arg(&droplet)
        .args(["--env", "B=2", "--env", "A=1"])
        .output()
        .expect("run");
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(
        web_command(&out.stdout),
        "B=2 A=1 JAVA_OPTS=$JAVA_OPTS JAVA_HOME=$PWD/.java-buildpack/open_jdk_jre \
         exec $PWD/.java-buildpack/wildfly_custom/bin/standalone.sh -b 0.0.0.0"
    );
}

#[test]
fn test_release_json_reports_java_opts() {
    let home = tempfile::tempdir().expect("tempdir");
    let app = galleon_app(home.path());

    let out = buildpack(home.path())
        .args(["release", "--json"])
        .arg(&app)
        .arg(home.path().join("droplet"))
        .output()
        .expect("run");
    assert!(out.status.success());
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).expect("json");
    assert_eq!(value["container"], "galleon");
    assert!(
        value["profile"]
            .as_str()
            .is_some_and(|p| p.ends_with(".profile.d/java_opts.sh"))
    );
    let opts: Vec<&str> = value["java_opts"]
        .as_array()
        .expect("java_opts")
        .iter()
        .filter_map(serde_json::Value::as_str)
        .collect();
    assert_eq!(
        opts,
        [
            "-Djboss.http.port=$PORT",
            "-Djava.net.preferIPv4Stack=true",
            "-Djava.net.preferIPv4Addresses=true",
        ]
    );
}

#[test]
fn test_release_forced_container_skips_detection() {
    let home = tempfile::tempdir().expect("tempdir");
    let app = home.path().join("app");
    std::fs::create_dir_all(&app).expect("app dir");

    let out = buildpack(home.path())
        .arg("release")
        .arg(&app)
        .arg(home.path().join("droplet"))
        .args(["--container", "wildfly-custom"])
        .output()
        .expect("run");
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert!(web_command(&out.stdout).contains("/wildfly_custom/bin/standalone.sh"));
}

#[test]
fn test_release_rejects_unknown_container() {
    let home = tempfile::tempdir().expect("tempdir");
    buildpack(home.path())
        .arg("release")
        .arg(home.path())
        .arg(home.path().join("droplet"))
        .args(["--container", "tomcat"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown container 'tomcat'"));
}

#[test]
fn test_release_rejects_malformed_env_entry() {
    let home = tempfile::tempdir().expect("tempdir");
    let app = galleon_app(home.path());
    buildpack(home.path())
        .arg("release")
        .arg(&app)
        .arg(home.path().join("droplet"))
        .args(["--env", "NOVALUE"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("expected KEY=VALUE"));
}

#[test]
fn test_compile_custom_without_archive_reports_descriptor_error() {
    let home = tempfile::tempdir().expect("tempdir");
    let app = home.path().join("app");
    write(&app, "wildfly-custom.yml", "version: 26\n");
    write(&app, "deployments/app.war", "war");

    let out = buildpack(home.path())
        .args(["compile", "--json"])
        .arg(&app)
        .arg(home.path().join("droplet"))
        .output()
        .expect("run");
    assert_eq!(out.status.code(), Some(1));
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).expect("json");
    assert_eq!(value["code"], "INVALID_DESCRIPTOR");
    assert!(
        value["message"]
            .as_str()
            .is_some_and(|m| m.starts_with("wildfly-custom compile failed"))
    );
}

#[test]
fn test_compile_without_container_fails_detection() {
    let home = tempfile::tempdir().expect("tempdir");
    let app = home.path().join("app");
    write(&app, "index.html", "<html/>");

    buildpack(home.path())
        .arg("compile")
        .arg(&app)
        .arg(home.path().join("droplet"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No container recognised"));
}

#[test]
fn test_release_writes_java_opts_profile_into_droplet() {
    let home = tempfile::tempdir().expect("tempdir");
    let app = galleon_app(home.path());
    let droplet = home.path().join("droplet");

    buildpack(home.path())
        .arg("release")
        .arg(&app)
        .arg(&droplet)
        .assert()
        .success();

    let script = std::fs::read_to_string(droplet.join(".profile.d/java_opts.sh"))
        .expect("profile script");
    assert_eq!(
        script,
        "export JAVA_OPTS=\"$JAVA_OPTS -Djboss.http.port=$PORT \
         -Djava.net.preferIPv4Stack=true -Djava.net.preferIPv4Addresses=true\"\n"
    );
}

#[cfg(unix)]
#[test]
fn test_java_opts_profile_expands_port_when_sourced() {
    let home = tempfile::tempdir().expect("tempdir");
    let app = galleon_app(home.path());
    let droplet = home.path().join("droplet");

    buildpack(home.path())
        .arg("release")
        .arg(&app)
        .arg(&droplet)
        .assert()
        .success();

    let out = std::process::Command::new("sh")
        .arg("-c")
        .arg(". ./.profile.d/java_opts.sh && printf '%s' \"$JAVA_OPTS\"")
        .current_dir(&droplet)
        .env("PORT", "8080")
        .env("JAVA_OPTS", "-Xmx512m")
        .output()
        .expect("sh");
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8_lossy(&out.stdout),
        "-Xmx512m -Djboss.http.port=8080 \
         -Djava.net.preferIPv4Stack=true -Djava.net.preferIPv4Addresses=true"
    );
}
