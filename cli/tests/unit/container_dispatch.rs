//! Tests for detection across containers and single-winner selection.

#![allow(clippy::expect_used)]

use wildfly_buildpack::application::services::{container, release};
use wildfly_buildpack::domain::{
    Application, BuildpackConfig, ContainerError, ContainerKind, Droplet, JavaHome,
};
use wildfly_buildpack::infra::fs::HostFs;

use crate::helpers::write_file;

fn app_with(files: &[&str]) -> (tempfile::TempDir, Application) {
    let tmp = tempfile::tempdir().expect("tempdir");
    for file in files {
        write_file(tmp.path(), file, "archive: file:///tmp/wf.zip\n");
    }
    let app = Application::new(tmp.path());
    (tmp, app)
}

#[test]
fn detect_all_is_empty_for_plain_app() {
    let (_tmp, app) = app_with(&["index.html"]);
    assert!(container::detect_all(&app, &BuildpackConfig::default(), &HostFs).is_empty());
}

#[test]
fn select_returns_the_only_claim() {
    let (_tmp, app) = app_with(&["WEB-INF/provisioning.xml"]);
    let claim = container::select(&app, &BuildpackConfig::default(), &HostFs).expect("claim");
    assert_eq!(claim.kind, ContainerKind::Galleon);
    assert_eq!(claim.tag, "galleon=6.0.3.Final");
}

#[test]
fn select_reports_no_applicable_container() {
    let (_tmp, app) = app_with(&["index.html"]);
    let err = container::select(&app, &BuildpackConfig::default(), &HostFs).expect_err("none");
    assert!(matches!(
        err.downcast_ref::<ContainerError>(),
        Some(ContainerError::NoneApplicable(_))
    ));
}

#[test]
fn select_rejects_app_claimed_by_both_containers() {
    let (_tmp, app) = app_with(&["WEB-INF/provisioning.xml", "wildfly-custom.yml"]);
    let err = container::select(&app, &BuildpackConfig::default(), &HostFs).expect_err("ambiguous");
    assert_eq!(
        err.to_string(),
        "Application is claimed by more than one container: galleon=6.0.3.Final, wildfly-custom"
    );
}

#[test]
fn configured_main_class_leaves_only_the_custom_container() {
    let (_tmp, app) = app_with(&["WEB-INF/provisioning.xml", "wildfly-custom.yml"]);
    let config = BuildpackConfig {
        java_main_class: Some("com.example.Main".into()),
        ..BuildpackConfig::default()
    };
    let app = app.with_main_class(config.java_main_class.clone());
    let claim = container::select(&app, &config, &HostFs).expect("claim");
    assert_eq!(claim.kind, ContainerKind::WildflyCustom);
}

#[test]
fn release_dispatches_to_each_container() {
    for (kind, script) in [
        (
            ContainerKind::Galleon,
            "$PWD/.java-buildpack/galleon/wildfly/bin/standalone.sh",
        ),
        (
            ContainerKind::WildflyCustom,
            "$PWD/.java-buildpack/wildfly_custom/bin/standalone.sh",
        ),
    ] {
        let mut droplet = Droplet::new("/d", kind.name(), JavaHome::new("/d/.java-buildpack/jre"));
        let command = container::release(kind, &mut droplet).expect("release");
        assert!(command.contains(&format!("exec {script} -b 0.0.0.0")), "{command}");
    }
}

#[test]
fn java_opts_profile_is_written_after_release() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let mut droplet = Droplet::new(
        tmp.path(),
        ContainerKind::Galleon.name(),
        JavaHome::new(tmp.path().join(".java-buildpack/open_jdk_jre")),
    );
    container::release(ContainerKind::Galleon, &mut droplet).expect("release");

    let script = release::write_java_opts_profile(&HostFs, &droplet)
        .expect("write")
        .expect("script path");

    assert_eq!(script, tmp.path().join(".profile.d/java_opts.sh"));
    let content = std::fs::read_to_string(&script).expect("read");
    assert!(content.starts_with("export JAVA_OPTS=\"$JAVA_OPTS "), "{content}");
    assert!(content.contains("-Djboss.http.port=$PORT"), "{content}");
}

#[test]
fn java_opts_profile_is_skipped_without_options() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let droplet = Droplet::new(tmp.path(), "galleon", JavaHome::new("/jre"));

    let script = release::write_java_opts_profile(&HostFs, &droplet).expect("write");

    assert_eq!(script, None);
    assert!(!tmp.path().join(".profile.d").exists());
}
