//! End-to-end resolution tests driving the compile step with stub compilers.
//!
//! Each stub is a small shell script standing in for `jelloc`, so these
//! tests are unix-only. The stubs cover the full failure surface: non-zero
//! exit with stderr/stdout, silent failure, a successful exit that produces
//! no artifact, and the happy path.

#![cfg(unix)]

use jello_launch::{
    DebugSession, Error, LaunchRequest, ProcessDescriptor, Resolver, WorkspaceContext,
};
use jello_launch_config::DebuggerSettings;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Write an executable stub compiler script into `dir`.
fn stub_compiler(dir: &Path, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("jelloc");
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    let mut perms = std::fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).unwrap();
    path
}

fn resolver_with_compiler(jelloc: &Path) -> Resolver {
    let settings = DebuggerSettings {
        jelloc_path: Some(jelloc.to_string_lossy().into_owned()),
        ..Default::default()
    };
    Resolver::new(settings, None)
}

fn write_source(workspace: &Path, name: &str) -> PathBuf {
    let source = workspace.join(name);
    std::fs::write(&source, "actor Main { fn run() {} }\n").unwrap();
    source
}

#[test]
fn compile_success_substitutes_artifact() {
    let workspace = tempfile::tempdir().unwrap();
    let source = write_source(workspace.path(), "app.jello");

    // Stub compiler copies the source to the expected artifact path
    let jelloc = stub_compiler(workspace.path(), r#"cp "$1" "${1%.jello}.jlo""#);
    let resolver = resolver_with_compiler(&jelloc);

    let resolved = resolver
        .resolve(
            &LaunchRequest::for_program(&source),
            &WorkspaceContext::in_workspace(workspace.path()),
        )
        .unwrap();

    assert_eq!(resolved.program_to_run, workspace.path().join("app.jlo"));
    assert_eq!(resolved.cwd, workspace.path());
    assert!(resolved.program_to_run.exists());
}

#[test]
fn compiler_receives_program_as_sole_argument() {
    let workspace = tempfile::tempdir().unwrap();
    let source = write_source(workspace.path(), "app.jello");
    let argfile = workspace.path().join("argv.txt");

    let jelloc = stub_compiler(
        workspace.path(),
        &format!(
            r#"printf '%s\n' "$#" "$1" > "{}"
cp "$1" "${{1%.jello}}.jlo""#,
            argfile.display()
        ),
    );
    let resolver = resolver_with_compiler(&jelloc);

    resolver
        .resolve(
            &LaunchRequest::for_program(&source),
            &WorkspaceContext::default(),
        )
        .unwrap();

    let recorded = std::fs::read_to_string(&argfile).unwrap();
    assert_eq!(recorded, format!("1\n{}\n", source.display()));
}

#[test]
fn nonzero_exit_surfaces_stderr_exactly() {
    let workspace = tempfile::tempdir().unwrap();
    let source = write_source(workspace.path(), "app.jello");

    let jelloc = stub_compiler(workspace.path(), "printf 'syntax error' >&2\nexit 2");
    let resolver = resolver_with_compiler(&jelloc);

    let err = resolver
        .resolve(
            &LaunchRequest::for_program(&source),
            &WorkspaceContext::in_workspace(workspace.path()),
        )
        .unwrap_err();

    assert_eq!(err, Error::CompileFailed("syntax error".to_string()));
    assert_eq!(err.to_string(), "compile failed: syntax error");
}

#[test]
fn nonzero_exit_falls_back_to_stdout() {
    let workspace = tempfile::tempdir().unwrap();
    let source = write_source(workspace.path(), "app.jello");

    let jelloc = stub_compiler(workspace.path(), "printf 'only on stdout'\nexit 1");
    let resolver = resolver_with_compiler(&jelloc);

    let err = resolver
        .resolve(
            &LaunchRequest::for_program(&source),
            &WorkspaceContext::default(),
        )
        .unwrap_err();

    assert_eq!(err, Error::CompileFailed("only on stdout".to_string()));
}

#[test]
fn silent_nonzero_exit_reports_exit_code() {
    let workspace = tempfile::tempdir().unwrap();
    let source = write_source(workspace.path(), "app.jello");

    let jelloc = stub_compiler(workspace.path(), "exit 3");
    let resolver = resolver_with_compiler(&jelloc);

    let err = resolver
        .resolve(
            &LaunchRequest::for_program(&source),
            &WorkspaceContext::default(),
        )
        .unwrap_err();

    assert_eq!(
        err,
        Error::CompileFailed(format!("{} failed with exit code 3", jelloc.display()))
    );
}

#[test]
fn successful_exit_without_artifact_fails() {
    let workspace = tempfile::tempdir().unwrap();
    let source = write_source(workspace.path(), "app.jello");

    let jelloc = stub_compiler(workspace.path(), "exit 0");
    let resolver = resolver_with_compiler(&jelloc);

    let err = resolver
        .resolve(
            &LaunchRequest::for_program(&source),
            &WorkspaceContext::default(),
        )
        .unwrap_err();

    let expected = workspace.path().join("app.jlo");
    assert_eq!(
        err,
        Error::CompileFailed(format!(
            "expected compiler output not found: {}",
            expected.display()
        ))
    );
}

#[test]
fn uppercase_source_suffix_compiles_to_lowercase_artifact() {
    let workspace = tempfile::tempdir().unwrap();
    let source = write_source(workspace.path(), "app.JELLO");

    // The stub must create the lowercase artifact the resolver expects
    let jelloc = stub_compiler(
        workspace.path(),
        &format!(r#"cp "$1" "{}""#, workspace.path().join("app.jlo").display()),
    );
    let resolver = resolver_with_compiler(&jelloc);

    let resolved = resolver
        .resolve(
            &LaunchRequest::for_program(&source),
            &WorkspaceContext::default(),
        )
        .unwrap();

    assert_eq!(resolved.program_to_run, workspace.path().join("app.jlo"));
}

#[test]
fn prebuilt_artifact_skips_compiler() {
    let workspace = tempfile::tempdir().unwrap();
    let artifact = workspace.path().join("app.jlo");
    std::fs::write(&artifact, "jlo").unwrap();

    // A stub that would fail loudly if ever invoked
    let jelloc = stub_compiler(workspace.path(), "printf 'must not run' >&2\nexit 9");
    let resolver = resolver_with_compiler(&jelloc);

    let resolved = resolver
        .resolve(
            &LaunchRequest::for_program(&artifact),
            &WorkspaceContext::default(),
        )
        .unwrap();

    assert_eq!(resolved.program_to_run, artifact);
}

#[test]
fn session_walks_through_compile_and_descriptor() {
    let workspace = tempfile::tempdir().unwrap();
    let source = write_source(workspace.path(), "app.jello");

    let jelloc = stub_compiler(workspace.path(), r#"cp "$1" "${1%.jello}.jlo""#);
    let resolver = resolver_with_compiler(&jelloc);

    let mut session = DebugSession::new(
        LaunchRequest::for_program(&source),
        WorkspaceContext::in_workspace(workspace.path()),
    );
    session.resolve(&resolver).unwrap();
    let descriptor = session.descriptor(resolver.settings()).unwrap();

    assert_eq!(
        descriptor.args,
        vec![
            "-debugger".to_string(),
            workspace.path().join("app.jlo").to_string_lossy().into_owned(),
        ]
    );
    assert_eq!(descriptor.cwd, workspace.path());
    assert_eq!(descriptor.env["JELLO_DAP_PAUSE_ALL"], "1");
    assert_eq!(descriptor.env["JELLO_DAP_EXCEPTION"], "uncaught");
    // Workspace libs fallback feeds the library-search variable
    assert_eq!(
        descriptor.env["JELLO_PATH"],
        workspace.path().join("libs").to_string_lossy()
    );
}

#[test]
fn descriptor_environment_is_reproducible_over_a_fixed_base() {
    let workspace = tempfile::tempdir().unwrap();
    let artifact = workspace.path().join("app.jlo");
    std::fs::write(&artifact, "jlo").unwrap();

    let resolver = Resolver::new(DebuggerSettings::default(), None);
    let resolved = resolver
        .resolve(
            &LaunchRequest::for_program(&artifact),
            &WorkspaceContext::default(),
        )
        .unwrap();

    let base: HashMap<String, String> =
        [("PATH".to_string(), "/usr/bin".to_string())].into();
    let descriptor =
        ProcessDescriptor::build_with_env(&resolved, &DebuggerSettings::default(), base);

    assert_eq!(descriptor.env["PATH"], "/usr/bin");
    assert_eq!(descriptor.env.len(), 3); // PATH + pause flag + exception mode
}
