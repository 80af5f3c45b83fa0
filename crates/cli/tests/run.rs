use cli::{EXIT_ADDRESS_RESOLUTION, EXIT_IO, EXIT_SUCCESS, EXIT_USAGE, run};
use std::ffi::OsString;
use std::path::Path;
use test_support::{ZipBuilder, write_tree};

struct Outcome {
    code: i32,
    stdout: String,
    stderr: String,
}

fn invoke<I, S>(args: I) -> Outcome
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let code = run(args, &mut stdout, &mut stderr);
    Outcome {
        code,
        stdout: String::from_utf8(stdout).expect("utf8 stdout"),
        stderr: String::from_utf8(stderr).expect("utf8 stderr"),
    }
}

fn fixture(root: &Path) -> (OsString, String) {
    let pkg = root.join("opt/pkg");
    write_tree(
        &pkg,
        &[("payloads/linux/x86_64/libfoo.so", b"elf"), ("payloads/README", b"r")],
    )
    .expect("tree");
    let jar = root.join("x/app.jar");
    ZipBuilder::new()
        .dir("payloads/")
        .file("payloads/linux/x86_64/libfoo.so", b"elf")
        .file("payloads/win/foo.dll", b"pe")
        .write_to(&jar)
        .expect("jar");
    let search_path = std::env::join_paths([&pkg, &jar]).expect("join paths");
    let jar_root = format!("jar:file:{}!/payloads", jar.display());
    (search_path, jar_root)
}

#[test]
fn search_path_listing_prints_sorted_lines() {
    let temp = tempfile::tempdir().expect("tempdir");
    let (search_path, _) = fixture(temp.path());

    let outcome = invoke([
        OsString::from("resource-lister"),
        OsString::from("--search-path"),
        search_path,
        OsString::from("payloads"),
    ]);
    assert_eq!(outcome.code, EXIT_SUCCESS, "stderr: {}", outcome.stderr);
    assert_eq!(outcome.stdout, "README\nlinux/x86_64/libfoo.so\nwin/foo.dll\n");
    assert!(outcome.stderr.is_empty());
}

#[cfg(unix)]
#[test]
fn explicit_root_lists_only_that_root_as_json() {
    let temp = tempfile::tempdir().expect("tempdir");
    let (_, jar_root) = fixture(temp.path());

    let outcome = invoke(["resource-lister", "--json", "-r", &jar_root, "payloads"]);
    assert_eq!(outcome.code, EXIT_SUCCESS, "stderr: {}", outcome.stderr);
    assert_eq!(
        outcome.stdout,
        "[\"linux/x86_64/libfoo.so\",\"win/foo.dll\"]\n"
    );
}

#[test]
fn missing_virtual_dir_is_a_usage_error() {
    let outcome = invoke(["resource-lister", "--json"]);
    assert_eq!(outcome.code, EXIT_USAGE);
    assert!(outcome.stdout.is_empty());
    assert!(outcome.stderr.contains("missing VIRTUAL_DIR operand"));
    assert!(outcome.stderr.contains("--help"));
}

#[test]
fn unknown_option_is_a_usage_error() {
    let outcome = invoke(["resource-lister", "--frobnicate", "payloads"]);
    assert_eq!(outcome.code, EXIT_USAGE);
    assert!(outcome.stdout.is_empty());
    assert!(!outcome.stderr.is_empty());
}

#[test]
fn invalid_diagnostic_flag_is_a_usage_error() {
    let outcome = invoke(["resource-lister", "--debug", "walk,9bad", "-p", "", "payloads"]);
    assert_eq!(outcome.code, EXIT_USAGE);
    assert!(outcome.stderr.contains("invalid --debug value"));
}

#[test]
fn malformed_root_exits_with_address_status() {
    let outcome = invoke(["resource-lister", "-r", "jar:/opt/app.jar!/payloads", "payloads"]);
    assert_eq!(outcome.code, EXIT_ADDRESS_RESOLUTION);
    assert!(outcome.stdout.is_empty());
    assert!(outcome.stderr.contains("jar:/opt/app.jar!/payloads"));
}

#[test]
fn empty_virtual_dir_exits_with_address_status() {
    let outcome = invoke(["resource-lister", "-p", "", ""]);
    assert_eq!(outcome.code, EXIT_ADDRESS_RESOLUTION);
    assert!(outcome.stderr.contains("virtual directory name is empty"));
}

#[test]
fn unreadable_root_exits_with_io_status() {
    let temp = tempfile::tempdir().expect("tempdir");
    let missing = temp.path().join("missing");
    let origin = format!("file://{}", missing.display());

    let outcome = invoke(["resource-lister", "-r", &origin, "payloads"]);
    if cfg!(unix) {
        assert_eq!(outcome.code, EXIT_IO, "stderr: {}", outcome.stderr);
        assert!(outcome.stdout.is_empty());
    } else {
        assert_ne!(outcome.code, EXIT_SUCCESS);
    }
}

#[test]
fn unknown_scheme_roots_produce_empty_output() {
    let outcome = invoke(["resource-lister", "-r", "http://example.com/payloads", "payloads"]);
    assert_eq!(outcome.code, EXIT_SUCCESS);
    assert!(outcome.stdout.is_empty());
}

#[test]
fn verbose_run_reports_diagnostics_on_stderr() {
    let temp = tempfile::tempdir().expect("tempdir");
    let (search_path, _) = fixture(temp.path());

    let outcome = invoke([
        OsString::from("resource-lister"),
        OsString::from("-v"),
        OsString::from("-p"),
        search_path,
        OsString::from("payloads"),
    ]);
    assert_eq!(outcome.code, EXIT_SUCCESS);
    assert!(
        outcome
            .stderr
            .contains("resource-lister: searching 2 path elements")
    );
    assert!(
        outcome
            .stderr
            .contains("resource-lister: 3 resources under 'payloads' from 2 of 2 origins")
    );
    assert_eq!(outcome.stdout.lines().count(), 3);
}

#[test]
fn help_and_version_short_circuit() {
    let help = invoke(["resource-lister", "--help"]);
    assert_eq!(help.code, EXIT_SUCCESS);
    assert!(help.stdout.contains("Usage: resource-lister [OPTIONS] VIRTUAL_DIR"));

    let version = invoke(["resource-lister", "-V"]);
    assert_eq!(version.code, EXIT_SUCCESS);
    assert_eq!(
        version.stdout,
        format!("resource-lister {}\n", env!("CARGO_PKG_VERSION"))
    );
}
