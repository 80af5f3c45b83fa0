use resources::{
    AddressErrorReason, EnumerateOptions, Enumerator, Origin, ResourceError, SearchRoot,
    StaticRoots, StorageError, enumerate, list_under_root,
};
use std::fs;
use std::path::Path;
use test_support::{ZipBuilder, make_dirs, write_tree};

fn dir_origin(path: &Path) -> Origin {
    Origin::for_directory(path).expect("directory origin")
}

fn jar_origin(path: &Path, prefix: &str) -> Origin {
    Origin::for_archive_entry(path, prefix).expect("archive origin")
}

fn sorted(provider: &StaticRoots, name: &str) -> Vec<String> {
    enumerate(provider, name)
        .expect("enumerate")
        .into_sorted_vec()
}

#[test]
fn end_to_end_tree_and_archive_union() {
    let temp = tempfile::tempdir().expect("tempdir");
    let tree = temp.path().join("opt/pkg/payloads");
    write_tree(
        &tree,
        &[("linux/x86_64/libfoo.so", b"elf"), ("README", b"readme")],
    )
    .expect("tree");
    let jar = temp.path().join("x/app.jar");
    ZipBuilder::new()
        .dir("payloads/")
        .dir("payloads/linux/")
        .dir("payloads/linux/x86_64/")
        .file("payloads/linux/x86_64/libfoo.so", b"elf")
        .dir("payloads/win/")
        .file("payloads/win/foo.dll", b"pe")
        .file("other/ignored.txt", b"x")
        .write_to(&jar)
        .expect("jar");

    let provider = StaticRoots::new([dir_origin(&tree), jar_origin(&jar, "payloads")]);
    assert_eq!(
        sorted(&provider, "payloads"),
        vec!["README", "linux/x86_64/libfoo.so", "win/foo.dll"]
    );
}

#[test]
fn enumeration_is_idempotent() {
    let temp = tempfile::tempdir().expect("tempdir");
    write_tree(temp.path(), &[("a.bin", b"a"), ("b/c.bin", b"c")]).expect("tree");
    let provider = StaticRoots::new([dir_origin(temp.path())]);

    let first = enumerate(&provider, "payloads").expect("first");
    let second = enumerate(&provider, "payloads").expect("second");
    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}

#[test]
fn result_is_union_of_per_root_listings() {
    let temp = tempfile::tempdir().expect("tempdir");
    let left = temp.path().join("left");
    let right = temp.path().join("right");
    write_tree(&left, &[("shared.bin", b"1"), ("left.bin", b"1")]).expect("left");
    write_tree(&right, &[("shared.bin", b"2"), ("right.bin", b"2")]).expect("right");

    let left_root = SearchRoot::PlainTree {
        directory: left.clone(),
    };
    let right_root = SearchRoot::PlainTree {
        directory: right.clone(),
    };
    let mut expected = list_under_root(&left_root).expect("left listing");
    expected.merge(list_under_root(&right_root).expect("right listing"));

    let provider = StaticRoots::new([dir_origin(&left), dir_origin(&right)]);
    let union = enumerate(&provider, "payloads").expect("enumerate");
    assert_eq!(union, expected);
    assert_eq!(
        union.into_sorted_vec(),
        vec!["left.bin", "right.bin", "shared.bin"]
    );
}

#[test]
fn directories_are_never_listed() {
    let temp = tempfile::tempdir().expect("tempdir");
    make_dirs(temp.path(), &["empty", "nested/deeper"]).expect("dirs");
    write_tree(temp.path(), &[("nested/file.bin", b"x")]).expect("tree");

    let provider = StaticRoots::new([dir_origin(temp.path())]);
    assert_eq!(sorted(&provider, "payloads"), vec!["nested/file.bin"]);
}

#[test]
fn archive_directory_markers_are_never_listed() {
    let temp = tempfile::tempdir().expect("tempdir");
    let jar = temp.path().join("markers.jar");
    ZipBuilder::new()
        .dir("a/")
        .dir("a/b/")
        .file("a/b/c.bin", b"c")
        .write_to(&jar)
        .expect("jar");

    let provider = StaticRoots::new([jar_origin(&jar, "")]);
    assert_eq!(sorted(&provider, "payloads"), vec!["a/b/c.bin"]);
}

#[test]
fn archive_prefix_marker_and_outside_entries_are_excluded() {
    let temp = tempfile::tempdir().expect("tempdir");
    let jar = temp.path().join("prefixed.jar");
    ZipBuilder::new()
        .dir("payloads/")
        .file("payloads/top.bin", b"t")
        .file("payloadsX/lookalike.bin", b"l")
        .file("root.bin", b"r")
        .write_to(&jar)
        .expect("jar");

    let provider = StaticRoots::new([jar_origin(&jar, "payloads")]);
    assert_eq!(sorted(&provider, "payloads"), vec!["top.bin"]);
}

#[cfg(unix)]
#[test]
fn backslashes_in_file_names_become_separators() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(temp.path().join("sub\\file.bin"), b"x").expect("write");

    let provider = StaticRoots::new([dir_origin(temp.path())]);
    assert_eq!(sorted(&provider, "payloads"), vec!["sub/file.bin"]);
}

#[test]
fn malformed_archive_address_aborts_the_call() {
    let temp = tempfile::tempdir().expect("tempdir");
    write_tree(temp.path(), &[("good.bin", b"x")]).expect("tree");

    let provider = StaticRoots::new([
        dir_origin(temp.path()),
        Origin::new("jar:/opt/app.jar!/payloads"),
    ]);
    let error = enumerate(&provider, "payloads").expect_err("malformed address");
    assert!(matches!(
        error,
        ResourceError::AddressResolution {
            reason: AddressErrorReason::MissingFileMarker,
            ..
        }
    ));
    assert_eq!(error.origin(), "jar:/opt/app.jar!/payloads");

    let provider = StaticRoots::new([Origin::new("jar:file:/opt/app.jar")]);
    let error = enumerate(&provider, "payloads").expect_err("missing separator");
    assert!(matches!(
        error,
        ResourceError::AddressResolution {
            reason: AddressErrorReason::MissingSeparator,
            ..
        }
    ));
}

#[test]
fn unparseable_origin_is_an_address_failure() {
    let provider = StaticRoots::new(["not a url at all"]);
    let error = enumerate(&provider, "payloads").expect_err("invalid url");
    assert!(matches!(
        error,
        ResourceError::AddressResolution {
            reason: AddressErrorReason::InvalidUrl(_),
            ..
        }
    ));
}

#[cfg(unix)]
#[test]
fn remote_file_url_is_not_a_local_path() {
    let provider = StaticRoots::new(["file://fileserver/share/payloads"]);
    let error = enumerate(&provider, "payloads").expect_err("remote host");
    assert!(matches!(
        error,
        ResourceError::AddressResolution {
            reason: AddressErrorReason::NotLocalPath,
            ..
        }
    ));
}

#[test]
fn unknown_scheme_contributes_nothing() {
    let temp = tempfile::tempdir().expect("tempdir");
    write_tree(temp.path(), &[("kept.bin", b"x")]).expect("tree");

    let provider = StaticRoots::new([
        Origin::new("http://example.com/payloads"),
        dir_origin(temp.path()),
        Origin::new("vfs:/bundle/payloads"),
    ]);
    assert_eq!(sorted(&provider, "payloads"), vec!["kept.bin"]);

    let only_unknown = StaticRoots::new(["bundleresource://12/payloads"]);
    assert!(enumerate(&only_unknown, "payloads").expect("enumerate").is_empty());
}

#[test]
fn empty_virtual_directory_name_is_rejected() {
    let provider = |_: &str| -> resources::Result<Vec<Origin>> {
        panic!("provider must not be consulted for an empty name")
    };
    let error = enumerate(&provider, "").expect_err("empty name");
    assert!(matches!(
        error,
        ResourceError::AddressResolution {
            reason: AddressErrorReason::EmptyName,
            ..
        }
    ));
}

#[test]
fn provider_errors_propagate_unchanged() {
    let provider = |name: &str| -> resources::Result<Vec<Origin>> {
        Err(ResourceError::AddressResolution {
            origin: name.to_string(),
            reason: AddressErrorReason::NotLocalPath,
        })
    };
    let error = enumerate(&provider, "payloads").expect_err("provider failure");
    assert_eq!(error.origin(), "payloads");
}

#[test]
fn missing_directory_root_is_an_io_failure() {
    let temp = tempfile::tempdir().expect("tempdir");
    let missing = temp.path().join("gone");
    let provider = StaticRoots::new([dir_origin(&missing)]);

    let error = enumerate(&provider, "payloads").expect_err("missing root");
    assert!(error.is_io());
    assert!(matches!(
        error,
        ResourceError::Io {
            source: StorageError::Walk(_),
            ..
        }
    ));
}

#[test]
fn corrupt_archive_aborts_without_partial_results() {
    let temp = tempfile::tempdir().expect("tempdir");
    write_tree(temp.path(), &[("tree/good.bin", b"x")]).expect("tree");
    let corrupt = temp.path().join("corrupt.jar");
    fs::write(&corrupt, b"this is not a zip file at all, just text").expect("write");

    let provider = StaticRoots::new([
        dir_origin(&temp.path().join("tree")),
        jar_origin(&corrupt, "payloads"),
    ]);
    let error = enumerate(&provider, "payloads").expect_err("corrupt archive");
    match error {
        ResourceError::Io {
            origin,
            source: StorageError::Archive(archive_error),
        } => {
            assert!(origin.starts_with("jar:file:"));
            assert_eq!(archive_error.path(), corrupt);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn same_path_from_tree_and_archive_is_listed_once() {
    let temp = tempfile::tempdir().expect("tempdir");
    let tree = temp.path().join("payloads");
    write_tree(&tree, &[("linux/lib.so", b"tree")]).expect("tree");
    let jar = temp.path().join("dup.jar");
    ZipBuilder::new()
        .file("payloads/linux/lib.so", b"jar")
        .write_to(&jar)
        .expect("jar");

    let provider = StaticRoots::new([dir_origin(&tree), jar_origin(&jar, "/payloads/")]);
    assert_eq!(sorted(&provider, "payloads"), vec!["linux/lib.so"]);
}

#[cfg(unix)]
#[test]
fn directory_symlinks_follow_the_option() {
    use std::os::unix::fs::symlink;

    let temp = tempfile::tempdir().expect("tempdir");
    let tree = temp.path().join("tree");
    let shared = temp.path().join("shared");
    write_tree(&shared, &[("common.bin", b"c")]).expect("shared");
    write_tree(&tree, &[("own.bin", b"o")]).expect("tree");
    symlink(&shared, tree.join("linked")).expect("symlink");
    symlink(shared.join("common.bin"), tree.join("alias.bin")).expect("file symlink");

    let provider = StaticRoots::new([dir_origin(&tree)]);
    assert_eq!(sorted(&provider, "payloads"), vec!["alias.bin", "own.bin"]);

    let following = Enumerator::with_options(EnumerateOptions { follow_links: true });
    assert!(following.options().follow_links);
    assert_eq!(
        following
            .enumerate(&provider, "payloads")
            .expect("enumerate")
            .into_sorted_vec(),
        vec!["alias.bin", "linked/common.bin", "own.bin"]
    );
}

#[test]
fn no_origins_yield_an_empty_set() {
    let provider = StaticRoots::default();
    assert!(enumerate(&provider, "payloads").expect("enumerate").is_empty());
}

#[test]
fn zip64_archive_roots_are_listed() {
    let temp = tempfile::tempdir().expect("tempdir");
    let jar = temp.path().join("fat.jar");
    ZipBuilder::new()
        .dir("payloads/")
        .file("payloads/linux/libfoo.so", b"elf")
        .file("payloads/win/foo.dll", b"pe")
        .file("META-INF/MANIFEST.MF", b"Manifest-Version: 1.0\n")
        .zip64()
        .write_to(&jar)
        .expect("jar");

    let provider = StaticRoots::new([jar_origin(&jar, "payloads")]);
    assert_eq!(
        sorted(&provider, "payloads"),
        vec!["linux/libfoo.so", "win/foo.dll"]
    );
}
