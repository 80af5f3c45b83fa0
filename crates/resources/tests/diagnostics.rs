use logging::{DiagnosticEvent, ListerLayer, VerbosityConfig, drain_events, init};
use resources::{Origin, StaticRoots, enumerate};
use test_support::{ZipBuilder, write_tree};
use tracing_subscriber::layer::SubscriberExt;

fn collect(config: VerbosityConfig, run: impl FnOnce()) -> Vec<String> {
    init(config);
    drain_events();
    let subscriber = tracing_subscriber::registry().with(ListerLayer::new());
    tracing::subscriber::with_default(subscriber, run);
    drain_events()
        .iter()
        .map(DiagnosticEvent::to_string)
        .collect()
}

#[test]
fn verbose_enumeration_reports_roots_skips_and_totals() {
    let temp = tempfile::tempdir().expect("tempdir");
    write_tree(temp.path(), &[("a.bin", b"a")]).expect("tree");
    let provider = StaticRoots::new([
        Origin::for_directory(temp.path()).expect("origin"),
        Origin::new("http://example.com/payloads"),
    ]);

    let events = collect(VerbosityConfig::from_verbose_level(1), || {
        enumerate(&provider, "payloads").expect("enumerate");
    });

    assert!(events.iter().any(|event| event == "2 origins publish 'payloads'"));
    assert!(
        events
            .iter()
            .any(|event| event.contains("unsupported scheme 'http'"))
    );
    assert!(
        events
            .iter()
            .any(|event| event == "1 resources under 'payloads' from 1 of 2 origins")
    );
    assert!(!events.iter().any(|event| event.contains(": a.bin")));
}

#[test]
fn debug_flags_surface_archive_and_duplicate_details() {
    let temp = tempfile::tempdir().expect("tempdir");
    let tree = temp.path().join("payloads");
    write_tree(&tree, &[("lib.so", b"tree")]).expect("tree");
    let jar = temp.path().join("app.jar");
    ZipBuilder::new()
        .file("payloads/lib.so", b"jar")
        .write_to(&jar)
        .expect("jar");
    let provider = StaticRoots::new([
        Origin::for_directory(&tree).expect("origin"),
        Origin::for_archive_entry(&jar, "payloads").expect("origin"),
    ]);

    let mut config = VerbosityConfig::default();
    config.apply_debug_list("archive,dup").expect("flags");
    let events = collect(config, || {
        enumerate(&provider, "payloads").expect("enumerate");
    });

    assert!(events.iter().any(|event| event.starts_with("[archive]")));
    assert!(
        events
            .iter()
            .any(|event| event.starts_with("[dup] 1 resources from jar:file:"))
    );
    assert!(!events.iter().any(|event| event.starts_with("[walk]")));
}

#[test]
fn quiet_configuration_collects_nothing() {
    let temp = tempfile::tempdir().expect("tempdir");
    write_tree(temp.path(), &[("a.bin", b"a")]).expect("tree");
    let provider = StaticRoots::new([Origin::for_directory(temp.path()).expect("origin")]);

    let events = collect(VerbosityConfig::default(), || {
        enumerate(&provider, "payloads").expect("enumerate");
    });
    assert!(events.is_empty());
}

#[test]
fn name_flag_lists_each_resource_in_order() {
    let temp = tempfile::tempdir().expect("tempdir");
    write_tree(temp.path(), &[("b.bin", b"b"), ("a.bin", b"a")]).expect("tree");
    let origin = Origin::for_directory(temp.path()).expect("origin");
    let provider = StaticRoots::new([origin.clone()]);

    let mut config = VerbosityConfig::default();
    config.apply_info_list("name").expect("flags");
    let events = collect(config, || {
        enumerate(&provider, "payloads").expect("enumerate");
    });

    assert_eq!(
        events,
        vec![format!("{origin}: a.bin"), format!("{origin}: b.bin")]
    );
}
