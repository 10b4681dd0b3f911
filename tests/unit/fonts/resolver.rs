use super::*;

/// Minimal bytes that pass the sfnt sniff. Not a parseable font; resolver
/// tests never shape text.
const FAKE_TTF: [u8; 8] = [0x00, 0x01, 0x00, 0x00, 0x00, 0x04, 0x00, 0x10];

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("postframe-resolver-{name}-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn exhaustion_falls_back_to_builtin() {
    let resolver =
        FontResolver::new(scratch_dir("empty")).with_system_dirs(vec![]);
    let handle = resolver.resolve(&["Nope.ttf".to_string(), "AlsoNope.ttf".to_string()], 30.0);
    assert!(handle.is_builtin());
    assert_eq!(handle.size(), 30.0);
}

#[test]
fn fonts_dir_candidate_wins() {
    let dir = scratch_dir("local");
    std::fs::write(dir.join("Poppins-Bold.ttf"), FAKE_TTF).unwrap();

    let resolver = FontResolver::new(&dir).with_system_dirs(vec![]);
    let handle = resolver.resolve(&["Poppins-Bold.ttf".to_string()], 45.0);
    match handle.source() {
        FontSource::Bytes { origin, .. } => assert!(origin.contains("Poppins-Bold.ttf")),
        FontSource::Builtin => panic!("expected file-backed font"),
    }
}

#[test]
fn candidate_order_is_respected() {
    let dir = scratch_dir("order");
    std::fs::write(dir.join("Second.ttf"), FAKE_TTF).unwrap();

    let resolver = FontResolver::new(&dir).with_system_dirs(vec![]);
    let handle = resolver.resolve(
        &["First.ttf".to_string(), "Second.ttf".to_string()],
        20.0,
    );
    match handle.source() {
        FontSource::Bytes { origin, .. } => assert!(origin.contains("Second.ttf")),
        FontSource::Builtin => panic!("expected file-backed font"),
    }
}

#[test]
fn system_dir_is_searched_recursively() {
    let system = scratch_dir("system");
    let nested = system.join("truetype").join("brand");
    std::fs::create_dir_all(&nested).unwrap();
    std::fs::write(nested.join("Montserrat-Bold.ttf"), FAKE_TTF).unwrap();

    let resolver = FontResolver::new(scratch_dir("missing-local"))
        .with_system_dirs(vec![system]);
    let handle = resolver.resolve(&["Montserrat-Bold.ttf".to_string()], 50.0);
    assert!(!handle.is_builtin());
}

#[test]
fn non_font_bytes_are_skipped() {
    let dir = scratch_dir("junk");
    std::fs::write(dir.join("NotAFont.ttf"), b"hello world").unwrap();

    let resolver = FontResolver::new(&dir).with_system_dirs(vec![]);
    let handle = resolver.resolve(&["NotAFont.ttf".to_string()], 30.0);
    assert!(handle.is_builtin());
}

#[test]
fn with_size_shares_the_source() {
    let handle = FontHandle::builtin(45.0);
    let smaller = handle.with_size(25.0);
    assert_eq!(smaller.size(), 25.0);
    assert!(smaller.is_builtin());
}
