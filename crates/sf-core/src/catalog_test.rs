use super::*;
use std::fs;

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

fn file_names(scripts: &[ScriptName]) -> Vec<String> {
    scripts
        .iter()
        .map(|s| {
            Path::new(s.as_str())
                .file_name()
                .unwrap()
                .to_string_lossy()
                .into_owned()
        })
        .collect()
}

#[test]
fn test_scan_filters_and_sorts() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "004_some_more.sql", "SELECT 1;");
    write(dir.path(), "001_with_content.sql", "SELECT 1;");
    write(dir.path(), "002_empty.sql", "");
    write(dir.path(), "003_notes.txt", "not a migration");
    fs::create_dir(dir.path().join("005_dir.sql")).unwrap();
    fs::create_dir(dir.path().join("nested")).unwrap();
    write(&dir.path().join("nested"), "000_hidden.sql", "SELECT 1;");

    let scripts = scan(dir.path()).unwrap();

    assert_eq!(
        file_names(&scripts),
        vec!["001_with_content.sql", "004_some_more.sql"]
    );
}

#[test]
fn test_scan_returns_full_path() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "001.sql", "SELECT 1;");

    let scripts = scan(dir.path()).unwrap();

    assert_eq!(scripts.len(), 1);
    assert_eq!(
        scripts[0].as_str(),
        dir.path().join("001.sql").to_string_lossy()
    );
}

#[test]
fn test_scan_empty_directory() {
    let dir = tempfile::tempdir().unwrap();
    assert!(scan(dir.path()).unwrap().is_empty());
}

#[test]
fn test_scan_is_lexicographic_not_numeric() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["9_nine.sql", "10_ten.sql", "1_one.sql", "b.sql", "a.sql"] {
        write(dir.path(), name, "SELECT 1;");
    }

    let scripts = scan(dir.path()).unwrap();

    assert_eq!(
        file_names(&scripts),
        vec!["10_ten.sql", "1_one.sql", "9_nine.sql", "a.sql", "b.sql"]
    );
}

#[test]
fn test_scan_reverse_is_exact_reverse() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["003.sql", "001.sql", "010.sql", "002.sql"] {
        write(dir.path(), name, "SELECT 1;");
    }

    let mut forward = scan(dir.path()).unwrap();
    let backward = scan_reverse(dir.path()).unwrap();
    forward.reverse();

    assert_eq!(forward, backward);
    assert_eq!(
        file_names(&backward),
        vec!["010.sql", "003.sql", "002.sql", "001.sql"]
    );
}

#[test]
fn test_scan_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does_not_exist");

    let err = scan(&missing).unwrap_err();

    assert!(matches!(err, CoreError::Scan { .. }));
    assert!(err.to_string().contains("does_not_exist"));
}

#[test]
fn test_scan_empty_path() {
    assert!(scan(Path::new("")).is_err());
    assert!(scan_reverse(Path::new("")).is_err());
}

#[cfg(unix)]
#[test]
fn test_scan_skips_dangling_symlinks() {
    use std::os::unix::fs::symlink;

    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "001.sql", "SELECT 1;");
    symlink(dir.path().join("gone"), dir.path().join("README")).unwrap();
    symlink(dir.path().join("gone.sql"), dir.path().join("002_broken.sql")).unwrap();

    let scripts = scan(dir.path()).unwrap();

    assert_eq!(file_names(&scripts), vec!["001.sql"]);
}

#[cfg(unix)]
#[test]
fn test_scan_follows_symlink_to_script() {
    use std::os::unix::fs::symlink;

    let dir = tempfile::tempdir().unwrap();
    let shared = tempfile::tempdir().unwrap();
    write(shared.path(), "shared.sql", "SELECT 1;");
    symlink(shared.path().join("shared.sql"), dir.path().join("001_shared.sql")).unwrap();

    let scripts = scan(dir.path()).unwrap();

    assert_eq!(file_names(&scripts), vec!["001_shared.sql"]);
}
