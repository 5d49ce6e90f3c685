//! Edge case and error handling tests for sizetree


use harness::{TestDir, run_sizetree};
use std::fs;
use std::path::Path;

#[cfg(unix)]
use std::os::unix::fs::{PermissionsExt, symlink};

#[cfg(unix)]
fn set_mode(path: &Path, mode: u32) {
    fs::set_permissions(path, fs::Permissions::from_mode(mode)).expect("Failed to set permissions");
}

// ============================================================================
// Permission Error Handling
// ============================================================================

#[test]
#[cfg(unix)]
fn test_locked_directory_reported_as_zero() {
    let dir = TestDir::new();
    dir.add_file("root/Open/data.bin", 64);
    dir.add_file("root/top.bin", 8);
    dir.add_file("root/Locked/secret.bin", 4096);
    let locked = dir.path().join("root/Locked");
    set_mode(&locked, 0o000);

    // Privileged users can list the directory anyway
    if fs::read_dir(&locked).is_ok() {
        set_mode(&locked, 0o755);
        return;
    }

    let (stdout, stderr, success) = run_sizetree(dir.path(), &["root", "--stdout"]);
    set_mode(&locked, 0o755);

    assert!(success, "locked directories must not abort the scan: {}", stderr);
    assert_eq!(
        stdout.lines().collect::<Vec<_>>(),
        [
            "root    72b",
            "  Open    64b",
            "    data.bin    64b",
            "  Locked    0b",
            "  top.bin    8b",
        ]
    );
    assert!(
        stderr.contains("1 directories could not be read"),
        "should warn about locked directory: {}",
        stderr
    );
}

#[test]
#[cfg(unix)]
fn test_locked_root_is_empty_report() {
    let dir = TestDir::new();
    dir.add_file("root/secret.bin", 100);
    let root = dir.path().join("root");
    set_mode(&root, 0o000);

    if fs::read_dir(&root).is_ok() {
        set_mode(&root, 0o755);
        return;
    }

    let (stdout, stderr, success) = run_sizetree(dir.path(), &["root", "--stdout"]);
    set_mode(&root, 0o755);

    assert!(success, "{}", stderr);
    assert_eq!(stdout, "root    0b\n");
    assert!(stderr.contains("permission denied"), "{}", stderr);
}

#[test]
#[cfg(unix)]
fn test_unwritable_output_is_a_warning() {
    let dir = TestDir::new();
    dir.add_file("root/a.bin", 10);
    let out_dir = dir.add_dir("readonly");
    set_mode(&out_dir, 0o555);

    if fs::write(out_dir.join("writable_check"), b"").is_ok() {
        set_mode(&out_dir, 0o755);
        return;
    }

    let target = out_dir.join("report.txt");
    let (_stdout, stderr, success) =
        run_sizetree(dir.path(), &["root", "-o", target.to_str().unwrap()]);
    set_mode(&out_dir, 0o755);

    assert!(success, "write denial should not fail the run: {}", stderr);
    assert!(stderr.contains("warning: cannot write"), "{}", stderr);
    assert!(!target.exists());
}

#[test]
fn test_missing_output_directory_fails() {
    let dir = TestDir::new();
    dir.add_file("root/a.bin", 10);

    let (_stdout, stderr, success) = run_sizetree(dir.path(), &["root", "-o", "no/such/dir/out"]);
    assert!(!success);
    assert!(stderr.contains("sizetree: cannot write"), "{}", stderr);
}

// ============================================================================
// Symlinks
// ============================================================================

#[test]
#[cfg(unix)]
fn test_symlink_to_parent_no_infinite_loop() {
    let dir = TestDir::new();
    dir.add_file("root/sub/file.bin", 5);
    symlink("..", dir.path().join("root/sub/parent")).expect("Failed to create parent symlink");

    let (stdout, _stderr, success) = run_sizetree(dir.path(), &["root", "--stdout"]);
    assert!(success, "sizetree should not hang on parent symlink");
    assert!(stdout.contains("    file.bin    5b"));
    assert!(stdout.contains("    parent    "), "link listed as a file: {}", stdout);
}

#[test]
#[cfg(unix)]
fn test_broken_symlink() {
    let dir = TestDir::new();
    dir.add_file("root/real.bin", 3);
    symlink("nonexistent.bin", dir.path().join("root/broken")).expect("Failed to create symlink");

    let (stdout, _stderr, success) = run_sizetree(dir.path(), &["root", "--stdout"]);
    assert!(success, "sizetree should handle broken symlinks");
    assert!(stdout.contains("  real.bin    3b"));
}

// ============================================================================
// Unusual Trees
// ============================================================================

#[test]
fn test_empty_directory() {
    let dir = TestDir::new();
    dir.add_dir("root");

    let (stdout, _stderr, success) = run_sizetree(dir.path(), &["root", "--stdout"]);
    assert!(success);
    assert_eq!(stdout.lines().collect::<Vec<_>>(), ["root    0b"]);
}

#[test]
fn test_empty_files_and_directories() {
    let dir = TestDir::new();
    dir.add_file("root/empty.txt", 0);
    dir.add_dir("root/nothing");

    let (stdout, _stderr, success) = run_sizetree(dir.path(), &["root", "--stdout"]);
    assert!(success);
    assert_eq!(
        stdout.lines().collect::<Vec<_>>(),
        ["root    0b", "  nothing    0b", "  empty.txt    0b"]
    );
}

#[test]
fn test_filename_with_spaces_and_unicode() {
    let dir = TestDir::new();
    dir.add_file("root/my file.txt", 12);
    dir.add_file("root/日本語/ファイル.txt", 7);

    let (stdout, _stderr, success) = run_sizetree(dir.path(), &["root", "--stdout"]);
    assert!(success);
    assert!(stdout.contains("  my file.txt    12b"));
    assert!(stdout.contains("  日本語    7b"));
    assert!(stdout.contains("    ファイル.txt    7b"));
}

#[test]
fn test_equal_sizes_keep_name_order() {
    let dir = TestDir::new();
    dir.add_file("root/zebra", 10);
    dir.add_file("root/apple", 10);
    dir.add_file("root/middle", 10);

    let (stdout, _stderr, success) = run_sizetree(dir.path(), &["root", "--stdout"]);
    assert!(success);
    let apple = stdout.find("apple").expect("should have apple");
    let middle = stdout.find("middle").expect("should have middle");
    let zebra = stdout.find("zebra").expect("should have zebra");
    assert!(apple < middle && middle < zebra, "{}", stdout);
}

#[test]
fn test_very_deep_nesting() {
    let dir = TestDir::new();
    let deep: String = (0..40).map(|i| format!("d{}/", i)).collect();
    dir.add_file(&format!("root/{}leaf.bin", deep), 9);

    let (stdout, _stderr, success) = run_sizetree(dir.path(), &["root", "--stdout"]);
    assert!(success);
    let leaf = stdout.lines().last().expect("report has lines");
    assert_eq!(leaf, format!("{}leaf.bin    9b", " ".repeat(2 * 41)));
    assert!(stdout.lines().all(|l| l.ends_with("9b")));
}

#[test]
fn test_many_files_in_directory() {
    let dir = TestDir::new();
    for i in 0..300 {
        dir.add_file(&format!("root/file_{:03}.bin", i), i);
    }

    let (stdout, _stderr, success) = run_sizetree(dir.path(), &["root", "--stdout"]);
    assert!(success);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 301);
    assert_eq!(lines[0], format!("root    {}b", (0..300).sum::<usize>()));
    assert_eq!(lines[1], "  file_299.bin    299b");
    assert_eq!(lines[300], "  file_000.bin    0b");
}

#[test]
fn test_file_as_root_fails() {
    let dir = TestDir::new();
    dir.add_file("plain.txt", 4);

    let (_stdout, stderr, success) = run_sizetree(dir.path(), &["plain.txt"]);
    assert!(!success);
    assert!(stderr.contains("No such directory"), "{}", stderr);
}

#[test]
#[cfg(unix)]
fn test_existing_report_is_replaced() {
    let dir = TestDir::new();
    dir.add_file("root/a.bin", 10);

    let (_stdout, _stderr, success) = run_sizetree(dir.path(), &["root", "-o", "r"]);
    assert!(success);
    dir.add_file("root/b.bin", 20);
    let (_stdout, _stderr, success) = run_sizetree(dir.path(), &["root", "-o", "r"]);
    assert!(success);

    let report = dir.read("root/r.txt");
    // The first report is part of the second scan
    let first_len = "root    10b\n  a.bin    10b\n".len();
    assert!(
        report.starts_with(&format!("root    {}b\n", 30 + first_len)),
        "{}",
        report
    );
    assert!(report.contains("  r.txt    "));
}
