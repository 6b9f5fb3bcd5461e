//! Runs the `ytmfetch` binary and checks exit status, tree and report

mod common;

use common::{LIBRARY_FILES, LIBRARY_MANIFEST, MIXED_MANIFEST, assert_mp3_files, write_manifest};
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn ytmfetch(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ytmfetch"))
        .args(args)
        .env_remove("YTMFETCH_YT_DLP")
        .env_remove("YTMFETCH_FFMPEG")
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn read_report(path: &Path) -> serde_json::Value {
    serde_json::from_slice(&std::fs::read(path).unwrap()).unwrap()
}

#[test]
fn test_version_flag() {
    let output = ytmfetch(&["--version"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_manifest_exits_with_noinput() {
    let temp_dir = TempDir::new().unwrap();

    let output = ytmfetch(&["-d", temp_dir.path().to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(66));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("songs file not found"), "stderr: {stderr}");
}

#[test]
fn test_malformed_manifest_exits_with_dataerr() {
    let temp_dir = TempDir::new().unwrap();
    write_manifest(temp_dir.path(), "{ not json");

    let output = ytmfetch(&["-d", temp_dir.path().to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(65));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERROR"), "stderr: {stderr}");
}

#[test]
fn test_songs_file_is_resolved_against_dir() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("rock.json"), "{}").unwrap();

    let output = ytmfetch(&[
        "-d",
        temp_dir.path().to_str().unwrap(),
        "-s",
        "rock.json",
        "--yt-dlp",
        "/nonexistent/yt-dlp",
    ]);

    assert!(output.status.success());
}

#[test]
fn test_failed_downloads_still_exit_zero_and_are_reported() {
    let temp_dir = TempDir::new().unwrap();
    write_manifest(temp_dir.path(), MIXED_MANIFEST);
    let report_path = temp_dir.path().join("report.json");

    let output = ytmfetch(&[
        "-d",
        temp_dir.path().to_str().unwrap(),
        "--yt-dlp",
        "/nonexistent/yt-dlp",
        "--report",
        report_path.to_str().unwrap(),
    ]);

    assert!(output.status.success());
    assert_mp3_files(temp_dir.path(), &[]);

    let report = read_report(&report_path);
    let entries = report["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 8);
    let good = entries.iter().find(|e| e["entry"] == "good").unwrap();
    assert_eq!(good["outcome"], "failed");
    assert_eq!(good["reason"], "engine_failure");
    let oops = entries.iter().find(|e| e["entry"] == "oops").unwrap();
    assert_eq!(oops["reason"], "invalid_node_value");
    let slash = entries.iter().find(|e| e["entry"] == "bad/name").unwrap();
    assert_eq!(slash["reason"], "invalid_name");
}

#[test]
fn test_unwritable_report_exits_with_ioerr() {
    let temp_dir = TempDir::new().unwrap();
    write_manifest(temp_dir.path(), "{}");
    let report_path = temp_dir.path().join("missing").join("report.json");

    let output = ytmfetch(&[
        "-d",
        temp_dir.path().to_str().unwrap(),
        "--yt-dlp",
        "/nonexistent/yt-dlp",
        "--report",
        report_path.to_str().unwrap(),
    ]);

    assert_eq!(output.status.code(), Some(74));
}

#[cfg(unix)]
fn write_stub_yt_dlp(dir: &Path) -> std::path::PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("yt-dlp");
    std::fs::write(
        &path,
        r#"#!/bin/sh
dir=""
out=""
while [ $# -gt 0 ]; do
  case "$1" in
    --paths) dir="$2"; shift ;;
    --output) out="$2"; shift ;;
    --) url="$2"; break ;;
  esac
  shift
done
printf 'ID3 %s' "$url" > "$dir/${out%.*}.mp3"
"#,
    )
    .unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

#[cfg(unix)]
#[test]
fn test_full_run_with_stub_downloader() {
    let bin_dir = TempDir::new().unwrap();
    let stub = write_stub_yt_dlp(bin_dir.path());
    let temp_dir = TempDir::new().unwrap();
    write_manifest(temp_dir.path(), LIBRARY_MANIFEST);
    let report_path = temp_dir.path().join("report.json");
    let args = [
        "-d",
        temp_dir.path().to_str().unwrap(),
        "--yt-dlp",
        stub.to_str().unwrap(),
        "--report",
        report_path.to_str().unwrap(),
    ];

    let first = ytmfetch(&args);

    assert!(first.status.success());
    assert_mp3_files(temp_dir.path(), LIBRARY_FILES);
    assert_eq!(
        std::fs::read_to_string(temp_dir.path().join("Artist A/First Single.mp3")).unwrap(),
        "ID3 https://music.youtube.com/watch?v=a1"
    );
    let report = read_report(&report_path);
    assert!(
        report["entries"]
            .as_array()
            .unwrap()
            .iter()
            .all(|e| e["outcome"] == "succeeded")
    );

    let second = ytmfetch(&args);

    assert!(second.status.success());
    let report = read_report(&report_path);
    assert!(
        report["entries"]
            .as_array()
            .unwrap()
            .iter()
            .all(|e| e["outcome"] == "skipped" && e["reason"] == "already_present")
    );
}
