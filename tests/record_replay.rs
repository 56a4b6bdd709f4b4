//! Task runs against replayed tool results.
//!
//! The `tool` port is served from cassettes so the tests need neither Go
//! nor protoc nor mockery installed.

use std::path::{Path, PathBuf};

use serde_json::json;

use vinyl_tasks::adapters::live::LiveFileSystem;
use vinyl_tasks::adapters::replaying::ReplayingToolRunner;
use vinyl_tasks::cassette::recorder::CassetteRecorder;
use vinyl_tasks::cassette::replayer::CassetteReplayer;
use vinyl_tasks::cli::Task;
use vinyl_tasks::commands::run_task;
use vinyl_tasks::context::ServiceContext;
use vinyl_tasks::layout::TaskLayout;

fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("vinyl_replay_{name}"));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

/// Writes a tool cassette whose `run` calls return the given exit codes.
fn tool_cassette(path: &Path, results: &[(i32, &str)]) {
    let mut recorder = CassetteRecorder::new(path, "tool", "abc123");
    for (exit_code, stderr) in results {
        recorder.record(
            "tool",
            "run",
            json!({}),
            json!({"ok": {"exit_code": exit_code, "stdout": "", "stderr": stderr}}),
        );
    }
    recorder.finish().unwrap();
}

fn replaying_tools(cassette: &Path) -> ServiceContext {
    let replayer = CassetteReplayer::load(cassette).unwrap();
    ServiceContext::new(Box::new(LiveFileSystem), Box::new(ReplayingToolRunner::new(replayer)))
}

#[test]
fn race_sanitizes_profile_after_replayed_test_run() {
    let root = scratch("race_ok");
    std::fs::write(
        root.join("coverage.out"),
        "mode: atomic\n\
         vinyl/internal/record/record.pb.go:10.1,12.2 1 0\n\
         vinyl/internal/record/service.go:20.1,22.2 2 1\n\
         vinyl/internal/record/record_grpc.pb.go:5.1,6.2 1 0\n",
    )
    .unwrap();
    let cassette = root.join("tool.cassette.yaml");
    tool_cassette(&cassette, &[(0, "")]);

    let ctx = replaying_tools(&cassette);
    run_task(Task::Race, &ctx, &TaskLayout::new(&root)).unwrap();

    assert_eq!(
        std::fs::read_to_string(root.join("coverage.out")).unwrap(),
        "mode: atomic\nvinyl/internal/record/service.go:20.1,22.2 2 1"
    );

    let _ = std::fs::remove_dir_all(&root);
}

#[test]
fn race_failure_keeps_tool_text_and_skips_sanitizing() {
    let root = scratch("race_fail");
    let original = "mode: atomic\nx.pb.go:1.1,2.2 1 0\n";
    std::fs::write(root.join("coverage.out"), original).unwrap();
    let cassette = root.join("tool.cassette.yaml");
    tool_cassette(&cassette, &[(1, "WARNING: DATA RACE\nFAIL\tvinyl/internal/record\n")]);

    let ctx = replaying_tools(&cassette);
    let err = run_task(Task::Race, &ctx, &TaskLayout::new(&root)).unwrap_err();

    let msg = err.to_string();
    assert!(msg.starts_with("race: running \"go test -race"), "got: {msg}");
    assert!(msg.contains("failed with exit code 1"));
    assert!(msg.contains("WARNING: DATA RACE"));
    assert_eq!(std::fs::read_to_string(root.join("coverage.out")).unwrap(), original);

    let _ = std::fs::remove_dir_all(&root);
}

#[test]
fn proto_stops_on_second_output_kind_failure() {
    let base = scratch("proto_fail");
    let root = base.join("vinyl");
    std::fs::create_dir_all(&root).unwrap();
    let group = base.join("protobuf").join("record");
    std::fs::create_dir_all(&group).unwrap();
    std::fs::write(group.join("record.proto"), "syntax = \"proto3\";\n").unwrap();
    std::fs::write(group.join("zeta.proto"), "syntax = \"proto3\";\n").unwrap();

    let cassette = base.join("tool.cassette.yaml");
    // Only two results: a third protoc call would exhaust the cassette and panic.
    tool_cassette(&cassette, &[(0, ""), (1, "protoc-gen-go: program not found")]);

    let ctx = replaying_tools(&cassette);
    let err = run_task(Task::Proto, &ctx, &TaskLayout::new(&root)).unwrap_err();
    assert_eq!(err.task, Task::Proto);
    assert!(err.to_string().contains("protoc-gen-go: program not found"));

    let _ = std::fs::remove_dir_all(&base);
}

#[test]
fn mock_replays_entirely_from_one_cassette() {
    let dir = scratch("mock_full");
    let cassette_path = dir.join("mock.cassette.yaml");
    let internal = "/replayed/vinyl/internal";

    let mut recorder = CassetteRecorder::new(&cassette_path, "mock", "abc123");
    recorder.record("fs", "entry_kind", json!({"path": internal}), json!({"ok": "directory"}));
    recorder.record(
        "fs",
        "list_dir",
        json!({"path": internal}),
        json!({"ok": ["doc.go", "record"]}),
    );
    recorder.record("fs", "entry_kind", json!({"path": "doc.go"}), json!({"ok": "other"}));
    recorder.record("fs", "entry_kind", json!({"path": "record"}), json!({"ok": "directory"}));
    recorder.record(
        "tool",
        "run",
        json!({"program": "mockery"}),
        json!({"ok": {"exit_code": 0, "stdout": "", "stderr": ""}}),
    );
    recorder.record("fs", "list_dir", json!({"path": "record"}), json!({"ok": []}));
    recorder.finish().unwrap();

    // Walk order: root stat, root listing, then "doc.go" popped first, then "record".
    let ctx = ServiceContext::replaying(&cassette_path).unwrap();
    run_task(Task::Mock, &ctx, &TaskLayout::new("/replayed/vinyl")).unwrap();

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn mock_runs_in_linked_package_without_listing_it() {
    let dir = scratch("mock_linked");
    let cassette_path = dir.join("mock.cassette.yaml");
    let internal = "/replayed/vinyl/internal";

    let mut recorder = CassetteRecorder::new(&cassette_path, "mock", "abc123");
    recorder.record("fs", "entry_kind", json!({"path": internal}), json!({"ok": "directory"}));
    recorder.record("fs", "list_dir", json!({"path": internal}), json!({"ok": ["shared"]}));
    recorder.record(
        "fs",
        "entry_kind",
        json!({"path": "shared"}),
        json!({"ok": "linked_directory"}),
    );
    recorder.record(
        "tool",
        "run",
        json!({"program": "mockery"}),
        json!({"ok": {"exit_code": 0, "stdout": "", "stderr": ""}}),
    );
    recorder.finish().unwrap();

    // A second list_dir call would exhaust the cassette and panic.
    let ctx = ServiceContext::replaying(&cassette_path).unwrap();
    run_task(Task::Mock, &ctx, &TaskLayout::new("/replayed/vinyl")).unwrap();

    let _ = std::fs::remove_dir_all(&dir);
}
