use std::process::Command;

#[test]
fn failed_export_logs_to_stderr_only() {
    let dir = std::env::temp_dir().join(format!("holder-bin-{}", std::process::id()));
    let blocker = dir.join("holder.stl");
    std::fs::create_dir_all(&blocker).unwrap();

    let out = Command::new(env!("CARGO_BIN_EXE_holder"))
        .current_dir(&dir)
        .output()
        .unwrap();

    assert!(!out.status.success());
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("error"));
    assert!(blocker.is_dir());
    assert!(!dir.join("holder.stl.partial").exists());
    std::fs::remove_dir_all(&dir).unwrap();
}
