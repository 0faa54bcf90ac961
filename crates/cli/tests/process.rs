use std::fs;
use std::path::Path;
use std::process::Command;

fn run_cli(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_sub-extract"))
        .args(args)
        .output()
        .expect("run sub-extract")
}

fn path_str(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

#[test]
fn cli_process_writes_dated_report_and_remembers_run() {
    let root = tempfile::tempdir().expect("tempdir");
    let input = root.path().join("subs.txt");
    fs::write(&input, "ss://abc123\n# comment\naGVsbG8gc3M6Ly94eXo=\n\nnot valid!\n").expect("write input");
    let out_dir = root.path().join("out");
    let state_db = root.path().join("state.db");

    let output = run_cli(&[
        "process",
        "-i",
        &path_str(&input),
        "-o",
        &path_str(&out_dir),
        "--state-db",
        &path_str(&state_db),
    ]);
    assert!(
        output.status.success(),
        "process stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("文件读取成功"));
    assert!(stdout.contains("文件处理成功"));
    assert!(stdout.contains("总链接数: 2"));

    let reports: Vec<_> = fs::read_dir(&out_dir)
        .expect("read out dir")
        .map(|entry| entry.expect("entry").path())
        .collect();
    assert_eq!(reports.len(), 1);

    let name = reports[0].file_name().expect("file name").to_string_lossy().to_string();
    assert!(name.starts_with("订阅链接-") && name.ends_with(".txt"), "unexpected name {}", name);
    assert_eq!(name.chars().count(), "订阅链接-20250101.txt".chars().count());

    let body = fs::read_to_string(&reports[0]).expect("read report");
    assert!(body.starts_with("# 订阅链接生成结果\n# 生成时间: "));
    assert!(body.contains("# 总链接数: 2\n# 自动更新: 每天 07:00\n\nss://abc123\nhello ss://xyz\n\n# 文件结束"));

    let last = run_cli(&["last-run", "--state-db", &path_str(&state_db)]);
    assert!(last.status.success());
    assert!(String::from_utf8_lossy(&last.stdout).starts_with("上次处理时间: "));
}

#[test]
fn cli_process_to_stdout_keeps_report_clean() {
    let root = tempfile::tempdir().expect("tempdir");
    let input = root.path().join("subs.txt");
    fs::write(&input, "vmess://a\ntrojan://b\n").expect("write input");
    let state_db = root.path().join("state.db");

    let output = run_cli(&[
        "process",
        "--input-file",
        &path_str(&input),
        "--stdout",
        "--hour",
        "6",
        "--minute",
        "30",
        "--state-db",
        &path_str(&state_db),
    ]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("# 订阅链接生成结果\n"));
    assert!(stdout.ends_with("# 自动更新: 每天 06:30\n\nvmess://a\ntrojan://b\n\n# 文件结束"));
    assert!(!stdout.contains("文件读取成功"));
    assert!(String::from_utf8_lossy(&output.stderr).contains("文件读取成功"));
}

#[test]
fn cli_rejects_non_txt_input() {
    let root = tempfile::tempdir().expect("tempdir");
    let input = root.path().join("subs.json");
    fs::write(&input, "ss://a").expect("write input");

    let output = run_cli(&[
        "process",
        "-i",
        &path_str(&input),
        "--state-db",
        &path_str(&root.path().join("state.db")),
    ]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("请选择.txt文件"));
}

#[test]
fn cli_reports_missing_content_without_recording_run() {
    let root = tempfile::tempdir().expect("tempdir");
    let input = root.path().join("empty.txt");
    fs::write(&input, "# nothing here\n// still nothing\n\n").expect("write input");
    let state_db = root.path().join("state.db");
    let out_dir = root.path().join("out");

    let output = run_cli(&[
        "process",
        "-i",
        &path_str(&input),
        "-o",
        &path_str(&out_dir),
        "--state-db",
        &path_str(&state_db),
    ]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("未找到有效订阅内容"));
    assert!(!out_dir.exists());

    let last = run_cli(&["last-run", "--state-db", &path_str(&state_db)]);
    assert!(last.status.success());
    assert!(String::from_utf8_lossy(&last.stdout).contains("尚无处理记录"));
}

#[test]
fn cli_schedule_shows_slot() {
    let output = run_cli(&["schedule", "--hour", "18", "--minute", "5"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("自动更新: 每天 18:05"));
    assert!(stdout.contains("下次更新: "));

    let invalid = run_cli(&["schedule", "--hour", "25"]);
    assert!(!invalid.status.success());
}

#[test]
fn cli_process_keeps_first_link_after_byte_order_mark() {
    let root = tempfile::tempdir().expect("tempdir");
    let input = root.path().join("notepad.txt");
    fs::write(&input, "\u{feff}ss://first\r\nss://second\r\n").expect("write input");

    let output = run_cli(&[
        "process",
        "-i",
        &path_str(&input),
        "--stdout",
        "--state-db",
        &path_str(&root.path().join("state.db")),
    ]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("# 总链接数: 2\n"));
    assert!(stdout.contains("\n\nss://first\nss://second\n\n# 文件结束"));
    assert!(!stdout.contains('\u{feff}'));
}

#[test]
fn cli_help_documents_schedule_args() {
    let output = run_cli(&["process", "--help"]);
    assert!(output.status.success());
    let help = String::from_utf8_lossy(&output.stdout);
    assert!(help.contains("Hour of the daily auto-update slot"));
    assert!(help.contains("Minute of the daily auto-update slot"));
}
