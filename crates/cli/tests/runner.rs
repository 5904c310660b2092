use std::process::Command;

fn run_benchmark(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_c3pro"))
        .args(args)
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_full_run_report_contract() {
    let output = run_benchmark(&["--width", "32", "--height", "32"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("stdout is not UTF-8");
    let banner = "=".repeat(30);

    assert!(stdout.contains(&format!(
        "{}\n  C3-PRO BENCHMARK START  \n{}",
        banner, banner
    )));
    for label in ["CPU Freq: ", "Platform: ", "Firmware: ", "Total RAM: "] {
        assert!(stdout.contains(label), "missing hardware line {:?}", label);
    }

    for name in ["Integer Math", "Float Math", "Memory Bus", "Graphics Render"] {
        assert!(stdout.contains(&format!("Running {}...", name)));
        assert!(stdout.contains(&format!("{:<15}: ", name)));
    }

    assert!(stdout.contains("       FINAL REPORT       "));
    assert!(stdout.contains("Total Time     : "));
    assert!(stdout.contains(&"-".repeat(30)));

    let score_line = stdout
        .lines()
        .find(|line| line.starts_with("TOTAL SCORE: "))
        .expect("missing score line");
    let score: u64 = score_line["TOTAL SCORE: ".len()..]
        .parse()
        .expect("score is not an integer");
    assert!(score > 0);
}

#[test]
fn test_durations_are_reported_per_task() {
    let output = run_benchmark(&["--width", "16", "--height", "16"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let done_lines = stdout
        .lines()
        .filter(|line| line.starts_with("Running ") && line.ends_with("ms)"))
        .count();
    assert_eq!(done_lines, 4);
}

#[test]
fn test_help_lists_surface_flags() {
    let output = run_benchmark(&["--help"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("--width"));
    assert!(stdout.contains("--height"));
    assert!(stdout.contains("--trace"));
}

#[test]
fn test_rejects_zero_width() {
    let output = run_benchmark(&["--width", "0"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("--width"));
}

#[test]
fn test_rejects_overflowing_dimensions() {
    let output = run_benchmark(&["--width", "4294967295", "--height", "4294967295"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Invalid surface dimensions"));
}

#[test]
fn test_trace_logs_go_to_stderr() {
    let output = run_benchmark(&["--width", "16", "--height", "16", "--trace"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Allocated 16x16 surface"));
    assert!(!stdout.contains("Allocated 16x16 surface"));
}
