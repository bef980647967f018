use assert_cmd::Command;

fn epicycles() -> Command {
    let mut cmd = Command::cargo_bin("epicycles").unwrap();
    cmd.env_remove("EPICYCLES_SAMPLES")
        .env_remove("EPICYCLES_KEEP")
        .env_remove("EPICYCLES_STEPS");
    cmd
}

#[test]
fn spectrum_prints_one_line_per_bin() {
    let out = epicycles()
        .args(["spectrum", "--shape", "square", "--samples", "32"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 32);
}

#[test]
fn trace_uses_env_defaults() {
    let out = epicycles()
        .env("EPICYCLES_STEPS", "10")
        .args(["trace", "--shape", "star", "--samples", "64", "--keep", "9"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 10);
    for line in stdout.lines() {
        assert_eq!(line.split_whitespace().count(), 2);
    }
}

#[test]
fn polyline_trace_reproduces_vertices_on_grid() {
    let out = epicycles()
        .args([
            "trace", "--shape", "polyline", "--point", "0,0", "--point", "2,0", "--point",
            "2,2", "--point", "0,2", "--samples", "4", "--steps", "4",
        ])
        .output()
        .unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 4);
    let expected = [(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)];
    for (line, (x, y)) in lines.iter().zip(expected.iter()) {
        let coords: Vec<f64> = line
            .split_whitespace()
            .map(|v| v.parse().unwrap())
            .collect();
        assert!((coords[0] - x).abs() < 1e-5, "{}", line);
        assert!((coords[1] - y).abs() < 1e-5, "{}", line);
    }
}

#[test]
fn epicycles_ends_with_tip() {
    let out = epicycles()
        .args(["epicycles", "--samples", "8", "-t", "0.5"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    let last = stdout.lines().last().unwrap();
    assert!(last.starts_with("tip "));
    assert_eq!(stdout.lines().count(), 9);
}

#[test]
fn bad_sample_count_fails() {
    epicycles()
        .args(["spectrum", "--samples", "100"])
        .assert()
        .failure();
}
