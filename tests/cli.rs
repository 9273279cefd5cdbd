use std::io::Write;
use std::process::{Command, Output};

use tempfile::{NamedTempFile, TempDir};

fn flownet_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_flownet-cli"))
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn default_input_is_the_bundled_ladder() {
    let output = flownet_cli(&[]);
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert!(output.status.success());
    assert!(stdout.starts_with("Reading network from file: data/ladder_5.txt\n"));
    assert!(stdout.contains("=== Intermediate Steps ===\n"));
    assert!(stdout.contains("Maximum flow: 13\n"));
}

#[test]
fn quiet_check_and_csv_output() {
    let dir = TempDir::new().unwrap();
    let csv_path = dir.path().join("flows.csv");
    let output = flownet_cli(&[
        "data/ladder_5.txt",
        "--quiet",
        "--check",
        "--output",
        csv_path.to_str().unwrap(),
    ]);
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert!(output.status.success());
    assert!(!stdout.contains("=== Intermediate Steps ==="));
    assert!(stdout.contains("=== Final Result ===\nMaximum flow: 13\nFlow details:\n"));

    let mut rdr = csv::Reader::from_path(&csv_path).unwrap();
    let headers: Vec<_> = rdr.headers().unwrap().iter().map(String::from).collect();
    assert_eq!(headers, ["from", "to", "flow"]);
    let rows: Vec<(usize, usize, i64)> = rdr.deserialize().map(Result::unwrap).collect();
    let from_source: i64 = rows.iter().filter(|(from, ..)| *from == 0).map(|r| r.2).sum();
    let into_sink: i64 = rows.iter().filter(|(_, to, _)| *to == 5).map(|r| r.2).sum();
    assert_eq!(from_source, 13);
    assert_eq!(into_sink, 13);
    // every listed line of the report is a row of the export
    assert_eq!(stdout.matches("f(").count(), rows.len());
}

#[test]
fn malformed_input_fails() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"3\n0 1 five\n").unwrap();
    let output = flownet_cli(&[file.path().to_str().unwrap()]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("expected an integer capacity"));
}

#[test]
fn missing_input_fails() {
    let output = flownet_cli(&["data/no_such_network.txt"]);

    assert!(!output.status.success());
    assert!(String::from_utf8(output.stderr)
        .unwrap()
        .contains("cannot read data/no_such_network.txt"));
}
