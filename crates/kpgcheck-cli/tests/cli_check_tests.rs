//! CLI integration tests
//!
//! Run the built binary against exports written to a temp directory.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

struct Channel<'a> {
    zone_no: u32,
    zone: &'a str,
    chan_no: u32,
    name: &'a str,
    tx: &'a str,
    rx: &'a str,
    ptt: &'a str,
}

fn channel_entry(c: &Channel<'_>) -> String {
    format!(
        "<table><tr><th colspan=\"2\">Channel Edit</th></tr>\
         <tr><td>Zone Number</td><td>{}</td></tr>\
         <tr><td>Zone Name</td><td>{}</td></tr>\
         <tr><td>Channel Number</td><td>{}</td></tr>\
         <tr><td>Channel Name</td><td>{}</td></tr></table>\
         <table><tr><th colspan=\"2\">General</th></tr>\
         <tr><td>Transmit Frequency [MHz]</td><td>{}</td></tr>\
         <tr><td>Receive Frequency [MHz]</td><td>{}</td></tr>\
         <tr><td>Scan Add</td><td>Yes</td></tr></table>\
         <table><tr><th colspan=\"2\">Analog</th></tr>\
         <tr><td>QT/DQT Encode</td><td>None</td></tr>\
         <tr><td>QT/DQT Decode</td><td>None</td></tr>\
         <tr><td>Channel Spacing (Analog) [kHz]</td><td>12.5</td></tr>\
         <tr><td>PTT ID (Analog)</td><td>{}</td></tr></table>",
        c.zone_no, c.zone, c.chan_no, c.name, c.tx, c.rx, c.ptt
    )
}

fn export(channels: &[Channel<'_>]) -> String {
    let mut body = String::from("<h1>KPG-D1N Version 2.10</h1>");
    let mut zone = 0;
    for c in channels {
        if c.zone_no != zone {
            body.push_str("<h1>Channel Edit</h1>");
            zone = c.zone_no;
        }
        body.push_str("<h1>Channel Edit</h1>");
        body.push_str(&channel_entry(c));
    }
    format!("<html><body>{body}</body></html>")
}

fn lincoln(zone_no: u32, zone: &'static str, ptt: &'static str) -> Channel<'static> {
    Channel {
        zone_no,
        zone,
        chan_no: 1,
        name: "Lincoln",
        tx: "155.1000",
        rx: "155.7000",
        ptt,
    }
}

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_kpgcheck-cli"))
        .current_dir(dir)
        .env("RUST_LOG", "off")
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

#[test]
fn test_check_reports_same_name_discrepancy() {
    let temp_dir = TempDir::new().unwrap();
    write(
        temp_dir.path(),
        "plan.htm",
        &export(&[lincoln(1, "North", "101"), lincoln(2, "South", "202")]),
    );

    let output = run(temp_dir.path(), &["check", "plan.htm"]);

    assert!(
        output.status.success(),
        "check should succeed even with discrepancies. Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    let discrepancy = "    *** DISCREPANCY: PTT ID (Analog): 202 is different than 101 in Zone 1 (North)  Channel 1";
    let summary_at = stdout.find(discrepancy).expect("live discrepancy line");
    let detail_at = stdout
        .find("Detailed log, including discrepancies:")
        .expect("detailed log marker");
    assert!(summary_at < detail_at);
    // Parts 1 and 2 both flag the PTT ID, once live and once in the detailed log
    assert_eq!(stdout.matches(discrepancy).count(), 4);
    assert!(stdout.contains("  No discrepancies found."));

    let csv = fs::read_to_string(temp_dir.path().join("plan.csv")).unwrap();
    assert!(csv.starts_with(
        "ID,Zone#,Zone Name,Chan#,Channel Name,TX,RX,Enc,Dec,Spacing,PTT ID,Scan Add"
    ));
    assert!(csv.trim_end().ends_with("## end"));

    let log = fs::read_to_string(temp_dir.path().join("kpgCheck.log")).unwrap();
    assert!(log.contains("  File 1: plan.htm"));
    assert!(log.contains(discrepancy));
}

#[test]
fn test_check_two_files_compares_them() {
    let temp_dir = TempDir::new().unwrap();
    let alpha = Channel {
        name: "Alpha",
        ..lincoln(1, "ZoneX", "1")
    };
    let beta_old = Channel {
        name: "Beta",
        chan_no: 2,
        ..lincoln(1, "ZoneX", "10")
    };
    let beta_new = Channel {
        name: "Beta",
        chan_no: 2,
        ..lincoln(1, "ZoneX", "20")
    };
    write(temp_dir.path(), "a.htm", &export(&[alpha, beta_old]));
    write(temp_dir.path(), "b.htm", &export(&[beta_new]));

    let output = run(temp_dir.path(), &["check", "a.htm", "b.htm", "--no-csv"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("FILE COMPARISON: a.htm vs b.htm"));
    assert!(stdout.contains("  Removed: ZoneX:Alpha in Zone 1 (ZoneX)  Channel 1"));
    assert!(stdout.contains("  Changed: ZoneX:Beta"));
    assert!(stdout.contains("    PTT ID: 10 -> 20"));
    assert!(!temp_dir.path().join("a.csv").exists());
}

#[test]
fn test_wrong_extension_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "plan.txt", &export(&[lincoln(1, "North", "1")]));

    let output = run(temp_dir.path(), &["check", "plan.txt"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: [ERR_INVALID_INPUT_FILE]"), "stderr: {stderr}");
    assert!(output.stdout.is_empty());
    assert!(!temp_dir.path().join("kpgCheck.log").exists());
}

#[test]
fn test_synonyms_from_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let simplex_a = Channel {
        name: "Simplex A",
        tx: "146.5200",
        rx: "146.5200",
        ..lincoln(1, "North", "Off")
    };
    let simplex_b = Channel {
        name: "Simplex B",
        chan_no: 2,
        tx: "146.5200",
        rx: "146.5200",
        ..lincoln(1, "North", "Off")
    };
    write(temp_dir.path(), "plan.htm", &export(&[simplex_a, simplex_b]));
    write(temp_dir.path(), "syn.txt", "# simplex\n\"Simplex A\" \"Simplex B\"\n");
    write(
        temp_dir.path(),
        "kpgcheck.toml",
        "[synonyms]\npath = \"syn.txt\"\n\n[output]\ncsv = false\nreport_file = \"\"\n",
    );

    let output = run(temp_dir.path(), &["check", "plan.htm"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--- legal synonym"));
    assert!(!stdout.contains("*** DISCREPANCY"));
    assert!(!temp_dir.path().join("kpgCheck.log").exists());
}

#[test]
fn test_ambiguous_synonym_note_precedes_live_checks() {
    let temp_dir = TempDir::new().unwrap();
    let first = Channel {
        name: "A",
        ..lincoln(1, "North", "101")
    };
    let second = Channel {
        name: "A",
        ..lincoln(2, "South", "202")
    };
    write(temp_dir.path(), "plan.htm", &export(&[first, second]));
    write(temp_dir.path(), "syn.txt", "\"A\" \"B\"\n\"A\" \"C\"\n");

    let output = run(
        temp_dir.path(),
        &["check", "plan.htm", "--synonyms", "syn.txt", "--no-csv"],
    );

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let note_at = stdout
        .find("NOTE: Channel name \"A\" appears in multiple synonym groups")
        .expect("synonym note on stdout");
    let discrepancy_at = stdout.find("*** DISCREPANCY").expect("live discrepancy");
    let detail_at = stdout
        .find("Detailed log, including discrepancies:")
        .expect("detailed log marker");
    assert!(note_at < discrepancy_at, "stdout: {stdout}");
    assert!(discrepancy_at < detail_at);
}

#[test]
fn test_shared_stem_with_csv_output_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let content = export(&[lincoln(1, "North", "1")]);
    write(temp_dir.path(), "plan.htm", &content);
    write(temp_dir.path(), "plan.html", &content);

    let output = run(temp_dir.path(), &["check", "plan.htm", "plan.html"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERR_INVALID_INPUT_FILE"), "stderr: {stderr}");
    assert!(stderr.contains("plan.csv"));
    assert!(!temp_dir.path().join("plan.csv").exists());

    let output = run(
        temp_dir.path(),
        &["check", "plan.htm", "plan.html", "--no-csv"],
    );
    assert!(output.status.success());
}

#[test]
fn test_rejected_ambiguous_synonym_stops_the_run() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "plan.htm", &export(&[lincoln(1, "North", "1")]));
    write(temp_dir.path(), "syn.txt", "\"A\" \"B\"\n\"A\" \"C\"\n");
    write(
        temp_dir.path(),
        "strict.toml",
        "[synonyms]\npath = \"syn.txt\"\nambiguity = \"reject\"\n",
    );

    let output = run(
        temp_dir.path(),
        &["check", "plan.htm", "--config", "strict.toml"],
    );

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERR_AMBIGUOUS_SYNONYM"), "stderr: {stderr}");
}

#[test]
fn test_unknown_config_key_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "plan.htm", &export(&[lincoln(1, "North", "1")]));
    write(temp_dir.path(), "kpgcheck.toml", "[output]\ncolour = true\n");

    let output = run(temp_dir.path(), &["check", "plan.htm"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("ERR_INVALID_CONFIG"));
}

#[test]
fn test_diff_json_output() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "a.htm", &export(&[lincoln(1, "ZoneX", "10")]));
    write(temp_dir.path(), "b.htm", &export(&[lincoln(1, "ZoneX", "20")]));

    let output = run(temp_dir.path(), &["diff", "a.htm", "b.htm", "--json"]);

    assert!(output.status.success());
    let diff: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(diff["classification"], "Changed");
    assert_eq!(diff["changed"][0]["key"], "ZoneX:Lincoln");
    assert_eq!(diff["changed"][0]["changes"][0]["field"], "PttId");
    assert_eq!(diff["changed"][0]["changes"][0]["before"], "10");
    assert_eq!(diff["changed"][0]["changes"][0]["after"], "20");
}

#[test]
fn test_diff_human_summary() {
    let temp_dir = TempDir::new().unwrap();
    let content = export(&[lincoln(1, "ZoneX", "10")]);
    write(temp_dir.path(), "a.htm", &content);
    write(temp_dir.path(), "b.htm", &content);

    let output = run(temp_dir.path(), &["diff", "a.htm", "b.htm"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("## Channel Diff"));
    assert!(stdout.contains("**Classification**: Identical"));
}
