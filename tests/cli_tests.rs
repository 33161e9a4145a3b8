use std::fs;
use std::io::Write;
use std::process::{Command, Stdio};

#[test]
fn encode_decode_roundtrip_cli() {
    let enc = env!("CARGO_BIN_EXE_encoder");
    let dec = env!("CARGO_BIN_EXE_decoder");
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.txt");
    let morse = dir.path().join("message.morse");
    let output = dir.path().join("output.txt");

    fs::write(&input, "Hello World\nSOS  at 5:00\n").unwrap();

    let status = Command::new(enc)
        .args([input.to_str().unwrap(), morse.to_str().unwrap(), "--slash"])
        .status()
        .expect("encode failed");
    assert!(status.success());
    let code = fs::read_to_string(&morse).unwrap();
    assert_eq!(code.lines().count(), 2);
    assert!(code.contains(" / "));

    let status = Command::new(dec)
        .args([morse.to_str().unwrap(), output.to_str().unwrap(), "--slash"])
        .status()
        .expect("decode failed");
    assert!(status.success());

    let out = fs::read_to_string(&output).unwrap();
    assert_eq!(out, "hello world\nsos at 5:00");
}

#[test]
fn encoder_json_stats() {
    let enc = env!("CARGO_BIN_EXE_encoder");
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.txt");
    let morse = dir.path().join("out.morse");
    fs::write(&input, "a#b").unwrap();

    let output = Command::new(enc)
        .args([input.to_str().unwrap(), morse.to_str().unwrap(), "--json"])
        .output()
        .expect("encode failed");
    assert!(output.status.success());
    let stats: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(stats["inputs"], 3);
    assert_eq!(stats["symbols"], 2);
    assert_eq!(stats["words"], 0);
    assert_eq!(stats["dropped"], 1);
    assert_eq!(stats["separator"], "seven-space");
    assert!(stats["elapsed_ms"].is_u64());
    assert_eq!(fs::read_to_string(&morse).unwrap(), ".-   -...");
}

#[test]
fn decoder_json_stats() {
    let dec = env!("CARGO_BIN_EXE_decoder");
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.morse");
    let text = dir.path().join("out.txt");
    fs::write(&input, ".- ?? / -...\n").unwrap();

    let output = Command::new(dec)
        .args([input.to_str().unwrap(), text.to_str().unwrap(), "--slash", "--json"])
        .output()
        .expect("decode failed");
    assert!(output.status.success());
    let stats: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(stats["inputs"], 3);
    assert_eq!(stats["symbols"], 2);
    assert_eq!(stats["words"], 2);
    assert_eq!(stats["dropped"], 1);
    assert_eq!(stats["separator"], "slash");
    assert_eq!(fs::read_to_string(&text).unwrap(), "a b");
}

#[test]
fn missing_input_fails() {
    let dec = env!("CARGO_BIN_EXE_decoder");
    let dir = tempfile::tempdir().unwrap();
    let output = Command::new(dec)
        .args([
            dir.path().join("nope.morse").to_str().unwrap(),
            dir.path().join("out.txt").to_str().unwrap(),
        ])
        .output()
        .expect("run failed");
    assert!(!output.status.success());
    let err = String::from_utf8_lossy(&output.stderr);
    assert!(err.contains("Check that the file exists"));
}

#[test]
fn live_session_over_stdin() {
    let exe = env!("CARGO_BIN_EXE_dotdash");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("spawn failed");
    {
        let stdin = child.stdin.as_mut().unwrap();
        stdin
            .write_all(b"sos sos\n:slash\n:decode\n... --- ... / ..\n:flip\n:quit\nignored\n")
            .unwrap();
    }
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "...   ---   ...       ...   ---   ...");
    // Each mode switch shows the buffer converted again.
    assert_eq!(lines[1], "...   ---   ... / ...   ---   ...");
    assert_eq!(lines[2], "");
    assert_eq!(lines[3], "sos i");
    assert!(lines[4].starts_with(".-.-.-   .-.-.-   .-.-.- / -....-"));
}

#[test]
fn directive_without_buffer_prints_nothing() {
    let exe = env!("CARGO_BIN_EXE_dotdash");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("spawn failed");
    child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(b":slash\n:help\ne e\n:seven\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        ". / .\n.       .\n"
    );
}

#[test]
fn live_session_reads_config() {
    let exe = env!("CARGO_BIN_EXE_dotdash");
    let dir = tempfile::tempdir().unwrap();
    let cfg = dir.path().join("dotdash.json");
    fs::write(&cfg, r#"{"separator": "slash", "direction": "morse-to-text"}"#).unwrap();

    let mut child = Command::new(exe)
        .args(["--config", cfg.to_str().unwrap()])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("spawn failed");
    child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(b".- / -...\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "a b\n");
}

#[test]
fn symbol_table_csv() {
    let exe = env!("CARGO_BIN_EXE_symbol_table");
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("table.csv");
    let status = Command::new(exe)
        .arg(path.to_str().unwrap())
        .status()
        .expect("dump failed");
    assert!(status.success());

    let mut rdr = csv::Reader::from_path(&path).unwrap();
    let rows: Vec<(String, String)> = rdr
        .records()
        .map(|r| {
            let r = r.unwrap();
            (r[0].to_string(), r[1].to_string())
        })
        .collect();
    assert_eq!(rows.len(), 54);
    assert_eq!(rows[0], ("A".to_string(), ".-".to_string()));
    assert!(rows.contains(&("\"".to_string(), ".-..-.".to_string())));
}

#[test]
fn live_session_flags_override() {
    let exe = env!("CARGO_BIN_EXE_dotdash");
    let mut child = Command::new(exe)
        .args(["--separator", "slash", "--direction", "decode"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("spawn failed");
    child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(b"-- --- .-. ... . / -.-. --- -.. .\n:flip\nok\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "morse code");
    assert!(lines[1].starts_with("-....-   -....-"));
    assert_eq!(lines[2], "---   -.-");
}

#[test]
fn bad_separator_flag_fails() {
    let exe = env!("CARGO_BIN_EXE_dotdash");
    let output = Command::new(exe)
        .args(["--separator", "dash"])
        .stdin(Stdio::null())
        .output()
        .expect("run failed");
    assert!(!output.status.success());
}

#[test]
fn symbol_table_requires_output() {
    let exe = env!("CARGO_BIN_EXE_symbol_table");
    let output = Command::new(exe).output().expect("run failed");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));
}

#[test]
fn non_utf8_input_reports_encoding() {
    let enc = env!("CARGO_BIN_EXE_encoder");
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("latin1.txt");
    fs::write(&input, [0x53u8, 0xff, 0x53]).unwrap();
    let output = Command::new(enc)
        .args([
            input.to_str().unwrap(),
            dir.path().join("out.morse").to_str().unwrap(),
        ])
        .output()
        .expect("run failed");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("re-save the file as UTF-8"));
}
