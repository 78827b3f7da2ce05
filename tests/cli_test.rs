use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_cli_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("sms-upi-tracker"));
    cmd.arg("tests/fixtures/messages.csv");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "[New UPI Transaction] ₹1234.50 from VM-HDFCBK",
        ))
        .stdout(predicate::str::contains("₹500.00 from AD-ICICIB"))
        // Sender is cut after 20 characters
        .stdout(predicate::str::contains("₹1234.00 from JD-SBIUPI-ALERTS-NOT..."))
        .stdout(predicate::str::contains("FRIEND").not())
        .stdout(predicate::str::contains("from BANK").not());

    Ok(())
}

#[test]
fn test_cli_reads_stdin_json() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = assert_cmd::Command::new(cargo_bin!("sms-upi-tracker"));
    cmd.arg("--format").arg("json");
    cmd.write_stdin("sender,body\nAX-KOTAK,\"INR 2,500 debited\"\n");

    let output = cmd.assert().success().get_output().stdout.clone();
    let line = String::from_utf8(output)?;
    let value: serde_json::Value = serde_json::from_str(line.trim())?;

    assert_eq!(value["text"], "₹2500.00 from AX-KOTAK");
    assert_eq!(value["channel"], "upi_transactions");
    assert_eq!(value["auto_cancel"], true);

    Ok(())
}

#[test]
fn test_cli_missing_input_file() {
    let mut cmd = Command::new(cargo_bin!("sms-upi-tracker"));
    cmd.arg("tests/fixtures/does_not_exist.csv");

    cmd.assert().failure();
}
