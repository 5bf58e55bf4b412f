use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, write_clean_fixture, write_mixed_fixture};

#[test]
fn mixed_fixture_reports_every_category_and_exits_2() -> Result<()> {
    let test = CliTest::new()?;
    write_mixed_fixture(&test)?;

    let output = test.command().output()?;
    assert_eq!(output.status.code(), Some(2));

    let stdout = String::from_utf8(output.stdout)?;
    assert_eq!(
        stdout,
        "Checked 3 files: 3 blocks, 6 localization keys\n\
         \n\
         missing-potential: 1\n\
         \x20 - block2  common/advances/military.txt:6\n\
         \n\
         missing-localization: 1\n\
         \x20 - block3 (name or _desc missing)  common/advances/military.txt:9\n\
         \n\
         deprecated-token: 1\n\
         \x20 - loyalty -> loyalty = 0.1  common/events/old.txt:1\n\
         \n\
         missing-bom: 1\n\
         \x20 - no UTF-8 byte-order mark  localization/english/advances_l_english.yml\n\
         \n\
         Localization source has UTF-8 BOM: false\n\
         \u{2718} 4 problems (1 blocking, 3 informational)\n"
    );

    Ok(())
}

#[test]
fn clean_fixture_exits_0() -> Result<()> {
    let test = CliTest::new()?;
    write_clean_fixture(&test)?;

    let output = test.command().output()?;
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("Localization source has UTF-8 BOM: true"));
    assert!(stdout.contains("No problems found"));

    Ok(())
}

#[test]
fn missing_root_exits_1() -> Result<()> {
    let test = CliTest::new()?;

    let output = std::process::Command::new(env!("CARGO_BIN_EXE_advlint"))
        .arg(test.root().join("does-not-exist"))
        .env("NO_COLOR", "1")
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("Error:"), "stderr was: {}", stderr);
    assert!(output.stdout.is_empty());

    Ok(())
}

#[test]
fn missing_localization_source_exits_1() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("common/advances/a.txt", b"a = {\n}\n")?;

    let output = test.command().output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    Ok(())
}

#[test]
fn rerun_on_unchanged_input_is_byte_identical() -> Result<()> {
    let test = CliTest::new()?;
    write_mixed_fixture(&test)?;

    let first = test.command().output()?;
    let second = test.command().output()?;

    assert_eq!(first.status.code(), second.status.code());
    assert_eq!(first.stdout, second.stdout);

    Ok(())
}

#[test]
fn informational_findings_alone_exit_0() -> Result<()> {
    let test = CliTest::new()?;
    write_clean_fixture(&test)?;
    // A retired token and a brace mismatch are informational only.
    test.write_file("common/events/old.txt", b"loyalty = 0.1\nx = {\n")?;

    let output = test.command().output()?;
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("deprecated-token: 1"));
    assert!(stdout.contains("brace-mismatch: 1"));

    Ok(())
}

#[test]
fn json_format_carries_findings_and_same_exit_code() -> Result<()> {
    let test = CliTest::new()?;
    write_mixed_fixture(&test)?;

    let output = test.command().arg("--format").arg("json").output()?;
    assert_eq!(output.status.code(), Some(2));

    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["files_checked"], 3);
    assert_eq!(value["block_count"], 3);
    assert_eq!(value["bom_present"], false);

    let findings = value["findings"].as_array().unwrap();
    assert_eq!(findings.len(), 4);
    assert_eq!(findings[0]["kind"], "missing-potential");
    assert_eq!(findings[0]["detail"], "block2");

    Ok(())
}

#[test]
fn max_examples_truncates_listings_but_keeps_totals() -> Result<()> {
    let test = CliTest::new()?;

    let mut content = String::new();
    for i in 0..5 {
        content.push_str(&format!("adv_{} = {{\n    cost = 1\n}}\n", i));
    }
    test.write_file("common/advances/many.txt", content.as_bytes())?;
    test.write_file(
        "localization/english/advances_l_english.yml",
        b"\xEF\xBB\xBFl_english:\n",
    )?;

    let output = test
        .command()
        .arg("--max-examples")
        .arg("2")
        .output()?;
    assert_eq!(output.status.code(), Some(2));

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("missing-potential: 5"));
    assert!(stdout.contains("(and 3 more)"));

    Ok(())
}

#[test]
fn localization_override_is_used() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "common/advances/a.txt",
        b"a = {\n    potential = { }\n}\n",
    )?;
    test.write_file("elsewhere/keys.yml", b"\xEF\xBB\xBFl_english:\n a:0 \"A\"\n a_desc:0 \"D\"\n")?;

    let output = test
        .command()
        .arg("--localization")
        .arg(test.root().join("elsewhere/keys.yml"))
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("No problems found"));

    Ok(())
}
