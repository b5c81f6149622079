use anyhow::{Context, Result};
use serde_json::Value;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "✓ Created .locsmithrc.json\n"
    );

    let content = test.read_file(".locsmithrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["baseLocale"], "en-US");
    assert!(parsed.get("messageIncludes").is_some());
    assert!(parsed.get("componentIncludes").is_some());
    assert!(parsed.get("componentCatalog").is_some());
    assert!(content.contains("\n  \""), "Config should use 2-space indentation");

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".locsmithrc.json", "{}")?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("already exists"));
    assert_eq!(test.read_file(".locsmithrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    test.command().arg("init").output()?;
    test.write_file(
        "src/locales/en-US/common.json",
        r#"{"save": {"message": "Save"}}"#,
    )?;

    let output = test.extract_command().arg(".").output()?;
    assert!(
        output.status.success(),
        "Extract should work with initialized config. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    Ok(())
}
