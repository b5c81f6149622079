use anyhow::Result;

use crate::CliTest;

const CATALOG: &str = r#"{
  "details": {
    "src/locales/en-US/common.json": {
      "greeting": "Hello",
      "nested.title": "Welcome"
    }
  }
}"#;

fn setup_project(test: &CliTest) -> Result<()> {
    test.write_file("translations.json", CATALOG)?;
    test.write_file(
        "app/src/locales/en-US/common.json",
        r#"{"greeting": {"message": "Hello"}}"#,
    )
}

#[test]
fn test_translate_requires_api_key() -> Result<()> {
    let test = CliTest::new()?;
    setup_project(&test)?;

    let output = test
        .translate_command()
        .args(["translations.json", "app", "--languages", "zh-CN"])
        .output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("TRANSLATION_API_KEY"));
    assert!(!test.root().join("app/src/locales/zh-CN").exists());

    Ok(())
}

#[test]
fn test_translate_missing_artifact() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .translate_command()
        .args(["translations.json", "."])
        .env("TRANSLATION_API_KEY", "test-key")
        .output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("catalog artifact not found"));

    Ok(())
}

#[test]
fn test_translate_empty_catalog() -> Result<()> {
    let test = CliTest::with_file("translations.json", r#"{"details": {}}"#)?;

    let output = test
        .translate_command()
        .args(["translations.json", ".", "--languages", "zh-CN,ja-JP"])
        .env("TRANSLATION_API_KEY", "test-key")
        .output()?;
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let report = test.read_json("translation-report.json")?;
    assert_eq!(report["languages"], serde_json::json!(["zh-CN", "ja-JP"]));
    assert_eq!(report["totalKeys"], 0);

    Ok(())
}

#[test]
fn test_translate_keeps_source_text_when_service_unreachable() -> Result<()> {
    let test = CliTest::new()?;
    setup_project(&test)?;

    let output = test
        .translate_command()
        .args([
            "translations.json",
            "app",
            "--languages",
            "zh-CN",
            "--api-url",
            "http://127.0.0.1:9",
            "--delay-ms",
            "0",
            "--report",
            "reports/run.json",
        ])
        .env("TRANSLATION_API_KEY", "test-key")
        .output()?;
    assert_eq!(
        output.status.code(),
        Some(1),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let localized = test.read_json("app/src/locales/zh-CN/common.json")?;
    assert_eq!(
        localized,
        serde_json::json!({
            "greeting": { "message": "Hello" },
            "nested.title": { "message": "Welcome" }
        })
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("warning: 2 strings kept the source text"));

    let report = test.read_json("reports/run.json")?;
    assert_eq!(report["languageStats"]["zh-CN"]["totalTranslations"], 2);
    assert!(!test.root().join("translation-report.json").exists());

    Ok(())
}

#[test]
fn test_translate_uses_configured_base_locale() -> Result<()> {
    let test = CliTest::with_file(".locsmithrc.json", r#"{ "baseLocale": "en-GB" }"#)?;
    test.write_file(
        "translations.json",
        r#"{"src/locales/en-GB/common.json": {"colour": "Colour"}}"#,
    )?;
    test.write_file("app/src/locales/en-GB/common.json", "{}")?;

    let output = test
        .translate_command()
        .args([
            "translations.json",
            "app",
            "--languages",
            "fr-FR",
            "--api-url",
            "http://127.0.0.1:9",
            "--delay-ms",
            "0",
        ])
        .env("TRANSLATION_API_KEY", "test-key")
        .output()?;
    assert_eq!(output.status.code(), Some(1));

    let localized = test.read_json("app/src/locales/fr-FR/common.json")?;
    assert_eq!(localized, serde_json::json!({ "colour": { "message": "Colour" } }));
    assert!(!test.root().join("app/src/locales/en-GB/fr-FR").exists());

    Ok(())
}
