use anyhow::Result;

use crate::CliTest;

const HEADER_COMPONENT: &str = r#"<template>
  <div class="header">
    <h1>Welcome back</h1>
    <input placeholder="Search products" />
  </div>
</template>

<script>
export default { name: "AppHeader" }
</script>
"#;

fn setup_project(test: &CliTest) -> Result<()> {
    test.write_file(
        "app/src/locales/en-US/common.json",
        r#"{
  "greeting": { "message": "Hello" },
  "nested": { "title": { "message": "Welcome" } },
  "meta": { "version": 3 }
}"#,
    )?;
    test.write_file("app/src/components/Header.vue", HEADER_COMPONENT)?;
    test.write_file(
        "app/node_modules/lib/locales/en-US/vendor.json",
        r#"{"skip": {"message": "Vendor text"}}"#,
    )
}

#[test]
fn test_extract_writes_catalog_artifact() -> Result<()> {
    let test = CliTest::new()?;
    setup_project(&test)?;

    let output = test.extract_command().args(["app", "out/translations.json"]).output()?;
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let artifact = test.read_json("out/translations.json")?;
    let details = &artifact["details"];

    let common = &details["src/locales/en-US/common.json"];
    assert_eq!(common["greeting"], "Hello");
    assert_eq!(common["nested.title"], "Welcome");
    assert!(common.get("meta").is_none());
    assert!(common.get("meta.version").is_none());

    let components = &details["src/locales/en-US/components.json"];
    assert_eq!(components["Header.text1"], "Welcome back");
    assert_eq!(components["Header.text2"], "Search products");

    assert!(details.get("node_modules/lib/locales/en-US/vendor.json").is_none());
    assert_eq!(artifact["totalKeys"], 4);
    assert_eq!(artifact["fileCount"], 2);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Extracted 4 keys from 2 files:"));

    Ok(())
}

#[test]
fn test_extract_component_catalog_override() -> Result<()> {
    let test = CliTest::with_file("app/src/components/Header.vue", HEADER_COMPONENT)?;

    let output = test
        .extract_command()
        .args(["app", "--component-catalog", "i18n/en-US/ui.json"])
        .output()?;
    assert_eq!(output.status.code(), Some(0));

    let artifact = test.read_json("translations.json")?;
    assert_eq!(
        artifact["details"]["i18n/en-US/ui.json"]["Header.text1"],
        "Welcome back"
    );

    Ok(())
}

#[test]
fn test_extract_reports_unreadable_catalog() -> Result<()> {
    let test = CliTest::new()?;
    setup_project(&test)?;
    test.write_file("app/src/locales/en-US/broken.json", "{ not json")?;

    let output = test.extract_command().arg("app").output()?;
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("warning: 1 file could not be read"));

    let artifact = test.read_json("translations.json")?;
    assert_eq!(artifact["fileCount"], 2);

    Ok(())
}

#[test]
fn test_extract_missing_source() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.extract_command().arg("missing").output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("source path not found"));
    assert!(!test.root().join("translations.json").exists());

    Ok(())
}

#[test]
fn test_extract_follows_configured_base_locale() -> Result<()> {
    let test = CliTest::with_file(".locsmithrc.json", r#"{ "baseLocale": "en-GB" }"#)?;
    test.write_file(
        "src/locales/en-GB/common.json",
        r#"{"colour": {"message": "Favourite colour"}}"#,
    )?;
    test.write_file(
        "src/locales/en-US/common.json",
        r#"{"color": {"message": "Favorite color"}}"#,
    )?;
    test.write_file("src/components/Header.vue", HEADER_COMPONENT)?;

    let output = test.extract_command().arg(".").output()?;
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let details = &test.read_json("translations.json")?["details"];
    assert_eq!(details["src/locales/en-GB/common.json"]["colour"], "Favourite colour");
    assert!(details.get("src/locales/en-US/common.json").is_none());
    assert_eq!(
        details["src/locales/en-GB/components.json"]["Header.text1"],
        "Welcome back"
    );

    Ok(())
}
