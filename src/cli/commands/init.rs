use std::{fs, path::Path};

use anyhow::{Result, bail};

use super::{CommandResult, CommandSummary, InitSummary};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

pub fn init() -> Result<CommandResult> {
    init_in(Path::new("."))
}

fn init_in(dir: &Path) -> Result<CommandResult> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(&config_path, format!("{}\n", default_config_json()?))?;
    Ok(CommandResult {
        summary: CommandSummary::Init(InitSummary {
            path: Path::new(CONFIG_FILE_NAME).to_path_buf(),
        }),
        failure_count: 0,
    })
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::config::Config;

    #[test]
    fn test_init_writes_default_config() {
        let dir = tempdir().unwrap();
        init_in(dir.path()).unwrap();

        let content = fs::read_to_string(dir.path().join(CONFIG_FILE_NAME)).unwrap();
        let config: Config = serde_json::from_str(&content).unwrap();
        assert_eq!(config.base_locale, "en-US");
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "{}").unwrap();

        let err = init_in(dir.path()).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }
}
