use crate::commands::{CmdMessage, CmdResult, WardrobePaths};
use crate::config::WardrobeConfig;
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &WardrobePaths, action: ConfigAction) -> Result<CmdResult> {
    let dir = &paths.data;
    match action {
        ConfigAction::ShowAll => {
            let config = WardrobeConfig::load(dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = WardrobeConfig::load(dir)?;
            let message = match config.get(&key) {
                Some(val) => CmdMessage::info(val),
                None => CmdMessage::error(format!("Unknown config key: {}", key)),
            };
            Ok(CmdResult::default().with_message(message))
        }
        ConfigAction::Set(key, value) => {
            let mut config = WardrobeConfig::load(dir)?;
            if let Err(e) = config.set(&key, &value) {
                return Ok(CmdResult::default().with_message(CmdMessage::error(e)));
            }
            config.save(dir)?;
            let display_val = config.get(&key).unwrap_or_else(|| value.clone());
            Ok(CmdResult::default()
                .with_config(config)
                .with_message(CmdMessage::success(format!(
                    "{} set to {}",
                    key, display_val
                ))))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use tempfile::TempDir;

    fn paths(temp: &TempDir) -> WardrobePaths {
        WardrobePaths {
            data: temp.path().to_path_buf(),
        }
    }

    #[test]
    fn set_then_show_key() {
        let temp = TempDir::new().unwrap();
        let paths = paths(&temp);

        let set = run(&paths, ConfigAction::Set("page-size".into(), "7".into())).unwrap();
        assert_eq!(set.config.unwrap().page_size, 7);

        let shown = run(&paths, ConfigAction::ShowKey("page-size".into())).unwrap();
        assert_eq!(shown.messages[0].content, "7");
    }

    #[test]
    fn invalid_value_is_reported_not_saved() {
        let temp = TempDir::new().unwrap();
        let paths = paths(&temp);

        let result = run(&paths, ConfigAction::Set("page-size".into(), "0".into())).unwrap();

        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert!(!temp.path().join("config.json").exists());
    }

    #[test]
    fn show_all_returns_defaults() {
        let temp = TempDir::new().unwrap();
        let result = run(&paths(&temp), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config, Some(WardrobeConfig::default()));
    }
}
