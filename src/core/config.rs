use crate::errors::{AppError, AppResult};
use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(path: &Path) -> AppResult<()> {
        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        println!("{}", content);
        Ok(())
    }

    /// Open the config file in an editor: --editor, then $EDITOR, then
    /// $VISUAL, then the platform fallback.
    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let ed = editor
            .clone()
            .or_else(|| env::var("EDITOR").ok())
            .or_else(|| env::var("VISUAL").ok())
            .unwrap_or_else(|| {
                if cfg!(target_os = "windows") {
                    "notepad".into()
                } else {
                    "nano".into()
                }
            });

        let status = Command::new(&ed)
            .arg(path)
            .status()
            .map_err(|e| AppError::Config(format!("failed to launch '{}': {}", ed, e)))?;

        if !status.success() {
            return Err(AppError::Config(format!("editor '{}' exited with an error", ed)));
        }

        Ok(())
    }
}
