use std::io::ErrorKind;
use std::path::PathBuf;

/// Source of raw config text. `Ok(None)` means nothing is stored yet and the
/// caller should fall back to defaults.
pub trait ConfigContentProvider {
    fn get_config_content(&self) -> Result<Option<String>, String>;
    fn set_config_content(&self, content: &str) -> Result<(), String>;
}

pub struct FileContentConfigProvider {
    file_path: PathBuf,
}

impl FileContentConfigProvider {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }
}

impl ConfigContentProvider for FileContentConfigProvider {
    fn get_config_content(&self) -> Result<Option<String>, String> {
        match std::fs::read_to_string(&self.file_path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(format!(
                "Failed to read config file {}: {}",
                self.file_path.display(),
                err
            )),
        }
    }

    fn set_config_content(&self, content: &str) -> Result<(), String> {
        if let Some(parent) = self.file_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }
        std::fs::write(&self.file_path, content).map_err(|e| {
            format!(
                "Failed to write config file {}: {}",
                self.file_path.display(),
                e
            )
        })
    }
}

#[cfg(test)]
#[derive(Default)]
pub(crate) struct InMemoryConfigContentProvider {
    content: std::sync::Mutex<Option<String>>,
}

#[cfg(test)]
impl InMemoryConfigContentProvider {
    pub(crate) fn new(content: Option<String>) -> Self {
        Self {
            content: std::sync::Mutex::new(content),
        }
    }
}

#[cfg(test)]
impl ConfigContentProvider for InMemoryConfigContentProvider {
    fn get_config_content(&self) -> Result<Option<String>, String> {
        let content = self
            .content
            .lock()
            .map_err(|e| format!("Config content lock poisoned: {}", e))?;
        Ok(content.clone())
    }

    fn set_config_content(&self, content: &str) -> Result<(), String> {
        let mut current = self
            .content
            .lock()
            .map_err(|e| format!("Config content lock poisoned: {}", e))?;
        *current = Some(content.to_string());
        Ok(())
    }
}
