use std::path::PathBuf;

/// Main configuration for extraer
#[derive(Debug, Clone)]
pub struct ExtraerConfig {
    /// Root directory the walk starts from
    pub root: PathBuf,
    /// Directory base names pruned before descending (matched at any depth)
    pub ignored_dirs: Vec<String>,
    /// File-name suffix that selects files for printing (case-sensitive)
    pub target_suffix: String,
}

impl ExtraerConfig {
    /// Validates the configuration, ensuring the root path exists.
    pub fn validate(&self) -> anyhow::Result<()> {
        if !self.root.exists() {
            anyhow::bail!("Path does not exist: {:?}", self.root);
        }
        Ok(())
    }
}

impl Default for ExtraerConfig {
    fn default() -> Self {
        let ignored = vec!["node_modules", "expo"];

        Self {
            root: PathBuf::from("."),
            ignored_dirs: ignored.into_iter().map(String::from).collect(),
            target_suffix: String::from(".tsx"),
        }
    }
}
