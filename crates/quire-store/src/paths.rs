use std::path::{Path, PathBuf};

/// Hidden per-project directory holding workspace state.
pub const LAYOUT_DIR_NAME: &str = ".quire";

pub const LAYOUT_FILE_NAME: &str = "layout.json";

/// `<project>/.quire/layout.json`.
pub fn layout_file_path(project: &Path) -> PathBuf {
    project.join(LAYOUT_DIR_NAME).join(LAYOUT_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_file_lives_in_hidden_dir() {
        let path = layout_file_path(Path::new("/work/novel"));
        assert_eq!(path, PathBuf::from("/work/novel/.quire/layout.json"));
    }
}
