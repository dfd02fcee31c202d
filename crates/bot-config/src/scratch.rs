use std::path::{Path, PathBuf};

use eyre::WrapErr;
use string_helpers::make_folder_name_safe;
use tempfile::TempDir;
use tracing::debug;

const SCRATCH_PREFIX: &str = "ps4-save-bot-";

/// Working directory for save files while they move between the console and
/// Drive. Created once at startup; removed with everything in it on drop.
#[derive(Debug)]
pub struct ScratchDir {
    dir: TempDir,
}

impl ScratchDir {
    /// Creates the directory under the system temp dir.
    pub fn init() -> eyre::Result<Self> {
        Self::init_in(std::env::temp_dir())
    }

    pub fn init_in(parent: impl AsRef<Path>) -> eyre::Result<Self> {
        let parent = parent.as_ref();
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("create scratch parent {}", parent.display()))?;
        let dir = tempfile::Builder::new()
            .prefix(SCRATCH_PREFIX)
            .tempdir_in(parent)
            .wrap_err_with(|| format!("create scratch dir in {}", parent.display()))?;

        debug!(path = %dir.path().display(), "scratch dir ready");
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates (if needed) a child directory whose name is `name` made filesystem safe.
    pub fn subdir(&self, name: &str) -> eyre::Result<PathBuf> {
        let path = self.path().join(make_folder_name_safe(name));
        std::fs::create_dir_all(&path)
            .wrap_err_with(|| format!("create scratch subdir {}", path.display()))?;
        Ok(path)
    }
}
