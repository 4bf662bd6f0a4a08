//! LMDB environment setup.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use heed::{Env, EnvOpenOptions};

use crate::LmdbError;

/// Default map size: 16 MiB is far beyond what a session needs.
pub const DEFAULT_MAP_SIZE: usize = 16 * 1024 * 1024;

/// Named databases opened in the environment.
const MAX_DBS: u32 = 4;

/// Wraps the LMDB environment shared by all database handles.
pub struct LmdbEnvironment {
    env: Arc<Env>,
    path: PathBuf,
}

impl LmdbEnvironment {
    /// Open or create an LMDB environment in the directory `path`.
    pub fn open(path: &Path, map_size: usize) -> Result<Self, LmdbError> {
        std::fs::create_dir_all(path)?;
        // SAFETY: the environment is opened once per directory per process and
        // the map is never accessed outside heed's transactions.
        let env = unsafe {
            EnvOpenOptions::new()
                .map_size(map_size)
                .max_dbs(MAX_DBS)
                .open(path)?
        };
        tracing::debug!(path = %path.display(), map_size, "opened LMDB environment");
        Ok(Self {
            env: Arc::new(env),
            path: path.to_path_buf(),
        })
    }

    pub fn env(&self) -> &Arc<Env> {
        &self.env
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
