// src/store.rs
//
// Local deal persistence. The whole sequence is rewritten on every change
// (last write wins); there is no merging and no versioning.

use std::{fs, path::{Path, PathBuf}};

use crate::core::deal::{self, Deal, Origin};
use crate::error::Result;

/// Narrow load/save/clear interface over the persisted local deals.
pub trait LocalStore {
    /// Every persisted deal, most recent first, stamped `Origin::Local`.
    fn load(&self) -> Vec<Deal>;

    /// Overwrite the persisted sequence.
    fn save(&mut self, deals: &[Deal]) -> Result<()>;

    /// Forget every persisted deal.
    fn clear(&mut self) -> Result<()>;

    /// Put `deal` in front of the persisted sequence and return the new sequence.
    fn prepend(&mut self, deal: Deal) -> Result<Vec<Deal>> {
        let mut all = self.load();
        all.insert(0, deal.with_origin(Origin::Local));
        self.save(&all)?;
        Ok(all)
    }
}

/// JSON array in `<store_dir>/localDeals_v1.json`.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Like `load`, but a corrupt file is an error instead of an empty list.
    pub fn try_load(&self) -> Result<Vec<Deal>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let text = fs::read_to_string(&self.path)?;
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }
        deal::parse_records(&text, Origin::Local)
    }
}

impl LocalStore for FileStore {
    fn load(&self) -> Vec<Deal> {
        match self.try_load() {
            Ok(deals) => deals,
            Err(e) => {
                loge!("Store: Unreadable {}: {}", self.path.display(), e);
                Vec::new()
            }
        }
    }

    fn save(&mut self, deals: &[Deal]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string(deals)?;
        fs::write(&self.path, json)?;
        logd!("Store: Saved {} local deal(s) → {}", deals.len(), self.path.display());
        Ok(())
    }

    /// An unreadable file fails the prepend and is left untouched.
    fn prepend(&mut self, deal: Deal) -> Result<Vec<Deal>> {
        let mut all = self.try_load()?;
        all.insert(0, deal.with_origin(Origin::Local));
        self.save(&all)?;
        Ok(all)
    }

    fn clear(&mut self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        logf!("Store: Cleared {}", self.path.display());
        Ok(())
    }
}

/// Process-lifetime store, for tests and `--ephemeral` runs.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    deals: Vec<Deal>,
}

impl LocalStore for MemoryStore {
    fn load(&self) -> Vec<Deal> {
        self.deals.iter().cloned().map(|d| d.with_origin(Origin::Local)).collect()
    }

    fn save(&mut self, deals: &[Deal]) -> Result<()> {
        self.deals = deals.to_vec();
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.deals.clear();
        Ok(())
    }
}
