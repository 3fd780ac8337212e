use super::BookStore;
use crate::book::AddressBook;
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

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

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    fn parent_dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }
}

impl BookStore for FileStore {
    fn load(&self) -> Result<AddressBook> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "store file missing, starting empty");
            return Ok(AddressBook::new());
        }
        let content = fs::read_to_string(&self.path)?;
        let book = AddressBook::from_json(&content)?;
        debug!(path = %self.path.display(), records = book.len(), "store loaded");
        Ok(book)
    }

    fn save(&mut self, book: &AddressBook) -> Result<()> {
        let dir = self.parent_dir();
        self.ensure_dir(&dir)?;

        let content = book.to_json()?;

        let tmp_file = dir.join(format!(".addr_book-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, content)?;
        if let Err(e) = fs::rename(&tmp_file, &self.path) {
            let _ = fs::remove_file(&tmp_file);
            return Err(e.into());
        }

        debug!(path = %self.path.display(), records = book.len(), "store saved");
        Ok(())
    }

    fn describe(&self) -> String {
        self.path().display().to_string()
    }
}
