use super::DataStore;
use crate::error::{AppError, Result};
use crate::model::AddressBook;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

pub const BOOK_FILENAME: &str = "addressbook.json";

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn book_path(&self) -> PathBuf {
        self.root.join(BOOK_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(AppError::Io)?;
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<AddressBook> {
        let path = self.book_path();
        if !path.exists() {
            debug!(path = %path.display(), "no address book on disk, starting empty");
            return Ok(AddressBook::new());
        }
        let content = fs::read_to_string(&path).map_err(AppError::Io)?;
        let book: AddressBook = serde_json::from_str(&content).map_err(AppError::Serialization)?;
        debug!(
            persons = book.persons().len(),
            lessons = book.lessons().len(),
            "loaded address book"
        );
        Ok(book)
    }

    fn save(&mut self, book: &AddressBook) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(book).map_err(AppError::Serialization)?;
        fs::write(self.book_path(), content).map_err(AppError::Io)?;
        debug!(path = %self.book_path().display(), "saved address book");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::book::fixtures::typical_book;

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_creates_dir_and_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("nested"));
        let book = typical_book();
        store.save(&book).unwrap();

        assert!(store.book_path().exists());
        assert_eq!(store.load().unwrap(), book);
    }

    #[test]
    fn corrupt_file_is_a_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(BOOK_FILENAME), "{ not json").unwrap();
        let store = FileStore::new(dir.path());
        assert!(matches!(store.load(), Err(AppError::Serialization(_))));
    }
}
