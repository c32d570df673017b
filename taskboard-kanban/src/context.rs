//! KanbanContext - I/O primitives for board storage
//!
//! The context provides access to storage and utilities. No business logic
//! methods, just data access primitives. Commands do all the work.

use crate::error::{KanbanError, Result};
use crate::types::{sort_columns, Board, BoardView, Column, ColumnId, Item, ItemId, LogEntry};
use fs2::FileExt;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Default name of the board directory
pub const BOARD_DIR_NAME: &str = ".taskboard";

/// Context passed to every command - provides access, not logic
pub struct KanbanContext {
    /// Path to the board directory
    root: PathBuf,
}

impl KanbanContext {
    /// Create a new context for the given board directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create a context by searching upward from `start` for a directory named `dir_name`
    pub fn find(start: impl AsRef<Path>, dir_name: &str) -> Result<Self> {
        let mut current = start.as_ref().to_path_buf();

        loop {
            let board_dir = current.join(dir_name);
            if board_dir.join("board.yaml").is_file() {
                return Ok(Self::new(board_dir));
            }

            if !current.pop() {
                return Err(KanbanError::NotInitialized {
                    path: start.as_ref().to_path_buf(),
                });
            }
        }
    }

    // =========================================================================
    // Path helpers
    // =========================================================================

    /// Get the root board directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path to board.yaml
    pub fn board_path(&self) -> PathBuf {
        self.root.join("board.yaml")
    }

    /// Path to columns directory
    pub fn columns_dir(&self) -> PathBuf {
        self.root.join("columns")
    }

    /// Path to a column's YAML file
    pub fn column_path(&self, id: &ColumnId) -> PathBuf {
        self.columns_dir().join(format!("{}.yaml", id))
    }

    /// Path to items directory
    pub fn items_dir(&self) -> PathBuf {
        self.root.join("items")
    }

    /// Path to an item's YAML file
    pub fn item_path(&self, id: &ItemId) -> PathBuf {
        self.items_dir().join(format!("{}.yaml", id))
    }

    /// Path to the activity directory
    pub fn activity_dir(&self) -> PathBuf {
        self.root.join("activity")
    }

    /// Path to the current activity log
    pub fn activity_path(&self) -> PathBuf {
        self.activity_dir().join("current.jsonl")
    }

    /// Path to the lock file
    pub fn lock_path(&self) -> PathBuf {
        self.root.join(".lock")
    }

    // =========================================================================
    // Directory initialization
    // =========================================================================

    /// Check if the board is initialized
    pub fn is_initialized(&self) -> bool {
        self.board_path().exists()
    }

    /// Check if all required directories exist
    pub fn directories_exist(&self) -> bool {
        self.root.exists()
            && self.columns_dir().exists()
            && self.items_dir().exists()
            && self.activity_dir().exists()
    }

    /// Create the directory structure for a new board.
    ///
    /// Idempotent - safe to call multiple times.
    pub async fn create_directories(&self) -> Result<()> {
        fs::create_dir_all(&self.root).await?;
        fs::create_dir_all(self.columns_dir()).await?;
        fs::create_dir_all(self.items_dir()).await?;
        fs::create_dir_all(self.activity_dir()).await?;
        Ok(())
    }

    // =========================================================================
    // Board I/O
    // =========================================================================

    /// Read the board file
    pub async fn read_board(&self) -> Result<Board> {
        let path = self.board_path();
        if !path.exists() {
            return Err(KanbanError::NotInitialized {
                path: self.root.clone(),
            });
        }
        read_yaml(&path).await
    }

    /// Write the board file (atomic write via temp file)
    pub async fn write_board(&self, board: &Board) -> Result<()> {
        write_yaml(&self.board_path(), board).await
    }

    /// Read the board with every column and its items
    pub async fn read_board_view(&self) -> Result<BoardView> {
        let board = self.read_board().await?;
        let columns = self.read_all_columns().await?;
        let items = self.read_all_items().await?;
        Ok(BoardView::assemble(&board, columns, items))
    }

    // =========================================================================
    // Column I/O
    // =========================================================================

    /// Read a column file
    pub async fn read_column(&self, id: &ColumnId) -> Result<Column> {
        let path = self.column_path(id);
        if !path.exists() {
            return Err(KanbanError::ColumnNotFound { id: id.to_string() });
        }
        read_yaml(&path).await
    }

    /// Write a column file (atomic write via temp file)
    pub async fn write_column(&self, column: &Column) -> Result<()> {
        write_yaml(&self.column_path(&column.id), column).await
    }

    /// Delete a column file
    pub async fn delete_column_file(&self, id: &ColumnId) -> Result<()> {
        let path = self.column_path(id);
        if path.exists() {
            fs::remove_file(&path).await?;
        }
        Ok(())
    }

    /// Check if a column exists
    pub fn column_exists(&self, id: &ColumnId) -> bool {
        self.column_path(id).exists()
    }

    /// Read all columns, sorted by slot
    pub async fn read_all_columns(&self) -> Result<Vec<Column>> {
        let mut columns = Vec::new();
        for id in list_ids(&self.columns_dir()).await? {
            columns.push(self.read_column(&ColumnId::from_string(id)).await?);
        }
        sort_columns(&mut columns);
        Ok(columns)
    }

    // =========================================================================
    // Item I/O
    // =========================================================================

    /// Read an item file
    pub async fn read_item(&self, id: &ItemId) -> Result<Item> {
        let path = self.item_path(id);
        if !path.exists() {
            return Err(KanbanError::ItemNotFound { id: id.to_string() });
        }
        read_yaml(&path).await
    }

    /// Write an item file (atomic write via temp file)
    pub async fn write_item(&self, item: &Item) -> Result<()> {
        write_yaml(&self.item_path(&item.id), item).await
    }

    /// Delete an item file
    pub async fn delete_item_file(&self, id: &ItemId) -> Result<()> {
        let path = self.item_path(id);
        if path.exists() {
            fs::remove_file(&path).await?;
        }
        Ok(())
    }

    /// Read all items on the board
    pub async fn read_all_items(&self) -> Result<Vec<Item>> {
        let mut items = Vec::new();
        for id in list_ids(&self.items_dir()).await? {
            items.push(self.read_item(&ItemId::from_string(id)).await?);
        }
        Ok(items)
    }

    /// Read the items owned by one column, sorted by position
    pub async fn read_items_in_column(&self, column_id: &ColumnId) -> Result<Vec<Item>> {
        let mut items: Vec<Item> = self
            .read_all_items()
            .await?
            .into_iter()
            .filter(|i| &i.column_id == column_id)
            .collect();
        items.sort_by_key(|i| i.position);
        Ok(items)
    }

    // =========================================================================
    // Activity logging
    // =========================================================================

    /// Append a log entry to the global activity log
    pub async fn append_activity(&self, entry: &LogEntry) -> Result<()> {
        let mut line = serde_json::to_string(entry)?;
        line.push('\n');

        fs::create_dir_all(self.activity_dir()).await?;
        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.activity_path())
            .await?;

        file.write_all(line.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Read activity log entries, newest first
    pub async fn read_activity(&self, limit: Option<usize>) -> Result<Vec<LogEntry>> {
        let path = self.activity_path();
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&path).await?;
        let mut entries: Vec<LogEntry> = content
            .lines()
            .filter(|line| !line.is_empty())
            .filter_map(|line| serde_json::from_str(line).ok())
            .collect();

        entries.reverse();

        if let Some(limit) = limit {
            entries.truncate(limit);
        }
        Ok(entries)
    }

    // =========================================================================
    // Locking
    // =========================================================================

    /// Try to acquire an exclusive lock (non-blocking).
    ///
    /// The board directory must already exist.
    pub async fn lock(&self) -> Result<KanbanLock> {
        if !self.root.exists() {
            return Err(KanbanError::NotInitialized {
                path: self.root.clone(),
            });
        }
        let lock_path = self.lock_path();

        let file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&lock_path)?;

        match file.try_lock_exclusive() {
            Ok(()) => Ok(KanbanLock { file }),
            Err(_) => Err(KanbanError::LockBusy),
        }
    }
}

/// RAII lock guard - releases on drop
pub struct KanbanLock {
    file: std::fs::File,
}

impl Drop for KanbanLock {
    fn drop(&mut self) {
        let _ = self.file.unlock();
    }
}

/// List record ids (file stems of `*.yaml`) in a directory
async fn list_ids(dir: &Path) -> Result<Vec<String>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut ids = Vec::new();
    let mut entries = fs::read_dir(dir).await?;

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) == Some("yaml") {
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                ids.push(stem.to_string());
            }
        }
    }

    ids.sort();
    Ok(ids)
}

async fn read_yaml<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).await?;
    Ok(serde_yaml_ng::from_str(&content)?)
}

async fn write_yaml<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let content = serde_yaml_ng::to_string(value)?;
    atomic_write(path, content.as_bytes()).await
}

/// Atomic write via temp file and rename
async fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }

    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, content).await?;
    fs::rename(&temp_path, path).await?;

    Ok(())
}
