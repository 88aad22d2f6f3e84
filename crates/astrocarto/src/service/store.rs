use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// A stored birth submission; coordinates stay as submitted text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthRecord {
    pub id: String,
    pub name: String,
    pub date: String,
    pub time: String,
    pub latitude: String,
    pub longitude: String,
    pub user_id: Option<String>,
    pub created_at: String,
}

/// A stored line row; `line_data` is the coordinate list as JSON text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredLine {
    pub id: String,
    pub birth_data_id: String,
    pub planet: String,
    pub angle_type: String,
    pub line_data: String,
    pub created_at: String,
}

/// Row store behind the astro service
pub trait LineStore {
    fn insert_birth(&mut self, record: BirthRecord) -> Result<(), StoreError>;

    fn birth_by_id(&self, id: &str) -> Result<Option<BirthRecord>, StoreError>;

    fn births_by_user(&self, user_id: &str) -> Result<Vec<BirthRecord>, StoreError>;

    /// Replace every line stored for `birth_data_id` with `lines`
    fn replace_lines(&mut self, birth_data_id: &str, lines: Vec<StoredLine>)
        -> Result<(), StoreError>;

    /// Lines for a birth, in insertion order
    fn lines_by_birth(&self, birth_data_id: &str) -> Result<Vec<StoredLine>, StoreError>;
}

/// Vec-backed store that keeps insertion order
#[derive(Debug, Default)]
pub struct MemoryStore {
    births: Vec<BirthRecord>,
    lines: Vec<StoredLine>,
    offline: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every call fail with [`StoreError::Unavailable`]
    pub fn set_offline(&mut self, offline: bool) {
        self.offline = offline;
    }

    /// Overwrite the stored JSON of a line row
    pub fn corrupt_line_data(&mut self, line_id: &str, line_data: &str) {
        if let Some(row) = self.lines.iter_mut().find(|row| row.id == line_id) {
            row.line_data = line_data.to_string();
        }
    }

    fn online(&self) -> Result<(), StoreError> {
        if self.offline {
            Err(StoreError::Unavailable("memory store is offline".to_string()))
        } else {
            Ok(())
        }
    }
}

impl LineStore for MemoryStore {
    fn insert_birth(&mut self, record: BirthRecord) -> Result<(), StoreError> {
        self.online()?;
        self.births.push(record);
        Ok(())
    }

    fn birth_by_id(&self, id: &str) -> Result<Option<BirthRecord>, StoreError> {
        self.online()?;
        Ok(self.births.iter().find(|b| b.id == id).cloned())
    }

    fn births_by_user(&self, user_id: &str) -> Result<Vec<BirthRecord>, StoreError> {
        self.online()?;
        Ok(self
            .births
            .iter()
            .filter(|b| b.user_id.as_deref() == Some(user_id))
            .cloned()
            .collect())
    }

    fn replace_lines(
        &mut self,
        birth_data_id: &str,
        lines: Vec<StoredLine>,
    ) -> Result<(), StoreError> {
        self.online()?;
        self.lines.retain(|row| row.birth_data_id != birth_data_id);
        self.lines.extend(lines);
        Ok(())
    }

    fn lines_by_birth(&self, birth_data_id: &str) -> Result<Vec<StoredLine>, StoreError> {
        self.online()?;
        Ok(self
            .lines
            .iter()
            .filter(|row| row.birth_data_id == birth_data_id)
            .cloned()
            .collect())
    }
}
