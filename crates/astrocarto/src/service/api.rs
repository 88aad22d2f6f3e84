use crate::lines::generator::generate_lines;
use crate::lines::types::{BirthData, Coordinate, PlanetaryLine};
use crate::service::store::{BirthRecord, LineStore, StoreError, StoredLine};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Errors returned to callers of the astro service
///
/// Underlying causes are logged, not returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ServiceError {
    #[error("Birth data not found: {id}")]
    NotFound { id: String },
    #[error("Failed to {operation}")]
    OperationFailed { operation: &'static str },
}

#[derive(Error, Debug)]
enum Cause {
    #[error("invalid {field} '{value}'")]
    InvalidCoordinate { field: &'static str, value: String },
    #[error(transparent)]
    Storage(#[from] StoreError),
    #[error("line data: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Input of `submit_birth_data`, already schema-validated upstream
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthSubmission {
    pub name: String,
    pub date: String,
    pub time: String,
    pub latitude: String,
    pub longitude: String,
    #[serde(default)]
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Submitted {
    pub id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineCount {
    pub line_count: usize,
}

/// A line as returned by `get_lines`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineRecord {
    pub id: String,
    #[serde(flatten)]
    pub line: PlanetaryLine,
}

/// Submit, calculate and fetch planetary lines over a [`LineStore`]
pub struct AstroService<S> {
    store: S,
}

impl<S: LineStore> AstroService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn submit_birth_data(
        &mut self,
        submission: BirthSubmission,
    ) -> Result<Submitted, ServiceError> {
        let record = BirthRecord {
            id: Uuid::new_v4().to_string(),
            name: submission.name,
            date: submission.date,
            time: submission.time,
            latitude: submission.latitude,
            longitude: submission.longitude,
            user_id: submission.user_id,
            created_at: Utc::now().to_rfc3339(),
        };
        let id = record.id.clone();
        self.store
            .insert_birth(record)
            .map_err(|e| failed("submit birth data", e.into()))?;
        log::info!("Stored birth data {}", id);
        Ok(Submitted { id })
    }

    /// Generate lines for a stored birth and replace any stored before
    pub fn calculate_and_store_lines(
        &mut self,
        birth_data_id: &str,
    ) -> Result<LineCount, ServiceError> {
        const OPERATION: &str = "calculate planetary lines";
        let record = self.find_birth(birth_data_id, OPERATION)?;
        let birth = parse_birth(&record).map_err(|e| failed(OPERATION, e))?;

        let lines = generate_lines(&birth);
        let created_at = Utc::now().to_rfc3339();
        let rows = lines
            .iter()
            .map(|line| -> Result<StoredLine, Cause> {
                Ok(StoredLine {
                    id: Uuid::new_v4().to_string(),
                    birth_data_id: birth_data_id.to_string(),
                    planet: line.planet.to_string(),
                    angle_type: line.angle_type.to_string(),
                    line_data: serde_json::to_string(&line.coordinates)?,
                    created_at: created_at.clone(),
                })
            })
            .collect::<Result<Vec<_>, Cause>>()
            .map_err(|e| failed(OPERATION, e))?;

        self.store
            .replace_lines(birth_data_id, rows)
            .map_err(|e| failed(OPERATION, e.into()))?;
        log::info!("Stored {} planetary lines for {}", lines.len(), birth_data_id);
        Ok(LineCount {
            line_count: lines.len(),
        })
    }

    pub fn get_lines(&self, birth_data_id: &str) -> Result<Vec<LineRecord>, ServiceError> {
        const OPERATION: &str = "get planetary lines";
        self.find_birth(birth_data_id, OPERATION)?;
        let rows = self
            .store
            .lines_by_birth(birth_data_id)
            .map_err(|e| failed(OPERATION, e.into()))?;

        rows.into_iter()
            .map(|row| -> Result<LineRecord, Cause> {
                let coordinates: Vec<Coordinate> = serde_json::from_str(&row.line_data)?;
                Ok(LineRecord {
                    id: row.id,
                    line: PlanetaryLine {
                        planet: row.planet.into(),
                        angle_type: row.angle_type.into(),
                        coordinates,
                    },
                })
            })
            .collect::<Result<Vec<_>, Cause>>()
            .map_err(|e| failed(OPERATION, e))
    }

    pub fn get_user_birth_data(&self, user_id: &str) -> Result<Vec<BirthRecord>, ServiceError> {
        self.store
            .births_by_user(user_id)
            .map_err(|e| failed("get user birth data", e.into()))
    }

    fn find_birth(&self, id: &str, operation: &'static str) -> Result<BirthRecord, ServiceError> {
        match self.store.birth_by_id(id) {
            Ok(Some(record)) => Ok(record),
            Ok(None) => Err(ServiceError::NotFound { id: id.to_string() }),
            Err(e) => Err(failed(operation, e.into())),
        }
    }
}

fn parse_birth(record: &BirthRecord) -> Result<BirthData, Cause> {
    let coordinate = |field: &'static str, value: &str| {
        value
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| Cause::InvalidCoordinate {
                field,
                value: value.to_string(),
            })
    };
    Ok(BirthData {
        date: record.date.clone(),
        time: record.time.clone(),
        latitude: coordinate("latitude", &record.latitude)?,
        longitude: coordinate("longitude", &record.longitude)?,
    })
}

fn failed(operation: &'static str, cause: Cause) -> ServiceError {
    log::error!("Failed to {}: {}", operation, cause);
    ServiceError::OperationFailed { operation }
}
