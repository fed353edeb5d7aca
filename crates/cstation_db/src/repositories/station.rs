//! Repository for charging stations
//!
//! Station ids come from the charger lookup. Saving an id that already
//! exists is a no-op that hands back the stored row.

use crate::error::DbError;
use cstation_common::models::Station;

/// Result of [`StationRepository::save`].
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    /// The station was inserted.
    Created(Station),
    /// A station with this id already existed and was left untouched.
    Existing(Station),
}

impl SaveOutcome {
    pub fn is_created(&self) -> bool {
        matches!(self, SaveOutcome::Created(_))
    }

    pub fn station(&self) -> &Station {
        match self {
            SaveOutcome::Created(station) | SaveOutcome::Existing(station) => station,
        }
    }

    pub fn into_station(self) -> Station {
        match self {
            SaveOutcome::Created(station) | SaveOutcome::Existing(station) => station,
        }
    }
}

/// Repository for charging stations
pub trait StationRepository {
    /// Inserts the station unless its id is already stored.
    fn save(
        &self,
        station: Station,
    ) -> impl std::future::Future<Output = Result<SaveOutcome, DbError>> + Send;

    fn get(&self, id: i64) -> impl std::future::Future<Output = Result<Station, DbError>> + Send;

    /// Deletes a station. Favorites and reviews pointing at it are kept.
    fn remove(&self, id: i64) -> impl std::future::Future<Output = Result<(), DbError>> + Send;
}
