use crate::enums::ResourceKind;
use crate::error::CoreError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// One stored row of any resource table. The three tables share this shape;
/// only their column names differ.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: i32,
    pub name: String,
    pub price: u32,
}

impl Record {
    /// Builds a record from raw column values. Prices are stored as `INTEGER`,
    /// so a negative value can only come from a write made outside this service.
    pub fn from_stored(id: i32, name: String, price: i32) -> Result<Self, CoreError> {
        let price = u32::try_from(price).map_err(|_| CoreError::NegativePrice(price))?;
        Ok(Self { id, name, price })
    }
}

/// The fields a client supplies when adding a row. The id is always generated
/// by storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecord {
    pub name: String,
    pub price: u32,
}

/// Ties a JSON wire type to its resource kind and to the payload it accepts on
/// insert, so routes and handlers can be written once for all three.
pub trait Resource: Serialize + From<Record> + Send + 'static {
    const KIND: ResourceKind;
    type Payload: DeserializeOwned + Into<NewRecord> + Send + 'static;
}

// ==============================================================================
// Trains
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Train {
    pub train_id: i32,
    pub train_name: String,
    pub train_price: u32,
}

/// Body of `POST /trains/add`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewTrain {
    pub train_name: String,
    pub train_price: u32,
}

impl From<Record> for Train {
    fn from(record: Record) -> Self {
        Self { train_id: record.id, train_name: record.name, train_price: record.price }
    }
}

impl From<NewTrain> for NewRecord {
    fn from(new: NewTrain) -> Self {
        Self { name: new.train_name, price: new.train_price }
    }
}

impl Resource for Train {
    const KIND: ResourceKind = ResourceKind::Train;
    type Payload = NewTrain;
}

// ==============================================================================
// Planes
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plane {
    pub plane_id: i32,
    pub plane_name: String,
    pub plane_price: u32,
}

/// Body of `POST /planes/add`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewPlane {
    pub plane_name: String,
    pub plane_price: u32,
}

impl From<Record> for Plane {
    fn from(record: Record) -> Self {
        Self { plane_id: record.id, plane_name: record.name, plane_price: record.price }
    }
}

impl From<NewPlane> for NewRecord {
    fn from(new: NewPlane) -> Self {
        Self { name: new.plane_name, price: new.plane_price }
    }
}

impl Resource for Plane {
    const KIND: ResourceKind = ResourceKind::Plane;
    type Payload = NewPlane;
}

// ==============================================================================
// History
// ==============================================================================

/// An entry in the manually-kept history log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    pub history_id: i32,
    pub history_name: String,
    pub history_price: u32,
}

/// Body of `POST /history/add`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewHistory {
    pub history_name: String,
    pub history_price: u32,
}

impl From<Record> for History {
    fn from(record: Record) -> Self {
        Self { history_id: record.id, history_name: record.name, history_price: record.price }
    }
}

impl From<NewHistory> for NewRecord {
    fn from(new: NewHistory) -> Self {
        Self { name: new.history_name, price: new.history_price }
    }
}

impl Resource for History {
    const KIND: ResourceKind = ResourceKind::History;
    type Payload = NewHistory;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn negative_stored_price_is_rejected() {
        assert_eq!(
            Record::from_stored(1, "Express".into(), -5),
            Err(CoreError::NegativePrice(-5))
        );
        let record = Record::from_stored(1, "Express".into(), 50).unwrap();
        assert_eq!(record.price, 50);
    }

    #[test]
    fn train_serializes_with_prefixed_fields() {
        let train = Train::from(Record { id: 7, name: "Express".into(), price: 50 });
        assert_eq!(
            serde_json::to_value(&train).unwrap(),
            json!({ "train_id": 7, "train_name": "Express", "train_price": 50 })
        );
    }

    #[test]
    fn payload_ignores_a_client_supplied_id() {
        let new: NewPlane =
            serde_json::from_value(json!({ "plane_id": 99, "plane_name": "Jumbo", "plane_price": 300 }))
                .unwrap();
        assert_eq!(NewRecord::from(new), NewRecord { name: "Jumbo".into(), price: 300 });
    }

    #[test]
    fn payload_requires_every_field() {
        let err = serde_json::from_value::<NewHistory>(json!({ "history_name": "Trip" })).unwrap_err();
        assert!(err.to_string().contains("history_price"));
    }

    #[test]
    fn negative_price_fails_to_decode() {
        let result = serde_json::from_value::<NewTrain>(json!({ "train_name": "Local", "train_price": -1 }));
        assert!(result.is_err());
    }
}
