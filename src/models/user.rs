use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub email: String,
    #[serde(rename = "bookedSeats")]
    pub booked_seats: HashMap<String, bool>,
}

impl User {
    // The id is generated here, not by the store, so callers learn it on insert
    pub fn new(full_name: &str, email: &str, seat_id: Option<&str>) -> Self {
        let mut booked_seats = HashMap::new();
        if let Some(seat_id) = seat_id.filter(|s| !s.is_empty()) {
            booked_seats.insert(seat_id.to_string(), true);
        }

        Self {
            id: ObjectId::new(),
            full_name: full_name.to_string(),
            email: email.to_string(),
            booked_seats,
        }
    }
}
