use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seat {
    #[serde(rename = "_id")]
    pub id: String,
    pub price: f64,
    #[serde(rename = "isBooked")]
    pub is_booked: bool,
}

// Listing view of a seat, keyed by id in the response map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeatStatus {
    pub price: f64,
    #[serde(rename = "isBooked")]
    pub is_booked: bool,
}

impl Seat {
    pub fn into_entry(self) -> (String, SeatStatus) {
        (
            self.id,
            SeatStatus {
                price: self.price,
                is_booked: self.is_booked,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{doc, from_document};

    #[test]
    fn seat_reads_wire_field_names() {
        let document = doc! { "_id": "S1", "price": 10.0, "isBooked": false };
        let seat: Seat = from_document(document).unwrap();
        assert_eq!(seat.id, "S1");
        assert_eq!(seat.price, 10.0);
        assert!(!seat.is_booked);
    }

    #[test]
    fn listing_entry_keeps_price_and_flag() {
        let seat = Seat {
            id: "S2".to_string(),
            price: 20.0,
            is_booked: true,
        };
        let (id, status) = seat.into_entry();
        assert_eq!(id, "S2");
        assert_eq!(
            status,
            SeatStatus {
                price: 20.0,
                is_booked: true
            }
        );
    }

    #[test]
    fn listing_view_serializes_is_booked_in_camel_case() {
        let status = SeatStatus {
            price: 10.0,
            is_booked: false,
        };
        let value = serde_json::to_value(&status).unwrap();
        assert_eq!(value, serde_json::json!({ "price": 10.0, "isBooked": false }));
    }
}
