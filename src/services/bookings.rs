use futures::TryStreamExt;
use mongodb::bson::doc;
use std::collections::BTreeMap;
use tracing::debug;

use crate::database::Database;
use crate::error::{ServiceError, ServiceResult};
use crate::models::SeatStatus;

// GET /api/seats
pub async fn list_seats(db: &Database) -> ServiceResult<BTreeMap<String, SeatStatus>> {
    let mut cursor = db.seats().find(doc! {}).await?;

    let mut seats = BTreeMap::new();
    while let Some(seat) = cursor.try_next().await? {
        let (id, status) = seat.into_entry();
        seats.insert(id, status);
    }

    Ok(seats)
}

// PATCH /api/seats/book
pub async fn book_seat(db: &Database, seat_id: &str) -> ServiceResult<()> {
    set_booked(db, seat_id, true).await
}

// PATCH /api/seats/release
pub async fn release_seat(db: &Database, seat_id: &str) -> ServiceResult<()> {
    set_booked(db, seat_id, false).await
}

async fn set_booked(db: &Database, seat_id: &str, booked: bool) -> ServiceResult<()> {
    validate_seat_id(seat_id)?;

    let result = db
        .seats()
        .update_one(doc! { "_id": seat_id }, doc! { "$set": { "isBooked": booked } })
        .await?;

    debug!(
        seat_id,
        booked,
        matched = result.matched_count,
        modified = result.modified_count,
        "seat update applied"
    );

    verify_single_write("seat", seat_id, result.matched_count, result.modified_count)
}

// Rejected before any data-store round-trip
fn validate_seat_id(seat_id: &str) -> ServiceResult<()> {
    if seat_id.is_empty() {
        return Err(ServiceError::InvalidRequest(
            "seatID must not be empty".to_string(),
        ));
    }
    Ok(())
}

// The one-matched/one-modified contract. A redundant $set leaves modified at 0,
// which is how the loser of a booking race (or a double release) surfaces.
pub(crate) fn verify_single_write(
    entity: &'static str,
    id: &str,
    matched: u64,
    modified: u64,
) -> ServiceResult<()> {
    if matched == 1 && modified == 1 {
        return Ok(());
    }
    Err(ServiceError::WriteConflict {
        entity,
        id: id.to_string(),
        matched,
        modified,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_write_passes_the_contract() {
        assert!(verify_single_write("seat", "S1", 1, 1).is_ok());
    }

    #[test]
    fn missing_seat_is_a_conflict() {
        let err = verify_single_write("seat", "S404", 0, 0).unwrap_err();
        match err {
            ServiceError::WriteConflict {
                entity,
                id,
                matched,
                modified,
            } => {
                assert_eq!(entity, "seat");
                assert_eq!(id, "S404");
                assert_eq!(matched, 0);
                assert_eq!(modified, 0);
            }
            other => panic!("expected WriteConflict, got {:?}", other),
        }
    }

    #[test]
    fn redundant_booking_is_a_conflict() {
        // Matched but not modified: the seat was already in the requested state,
        // i.e. the losing side of a concurrent double-book.
        let err = verify_single_write("seat", "S1", 1, 0).unwrap_err();
        assert!(matches!(
            err,
            ServiceError::WriteConflict {
                matched: 1,
                modified: 0,
                ..
            }
        ));
    }

    #[test]
    fn empty_seat_id_fails_before_any_store_call() {
        let err = validate_seat_id("").unwrap_err();
        assert!(matches!(err, ServiceError::InvalidRequest(_)));
        assert!(validate_seat_id("S1").is_ok());
    }
}
