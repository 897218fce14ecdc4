use mongodb::bson::{doc, oid::ObjectId, Document};

use crate::database::Database;
use crate::error::{ServiceError, ServiceResult};
use crate::models::User;
use crate::services::bookings::verify_single_write;

// POST /api/users
pub async fn create_user(
    db: &Database,
    full_name: &str,
    email: &str,
    seat_id: Option<&str>,
) -> ServiceResult<ObjectId> {
    if full_name.is_empty() {
        return Err(ServiceError::InvalidRequest(
            "fullName must not be empty".to_string(),
        ));
    }
    if email.is_empty() {
        return Err(ServiceError::InvalidRequest(
            "email must not be empty".to_string(),
        ));
    }

    let user = User::new(full_name, email, seat_id);
    db.users().insert_one(&user).await?;

    Ok(user.id)
}

// Which identifying field drives an update, and its replacement value.
// When both email and fullName are present, email wins.
#[derive(Debug, Clone, PartialEq)]
pub enum UserUpdate {
    Email { current: String, new_email: String },
    FullName { current: String, new_full_name: String },
}

impl UserUpdate {
    pub fn from_parts(
        full_name: Option<String>,
        email: Option<String>,
        new_full_name: Option<String>,
        new_email: Option<String>,
    ) -> ServiceResult<Self> {
        if let Some(current) = email.filter(|e| !e.is_empty()) {
            let new_email = new_email
                .filter(|e| !e.is_empty())
                .ok_or_else(|| ServiceError::InvalidRequest("newEmail is required".to_string()))?;
            return Ok(UserUpdate::Email { current, new_email });
        }

        let current = full_name.filter(|n| !n.is_empty()).ok_or_else(|| {
            ServiceError::InvalidRequest("either email or fullName is required".to_string())
        })?;
        let new_full_name = new_full_name.filter(|n| !n.is_empty()).ok_or_else(|| {
            ServiceError::InvalidRequest("newFullName is required".to_string())
        })?;
        Ok(UserUpdate::FullName {
            current,
            new_full_name,
        })
    }

    pub fn filter(&self) -> Document {
        match self {
            UserUpdate::Email { current, .. } => doc! { "email": current },
            UserUpdate::FullName { current, .. } => doc! { "fullName": current },
        }
    }

    // The fields applied under $set, also echoed back in the response
    pub fn changes(&self) -> Document {
        match self {
            UserUpdate::Email { new_email, .. } => doc! { "email": new_email },
            UserUpdate::FullName { new_full_name, .. } => doc! { "fullName": new_full_name },
        }
    }

    fn key(&self) -> &str {
        match self {
            UserUpdate::Email { current, .. } => current,
            UserUpdate::FullName { current, .. } => current,
        }
    }
}

// PATCH /api/users
// User updates honor the same one-matched/one-modified contract as seats.
pub async fn update_user(db: &Database, update: &UserUpdate) -> ServiceResult<()> {
    let result = db
        .users()
        .update_one(update.filter(), doc! { "$set": update.changes() })
        .await?;

    verify_single_write(
        "user",
        update.key(),
        result.matched_count,
        result.modified_count,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_takes_precedence_over_full_name() {
        let update = UserUpdate::from_parts(
            Some("Ann".to_string()),
            Some("a@x.com".to_string()),
            Some("Annette".to_string()),
            Some("ann@x.com".to_string()),
        )
        .unwrap();

        assert_eq!(
            update,
            UserUpdate::Email {
                current: "a@x.com".to_string(),
                new_email: "ann@x.com".to_string(),
            }
        );
        assert_eq!(update.filter(), doc! { "email": "a@x.com" });
        assert_eq!(update.changes(), doc! { "email": "ann@x.com" });
    }

    #[test]
    fn falls_back_to_full_name_filter() {
        let update = UserUpdate::from_parts(
            Some("Ann".to_string()),
            None,
            Some("Annette".to_string()),
            None,
        )
        .unwrap();

        assert_eq!(update.filter(), doc! { "fullName": "Ann" });
        assert_eq!(update.changes(), doc! { "fullName": "Annette" });
    }

    #[test]
    fn missing_replacement_value_is_rejected() {
        let err = UserUpdate::from_parts(None, Some("a@x.com".to_string()), None, None)
            .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidRequest(_)));

        let err = UserUpdate::from_parts(Some("Ann".to_string()), None, None, None).unwrap_err();
        assert!(matches!(err, ServiceError::InvalidRequest(_)));
    }

    #[test]
    fn missing_identifiers_are_rejected() {
        let err = UserUpdate::from_parts(None, None, Some("X".to_string()), None).unwrap_err();
        assert!(matches!(err, ServiceError::InvalidRequest(_)));
    }
}
