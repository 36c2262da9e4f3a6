//! Shared error mapping for the persistence layer

use application::error::ApplicationError;

use super::DatabaseError;

/// Map a database error to an application-layer error
pub fn map_database_error(e: DatabaseError) -> ApplicationError {
    match e {
        DatabaseError::NotFound(path) => {
            ApplicationError::Configuration(format!("Dataset not found: {path}"))
        },
        other => ApplicationError::Storage(other.to_string()),
    }
}
