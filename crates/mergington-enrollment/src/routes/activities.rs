use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
};
use serde::Serialize;
use tracing::{info, warn};

use super::ApiError;
use crate::store::{ActivityStore, Catalog};

/// The `email` query parameter. When the key repeats, the last value wins.
#[derive(Debug, PartialEq, Eq)]
pub struct ParticipantQuery {
    pub email: String,
}

impl TryFrom<Vec<(String, String)>> for ParticipantQuery {
    type Error = ApiError;

    fn try_from(pairs: Vec<(String, String)>) -> Result<Self, Self::Error> {
        pairs
            .into_iter()
            .rev()
            .find(|(key, _)| key == "email")
            .map(|(_, email)| ParticipantQuery { email })
            .ok_or_else(|| ApiError::Validation("Missing query parameter `email`".to_string()))
    }
}

type PathParam = Result<Path<String>, PathRejection>;
type QueryPairs = Result<Query<Vec<(String, String)>>, QueryRejection>;

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct MessageBody {
    pub message: String,
}

pub async fn list_handler(State(store): State<ActivityStore>) -> Json<Catalog> {
    Json(store.list_activities())
}

pub async fn signup_handler(
    State(store): State<ActivityStore>,
    path: PathParam,
    query: QueryPairs,
) -> Result<Json<MessageBody>, ApiError> {
    let Path(name) = path?;
    let Query(pairs) = query?;
    let query = ParticipantQuery::try_from(pairs)?;

    match store.enroll(&name, &query.email) {
        Ok(enrollment) => {
            info!("Signed up {} for {}", enrollment.participant, enrollment.activity);
            Ok(Json(MessageBody {
                message: format!(
                    "Signed up {} for {}",
                    enrollment.participant, enrollment.activity
                ),
            }))
        }
        Err(e) => {
            warn!("Rejected signup of {} for {}: {}", query.email, name, e);
            Err(e.into())
        }
    }
}

pub async fn remove_handler(
    State(store): State<ActivityStore>,
    path: PathParam,
    query: QueryPairs,
) -> Result<Json<MessageBody>, ApiError> {
    let Path(name) = path?;
    let Query(pairs) = query?;
    let query = ParticipantQuery::try_from(pairs)?;

    match store.unenroll(&name, &query.email) {
        Ok(enrollment) => {
            info!("Removed {} from {}", enrollment.participant, enrollment.activity);
            Ok(Json(MessageBody {
                message: format!(
                    "Removed {} from {}",
                    enrollment.participant, enrollment.activity
                ),
            }))
        }
        Err(e) => {
            warn!("Rejected removal of {} from {}: {}", query.email, name, e);
            Err(e.into())
        }
    }
}
