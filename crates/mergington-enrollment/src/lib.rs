//! Activity catalog and enrollment endpoints for Mergington High School.

pub mod routes;
pub mod seed;
pub mod store;

pub use routes::{ApiError, router};
pub use store::{Activity, ActivityStore, Catalog, Enrollment, EnrollmentError};
