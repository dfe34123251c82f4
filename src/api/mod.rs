//! HTTP API for the take-home pay engine.
//!
//! A thin axum layer over the pure calculation core: request DTOs convert
//! into [`CalculationInput`](crate::models::CalculationInput), the engine
//! runs, and the result is wrapped with request-scoped metadata.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CalculationRequest;
pub use response::{ApiError, ApiErrorResponse, CalculationResponse, JurisdictionEntry};
pub use state::AppState;
