//! HTTP API for the payroll engine.
//!
//! Exposes the weekly payroll pipeline as `POST /payroll`, taking an
//! employee profile and raw attendance rows and returning the computation
//! as JSON.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::PayrollRequest;
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
