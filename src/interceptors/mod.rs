pub mod response;
pub mod error;

pub use response::{ApiSuccess, ApiError};
pub use error::{AppError, AppResult, ErrorCode};
