pub mod extract;
pub mod validation;

pub use extract::{UserId, ValidatedJson};
pub use validation::{parse_date_of_birth, validate_request, INVALID_DATE_OF_BIRTH};
