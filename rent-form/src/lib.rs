pub mod models;
pub mod submit;
pub mod utils;

pub use models::{FinancingFormError, FinancingFormModel};
pub use submit::{SubmitError, submit};
