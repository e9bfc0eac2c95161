mod financing_form;

pub use financing_form::{FinancingFormError, FinancingFormModel};
