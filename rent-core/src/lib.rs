pub mod calculations;
pub mod models;

pub use calculations::{
    ApprovedFinancing, FinancingDecision, FinancingPolicy, FinancingWorksheet,
    FinancingWorksheetError,
};
pub use models::*;
