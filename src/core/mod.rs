pub mod ids;
pub mod store;

pub use crate::domain::model::WorkOrder;
pub use crate::utils::error::Result;
