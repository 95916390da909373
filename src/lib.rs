pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::CliConfig, BusinessHours};
pub use core::{ids::IdGenerator, store::WorkOrderStore};
pub use domain::model::WorkOrder;
pub use utils::error::{Result, StoreError};
