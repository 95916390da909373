use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("{operation} is undefined on an empty store")]
    EmptyCollection { operation: &'static str },

    #[error("productive hours must be non-negative, got {value}")]
    NegativeHours { value: Decimal },

    #[error("duplicate work order id {id} while building id index")]
    DuplicateId { id: u64 },
}

pub type Result<T> = std::result::Result<T, StoreError>;
