use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CoreError {
    #[error("Stored price {0} is negative")]
    NegativePrice(i32),
}
