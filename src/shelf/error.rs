use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShelfError {
    #[error("Book not found: #{0}")]
    BookNotFound(u32),

    #[error("Customer not found: #{0}")]
    CustomerNotFound(u32),

    #[error("Transaction not found: #{0}")]
    TransactionNotFound(u32),

    #[error("Book #{0} is not available")]
    BookUnavailable(u32),

    #[error("Book already returned (transaction #{0})")]
    AlreadyReturned(u32),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("API error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, ShelfError>;
