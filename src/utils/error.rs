use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Google authentication failed: {0}")]
    AuthError(#[from] yup_oauth2::Error),

    #[error("Sheets API error: {message}")]
    SheetsError { message: String },

    #[error("cell in row {row}, column {col} exceeds {limit} characters (length: {len})")]
    OversizedCellError {
        row: usize,
        col: usize,
        len: usize,
        limit: usize,
    },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },

    #[error("Email message error: {0}")]
    EmailError(#[from] lettre::error::Error),

    #[error("Invalid email address: {0}")]
    AddressError(#[from] lettre::address::AddressError),

    #[error("SMTP submission failed: {0}")]
    SmtpError(#[from] lettre::transport::smtp::Error),
}

pub type Result<T> = std::result::Result<T, EtlError>;
