/// Error types for spreadsheet package operations.
use thiserror::Error;

/// Result type for spreadsheet package operations.
pub type Result<T> = std::result::Result<T, OoxmlError>;

/// Error types for spreadsheet package operations.
#[derive(Error, Debug)]
pub enum OoxmlError {
    /// OPC package error
    #[error("OPC error: {0}")]
    Opc(#[from] crate::ooxml::opc::error::OpcError),

    /// A required configuration was not supplied
    #[error("parameter is invalid")]
    ParameterInvalid,

    /// Chart type is not present in the supported chart type table
    #[error("unsupported chart type {0}")]
    UnsupportedChartType(String),

    /// Sheet lookup failed
    #[error("sheet {0} does not exist")]
    SheetNotExist(String),

    /// A sheet with the same name is already registered
    #[error("the same name sheet already exists: {0}")]
    SheetExists(String),

    /// Sheet name is empty, too long or contains a reserved character
    #[error("invalid sheet name: {0}")]
    InvalidSheetName(String),

    /// Cell reference could not be converted to coordinates
    #[error("cannot convert cell {0:?} to coordinates: invalid cell name")]
    InvalidCellReference(String),

    /// Data validation formula exceeds 255 characters plus surrounding quotes
    #[error("data validation must be 0-255 characters")]
    DataValidationFormulaLength,

    /// Unknown data validation error style keyword
    #[error("invalid data validation error style: {0}")]
    InvalidErrorStyle(String),

    /// Picture extension is not one of the supported image formats
    #[error("unsupported picture format: {0}")]
    UnsupportedPictureFormat(String),

    /// Chart configuration document could not be parsed
    #[error("invalid chart configuration: {0}")]
    Config(String),

    /// XML serialization error
    #[error("XML error: {0}")]
    Xml(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
