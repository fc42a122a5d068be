// Typed failures raised by the catalog store and the derivation services
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("system not found: {0}")]
    SystemNotFound(String),

    #[error("asset {asset} has no \"{stream}\" data stream")]
    MissingStream { asset: String, stream: String },

    #[error("system {system} references unknown environment {environment}")]
    UnknownEnvironment { system: String, environment: String },

    #[error("system id {0} appears more than once in the hierarchy")]
    DuplicateSystemId(String),

    #[error("data stream \"{stream}\" on asset {asset} is not in ascending timestamp order")]
    UnsortedStream { asset: String, stream: String },

    #[error("the shared timeframe is not in ascending timestamp order")]
    UnsortedTimeframe,

    #[error("data stream \"{stream}\" on asset {asset} has a timestamp outside the shared timeframe")]
    TimestampOutOfRange { asset: String, stream: String },
}
