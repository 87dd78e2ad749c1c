use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown game type: {name}")]
pub struct ParseGameTypeError {
    pub name: String,
}

/// Error body returned by the question service
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ApiError {
    UnknownCategory { name: String },
    NotFound,
}
