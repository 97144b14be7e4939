//! Data Transfer Objects
//!
//! Request and response bodies of the update channel.

use serde::{Deserialize, Serialize};

/// Current values of both dropdowns
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpdateRequest {
    /// X-axis column name
    pub x: String,
    /// Y-axis column name
    pub y: String,
}

/// Replacement document for the plot frame
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpdateResponse {
    /// X-axis column the document was built for
    pub x: String,
    /// Y-axis column the document was built for
    pub y: String,
    /// Full HTML document for the iframe `srcdoc`
    pub srcdoc: String,
}
