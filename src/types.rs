use std::collections::HashMap;
use serde_json::Value;

/// Unique identifier for catalog products.
pub type ProductId = u32;

/// Unique identifier for user records.
pub type UserId = u32;

/// Generic metadata container
pub type Metadata = HashMap<String, Value>;
