use serde::{Deserialize, Serialize};

/// One topic group as returned by the organize endpoint. Messages keep their
/// original speaker tags and order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub category: String,
    pub messages: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrganizeResult {
    pub blocks: Vec<Block>,
}
