//! Domain values exposed by the news search service layer.

pub mod article;
pub mod search;
pub mod types;
