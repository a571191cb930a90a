//! Error types for itemdesk

use thiserror::Error;

use crate::types::ItemId;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Item not found: {0}")]
    ItemNotFound(ItemId),
}
