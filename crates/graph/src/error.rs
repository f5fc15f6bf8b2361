use crs_catalog::CatalogError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GraphError>;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("No transformation path found from {from} to {to}")]
    NoPath { from: String, to: String },

    #[error("Invalid search configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
