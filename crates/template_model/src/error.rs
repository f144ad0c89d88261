//! Error types for template model operations

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template '{0}' has no style; populate the template before cloning")]
    MissingStyle(String),

    #[error("Template '{0}' has no approval workflow; populate the template before cloning")]
    MissingWorkflow(String),
}

pub type Result<T> = std::result::Result<T, TemplateError>;
