//! Re-export error types from the shared kernel crate.

pub use chandas_shared_kernel::{
    ApplicationError, ApplicationResult, ChandasError, DomainError, DomainResult, ErrorContext,
    InfraResult, InfrastructureError, PresentationError, PresentationResult, Result,
};
