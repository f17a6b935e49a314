//! Render pipeline failures.
//!
//! Only failures that the pipeline cannot absorb locally surface as
//! [`RenderError`]; signal and hydration failures are recovered where
//! they occur and never reach this type.

use thiserror::Error;

/// A failure the render pipeline reports through the event bus.
#[derive(Debug, Error)]
pub enum RenderError {
    /// No `document` component is registered; renders run degraded and
    /// cannot produce a complete page.
    #[error("document component is not registered")]
    MissingDocumentComponent,

    /// A collaborator the pipeline needs is missing from the locator.
    #[error("required service `{0}` is not registered")]
    MissingService(&'static str),

    /// The document stream failed while producing chunks.
    #[error("document stream failed: {0}")]
    Stream(String),

    /// Writing to or closing the response sink failed.
    #[error("response sink failed: {0}")]
    Sink(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_forms_are_stable() {
        assert_eq!(
            RenderError::MissingDocumentComponent.to_string(),
            "document component is not registered"
        );
        assert_eq!(
            RenderError::MissingService("stateFactory").to_string(),
            "required service `stateFactory` is not registered"
        );
        assert_eq!(
            RenderError::Stream("broken tree".to_string()).to_string(),
            "document stream failed: broken tree"
        );
    }
}
