use thiserror::Error;

/// Startup failures; none of these are retried. The library error is
/// exposed as the source, so the messages leave it out.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Error creating event loop")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("Error creating window")]
    Window(#[from] winit::error::OsError),

    #[error("Error creating surface")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("No compatible graphics adapter found")]
    NoAdapter,

    #[error("Error creating renderer device")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("Surface reports no supported formats")]
    NoSurfaceFormat,
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use winit::error::EventLoopError;

    use super::*;

    #[test]
    fn test_library_error_is_source_not_message() {
        let err = ClientError::from(EventLoopError::RecreationAttempt);

        assert_eq!(err.to_string(), "Error creating event loop");
        let source = err.source().expect("Event loop error is kept as source");
        assert_eq!(source.to_string(), EventLoopError::RecreationAttempt.to_string());
    }

    #[test]
    fn test_error_chain_prints_library_message_once() {
        let library = EventLoopError::RecreationAttempt.to_string();
        let err = anyhow::Error::new(ClientError::from(EventLoopError::RecreationAttempt))
            .context("Failed to initialize video");

        let chain = format!("{:#}", err);

        assert_eq!(
            chain,
            format!("Failed to initialize video: Error creating event loop: {}", library)
        );
        assert_eq!(chain.matches(&library).count(), 1);
    }

    #[test]
    fn test_plain_variants_have_no_source() {
        assert!(ClientError::NoAdapter.source().is_none());
        assert!(ClientError::NoSurfaceFormat.source().is_none());
    }
}
