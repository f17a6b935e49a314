//! Document Stream
//!
//! The seam between the pipeline and the streaming HTML serializer. The
//! serializer walks the component tree honoring the conventions the
//! rendering context establishes (run-once document/head flags, rendered
//! markers, hydration script); its internals live outside this crate.
//!
//! The pipeline only sees an ordered stream of markup chunks, pipes them
//! into the response sink, and shuts the sink down when the stream is
//! exhausted. Sink shutdown is the "finish" signal that completes a
//! render.

use futures_util::stream::BoxStream;
use futures_util::StreamExt;

use crate::runtime::ResponseSink;

use super::context::RenderingContext;
use super::error::RenderError;

/// An ordered stream of serialized markup chunks.
pub type DocumentStream = BoxStream<'static, Result<String, RenderError>>;

/// One in-flight document serialization.
pub trait ComponentStream: Send {
    /// Start producing the serialized document.
    fn render_document(self: Box<Self>) -> DocumentStream;
}

/// Creates a [`ComponentStream`] per render from its rendering context.
pub trait ComponentStreamFactory: Send + Sync {
    /// Build the stream that will serialize this render.
    fn create(&self, context: RenderingContext) -> Box<dyn ComponentStream>;
}

/// Drive a document stream into the response sink.
///
/// Chunks are written in order; after the last one the sink is shut down,
/// signalling completion to the transport. The first chunk or sink
/// failure aborts the pipe.
pub async fn pipe_into_sink(
    stream: Box<dyn ComponentStream>,
    sink: &ResponseSink,
) -> Result<(), RenderError> {
    let mut chunks = stream.render_document();

    while let Some(chunk) = chunks.next().await {
        let chunk = chunk?;
        sink.write_all(chunk.as_bytes()).await?;
    }

    sink.shutdown().await?;
    Ok(())
}
