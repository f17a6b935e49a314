//! Routing Context
//!
//! The request-scoped input of the render pipeline. An external router
//! builds one [`RoutingContext`] per inbound request: the matched route
//! arguments (including the optional signal to resolve before rendering)
//! and the middleware surface holding the response sink the final HTML is
//! piped into.
//!
//! The context is shared by `Arc` and read-only to the core for the
//! duration of one render.

use std::fmt;
use std::io;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::Mutex;

/// Route arguments extracted by the router.
///
/// Deserializes from a single JSON object: the `signal` key is typed, all
/// remaining keys are collected into [`RouteArgs::params`] so that one
/// args object carries both, as the router produced it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteArgs {
    /// Name of the signal to resolve before rendering, if any.
    pub signal: Option<String>,

    /// Arbitrary route parameters, forwarded to the signal untouched.
    #[serde(flatten)]
    pub params: Map<String, Value>,
}

impl RouteArgs {
    /// Build args requesting the given signal.
    pub fn with_signal(signal: impl Into<String>) -> Self {
        Self {
            signal: Some(signal.into()),
            params: Map::new(),
        }
    }

    /// Look up a route parameter by name.
    pub fn param(&self, name: &str) -> Option<&Value> {
        self.params.get(name)
    }
}

type SinkWriter = Box<dyn AsyncWrite + Send + Unpin>;

/// Shared handle over the writable response sink.
///
/// The sink is owned by the transport layer; the core only writes chunks
/// and shuts it down when the document stream is exhausted. Cloning the
/// handle shares the underlying writer.
#[derive(Clone)]
pub struct ResponseSink {
    inner: Arc<Mutex<SinkWriter>>,
}

impl ResponseSink {
    /// Wrap a writer as a response sink.
    pub fn new<W>(writer: W) -> Self
    where
        W: AsyncWrite + Send + Unpin + 'static,
    {
        Self {
            inner: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    /// Write one chunk to the sink.
    pub async fn write_all(&self, chunk: &[u8]) -> io::Result<()> {
        let mut writer = self.inner.lock().await;
        writer.write_all(chunk).await
    }

    /// Flush buffered bytes and signal completion to the transport.
    pub async fn shutdown(&self) -> io::Result<()> {
        let mut writer = self.inner.lock().await;
        writer.shutdown().await
    }
}

impl fmt::Debug for ResponseSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ResponseSink")
    }
}

/// The middleware surface exposed to the render pipeline.
#[derive(Debug)]
pub struct Middleware {
    /// The sink the rendered document is piped into.
    pub response: ResponseSink,
}

/// Request-scoped rendering input, created by the router per request.
#[derive(Debug)]
pub struct RoutingContext {
    /// Matched route arguments.
    pub args: RouteArgs,

    /// Transport surface for this request.
    pub middleware: Middleware,
}

impl RoutingContext {
    /// Build a routing context from route args and a response sink.
    pub fn new(args: RouteArgs, response: ResponseSink) -> Self {
        Self {
            args,
            middleware: Middleware { response },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn args_deserialize_signal_and_params_from_one_object() {
        let args: RouteArgs = serde_json::from_value(json!({
            "signal": "loadNews",
            "page": 3,
            "tag": "rust",
        }))
        .unwrap();

        assert_eq!(args.signal.as_deref(), Some("loadNews"));
        assert_eq!(args.param("page"), Some(&json!(3)));
        assert_eq!(args.param("tag"), Some(&json!("rust")));
    }

    #[test]
    fn args_without_signal_deserialize_to_none() {
        let args: RouteArgs = serde_json::from_value(json!({ "page": 1 })).unwrap();
        assert!(args.signal.is_none());
        assert_eq!(args.param("page"), Some(&json!(1)));
    }

    #[tokio::test]
    async fn sink_writes_and_shuts_down() {
        let sink = ResponseSink::new(Vec::new());
        sink.write_all(b"<html>").await.unwrap();
        sink.write_all(b"</html>").await.unwrap();
        sink.shutdown().await.unwrap();
    }
}
