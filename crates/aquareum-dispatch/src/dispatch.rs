//! Runtime collaborator traits and the dispatcher that routes between them.

use std::ffi::OsString;

use crate::decision::{decide, Decision};

/// Process exit code reported when the node runtime path completes.
pub const EXIT_OK: i32 = 0;

/// The default Aquareum application runtime.
///
/// Invoked with no arguments and consulted for no result: the node either
/// owns the process until something terminates it, or returns and lets the
/// dispatcher report [`EXIT_OK`].
pub trait NodeRuntime {
    fn run(&mut self);
}

/// The embedded media-server runtime.
///
/// Receives the full original argument vector, program name and selector
/// token included, and reports the integer that becomes the process exit
/// status.
pub trait MediaServerRuntime {
    fn run(&mut self, args: &[OsString]) -> i32;
}

impl<N: NodeRuntime + ?Sized> NodeRuntime for &mut N {
    fn run(&mut self) {
        (**self).run();
    }
}

impl<M: MediaServerRuntime + ?Sized> MediaServerRuntime for &mut M {
    fn run(&mut self, args: &[OsString]) -> i32 {
        (**self).run(args)
    }
}

/// Marker for builds that carry no embedded media server.
///
/// [`Dispatcher::node_only`] leaves the media slot empty, so this runtime is
/// never routed to; the implementation exists to satisfy the trait bound.
pub struct MediaServerAbsent;

impl MediaServerRuntime for MediaServerAbsent {
    fn run(&mut self, _args: &[OsString]) -> i32 {
        EXIT_OK
    }
}

/// Routes one process invocation to exactly one runtime.
pub struct Dispatcher<N, M> {
    node: N,
    media: Option<M>,
}

impl<N: NodeRuntime> Dispatcher<N, MediaServerAbsent> {
    /// Dispatcher for builds without the media-server capability. Every
    /// invocation runs the node runtime, selector token or not.
    pub fn node_only(node: N) -> Self {
        Self { node, media: None }
    }
}

impl<N: NodeRuntime, M: MediaServerRuntime> Dispatcher<N, M> {
    /// Dispatcher for builds that embed the media server.
    pub fn with_media_server(node: N, media: M) -> Self {
        Self {
            node,
            media: Some(media),
        }
    }

    /// Performs the one-shot dispatch and returns the process exit code.
    ///
    /// A `RunMediaServer` decision routes to the media collaborator when one
    /// is present; without one the node runtime runs, exactly as if the
    /// selector had never matched.
    pub fn dispatch(&mut self, args: &[OsString]) -> i32 {
        if decide(args) == Decision::RunMediaServer {
            if let Some(media) = self.media.as_mut() {
                tracing::info!("handing process over to embedded media server");
                return media.run(args);
            }
            tracing::debug!("media server selected but not built in");
        }
        tracing::debug!("running node runtime");
        self.node.run();
        EXIT_OK
    }
}
