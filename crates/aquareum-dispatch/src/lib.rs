//! Process-entry dispatch for the Aquareum binary.
//!
//! A single binary carries both the Aquareum node and, in builds that embed
//! it, the MistServer media server. The node launches the embedded server by
//! re-invoking its own executable with `MistServer` as the first argument, so
//! the entry point has to decide which runtime owns the process before
//! anything else happens: a first user-supplied token whose first four bytes
//! are `Mist` hands the entire original argument vector to the media server
//! and its result becomes the process exit status; every other invocation
//! runs the node.
//!
//! Both runtimes are injected behind traits, which keeps the routing rule
//! testable without either entry point linked in.

mod argv;
mod decision;
mod dispatch;

pub use argv::{ArgvError, CArgv};
pub use decision::{decide, selects_media_server, Decision, MIST_PREFIX};
pub use dispatch::{Dispatcher, MediaServerAbsent, MediaServerRuntime, NodeRuntime, EXIT_OK};
