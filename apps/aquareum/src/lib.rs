//! Aquareum process entry.
//!
//! The production binary links the node runtime and, on media-capable
//! builds, the embedded MistServer. This library holds the part of the entry
//! flow that runs the same with the real runtimes or with substitutes: build
//! metadata, logging setup, and the banner-then-dispatch sequence.

use std::env::consts::{ARCH, OS};
use std::ffi::OsString;

use anyhow::Result;
use aquareum_dispatch::{Dispatcher, MediaServerRuntime, NodeRuntime};

pub mod build_info;
#[cfg(feature = "external-runtimes")]
pub mod ffi;
pub mod logging;

use build_info::BuildInfo;

/// Logs the startup banner and performs the one-shot dispatch, returning the
/// process exit code.
pub fn run<N, M>(dispatcher: &mut Dispatcher<N, M>, args: &[OsString]) -> Result<i32>
where
    N: NodeRuntime,
    M: MediaServerRuntime,
{
    let build = BuildInfo::from_build_env()?;
    tracing::info!(
        version = build.version,
        build_time = build.build_time_rfc3339().as_deref(),
        build_id = build.build_id,
        os = OS,
        arch = ARCH,
        "aquareum"
    );
    Ok(dispatcher.dispatch(args))
}
