//! Adapters binding the runtime traits to the externally linked entry points.
//!
//! Release packaging supplies the node archive and, on media-capable
//! targets, the MistServer archive as prebuilt libraries; the
//! `external-runtimes` and `embedded-mist` features declare which of them
//! this build links.

#[cfg(feature = "embedded-mist")]
use std::ffi::{c_char, c_int, OsString};

use aquareum_dispatch::NodeRuntime;
#[cfg(feature = "embedded-mist")]
use aquareum_dispatch::{CArgv, MediaServerRuntime};

#[allow(non_snake_case)]
extern "C" {
    fn AquareumMain();

    #[cfg(feature = "embedded-mist")]
    fn MistServerMain(argc: c_int, argv: *mut *mut c_char) -> c_int;
}

/// The linked Aquareum node entry point.
pub struct AquareumNode;

impl NodeRuntime for AquareumNode {
    fn run(&mut self) {
        // SAFETY: `AquareumMain` takes no arguments, returns nothing, and is
        // provided by the node archive this build links via
        // `external-runtimes`.
        unsafe { AquareumMain() }
    }
}

/// The linked MistServer entry point.
#[cfg(feature = "embedded-mist")]
pub struct EmbeddedMistServer;

#[cfg(feature = "embedded-mist")]
impl MediaServerRuntime for EmbeddedMistServer {
    fn run(&mut self, args: &[OsString]) -> i32 {
        let mut argv = match CArgv::new(args) {
            Ok(argv) => argv,
            Err(error) => {
                tracing::error!(%error, "cannot marshal argument vector for MistServer");
                return 1;
            }
        };
        // SAFETY: `argv` owns nul-terminated copies of every token plus the
        // terminating null entry, and stays alive across the call.
        unsafe { MistServerMain(argv.argc(), argv.argv()) }
    }
}
