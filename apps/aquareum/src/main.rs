use std::env;
use std::ffi::OsString;
use std::process;

use aquareum::ffi::AquareumNode;
use aquareum_dispatch::Dispatcher;

#[cfg(feature = "embedded-mist")]
use aquareum::ffi::EmbeddedMistServer;
#[cfg(not(feature = "embedded-mist"))]
use aquareum_dispatch::MediaServerAbsent;

fn main() {
    aquareum::logging::init();
    let args: Vec<OsString> = env::args_os().collect();
    let mut dispatcher = dispatcher();
    match aquareum::run(&mut dispatcher, &args) {
        Ok(code) => process::exit(code),
        Err(error) => {
            tracing::error!(%error, "exited uncleanly");
            process::exit(1);
        }
    }
}

#[cfg(feature = "embedded-mist")]
fn dispatcher() -> Dispatcher<AquareumNode, EmbeddedMistServer> {
    Dispatcher::with_media_server(AquareumNode, EmbeddedMistServer)
}

#[cfg(not(feature = "embedded-mist"))]
fn dispatcher() -> Dispatcher<AquareumNode, MediaServerAbsent> {
    Dispatcher::node_only(AquareumNode)
}
