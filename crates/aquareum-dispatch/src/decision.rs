//! The routing decision derived from the invocation arguments.

use std::ffi::OsStr;

/// Selector prefix that hands the process to the embedded media server.
pub const MIST_PREFIX: &[u8] = b"Mist";

/// One-shot choice of which runtime owns the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Run the default node runtime.
    RunNode,
    /// Hand the full argument vector to the embedded media server.
    RunMediaServer,
}

/// Returns true when the selector token names a MistServer entry point.
///
/// The comparison covers exactly the first four platform-encoded bytes of
/// the token: `Mist`, `MistServer` and `Mistxyz123` match, `mist` and `Mis`
/// do not. Tokens shorter than the prefix never match.
pub fn selects_media_server(selector: &OsStr) -> bool {
    selector.as_encoded_bytes().starts_with(MIST_PREFIX)
}

/// Derives the routing decision from the full argument vector.
///
/// Token 0 is the program name and never acts as a selector; with no further
/// tokens the node runtime runs.
pub fn decide<S: AsRef<OsStr>>(args: &[S]) -> Decision {
    match args.get(1) {
        Some(selector) if selects_media_server(selector.as_ref()) => Decision::RunMediaServer,
        _ => Decision::RunNode,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_selector_runs_node() {
        assert_eq!(decide::<&str>(&[]), Decision::RunNode);
        assert_eq!(decide(&["aquareum"]), Decision::RunNode);
    }

    #[test]
    fn mist_prefix_selects_media_server() {
        assert_eq!(decide(&["aquareum", "Mist"]), Decision::RunMediaServer);
        assert_eq!(decide(&["aquareum", "MistServer"]), Decision::RunMediaServer);
        assert_eq!(decide(&["aquareum", "Mistxyz123"]), Decision::RunMediaServer);
    }

    #[test]
    fn prefix_is_case_and_position_sensitive() {
        assert_eq!(decide(&["aquareum", "mist"]), Decision::RunNode);
        assert_eq!(decide(&["aquareum", "mistserver"]), Decision::RunNode);
        assert_eq!(decide(&["aquareum", "Mis"]), Decision::RunNode);
        assert_eq!(decide(&["aquareum", "Foo"]), Decision::RunNode);
        assert_eq!(decide(&["aquareum", ""]), Decision::RunNode);
        assert_eq!(decide(&["aquareum", " Mist"]), Decision::RunNode);
    }

    #[test]
    fn program_name_is_not_a_selector() {
        assert_eq!(decide(&["MistServer"]), Decision::RunNode);
    }

    #[test]
    fn extra_tokens_do_not_affect_the_decision() {
        assert_eq!(
            decide(&["aquareum", "MistServer", "-c", "/tmp/mistconfig.json"]),
            Decision::RunMediaServer
        );
        assert_eq!(
            decide(&["aquareum", "stream", "MistServer"]),
            Decision::RunNode
        );
    }

    #[test]
    fn decision_is_stable_across_calls() {
        let args = ["aquareum", "MistServer", "--port=8080"];
        assert_eq!(decide(&args), decide(&args));
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_selector_bytes_participate() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        let selector = OsString::from_vec(b"Mist\xff\xfe".to_vec());
        let args = [OsString::from("aquareum"), selector];
        assert_eq!(decide(&args), Decision::RunMediaServer);

        let mismatch = OsString::from_vec(b"\xffMist".to_vec());
        let args = [OsString::from("aquareum"), mismatch];
        assert_eq!(decide(&args), Decision::RunNode);
    }
}
