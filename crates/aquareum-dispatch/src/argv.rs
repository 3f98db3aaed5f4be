//! C-shaped image of the invocation arguments.
//!
//! The media-server entry point keeps the C signature
//! `int MistServerMain(int argc, char **argv)`, so the argument vector has to
//! cross the boundary as nul-terminated strings behind a null-terminated
//! pointer table, byte for byte as the process received it.

use std::ffi::{c_char, c_int, CString, OsString};
use std::ptr;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArgvError {
    /// Real process arguments cannot carry interior NUL bytes; only
    /// hand-built vectors ever hit this.
    #[error("argument {index} contains an interior NUL byte")]
    InteriorNul { index: usize },
}

/// Owned `argc`/`argv` pair mirroring the invocation arguments.
///
/// The pointer table carries one entry per token plus the terminating null a
/// hosted C `main` expects (`argv[argc] == NULL`). Strings and table stay
/// alive for as long as this value does.
pub struct CArgv {
    strings: Vec<CString>,
    pointers: Vec<*mut c_char>,
}

impl CArgv {
    /// Copies every token, in order and unmodified, into C string storage.
    pub fn new(args: &[OsString]) -> Result<Self, ArgvError> {
        let mut strings = Vec::with_capacity(args.len());
        for (index, arg) in args.iter().enumerate() {
            let string = CString::new(arg.as_encoded_bytes().to_vec())
                .map_err(|_| ArgvError::InteriorNul { index })?;
            strings.push(string);
        }
        let mut pointers: Vec<*mut c_char> = strings
            .iter()
            .map(|string| string.as_ptr() as *mut c_char)
            .collect();
        pointers.push(ptr::null_mut());
        Ok(Self { strings, pointers })
    }

    /// Token count, excluding the terminating null entry.
    pub fn argc(&self) -> c_int {
        self.strings.len() as c_int
    }

    /// Pointer table for the `argv` operand, valid while `self` is alive.
    pub fn argv(&mut self) -> *mut *mut c_char {
        self.pointers.as_mut_ptr()
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::CStr;

    use super::*;

    fn args(tokens: &[&str]) -> Vec<OsString> {
        tokens.iter().map(OsString::from).collect()
    }

    #[test]
    fn mirrors_tokens_in_order() {
        let tokens = ["aquareum", "MistServer", "--port=8080"];
        let mut argv = CArgv::new(&args(&tokens)).expect("marshal");
        assert_eq!(argv.argc(), 3);

        let table = argv.argv();
        // SAFETY: the table holds `argc` valid entries followed by a null
        // terminator, all owned by `argv`.
        unsafe {
            for (i, expected) in tokens.iter().enumerate() {
                let entry = *table.add(i);
                assert_eq!(CStr::from_ptr(entry).to_str().expect("utf8"), *expected);
            }
            assert!((*table.add(tokens.len())).is_null());
        }
    }

    #[test]
    fn empty_vector_is_just_the_terminator() {
        let mut argv = CArgv::new(&[]).expect("marshal");
        assert_eq!(argv.argc(), 0);
        // SAFETY: the table always carries the terminating null entry.
        unsafe {
            assert!((*argv.argv()).is_null());
        }
    }

    #[test]
    fn interior_nul_reports_offending_index() {
        let tokens = vec![OsString::from("aquareum"), OsString::from("Mist\0Server")];
        let error = CArgv::new(&tokens).err().expect("interior NUL must fail");
        assert!(matches!(error, ArgvError::InteriorNul { index: 1 }));
    }
}
