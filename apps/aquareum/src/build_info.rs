//! Build metadata stamped into the binary.
//!
//! Release builds export `AQUAREUM_BUILD_TIME` (unix seconds) and
//! `AQUAREUM_BUILD_ID` while compiling; development builds carry the cargo
//! package version alone.

use anyhow::{Context, Result};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const BUILD_TIME: Option<&str> = option_env!("AQUAREUM_BUILD_TIME");
const BUILD_ID: Option<&str> = option_env!("AQUAREUM_BUILD_ID");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    pub version: &'static str,
    pub build_time: Option<i64>,
    pub build_id: Option<&'static str>,
}

impl BuildInfo {
    /// Resolves the metadata stamped into this binary.
    pub fn from_build_env() -> Result<Self> {
        Self::parse(VERSION, BUILD_TIME, BUILD_ID)
    }

    fn parse(
        version: &'static str,
        build_time: Option<&str>,
        build_id: Option<&'static str>,
    ) -> Result<Self> {
        let build_time = match build_time {
            Some(raw) => Some(
                raw.parse::<i64>()
                    .with_context(|| format!("invalid build time `{raw}`"))?,
            ),
            None => None,
        };
        Ok(Self {
            version,
            build_time,
            build_id,
        })
    }

    /// Build timestamp rendered as RFC 3339, when one was stamped in.
    pub fn build_time_rfc3339(&self) -> Option<String> {
        let seconds = self.build_time?;
        let stamp = OffsetDateTime::from_unix_timestamp(seconds).ok()?;
        stamp.format(&Rfc3339).ok()
    }
}
