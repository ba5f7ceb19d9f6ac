//! `serve` subcommand arguments and their resolved configuration.

use std::net::{IpAddr, SocketAddr};

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::ServerError;

pub(crate) const ARG_BIND: &str = "bind";
pub(crate) const ARG_PORT: &str = "port";
pub(crate) const ARG_CATALOGUE: &str = "catalogue";

/// Address the server listens on when none is configured.
pub const DEFAULT_BIND: &str = "0.0.0.0";
/// Port the server listens on when none is configured.
pub const DEFAULT_PORT: u16 = 5000;

/// CLI arguments for the `serve` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Serve the destination catalogue and swipe ledger over HTTP. \
                 Options can come from CLI flags, configuration files, or \
                 TRIPPICK_CMDS_SERVE_* environment variables.",
    about = "Run the TripPick API server"
)]
#[ortho_config(prefix = "TRIPPICK")]
pub(crate) struct ServeArgs {
    /// IP address to bind (default 0.0.0.0).
    #[arg(long = ARG_BIND, value_name = "addr")]
    #[serde(default)]
    pub(crate) bind: Option<String>,
    /// TCP port to listen on (default 5000).
    #[arg(long = ARG_PORT, value_name = "port")]
    #[serde(default)]
    pub(crate) port: Option<u16>,
    /// JSON catalogue replacing the built-in destinations.
    #[arg(long = ARG_CATALOGUE, value_name = "path")]
    #[serde(default)]
    pub(crate) catalogue: Option<Utf8PathBuf>,
}

impl ServeArgs {
    pub(crate) fn into_config(self) -> Result<ServeConfig, ServerError> {
        let merged = self.load_and_merge().map_err(ServerError::Configuration)?;
        ServeConfig::try_from(merged)
    }
}

/// Resolved `serve` configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServeConfig {
    /// Socket address to listen on.
    pub addr: SocketAddr,
    /// Catalogue file to seed from, if any.
    pub catalogue: Option<Utf8PathBuf>,
}

impl ServeConfig {
    /// Check that a configured catalogue path names an existing file.
    ///
    /// # Errors
    /// Returns [`ServerError::MissingSourceFile`],
    /// [`ServerError::SourcePathNotFile`] or
    /// [`ServerError::InspectSourcePath`] for unusable paths.
    pub fn validate_sources(&self) -> Result<(), ServerError> {
        match &self.catalogue {
            Some(path) => Self::require_existing(path, ARG_CATALOGUE),
            None => Ok(()),
        }
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), ServerError> {
        match trippick_fs::file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(ServerError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(ServerError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(ServerError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<ServeArgs> for ServeConfig {
    type Error = ServerError;

    fn try_from(args: ServeArgs) -> Result<Self, Self::Error> {
        let bind = args.bind.unwrap_or_else(|| DEFAULT_BIND.to_owned());
        let ip: IpAddr = bind
            .parse()
            .map_err(|source| ServerError::InvalidBindAddress { bind, source })?;
        Ok(Self {
            addr: SocketAddr::new(ip, args.port.unwrap_or(DEFAULT_PORT)),
            catalogue: args.catalogue,
        })
    }
}
