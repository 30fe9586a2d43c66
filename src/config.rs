// src/config.rs
use std::net::SocketAddr;
use std::path::PathBuf;

use poem_site_ports::ScanPlan;

use crate::args::Args;

/// Runtime configuration resolved from CLI arguments.
#[derive(Debug, Clone)]
pub struct Config {
    pub root: PathBuf,
    pub bind: SocketAddr,
    pub extension: String,
}

impl Config {
    /// Plan for one scan of the configured corpus.
    pub fn scan_plan(&self) -> ScanPlan {
        ScanPlan::new(self.root.clone(), self.extension.clone())
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            root: args.root,
            bind: args.bind,
            extension: args.extension,
        }
    }
}
