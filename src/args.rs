// src/args.rs
use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, ValueHint};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "poem_site",
    version = crate::VERSION,
    about = "Serve a directory of poems: navigation tree, recency lists, random pick"
)]
pub struct Args {
    /// Content root holding the poem files.
    #[arg(long, default_value = "content", value_hint = ValueHint::DirPath)]
    pub root: PathBuf,

    /// Address the HTTP server binds on.
    #[arg(long, default_value = "127.0.0.1:4000")]
    pub bind: SocketAddr,

    /// File extension (without dot) identifying documents under the root.
    #[arg(long, default_value = "mdx")]
    pub extension: String,
}
