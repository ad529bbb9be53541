//! Command-line and environment configuration for the server binary.

use clap::Parser;
use std::net::SocketAddr;

/// In-memory Employee & Company resource server.
#[derive(Debug, Clone, Parser)]
#[command(name = "workforce", version, about)]
pub struct ServerConfig {
    /// Address the HTTP server listens on.
    #[arg(long, env = "WORKFORCE_BIND", default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// Mailbox capacity of each resource actor.
    #[arg(
        long,
        env = "WORKFORCE_BUFFER_SIZE",
        default_value_t = 32,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub buffer_size: u32,
}

impl ServerConfig {
    pub fn buffer_size(&self) -> usize {
        self.buffer_size as usize
    }
}
