//! Fixed listening address

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const BIND_PORT: u16 = 8080;

/// All interfaces on [`BIND_PORT`]. Nothing here is configurable.
pub const LISTEN_ADDR: SocketAddr =
    SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), BIND_PORT);
