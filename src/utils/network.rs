//! Network utilities for reelgrid
//!
//! This module provides helpers for building and describing the server address.

use crate::{
    config::INVALID_SOCKET_ADDRESS_MSG,
    error::{Error, Result},
};
use local_ip_address::local_ip;
use log::debug;
use std::net::SocketAddr;

/// Parses a `host:port` pair into a socket address
pub fn parse_socket_addr(host: &str, port: u16) -> Result<SocketAddr> {
    let address = format!("{host}:{port}");
    address
        .parse()
        .map_err(|e| Error::NetworkAddressParseError {
            address: address.clone(),
            reason: format!("{INVALID_SOCKET_ADDRESS_MSG}: {e}"),
        })
}

/// Identifies the local network IP address.
pub fn get_local_ip() -> Result<String> {
    debug!("Identifying local IP address of host");
    Ok(local_ip()
        .map_err(|err| Error::LocalAddressResolutionFailed {
            source: err,
            context: "Failed to determine local IP address for the server".to_string(),
        })?
        .to_string())
}
