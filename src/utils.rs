use std::env::var;
use std::net::SocketAddr;

use anyhow::Result;

/// Address to listen on when nothing is configured
pub const DEFAULT_ADDRESS: &str = "0.0.0.0:3001";

/// Get the value of an ENV var
///
/// Unset and empty variables are both `None`
pub fn env_var(var_name: &str) -> Option<String> {
    var(var_name).ok().filter(|value| !value.is_empty())
}

/// Build the address to listen on
///
/// Falls back to [`DEFAULT_ADDRESS`], `port` overrides just the port
///
/// # Errors
///
/// Will return `Err` if the address or the port can not be parsed
pub fn parse_address(address: Option<String>, port: Option<String>) -> Result<SocketAddr> {
    let mut address = address
        .as_deref()
        .unwrap_or(DEFAULT_ADDRESS)
        .parse::<SocketAddr>()?;

    if let Some(port) = port {
        address.set_port(port.parse::<u16>()?);
    }

    Ok(address)
}
