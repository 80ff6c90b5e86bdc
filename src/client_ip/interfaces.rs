//! Local interface fallback.

use std::net::Ipv4Addr;

use network_interface::{Addr, NetworkInterface, NetworkInterfaceConfig};

/// First non-loopback IPv4 address bound to a local interface, if any.
pub(crate) fn first_external_ipv4() -> Option<Ipv4Addr> {
    let interfaces = match NetworkInterface::show() {
        Ok(interfaces) => interfaces,
        Err(e) => {
            log::debug!("Failed to enumerate network interfaces: {e}");
            return None;
        }
    };

    interfaces
        .into_iter()
        .flat_map(|interface| interface.addr)
        .find_map(|addr| match addr {
            Addr::V4(v4) if !v4.ip.is_loopback() => Some(v4.ip),
            _ => None,
        })
}
