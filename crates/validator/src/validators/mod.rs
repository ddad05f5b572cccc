//! Built-in rules
//!
//! Every rule is a small value type implementing
//! [`Validate`](crate::foundation::Validate), created through a lowercase
//! factory function.
//!
//! # Categories
//!
//! - **Presence**: required text, required option list, file upload
//! - **Network**: hostname, host, IP addresses and networks, subnet mask,
//!   MAC address, port and port range, MTU, VLAN id
//! - **Identifiers**: configuration names, hexadecimal strings
//! - **Services**: DHCP lease time
//! - **Credentials**: password strength, confirmation equality
//!
//! # Examples
//!
//! ```
//! use netpanel_validator::prelude::*;
//!
//! assert!(ipv4_cidr().validate("192.168.1.0/24").is_ok());
//! assert!(port_range().validate("80,443,8000-8080").is_ok());
//! assert_eq!(vlan_id().validate("4095").unwrap_err().code(), "invalid_vlan_id");
//! ```

pub(crate) mod numeric;

// Presence
pub mod file;
pub mod required;

// Network
pub mod hostname;
pub mod ip_address;
pub mod mac_address;
pub mod port;
pub mod range;

// Identifiers
pub mod hex;
pub mod uci_name;

// Services
pub mod lease_time;

// Credentials
pub mod equality;
pub mod password;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use equality::{Equals, equals};
pub use file::{File, FileHandle, file};
pub use hex::{Hexadecimal, hexadecimal};
pub use hostname::{Host, Hostname, INVALID_HOST, MAX_HOSTNAME_LENGTH, host, hostname};
pub use ip_address::{
    INVALID_IP_ADDRESS, IpAddress, Ipv4, Ipv4Cidr, Ipv4SubnetMask, Ipv6, Ipv6Cidr, MAX_V4_PREFIX,
    ip_address, ipv4, ipv4_cidr, ipv4_subnet_mask, ipv6, ipv6_cidr,
};
pub use lease_time::{LeaseTime, lease_time};
pub use mac_address::{MacAddress, mac_address};
pub use password::{Password, password};
pub use port::{PORTS, Port, PortRange, port, port_range};
pub use range::{IPV4_MTU, IPV6_MTU, IpFamily, Mtu, VLAN_IDS, VlanId, ipv4_mtu, ipv6_mtu, vlan_id};
pub use required::{Required, RequiredOption, required, required_option};
pub use uci_name::{UciName, uci_name};
