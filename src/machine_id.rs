//! Machine ID derivation from the host's network hardware.
//!
//! Concurrent generator instances stay collision-free only while their
//! machine IDs differ, so the derived value has to be stable per host and
//! spread well across hosts. Hashing every interface name together with its
//! hardware address gives both; when the host exposes no interfaces at all
//! the value comes from OS entropy instead.

use rand::{rngs::OsRng, Rng};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Derive a machine ID fitting `mask` from the host's network interfaces,
/// falling back to a cryptographically strong random value.
///
/// Infallible: total failure to enumerate interfaces is absorbed here and
/// never reaches the caller.
pub(crate) fn derive(mask: u64) -> u64 {
    nic_fingerprint().unwrap_or_else(|| OsRng.gen::<u64>()) & mask
}

/// Hash of all interface names and hardware addresses, `None` when the
/// host exposes no interfaces.
fn nic_fingerprint() -> Option<u64> {
    let interfaces = pnet_datalink::interfaces();
    if interfaces.is_empty() {
        return None;
    }
    let mut hasher = DefaultHasher::new();
    for interface in &interfaces {
        interface.name.hash(&mut hasher);
        if let Some(mac) = interface.mac {
            mac.octets().hash(&mut hasher);
        }
    }
    Some(hasher.finish())
}
