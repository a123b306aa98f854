// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{mask::SubnetMask, strings::*, validate, AddressError, IPV4_BITS, MAX_PREFIX};
use ipnet::Ipv4Net;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, net::Ipv4Addr, str::FromStr};

/// Classful IPv4 address class, decided by the first octet alone.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum AddressClass {
    A,
    B,
    C,
    /// multicast
    D,
    /// reserved
    E,
}

impl AddressClass {
    pub fn from_first_octet(octet: u8) -> Self {
        match octet {
            0..=127 => AddressClass::A,
            128..=191 => AddressClass::B,
            192..=223 => AddressClass::C,
            224..=239 => AddressClass::D,
            _ => AddressClass::E,
        }
    }
}

impl fmt::Display for AddressClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c: &str = match self {
            AddressClass::A => "A",
            AddressClass::B => "B",
            AddressClass::C => "C",
            AddressClass::D => "D",
            AddressClass::E => "E",
        };
        f.write_str(c)
    }
}

/* -------------------------------------------------------------------------- */

/**
A validated IPv4 address with its prefix length.

`addr` is the address as given, not the network address. Values built through
[validate()] or [FromStr] always have `prefix <= 30`; the calculations below
saturate instead of wrapping if the fields are set by hand outside that range.
*/
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Cidr {
    pub addr: Ipv4Addr,
    /// `0..=30`
    pub prefix: u8,
}

impl Cidr {
    pub fn mask(&self) -> SubnetMask {
        SubnetMask::from_prefix(self.prefix)
    }

    /// Address with all host bits cleared.
    pub fn network(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) & self.mask().bits())
    }

    /// Address with all host bits set.
    pub fn broadcast(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) | self.mask().inverted())
    }

    /// Network address + 1.
    pub fn first_usable(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.network()).saturating_add(1))
    }

    /**
    Broadcast address - 2, i.e. the address below the last assignable host.

    Carried as a 32-bit integer, so a borrow crosses octet boundaries
    instead of producing an out-of-range octet.
    */
    pub fn penultimate_usable(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.broadcast()).saturating_sub(2))
    }

    /// Number of addresses covered, network and broadcast included.
    pub fn len(&self) -> u64 {
        1u64 << IPV4_BITS.saturating_sub(self.prefix)
    }

    /// `2^(32 - prefix) - 2`
    pub fn usable_hosts(&self) -> u32 {
        self.len().saturating_sub(2) as u32
    }

    pub fn class(&self) -> AddressClass {
        AddressClass::from_first_octet(self.addr.octets()[0])
    }

    /// RFC 1918 ranges: `10.0.0.0/8`, `172.16.0.0/12`, `192.168.0.0/16`.
    pub fn is_private(&self) -> bool {
        matches!(
            self.addr.octets(),
            [10, ..] | [172, 16..=31, ..] | [192, 168, ..]
        )
    }

    pub fn to_ipnet(&self) -> Ipv4Net {
        // prefix is clamped, so construction cannot fail
        Ipv4Net::new(self.addr, self.prefix.min(IPV4_BITS)).unwrap_or_default()
    }
}

impl fmt::Display for Cidr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{SLASH}{}", self.addr, self.prefix)
    }
}

impl FromStr for Cidr {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate(s)
    }
}

impl TryFrom<&[u8]> for Cidr {
    type Error = AddressError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let s: &str = std::str::from_utf8(bytes).map_err(|_| AddressError::NotText)?;
        validate(s)
    }
}

impl TryFrom<Ipv4Net> for Cidr {
    type Error = AddressError;

    fn try_from(net: Ipv4Net) -> Result<Self, Self::Error> {
        if net.prefix_len() > MAX_PREFIX {
            return Err(AddressError::Prefix(net.prefix_len().to_string()));
        }
        Ok(Cidr {
            addr: net.addr(),
            prefix: net.prefix_len(),
        })
    }
}

impl From<Cidr> for Ipv4Net {
    fn from(cidr: Cidr) -> Self {
        cidr.to_ipnet()
    }
}

impl Serialize for Cidr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Cidr {
    fn deserialize<D>(deserializer: D) -> Result<Cidr, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        validate(&s).map_err(de::Error::custom)
    }
}

/* -------------------------------------------------------------------------- */
