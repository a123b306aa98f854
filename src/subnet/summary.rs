// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{
    structs::{AddressClass, Cidr},
    validate, AddressError,
};
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;
use tracing::trace;

/// Every derived property of one CIDR address.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct SubnetSummary {
    pub cidr: Cidr,
    pub address: Ipv4Addr,
    pub prefix: u8,
    /// `11111111.11111111.11111111.11110000`
    pub mask_binary: String,
    /// `255.255.255.240`
    pub mask: Ipv4Addr,
    /// `0.0.0.15`
    pub wildcard: Ipv4Addr,
    pub network: Ipv4Addr,
    pub broadcast: Ipv4Addr,
    pub first_usable: Ipv4Addr,
    pub penultimate_usable: Ipv4Addr,
    /// network and broadcast included
    pub total_addresses: u64,
    pub usable_hosts: u32,
    pub class: AddressClass,
    pub private: bool,
}

impl From<Cidr> for SubnetSummary {
    fn from(cidr: Cidr) -> Self {
        let mask = cidr.mask();
        Self {
            cidr,
            address: cidr.addr,
            prefix: cidr.prefix,
            mask_binary: mask.to_binary_string(),
            mask: mask.to_addr(),
            wildcard: Ipv4Addr::from(mask.inverted()),
            network: cidr.network(),
            broadcast: cidr.broadcast(),
            first_usable: cidr.first_usable(),
            penultimate_usable: cidr.penultimate_usable(),
            total_addresses: cidr.len(),
            usable_hosts: cidr.usable_hosts(),
            class: cidr.class(),
            private: cidr.is_private(),
        }
    }
}

/// Validate `raw` and compute all of its subnet properties at once.
pub fn summarize(raw: impl AsRef<str>) -> Result<SubnetSummary, AddressError> {
    Ok(validate(raw)?.into())
}

/**
Summarize many raw addresses. One result per input, in input order; an
invalid entry does not affect the others.
*/
pub fn summarize_many(input: &[impl AsRef<str>]) -> Vec<Result<SubnetSummary, AddressError>> {
    input
        .iter()
        .map(|raw| {
            trace!(input = raw.as_ref(), "summarizing");
            summarize(raw)
        })
        .collect()
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary() {
        let s: SubnetSummary = summarize("192.168.1.65/28").unwrap();
        assert_eq!(s.address, Ipv4Addr::new(192, 168, 1, 65));
        assert_eq!(s.prefix, 28);
        assert_eq!(s.mask_binary, "11111111.11111111.11111111.11110000");
        assert_eq!(s.mask, Ipv4Addr::new(255, 255, 255, 240));
        assert_eq!(s.wildcard, Ipv4Addr::new(0, 0, 0, 15));
        assert_eq!(s.network, Ipv4Addr::new(192, 168, 1, 64));
        assert_eq!(s.broadcast, Ipv4Addr::new(192, 168, 1, 79));
        assert_eq!(s.first_usable, Ipv4Addr::new(192, 168, 1, 65));
        assert_eq!(s.penultimate_usable, Ipv4Addr::new(192, 168, 1, 77));
        assert_eq!(s.total_addresses, 16);
        assert_eq!(s.usable_hosts, 14);
        assert_eq!(s.class, AddressClass::C);
        assert!(s.private);
    }

    #[test]
    fn test_summarize_many() {
        let input = ["10.0.0.1/8", "not.an.ip/24", "8.8.8.8/24"];
        let out = summarize_many(&input);
        assert_eq!(out.len(), 3);
        assert_eq!(out[0].as_ref().unwrap().network, Ipv4Addr::new(10, 0, 0, 0));
        assert_eq!(
            out[1].as_ref().unwrap_err(),
            &AddressError::Separators { dots: 2, slashes: 1 }
        );
        assert!(!out[2].as_ref().unwrap().private);
    }

    #[test]
    fn test_serialize() {
        let s: SubnetSummary = summarize("8.8.8.8/24").unwrap();
        let json: serde_json::Value = serde_json::to_value(&s).unwrap();
        assert_eq!(json["cidr"], "8.8.8.8/24");
        assert_eq!(json["network"], "8.8.8.0");
        assert_eq!(json["broadcast"], "8.8.8.255");
        assert_eq!(json["usable_hosts"], 254);
        assert_eq!(json["class"], "A");
        assert_eq!(json["private"], false);

        let back: SubnetSummary = serde_json::from_value(json).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn test_deserialize_rejects_invalid_cidr() {
        let res = serde_json::from_str::<Cidr>("\"192.168.1.1/31\"");
        assert!(res.is_err());
    }
}
