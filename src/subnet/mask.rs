// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{strings::DOT, IPV4_BITS};
use std::{fmt, net::Ipv4Addr};

/**
IPv4 subnet mask: the first `prefix` bits set, the remaining bits clear.

[Display](fmt::Display) renders the mask as four 8-character binary groups,
f.ex. `11111111.11111111.11111111.11110000` for a /28.
*/
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct SubnetMask(u32);

impl SubnetMask {
    /// Mask for a prefix length. Prefixes above 32 saturate to all ones.
    pub fn from_prefix(prefix: u8) -> Self {
        match prefix {
            0 => Self(0),
            p if p >= IPV4_BITS => Self(u32::MAX),
            p => Self(u32::MAX << (IPV4_BITS - p)),
        }
    }

    #[inline]
    pub fn bits(&self) -> u32 {
        self.0
    }

    /// Number of leading one bits.
    #[inline]
    pub fn prefix(&self) -> u8 {
        self.0.leading_ones() as u8
    }

    /// Host bits only, a.k.a. the wildcard mask.
    #[inline]
    pub fn inverted(&self) -> u32 {
        !self.0
    }

    /// Dotted-decimal form, f.ex. `255.255.255.240`.
    pub fn to_addr(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.0)
    }

    /// Same as the [Display](fmt::Display) output.
    pub fn to_binary_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SubnetMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.0.to_be_bytes();
        write!(f, "{a:08b}{DOT}{b:08b}{DOT}{c:08b}{DOT}{d:08b}")
    }
}

impl From<SubnetMask> for Ipv4Addr {
    fn from(mask: SubnetMask) -> Self {
        mask.to_addr()
    }
}

/* -------------------------------------------------------------------------- */
