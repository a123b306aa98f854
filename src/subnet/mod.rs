// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! IPv4 CIDR validation and subnet property calculations.

mod calc;
mod mask;
mod strings;
mod structs;
mod summary;
mod validate;

use std::{error, fmt};
use strings::*;

pub use calc::*;
pub use mask::SubnetMask;
pub use structs::{AddressClass, Cidr};
pub use summary::{summarize, summarize_many, SubnetSummary};
pub use validate::validate;

pub const IPV4_BITS: u8 = 32;
/// Largest accepted prefix; /31 and /32 have no usable host range.
pub const MAX_PREFIX: u8 = 30;
/// `0.0.0.0/0`
pub(crate) const MIN_LEN: usize = 9;
/// `255.255.255.255/30`
pub(crate) const MAX_LEN: usize = 18;

/// Reasons a string is not a valid CIDR address.
#[rustfmt::skip]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AddressError {
    /// input bytes are not valid UTF-8
    NotText,
    /// length in characters outside `MIN_LEN..=MAX_LEN`
    Length(usize),
    Separators { dots: usize, slashes: usize },
    /// tokens are not plain decimal digits
    Format(String),
    Prefix(String),
    Octet(String),
}

impl fmt::Display for AddressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressError::NotText => {
                write!(f, "{ERR_INVALID}: {ERR_NOT_TEXT}")
            }
            AddressError::Length(len) => {
                write!(f, "{ERR_INVALID}: {ERR_LENGTH} {MIN_LEN}..={MAX_LEN}, got {len}")
            }
            AddressError::Separators { dots, slashes } => {
                write!(f, "{ERR_INVALID}: {ERR_SEPARATORS} (dots: {dots}, slashes: {slashes})")
            }
            AddressError::Format(s) => {
                write!(f, "{ERR_INVALID}: {ERR_FORMAT}: '{s}'")
            }
            AddressError::Prefix(p) => {
                write!(f, "{ERR_INVALID}: {ERR_PREFIX} 0..={MAX_PREFIX}, got '{p}'")
            }
            AddressError::Octet(o) => {
                write!(f, "{ERR_INVALID}: {ERR_OCTET}, got '{o}'")
            }
        }
    }
}

impl error::Error for AddressError {}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let e = AddressError::Prefix("31".into());
        assert_eq!(
            e.to_string(),
            "invalid CIDR address: prefix must be in range 0..=30, got '31'"
        );
        let e = AddressError::Separators { dots: 2, slashes: 1 };
        assert_eq!(
            e.to_string(),
            "invalid CIDR address: expected exactly 3 dots and 1 slash (dots: 2, slashes: 1)"
        );
        let e = AddressError::Length(4);
        assert_eq!(e.to_string(), "invalid CIDR address: length must be in range 9..=18, got 4");
    }
}
