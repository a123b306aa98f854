// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{strings::*, structs::Cidr, AddressError, MAX_LEN, MAX_PREFIX, MIN_LEN};
use lazy_static::lazy_static;
use regex::Regex;
use std::net::Ipv4Addr;
use tracing::debug;

lazy_static! {
    // ASCII only; `\d` would also accept other Unicode digits.
    static ref DECIMAL: Regex = Regex::new(r"^[0-9]+$").expect("static regex");
}

const MAX_PREFIX_DIGITS: usize = 2;

/**
Validate a raw `A.B.C.D/P` string and parse it into a [Cidr].

Rules, checked in order:
- length is `9..=18` characters
- exactly 3 dots and exactly 1 slash
- prefix is 1-2 decimal digits, value `0..=30`
- each of the 4 octets is decimal digits with value `0..=255`

Signs, whitespace and anything else that is not an ASCII digit are rejected.
Every rejection is logged at debug level.
*/
pub fn validate(raw: impl AsRef<str>) -> Result<Cidr, AddressError> {
    let raw: &str = raw.as_ref();
    parse_cidr(raw).inspect_err(|e| debug!(input = raw, error = %e, "rejected CIDR address"))
}

fn parse_cidr(raw: &str) -> Result<Cidr, AddressError> {
    let len: usize = raw.chars().count();
    if !(MIN_LEN..=MAX_LEN).contains(&len) {
        return Err(AddressError::Length(len));
    }

    let dots: usize = raw.matches(DOT).count();
    let slashes: usize = raw.matches(SLASH).count();
    if dots != 3 || slashes != 1 {
        return Err(AddressError::Separators { dots, slashes });
    }

    let (quad, prefix) = raw
        .split_once(SLASH)
        .ok_or(AddressError::Separators { dots, slashes })?;
    let prefix: u8 = parse_prefix(prefix)?;

    // a dot after the slash would have failed the prefix check
    let tokens: Vec<&str> = quad.split(DOT).collect();
    if tokens.len() != 4 {
        return Err(AddressError::Format(raw.into()));
    }

    let mut octets: [u8; 4] = [0; 4];
    for (slot, tok) in octets.iter_mut().zip(tokens) {
        *slot = parse_octet(tok)?;
    }

    Ok(Cidr {
        addr: Ipv4Addr::from(octets),
        prefix,
    })
}

fn parse_prefix(tok: &str) -> Result<u8, AddressError> {
    if tok.is_empty() || tok.len() > MAX_PREFIX_DIGITS {
        return Err(AddressError::Prefix(tok.into()));
    }
    if !DECIMAL.is_match(tok) {
        return Err(AddressError::Format(tok.into()));
    }
    let prefix: u8 = tok
        .parse::<u8>()
        .map_err(|_| AddressError::Prefix(tok.into()))?;
    if prefix > MAX_PREFIX {
        return Err(AddressError::Prefix(tok.into()));
    }
    Ok(prefix)
}

fn parse_octet(tok: &str) -> Result<u8, AddressError> {
    if !DECIMAL.is_match(tok) {
        return Err(AddressError::Format(tok.into()));
    }
    tok.parse::<u8>()
        .map_err(|_| AddressError::Octet(tok.into()))
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid() {
        let cidr: Cidr = validate("192.168.1.65/28").unwrap();
        assert_eq!(cidr.addr, Ipv4Addr::new(192, 168, 1, 65));
        assert_eq!(cidr.prefix, 28);

        assert_eq!(validate("0.0.0.0/0").unwrap().prefix, 0);
        assert_eq!(validate("255.255.255.255/30").unwrap().prefix, 30);
        assert_eq!(validate(String::from("10.0.0.1/8")).unwrap().prefix, 8);
    }

    #[test]
    fn test_leading_zeros_accepted() {
        let cidr: Cidr = validate("010.001.000.009/08").unwrap();
        assert_eq!(cidr.addr, Ipv4Addr::new(10, 1, 0, 9));
        assert_eq!(cidr.prefix, 8);

        // only the value is range-checked, not the digit count
        let cidr: Cidr = validate("192.168.1.0001/2").unwrap();
        assert_eq!(cidr.addr, Ipv4Addr::new(192, 168, 1, 1));
        assert_eq!(cidr.to_string(), "192.168.1.1/2");
    }

    #[rustfmt::skip]
    #[test]
    fn test_rejections() {
        let cases: Vec<(&str, AddressError)> = vec![
            ("",                    AddressError::Length(0)),
            ("1.1.1/8",             AddressError::Length(7)),
            ("255.255.255.255/300", AddressError::Length(19)),
            ("not.an.ip/24",        AddressError::Separators { dots: 2, slashes: 1 }),
            ("192.168.1.1",         AddressError::Separators { dots: 3, slashes: 0 }),
            ("192.168.1.1/2/4",     AddressError::Separators { dots: 3, slashes: 2 }),
            ("192.168.1.1.1/24",    AddressError::Separators { dots: 4, slashes: 1 }),
            ("192.168.1.1/31",      AddressError::Prefix("31".into())),
            ("192.168.1.1/32",      AddressError::Prefix("32".into())),
            ("192.168.1.1/",        AddressError::Prefix("".into())),
            ("192.168.1/1.1",       AddressError::Prefix("1.1".into())),
            ("192.168.1.1/-1",      AddressError::Format("-1".into())),
            ("192.168.1.1/ab",      AddressError::Format("ab".into())),
            ("192.168.1.1/+8",      AddressError::Format("+8".into())),
            ("192.168.1.256/24",    AddressError::Octet("256".into())),
            ("192.168.1.-1/24",     AddressError::Format("-1".into())),
            ("1.1.1.0256/8",        AddressError::Octet("0256".into())),
            ("192.168..1/24",       AddressError::Format("".into())),
            ("192.168. 1.1/24",     AddressError::Format(" 1".into())),
            ("not.an.ip.x/24",      AddressError::Format("not".into())),
            ("1.2.3.٣/24",          AddressError::Format("٣".into())),
        ];

        for (input, expected) in cases {
            assert_eq!(validate(input), Err(expected), "Failed: '{input}'");
        }
    }
}
