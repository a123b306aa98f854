// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

/*!
String-in, value-out subnet calculations.

Each function validates `raw` (`A.B.C.D/P`) first and returns the
[AddressError] unchanged if it is not a valid CIDR address.
*/

use super::{structs::AddressClass, validate, AddressError};

/// Address part of `raw`, normalized (f.ex. leading zeros dropped).
pub fn extract_address(raw: impl AsRef<str>) -> Result<String, AddressError> {
    Ok(validate(raw)?.addr.to_string())
}

pub fn network_address(raw: impl AsRef<str>) -> Result<String, AddressError> {
    Ok(validate(raw)?.network().to_string())
}

pub fn broadcast_address(raw: impl AsRef<str>) -> Result<String, AddressError> {
    Ok(validate(raw)?.broadcast().to_string())
}

/// Subnet mask as four dot-joined 8-bit binary groups.
pub fn binary_mask(raw: impl AsRef<str>) -> Result<String, AddressError> {
    Ok(validate(raw)?.mask().to_binary_string())
}

pub fn first_usable_host(raw: impl AsRef<str>) -> Result<String, AddressError> {
    Ok(validate(raw)?.first_usable().to_string())
}

/// Broadcast address minus two.
pub fn penultimate_usable_host(raw: impl AsRef<str>) -> Result<String, AddressError> {
    Ok(validate(raw)?.penultimate_usable().to_string())
}

pub fn usable_host_count(raw: impl AsRef<str>) -> Result<u32, AddressError> {
    Ok(validate(raw)?.usable_hosts())
}

pub fn address_class(raw: impl AsRef<str>) -> Result<AddressClass, AddressError> {
    Ok(validate(raw)?.class())
}

pub fn is_private(raw: impl AsRef<str>) -> Result<bool, AddressError> {
    Ok(validate(raw)?.is_private())
}

/* -------------------------------------------------------------------------- */
