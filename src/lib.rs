// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

/*!
IPv4 subnet calculator.

Takes an address in CIDR notation (`A.B.C.D/P`, prefix `0..=30`) and derives
the network and broadcast addresses, subnet mask, usable host range and
count, address class and RFC 1918 private classification.

```
use subnetcalc::{network_address, usable_host_count, Cidr};

assert_eq!(network_address("192.168.1.65/28").unwrap(), "192.168.1.64");
assert_eq!(usable_host_count("192.168.1.65/28").unwrap(), 14);
assert!("192.168.1.1/31".parse::<Cidr>().is_err());
```
*/

mod subnet;

pub use subnet::*;
