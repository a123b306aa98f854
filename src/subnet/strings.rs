// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

pub(crate) static DOT: char = '.';
pub(crate) static SLASH: char = '/';

// mod.rs
pub(crate) static ERR_INVALID: &str = "invalid CIDR address";
pub(crate) static ERR_NOT_TEXT: &str = "input is not valid UTF-8 text";
pub(crate) static ERR_LENGTH: &str = "length must be in range";
pub(crate) static ERR_SEPARATORS: &str = "expected exactly 3 dots and 1 slash";
pub(crate) static ERR_FORMAT: &str = "expected A.B.C.D/P with decimal digits only";
pub(crate) static ERR_PREFIX: &str = "prefix must be in range";
pub(crate) static ERR_OCTET: &str = "octet must be in range 0..=255";
