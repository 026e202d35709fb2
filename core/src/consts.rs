/*
 * SPDX-FileCopyrightText: 2026 Pixis Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use std::ops::RangeInclusive;

pub const PORT_RANGE: RangeInclusive<usize> = 1..=65535;

pub const TOKEN_LIFETIME_HOURS: i64 = 24;

pub const MAX_TEXT_LENGTH: usize = 255;
pub const MAX_USERNAME_LENGTH: usize = 64;
