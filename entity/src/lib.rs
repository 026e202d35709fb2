/*
 * SPDX-FileCopyrightText: 2026 Pixis Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod conscript;
pub mod conscript_duty;
pub mod department;
pub mod duty;
pub mod service;
