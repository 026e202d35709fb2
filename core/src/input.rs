/*
 * SPDX-FileCopyrightText: 2026 Pixis Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use chrono::{DateTime, Utc};

use super::consts::*;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Validation error in field '{field}': {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

pub fn port_in_range(s: &str) -> Result<u16, String> {
    let port: usize = s
        .parse()
        .map_err(|_| format!("`{s}` is not a port number"))?;

    if PORT_RANGE.contains(&port) {
        Ok(port as u16)
    } else {
        Err(format!(
            "port not in range {}-{}",
            PORT_RANGE.start(),
            PORT_RANGE.end()
        ))
    }
}

pub fn greater_than_zero<
    T: std::str::FromStr + std::cmp::PartialOrd + std::fmt::Display + Default,
>(
    s: &str,
) -> Result<T, String> {
    let num: T = s
        .parse()
        .map_err(|_| format!("`{}` is not a valid number", s))?;

    if num > T::default() {
        Ok(num)
    } else {
        Err(format!("`{}` is not larger than 0", s))
    }
}

/// Parses a numeric record id taken from a request path.
pub fn parse_id(s: &str) -> Result<i32, ValidationError> {
    match s.trim().parse::<i32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ValidationError::new("id", format!("`{}` is not a valid id", s))),
    }
}

pub fn validate_required(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, "cannot be empty"));
    }

    if value.len() > MAX_TEXT_LENGTH {
        return Err(ValidationError::new(
            field,
            format!("cannot exceed {} characters", MAX_TEXT_LENGTH),
        ));
    }

    Ok(())
}

pub fn validate_label(label: &str) -> Result<(), ValidationError> {
    validate_required("label", label)?;

    if label.trim() != label {
        return Err(ValidationError::new(
            "label",
            "cannot have leading or trailing whitespace",
        ));
    }

    Ok(())
}

pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    if username.is_empty() {
        return Err(ValidationError::new("username", "cannot be empty"));
    }

    if username.len() > MAX_USERNAME_LENGTH {
        return Err(ValidationError::new(
            "username",
            format!("cannot exceed {} characters", MAX_USERNAME_LENGTH),
        ));
    }

    if username.chars().any(char::is_whitespace) {
        return Err(ValidationError::new("username", "cannot contain whitespace"));
    }

    Ok(())
}

/// Rejects assignment windows that end before they start.
pub fn validate_window(
    start_time: Option<DateTime<Utc>>,
    end_time: Option<DateTime<Utc>>,
) -> Result<(), ValidationError> {
    if let (Some(start), Some(end)) = (start_time, end_time) {
        if end < start {
            return Err(ValidationError::new(
                "end_time",
                "cannot be earlier than start_time",
            ));
        }
    }

    Ok(())
}

pub fn load_secret(f: &str) -> std::io::Result<String> {
    let s = std::fs::read_to_string(f)?;
    Ok(s.trim().replace(char::from(25), ""))
}
