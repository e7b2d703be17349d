// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Runtime values.
//!
//! Simple has a single value type today, but [`Value`] is a tagged variant
//! so the interpreter's contracts stay honest if further types are ever
//! added.

/// A runtime value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Value {
    /// A signed integer.
    Integer(i64),
}

impl Value {
    /// Returns the integer payload.
    #[must_use]
    pub const fn as_integer(self) -> i64 {
        match self {
            Self::Integer(value) => value,
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
        }
    }
}
