// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2025 William Bro-Jørgensen
// Copyright (c) 2020 Guillaume Fraux and contributors
//
// See LICENSE at the project root for full text.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BohrError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("domain error: {0}")]
    DomainError(String),
    #[error("{0}")]
    IoError(#[from] std::io::Error),
}

impl BohrError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        BohrError::InvalidArgument(msg.into())
    }
}
