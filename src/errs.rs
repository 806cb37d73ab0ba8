// Copyright (c) Sienna Satterwhite, CesiumDB Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("index {index} is beyond the end of a buffer of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
    #[error("insufficient space in buffer: {required} slots required, {available} available")]
    InsufficientSpace { required: usize, available: usize },
}
