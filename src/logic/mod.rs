// SPDX-License-Identifier: MIT

//! Business logic kept free of UI concerns.

pub mod options;
