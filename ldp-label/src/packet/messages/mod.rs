//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

pub mod label;
pub mod notification;

pub use label::*;
pub use notification::*;
