// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod export;
pub mod models;
pub mod probe;
pub mod registry;
pub mod session;
pub mod utils;
