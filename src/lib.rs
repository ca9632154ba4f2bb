// git-mirror: Git Repository Mirroring Tool
//
// SPDX-FileCopyrightText: 2026 The git-mirror Authors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |          mirror / integrity / purge
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          engine           |
//!              |  sync, drift audit, purge |
//!              '--+-----------+--------+---'
//!                 |           |        |
//!                 v           v        v
//!            manifest       git     provider
//!           JSON schema   git CLI  gitlab/codecommit
//!               |
//!               v
//!             repo
//!        locator, aliases
//!
//!   +-----------------------------------------+
//!   |  process   external commands, dry-run   |
//!   +-----------------------------------------+
//!   |  foundation   error, logging, settings  |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod engine;
pub mod error;
pub mod git;
pub mod logging;
pub mod manifest;
pub mod process;
pub mod provider;
pub mod repo;
pub mod settings;
