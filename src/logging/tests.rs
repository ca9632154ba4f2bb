// git-mirror: Git Repository Mirroring Tool
//
// SPDX-FileCopyrightText: 2026 The git-mirror Authors
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{LogConfig, LogLevel};

#[test]
fn test_log_level_parse() {
    assert_eq!("info".parse::<LogLevel>().unwrap(), LogLevel::Info);
    assert_eq!("WARNING".parse::<LogLevel>().unwrap(), LogLevel::Warn);
    assert_eq!("Trace".parse::<LogLevel>().unwrap(), LogLevel::Trace);
    assert!("verbose".parse::<LogLevel>().is_err());
}

#[test]
fn test_log_level_filter_string() {
    assert_eq!(LogLevel::Error.to_filter_string(), "error");
    assert_eq!(LogLevel::Debug.to_filter_string(), "debug");
    assert_eq!(LogLevel::default().to_filter_string(), "info");
}

#[test]
fn test_log_config_defaults() {
    let config = LogConfig::default();
    assert_eq!(config.console_level(), LogLevel::Info);
    assert_eq!(config.file_level(), LogLevel::Debug);
    assert!(config.log_file().is_none());
}

#[test]
fn test_log_config_builder() {
    let config = LogConfig::builder()
        .with_console_level(LogLevel::Debug)
        .with_file_level(LogLevel::Trace)
        .with_log_file(".logs/git-mirror.log".to_string())
        .build();
    assert_eq!(config.console_level(), LogLevel::Debug);
    assert_eq!(config.file_level(), LogLevel::Trace);
    assert_eq!(config.log_file(), Some(".logs/git-mirror.log"));
}
