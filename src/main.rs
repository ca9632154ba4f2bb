// git-mirror: Git Repository Mirroring Tool
//
// SPDX-FileCopyrightText: 2026 The git-mirror Authors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> Settings --> Manifest --> Command Dispatch
//!   Mirror | Integrity | Purge
//! exit code = error count, clamped to 255
//! ```

use std::process::ExitCode;

use tracing::{error, info};

use git_mirror::cli::global::GlobalOptions;
use git_mirror::cli::{self, Command};
use git_mirror::cmd::integrity::run_integrity_command;
use git_mirror::cmd::mirror::run_mirror_command;
use git_mirror::cmd::purge::run_purge_command;
use git_mirror::engine::MirrorEngine;
use git_mirror::error::MirrorResult;
use git_mirror::git::Git;
use git_mirror::logging::{LogConfig, init_logging};
use git_mirror::manifest::{RepositoryDefinition, load_manifest};
use git_mirror::process::CommandRunner;
use git_mirror::provider::ProviderRegistry;
use git_mirror::settings::{Settings, SettingsLoader};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    let log_config = LogConfig::builder()
        .with_console_level(cli.global.log_level)
        .with_log_file(cli.global.log_file.display().to_string())
        .build();
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    run(&cli).await
}

async fn run(cli: &cli::Cli) -> ExitCode {
    let Some(command) = &cli.command else {
        eprintln!("No command specified. Use --help for usage information.");
        return ExitCode::FAILURE;
    };

    if cli.global.dry_run {
        info!("starting in dry-run mode");
    }

    let (settings, definitions) = match startup(&cli.global) {
        Ok(state) => state,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let runner = CommandRunner::new(cli.global.dry_run);
    let git = Git::new(runner);
    let providers = ProviderRegistry::from_settings(&settings, runner);

    let errors = match command {
        Command::Mirror(args) => {
            if let Err(e) = std::fs::create_dir_all(&args.repo_dir) {
                error!(dir = %args.repo_dir.display(), "cannot create repo dir: {e}");
                return ExitCode::FAILURE;
            }
            let engine = MirrorEngine::new(git, providers, args.repo_dir.clone());
            run_mirror_command(&engine, &definitions).await
        }
        Command::Integrity => {
            let engine = MirrorEngine::new(git, providers, std::path::PathBuf::new());
            run_integrity_command(&engine, &definitions).await
        }
        Command::Purge(args) => {
            let engine = MirrorEngine::new(git, providers, std::path::PathBuf::new());
            run_purge_command(&engine, &definitions, &args.target).await
        }
    };

    summarize(errors, &definitions);
    exit_code(errors)
}

/// Everything that must succeed before any repository is touched: the git
/// executable, the provider settings, and the manifest.
fn startup(global: &GlobalOptions) -> MirrorResult<(Settings, Vec<RepositoryDefinition>)> {
    CommandRunner::require("git")?;

    let mut loader = SettingsLoader::new().add_toml_file_optional("git-mirror.toml");
    if let Some(path) = &global.config {
        loader = loader.add_toml_file(path);
    }
    let settings = loader.build()?;

    let definitions = load_manifest(&global.manifest)?;
    Ok((settings, definitions))
}

fn summarize(errors: usize, definitions: &[RepositoryDefinition]) {
    let processed = definitions.iter().filter(|d| !d.skip).count();
    if errors == 0 {
        info!(repos = processed, "Finished with no errors");
    } else {
        let plural = if errors == 1 { "" } else { "s" };
        info!(repos = processed, "Finished with {errors} error{plural}");
    }
}

/// Exit code is the error count, saturating at the platform limit.
fn exit_code(errors: usize) -> ExitCode {
    ExitCode::from(u8::try_from(errors).unwrap_or(u8::MAX))
}
