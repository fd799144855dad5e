//! Workflow Orchestration
//!
//! ワークフローのオーケストレーション

use anyhow::{Context, Result};
use log::info;

use std::sync::Arc;

use crate::adapter::config::Config;
use crate::adapter::repositories::json_session_repository::JsonSessionRepository;
use crate::application::dto::session_config::SessionConfig;
use crate::application::use_cases::clear_session::ClearSessionUseCase;
use crate::application::use_cases::compute_spacing::ComputeSpacingUseCase;
use crate::application::use_cases::load_session::LoadSessionUseCase;

use super::cli::Args;
use super::report::{format_inputs, format_result};

/// CLI引数と設定から、今回のセッション保存設定を決める
pub fn resolve_session_config(config: &Config, args: &Args) -> SessionConfig {
    let mut session_config = config.session_config();
    if let Some(path) = &args.session {
        session_config.path = shellexpand::tilde(path).into_owned();
    }
    if args.no_save {
        session_config.persist = false;
    }
    session_config
}

/// Grating Spacing Workflow
pub struct GratingWorkflow {
    config: Config,
    compute_use_case: ComputeSpacingUseCase<JsonSessionRepository>,
    load_use_case: LoadSessionUseCase<JsonSessionRepository>,
    clear_use_case: ClearSessionUseCase<JsonSessionRepository>,
}

impl GratingWorkflow {
    /// Create a new workflow instance with dependency injection
    pub fn new(config: Config) -> Self {
        let session_repo = Arc::new(JsonSessionRepository::new());

        Self {
            config,
            compute_use_case: ComputeSpacingUseCase::new(session_repo.clone()),
            load_use_case: LoadSessionUseCase::new(session_repo.clone()),
            clear_use_case: ClearSessionUseCase::new(session_repo),
        }
    }

    /// Execute the workflow selected by the arguments
    pub async fn execute(&self, args: Args) -> Result<()> {
        let session_config = resolve_session_config(&self.config, &args);
        info!("Session file: {}", session_config.path);

        if args.clear {
            return self.clear(&session_config).await;
        }

        if args.angles.is_empty() {
            return self.show_last_session(&session_config).await;
        }

        self.compute(&args.angles, &session_config).await
    }

    async fn compute(&self, angles: &[String], session_config: &SessionConfig) -> Result<()> {
        info!("Computing grating spacing from {} readings", angles.len());

        let result = self
            .compute_use_case
            .execute(angles, session_config)
            .await
            .context("Failed to compute grating spacing")?;

        println!("{}", format_result(&result, self.config.precision));

        if session_config.persist {
            println!("✓ Saved session to {}", session_config.path);
        }

        Ok(())
    }

    async fn show_last_session(&self, session_config: &SessionConfig) -> Result<()> {
        let Some(session) = self.load_use_case.execute(&session_config.path).await? else {
            println!("No previous session. Pass five readings, e.g.:");
            println!("  grating 30°15.5′ 30°10.2′ 30°20.7′ 30°15.3′ 30°18.4′");
            return Ok(());
        };

        match session.saved_at {
            Some(saved_at) => println!("✓ Last session ({}):", saved_at.to_rfc3339()),
            None => println!("✓ Last session:"),
        }
        println!("{}", format_inputs(&session.angle_inputs));
        println!();
        println!("{}", format_result(&session.result, self.config.precision));

        Ok(())
    }

    async fn clear(&self, session_config: &SessionConfig) -> Result<()> {
        if self.clear_use_case.execute(&session_config.path).await? {
            println!("✓ Cleared session {}", session_config.path);
        } else {
            println!("No saved session to clear.");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_resolve_session_config_from_config() {
        let config = Config {
            session_path: "/data/session.json".to_string(),
            save_session: true,
            precision: 6,
        };
        let args = Args::parse_from(["grating"]);

        let session_config = resolve_session_config(&config, &args);

        assert_eq!(session_config.path, "/data/session.json");
        assert!(session_config.persist);
    }

    #[test]
    fn test_resolve_session_config_overrides() {
        let config = Config::default();
        let args = Args::parse_from(["grating", "--session", "/tmp/other.json", "--no-save"]);

        let session_config = resolve_session_config(&config, &args);

        assert_eq!(session_config.path, "/tmp/other.json");
        assert!(!session_config.persist);
    }

    #[test]
    fn test_resolve_session_config_respects_disabled_saving() {
        let config = Config {
            save_session: false,
            ..Config::default()
        };
        let args = Args::parse_from(["grating"]);

        assert!(!resolve_session_config(&config, &args).persist);
    }
}
