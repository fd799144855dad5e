//! Workflow Integration Tests
//!
//! GratingWorkflow の統合テスト

use grating::adapter::config::Config;
use grating::domain::error::MeasurementError;
use grating::driver::cli::Args;
use grating::driver::workflow::GratingWorkflow;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const READINGS: [&str; 5] = ["30°15.5′", "30°10.2′", "30°20.7′", "30°15.3′", "30°18.4′"];

/// テスト用のConfigを作成
fn create_test_config(dir: &Path) -> Config {
    Config {
        session_path: dir.join("data.json").to_string_lossy().to_string(),
        save_session: true,
        precision: 6,
    }
}

fn args_with(angles: &[&str]) -> Args {
    Args {
        angles: angles.iter().map(|s| s.to_string()).collect(),
        clear: false,
        no_save: false,
        session: None,
        config: "./grating.json".to_string(),
    }
}

#[tokio::test]
async fn test_workflow_compute_saves_session() {
    let temp_dir = TempDir::new().unwrap();
    let config = create_test_config(temp_dir.path());
    let session_path = temp_dir.path().join("data.json");

    let workflow = GratingWorkflow::new(config);
    let result = workflow.execute(args_with(&READINGS)).await;

    assert!(result.is_ok(), "Workflow should succeed, but got: {:?}", result);
    assert!(session_path.exists());

    let content = fs::read_to_string(&session_path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(json["angle_inputs"].as_array().unwrap().len(), 5);
    assert_eq!(json["angle_inputs"][0], "30°15.5′");
    assert_eq!(json["results"]["Phi_bar_deg"], 30);
    assert!(json["results"]["d_bar_mm"].as_f64().unwrap() > 0.001);
    assert!(json.get("saved_at").is_some());
}

#[tokio::test]
async fn test_workflow_no_save() {
    let temp_dir = TempDir::new().unwrap();
    let config = create_test_config(temp_dir.path());

    let mut args = args_with(&READINGS);
    args.no_save = true;

    let workflow = GratingWorkflow::new(config);
    let result = workflow.execute(args).await;

    assert!(result.is_ok());
    assert!(!temp_dir.path().join("data.json").exists());
}

#[tokio::test]
async fn test_workflow_session_override() {
    let temp_dir = TempDir::new().unwrap();
    let config = create_test_config(temp_dir.path());
    let override_path = temp_dir.path().join("other/session.json");

    let mut args = args_with(&READINGS);
    args.session = Some(override_path.to_string_lossy().to_string());

    let workflow = GratingWorkflow::new(config);
    workflow.execute(args).await.unwrap();

    assert!(override_path.exists());
    assert!(!temp_dir.path().join("data.json").exists());
}

#[tokio::test]
async fn test_workflow_invalid_input_keeps_previous_session() {
    let temp_dir = TempDir::new().unwrap();
    let config = create_test_config(temp_dir.path());
    let session_path = temp_dir.path().join("data.json");

    let workflow = GratingWorkflow::new(config);
    workflow.execute(args_with(&READINGS)).await.unwrap();
    let before = fs::read_to_string(&session_path).unwrap();

    let err = workflow
        .execute(args_with(&["30°15.5′", "30°10.2′", "bad", "30°15.3′", "30°18.4′"]))
        .await
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<MeasurementError>(),
        Some(MeasurementError::InputFormat { .. })
    ));
    let after = fs::read_to_string(&session_path).unwrap();
    assert_eq!(before, after);
}

#[tokio::test]
async fn test_workflow_overflowing_reading_keeps_session_loadable() {
    let temp_dir = TempDir::new().unwrap();
    let config = create_test_config(temp_dir.path());
    let session_path = temp_dir.path().join("data.json");

    let workflow = GratingWorkflow::new(config);
    workflow.execute(args_with(&READINGS)).await.unwrap();
    let before = fs::read_to_string(&session_path).unwrap();

    let huge_minutes = format!("30°1{}′", "0".repeat(307));
    let err = workflow
        .execute(args_with(&[
            "30°15.5′",
            "30°10.2′",
            huge_minutes.as_str(),
            "30°15.3′",
            "30°18.4′",
        ]))
        .await
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<MeasurementError>(),
        Some(MeasurementError::NonFiniteResult { .. })
    ));
    assert_eq!(before, fs::read_to_string(&session_path).unwrap());
    assert!(workflow.execute(args_with(&[])).await.is_ok());
}

#[tokio::test]
async fn test_workflow_wrong_reading_count() {
    let temp_dir = TempDir::new().unwrap();
    let workflow = GratingWorkflow::new(create_test_config(temp_dir.path()));

    let err = workflow
        .execute(args_with(&READINGS[..3]))
        .await
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<MeasurementError>(),
        Some(MeasurementError::DegenerateSample { actual: 3, .. })
    ));
    assert!(!temp_dir.path().join("data.json").exists());
}

#[tokio::test]
async fn test_workflow_show_without_session() {
    let temp_dir = TempDir::new().unwrap();
    let workflow = GratingWorkflow::new(create_test_config(temp_dir.path()));

    let result = workflow.execute(args_with(&[])).await;

    assert!(
        result.is_ok(),
        "Missing session should not be an error, but got: {:?}",
        result
    );
}

#[tokio::test]
async fn test_workflow_show_then_clear() {
    let temp_dir = TempDir::new().unwrap();
    let session_path = temp_dir.path().join("data.json");
    let workflow = GratingWorkflow::new(create_test_config(temp_dir.path()));

    workflow.execute(args_with(&READINGS)).await.unwrap();
    assert!(workflow.execute(args_with(&[])).await.is_ok());

    let mut clear_args = args_with(&[]);
    clear_args.clear = true;
    workflow.execute(clear_args.clone()).await.unwrap();
    assert!(!session_path.exists());

    // clearing twice is not an error
    assert!(workflow.execute(clear_args).await.is_ok());
}
