// SPDX-License-Identifier: MPL-2.0
use message_feedback::app::config::{self, Config, FeedbackConfig, GeneralConfig};
use message_feedback::app::i18n::fluent::I18n;
use message_feedback::app::transcript::{Role, Transcript};
use message_feedback::app::{feedback_labels, App, Flags, SubmitterKind};
use message_feedback::domain::feedback::MessageId;
use tempfile::tempdir;

const TRANSCRIPT: &str = r#"
conversation_id = "conv-9"

[[messages]]
id = "q1"
role = "user"
text = "Is Rust garbage collected?"

[[messages]]
id = "a1"
role = "assistant"
text = "No. Memory is freed when its owner goes out of scope."
"#;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let english = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    config::save_to_path(&english, &config_path).expect("Failed to write initial config file");
    let loaded = config::load_from_path(&config_path).expect("Failed to load initial config");
    assert_eq!(I18n::new(None, &loaded).current_locale().to_string(), "en-US");

    let french = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    config::save_to_path(&french, &config_path).expect("Failed to write french config file");
    let loaded = config::load_from_path(&config_path).expect("Failed to load french config");
    assert_eq!(I18n::new(None, &loaded).current_locale().to_string(), "fr");
}

#[test]
fn cli_language_overrides_config() {
    let config = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };

    let i18n = I18n::new(Some("en-US".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn malformed_settings_fall_back_to_defaults_with_warning() {
    let dir = tempdir().expect("tempdir");
    std::fs::write(dir.path().join("settings.toml"), "[feedback\nendpoint =")
        .expect("write settings");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert_eq!(config, Config::default());
    assert!(warning.is_some());
}

#[test]
fn french_labels_are_translated() {
    let config = Config::default();
    let i18n = I18n::new(Some("fr".to_string()), &config);

    let labels = feedback_labels(&i18n);

    assert_eq!(labels.submit, "Envoyer");
    assert!(!labels.thanks.starts_with("MISSING"));
}

#[test]
fn transcript_file_mounts_one_widget_per_assistant_message() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("chat.toml");
    std::fs::write(&path, TRANSCRIPT).expect("write transcript");

    let transcript = Transcript::load(&path).expect("transcript parses");
    assert_eq!(transcript.messages.len(), 2);
    assert_eq!(transcript.messages[1].role, Role::Assistant);

    let app = App::new(
        Flags {
            transcript: Some(path),
            ..Flags::default()
        },
        &Config::default(),
    );

    assert!(app.widget(&MessageId::new("a1")).is_some());
    assert!(app.widget(&MessageId::new("q1")).is_none());
}

#[test]
fn missing_transcript_falls_back_to_sample() {
    let dir = tempdir().expect("tempdir");

    let app = App::new(
        Flags {
            transcript: Some(dir.path().join("absent.toml")),
            ..Flags::default()
        },
        &Config::default(),
    );

    assert!(app.widget(&MessageId::new("sample-2")).is_some());
}

#[test]
fn endpoint_selects_http_submitter() {
    let config = Config {
        feedback: FeedbackConfig {
            endpoint: Some("http://127.0.0.1:9/c/{conversation_id}/m/{message_id}".into()),
            ..FeedbackConfig::default()
        },
        ..Config::default()
    };

    let app = App::new(Flags::default(), &config);

    assert_eq!(app.submitter_kind(), SubmitterKind::Http);
}

#[test]
fn no_endpoint_means_dry_run() {
    let app = App::new(Flags::default(), &Config::default());

    assert_eq!(app.submitter_kind(), SubmitterKind::DryRun);
}

#[test]
fn blank_cli_endpoint_means_dry_run() {
    let app = App::new(
        Flags {
            endpoint: Some("   ".into()),
            ..Flags::default()
        },
        &Config::default(),
    );

    assert_eq!(app.submitter_kind(), SubmitterKind::DryRun);
}
