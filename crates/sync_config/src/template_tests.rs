//! Tests for templates and snapshots.

use super::*;

/// Verify a new template uses `%` on both sides of a placeholder.
#[test]
fn test_template_default_delimiters() {
    let template = Template::default();

    assert_eq!(template.id_prefix, "%");
    assert_eq!(template.id_suffix, "%");
    assert!(template.general.notify_change);
    assert!(!template.always_save());
}

/// Verify placeholders use the template's own delimiters.
#[test]
fn test_template_placeholder_custom_delimiters() {
    let template = Template {
        id_prefix: "${".to_string(),
        id_suffix: "}".to_string(),
        ..Template::default()
    };

    assert_eq!(template.placeholder("priority"), "${priority}");
}

/// Verify the always-save flag only honours a literal true.
#[test]
fn test_template_always_save_flag() {
    let mut template = Template {
        always_save: Some("True".to_string()),
        ..Template::default()
    };
    assert!(template.always_save());

    template.always_save = Some("yes".to_string());
    assert!(!template.always_save());
}

/// Verify snapshot change detection compares the rendered value exactly.
#[test]
fn test_snapshot_has_changed() {
    let snapshot = Snapshot::new(Template::default(), "Priority: High");

    assert!(!snapshot.has_changed("Priority: High"));
    assert!(snapshot.has_changed("Priority: high"));
    assert!(snapshot.has_changed(""));
}

/// Verify snapshots follow the template's always-save flag.
#[test]
fn test_snapshot_persist_on_error() {
    let template = Template {
        always_save: Some("true".to_string()),
        ..Template::default()
    };

    assert!(Snapshot::new(template, "x").should_persist_on_error());
    assert!(!Snapshot::new(Template::default(), "x").should_persist_on_error());
}
