//! Tests for document loading and project table publication.

use super::*;

fn configuration_block(projects: &[&str], error_log: &str, mappings: &str) -> String {
    let projects: String = projects
        .iter()
        .map(|p| format!("<project>{}</project>", p))
        .collect();
    format!(
        r#"<configuration><errorLog name="{}"/><projects>{}</projects><mappings>{}</mappings></configuration>"#,
        error_log, projects, mappings
    )
}

fn document(blocks: &[String]) -> String {
    format!("<configurations>{}</configurations>", blocks.concat())
}

/// Verify a valid document publishes one entry per project key.
#[test]
fn test_load_publishes_projects() {
    let doc = document(&[configuration_block(
        &["ABC", "DEF"],
        "log",
        r#"<mappingIn><fields><field id="summary"/></fields>
             <templateFields><templateField><template>%summary%</template></templateField></templateFields>
           </mappingIn>"#,
    )]);

    let table = SyncConfigLoader::new().load(&doc).unwrap();

    assert_eq!(table.len(), 2);
    assert_eq!(table.project_keys(), vec!["ABC", "DEF"]);
    assert!(Arc::ptr_eq(
        table.get("ABC").unwrap(),
        table.get("DEF").unwrap()
    ));
    assert_eq!(table.configurations().len(), 1);
    assert!(table.get("XYZ").is_none());
}

/// Verify a later configuration replaces an earlier one for a shared project.
#[test]
fn test_load_later_configuration_wins() {
    let doc = document(&[
        configuration_block(&["ABC", "ONLY1"], "first", ""),
        configuration_block(&["ABC"], "second", ""),
    ]);

    let table = SyncConfigLoader::new().load(&doc).unwrap();

    assert_eq!(
        table.get("ABC").unwrap().error_log_name.as_deref(),
        Some("second")
    );
    assert_eq!(
        table.get("ONLY1").unwrap().error_log_name.as_deref(),
        Some("first")
    );
    assert_eq!(table.configurations().len(), 2);
}

/// Verify an unresolved placeholder fails the whole load with a tagged message.
#[test]
fn test_load_reports_unresolved_placeholder() {
    let doc = document(&[configuration_block(
        &["ABC"],
        "log",
        r#"<mappingOut><fields><field id="summary"/></fields>
             <templateFields><templateField><template>%summary% %missing%</template></templateField></templateFields>
           </mappingOut>"#,
    )]);

    let result = SyncConfigLoader::new().load(&doc);

    assert_eq!(
        result,
        Err(ConfigurationError::ValidationFailed {
            message: "Outbound mapping - following items do not contain field declaration: %missing%. "
                .to_string()
        })
    );
}

/// Verify violations of every configuration are collected, inbound first.
#[test]
fn test_load_aggregates_all_violations() {
    let doc = document(&[
        configuration_block(
            &["ONE"],
            "log",
            r#"<mappingOut><templateFields><templateField><template>%out1%</template></templateField></templateFields></mappingOut>
               <mappingIn><templateFields><templateField><template>%in1%</template></templateField></templateFields></mappingIn>"#,
        ),
        configuration_block(
            &["TWO"],
            "log",
            r#"<mappingIn><templateFields><templateField><template>%in2%</template></templateField></templateFields></mappingIn>"#,
        ),
    ]);

    let err = SyncConfigLoader::new().load(&doc).unwrap_err();

    let ConfigurationError::ValidationFailed { message } = err else {
        panic!("Expected ValidationFailed");
    };
    assert_eq!(
        message,
        "Inbound mapping - following items do not contain field declaration: %in1%. \
         Inbound mapping - following items do not contain field declaration: %in2%. \
         Outbound mapping - following items do not contain field declaration: %out1%. "
    );
}

/// Verify a field declared in an XML group satisfies a template placeholder.
#[test]
fn test_load_xml_group_field_satisfies_placeholder() {
    let doc = document(&[configuration_block(
        &["ABC"],
        "log",
        r#"<mappingIn>
             <xmlFields ns="urn:x" name="details"><field id="severity" xpath="sev"/></xmlFields>
             <templateFields><templateField><template>Severity: %severity%</template></templateField></templateFields>
           </mappingIn>"#,
    )]);

    let table = SyncConfigLoader::new().load(&doc).unwrap();

    let mapping = &table.get("ABC").unwrap().inbound_mappings[0];
    assert_eq!(mapping.xml_field_configs[0].fields.len(), 1);
}

/// Verify a placeholder naming another template is still unresolved.
#[test]
fn test_load_template_ids_do_not_resolve() {
    let doc = document(&[configuration_block(
        &["ABC"],
        "log",
        r#"<mappingIn><templateFields>
             <templateField id="first"><template>a</template></templateField>
             <templateField><template>%first%</template></templateField>
           </templateFields></mappingIn>"#,
    )]);

    assert!(matches!(
        SyncConfigLoader::new().load(&doc),
        Err(ConfigurationError::ValidationFailed { .. })
    ));
}

/// Verify malformed documents fail with a parse error.
#[test]
fn test_load_malformed_document() {
    let result = SyncConfigLoader::new().load("<configurations><configuration>");

    assert!(matches!(result, Err(ConfigurationError::ParseError { .. })));
}

/// Verify configurations without projects are kept but not addressable.
#[test]
fn test_load_configuration_without_projects() {
    let doc = document(&[configuration_block(&[], "log", "")]);

    let table = SyncConfigLoader::new().load(&doc).unwrap();

    assert!(table.is_empty());
    assert_eq!(table.configurations().len(), 1);
}
