//! Integration tests for full generation runs

use std::fs;
use std::path::Path;

use gridgen_cli_lib::commands::{CheckCommand, GenerateCommand};
use gridgen_cli_lib::config::GeneratorConfig;
use tempfile::TempDir;

const USER_SCHEMA: &str = r#"{
    "name": "User",
    "properties": {
        "name": {
            "type": "string",
            "table_header": "Name",
            "table_type": "string",
            "show_on_mobile": true,
            "is_filter_field": true,
            "filter_field_type": "text"
        },
        "role": {
            "type": "string",
            "table_header": "Role",
            "table_type": "badge",
            "show_on_mobile": false,
            "format_fn": "color_map",
            "format_options": {"Admin": "bg-green-500"},
            "is_filter_field": true,
            "filter_field_type": "select",
            "filter_options": ["Admin", "Moderator"]
        }
    },
    "actions": {
        "view": {"label": "View", "function": "modal_view_entry"},
        "edit": {"label": "Edit", "function": "modal_edit_entry"}
    }
}"#;

const ITEM_SCHEMA: &str = r#"{
    "name": "Item",
    "properties": {
        "title": {
            "type": "string",
            "table_header": "Title",
            "table_type": "string",
            "show_on_mobile": true
        }
    }
}"#;

fn write_schema(dir: &Path, file: &str, content: &str) {
    fs::write(dir.join(file), content).unwrap();
}

fn config_for(root: &Path) -> GeneratorConfig {
    GeneratorConfig {
        schema_dir: root.join("schemas"),
        output_dir: root.join("generated"),
        index_file: root.join("generated/index.ts"),
        import_path: "../datatable".to_string(),
    }
}

/// A run over valid schemas writes one module per schema plus the index
#[test]
fn test_generate_writes_modules_and_index() {
    let root = TempDir::new().unwrap();
    let schema_dir = root.path().join("schemas");
    fs::create_dir_all(&schema_dir).unwrap();
    write_schema(&schema_dir, "user.json", USER_SCHEMA);
    write_schema(&schema_dir, "item.json", ITEM_SCHEMA);

    let config = config_for(root.path());
    GenerateCommand::new(config.clone()).execute().unwrap();

    let user = fs::read_to_string(config.output_dir.join("user.ts")).unwrap();
    assert!(user.starts_with(
        "import { ColumnDef, FilterField, Action } from '../datatable'\n"
    ));
    assert!(user.contains("export interface User {\n    name: string;\n    role: string;\n}"));
    assert!(user.contains(
        "{header: \"Name\", accessorKey: \"name\", type: \"string\", showOnMobile: true},"
    ));
    assert!(user.contains(
        "{header: \"Role\", accessorKey: \"role\", type: \"badge\", showOnMobile: false, \
         formatFn: color_map, formatOptions: {\"Admin\":\"bg-green-500\"}},"
    ));
    assert!(user.contains(
        "{key: \"role\", label: \"role\", type: \"select\", options: [\"Admin\",\"Moderator\"]},"
    ));
    assert!(user.contains("{label: \"View\", function: \"modal_view_entry\"},"));

    let item = fs::read_to_string(config.output_dir.join("item.ts")).unwrap();
    assert!(item.contains("export interface Item {\n    title: string;\n}"));
    assert!(item.contains("export const ItemActions = [\n];"));

    let index = fs::read_to_string(&config.index_file).unwrap();
    assert_eq!(index, "export * from './item';\nexport * from './user';\n");
}

/// The index is identical regardless of the order schemas were written in
#[test]
fn test_index_is_reproducible() {
    let root = TempDir::new().unwrap();
    let schema_dir = root.path().join("schemas");
    fs::create_dir_all(&schema_dir).unwrap();
    write_schema(&schema_dir, "zeta.json", ITEM_SCHEMA);
    write_schema(&schema_dir, "alpha.json", ITEM_SCHEMA);

    let config = config_for(root.path());
    GenerateCommand::new(config.clone()).execute().unwrap();
    let first = fs::read_to_string(&config.index_file).unwrap();

    GenerateCommand::new(config.clone()).execute().unwrap();
    let second = fs::read_to_string(&config.index_file).unwrap();

    assert_eq!(first, second);
    assert_eq!(first, "export * from './alpha';\nexport * from './zeta';\n");
}

/// Files without the schema extension are ignored entirely
#[test]
fn test_non_schema_files_are_ignored() {
    let root = TempDir::new().unwrap();
    let schema_dir = root.path().join("schemas");
    fs::create_dir_all(&schema_dir).unwrap();
    write_schema(&schema_dir, "item.json", ITEM_SCHEMA);
    write_schema(&schema_dir, "README.md", "not a schema");

    let config = config_for(root.path());
    GenerateCommand::new(config.clone()).execute().unwrap();

    assert!(config.output_dir.join("item.ts").exists());
    assert!(!config.output_dir.join("README.ts").exists());
}

/// A schema that fails to parse produces no output file, does not disturb
/// the rest of the run, and makes the run exit non-zero
#[test]
fn test_broken_schema_is_skipped_and_reported() {
    let root = TempDir::new().unwrap();
    let schema_dir = root.path().join("schemas");
    fs::create_dir_all(&schema_dir).unwrap();
    write_schema(&schema_dir, "broken.json", "{ this is not json");
    write_schema(&schema_dir, "item.json", ITEM_SCHEMA);

    let config = config_for(root.path());
    let result = GenerateCommand::new(config.clone()).execute();

    assert!(result.is_err());
    assert!(!config.output_dir.join("broken.ts").exists());
    assert!(config.output_dir.join("item.ts").exists());

    let index = fs::read_to_string(&config.index_file).unwrap();
    assert_eq!(index, "export * from './item';\n");
}

/// A select filter without options is a schema error, not an empty list
#[test]
fn test_select_without_options_fails_that_schema_only() {
    let root = TempDir::new().unwrap();
    let schema_dir = root.path().join("schemas");
    fs::create_dir_all(&schema_dir).unwrap();
    write_schema(
        &schema_dir,
        "bad_select.json",
        r#"{
            "name": "Bad",
            "properties": {
                "role": {
                    "type": "string",
                    "table_header": "Role",
                    "table_type": "string",
                    "show_on_mobile": true,
                    "is_filter_field": true,
                    "filter_field_type": "select"
                }
            }
        }"#,
    );
    write_schema(&schema_dir, "item.json", ITEM_SCHEMA);

    let config = config_for(root.path());
    let result = GenerateCommand::new(config.clone()).execute();

    assert!(result.is_err());
    assert!(!config.output_dir.join("bad_select.ts").exists());
    assert!(config.output_dir.join("item.ts").exists());
}

/// Zero generated modules means no index file at all
#[test]
fn test_empty_schema_dir_writes_no_index() {
    let root = TempDir::new().unwrap();
    let schema_dir = root.path().join("schemas");
    fs::create_dir_all(&schema_dir).unwrap();

    let config = config_for(root.path());
    GenerateCommand::new(config.clone()).execute().unwrap();

    assert!(!config.index_file.exists());
}

/// An inaccessible input directory aborts the run
#[test]
fn test_missing_schema_dir_aborts() {
    let root = TempDir::new().unwrap();

    let config = config_for(root.path());
    let result = GenerateCommand::new(config).execute();

    assert!(result.is_err());
}

/// Check validates without writing anything
#[test]
fn test_check_writes_nothing() {
    let root = TempDir::new().unwrap();
    let schema_dir = root.path().join("schemas");
    fs::create_dir_all(&schema_dir).unwrap();
    write_schema(&schema_dir, "item.json", ITEM_SCHEMA);

    let config = config_for(root.path());
    CheckCommand::new(config.clone()).execute().unwrap();

    assert!(!config.output_dir.exists());
}

/// Check fails on the same errors generate would fail on
#[test]
fn test_check_reports_schema_errors() {
    let root = TempDir::new().unwrap();
    let schema_dir = root.path().join("schemas");
    fs::create_dir_all(&schema_dir).unwrap();
    write_schema(&schema_dir, "broken.json", "[1, 2");

    let config = config_for(root.path());
    let result = CheckCommand::new(config).execute();

    assert!(result.is_err());
}
