use mytable::{parse, parse_standard, rewrite, transpile, Config, EmitConfig, Order, ParseConfig};
use pretty_assertions::assert_eq;

use std::collections::HashSet;

const CATALOG: &str = include_str!("fixtures/catalog.sql");
const CATALOG_CONFIG: &str = include_str!("fixtures/catalog.toml");
const CATALOG_EXPECTED: &str = include_str!("fixtures/catalog.expected.sql");
const SCENARIO_A: &str = include_str!("fixtures/scenario_a.sql");
const SCENARIO_B: &str = include_str!("fixtures/scenario_b.sql");
const SCENARIO_D: &str = include_str!("fixtures/scenario_d.sql");

// Keys and indexes declared on relationship columns
const KEYED: &str = "
CREATE TABLE Orders (
    id INT,
    owner Customer,
    code VARCHAR(8),
    tags List<String> DEFAULT '[]',
    PRIMARY KEY (id),
    UNIQUE KEY uk_owner_code (owner, code),
    INDEX (owner),
    __common_code (owner)
);
CREATE TABLE Customer (id BIGINT PRIMARY KEY, lines List<Line>, buyer Customer UNIQUE);
CREATE TABLE Line (id INT PRIMARY KEY);
";

fn catalog_config() -> Config {
    CATALOG_CONFIG.parse().unwrap()
}

#[test]
fn catalog_script() {
    let output = transpile(CATALOG, &catalog_config()).unwrap();
    assert_eq!(output, CATALOG_EXPECTED);
}

#[test]
fn scenario_a_link_table() {
    let tables = rewrite(SCENARIO_A, &Config::default()).unwrap();
    let names: HashSet<_> = tables.iter().map(|table| table.name.as_str()).collect();

    assert_eq!(names, HashSet::from(["Parent", "Child", "Parent_children"]));

    let parent = tables.iter().find(|table| table.name == "Parent").unwrap();
    assert_eq!(parent.columns.len(), 1);
}

#[test]
fn scenario_b_single_association_table() {
    let output = transpile(SCENARIO_B, &Config::default()).unwrap();

    assert_eq!(output.matches("CREATE TABLE `Child_Parent_assoc`").count(), 1);
    assert_eq!(output.matches("_assoc`").count(), 1);
    assert!(output.contains("`children` JSON NULL"));
    assert!(output.contains("`parents` JSON NULL"));
}

#[test]
fn scenario_c_unresolved_type_produces_no_output() {
    let err = transpile(
        "CREATE TABLE Orders (id INT PRIMARY KEY, item Item);
         CREATE TABLE Other (id INT PRIMARY KEY);",
        &Config::default(),
    )
    .unwrap_err();

    assert!(err.is_unresolved_type());
    assert_eq!(err.table(), Some("Orders"));
    assert_eq!(err.field(), Some("item"));
}

#[test]
fn scenario_d_lift_and_blob() {
    let output = transpile(SCENARIO_D, &Config::default()).unwrap();

    assert_eq!(
        output,
        "CREATE TABLE `Event` (
    `id` INT NOT NULL,
    `title` VARCHAR(128) NOT NULL COMMENT 'from customObject.title',
    `customObject` JSON NULL,
    `attrs` JSON NULL,
    PRIMARY KEY (`id`)
);
"
    );
}

#[test]
fn promoted_columns_pass_through() {
    let input = parse(SCENARIO_D, &ParseConfig::default()).unwrap();
    let output = rewrite(SCENARIO_D, &Config::default()).unwrap();

    let declared = input[0].column("title").unwrap();
    let promoted = output[0].column("title").unwrap();

    assert_eq!(promoted.name, declared.name);
    assert_eq!(promoted.ty, declared.ty);
    assert_eq!(promoted.nullable, declared.nullable);
}

#[test]
fn output_reparses_as_standard_sql() {
    let fixtures = [
        (CATALOG, catalog_config()),
        (SCENARIO_A, Config::default()),
        (SCENARIO_B, Config::default()),
        (SCENARIO_D, Config::default()),
        (KEYED, Config::default()),
    ];

    for (src, config) in fixtures {
        for emit in [
            EmitConfig::default(),
            EmitConfig::new().order(Order::Dependency).drop_tables(true, false),
        ] {
            let config = config.clone().emit(emit);
            let output = transpile(src, &config).unwrap();
            let tables = rewrite(src, &config).unwrap();

            let reparsed = parse_standard(&output).unwrap();
            assert_eq!(reparsed.len(), tables.len());
        }
    }
}

#[test]
fn association_tables_reference_existing_tables() {
    let tables = rewrite(CATALOG, &catalog_config()).unwrap();
    let names: HashSet<_> = tables.iter().map(|table| table.name.as_str()).collect();

    let assoc_tables: Vec<_> = tables
        .iter()
        .filter(|table| table.name.ends_with("_assoc"))
        .collect();
    assert_eq!(assoc_tables.len(), 1);

    for table in assoc_tables {
        for column in &table.columns {
            let Some(target) = column.name.strip_suffix("_code") else {
                continue;
            };
            let target = target.strip_prefix("related_").unwrap_or(target);
            assert!(names.contains(target), "{}.{}", table.name, column.name);
        }
    }
}

#[test]
fn no_list_columns_survive() {
    let tables = rewrite(CATALOG, &catalog_config()).unwrap();

    for table in &tables {
        for column in &table.columns {
            assert!(
                !column.ty.is_container(),
                "{}.{} is {}",
                table.name,
                column.name,
                column.ty
            );
        }
    }
}

#[test]
fn syntax_errors_fail_the_whole_run() {
    let err = transpile(
        "CREATE TABLE a (id INT);
         CREATE TABLE b (id INT NOT);
         CREATE TABLE c (id INT,, x INT);",
        &Config::default(),
    )
    .unwrap_err();

    assert!(err.is_syntax());
    assert_eq!(err.diagnostics().len(), 2);
    assert_eq!(err.statement(), Some(1));
}

#[test]
fn empty_input() {
    assert_eq!(transpile("", &Config::default()).unwrap(), "");
    assert_eq!(
        transpile("SET NAMES utf8mb4;\nDROP TABLE x;\n", &Config::default()).unwrap(),
        ""
    );
}

#[test]
fn keys_on_relationship_columns() {
    let output = transpile(KEYED, &Config::default()).unwrap();

    assert!(output.contains("UNIQUE KEY `uk_owner_code` (`owner_id`, `code`)"));
    assert!(output.contains("INDEX (`owner_id`)"));
    assert!(output.contains("`buyer_id` BIGINT NULL UNIQUE"));
    assert!(output.contains("`tags` JSON NULL,"));

    let reparsed = parse_standard(&output).unwrap();
    let orders = &reparsed[0];
    assert_eq!(orders.common_code, None);
    assert!(orders.has_column("owner_id"));
    assert!(!orders.has_column("owner"));
}

#[test]
fn index_on_link_column_fails() {
    let err = transpile(
        "CREATE TABLE Parent (id INT PRIMARY KEY, children List<Child>, INDEX idx (children));
         CREATE TABLE Child (id INT PRIMARY KEY);",
        &Config::default(),
    )
    .unwrap_err();

    assert!(err.is_invalid_relation());
    assert_eq!(err.field(), Some("children"));
}
