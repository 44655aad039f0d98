use mytable_core::{parse, schema::TableStatement, ParseConfig, RewriteConfig, Rewriter, TypeRegistry};
use mytable_sql::{emit, EmitConfig, JsonType, Order, Serializer, Statement};
use pretty_assertions::assert_eq;

fn parsed(src: &str) -> Vec<TableStatement> {
    parse(src, &ParseConfig::default()).unwrap()
}

fn rewritten(src: &str) -> Vec<TableStatement> {
    let statements = parsed(src);
    let registry = TypeRegistry::register(&statements).unwrap();
    let config = RewriteConfig::default();
    Rewriter::new(&registry, &config).rewrite(&statements).unwrap()
}

#[test]
fn link_table_script() {
    let tables = rewritten(
        "CREATE TABLE Parent (id INT PRIMARY KEY, children List<Child>);
         CREATE TABLE Child (id INT PRIMARY KEY);",
    );

    assert_eq!(
        emit(&tables, &EmitConfig::default()),
        "CREATE TABLE `Parent` (
    `id` INT NOT NULL PRIMARY KEY
);

-- Generated from template table 'Parent', for Parent.children
CREATE TABLE `Parent_children` (
    `id` INT NOT NULL AUTO_INCREMENT,
    `Parent_id` INT NULL,
    PRIMARY KEY (`id`),
    CONSTRAINT `children` FOREIGN KEY (`Parent_id`) REFERENCES `Parent` (`id`)
);

CREATE TABLE `Child` (
    `id` INT NOT NULL PRIMARY KEY
);
"
    );
}

#[test]
fn column_attributes_and_options() {
    let tables = parsed(
        "CREATE TABLE `user` (
            id INT UNSIGNED NOT NULL AUTO_INCREMENT,
            name VARCHAR(64) CHARACTER SET utf8mb4 COLLATE utf8mb4_bin NOT NULL DEFAULT '' COMMENT 'it''s',
            status ENUM('a','b') DEFAULT 'a',
            updated_at TIMESTAMP(3) NULL DEFAULT CURRENT_TIMESTAMP(3) ON UPDATE CURRENT_TIMESTAMP(3),
            KEY idx_name (name(10)),
            UNIQUE KEY (status),
            PRIMARY KEY (id)
        ) ENGINE=InnoDB ROW_FORMAT=DYNAMIC DEFAULT CHARSET=utf8mb4 COMMENT='people';",
    );

    assert_eq!(
        emit(&tables, &EmitConfig::default()),
        "CREATE TABLE `user` (
    `id` INT UNSIGNED NOT NULL AUTO_INCREMENT,
    `name` VARCHAR(64) CHARACTER SET utf8mb4 COLLATE utf8mb4_bin NOT NULL DEFAULT '' COMMENT 'it''s',
    `status` ENUM('a', 'b') NULL DEFAULT 'a',
    `updated_at` TIMESTAMP(3) NULL DEFAULT CURRENT_TIMESTAMP(3) ON UPDATE CURRENT_TIMESTAMP(3),
    PRIMARY KEY (`id`),
    UNIQUE KEY (`status`),
    INDEX `idx_name` (`name`(10))
) ENGINE = InnoDB DEFAULT CHARSET = utf8mb4 ROW_FORMAT = DYNAMIC COMMENT = 'people';
"
    );
}

#[test]
fn association_and_json_columns() {
    let tables = rewritten(
        "CREATE TABLE Parent (
            id INT PRIMARY KEY,
            code VARCHAR(32),
            children List<String> __assoc Child.code
        );
        CREATE TABLE Child (
            id INT PRIMARY KEY,
            code VARCHAR(32),
            parents List<String> __assoc Parent.code
        );",
    );

    assert_eq!(
        emit(&tables, &EmitConfig::new().json_type(JsonType::Mediumtext)),
        "CREATE TABLE `Parent` (
    `id` INT NOT NULL PRIMARY KEY,
    `code` VARCHAR(32) NULL,
    `children` MEDIUMTEXT NULL
);

CREATE TABLE `Child` (
    `id` INT NOT NULL PRIMARY KEY,
    `code` VARCHAR(32) NULL,
    `parents` MEDIUMTEXT NULL
);

-- Generated from template table 'Parent', for Parent.children
CREATE TABLE `Child_Parent_assoc` (
    `id` INT NOT NULL AUTO_INCREMENT,
    `Child_code` VARCHAR(32) NULL,
    `Parent_code` VARCHAR(32) NULL,
    PRIMARY KEY (`id`)
);
"
    );
}

#[test]
fn embedded_reference_cascades() {
    let tables = rewritten(
        "CREATE TABLE Orders (id INT PRIMARY KEY, customer Customer COMMENT 'buyer');
         CREATE TABLE Customer (id BIGINT PRIMARY KEY);",
    );

    assert_eq!(
        emit(&tables[..1], &EmitConfig::default()),
        "CREATE TABLE `Orders` (
    `id` INT NOT NULL PRIMARY KEY,
    `customer_id` BIGINT NULL COMMENT 'buyer',
    CONSTRAINT `customer` FOREIGN KEY (`customer_id`) REFERENCES `Customer` (`id`) ON DELETE CASCADE
);
"
    );
}

#[test]
fn common_code_gets_an_index() {
    let tables = parsed(
        "CREATE TABLE Tag (id INT, code VARCHAR(16), PRIMARY KEY (id), __common_code (code));
         CREATE TABLE Kind (id INT, code VARCHAR(16) UNIQUE, PRIMARY KEY (id), __common_code (code));",
    );

    assert_eq!(
        emit(&tables, &EmitConfig::default()),
        "CREATE TABLE `Tag` (
    `id` INT NOT NULL,
    `code` VARCHAR(16) NULL,
    PRIMARY KEY (`id`),
    INDEX (`code`)
);

CREATE TABLE `Kind` (
    `id` INT NOT NULL,
    `code` VARCHAR(16) NULL UNIQUE,
    PRIMARY KEY (`id`)
);
"
    );
}

#[test]
fn drops_in_reverse_order() {
    let tables = parsed(
        "CREATE TABLE a (id INT);
         CREATE TABLE b (id INT);",
    );

    let config = EmitConfig::new().if_not_exists(true).drop_tables(true, true);

    assert_eq!(
        emit(&tables, &config),
        "DROP TABLE IF EXISTS `b` CASCADE;

DROP TABLE IF EXISTS `a` CASCADE;

CREATE TABLE IF NOT EXISTS `a` (
    `id` INT NULL
);

CREATE TABLE IF NOT EXISTS `b` (
    `id` INT NULL
);
"
    );
}

#[test]
fn dependency_order() {
    let tables = rewritten(
        "CREATE TABLE Line (id INT PRIMARY KEY, item Item);
         CREATE TABLE Item (id INT PRIMARY KEY, vendor Vendor);
         CREATE TABLE Vendor (id INT PRIMARY KEY);",
    );

    let script = emit(&tables, &EmitConfig::new().order(Order::Dependency));
    let creates: Vec<_> = script
        .lines()
        .filter_map(|line| line.strip_prefix("CREATE TABLE "))
        .collect();

    assert_eq!(creates, ["`Vendor` (", "`Item` (", "`Line` ("]);
}

#[test]
fn quoted_identifiers() {
    let tables = parsed("CREATE TABLE `we``ird` (`a``b` INT);");

    assert_eq!(
        emit(&tables, &EmitConfig::default()),
        "CREATE TABLE `we``ird` (
    `a``b` INT NULL
);
"
    );
}

#[test]
fn empty_input_renders_nothing() {
    assert_eq!(emit(&[], &EmitConfig::default()), "");
}

#[test]
fn serialize_single_statement() {
    let tables = parsed("CREATE TABLE a (id INT);");
    let config = EmitConfig::default();

    let serializer = Serializer::new(&config);
    assert_eq!(
        serializer.serialize(&Statement::drop_table(&tables[0])),
        "DROP TABLE `a`;"
    );
    assert_eq!(
        serializer.serialize(&Statement::drop_table_if_exists(&tables[0])),
        "DROP TABLE IF EXISTS `a`;"
    );
}
