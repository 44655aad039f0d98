use mytable_core::{
    parse,
    schema::{ForeignKey, KeyPart, ReferentialAction, TableConstraint, TableStatement, TypeRef},
    ParseConfig, RewriteConfig, Rewriter, TypeRegistry,
};
use pretty_assertions::assert_eq;

fn rewrite_with(src: &str, config: &RewriteConfig) -> mytable_core::Result<Vec<TableStatement>> {
    let statements = parse(src, &ParseConfig::default())?;
    let registry = TypeRegistry::register(&statements)?;
    Rewriter::new(&registry, config).rewrite(&statements)
}

fn rewrite(src: &str) -> Vec<TableStatement> {
    rewrite_with(src, &RewriteConfig::default()).unwrap()
}

fn names(tables: &[TableStatement]) -> Vec<&str> {
    tables.iter().map(|table| table.name.as_str()).collect()
}

fn columns(table: &TableStatement) -> Vec<(&str, String, bool)> {
    table
        .columns
        .iter()
        .map(|column| (column.name.as_str(), column.ty.to_string(), column.nullable))
        .collect()
}

fn table<'a>(tables: &'a [TableStatement], name: &str) -> &'a TableStatement {
    tables
        .iter()
        .find(|table| table.name == name)
        .unwrap_or_else(|| panic!("missing table `{name}`"))
}

#[test]
fn one_to_many_link_table() {
    let tables = rewrite(
        "CREATE TABLE Parent (id INT PRIMARY KEY, children List<Child>);
         CREATE TABLE Child (id INT PRIMARY KEY);",
    );

    assert_eq!(names(&tables), ["Parent", "Parent_children", "Child"]);
    assert_eq!(columns(&tables[0]), [("id", "INT".to_string(), false)]);

    let link = &tables[1];
    assert_eq!(
        columns(link),
        [
            ("id", "INT".to_string(), false),
            ("Parent_id", "INT".to_string(), true),
        ]
    );
    assert!(link.columns[0].modifiers.auto_increment);
    assert_eq!(
        link.constraints,
        vec![
            TableConstraint::PrimaryKey {
                columns: vec![KeyPart::new("id")],
            },
            TableConstraint::ForeignKey(ForeignKey {
                name: Some("children".to_string()),
                columns: vec!["Parent_id".to_string()],
                ref_table: "Parent".to_string(),
                ref_columns: vec!["id".to_string()],
                on_delete: None,
                on_update: None,
            }),
        ]
    );

    let provenance = link.provenance.as_ref().unwrap();
    assert_eq!(provenance.table, "Parent");
    assert_eq!(provenance.field, "children");
}

#[test]
fn reciprocal_association_is_emitted_once() {
    let tables = rewrite(
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

    assert_eq!(names(&tables), ["Parent", "Child", "Child_Parent_assoc"]);

    assert_eq!(table(&tables, "Parent").column("children").unwrap().ty, TypeRef::json());
    assert_eq!(table(&tables, "Child").column("parents").unwrap().ty, TypeRef::json());
    assert!(table(&tables, "Parent")
        .column("children")
        .unwrap()
        .modifiers
        .assoc
        .is_none());

    let assoc = table(&tables, "Child_Parent_assoc");
    assert_eq!(
        columns(assoc),
        [
            ("id", "INT".to_string(), false),
            ("Child_code", "VARCHAR(32)".to_string(), true),
            ("Parent_code", "VARCHAR(32)".to_string(), true),
        ]
    );

    // Business codes are soft references
    assert_eq!(assoc.references().count(), 0);
    assert_eq!(assoc.primary_key(), vec!["id"]);
}

#[test]
fn association_follows_later_table() {
    let tables = rewrite(
        "CREATE TABLE Tag (id INT PRIMARY KEY, name VARCHAR(16), __common_code (name));
         CREATE TABLE Post (id INT PRIMARY KEY, tags List<String> __assoc Tag.name);
         CREATE TABLE Author (id INT PRIMARY KEY);",
    );

    assert_eq!(names(&tables), ["Tag", "Post", "Post_Tag_assoc", "Author"]);

    // Post has no common code, so its side falls back to the primary key
    assert_eq!(
        columns(&tables[2]),
        [
            ("id", "INT".to_string(), false),
            ("Post_code", "INT".to_string(), true),
            ("Tag_code", "VARCHAR(16)".to_string(), true),
        ]
    );
}

#[test]
fn self_association() {
    let tables = rewrite(
        "CREATE TABLE Person (
            id INT PRIMARY KEY,
            code VARCHAR(16),
            friends List<String> __assoc Person.code
        );",
    );

    assert_eq!(names(&tables), ["Person", "Person_Person_assoc"]);
    assert_eq!(
        columns(&tables[1]),
        [
            ("id", "INT".to_string(), false),
            ("Person_code", "VARCHAR(16)".to_string(), true),
            ("related_Person_code", "VARCHAR(16)".to_string(), true),
        ]
    );
}

#[test]
fn conflicting_association_keys() {
    let err = rewrite_with(
        "CREATE TABLE A (
            id INT PRIMARY KEY,
            code VARCHAR(8),
            by_code List<String> __assoc B.code,
            by_name List<String> __assoc B.name
        );
        CREATE TABLE B (id INT PRIMARY KEY, code VARCHAR(8), name VARCHAR(8));",
        &RewriteConfig::default(),
    )
    .unwrap_err();

    assert!(err.is_duplicate_association());
    assert_eq!(err.to_string(), "duplicate association table `A_B_assoc` for pair (A, B)");
}

#[test]
fn association_name_taken_by_declared_table() {
    let err = rewrite_with(
        "CREATE TABLE A (id INT PRIMARY KEY, bs List<String> __assoc B.id);
         CREATE TABLE B (id INT PRIMARY KEY);
         CREATE TABLE A_B_assoc (id INT PRIMARY KEY);",
        &RewriteConfig::default(),
    )
    .unwrap_err();

    assert!(err.is_duplicate_association());
}

#[test]
fn association_target_column_must_exist() {
    let err = rewrite_with(
        "CREATE TABLE A (id INT PRIMARY KEY, bs List<String> __assoc B.code);
         CREATE TABLE B (id INT PRIMARY KEY);",
        &RewriteConfig::default(),
    )
    .unwrap_err();

    assert!(err.is_unresolved_type());
    assert_eq!(err.to_string(), "unresolved type `B.code` referenced by `A.bs`");
}

#[test]
fn unresolved_embedded_type() {
    let err = rewrite_with(
        "CREATE TABLE Orders (id INT PRIMARY KEY, item Item);",
        &RewriteConfig::default(),
    )
    .unwrap_err();

    assert!(err.is_unresolved_type());
    assert_eq!(err.table(), Some("Orders"));
    assert_eq!(err.field(), Some("item"));
}

#[test]
fn unresolved_list_type() {
    let err = rewrite_with(
        "CREATE TABLE Orders (id INT PRIMARY KEY, items List<Item>);",
        &RewriteConfig::default(),
    )
    .unwrap_err();

    assert!(err.is_unresolved_type());
    assert_eq!(err.to_string(), "unresolved type `Item` referenced by `Orders.items`");
}

#[test]
fn link_table_name_collision() {
    let err = rewrite_with(
        "CREATE TABLE Parent (id INT PRIMARY KEY, children List<Child>);
         CREATE TABLE Child (id INT PRIMARY KEY);
         CREATE TABLE Parent_children (id INT PRIMARY KEY);",
        &RewriteConfig::default(),
    )
    .unwrap_err();

    assert!(err.is_duplicate_type());
    assert_eq!(err.table(), Some("Parent_children"));
}

#[test]
fn duplicate_table_types() {
    let statements = parse(
        "CREATE TABLE A (id INT);
         DROP TABLE B;
         CREATE TABLE A (id BIGINT);",
        &ParseConfig::default(),
    )
    .unwrap();

    let err = TypeRegistry::register(&statements).unwrap_err();
    assert!(err.is_duplicate_type());
    assert_eq!(err.statement(), Some(2));
}

#[test]
fn forward_references_resolve() {
    let statements = parse(
        "CREATE TABLE A (id INT PRIMARY KEY, b B);
         CREATE TABLE B (id INT PRIMARY KEY);",
        &ParseConfig::default(),
    )
    .unwrap();

    let registry = TypeRegistry::register(&statements).unwrap();
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.names().collect::<Vec<_>>(), ["A", "B"]);
    assert!(registry.resolve("B").is_some());
    assert!(registry.resolve("b").is_none());
}

#[test]
fn embedded_reference() {
    let tables = rewrite(
        "CREATE TABLE Orders (
            id INT PRIMARY KEY,
            customer Customer NOT NULL COMMENT 'buyer'
        );
        CREATE TABLE Customer (id BIGINT PRIMARY KEY);",
    );

    let orders = &tables[0];
    assert_eq!(
        columns(orders),
        [
            ("id", "INT".to_string(), false),
            ("customer_id", "BIGINT".to_string(), false),
        ]
    );
    assert_eq!(orders.columns[1].comment.as_deref(), Some("buyer"));
    assert_eq!(
        orders.constraints,
        vec![TableConstraint::ForeignKey(ForeignKey {
            name: Some("customer".to_string()),
            columns: vec!["customer_id".to_string()],
            ref_table: "Customer".to_string(),
            ref_columns: vec!["id".to_string()],
            on_delete: Some(ReferentialAction::Cascade),
            on_update: None,
        })]
    );
}

#[test]
fn embedded_reference_needs_single_key() {
    let err = rewrite_with(
        "CREATE TABLE Orders (id INT PRIMARY KEY, line Line);
         CREATE TABLE Line (a INT, b INT, PRIMARY KEY (a, b));",
        &RewriteConfig::default(),
    )
    .unwrap_err();

    assert!(err.is_invalid_relation());
    assert_eq!(
        err.to_string(),
        "invalid relation `Orders.line`: table `Line` has no single-column key"
    );
}

#[test]
fn simplified_single_field() {
    let config = RewriteConfig::new().simplify("AmountInput", ["amount"]);
    let tables = rewrite_with(
        "CREATE TABLE AmountInput (id INT PRIMARY KEY, amount BigDecimal, currency VARCHAR(3));
         CREATE TABLE Payment (id INT PRIMARY KEY, total AmountInput COMMENT 'gross');",
        &config,
    )
    .unwrap();

    let payment = table(&tables, "Payment");
    assert_eq!(
        columns(payment),
        [
            ("id", "INT".to_string(), false),
            ("total", "DECIMAL(19, 4)".to_string(), true),
        ]
    );
    assert_eq!(payment.columns[1].comment.as_deref(), Some("gross"));
    assert!(payment.constraints.is_empty());
}

#[test]
fn simplified_several_fields() {
    let config = RewriteConfig::new().simplify("AmountInput", ["amount", "currency"]);
    let tables = rewrite_with(
        "CREATE TABLE AmountInput (id INT PRIMARY KEY, amount BigDecimal, currency VARCHAR(3));
         CREATE TABLE Payment (id INT PRIMARY KEY, total AmountInput);",
        &config,
    )
    .unwrap();

    assert_eq!(
        columns(table(&tables, "Payment")),
        [
            ("id", "INT".to_string(), false),
            ("total_amount", "DECIMAL(19, 4)".to_string(), true),
            ("total_currency", "VARCHAR(3)".to_string(), true),
        ]
    );
}

#[test]
fn simplified_missing_field() {
    let config = RewriteConfig::new().simplify("AmountInput", ["rate"]);
    let err = rewrite_with(
        "CREATE TABLE AmountInput (id INT PRIMARY KEY, amount BigDecimal);
         CREATE TABLE Payment (id INT PRIMARY KEY, total AmountInput);",
        &config,
    )
    .unwrap_err();

    assert!(err.is_unresolved_type());
    assert_eq!(
        err.to_string(),
        "unresolved type `AmountInput.rate` referenced by `Payment.total`"
    );
}

#[test]
fn lift_and_structured_columns() {
    let src = "CREATE TABLE Event (
        id INT PRIMARY KEY,
        name VARCHAR(64) NOT NULL __lift,
        customObject TEXT,
        attrs Map<String, Object>
    );";

    let input = parse(src, &ParseConfig::default()).unwrap();
    let tables = rewrite(src);
    let event = &tables[0];

    assert_eq!(event.column("name"), input[0].column("name"));
    assert_eq!(
        columns(event),
        [
            ("id", "INT".to_string(), false),
            ("name", "VARCHAR(64)".to_string(), false),
            ("customObject", "JSON".to_string(), true),
            ("attrs", "JSON".to_string(), true),
        ]
    );
}

#[test]
fn lifted_structured_column_is_kept() {
    let tables = rewrite("CREATE TABLE Event (id INT PRIMARY KEY, customObject TEXT __lift);");
    assert_eq!(tables[0].columns[1].ty.to_string(), "TEXT");
}

#[test]
fn element_names_map_to_sql() {
    let tables = rewrite(
        "CREATE TABLE Item (
            id Long PRIMARY KEY,
            label String,
            price BigDecimal,
            created LocalDateTime,
            flags List<Integer>
        );",
    );

    assert_eq!(
        columns(&tables[0]),
        [
            ("id", "BIGINT".to_string(), false),
            ("label", "VARCHAR(255)".to_string(), true),
            ("price", "DECIMAL(19, 4)".to_string(), true),
            ("created", "DATETIME".to_string(), true),
            ("flags", "JSON".to_string(), true),
        ]
    );
}

#[test]
fn etl_column_on_every_table() {
    let config = RewriteConfig::new().etl_column("etl_date");
    let tables = rewrite_with(
        "CREATE TABLE Parent (id INT PRIMARY KEY, children List<Child>);
         CREATE TABLE Child (id INT PRIMARY KEY, etl_date DATETIME NOT NULL);",
        &config,
    )
    .unwrap();

    for table in &tables {
        let last = table.columns.last().unwrap();
        assert_eq!(last.name, "etl_date", "{}", table.name);
    }

    // An existing column is left alone
    let child = table(&tables, "Child");
    assert_eq!(child.columns.len(), 2);
    assert!(!child.columns[1].nullable);

    let parent = table(&tables, "Parent");
    assert_eq!(parent.columns[1].ty.to_string(), "DATETIME");
    assert!(parent.columns[1].nullable);
}

#[test]
fn no_list_of_table_type_survives() {
    let tables = rewrite(
        "CREATE TABLE A (id INT PRIMARY KEY, bs List<B>, cs List<C>, tags List<String>);
         CREATE TABLE B (id INT PRIMARY KEY, cs List<C>);
         CREATE TABLE C (id INT PRIMARY KEY);",
    );

    assert_eq!(names(&tables), ["A", "A_bs", "A_cs", "B", "B_cs", "C"]);

    for table in &tables {
        for column in &table.columns {
            assert!(column.ty.list_element().is_none(), "{}.{}", table.name, column.name);
        }
    }
}

fn key_columns(table: &TableStatement) -> Vec<Vec<&str>> {
    table
        .constraints
        .iter()
        .map(TableConstraint::columns)
        .collect()
}

#[test]
fn keys_follow_embedded_references() {
    let tables = rewrite(
        "CREATE TABLE Orders (
            owner Customer,
            code VARCHAR(8),
            PRIMARY KEY (owner),
            UNIQUE KEY uk_code (owner, code),
            INDEX idx_owner (owner),
            FOREIGN KEY (owner) REFERENCES Customer (id),
            __common_code (owner)
        );
        CREATE TABLE Customer (id BIGINT PRIMARY KEY);",
    );

    let orders = table(&tables, "Orders");
    assert_eq!(
        key_columns(orders),
        [
            vec!["owner_id"],
            vec!["owner_id", "code"],
            vec!["owner_id"],
            vec!["owner_id"],
            vec!["owner_id"],
        ]
    );
    assert_eq!(orders.common_code.as_deref(), Some("owner_id"));
    assert!(!orders.column("owner_id").unwrap().nullable);
}

#[test]
fn inline_keys_follow_embedded_references() {
    let tables = rewrite(
        "CREATE TABLE Orders (owner Customer PRIMARY KEY, buyer Customer UNIQUE);
         CREATE TABLE Customer (id BIGINT PRIMARY KEY);",
    );

    let orders = table(&tables, "Orders");
    assert!(orders.column("owner_id").unwrap().modifiers.primary_key);
    assert!(orders.column("buyer_id").unwrap().modifiers.unique);
    assert_eq!(orders.primary_key(), vec!["owner_id"]);
}

#[test]
fn keys_on_link_columns_are_rejected() {
    for element in [
        "INDEX idx (children)",
        "UNIQUE KEY (children)",
        "FOREIGN KEY (children) REFERENCES Child (id)",
        "__common_code (children)",
    ] {
        let src = format!(
            "CREATE TABLE Parent (id INT PRIMARY KEY, children List<Child>, {element});
             CREATE TABLE Child (id INT PRIMARY KEY);"
        );

        let err = rewrite_with(&src, &RewriteConfig::default()).unwrap_err();
        assert!(err.is_invalid_relation(), "{element}: {err}");
        assert_eq!(err.table(), Some("Parent"));
        assert_eq!(err.field(), Some("children"));
    }
}

#[test]
fn keys_on_split_simplified_columns_are_rejected() {
    let config = RewriteConfig::new().simplify("Money", ["amount", "currency"]);

    let err = rewrite_with(
        "CREATE TABLE Invoice (id INT PRIMARY KEY, total Money, INDEX (total));
         CREATE TABLE Money (amount DECIMAL(10, 2), currency CHAR(3));",
        &config,
    )
    .unwrap_err();

    assert!(err.is_invalid_relation());
    assert_eq!(err.field(), Some("total"));
}

#[test]
fn keys_on_json_columns_are_rejected() {
    for src in [
        "CREATE TABLE a (id INT PRIMARY KEY, tags List<String>, INDEX (tags));",
        "CREATE TABLE a (id INT PRIMARY KEY, tags List<String> UNIQUE);",
        "CREATE TABLE a (id INT PRIMARY KEY, customObject TEXT, UNIQUE KEY (customObject(8)));",
        "CREATE TABLE a (id INT PRIMARY KEY, code VARCHAR(8), tags List<String> __assoc B.code, INDEX (tags));
         CREATE TABLE B (id INT PRIMARY KEY, code VARCHAR(8));",
    ] {
        let err = rewrite_with(src, &RewriteConfig::default()).unwrap_err();
        assert!(err.is_invalid_relation(), "{src}: {err}");
        assert_eq!(err.table(), Some("a"));
    }
}

#[test]
fn json_columns_drop_defaults() {
    let tables = rewrite(
        "CREATE TABLE a (id INT PRIMARY KEY, tags List<String> NOT NULL DEFAULT '[]');",
    );

    let tags = tables[0].column("tags").unwrap();
    assert_eq!(tags.ty, TypeRef::json());
    assert_eq!(tags.default, None);
    assert!(!tags.nullable);
}
