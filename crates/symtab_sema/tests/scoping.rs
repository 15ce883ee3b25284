use symtab_sema::{
    RedeclarationPolicy, ScopeKind, ScopedSymbolTable, SymbolTableError, TableConfig,
};

fn entries(table: &ScopedSymbolTable) -> Vec<(String, String, usize)> {
    table
        .dump()
        .into_iter()
        .map(|r| (r.name().to_string(), r.kind().to_string(), r.scope_level()))
        .collect()
}

fn entry(name: &str, kind: &str, level: usize) -> (String, String, usize) {
    (name.to_string(), kind.to_string(), level)
}

#[test]
fn test_level_tracks_open_scopes() {
    let mut table = ScopedSymbolTable::new();
    assert_eq!(table.current_level(), 0);

    // enter x3, exit, enter x2, exit x4
    let script = [true, true, true, false, true, true, false, false, false, false];
    let mut open = 0usize;
    for enter in script {
        if enter {
            open += 1;
            assert_eq!(table.enter_scope(), open);
        } else {
            open -= 1;
            table.exit_scope().unwrap();
        }
        assert_eq!(table.current_level(), open);
        assert_eq!(table.depth(), open + 1);
    }
}

#[test]
fn test_declare_visible_in_same_scope() {
    let mut table = ScopedSymbolTable::new();
    table.enter_scope();
    table.enter_scope();

    let declared = table.declare("counter", "int").unwrap();
    assert_eq!(declared.scope_level(), 2);

    let found = table.lookup("counter").unwrap();
    assert_eq!(found.kind(), "int");
    assert_eq!(found.scope_level(), 2);
    assert_eq!(found, &declared);
}

#[test]
fn test_shadowing_and_restore() {
    let mut table = ScopedSymbolTable::new();
    table.declare("x", "int").unwrap();

    table.enter_scope();
    table.declare("x", "float").unwrap();
    let inner = table.lookup("x").unwrap();
    assert_eq!((inner.kind(), inner.scope_level()), ("float", 1));

    table.exit_scope().unwrap();
    let outer = table.lookup("x").unwrap();
    assert_eq!((outer.kind(), outer.scope_level()), ("int", 0));
}

#[test]
fn test_inner_names_disappear_on_exit() {
    let mut table = ScopedSymbolTable::new();
    table.enter_scope_kind(ScopeKind::Function);
    table.declare("param", "int").unwrap();
    table.enter_scope();
    table.declare("tmp", "bool").unwrap();

    assert!(table.lookup("param").is_some());
    table.exit_scope().unwrap();
    assert!(table.lookup("tmp").is_none());
    assert!(table.lookup("param").is_some());
    table.exit_scope().unwrap();
    assert!(table.lookup("param").is_none());
    assert!(table.is_empty());
}

#[test]
fn test_duplicate_leaves_table_unchanged() {
    let mut table = ScopedSymbolTable::new();
    table.declare("a", "int").unwrap();
    table.declare("x", "int").unwrap();
    let before = entries(&table);

    let err = table.declare("x", "float").unwrap_err();
    assert!(matches!(
        err,
        SymbolTableError::DuplicateDeclaration { ref name, level: 0, .. } if name == "x"
    ));
    assert_eq!(entries(&table), before);
}

#[test]
fn test_redeclaring_after_scope_change_is_allowed() {
    let mut table = ScopedSymbolTable::new();
    table.enter_scope();
    table.declare("i", "int").unwrap();
    table.exit_scope().unwrap();

    table.enter_scope();
    assert!(table.declare("i", "int").is_ok());
}

#[test]
fn test_underflow_keeps_global_bindings() {
    let mut table = ScopedSymbolTable::new();
    table.declare("main", "fn() -> int").unwrap();
    table.enter_scope();
    table.exit_scope().unwrap();

    for _ in 0..3 {
        assert!(matches!(
            table.exit_scope(),
            Err(SymbolTableError::ScopeUnderflow { .. })
        ));
    }
    assert_eq!(table.depth(), 1);
    assert_eq!(table.current_scope_kind(), ScopeKind::Global);
    assert_eq!(entries(&table), vec![entry("main", "fn() -> int", 0)]);
}

#[test]
fn test_reset_restores_empty_global() {
    let config = TableConfig::new().with_redeclaration(RedeclarationPolicy::Replace);
    let mut table = ScopedSymbolTable::with_config(config);
    table.declare("g", "int").unwrap();
    table.enter_scope_kind(ScopeKind::Function);
    table.declare("l", "float").unwrap();
    table.enter_scope();

    table.reset();

    assert_eq!(table.depth(), 1);
    assert_eq!(table.current_level(), 0);
    assert_eq!(table.current_scope_kind(), ScopeKind::Global);
    assert!(table.is_empty());
    assert!(table.dump().is_empty());
    assert!(table.lookup("g").is_none());
    assert_eq!(table.config().redeclaration, RedeclarationPolicy::Replace);
}

#[test]
fn test_dump_order() {
    let mut table = ScopedSymbolTable::new();
    table.declare("b", "int").unwrap();
    table.declare("a", "int").unwrap();
    table.enter_scope();
    table.declare("z", "bool").unwrap();
    table.declare("b", "float").unwrap();

    assert_eq!(
        entries(&table),
        vec![
            entry("b", "int", 0),
            entry("a", "int", 0),
            entry("z", "bool", 1),
            entry("b", "float", 1),
        ]
    );
}

#[test]
fn test_independent_tables() {
    let mut first = ScopedSymbolTable::new();
    let second = ScopedSymbolTable::new();
    first.declare("x", "int").unwrap();

    assert!(second.lookup("x").is_none());
}

#[test]
fn test_int_float_scenario() {
    let mut table = ScopedSymbolTable::new();
    table.declare("x", "int").unwrap();
    table.enter_scope();
    table.declare("x", "float").unwrap();

    let x = table.lookup("x").unwrap();
    assert_eq!(x.kind(), "float");
    assert_eq!(x.scope_level(), 1);

    table.exit_scope().unwrap();
    let x = table.lookup("x").unwrap();
    assert_eq!(x.kind(), "int");
    assert_eq!(x.scope_level(), 0);
}
