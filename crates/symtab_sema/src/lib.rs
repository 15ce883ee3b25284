//! Symtab Semantic Analysis
//!
//! 语义分析阶段使用的带作用域符号表，负责：
//! - 记录声明 (declare)
//! - 按词法作用域解析名称 (lookup)
//! - 管理作用域生命周期 (enter_scope / exit_scope / reset)
//!
//! # 示例
//!
//! ```rust
//! use symtab_sema::ScopedSymbolTable;
//!
//! let mut table = ScopedSymbolTable::new();
//! table.declare("x", "int").unwrap();
//!
//! table.enter_scope();
//! table.declare("x", "float").unwrap();
//! assert_eq!(table.lookup("x").unwrap().kind(), "float");
//!
//! table.exit_scope().unwrap();
//! assert_eq!(table.lookup("x").unwrap().kind(), "int");
//! ```

pub mod config;
pub mod error;
pub mod scope;
pub mod symbol;
pub mod table;

// 重新导出核心类型
pub use config::{RedeclarationPolicy, TableConfig};
pub use error::SymbolTableError;
pub use scope::{Scope, ScopeKind, ScopeStack};
pub use symbol::{ScopeLevel, SymbolRecord};
pub use table::ScopedSymbolTable;
