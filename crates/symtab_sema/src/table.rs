//! Scoped Symbol Table
//!
//! 语义分析使用的符号表。声明总是落在栈顶作用域，
//! 查找由内向外进行，因此内层声明总是遮蔽外层同名声明。

use crate::config::{RedeclarationPolicy, TableConfig};
use crate::error::SymbolTableError;
use crate::scope::{Scope, ScopeKind, ScopeStack};
use crate::symbol::{ScopeLevel, SymbolRecord};
use log::{debug, trace};
use std::fmt;
use symtab_diagnostics::Span;

/// 带作用域的符号表
///
/// 每个编译单元持有自己的实例，实例之间没有共享状态。
#[derive(Debug, Clone, Default)]
pub struct ScopedSymbolTable {
    scopes: ScopeStack,
    config: TableConfig,
}

impl ScopedSymbolTable {
    /// 创建只包含空全局作用域的符号表
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: TableConfig) -> Self {
        Self {
            scopes: ScopeStack::new(),
            config,
        }
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// 进入块作用域，返回新作用域的层级
    pub fn enter_scope(&mut self) -> ScopeLevel {
        self.enter_scope_kind(ScopeKind::Block)
    }

    /// 进入指定类型的作用域
    pub fn enter_scope_kind(&mut self, kind: ScopeKind) -> ScopeLevel {
        let level = self.scopes.push(kind);
        debug!("enter {} scope (level {})", kind.name(), level);
        level
    }

    /// 退出当前作用域并释放其中的所有绑定
    ///
    /// # Errors
    ///
    /// 只剩全局作用域时返回 [`SymbolTableError::ScopeUnderflow`]，表保持不变。
    pub fn exit_scope(&mut self) -> Result<(), SymbolTableError> {
        match self.scopes.pop() {
            Some(scope) => {
                debug!(
                    "exit {} scope (level {}), dropping {} binding(s)",
                    scope.kind().name(),
                    scope.level(),
                    scope.len()
                );
                Ok(())
            }
            None => Err(SymbolTableError::ScopeUnderflow { span: None }),
        }
    }

    /// 在当前作用域声明标识符，返回新记录的副本
    ///
    /// 外层作用域中的同名声明会被遮蔽；当前作用域中的同名声明按
    /// [`RedeclarationPolicy`] 处理。
    pub fn declare(
        &mut self,
        name: &str,
        kind: &str,
    ) -> Result<SymbolRecord, SymbolTableError> {
        self.insert(name, kind, None)
    }

    /// 同 [`declare`](Self::declare)，并记录声明位置
    pub fn declare_at(
        &mut self,
        name: &str,
        kind: &str,
        span: Span,
    ) -> Result<SymbolRecord, SymbolTableError> {
        self.insert(name, kind, Some(span))
    }

    fn insert(
        &mut self,
        name: &str,
        kind: &str,
        span: Option<Span>,
    ) -> Result<SymbolRecord, SymbolTableError> {
        let level = self.current_level();

        if let Some(existing) = self.scopes.top().lookup_local(name) {
            if self.config.redeclaration == RedeclarationPolicy::Reject {
                return Err(SymbolTableError::DuplicateDeclaration {
                    name: name.to_string(),
                    level,
                    existing: existing.clone(),
                    span,
                });
            }
        }

        let record = SymbolRecord::new(name, kind, level, span);
        if let Some(old) = self.scopes.top_mut().bind(record.clone()) {
            debug!(
                "redeclare '{}' at level {}: '{}' -> '{}'",
                name,
                level,
                old.kind(),
                kind
            );
        } else {
            debug!("declare '{}': {} at level {}", name, kind, level);
        }
        Ok(record)
    }

    /// 查找名字，返回最近的外围声明
    ///
    /// 未找到时返回 `None`；是否作为错误报告由调用方决定。
    pub fn lookup(&self, name: &str) -> Option<&SymbolRecord> {
        let found = self.scopes.lookup(name);
        trace!(
            "lookup '{}' -> {}",
            name,
            found.map_or("miss".to_string(), |r| format!("level {}", r.scope_level()))
        );
        found
    }

    /// 仅在当前作用域查找
    pub fn lookup_local(&self, name: &str) -> Option<&SymbolRecord> {
        self.scopes.top().lookup_local(name)
    }

    /// 仅在全局作用域查找
    pub fn lookup_global(&self, name: &str) -> Option<&SymbolRecord> {
        self.scopes.global().lookup_local(name)
    }

    /// 查找名字，未找到时转换为 [`SymbolTableError::UnresolvedReference`]
    pub fn resolve(
        &self,
        name: &str,
        span: Option<Span>,
    ) -> Result<&SymbolRecord, SymbolTableError> {
        self.lookup(name)
            .ok_or_else(|| SymbolTableError::unresolved(name, span))
    }

    /// 所有存活绑定的快照：外层作用域在前，同一作用域内按声明顺序
    pub fn dump(&self) -> Vec<SymbolRecord> {
        self.scopes
            .iter()
            .flat_map(|scope| scope.records())
            .cloned()
            .collect()
    }

    /// 丢弃所有作用域，恢复到只有空全局作用域的初始状态
    ///
    /// 配置保持不变。
    pub fn reset(&mut self) {
        debug!(
            "reset symbol table ({} scope(s), {} binding(s))",
            self.depth(),
            self.len()
        );
        self.scopes = ScopeStack::new();
    }

    /// 当前作用域层级（全局为 0）
    pub fn current_level(&self) -> ScopeLevel {
        self.scopes.top().level()
    }

    /// 打开的作用域数量（含全局）
    pub fn depth(&self) -> usize {
        self.scopes.depth()
    }

    pub fn current_scope_kind(&self) -> ScopeKind {
        self.scopes.top().kind()
    }

    /// 是否处于某个函数作用域内
    pub fn is_in_function(&self) -> bool {
        self.scopes.is_in_function()
    }

    /// 由外向内遍历所有打开的作用域
    pub fn scopes(&self) -> impl Iterator<Item = &Scope> {
        self.scopes.iter()
    }

    /// 所有打开作用域中的绑定总数
    pub fn len(&self) -> usize {
        self.scopes.iter().map(Scope::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.iter().all(Scope::is_empty)
    }
}

impl fmt::Display for ScopedSymbolTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Symbol Table:")?;
        for record in self.scopes.iter().flat_map(|scope| scope.records()) {
            writeln!(f, "{}", record)?;
        }
        Ok(())
    }
}
