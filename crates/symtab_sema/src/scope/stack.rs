use super::{Scope, ScopeKind};
use crate::symbol::{ScopeLevel, SymbolRecord};

/// 作用域栈 - 管理嵌套作用域
///
/// 栈底永远是全局作用域，每个作用域的层级等于它在栈中的位置。
#[derive(Debug, Clone)]
pub struct ScopeStack {
    scopes: Vec<Scope>,
}

impl ScopeStack {
    /// 创建新的作用域栈，初始化全局作用域
    pub fn new() -> Self {
        Self {
            scopes: vec![Scope::new(0, ScopeKind::Global)],
        }
    }

    /// 压入新作用域，返回其层级
    pub fn push(&mut self, kind: ScopeKind) -> ScopeLevel {
        let level = self.scopes.len();
        self.scopes.push(Scope::new(level, kind));
        level
    }

    /// 弹出栈顶作用域；只剩全局作用域时返回 None 且不做任何修改
    pub fn pop(&mut self) -> Option<Scope> {
        if self.scopes.len() > 1 {
            self.scopes.pop()
        } else {
            None
        }
    }

    /// 当前（栈顶）作用域
    pub fn top(&self) -> &Scope {
        // 栈从不为空
        &self.scopes[self.scopes.len() - 1]
    }

    pub(crate) fn top_mut(&mut self) -> &mut Scope {
        let top = self.scopes.len() - 1;
        &mut self.scopes[top]
    }

    pub fn global(&self) -> &Scope {
        &self.scopes[0]
    }

    /// 打开的作用域数量（含全局）
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// 由内向外查找，第一个命中即为结果
    pub fn lookup(&self, name: &str) -> Option<&SymbolRecord> {
        self.scopes
            .iter()
            .rev()
            .find_map(|scope| scope.lookup_local(name))
    }

    /// 是否处于某个函数作用域内
    pub fn is_in_function(&self) -> bool {
        self.scopes
            .iter()
            .any(|scope| scope.kind() == ScopeKind::Function)
    }

    /// 由外向内遍历所有打开的作用域
    pub fn iter(&self) -> impl Iterator<Item = &Scope> {
        self.scopes.iter()
    }
}

impl Default for ScopeStack {
    fn default() -> Self {
        Self::new()
    }
}
