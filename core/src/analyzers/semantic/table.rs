use super::symbol::Symbol;
use std::collections::HashMap;

// A single scope: name -> symbol. Names are unique within a scope.
type Scope = HashMap<String, Symbol>;

/// Stack of scopes; the last one is the current scope.
#[derive(Debug, Default)]
pub struct SymbolTable {
    scopes: Vec<Scope>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable { scopes: Vec::new() }
    }

    /// ------- Scope Helpers -------

    pub fn enter_scope(&mut self) {
        self.scopes.push(HashMap::new());
    }

    pub fn exit_scope(&mut self) {
        self.scopes.pop();
    }

    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// ------- Symbol Helpers -------

    /// Adds `symbol` to the current scope. If the name is already taken there
    /// the table is left unchanged and the existing symbol is returned.
    pub fn insert_symbol(&mut self, symbol: Symbol) -> Result<(), &Symbol> {
        let Some(current) = self.scopes.last_mut() else {
            log::warn!("declaring '{}' with no open scope", symbol.name);
            return Ok(());
        };
        match current.entry(symbol.name.clone()) {
            std::collections::hash_map::Entry::Occupied(existing) => Err(existing.into_mut()),
            std::collections::hash_map::Entry::Vacant(slot) => {
                slot.insert(symbol);
                Ok(())
            }
        }
    }

    /// Innermost visible symbol named `name`.
    pub fn lookup_symbol(&self, name: &str) -> Option<&Symbol> {
        self.scopes.iter().rev().find_map(|scope| scope.get(name))
    }
}
