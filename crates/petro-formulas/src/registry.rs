use crate::formula::PetroleumFormula;
use std::collections::HashMap;

/// Formulas keyed by their `id`.
pub struct FormulaRegistry {
    formulas: HashMap<&'static str, Box<dyn PetroleumFormula>>,
}

impl Default for FormulaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl FormulaRegistry {
    pub fn new() -> Self {
        Self { formulas: HashMap::new() }
    }

    /// A registry holding every built-in formula.
    pub fn with_built_ins() -> Self {
        let mut registry = Self::new();
        for formula in crate::built_in::all() {
            registry.register(formula);
        }
        registry
    }

    /// Registers `formula`, replacing any formula with the same id.
    pub fn register(&mut self, formula: Box<dyn PetroleumFormula>) {
        self.formulas.insert(formula.id(), formula);
    }

    pub fn get(&self, id: &str) -> Option<&dyn PetroleumFormula> {
        self.formulas.get(id).map(|f| f.as_ref())
    }

    /// Registered ids, sorted.
    pub fn ids(&self) -> Vec<&'static str> {
        let mut ids: Vec<_> = self.formulas.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Registered formulas in id order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn PetroleumFormula> {
        self.ids().into_iter().filter_map(move |id| self.get(id))
    }

    pub fn len(&self) -> usize {
        self.formulas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formulas.is_empty()
    }
}
