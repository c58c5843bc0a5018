//! Variable sources
//!
//! Variables supply the values leaf conditions compare against. Each one has a
//! stable id that leaves refer to, a display name used in descriptions and a
//! declared value type used to parse edited reference values. Reading a
//! variable is pure and may return `None` when the sample has no value.
//!
//! Leaves resolve their variable by id on every evaluation, so the set can be
//! changed freely between evaluations.

mod constant;
mod field_lookup;
mod getter;

pub use constant::ConstVariable;
pub use field_lookup::FieldVariable;
pub use getter::GetterVariable;

use filtree_core::{Value, ValueType};

/// A named, typed value read from a data sample of type `S`
pub trait Variable<S: ?Sized> {
    /// Stable identifier leaves refer to
    fn id(&self) -> &str;

    /// Name shown in descriptions and pickers
    fn display_name(&self) -> &str;

    /// Type of the values this variable produces
    fn value_type(&self) -> ValueType;

    /// Read the value from `sample`; `None` when absent
    fn value(&self, sample: &S) -> Option<Value>;
}

/// Resolves variable ids for a filter tree
pub trait VariableSource {
    /// Data sample type the variables read from
    type Sample: ?Sized;

    /// Look up a variable by id
    fn variable(&self, id: &str) -> Option<&dyn Variable<Self::Sample>>;
}

/// Ordered list of variables, looked up by id
pub struct VariableSet<S: ?Sized> {
    variables: Vec<Box<dyn Variable<S>>>,
}

impl<S: ?Sized> VariableSet<S> {
    /// Create an empty set
    pub fn new() -> Self {
        Self {
            variables: Vec::new(),
        }
    }

    /// Add a variable, replacing any existing one with the same id
    pub fn push(&mut self, variable: impl Variable<S> + 'static) {
        let variable: Box<dyn Variable<S>> = Box::new(variable);
        match self.position(variable.id()) {
            Some(index) => self.variables[index] = variable,
            None => self.variables.push(variable),
        }
    }

    /// Builder-style [`push`](Self::push)
    pub fn with(mut self, variable: impl Variable<S> + 'static) -> Self {
        self.push(variable);
        self
    }

    /// Remove a variable by id, returning whether it existed
    pub fn remove(&mut self, id: &str) -> bool {
        match self.position(id) {
            Some(index) => {
                self.variables.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: &str) -> Option<&dyn Variable<S>> {
        self.variables
            .iter()
            .find(|v| v.id() == id)
            .map(|v| v.as_ref())
    }

    /// Variables in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &dyn Variable<S>> {
        self.variables.iter().map(|v| v.as_ref())
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.variables.iter().position(|v| v.id() == id)
    }
}

impl<S: ?Sized> Default for VariableSet<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ?Sized> VariableSource for VariableSet<S> {
    type Sample = S;

    fn variable(&self, id: &str) -> Option<&dyn Variable<S>> {
        self.get(id)
    }
}
