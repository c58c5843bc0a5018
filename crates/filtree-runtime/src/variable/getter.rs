//! Variables reading through a caller-provided function

use super::Variable;
use filtree_core::{Value, ValueType};
use std::fmt;

/// Reads the value from the sample with the given getter
pub struct GetterVariable<S: ?Sized, F>
where
    F: Fn(&S) -> Option<Value>,
{
    id: String,
    display_name: String,
    value_type: ValueType,
    getter: F,
    _sample: std::marker::PhantomData<fn(&S)>,
}

impl<S: ?Sized, F> GetterVariable<S, F>
where
    F: Fn(&S) -> Option<Value>,
{
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        value_type: ValueType,
        getter: F,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            value_type,
            getter,
            _sample: std::marker::PhantomData,
        }
    }
}

impl<S: ?Sized, F> Variable<S> for GetterVariable<S, F>
where
    F: Fn(&S) -> Option<Value>,
{
    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.display_name
    }

    fn value_type(&self) -> ValueType {
        self.value_type
    }

    fn value(&self, sample: &S) -> Option<Value> {
        (self.getter)(sample)
    }
}

impl<S: ?Sized, F> fmt::Debug for GetterVariable<S, F>
where
    F: Fn(&S) -> Option<Value>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GetterVariable")
            .field("id", &self.id)
            .field("display_name", &self.display_name)
            .field("value_type", &self.value_type)
            .finish_non_exhaustive()
    }
}
