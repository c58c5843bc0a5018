//! Type system for Filtree
//!
//! This module contains the runtime type system including:
//! - Value types
//! - Value type tags
//! - Coercion between value types and parsing of editor literals

pub mod coercion;
pub mod value;
pub mod value_type;

pub use coercion::parse_literal;
pub use value::Value;
pub use value_type::ValueType;
