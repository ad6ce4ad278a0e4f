// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*! Shader function references.

Pipelines name their shader functions as strings.  Compiling and caching the functions
is someone else's job; pipeline translation only asks a [`FunctionCache`] for the
function with a given name and set of specialization constants.
*/

use std::collections::BTreeMap;
use std::fmt::Debug;

/// A specialization constant value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FunctionConstantValue {
    Bool(bool),
    Int(i32),
    UInt(u32),
    Float(f32),
}

impl FunctionConstantValue {
    /// The value as the double-precision number pipeline-overridable constants use.
    pub fn as_f64(&self) -> f64 {
        match self {
            FunctionConstantValue::Bool(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            FunctionConstantValue::Int(i) => *i as f64,
            FunctionConstantValue::UInt(u) => *u as f64,
            FunctionConstantValue::Float(f) => *f as f64,
        }
    }
}

/// Named specialization constants.  Iterates in name order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FunctionConstants {
    values: BTreeMap<String, FunctionConstantValue>,
}

impl FunctionConstants {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: FunctionConstantValue) {
        self.values.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<FunctionConstantValue> {
        self.values.get(name).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, FunctionConstantValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Name/value pairs in the form pipeline-overridable constants take.
    pub fn as_override_values(&self) -> Vec<(String, f64)> {
        self.values
            .iter()
            .map(|(k, v)| (k.clone(), v.as_f64()))
            .collect()
    }
}

/// Looks up compiled shader functions.
pub trait FunctionCache {
    type Function: Clone + Debug;

    /// Returns `None` when no function called `name` exists.
    fn lookup(&self, name: &str, constants: &FunctionConstants) -> Option<Self::Function>;
}
