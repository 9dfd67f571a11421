//! `Signature`: the external shape of a stdlib function.

use reslang_types::Type;

#[derive(Clone, Debug, PartialEq)]
pub struct Param {
    pub name: String,
    pub ty: Type,
    pub optional: bool,
}

impl Param {
    pub fn required(name: impl Into<String>, ty: Type) -> Self {
        Param { name: name.into(), ty, optional: false }
    }

    pub fn optional(name: impl Into<String>, ty: Type) -> Self {
        Param { name: name.into(), ty, optional: true }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Signature {
    pub namespace: String,
    pub name: String,
    pub params: Vec<Param>,
    pub return_type: Type,
}

impl Signature {
    /// `Namespace.Function`, or bare `Function` when there is no namespace.
    pub fn full_name(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.namespace, self.name)
        }
    }

    /// The number of parameters that must be supplied.
    pub fn required_count(&self) -> usize {
        self.params.iter().filter(|p| !p.optional).count()
    }

    /// The total number of parameters accepted.
    pub fn total_parameters(&self) -> usize {
        self.params.len()
    }
}
