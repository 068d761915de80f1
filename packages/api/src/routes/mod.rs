//! Route handlers, one module per resource.

pub mod areas;
pub mod employees;
pub mod health;

#[cfg(test)]
pub(crate) mod test_support;
