//! Environment variable access behind a trait so configuration can be
//! resolved from a fake environment in tests.

use std::env::VarError;

pub trait ReadEnv {
    fn var(&self, key: &str) -> Result<String, VarError>;
}

/// Reads the real process environment.
pub struct SystemEnv;

impl ReadEnv for SystemEnv {
    #[inline]
    fn var(&self, key: &str) -> Result<String, VarError> {
        std::env::var(key)
    }
}

/// Map-backed environment that never touches the process environment.
#[cfg(test)]
#[derive(Default)]
pub struct InMemoryEnv {
    vars: std::cell::RefCell<std::collections::HashMap<String, String>>,
}

#[cfg(test)]
impl InMemoryEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.borrow_mut().insert(key.into(), value.into());
    }
}

#[cfg(test)]
impl ReadEnv for InMemoryEnv {
    fn var(&self, key: &str) -> Result<String, VarError> {
        self.vars
            .borrow()
            .get(key)
            .cloned()
            .ok_or(VarError::NotPresent)
    }
}
