//! Environment variable lookup port.

use std::collections::HashMap;

/// Read-only view of environment variables.
pub trait Environment: Send + Sync {
    /// Value of `name`, or `None` when it is unset or not valid unicode.
    fn var(&self, name: &str) -> Option<String>;
}

impl Environment for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_environment_looks_up_keys() {
        let env: HashMap<String, String> = [("HOME".to_string(), "/home/u".to_string())].into();
        assert_eq!(env.var("HOME").as_deref(), Some("/home/u"));
        assert_eq!(env.var("MISSING"), None);
    }
}
