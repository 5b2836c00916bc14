/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Process environment access that tests can replace

use std::collections::HashMap;
use std::env::VarError;
use std::sync::Arc;

/// Source of environment variables for region and credential resolution
///
/// Client configs read `AWS_REGION` and the `AWS_ACCESS_KEY_ID` family through an `Env` so that
/// tests never mutate the process environment, which is shared by every test thread.
#[derive(Clone, Debug)]
pub enum Env {
    /// Delegate to [`std::env::var`]
    Process,
    /// A fixed set of variables
    Fixed(Arc<HashMap<String, String>>),
}

impl Default for Env {
    fn default() -> Self {
        Env::Process
    }
}

impl Env {
    /// The environment of the running process
    pub fn real() -> Self {
        Env::Process
    }

    /// A fixed environment holding exactly `vars`
    ///
    /// ```rust
    /// use aws_types::os_shim_internal::Env;
    /// let env = Env::from_slice(&[("AWS_REGION", "eu-central-1")]);
    /// assert_eq!(env.get("AWS_REGION").unwrap(), "eu-central-1");
    /// assert!(env.get("AWS_DEFAULT_REGION").is_err());
    /// ```
    pub fn from_slice(vars: &[(&str, &str)]) -> Self {
        Env::Fixed(Arc::new(
            vars.iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        ))
    }

    pub fn get(&self, key: &str) -> Result<String, VarError> {
        match self {
            Env::Process => std::env::var(key),
            Env::Fixed(vars) => vars.get(key).cloned().ok_or(VarError::NotPresent),
        }
    }
}

impl From<HashMap<String, String>> for Env {
    fn from(vars: HashMap<String, String>) -> Self {
        Env::Fixed(Arc::new(vars))
    }
}

#[cfg(test)]
mod test {
    use crate::os_shim_internal::Env;
    use std::collections::HashMap;
    use std::env::VarError;

    #[test]
    fn fixed_environment_is_isolated() {
        let mut vars = HashMap::new();
        vars.insert("AWS_ACCESS_KEY_ID".to_string(), "AKID".to_string());
        let env = Env::from(vars);
        assert_eq!(env.get("AWS_ACCESS_KEY_ID").unwrap(), "AKID");
        assert_eq!(
            env.get("AWS_SECRET_ACCESS_KEY").expect_err("not set"),
            VarError::NotPresent
        );
    }
}
