// SPDX-FileCopyrightText: 2022-2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;

use crate::error::Result;

use super::{check_key, IsPersistent, Store};

#[derive(Debug, Default, Clone)]
pub(crate) struct Memory {
    data: HashMap<String, String>,
}

impl Memory {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

impl IsPersistent for Memory {
    fn is_persistent(&self) -> bool {
        false
    }
}

impl Store for Memory {
    fn get(&self, key: &str) -> Result<Option<String>> {
        check_key(key)?;
        Ok(self.data.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        check_key(key)?;
        _ = self.data.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        check_key(key)?;
        _ = self.data.remove(key);
        Ok(())
    }
}
