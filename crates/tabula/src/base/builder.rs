use super::Base;
use crate::{Error, Result};

use tabula_core::driver::Driver;

#[derive(Debug, Default)]
pub struct Builder {
    /// Identifier of the remote base, if known
    base_id: Option<String>,
}

impl Builder {
    /// Sets the base identifier. It is not sent anywhere by Tabula; drivers
    /// address the remote base themselves. It labels log output.
    pub fn base_id(&mut self, base_id: impl Into<String>) -> &mut Self {
        self.base_id = Some(base_id.into());
        self
    }

    pub fn build(&self, driver: impl Driver) -> Result<Base> {
        if let Some(base_id) = &self.base_id {
            if base_id.trim().is_empty() {
                return Err(Error::invalid_statement("base id must not be empty"));
            }
        }

        Ok(Base::from_parts(Box::new(driver), self.base_id.clone()))
    }
}
