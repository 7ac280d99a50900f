use serde::{Serialize, Deserialize};

use crate::constants::DEFAULT_ATTRIBUTES;
use crate::error::Errors;
use crate::options::Options;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct AttributeNameSet {
    names: Vec<String>,
}

impl AttributeNameSet {
    pub fn resolve(options: &Options) -> Result<AttributeNameSet, Errors> {
        log::trace!("In resolve");

        let names: Vec<String> = match &options.attributes {
            None => {
                log::debug!("Attributes not provided, using default");

                DEFAULT_ATTRIBUTES
                    .iter()
                    .map(|name| name.to_string())
                    .collect()
            }
            Some(attributes) => {
                if attributes.is_empty() {
                    log::info!("Invalid attributes option, aborting...");
                    return Err(Errors::InvalidAttributesOption);
                }

                if attributes.iter().any(|name| name.trim().is_empty()) {
                    log::info!("Invalid attributes option, aborting...");
                    return Err(Errors::InvalidAttributesOption);
                }

                attributes.clone()
            }
        };

        Ok(AttributeNameSet { names })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|candidate| candidate == name)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}
