//! Defines the configuration for a [`crate::DataFactory`].

use anyhow::Result;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Builder)]
#[builder(default, setter(into, strip_option))]
pub struct DataFactoryOptions {
    // label prefix for generated blank nodes; a fresh `df_<N>_` when unset
    #[serde(default, alias = "blankNodePrefix")]
    pub blank_node_prefix: Option<String>,
}

impl DataFactoryOptions {
    pub fn builder() -> DataFactoryOptionsBuilder {
        DataFactoryOptionsBuilder::default()
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let options: DataFactoryOptions = serde_json::from_str(json)?;
        Ok(options)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
