//! hassfest: validate and generate Home Assistant build files
//!
//! Each [`Plugin`] first validates the files it owns, collecting problems on
//! the run [`Config`]. In generate mode every plugin then rewrites its files
//! from what it rendered during validation, handed over through a
//! [`GenerationCache`].
//!
//! # Example
//!
//! ```ignore
//! use ha_hassfest::{run, Action, Config, DockerPlugin};
//!
//! let mut config = Config::new(".", Action::Generate);
//! run(&mut config, &[&DockerPlugin])?;
//! ```

pub mod docker;
mod error;
mod model;
pub mod requirements;

pub use docker::DockerPlugin;
pub use error::{HassfestError, HassfestResult};
pub use model::{
    Action, Config, GenerationCache, Plugin, ValidationError, REQUIREMENTS_TEST,
};

use tracing::{debug, info};

/// All plugins known to hassfest
pub fn all_plugins() -> Vec<Box<dyn Plugin>> {
    vec![Box::new(DockerPlugin)]
}

/// Look up plugins by name
pub fn plugins_by_name(names: &[String]) -> HassfestResult<Vec<Box<dyn Plugin>>> {
    names
        .iter()
        .map(|name| {
            all_plugins()
                .into_iter()
                .find(|plugin| plugin.name() == name)
                .ok_or_else(|| HassfestError::UnknownPlugin { name: name.clone() })
        })
        .collect()
}

/// Run validation for every plugin, then generation when requested
///
/// Hard failures abort the run. Validation problems are collected on
/// `config`; after a successful generate the fixable ones are cleared.
pub fn run(config: &mut Config, plugins: &[&dyn Plugin]) -> HassfestResult<()> {
    let mut cache = GenerationCache::new();

    for plugin in plugins {
        debug!("Validating with plugin {}", plugin.name());
        plugin.validate(config, &mut cache)?;
    }

    if config.action == Action::Generate {
        for plugin in plugins {
            info!("Generating with plugin {}", plugin.name());
            plugin.generate(config, &cache)?;
        }
        config.clear_fixable_errors();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plugins_by_name() {
        let plugins = plugins_by_name(&["docker".to_string()]).unwrap();
        assert_eq!(plugins.len(), 1);
        assert_eq!(plugins[0].name(), "docker");
    }

    #[test]
    fn test_unknown_plugin() {
        let err = plugins_by_name(&["nope".to_string()]).err().unwrap();
        assert!(matches!(err, HassfestError::UnknownPlugin { name } if name == "nope"));
    }
}
