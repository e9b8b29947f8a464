//! Build configuration (vuemaker.yaml)
//!
//! Every field is optional. Extensions listed in the file extend the
//! built-in table and override entries with the same extension.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::component::classify::default_extensions;
use crate::component::{
    ComponentAggregator, ComponentAssembler, DEFAULT_TARGET_EXTENSION, ElementKind,
    ExtensionClassifier, Tag,
};
use crate::error::{Result, VuemakerError};

/// Configuration file name looked up in the source directory
pub const CONFIG_FILE: &str = "vuemaker.yaml";

/// Build configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Extension given to assembled components
    #[serde(default = "default_target_extension")]
    pub target_extension: String,

    /// Order of blocks inside a component
    #[serde(default = "default_block_order")]
    pub block_order: Vec<Tag>,

    /// Extra or overriding extension mappings
    #[serde(default)]
    pub extensions: BTreeMap<String, ElementKind>,
}

fn default_target_extension() -> String {
    DEFAULT_TARGET_EXTENSION.to_string()
}

fn default_block_order() -> Vec<Tag> {
    Tag::ALL.to_vec()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_extension: default_target_extension(),
            block_order: default_block_order(),
            extensions: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Parse configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // an empty file deserializes to unit, not to a mapping
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let yaml = std::fs::read_to_string(path).map_err(|e| VuemakerError::ConfigReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        Self::from_yaml(&yaml).map_err(|err| match err {
            VuemakerError::ConfigParseFailed { reason, .. } => VuemakerError::ConfigParseFailed {
                path: path.display().to_string(),
                reason,
            },
            other => other,
        })
    }

    /// Resolve the configuration for a build.
    ///
    /// An explicit path must exist. Otherwise `vuemaker.yaml` in the source
    /// directory is used when present, and the defaults when not.
    pub fn resolve(explicit: Option<&Path>, source_dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let candidate = source_dir.join(CONFIG_FILE);
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "using configuration file");
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    fn validate(&self) -> Result<()> {
        check_extension("target_extension", &self.target_extension)?;

        for ext in self.extensions.keys() {
            check_extension("extensions", ext)?;
        }

        // an in-place build would overwrite the sources of that kind
        if let Some(kind) = self.classifier().classify(&self.target_extension) {
            return Err(VuemakerError::ConfigInvalid {
                message: format!(
                    "target_extension: '{}' is a {kind} source extension",
                    self.target_extension
                ),
            });
        }

        let mut seen = HashSet::new();
        for tag in &self.block_order {
            if !seen.insert(*tag) {
                return Err(VuemakerError::ConfigInvalid {
                    message: format!("duplicate tag '{tag}' in block_order"),
                });
            }
        }

        Ok(())
    }

    /// Classifier over the built-in table plus configured extensions
    pub fn classifier(&self) -> ExtensionClassifier {
        ExtensionClassifier::new(
            default_extensions().into_iter().chain(
                self.extensions
                    .iter()
                    .map(|(ext, kind)| (ext.clone(), kind.clone())),
            ),
        )
    }

    pub fn assembler(&self) -> ComponentAssembler {
        ComponentAssembler::new(self.block_order.clone())
    }

    /// Fresh aggregator for one build run
    pub fn aggregator(&self) -> ComponentAggregator {
        ComponentAggregator::new(self.classifier(), self.target_extension.clone())
    }
}

/// Extensions are a single segment: `.scss`, never `.vue.js`
fn check_extension(field: &str, ext: &str) -> Result<()> {
    let valid = ext
        .strip_prefix('.')
        .is_some_and(|rest| !rest.is_empty() && !rest.contains(['.', '/']));
    if !valid {
        return Err(VuemakerError::ConfigInvalid {
            message: format!("{field}: '{ext}' must look like '.ext'"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.target_extension, ".vue");
        assert_eq!(config.block_order, vec![Tag::Style, Tag::Template, Tag::Script]);
        assert!(config.extensions.is_empty());
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(Config::from_yaml("").unwrap(), Config::default());
        assert_eq!(Config::from_yaml("\n  \n").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_yaml() {
        let config = Config::from_yaml("target_extension: .sfc\n").unwrap();
        assert_eq!(config.target_extension, ".sfc");
        assert_eq!(config.block_order, Tag::ALL.to_vec());
    }

    #[test]
    fn test_extensions_extend_and_override() {
        let config = Config::from_yaml(
            r#"
extensions:
  .less: { tag: style, lang: less }
  .js: { tag: script, lang: babel }
"#,
        )
        .unwrap();

        let classifier = config.classifier();
        assert_eq!(
            classifier.classify(".less"),
            Some(&ElementKind::with_lang(Tag::Style, "less"))
        );
        assert_eq!(
            classifier.classify(".js"),
            Some(&ElementKind::with_lang(Tag::Script, "babel"))
        );
        assert_eq!(classifier.classify(".css"), Some(&ElementKind::new(Tag::Style)));
    }

    #[test]
    fn test_duplicate_block_order_rejected() {
        let err = Config::from_yaml("block_order: [style, style, script]\n").unwrap_err();
        assert!(matches!(err, VuemakerError::ConfigInvalid { .. }));
    }

    #[test]
    fn test_bad_extension_rejected() {
        let err = Config::from_yaml("extensions:\n  less: { tag: style }\n").unwrap_err();
        assert!(matches!(err, VuemakerError::ConfigInvalid { .. }));

        let err = Config::from_yaml("target_extension: vue\n").unwrap_err();
        assert!(matches!(err, VuemakerError::ConfigInvalid { .. }));

        let err = Config::from_yaml("target_extension: .\n").unwrap_err();
        assert!(matches!(err, VuemakerError::ConfigInvalid { .. }));
    }

    #[test]
    fn test_multi_dot_extension_rejected() {
        let err =
            Config::from_yaml("extensions:\n  .vue.js: { tag: script, lang: ts }\n").unwrap_err();
        assert!(matches!(err, VuemakerError::ConfigInvalid { .. }));

        let err = Config::from_yaml("target_extension: .min.vue\n").unwrap_err();
        assert!(matches!(err, VuemakerError::ConfigInvalid { .. }));
    }

    #[test]
    fn test_source_extension_as_target_rejected() {
        let err = Config::from_yaml("target_extension: .html\n").unwrap_err();
        match err {
            VuemakerError::ConfigInvalid { message } => {
                assert!(message.contains(".html"));
                assert!(message.contains("template"));
            }
            other => panic!("unexpected error: {other}"),
        }

        let err = Config::from_yaml(
            "target_extension: .less\nextensions:\n  .less: { tag: style, lang: less }\n",
        )
        .unwrap_err();
        assert!(matches!(err, VuemakerError::ConfigInvalid { .. }));
    }

    #[test]
    fn test_unknown_tag_rejected() {
        let err = Config::from_yaml("block_order: [style, markup]\n").unwrap_err();
        assert!(matches!(err, VuemakerError::ConfigParseFailed { .. }));
    }

    #[test]
    fn test_load_reports_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);
        std::fs::write(&path, "block_order: [style\n").unwrap();

        match Config::load(&path).unwrap_err() {
            VuemakerError::ConfigParseFailed { path: reported, .. } => {
                assert!(reported.ends_with(CONFIG_FILE));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = Config::load(&temp.path().join("missing.yaml")).unwrap_err();
        assert!(matches!(err, VuemakerError::ConfigReadFailed { .. }));
    }

    #[test]
    fn test_resolve_prefers_source_dir_file() {
        let temp = TempDir::new().unwrap();
        assert_eq!(Config::resolve(None, temp.path()).unwrap(), Config::default());

        std::fs::write(temp.path().join(CONFIG_FILE), "target_extension: .sfc\n").unwrap();
        let config = Config::resolve(None, temp.path()).unwrap();
        assert_eq!(config.target_extension, ".sfc");
    }

    #[test]
    fn test_aggregator_uses_config() {
        let config = Config::from_yaml("target_extension: .sfc\n").unwrap();
        let mut aggregator = config.aggregator();
        aggregator
            .ingest(crate::component::InputRecord::buffered("a.js", "x\n"))
            .unwrap();
        let outputs = aggregator.finalize(&config.assembler());
        assert_eq!(outputs[0].path, "a.sfc");
    }
}
