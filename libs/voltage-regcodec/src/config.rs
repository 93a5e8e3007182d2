//! Codec configuration
//!
//! Loaded with figment in priority order: built-in defaults < YAML file <
//! `REGCODEC_*` environment variables.
//!
//! ```yaml
//! default_32: CDAB
//! default_64: GHEFCDAB
//! host_endian: little   # omit to use the real host order
//! ```

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::bytes::{ConventionFamily, HostEndian, OrderingConvention};
use crate::error::{CodecError, Result};

/// Environment variable prefix for overrides
pub const ENV_PREFIX: &str = "REGCODEC_";

/// Default conventions and host order for a `RegisterCodec`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Convention used for f32/i32/u32 when none is given
    #[serde(default = "default_32")]
    pub default_32: OrderingConvention,

    /// Convention used for f64 when none is given
    #[serde(default = "default_64")]
    pub default_64: OrderingConvention,

    /// Host order override, `None` = native
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_endian: Option<HostEndian>,
}

fn default_32() -> OrderingConvention {
    OrderingConvention::DEFAULT_32
}

fn default_64() -> OrderingConvention {
    OrderingConvention::DEFAULT_64
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            default_32: default_32(),
            default_64: default_64(),
            host_endian: None,
        }
    }
}

impl CodecConfig {
    /// Load configuration, optionally from a YAML file
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(path) = path {
            if !path.exists() {
                return Err(CodecError::config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            debug!("Loading codec config from {}", path.display());
            figment = figment.merge(Yaml::file(path));
        }

        let config: Self = figment.merge(Env::prefixed(ENV_PREFIX)).extract()?;
        config.validate()?;

        info!(
            "Codec defaults: 32-bit {}, 64-bit {}, host {}",
            config.default_32,
            config.default_64,
            config
                .host_endian
                .map_or("native", |host| host.as_str())
        );
        Ok(config)
    }

    /// Each default must belong to the family it is used for
    pub fn validate(&self) -> Result<()> {
        if self.default_32.family() != ConventionFamily::Word32 {
            return Err(CodecError::config(format!(
                "default_32 must be a 4-byte convention, got {}",
                self.default_32
            )));
        }
        if self.default_64.family() != ConventionFamily::Word64 {
            return Err(CodecError::config(format!(
                "default_64 must be an 8-byte convention, got {}",
                self.default_64
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    fn write_yaml(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    #[serial]
    fn test_defaults_without_file() {
        let config = CodecConfig::load(None).unwrap();
        assert_eq!(config, CodecConfig::default());
    }

    #[test]
    #[serial]
    fn test_yaml_file() {
        let file = write_yaml("default_32: cd-ab\ndefault_64: GHEFCDAB\nhost_endian: big\n");
        let config = CodecConfig::load(Some(file.path())).unwrap();

        assert_eq!(config.default_32, OrderingConvention::CDAB);
        assert_eq!(config.default_64, OrderingConvention::GHEFCDAB);
        assert_eq!(config.host_endian, Some(HostEndian::Big));
    }

    #[test]
    #[serial]
    fn test_env_overrides_file() {
        let file = write_yaml("default_32: CDAB\n");
        std::env::set_var("REGCODEC_DEFAULT_32", "BADC");
        let result = CodecConfig::load(Some(file.path()));
        std::env::remove_var("REGCODEC_DEFAULT_32");

        assert_eq!(result.unwrap().default_32, OrderingConvention::BADC);
    }

    #[test]
    #[serial]
    fn test_wrong_family_rejected() {
        let file = write_yaml("default_32: ABCDEFGH\n");
        let err = CodecConfig::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, CodecError::Config(_)));
    }

    #[test]
    #[serial]
    fn test_unknown_convention_rejected() {
        let file = write_yaml("default_64: XYZ\n");
        assert!(CodecConfig::load(Some(file.path())).is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = CodecConfig::load(Some(Path::new("/nonexistent/regcodec.yaml"))).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = CodecConfig {
            default_32: OrderingConvention::DCBA,
            default_64: OrderingConvention::HGFEDCBA,
            host_endian: Some(HostEndian::Little),
        };
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: CodecConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }
}
