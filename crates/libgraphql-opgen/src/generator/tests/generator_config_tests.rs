use crate::generator::ConfigurationError;
use crate::generator::GeneratorConfig;

#[test]
fn default_config_is_valid() {
    let config = GeneratorConfig::default();
    assert_eq!(config.depth_limit(), None);
    assert!(!config.include_cross_references());
    assert!(!config.include_deprecated_fields());
    assert_eq!(config.validate(), Ok(()));
}

#[test]
fn cross_references_with_depth_limit_are_valid() {
    let config = GeneratorConfig::new()
        .with_depth_limit(Some(2))
        .with_include_cross_references(true);
    assert_eq!(config.validate(), Ok(()));
}

#[test]
fn cross_references_without_depth_limit_are_invalid() {
    let config = GeneratorConfig::new().with_include_cross_references(true);
    assert_eq!(config.validate(), Err(ConfigurationError::UnboundedCrossReferences));
}

#[test]
fn zero_depth_limit_is_invalid_even_with_cross_references() {
    let config = GeneratorConfig::new()
        .with_depth_limit(Some(0))
        .with_include_cross_references(true);
    assert_eq!(config.validate(), Err(ConfigurationError::ZeroDepthLimit));
}
