use crate::director::Preset;

/// What a run produces. Built once from the command line, then read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub presets: Vec<Preset>,
    pub fresh_builder: bool,
    pub validate: bool,
    pub banner: String,
}

/// The builder starts from the classic run: every preset, one builder
/// shared across them, no validation.
pub struct RunConfigBuilder {
    presets: Vec<Preset>,
    fresh_builder: bool,
    validate: bool,
    banner: String,
}

impl RunConfig {
    pub fn builder() -> RunConfigBuilder {
        RunConfigBuilder {
            presets: Preset::ALL.to_vec(),
            fresh_builder: false,
            validate: false,
            banner: "=== Sistema de Relatórios ===".to_string(),
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl RunConfigBuilder {
    /// Run only these presets, in this order. An empty list keeps the default.
    pub fn presets(mut self, presets: impl Into<Vec<Preset>>) -> Self {
        let presets = presets.into();
        if !presets.is_empty() {
            self.presets = presets;
        }
        self
    }

    /// Reset the builder before each preset instead of layering them.
    pub fn fresh_builder(mut self, fresh: bool) -> Self {
        self.fresh_builder = fresh;
        self
    }

    pub fn validate(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    pub fn banner(mut self, banner: impl Into<String>) -> Self {
        self.banner = banner.into();
        self
    }

    pub fn build(self) -> RunConfig {
        RunConfig {
            presets: self.presets,
            fresh_builder: self.fresh_builder,
            validate: self.validate,
            banner: self.banner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_run() {
        let config = RunConfig::default();

        assert_eq!(config.presets, Preset::ALL);
        assert!(!config.fresh_builder);
        assert!(!config.validate);
        assert_eq!(config.banner, "=== Sistema de Relatórios ===");
    }

    #[test]
    fn empty_preset_list_keeps_default() {
        let config = RunConfig::builder().presets(Vec::<Preset>::new()).build();
        assert_eq!(config.presets, Preset::ALL);
    }

    #[test]
    fn overrides_apply() {
        let config = RunConfig::builder()
            .presets([Preset::AnnualSales])
            .fresh_builder(true)
            .validate(true)
            .banner("Reports")
            .build();

        assert_eq!(config.presets, vec![Preset::AnnualSales]);
        assert!(config.fresh_builder);
        assert!(config.validate);
        assert_eq!(config.banner, "Reports");
    }
}
