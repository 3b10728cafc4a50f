//! CLI configuration from environment.

use quad_core::{validate_area, Area, PlannerRules};
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub area: Area,
    pub revalidate_endpoints: bool,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            area: Area::default(),
            revalidate_endpoints: false,
            log_filter: "quad_cli=info,quad_core=warn".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            area: lookup("QUAD_AREA")
                .and_then(|s| parse_area(&s))
                .unwrap_or(defaults.area),
            revalidate_endpoints: lookup("QUAD_REVALIDATE_ENDPOINTS")
                .map(|s| matches!(s.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(defaults.revalidate_endpoints),
            log_filter: lookup("QUAD_LOG").unwrap_or(defaults.log_filter),
        }
    }

    pub fn rules(&self) -> PlannerRules {
        PlannerRules {
            default_area: self.area,
            revalidate_endpoints: self.revalidate_endpoints,
        }
    }
}

/// Parse `"x_min x_max y_min y_max"`.
fn parse_area(raw: &str) -> Option<Area> {
    let values = quad_core::parse_values(raw, 4).ok()?;
    validate_area(values[0], values[1], values[2], values[3]).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use quad_core::AxisRange;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = config_from(&[]);
        assert_eq!(config.area, Area::default());
        assert!(!config.revalidate_endpoints);
        assert_eq!(config.log_filter, "quad_cli=info,quad_core=warn");
    }

    #[test]
    fn test_reads_area_and_flags() {
        let config = config_from(&[
            ("QUAD_AREA", "0 500 10 20"),
            ("QUAD_REVALIDATE_ENDPOINTS", "true"),
            ("QUAD_LOG", "debug"),
        ]);
        assert_eq!(
            config.area,
            Area {
                x: AxisRange { min: 0, max: 500 },
                y: AxisRange { min: 10, max: 20 },
            }
        );
        assert!(config.rules().revalidate_endpoints);
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_invalid_area_falls_back() {
        let config = config_from(&[("QUAD_AREA", "50 10 0 100")]);
        assert_eq!(config.area, Area::default());

        let config = config_from(&[("QUAD_AREA", "0 10")]);
        assert_eq!(config.area, Area::default());
    }
}
