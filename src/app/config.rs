use crate::paths::PATH_DATA;
use crate::session::KnownHost;
use crate::settings::StreamSettings;

use std::error::Error;
use std::fs::File;
use std::io::BufReader;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub stream: StreamSettings,
    #[serde(default)]
    pub hosts: Vec<KnownHost>,
}

pub fn load_cfg() -> Config {
    let path = PATH_DATA.join("settings.json");

    if let Ok(file) = File::open(path) {
        if let Ok(config) = serde_json::from_reader::<_, Config>(BufReader::new(file)) {
            return config;
        }
    }

    // Return default settings if file doesn't exist or has errors
    Config::default()
}

pub fn save_cfg(config: &Config) -> Result<(), Box<dyn Error>> {
    let path = PATH_DATA.join("settings.json");
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, config)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_round_trip() {
        let mut config = Config::default();
        config.stream.width = 2560;
        config.stream.height = 1440;
        config.stream.bitrate = 40500;
        config.hosts.push(KnownHost {
            address: "10.0.0.2".into(),
            name: "den-pc".into(),
            paired: true,
        });

        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.stream, config.stream);
        assert_eq!(parsed.hosts.len(), 1);
        assert_eq!(parsed.hosts[0].address, "10.0.0.2");
        assert!(parsed.hosts[0].paired);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let parsed: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.stream, StreamSettings::default());
        assert!(parsed.hosts.is_empty());

        let parsed: Config =
            serde_json::from_str(r#"{"hosts": [{"address": "10.0.0.9"}]}"#).unwrap();
        assert_eq!(parsed.hosts[0].name, "");
        assert!(!parsed.hosts[0].paired);
    }
}
