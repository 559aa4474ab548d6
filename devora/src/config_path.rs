use std::fs;

use anyhow::{Error, Result};

pub fn get() -> Result<String> {
    let config_path = match std::env::var("DV_CONFIG_PATH") {
        Ok(path) => path,
        Err(_) => "config.yml".to_owned(),
    };

    if fs::metadata(&config_path).is_err() {
        return Err(Error::msg(format!(
            "Config file '{config_path}' does not exist. Point DV_CONFIG_PATH at one or place config.yml in the current directory"
        )));
    }

    Ok(config_path)
}
