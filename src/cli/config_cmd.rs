//! Show the effective configuration

use anyhow::Result;

use super::output::Output;
use crate::config::Config;

pub fn show(output: &Output, config: &Config) -> Result<()> {
    let source = config
        .source
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "built-in defaults".to_string());

    if output.is_json() {
        output.data(&serde_json::json!({
            "source": source,
            "default_path": Config::default_path(),
            "config": config,
        }));
    } else {
        println!("# source: {}", source);
        if let Some(path) = Config::default_path() {
            println!("# default path: {}", path.display());
        }
        print!("{}", config.to_toml()?);
    }

    Ok(())
}
