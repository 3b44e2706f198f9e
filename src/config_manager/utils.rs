use std::fs;
use std::path::Path;
use anyhow::Result;
use regex::Regex;
use tracing::debug;

use crate::config_manager::main::Config;

/// Read a configuration file, substituting `${VAR_NAME}` from the environment
pub fn read_config_text(config_path: &Path) -> Result<String> {
    if !config_path.exists() {
        anyhow::bail!("Configuration file not found: {}", config_path.display());
    }

    let content = load_text_file_with_guess_encoding(config_path)?;
    if content.trim().is_empty() {
        anyhow::bail!("Configuration file is empty: {}", config_path.display());
    }

    Ok(substitute_env_vars(&content))
}

/// Replace `${VAR_NAME}` with the variable's value. Unset variables are left as-is.
pub fn substitute_env_vars(content: &str) -> String {
    let pattern = Regex::new(r"\$\{(\w+)\}").expect("static pattern is valid");
    pattern
        .replace_all(content, |caps: &regex::Captures| {
            std::env::var(&caps[1]).unwrap_or_else(|_| caps[0].to_string())
        })
        .into_owned()
}

/// Parse config text, choosing the format by file extension
pub fn parse_config(content: &str, path: &Path) -> Result<Config> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    let config = if extension == "json" || extension == "jsonld" {
        let mut json_value: serde_json::Value = serde_json::from_str(content)?;
        if let serde_json::Value::Object(ref mut obj) = json_value {
            obj.remove("@context");
        }
        serde_json::from_value(json_value)?
    } else {
        serde_yaml::from_str(content)?
    };

    debug!("Parsed {} configuration from {}", extension, path.display());
    Ok(config)
}

/// Load text file, stripping a UTF-8 BOM and falling back to lossy decoding
pub fn load_text_file_with_guess_encoding(file_path: &Path) -> Result<String> {
    let mut bytes = fs::read(file_path)?;

    if bytes.starts_with(&[0xEF, 0xBB, 0xBF]) {
        bytes.drain(0..3);
    }

    match String::from_utf8(bytes) {
        Ok(content) => Ok(content),
        Err(e) => {
            debug!("{} is not valid UTF-8, decoding lossily", file_path.display());
            let (cow, _, _) = encoding_rs::UTF_8.decode(e.as_bytes());
            Ok(cow.into_owned())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn substitutes_known_variables_and_keeps_unknown() {
        std::env::set_var("HT_TEST_INFERENCE_HOST", "gpu-box");
        let out = substitute_env_vars("url: http://${HT_TEST_INFERENCE_HOST}:${HT_TEST_UNSET_VAR}/");
        assert_eq!(out, "url: http://gpu-box:${HT_TEST_UNSET_VAR}/");
    }

    #[test]
    fn strips_bom() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        file.write_all(&[0xEF, 0xBB, 0xBF]).unwrap();
        file.write_all(b"server:\n  port: 9000\n").unwrap();

        let text = load_text_file_with_guess_encoding(file.path()).unwrap();
        assert!(text.starts_with("server:"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = read_config_text(Path::new("/nonexistent/conf.yaml")).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}
