//! Read model parameters from a JSON document.
//!
//! Accepted shape is a flat object; keys other than `amplitude` and `duration`
//! are ignored:
//!
//! ```json
//! { "amplitude": 2.5, "duration": 600.0 }
//! ```

use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

use crate::domain::ModelParameters;
use crate::error::AppError;

/// Read and validate parameters from a JSON file.
pub fn read_params_json(path: &Path) -> Result<ModelParameters, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::filesystem(format!("Failed to open parameter file '{}': {e}", path.display())))?;
    let map: HashMap<String, serde_json::Value> = serde_json::from_reader(file)
        .map_err(|e| AppError::parse(format!("Invalid parameter JSON '{}': {e}", path.display())))?;
    params_from_json_map(&map)
}

/// Extract the numeric entries of a JSON object and build parameters from them.
pub fn params_from_json_map(map: &HashMap<String, serde_json::Value>) -> Result<ModelParameters, AppError> {
    let mut numeric = HashMap::with_capacity(map.len());
    for key in [ModelParameters::AMPLITUDE_KEY, ModelParameters::DURATION_KEY] {
        if let Some(value) = map.get(key) {
            let v = value
                .as_f64()
                .ok_or_else(|| AppError::parameter(format!("Parameter '{key}' must be a number, got {value}.")))?;
            numeric.insert(key.to_string(), v);
        }
    }
    ModelParameters::from_map(&numeric)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn map(json: &str) -> HashMap<String, serde_json::Value> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn reads_numbers_and_ignores_extras() {
        let p = params_from_json_map(&map(r#"{"amplitude": 2, "duration": 0.5, "label": "x"}"#)).unwrap();
        assert_eq!(p, ModelParameters { amplitude: 2.0, duration: 0.5 });
    }

    #[test]
    fn missing_and_non_numeric_keys_are_parameter_errors() {
        let err = params_from_json_map(&map(r#"{"duration": 1.0}"#)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parameter);
        assert!(err.to_string().contains("amplitude"));

        let err = params_from_json_map(&map(r#"{"amplitude": "big", "duration": 1.0}"#)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parameter);
    }

    #[test]
    fn file_round_trip() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("params.json");
        std::fs::write(&path, r#"{"amplitude": 4.0, "duration": 120.0}"#).unwrap();
        assert_eq!(read_params_json(&path).unwrap().duration, 120.0);

        let missing = read_params_json(&tmp.path().join("nope.json")).unwrap_err();
        assert_eq!(missing.kind(), ErrorKind::Filesystem);
    }
}
