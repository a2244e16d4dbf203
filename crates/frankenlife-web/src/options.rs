//! Host-supplied view options.

use serde::Deserialize;

/// Options accepted by the `LifeCanvas` constructor as a JSON string.
///
/// Unknown fields are rejected so host typos fail loudly at startup
/// instead of silently falling back to defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct ViewOptions {
    /// Cell edge length in canvas pixels.
    pub cell_size: u32,
    /// Engine generations computed per rendered frame.
    pub steps_per_frame: u32,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            cell_size: 2,
            steps_per_frame: 1,
        }
    }
}

impl ViewOptions {
    /// Parse options from the host's JSON string. `None` or a blank string
    /// means defaults.
    pub fn from_json(json: Option<&str>) -> Result<Self, serde_json::Error> {
        match json {
            None => Ok(Self::default()),
            Some(s) if s.trim().is_empty() => Ok(Self::default()),
            Some(s) => serde_json::from_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_options_fall_back_to_defaults() {
        assert_eq!(ViewOptions::from_json(None).unwrap(), ViewOptions::default());
        assert_eq!(
            ViewOptions::from_json(Some("  ")).unwrap(),
            ViewOptions::default()
        );
        assert_eq!(
            ViewOptions::from_json(Some("{}")).unwrap(),
            ViewOptions::default()
        );
    }

    #[test]
    fn camel_case_fields_parse() {
        let options =
            ViewOptions::from_json(Some(r#"{"cellSize":5,"stepsPerFrame":3}"#)).unwrap();
        assert_eq!(options.cell_size, 5);
        assert_eq!(options.steps_per_frame, 3);
    }

    #[test]
    fn partial_options_keep_remaining_defaults() {
        let options = ViewOptions::from_json(Some(r#"{"cellSize":8}"#)).unwrap();
        assert_eq!(options.cell_size, 8);
        assert_eq!(options.steps_per_frame, 1);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(ViewOptions::from_json(Some(r#"{"cellSzie":8}"#)).is_err());
    }
}
