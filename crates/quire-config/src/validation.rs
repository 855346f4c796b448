//! Full configuration validation.

use crate::keybinds;
use crate::schema::WorkspaceConfig;
use quire_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &WorkspaceConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    if let Err(e) = keybinds::validate_no_duplicates(&config.keybinds) {
        errors.push(e.to_string());
    }

    validate_range(
        &mut errors,
        "persistence.debounce_ms",
        config.persistence.debounce_ms,
        50,
        10_000,
    );

    let floating = &config.floating;
    validate_range(&mut errors, "floating.min_width", floating.min_width, 100, 4000);
    validate_range(&mut errors, "floating.min_height", floating.min_height, 100, 4000);
    if floating.default_width < floating.min_width {
        errors.push(format!(
            "floating.default_width ({}) is below floating.min_width ({})",
            floating.default_width, floating.min_width
        ));
    }
    if floating.default_height < floating.min_height {
        errors.push(format!(
            "floating.default_height ({}) is below floating.min_height ({})",
            floating.default_height, floating.min_height
        ));
    }

    validate_range(&mut errors, "layout.gap", config.layout.gap, 0, 20);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_range<T: PartialOrd + std::fmt::Display>(
    errors: &mut Vec<String>,
    field: &str,
    value: T,
    min: T,
    max: T,
) {
    if value < min || value > max {
        errors.push(format!("{field} must be between {min} and {max}, got {value}"));
    }
}
