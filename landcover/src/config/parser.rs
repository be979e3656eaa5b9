//! INI parsing logic for converting `Ini` → `ConfigFile`.
//!
//! This module contains the `parse_ini()` function and its helpers.
//! It is the single place where INI key names are mapped to struct fields.

use ini::Ini;
use std::path::PathBuf;

use super::file::ConfigFileError;
use super::settings::ConfigFile;

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the INI.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [sources] section
    if let Some(section) = ini.section(Some("sources")) {
        if let Some(v) = section.get("archive_dir") {
            let v = v.trim();
            if !v.is_empty() {
                config.sources.archive_dir = expand_tilde(v);
            }
        }
        if let Some(v) = section.get("projection") {
            let v = v.trim();
            if !v.to_uppercase().starts_with("EPSG:") {
                return Err(invalid(
                    "sources",
                    "projection",
                    v,
                    "expected an EPSG code like 'EPSG:4326'",
                ));
            }
            config.sources.projection = v.to_uppercase();
        }
    }

    // [output] section
    if let Some(section) = ini.section(Some("output")) {
        if let Some(v) = section.get("path") {
            let v = v.trim();
            if v.is_empty() {
                return Err(invalid("output", "path", v, "must not be empty"));
            }
            config.output.path = expand_tilde(v);
        }
        if let Some(v) = section.get("overwrite") {
            config.output.overwrite = parse_bool("output", "overwrite", v)?;
        }
    }

    // [profile] section
    if let Some(section) = ini.section(Some("profile")) {
        if let Some(v) = section.get("strict_zoom") {
            config.profile.strict_zoom = parse_bool("profile", "strict_zoom", v)?;
        }
    }

    // [merge] section
    if let Some(section) = ini.section(Some("merge")) {
        if let Some(v) = section.get("min_area") {
            config.merge.min_area = parse_non_negative("merge", "min_area", v)?;
        }
        if let Some(v) = section.get("min_hole_area") {
            config.merge.min_hole_area = parse_non_negative("merge", "min_hole_area", v)?;
        }
        if let Some(v) = section.get("min_dist") {
            config.merge.min_dist = parse_non_negative("merge", "min_dist", v)?;
        }
        if let Some(v) = section.get("buffer") {
            config.merge.buffer = parse_non_negative("merge", "buffer", v)?;
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.file = expand_tilde(v);
            }
        }
    }

    Ok(config)
}

fn invalid(section: &str, key: &str, value: &str, reason: &str) -> ConfigFileError {
    ConfigFileError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn parse_bool(section: &str, key: &str, value: &str) -> Result<bool, ConfigFileError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Ok(true),
        "false" | "no" | "0" | "off" => Ok(false),
        _ => Err(invalid(section, key, value, "must be 'true' or 'false'")),
    }
}

fn parse_non_negative(section: &str, key: &str, value: &str) -> Result<f64, ConfigFileError> {
    match value.trim().parse::<f64>() {
        Ok(n) if n.is_finite() && n >= 0.0 => Ok(n),
        _ => Err(invalid(
            section,
            key,
            value,
            "must be a non-negative number (tile pixels)",
        )),
    }
}

/// Expand a leading `~/` to the home directory.
pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}
