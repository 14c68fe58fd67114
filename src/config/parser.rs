use crate::model::Definition;
use crate::utils::hex_upper;
use crate::{Result, render};
use sha2::{Digest, Sha256};
use std::{fs, path::Path};
use tracing::debug;

/// Read an embedding definition and hash the module name together with the
/// markup it renders to.
pub(crate) fn parse_definition(path: &Path) -> Result<(Definition, String)> {
    let content = fs::read_to_string(path)?;
    let definition: Definition = toml::from_str(&content)?;

    let markup = render(&definition.style).to_markup();
    let mut hasher = Sha256::new();
    hasher.update(definition.module.as_bytes());
    hasher.update([0]);
    hasher.update(markup.as_bytes());
    let hash = hex_upper(hasher.finalize());

    debug!(path = %path.display(), module = %definition.module, "parsed icon definition");
    Ok((definition, hash))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, RenderOptions};

    fn write(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("matchup.toml");
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn style_table_is_optional() {
        let (_dir, path) = write("module = \"icons::matchup\"\n");
        let (definition, _) = parse_definition(&path).unwrap();
        assert_eq!(definition.module, "icons::matchup");
        assert_eq!(definition.style, RenderOptions::default());
    }

    #[test]
    fn style_overrides_are_read() {
        let (_dir, path) = write("module = \"badge\"\n[style]\nfill = \"red\"\nwidth = 100.0\n");
        let (definition, _) = parse_definition(&path).unwrap();
        assert_eq!(definition.style, RenderOptions::new().fill("red").width(100.0));
    }

    #[test]
    fn hash_follows_content() {
        let (_a, first) = write("module = \"badge\"\n");
        let (_b, same) = write("module   =   \"badge\"\n\n");
        let (_c, other) = write("module = \"badge\"\n[style]\nfill = \"red\"\n");

        let (_, h1) = parse_definition(&first).unwrap();
        let (_, h2) = parse_definition(&same).unwrap();
        let (_, h3) = parse_definition(&other).unwrap();
        assert_eq!(h1, h2);
        assert_ne!(h1, h3);
        assert_eq!(h1.len(), 64);
    }

    #[test]
    fn non_finite_sizes_hash_differently() {
        let (_a, nan) = write("module = \"badge\"\n[style]\nwidth = nan\n");
        let (_b, inf) = write("module = \"badge\"\n[style]\nwidth = inf\n");
        let (_c, neg) = write("module = \"badge\"\n[style]\nwidth = -inf\n");

        let (_, h_nan) = parse_definition(&nan).unwrap();
        let (_, h_inf) = parse_definition(&inf).unwrap();
        let (_, h_neg) = parse_definition(&neg).unwrap();
        assert_ne!(h_nan, h_inf);
        assert_ne!(h_inf, h_neg);
    }

    #[test]
    fn module_name_is_part_of_the_hash() {
        let (_a, first) = write("module = \"badge\"\n");
        let (_b, second) = write("module = \"icons::badge\"\n");

        let (_, h1) = parse_definition(&first).unwrap();
        let (_, h2) = parse_definition(&second).unwrap();
        assert_ne!(h1, h2);
    }

    #[test]
    fn unknown_style_keys_are_rejected() {
        let (_dir, path) = write("module = \"badge\"\n[style]\ncolour = \"red\"\n");
        assert!(matches!(parse_definition(&path), Err(Error::Toml(_))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = parse_definition(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
