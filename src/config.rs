use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_OUT_DIR: &str = "icons";
pub const ICO_FILE_NAME: &str = "icon.ico";
pub const PNG_FILE_NAME: &str = "icon.png";

/// Where the generated artifacts go.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Output directory, relative paths resolve against the working directory.
    pub out_dir: PathBuf,
    pub ico_name: String,
    pub png_name: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            ico_name: ICO_FILE_NAME.to_string(),
            png_name: PNG_FILE_NAME.to_string(),
        }
    }
}

impl GeneratorConfig {
    pub fn with_out_dir(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            ..Self::default()
        }
    }

    pub fn ico_path(&self) -> PathBuf {
        self.out_dir.join(&self.ico_name)
    }

    pub fn png_path(&self) -> PathBuf {
        self.out_dir.join(&self.png_name)
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate the placeholder application icon")]
pub struct Args {
    /// Directory the icon files are written to.
    #[arg(long, default_value = DEFAULT_OUT_DIR)]
    pub out_dir: PathBuf,
}

impl From<Args> for GeneratorConfig {
    fn from(args: Args) -> Self {
        Self::with_out_dir(args.out_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_icons_dir() {
        let config = GeneratorConfig::default();
        assert_eq!(config.ico_path(), PathBuf::from("icons").join("icon.ico"));
        assert_eq!(config.png_path(), PathBuf::from("icons").join("icon.png"));
    }

    #[test]
    fn no_arguments_matches_default_config() {
        let args = Args::try_parse_from(["icongen"]).unwrap();
        assert_eq!(GeneratorConfig::from(args), GeneratorConfig::default());
    }

    #[test]
    fn out_dir_flag_overrides_directory_only() {
        let args = Args::try_parse_from(["icongen", "--out-dir", "build/assets"]).unwrap();
        let config = GeneratorConfig::from(args);
        assert_eq!(config.png_path(), PathBuf::from("build/assets").join("icon.png"));
        assert_eq!(config.ico_name, ICO_FILE_NAME);
    }
}
