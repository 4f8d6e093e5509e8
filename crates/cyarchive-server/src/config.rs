//! Server configuration.

use std::path::PathBuf;

use clap::Parser;

/// Directory under the static root that holds one folder per game.
pub const RESOURCES_DIR: &str = "resources";

/// Cybiko archive command line arguments.
#[derive(Debug, Parser)]
#[command(name = "cyarchive")]
#[command(about = "Static archive of Cybiko games")]
#[command(version)]
pub struct Args {
    /// Address to listen on for HTTP requests.
    #[arg(short, long, default_value = "0.0.0.0:32768")]
    pub listen: String,

    /// Static root. Served under /public; games are read from its resources/ folder.
    #[arg(short, long, default_value = "/static")]
    pub static_dir: PathBuf,

    /// Directory with index.html and/or game.html overriding the builtin templates.
    #[arg(short, long)]
    pub template_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ArchiveConfig {
    /// Address to listen on for HTTP requests.
    pub listen_addr: String,
    /// Static root served under `/public`.
    pub static_dir: PathBuf,
    /// Template overrides. Builtin templates are used when unset.
    pub template_dir: Option<PathBuf>,
}

impl ArchiveConfig {
    /// Root scanned for games.
    pub fn resources_dir(&self) -> PathBuf {
        self.static_dir.join(RESOURCES_DIR)
    }
}

impl From<&Args> for ArchiveConfig {
    fn from(args: &Args) -> Self {
        Self {
            listen_addr: args.listen.clone(),
            static_dir: args.static_dir.clone(),
            template_dir: args.template_dir.clone(),
        }
    }
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:32768".to_string(),
            static_dir: PathBuf::from("/static"),
            template_dir: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_args() {
        let args = Args::parse_from(["cyarchive"]);
        let config = ArchiveConfig::from(&args);
        let default = ArchiveConfig::default();

        assert_eq!(config.listen_addr, default.listen_addr);
        assert_eq!(config.static_dir, default.static_dir);
        assert_eq!(config.template_dir, None);
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_resources_dir() {
        let args = Args::parse_from(["cyarchive", "--static-dir", "/srv/cy", "-l", "127.0.0.1:8080"]);
        let config = ArchiveConfig::from(&args);

        assert_eq!(config.listen_addr, "127.0.0.1:8080");
        assert_eq!(config.resources_dir(), PathBuf::from("/srv/cy/resources"));
    }

    #[test]
    fn test_template_dir() {
        let args = Args::parse_from(["cyarchive", "--template-dir", "/srv/cy-templates"]);
        let config = ArchiveConfig::from(&args);
        assert_eq!(config.template_dir, Some(PathBuf::from("/srv/cy-templates")));

        let args = Args::parse_from(["cyarchive", "-t", "themes"]);
        assert_eq!(args.template_dir, Some(PathBuf::from("themes")));
    }
}
