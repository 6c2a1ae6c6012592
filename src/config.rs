use crate::assign::code::EmptyCodePolicy;
use crate::assign::{CapacityPolicy, CourseOrder};
use crate::error::ConfigurationError;
use crate::util;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

pub const DEFAULT_CLASS_SIZE: i64 = 5;

fn default_class_size() -> i64 {
    env::var("DEFAULT_CLASS_SIZE")
        .ok()
        .and_then(|it| it.parse().ok())
        .unwrap_or(DEFAULT_CLASS_SIZE)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(skip)]
    file_path: PathBuf,

    /// Maximum students per generated class, unless a request sets its own.
    #[serde(default = "default_class_size")]
    pub class_size: i64,

    #[serde(default)]
    pub capacity_policy: CapacityPolicy,
    #[serde(default)]
    pub empty_code_policy: EmptyCodePolicy,
    #[serde(default)]
    pub course_order: CourseOrder,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            file_path: config_dir().join("settings.yml"),
            class_size: default_class_size(),
            capacity_policy: CapacityPolicy::default(),
            empty_code_policy: EmptyCodePolicy::default(),
            course_order: CourseOrder::default(),
        }
    }
}

#[inline]
fn config_dir() -> PathBuf {
    PathBuf::from(env::var("CONFIG_DIR").unwrap_or("./config".to_string()))
}

impl Config {
    pub fn load() -> Result<Config, ConfigurationError> {
        let config_file = util::find_first_subpath(
            config_dir(),
            &["settings.yml", "settings.yaml"],
            Path::exists,
        )
        .ok_or_else(|| ConfigurationError::NotFound(config_dir()))?;

        let file = File::open(&config_file)?;
        let mut config: Config = serde_yaml::from_reader(BufReader::new(file))?;
        config.file_path = config_file;
        config.validate()?;

        Ok(config)
    }

    pub fn save(&self) -> Result<(), ConfigurationError> {
        if let Some(dir) = self.file_path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let file = File::create(&self.file_path)?;
        let mut out = BufWriter::new(file);
        serde_yaml::to_writer(&mut out, self)?;
        out.flush()?;
        Ok(())
    }

    /// A size below 1 can only be configured when it gets clamped.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.class_size < 1 && self.capacity_policy == CapacityPolicy::Reject {
            return Err(ConfigurationError::Invalid(format!(
                "class_size must be at least 1, got {}",
                self.class_size
            )));
        }
        Ok(())
    }
}
