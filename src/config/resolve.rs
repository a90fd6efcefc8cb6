use crate::config::{CliConfig, ProjectorConfig};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::Validate;

/// Where the paths and field list of a run come from.
#[derive(Debug, Clone)]
pub enum ActiveConfig {
    Cli(CliConfig),
    File(ProjectorConfig),
}

impl ConfigProvider for ActiveConfig {
    fn input_path(&self) -> &str {
        match self {
            Self::Cli(c) => c.input_path(),
            Self::File(c) => c.input_path(),
        }
    }

    fn output_path(&self) -> &str {
        match self {
            Self::Cli(c) => c.output_path(),
            Self::File(c) => c.output_path(),
        }
    }

    fn fields(&self) -> &[String] {
        match self {
            Self::Cli(c) => c.fields(),
            Self::File(c) => c.fields(),
        }
    }
}

impl Validate for ActiveConfig {
    fn validate(&self) -> Result<()> {
        match self {
            Self::Cli(c) => c.validate(),
            Self::File(c) => c.validate(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RunPlan {
    pub config: ActiveConfig,
    /// `[monitoring] log_level`, only when `--verbose` is off.
    pub log_level: Option<String>,
    pub verbose: bool,
    pub monitor: bool,
}

/// 設定檔整個取代 --input/--output/--fields；--verbose 蓋過 log_level；
/// 任一來源開啟監控即開啟
pub fn resolve(cli: CliConfig, file: Option<ProjectorConfig>) -> RunPlan {
    let verbose = cli.verbose;
    let monitor = cli.monitor || file.as_ref().is_some_and(|c| c.monitoring_enabled());
    let log_level = file
        .as_ref()
        .and_then(|c| c.log_level())
        .filter(|_| !verbose)
        .map(str::to_string);

    let config = match file {
        Some(file) => ActiveConfig::File(file),
        None => ActiveConfig::Cli(cli),
    };

    RunPlan {
        config,
        log_level,
        verbose,
        monitor,
    }
}
