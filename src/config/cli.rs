use crate::core::projection::default_fields;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_distinct_paths, validate_field_list, validate_path, Validate,
};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "recipe-projector")]
#[command(about = "Keep only the input/output fields of every record in a JSON array")]
pub struct CliConfig {
    #[arg(long, default_value = "recipes.json", help = "JSON array to read")]
    pub input: String,

    #[arg(long, default_value = "data_output.json", help = "File to write the projection to")]
    pub output: String,

    #[arg(long, value_delimiter = ',', default_values_t = default_fields())]
    pub fields: Vec<String>,

    #[arg(long, help = "TOML config file; replaces --input/--output/--fields")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log time and memory per phase")]
    pub monitor: bool,
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input
    }

    fn output_path(&self) -> &str {
        &self.output
    }

    fn fields(&self) -> &[String] {
        &self.fields
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input)?;
        validate_path("output", &self.output)?;
        validate_distinct_paths(&self.input, &self.output)?;
        validate_field_list("fields", &self.fields)
    }
}
