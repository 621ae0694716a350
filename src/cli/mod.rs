// src/cli/mod.rs
mod args;
mod value_enum;

pub use args::Args;
use chandas_core::{
    Config, ConfigBuilder, GarblePolicy, MAX_NGRAM, NGramLimits,
    error::{PresentationError, Result},
};
pub use value_enum::{CliAnalysisMode, CliOutputFormat};

fn validate_numeric_args(max_ngram: usize, top_unigrams: usize, top_ngrams: usize) -> Result<()> {
    validate_range("--max-ngram", max_ngram, 1, MAX_NGRAM)?;
    validate_at_least_one("--top-unigrams", top_unigrams)?;
    validate_at_least_one("--top-ngrams", top_ngrams)?;
    Ok(())
}

fn validate_at_least_one(flag: &str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(PresentationError::InvalidValue {
            flag: flag.to_string(),
            value: "0".to_string(),
            reason: "must be at least 1".to_string(),
        }
        .into());
    }
    Ok(())
}

fn validate_range(flag: &str, value: usize, min: usize, max: usize) -> Result<()> {
    if !(min..=max).contains(&value) {
        return Err(PresentationError::InvalidValue {
            flag: flag.to_string(),
            value: value.to_string(),
            reason: format!("must be between {min} and {max}"),
        }
        .into());
    }
    Ok(())
}

impl From<&Args> for ConfigBuilder {
    fn from(args: &Args) -> Self {
        let policy = if args.strict_script { GarblePolicy::Reject } else { GarblePolicy::Warn };
        let limits = NGramLimits {
            max_n: args.max_ngram,
            top_unigrams: args.top_unigrams,
            top_ngrams: args.top_ngrams,
        };

        let mut builder = Config::builder();
        builder
            .inputs(args.inputs.clone())
            .format(args.format)
            .mode(args.mode)
            .wrap_width(args.wrap)
            .garble_policy(policy)
            .output(args.output.clone())
            .limits(limits);
        builder
    }
}

/// Convert parsed CLI arguments into a [`Config`].
///
/// # Errors
///
/// Returns `Err` when a numeric flag is outside its allowed range or the
/// builder rejects the assembled configuration.
pub fn build_config(args: &Args) -> Result<Config> {
    validate_numeric_args(args.max_ngram, args.top_unigrams, args.top_ngrams)?;
    ConfigBuilder::from(args)
        .build()
        .map_err(|e| PresentationError::ConfigBuildFailed(e.to_string()).into())
}
