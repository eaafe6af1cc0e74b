use crate::error::{ChartError, ChartResult};

use super::{ChartPipelineConfig, TickDensityPolicy};

pub(super) fn validate_tick_density_policy(
    policy: TickDensityPolicy,
) -> ChartResult<TickDensityPolicy> {
    if policy.short_max_duration >= policy.medium_max_duration
        || policy.medium_max_duration >= policy.monthly_max_duration
    {
        return Err(ChartError::InvalidData(
            "tick duration thresholds must be strictly increasing".to_owned(),
        ));
    }

    if policy.short_stride_divisor == 0
        || policy.medium_stride_divisor == 0
        || policy.long_stride_divisor == 0
    {
        return Err(ChartError::InvalidData(
            "tick stride divisors must be > 0".to_owned(),
        ));
    }

    Ok(policy)
}

pub(super) fn validate_pipeline_config(
    config: ChartPipelineConfig,
) -> ChartResult<ChartPipelineConfig> {
    validate_tick_density_policy(config.tick_policy)?;
    config.domain_tuning.validate()?;
    Ok(config)
}
