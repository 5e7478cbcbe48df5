use common::Validate;
use serde::{Deserialize, Serialize};

/// Parental policy knobs. `daily_limit_minutes` of zero means unlimited;
/// the bedtime window may wrap past midnight (e.g. 20 -> 7).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParentalSettings {
    pub daily_limit_minutes: u32,
    pub bedtime_enabled: bool,
    pub bedtime_start_hour: u32,
    pub bedtime_end_hour: u32,
    pub require_pin_for_settings: bool,
}

impl Default for ParentalSettings {
    fn default() -> Self {
        Self {
            daily_limit_minutes: 120,
            bedtime_enabled: true,
            bedtime_start_hour: 20,
            bedtime_end_hour: 7,
            require_pin_for_settings: true,
        }
    }
}

impl Validate for ParentalSettings {
    fn validate(&self) -> Result<(), String> {
        if self.bedtime_start_hour > 23 {
            return Err(format!(
                "Bedtime start hour must be between 0 and 23, got {}",
                self.bedtime_start_hour
            ));
        }
        if self.bedtime_end_hour > 23 {
            return Err(format!(
                "Bedtime end hour must be between 0 and 23, got {}",
                self.bedtime_end_hour
            ));
        }
        if self.bedtime_enabled && self.bedtime_start_hour == self.bedtime_end_hour {
            return Err("Bedtime start and end hours must differ".to_string());
        }
        Ok(())
    }
}
