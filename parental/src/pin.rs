use chrono::{DateTime, Duration, Local};

pub const PIN_LENGTH: usize = 4;
pub const MAX_FAILED_ATTEMPTS: u32 = 5;
pub const LOCKOUT_MINUTES: i64 = 5;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PinVerification {
    Accepted,
    Rejected { attempts_remaining: u32 },
    LockedOut { until: DateTime<Local> },
}

/// Gate in front of the grown-ups area. The clock is passed into every
/// call so the lockout window is testable.
#[derive(Clone, Debug)]
pub struct ParentalPin {
    digits: String,
    failed_attempts: u32,
    locked_until: Option<DateTime<Local>>,
}

impl ParentalPin {
    pub fn new(digits: &str) -> Result<Self, String> {
        validate_pin(digits)?;
        Ok(Self {
            digits: digits.to_string(),
            failed_attempts: 0,
            locked_until: None,
        })
    }

    pub fn verify(&mut self, attempt: &str, now: DateTime<Local>) -> PinVerification {
        if let Some(until) = self.locked_until {
            if now < until {
                return PinVerification::LockedOut { until };
            }
            self.locked_until = None;
            self.failed_attempts = 0;
        }

        if attempt == self.digits {
            self.failed_attempts = 0;
            return PinVerification::Accepted;
        }

        self.failed_attempts += 1;
        if self.failed_attempts >= MAX_FAILED_ATTEMPTS {
            let until = now + Duration::minutes(LOCKOUT_MINUTES);
            self.locked_until = Some(until);
            return PinVerification::LockedOut { until };
        }

        PinVerification::Rejected {
            attempts_remaining: MAX_FAILED_ATTEMPTS - self.failed_attempts,
        }
    }

    pub fn change(
        &mut self,
        current: &str,
        new_digits: &str,
        now: DateTime<Local>,
    ) -> Result<(), String> {
        match self.verify(current, now) {
            PinVerification::Accepted => {
                validate_pin(new_digits)?;
                self.digits = new_digits.to_string();
                self.failed_attempts = 0;
                self.locked_until = None;
                Ok(())
            }
            PinVerification::Rejected { .. } => Err("Current PIN is incorrect".to_string()),
            PinVerification::LockedOut { .. } => Err("PIN entry is locked".to_string()),
        }
    }
}

fn validate_pin(digits: &str) -> Result<(), String> {
    if digits.len() != PIN_LENGTH || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(format!("PIN must be exactly {} digits", PIN_LENGTH));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn at(hour: u32, minute: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 3, 10, hour, minute, 0).unwrap()
    }

    #[test]
    fn test_correct_pin_accepted() {
        let mut pin = ParentalPin::new("1234").unwrap();
        assert_eq!(pin.verify("1234", at(10, 0)), PinVerification::Accepted);
    }

    #[test]
    fn test_rejects_malformed_pin_at_creation() {
        assert!(ParentalPin::new("123").is_err());
        assert!(ParentalPin::new("12345").is_err());
        assert!(ParentalPin::new("12a4").is_err());
    }

    #[test]
    fn test_wrong_pin_counts_down_attempts() {
        let mut pin = ParentalPin::new("1234").unwrap();

        assert_eq!(
            pin.verify("0000", at(10, 0)),
            PinVerification::Rejected {
                attempts_remaining: 4
            }
        );
        assert_eq!(
            pin.verify("1111", at(10, 1)),
            PinVerification::Rejected {
                attempts_remaining: 3
            }
        );
    }

    #[test]
    fn test_success_resets_attempt_counter() {
        let mut pin = ParentalPin::new("1234").unwrap();

        pin.verify("0000", at(10, 0));
        pin.verify("0000", at(10, 1));
        assert_eq!(pin.verify("1234", at(10, 2)), PinVerification::Accepted);

        assert_eq!(
            pin.verify("0000", at(10, 3)),
            PinVerification::Rejected {
                attempts_remaining: 4
            }
        );
    }

    #[test]
    fn test_lockout_after_max_failures_and_expiry() {
        let mut pin = ParentalPin::new("1234").unwrap();

        for _ in 0..4 {
            pin.verify("0000", at(10, 0));
        }
        let fifth = pin.verify("0000", at(10, 0));
        let until = at(10, 0) + Duration::minutes(LOCKOUT_MINUTES);
        assert_eq!(fifth, PinVerification::LockedOut { until });

        // The correct PIN is refused while the lockout holds.
        assert_eq!(
            pin.verify("1234", at(10, 2)),
            PinVerification::LockedOut { until }
        );

        // After the window passes the gate works again.
        assert_eq!(pin.verify("1234", at(10, 6)), PinVerification::Accepted);
    }

    #[test]
    fn test_change_requires_current_pin() {
        let mut pin = ParentalPin::new("1234").unwrap();

        assert!(pin.change("0000", "5678", at(10, 0)).is_err());
        assert!(pin.change("1234", "5678", at(10, 1)).is_ok());
        assert_eq!(pin.verify("5678", at(10, 2)), PinVerification::Accepted);
    }

    #[test]
    fn test_change_rejects_malformed_new_pin() {
        let mut pin = ParentalPin::new("1234").unwrap();
        assert!(pin.change("1234", "56", at(10, 0)).is_err());
        // The old PIN still stands.
        assert_eq!(pin.verify("1234", at(10, 1)), PinVerification::Accepted);
    }
}
