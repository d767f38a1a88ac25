//! Environment-driven proptest case counts shared by every property suite.

use std::env;

/// Environment variable overriding the number of cases per property.
pub const CASES_ENV_KEY: &str = "WAYPATH_PBT_CASES";

/// Case budget for one property suite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestProfile {
    cases: u32,
}

impl ProptestProfile {
    /// Reads [`CASES_ENV_KEY`], falling back to `default_cases` when it is
    /// unset or invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use waypath_test_support::proptest_profile::ProptestProfile;
    ///
    /// let profile = ProptestProfile::load(64);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32) -> Self {
        let cases = match env::var(CASES_ENV_KEY) {
            Ok(raw) => parse_cases(&raw).unwrap_or_else(|reason| {
                tracing::warn!(
                    env = CASES_ENV_KEY,
                    raw = %raw,
                    reason = %reason,
                    "invalid property-test case override; using default",
                );
                default_cases
            }),
            Err(_) => default_cases,
        };
        Self { cases }
    }

    /// Number of cases to run per property.
    #[must_use]
    pub const fn cases(&self) -> u32 {
        self.cases
    }
}

fn parse_cases(raw: &str) -> Result<u32, String> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err("cases must be > 0".to_owned()),
        Ok(cases) => Ok(cases),
        Err(error) => Err(format!("parse error: {error}")),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use rstest::rstest;

    use super::*;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct CasesOverride {
        original: Option<String>,
    }

    impl CasesOverride {
        fn new(value: Option<&str>) -> Self {
            let original = env::var(CASES_ENV_KEY).ok();
            match value {
                // SAFETY: tests serialize access with ENV_LOCK.
                Some(value) => unsafe { env::set_var(CASES_ENV_KEY, value) },
                // SAFETY: tests serialize access with ENV_LOCK.
                None => unsafe { env::remove_var(CASES_ENV_KEY) },
            }
            Self { original }
        }
    }

    impl Drop for CasesOverride {
        fn drop(&mut self) {
            match &self.original {
                // SAFETY: tests serialize access with ENV_LOCK.
                Some(value) => unsafe { env::set_var(CASES_ENV_KEY, value) },
                // SAFETY: tests serialize access with ENV_LOCK.
                None => unsafe { env::remove_var(CASES_ENV_KEY) },
            }
        }
    }

    #[rstest]
    #[case::unset(None, 64)]
    #[case::one(Some("1"), 1)]
    #[case::padded(Some(" 250 "), 250)]
    #[case::zero(Some("0"), 64)]
    #[case::negative(Some("-1"), 64)]
    #[case::text(Some("many"), 64)]
    fn load_reads_the_override(#[case] raw: Option<&str>, #[case] expected: u32) {
        let _lock = ENV_LOCK.lock().expect("env lock");
        let _override = CasesOverride::new(raw);
        assert_eq!(ProptestProfile::load(64).cases(), expected);
    }
}
