use ignite_domain as domain;

#[allow(async_fn_in_trait)]
pub trait SettingsService {
    async fn get_settings(&self) -> Result<Settings, String>;
    async fn set_settings(&self, settings: Settings) -> Result<(), String>;
}

#[allow(async_fn_in_trait)]
pub trait SettingsRepository {
    async fn read_settings(&self) -> Result<Settings, String>;
    async fn write_settings(&self, settings: Settings) -> Result<(), String>;
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Muscle group selected when the exercise list is shown for the first time.
    pub default_group: String,
    /// Seconds until a notification disappears on its own.
    pub notification_timeout: u32,
    pub fetch_policy: FetchPolicy,
}

impl Settings {
    #[must_use]
    pub fn default_group(&self) -> domain::Group {
        domain::Group::new(&self.default_group)
    }

    #[must_use]
    pub fn notification_timeout_millis(&self) -> u32 {
        self.notification_timeout.saturating_mul(1000)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_group: "Back".to_string(),
            notification_timeout: 3,
            fetch_policy: FetchPolicy::LastIssuedWins,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPolicy {
    LastIssuedWins,
    LastSettledWins,
}

impl From<FetchPolicy> for domain::SettlePolicy {
    fn from(value: FetchPolicy) -> Self {
        match value {
            FetchPolicy::LastIssuedWins => domain::SettlePolicy::LastIssuedWins,
            FetchPolicy::LastSettledWins => domain::SettlePolicy::LastSettledWins,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.default_group(), domain::Group::from("back"));
        assert_eq!(settings.notification_timeout_millis(), 3000);
        assert_eq!(
            domain::SettlePolicy::from(settings.fetch_policy),
            domain::SettlePolicy::LastIssuedWins
        );
    }

    #[test]
    fn test_settings_missing_fields_use_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{ "default_group": "Costas" }"#).unwrap();
        assert_eq!(
            settings,
            Settings {
                default_group: "Costas".to_string(),
                ..Settings::default()
            }
        );
    }

    #[rstest]
    #[case(FetchPolicy::LastIssuedWins, domain::SettlePolicy::LastIssuedWins)]
    #[case(FetchPolicy::LastSettledWins, domain::SettlePolicy::LastSettledWins)]
    fn test_settle_policy_from_fetch_policy(
        #[case] policy: FetchPolicy,
        #[case] expected: domain::SettlePolicy,
    ) {
        assert_eq!(domain::SettlePolicy::from(policy), expected);
    }

    #[test]
    fn test_notification_timeout_saturates() {
        let settings = Settings {
            notification_timeout: u32::MAX,
            ..Settings::default()
        };
        assert_eq!(settings.notification_timeout_millis(), u32::MAX);
    }
}
