use crate::env::ReadEnv;

const DEFAULT_PORT: u16 = 1337;
const DEFAULT_WEBHOOK_PATH: &str = "/sms";

/// Configuration for the SMS todo webhook server.
///
/// Resolved from environment variables:
/// - `PORT`: HTTP listening port (default: 1337)
/// - `SMS_WEBHOOK_PATH`: route the messaging gateway posts to (default: `/sms`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmsConfig {
    pub port: u16,
    pub webhook_path: String,
}

impl Default for SmsConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            webhook_path: DEFAULT_WEBHOOK_PATH.to_string(),
        }
    }
}

impl SmsConfig {
    pub fn from_env<E: ReadEnv>(env: &E) -> Self {
        Self {
            port: env
                .var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            webhook_path: env
                .var("SMS_WEBHOOK_PATH")
                .ok()
                .filter(|p| !p.trim_matches('/').is_empty())
                .map(|p| normalize_path(&p))
                .unwrap_or_else(|| DEFAULT_WEBHOOK_PATH.to_string()),
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_webhook_path(mut self, path: &str) -> Self {
        self.webhook_path = normalize_path(path);
        self
    }
}

fn normalize_path(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::InMemoryEnv;

    #[test]
    fn defaults_when_no_env_vars() {
        let config = SmsConfig::from_env(&InMemoryEnv::new());

        assert_eq!(config.port, 1337);
        assert_eq!(config.webhook_path, "/sms");
        assert_eq!(config, SmsConfig::default());
    }

    #[test]
    fn reads_all_env_vars() {
        let env = InMemoryEnv::new();
        env.set("PORT", "9090");
        env.set("SMS_WEBHOOK_PATH", "/twilio/inbound");

        let config = SmsConfig::from_env(&env);

        assert_eq!(config.port, 9090);
        assert_eq!(config.webhook_path, "/twilio/inbound");
    }

    #[test]
    fn invalid_port_falls_back_to_default() {
        let env = InMemoryEnv::new();
        env.set("PORT", "not-a-number");

        assert_eq!(SmsConfig::from_env(&env).port, 1337);
    }

    #[test]
    fn path_without_leading_slash_is_normalized() {
        let env = InMemoryEnv::new();
        env.set("SMS_WEBHOOK_PATH", "inbound");

        assert_eq!(SmsConfig::from_env(&env).webhook_path, "/inbound");
    }

    #[test]
    fn root_or_empty_path_falls_back_to_default() {
        for value in ["", "/", "//"] {
            let env = InMemoryEnv::new();
            env.set("SMS_WEBHOOK_PATH", value);

            assert_eq!(SmsConfig::from_env(&env).webhook_path, "/sms");
        }
    }

    #[test]
    fn builder_overrides() {
        let config = SmsConfig::default()
            .with_port(4000)
            .with_webhook_path("hooks/sms");

        assert_eq!(config.port, 4000);
        assert_eq!(config.webhook_path, "/hooks/sms");
    }
}
