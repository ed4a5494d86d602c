//! Build-time configuration for the email relay.
//!
//! The identifiers are baked into the binary at compile time, one build per
//! deployment environment.

pub const RELAY_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

pub fn public_key() -> Option<&'static str> {
    non_empty(option_env!("EMAILJS_PUBLIC_KEY"))
}

pub fn service_id() -> Option<&'static str> {
    non_empty(option_env!("EMAILJS_SERVICE_ID"))
}

pub fn template_id() -> Option<&'static str> {
    non_empty(option_env!("EMAILJS_TEMPLATE_ID"))
}

fn non_empty(value: Option<&'static str>) -> Option<&'static str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_rejects_blank_values() {
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some("")), None);
        assert_eq!(non_empty(Some("   ")), None);
        assert_eq!(non_empty(Some("service_abc")), Some("service_abc"));
    }
}
