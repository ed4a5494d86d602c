//! HTTP client for the third-party email relay.
//!
//! One submission maps to exactly one POST; the caller decides what to do
//! with the outcome.

use gloo_net::http::Request;
use serde::Serialize;
use thiserror::Error;

use crate::config;

/// The flat record the relay template expects, built from the form fields.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub user_name: String,
    pub user_phone: String,
    pub user_age: String,
    pub user_status: String,
    pub user_rank: String,
    pub user_comment: String,
}

#[derive(Serialize)]
struct RelayRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
}

#[derive(Debug, Error)]
pub enum RelayError {
    /// Missing service or template identifier; detected before any network
    /// attempt is made.
    #[error("relay service/template identifiers are not configured")]
    MissingConfig,
    #[error("relay request failed: {0}")]
    Http(#[from] gloo_net::Error),
    #[error("relay rejected the submission: status {status}: {text}")]
    Rejected { status: u16, text: String },
}

pub struct RelayResponse {
    pub status: u16,
    pub text: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RelayIds {
    pub service_id: &'static str,
    pub template_id: &'static str,
}

impl RelayIds {
    /// Both identifiers are required; a partial configuration is no
    /// configuration.
    pub fn from_parts(
        service_id: Option<&'static str>,
        template_id: Option<&'static str>,
    ) -> Option<Self> {
        match (service_id, template_id) {
            (Some(service_id), Some(template_id)) => Some(Self {
                service_id,
                template_id,
            }),
            _ => None,
        }
    }

    pub fn from_config() -> Option<Self> {
        Self::from_parts(config::service_id(), config::template_id())
    }
}

pub fn is_configured() -> bool {
    RelayIds::from_config().is_some()
}

pub async fn send_application(params: &TemplateParams) -> Result<RelayResponse, RelayError> {
    let ids = RelayIds::from_config().ok_or(RelayError::MissingConfig)?;

    let body = RelayRequest {
        service_id: ids.service_id,
        template_id: ids.template_id,
        user_id: config::public_key().unwrap_or_default(),
        template_params: params,
    };

    let response = Request::post(config::RELAY_ENDPOINT)
        .json(&body)?
        .send()
        .await?;

    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    if response.ok() {
        Ok(RelayResponse { status, text })
    } else {
        Err(RelayError::Rejected { status, text })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_require_both_identifiers() {
        assert_eq!(RelayIds::from_parts(None, None), None);
        assert_eq!(RelayIds::from_parts(Some("service_x"), None), None);
        assert_eq!(RelayIds::from_parts(None, Some("template_y")), None);
        assert_eq!(
            RelayIds::from_parts(Some("service_x"), Some("template_y")),
            Some(RelayIds {
                service_id: "service_x",
                template_id: "template_y",
            })
        );
    }

    #[test]
    fn template_params_serialize_under_relay_field_names() {
        let params = TemplateParams {
            user_name: "Тарас".into(),
            user_phone: "+380501234567".into(),
            user_age: "27".into(),
            user_status: "Цивільний".into(),
            user_rank: "Без звання".into(),
            user_comment: "Хочу на курс".into(),
        };
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json["user_name"], "Тарас");
        assert_eq!(json["user_phone"], "+380501234567");
        assert_eq!(json["user_age"], "27");
        assert_eq!(json["user_status"], "Цивільний");
        assert_eq!(json["user_rank"], "Без звання");
        assert_eq!(json["user_comment"], "Хочу на курс");
    }

    #[test]
    fn request_body_carries_identifiers_and_params() {
        let params = TemplateParams::default();
        let body = RelayRequest {
            service_id: "service_x",
            template_id: "template_y",
            user_id: "key_z",
            template_params: &params,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["service_id"], "service_x");
        assert_eq!(json["template_id"], "template_y");
        assert_eq!(json["user_id"], "key_z");
        assert!(json["template_params"].is_object());
    }
}
