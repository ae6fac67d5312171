use actix_multipart::form::{text::Text, MultipartCollect, MultipartForm, MultipartFormConfig};
use actix_web::{dev::Payload, http::header::CONTENT_TYPE, web, FromRequest, HttpRequest};
use futures::future::LocalBoxFuture;
use serde::{de::DeserializeOwned, Deserialize, Deserializer};

use crate::shared::api::AppError;
use crate::storage::application::domain::upload_policy::UploadPolicy;

/// Request body of the routes that accept both JSON and `multipart/form-data` (file uploads).
///
/// The variant is chosen from the `Content-Type` header, so neither body is buffered twice.
#[derive(Debug)]
pub enum JsonOrMultipart<J, M> {
    Json(J),
    Multipart(M),
}

fn is_multipart(req: &HttpRequest) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.trim_start().to_ascii_lowercase().starts_with("multipart/form-data"))
        .unwrap_or(false)
}

impl<J, M> FromRequest for JsonOrMultipart<J, M>
where
    J: DeserializeOwned + 'static,
    M: MultipartCollect + 'static,
{
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        if is_multipart(req) {
            let form = MultipartForm::<M>::from_request(req, payload);
            Box::pin(async move { form.await.map(|f| JsonOrMultipart::Multipart(f.0)) })
        } else {
            let json = web::Json::<J>::from_request(req, payload);
            Box::pin(async move { json.await.map(|j| JsonOrMultipart::Json(j.into_inner())) })
        }
    }
}

/// Value of an optional multipart text field.
pub fn text_value(field: Option<Text<String>>) -> Option<String> {
    field.map(Text::into_inner)
}

/// Reads a JSON number or string into text, for numeric fields that multipart clients send as text.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Text(text) => text,
        Raw::Number(number) => number.to_string(),
    }))
}

/// Limits sized for five photos of the maximum size plus text fields.
pub fn custom_multipart_config() -> MultipartFormConfig {
    let max_file = UploadPolicy::MAX_FILE_SIZE_MB * 1024 * 1024;

    MultipartFormConfig::default()
        .total_limit(max_file * 6)
        .memory_limit(2 * 1024 * 1024)
        .error_handler(|err, _req| {
            let message = err.to_string();
            AppError::invalid("files", &message).into()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, post, test, App, HttpResponse};
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct NoteJson {
        title: String,
    }

    #[derive(actix_multipart::form::MultipartForm)]
    struct NoteForm {
        title: Text<String>,
    }

    #[post("/notes")]
    async fn create_note(body: JsonOrMultipart<NoteJson, NoteForm>) -> HttpResponse {
        match body {
            JsonOrMultipart::Json(j) => HttpResponse::Ok().body(format!("json:{}", j.title)),
            JsonOrMultipart::Multipart(m) => {
                HttpResponse::Ok().body(format!("multipart:{}", m.title.into_inner()))
            }
        }
    }

    #[actix_web::test]
    async fn json_body_is_parsed_as_json() {
        let app = test::init_service(App::new().service(create_note)).await;

        let req = test::TestRequest::post()
            .uri("/notes")
            .set_json(serde_json::json!({ "title": "Jazz Fest" }))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;

        assert_eq!(body, web::Bytes::from_static(b"json:Jazz Fest"));
    }

    #[actix_web::test]
    async fn multipart_body_is_parsed_as_form() {
        let app = test::init_service(
            App::new()
                .app_data(custom_multipart_config())
                .service(create_note),
        )
        .await;

        let boundary = "XBOUNDARY";
        let payload = format!(
            "--{b}\r\nContent-Disposition: form-data; name=\"title\"\r\n\r\nSecond Line\r\n--{b}--\r\n",
            b = boundary
        );
        let req = test::TestRequest::post()
            .uri("/notes")
            .insert_header((
                CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            ))
            .set_payload(payload)
            .to_request();
        let body = test::call_and_read_body(&app, req).await;

        assert_eq!(body, web::Bytes::from_static(b"multipart:Second Line"));
    }

    #[actix_web::test]
    async fn malformed_json_is_rejected() {
        let app = test::init_service(App::new().service(create_note)).await;

        let req = test::TestRequest::post()
            .uri("/notes")
            .insert_header((CONTENT_TYPE, "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[::core::prelude::v1::test]
    fn numbers_and_strings_both_read_as_text() {
        #[derive(Deserialize)]
        struct Capacity {
            #[serde(default, deserialize_with = "string_or_number")]
            seats: Option<String>,
        }

        let number: Capacity = serde_json::from_str(r#"{"seats": 250}"#).unwrap();
        let text: Capacity = serde_json::from_str(r#"{"seats": "250"}"#).unwrap();
        let missing: Capacity = serde_json::from_str("{}").unwrap();

        assert_eq!(number.seats.as_deref(), Some("250"));
        assert_eq!(text.seats.as_deref(), Some("250"));
        assert_eq!(missing.seats, None);
    }
}
