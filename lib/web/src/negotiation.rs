use crate::error::ServerError;
use crate::AppState;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use headers::HeaderMapExt;
use headers_accept::Accept;
use mediatype::names::{APPLICATION, HTML, JSON, TEXT, TURTLE};
use mediatype::{MediaType, Name};

/// The output mode a resource lookup was negotiated into.
///
/// Browsers (and anything asking for JSON) get the presentation tree; the
/// three RDF serializations are relayed from the endpoint verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    PresentationTree,
    RdfXml,
    Turtle,
    JsonLd,
}

impl ResponseFormat {
    pub fn media_type(self) -> &'static str {
        match self {
            ResponseFormat::PresentationTree => "application/json",
            ResponseFormat::RdfXml => "application/rdf+xml",
            ResponseFormat::Turtle => "text/turtle",
            ResponseFormat::JsonLd => "application/ld+json",
        }
    }

    fn from_media_type(media_type: &MediaType<'_>) -> Option<Self> {
        match media_type.to_string().as_str() {
            "application/json" | "text/html" => Some(ResponseFormat::PresentationTree),
            "application/rdf+xml" => Some(ResponseFormat::RdfXml),
            "text/turtle" => Some(ResponseFormat::Turtle),
            "application/ld+json" => Some(ResponseFormat::JsonLd),
            _ => None,
        }
    }
}

/// Handles the content-negotiation for resource lookups.
impl FromRequestParts<AppState> for ResponseFormat {
    type Rejection = ServerError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        static MEDIA_TYPES: [MediaType<'_>; 5] = [
            MediaType::new(APPLICATION, JSON),
            MediaType::new(TEXT, HTML),
            MediaType::new(APPLICATION, Name::new_unchecked("rdf+xml")),
            MediaType::new(TEXT, TURTLE),
            MediaType::new(APPLICATION, Name::new_unchecked("ld+json")),
        ];
        static DEFAULT_MEDIA_TYPE: MediaType<'_> = MediaType::new(APPLICATION, JSON);

        let accept = parts.headers.typed_get::<Accept>();
        let media_type = negotiate(accept, &MEDIA_TYPES, &DEFAULT_MEDIA_TYPE)?;

        ResponseFormat::from_media_type(&media_type).ok_or(ServerError::ContentNegotiation(
            format!("Could not map negotiated media type '{media_type}' to an output mode."),
        ))
    }
}

fn negotiate<'media>(
    accept: Option<Accept>,
    available: &'media [MediaType<'media>],
    default: &'media MediaType<'media>,
) -> Result<MediaType<'media>, ServerError> {
    let Some(accept) = accept else {
        return Ok(default.clone());
    };

    match accept.negotiate(available) {
        None => Err(ServerError::ContentNegotiation(
            "The accept header does not provide any supported format like \
             application/json, text/turtle, application/rdf+xml or application/ld+json."
                .to_owned(),
        )),
        Some(result) => Ok(result.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_types_map_to_output_modes() {
        let turtle = MediaType::new(TEXT, TURTLE);
        assert_eq!(
            ResponseFormat::from_media_type(&turtle),
            Some(ResponseFormat::Turtle)
        );

        let html = MediaType::new(TEXT, HTML);
        assert_eq!(
            ResponseFormat::from_media_type(&html),
            Some(ResponseFormat::PresentationTree)
        );
    }

    #[test]
    fn missing_accept_header_defaults_to_the_tree() {
        let available = [MediaType::new(TEXT, TURTLE)];
        let default = MediaType::new(APPLICATION, JSON);
        let media_type = negotiate(None, &available, &default).unwrap();
        assert_eq!(
            ResponseFormat::from_media_type(&media_type),
            Some(ResponseFormat::PresentationTree)
        );
    }
}
