use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use quadview_client::ClientError;
use quadview_view::ViewError;

#[derive(thiserror::Error, Debug)]
pub enum ServerError {
    #[error("Content negotiation failed: {0}")]
    ContentNegotiation(String),
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error(transparent)]
    View(#[from] ViewError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ServerError::ContentNegotiation(msg) => (StatusCode::NOT_ACCEPTABLE, msg),
            ServerError::Client(e) => (client_status(&e), e.to_string()),
            ServerError::View(e) => (view_status(&e), e.to_string()),
        };

        (status, message).into_response()
    }
}

fn client_status(error: &ClientError) -> StatusCode {
    match error {
        ClientError::MalformedResourceIdentifier(_) => StatusCode::BAD_REQUEST,
        ClientError::NoDataForResource(_) | ClientError::ClusterQueryNotConfigured => {
            StatusCode::NOT_FOUND
        }
        // Retrying may help; the caller must be able to tell this apart
        // from a plain "not found".
        ClientError::UpstreamUnavailable(_) | ClientError::Parse(_) => StatusCode::BAD_GATEWAY,
    }
}

fn view_status(error: &ViewError) -> StatusCode {
    match error {
        ViewError::MalformedResourceIdentifier(_) => StatusCode::BAD_REQUEST,
        ViewError::NoDataForResource(_) => StatusCode::NOT_FOUND,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_data_maps_to_not_found_and_upstream_to_bad_gateway() {
        assert_eq!(
            client_status(&ClientError::NoDataForResource("http://ex.org/A".to_owned())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            view_status(&ViewError::NoDataForResource("http://ex.org/A".to_owned())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            client_status(&ClientError::ClusterQueryNotConfigured),
            StatusCode::NOT_FOUND
        );
    }
}
