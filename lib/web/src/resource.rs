use crate::error::ServerError;
use crate::negotiation::ResponseFormat;
use crate::AppState;
use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use quadview_client::QueryKind;
use quadview_view::build_tree;

pub async fn handle_resource_get(
    State(state): State<AppState>,
    Path(path): Path<String>,
    format: Result<ResponseFormat, ServerError>,
) -> Result<Response, ServerError> {
    lookup(&state, QueryKind::Resource, &path, format?).await
}

pub async fn handle_cluster_get(
    State(state): State<AppState>,
    Path(path): Path<String>,
    format: Result<ResponseFormat, ServerError>,
) -> Result<Response, ServerError> {
    lookup(&state, QueryKind::Cluster, &path, format?).await
}

async fn lookup(
    state: &AppState,
    kind: QueryKind,
    path: &str,
    format: ResponseFormat,
) -> Result<Response, ServerError> {
    // The browsable path maps back onto the dataset's own identifier space.
    let resource_iri = format!("{}{path}", state.view.dataset_base);
    tracing::info!(resource = %resource_iri, "resource lookup");

    match format {
        ResponseFormat::PresentationTree => {
            let quads = state.client.fetch_quads(kind, &resource_iri).await?;
            let tree = build_tree(&quads, &resource_iri, &state.view)?;
            Ok(Json(tree).into_response())
        }
        ResponseFormat::RdfXml | ResponseFormat::Turtle | ResponseFormat::JsonLd => {
            let body = state
                .client
                .fetch_serialized(kind, &resource_iri, format.media_type())
                .await?;
            Ok(([(header::CONTENT_TYPE, format.media_type())], body).into_response())
        }
    }
}
