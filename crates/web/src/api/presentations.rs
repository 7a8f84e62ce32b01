// Presentation upload, listing, download and delete
// Decision: Upload failures the user can fix re-render the list with a
// message (200); only storage failures become error pages
// Decision: Downloads are not behind the login gate

use axum::{
    body::Bytes,
    extract::{
        multipart::{Multipart, MultipartError},
        Path, State,
    },
    http::header,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Router,
};
use slidebox_core::{content_type_for, UploadError};

use super::common::WebError;
use crate::auth::CurrentUser;
use crate::views;
use crate::AppState;

/// Multipart field carrying the uploaded file
const FILE_FIELD: &str = "file";

/// Where the delete action sends the browser back to
const PRESENTATION_PATH: &str = "/presentation";

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route(
            PRESENTATION_PATH,
            get(list_presentations).post(upload_presentation),
        )
        .route("/uploads/:filename", get(download_presentation))
        .route("/delete/:filename", post(delete_presentation))
        .with_state(state)
}

/// Why an upload request produced no file
enum UploadRejection {
    Invalid(UploadError),
    Body(MultipartError),
}

impl From<UploadError> for UploadRejection {
    fn from(err: UploadError) -> Self {
        Self::Invalid(err)
    }
}

impl From<MultipartError> for UploadRejection {
    fn from(err: MultipartError) -> Self {
        Self::Body(err)
    }
}

/// Pull the `file` field out of the form.
///
/// Form fields without a filename are not files and are skipped; a file
/// field with an empty filename means the user chose nothing.
async fn read_file_field(
    multipart: Option<Multipart>,
) -> Result<(String, Bytes), UploadRejection> {
    let Some(mut multipart) = multipart else {
        return Err(UploadError::NoFileProvided.into());
    };

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let Some(filename) = field.file_name().map(str::to_string) else {
            continue;
        };
        if filename.is_empty() {
            return Err(UploadError::NoFileSelected.into());
        }

        let bytes = field.bytes().await?;
        return Ok((filename, bytes));
    }

    Err(UploadError::NoFileProvided.into())
}

async fn list_presentations(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Html<String>, WebError> {
    let files = state.files.list().await?;
    Ok(Html(views::render_presentation(user.username(), &files, None)))
}

async fn upload_presentation(
    State(state): State<AppState>,
    user: CurrentUser,
    multipart: Option<Multipart>,
) -> Result<Html<String>, WebError> {
    let upload = match read_file_field(multipart).await {
        Ok((filename, bytes)) => state
            .files
            .save(&filename, &bytes)
            .await
            .map(|name| (name, bytes.len())),
        Err(UploadRejection::Invalid(e)) => Err(e),
        Err(UploadRejection::Body(e)) => {
            tracing::warn!(username = %user.username(), "Malformed upload body: {}", e);
            return Err(WebError::new(e.status(), e.body_text()));
        }
    };

    let error = match upload {
        Ok((name, size)) => {
            tracing::info!(
                username = %user.username(),
                file = %name,
                bytes = size,
                "Stored upload"
            );
            None
        }
        Err(e) if e.is_user_error() => {
            tracing::debug!(username = %user.username(), "Upload rejected: {}", e);
            Some(e.to_string())
        }
        Err(e) => return Err(e.into()),
    };

    let files = state.files.list().await?;
    Ok(Html(views::render_presentation(
        user.username(),
        &files,
        error.as_deref(),
    )))
}

async fn download_presentation(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Response, WebError> {
    let file = state.files.fetch(&filename).await?;

    let headers = [
        (header::CONTENT_TYPE, content_type_for(&file.name).to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("inline; filename=\"{}\"", file.name),
        ),
    ];
    Ok((headers, file.bytes).into_response())
}

async fn delete_presentation(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(filename): Path<String>,
) -> Result<Redirect, WebError> {
    state.files.delete(&filename).await?;
    tracing::info!(username = %user.username(), file = %filename, "Deleted upload");
    Ok(Redirect::to(PRESENTATION_PATH))
}
