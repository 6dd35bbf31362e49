//! Album CRUD route handlers
//!
//! Every write route follows the same flow: parse the body, validate,
//! call the repository, then redirect to the list on success or
//! re-render the form with a message. Validation failure and
//! persistence failure both stay on the form; only success redirects,
//! so a refresh can never repeat a POST.

use axum::extract::{Form, Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};

use super::pages;
use crate::domain::Album;
use crate::error::{ApiError, ApiResult};
use crate::forms::{AlbumFormData, AlbumFormErrors, DeleteFormData};
use crate::AppState;

const CREATE_HEADING: &str = "Create new album";
const UPDATE_HEADING: &str = "Update album";
const CHECK_INPUT_MSG: &str = "Please check your input!";
const NOT_SAVED_MSG: &str = "The album could not be saved!";

/// GET /
pub async fn home() -> Redirect {
    Redirect::to("/album")
}

/// GET /album
pub async fn album_list(State(state): State<AppState>) -> ApiResult<Html<String>> {
    let albums = state.albums.fetch_all().await?;
    Ok(Html(pages::album_list_page(&albums)))
}

/// GET /album/create
pub async fn create_form() -> Html<String> {
    Html(pages::album_data_page(
        CREATE_HEADING,
        "/album/create",
        "Please enter the new album!",
        "",
        "",
        &AlbumFormErrors::default(),
    ))
}

/// POST /album/create
pub async fn create_handle(
    State(state): State<AppState>,
    Form(form): Form<AlbumFormData>,
) -> ApiResult<Response> {
    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => {
            let page = pages::album_data_page(
                CREATE_HEADING,
                "/album/create",
                CHECK_INPUT_MSG,
                form.raw_artist(),
                form.raw_title(),
                &errors,
            );
            return Ok(Html(page).into_response());
        }
    };

    // Input already passed the ruleset; a constructor failure here is a
    // programmer error, not a user one
    let album = Album::new(input.artist, input.title)
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    if state.albums.save(&album).await? {
        Ok(Redirect::to("/album").into_response())
    } else {
        let page = pages::album_data_page(
            CREATE_HEADING,
            "/album/create",
            NOT_SAVED_MSG,
            album.artist(),
            album.title(),
            &AlbumFormErrors::default(),
        );
        Ok(Html(page).into_response())
    }
}

/// GET /album/update/:id
pub async fn update_form(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Html<String>> {
    let album = fetch_album_or_404(&state, id).await?;

    Ok(Html(pages::album_data_page(
        UPDATE_HEADING,
        &format!("/album/update/{}", id),
        "Please change the album!",
        album.artist(),
        album.title(),
        &AlbumFormErrors::default(),
    )))
}

/// POST /album/update/:id
pub async fn update_handle(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<AlbumFormData>,
) -> ApiResult<Response> {
    let action = format!("/album/update/{}", id);

    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => {
            let page = pages::album_data_page(
                UPDATE_HEADING,
                &action,
                CHECK_INPUT_MSG,
                form.raw_artist(),
                form.raw_title(),
                &errors,
            );
            return Ok(Html(page).into_response());
        }
    };

    // The target must exist, and the id comes from the path alone; the
    // body cannot repoint the update
    fetch_album_or_404(&state, id).await?;

    let album = Album::with_id(id, input.artist, input.title)
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    if state.albums.save(&album).await? {
        Ok(Redirect::to("/album").into_response())
    } else {
        let page = pages::album_data_page(
            UPDATE_HEADING,
            &action,
            NOT_SAVED_MSG,
            album.artist(),
            album.title(),
            &AlbumFormErrors::default(),
        );
        Ok(Html(page).into_response())
    }
}

/// GET /album/delete/:id
pub async fn delete_form(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Html<String>> {
    let album = fetch_album_or_404(&state, id).await?;

    Ok(Html(pages::album_delete_page(
        &album,
        "Do you want to delete this album?",
    )))
}

/// POST /album/delete/:id
///
/// Deletes only when the affirmative field is present, then redirects to
/// the list whatever the choice was. A row that vanished in between is a
/// silent no-op.
pub async fn delete_handle(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<DeleteFormData>,
) -> ApiResult<Redirect> {
    if form.confirmed() {
        if let Some(album) = state.albums.fetch_single(id).await? {
            state.albums.delete(&album).await?;
        }
    }

    Ok(Redirect::to("/album"))
}

async fn fetch_album_or_404(state: &AppState, id: i64) -> ApiResult<Album> {
    if id < 1 {
        return Err(ApiError::NotFound(format!("album {}", id)));
    }

    state
        .albums
        .fetch_single(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("album {}", id)))
}
