//! Server-rendered HTML pages
//!
//! Pages are assembled with format! over a shared layout. Every dynamic
//! value passes through [`escape_html`] before interpolation.

use axum::http::StatusCode;

use super::ui::escape_html;
use crate::domain::Album;
use crate::forms::AlbumFormErrors;

/// Shared document frame around every page body
fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} - Album Manager</title>
    <link rel="stylesheet" href="/static/style.css">
</head>
<body>
    <header>
        <h1><a href="/album">Album Manager</a></h1>
    </header>
    <main>
{body}
    </main>
    <footer>album-manager v{version}</footer>
</body>
</html>
"#,
        title = escape_html(title),
        body = body,
        version = env!("CARGO_PKG_VERSION"),
    )
}

/// The album list
pub fn album_list_page(albums: &[Album]) -> String {
    let rows = if albums.is_empty() {
        r#"            <tr><td colspan="4" class="empty">No albums found</td></tr>"#.to_string()
    } else {
        albums.iter().map(album_row).collect::<Vec<_>>().join("\n")
    };

    let body = format!(
        r#"        <h2>Album list</h2>
        <p><a class="button" href="/album/create">Add new album</a></p>
        <table class="album-list">
            <tr><th>Id</th><th>Artist</th><th>Title</th><th></th></tr>
{rows}
        </table>"#
    );

    layout("Albums", &body)
}

fn album_row(album: &Album) -> String {
    let id = album.id().unwrap_or_default();
    format!(
        r#"            <tr>
                <td>{id}</td>
                <td>{artist}</td>
                <td>{title}</td>
                <td>
                    <a href="/album/update/{id}">Update</a>
                    <a href="/album/delete/{id}">Delete</a>
                </td>
            </tr>"#,
        id = id,
        artist = escape_html(album.artist()),
        title = escape_html(album.title()),
    )
}

/// The data-entry form shared by the create and update routes.
///
/// `artist` and `title` carry the values to redisplay; `errors` carries
/// the per-field messages of a rejected submission.
pub fn album_data_page(
    heading: &str,
    action: &str,
    message: &str,
    artist: &str,
    title: &str,
    errors: &AlbumFormErrors,
) -> String {
    let body = format!(
        r#"        <h2>{heading}</h2>
        <p class="message">{message}</p>
        <form class="album-form" method="post" action="{action}">
            <div class="field">
                <label for="artist">Artist</label>
                <input type="text" id="artist" name="artist" value="{artist}">
{artist_error}            </div>
            <div class="field">
                <label for="title">Title</label>
                <input type="text" id="title" name="title" value="{title}">
{title_error}            </div>
            <button type="submit" id="save_album" name="save_album">Save Album</button>
        </form>
        <p><a href="/album">Back to album list</a></p>"#,
        heading = escape_html(heading),
        message = escape_html(message),
        action = action,
        artist = escape_html(artist),
        title = escape_html(title),
        artist_error = field_error(errors.artist),
        title_error = field_error(errors.title),
    );

    layout(heading, &body)
}

fn field_error(message: Option<&'static str>) -> String {
    match message {
        Some(msg) => format!("                <p class=\"field-error\">{}</p>\n", msg),
        None => String::new(),
    }
}

/// The yes/no delete confirmation
pub fn album_delete_page(album: &Album, message: &str) -> String {
    let body = format!(
        r#"        <h2>Delete album</h2>
        <p class="message">{message}</p>
        <table class="album-detail">
            <tr><th>Artist</th><td>{artist}</td></tr>
            <tr><th>Title</th><td>{title}</td></tr>
        </table>
        <form class="album-delete-form" method="post" action="/album/delete/{id}">
            <button type="submit" id="delete_album_yes" name="delete_album_yes" value="Yes">Yes</button>
            <button type="submit" id="delete_album_no" name="delete_album_no" value="No">No</button>
        </form>"#,
        message = escape_html(message),
        artist = escape_html(album.artist()),
        title = escape_html(album.title()),
        id = album.id().unwrap_or_default(),
    );

    layout("Delete album", &body)
}

/// Generic error page; the status line is all the user sees
pub fn error_page(status: StatusCode) -> String {
    let reason = status.canonical_reason().unwrap_or("Error");
    let detail = match status {
        StatusCode::NOT_FOUND => "The page or album you requested does not exist.",
        StatusCode::BAD_REQUEST => "The request could not be understood.",
        _ => "Something went wrong. Please try again later.",
    };

    let body = format!(
        r#"        <h2>{status} {reason}</h2>
        <p>{detail}</p>
        <p><a href="/album">Back to album list</a></p>"#,
        status = status.as_u16(),
        reason = reason,
        detail = detail,
    );

    layout(reason, &body)
}
