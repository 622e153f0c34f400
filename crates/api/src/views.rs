//! View rendering: pure functions from handler-supplied data to HTML.
//!
//! Deliberately template-free — each page is a small function building
//! escaped markup into a shared layout.

use axum::response::Html;

use gamedex_core::types::DbId;
use gamedex_db::models::developer::Developer;
use gamedex_db::models::game::{Game, GameListing};
use gamedex_db::models::genre::Genre;

/// Escape text for interpolation into HTML body or attribute positions.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head><meta charset=\"utf-8\"><title>{title} | Gamedex</title></head>\n\
         <body>\n\
         <nav><a href=\"/\">Games</a> | <a href=\"/developers\">Developers</a> | \
         <a href=\"/genres\">Genres</a></nav>\n\
         <h1>{title}</h1>\n\
         {body}\n\
         </body>\n\
         </html>\n",
        title = escape(title),
    ))
}

// ---------------------------------------------------------------------------
// Games
// ---------------------------------------------------------------------------

pub fn games_index(games: &[GameListing]) -> Html<String> {
    let mut rows = String::new();
    for game in games {
        let cover = match &game.image_url {
            Some(url) => format!("<img src=\"{}\" alt=\"cover\" width=\"64\">", escape(url)),
            None => String::new(),
        };
        rows.push_str(&format!(
            "<tr><td>{cover}</td><td>{title}</td><td>{date}</td>\
             <td>{developers}</td><td>{genres}</td>\
             <td><a href=\"/games/{id}/edit\">Edit</a></td>\
             <td><form method=\"post\" action=\"/games/{id}/delete\">\
             <button type=\"submit\">Delete</button></form></td></tr>\n",
            title = escape(&game.title),
            date = game.release_date,
            developers = escape(game.developers.as_deref().unwrap_or("")),
            genres = escape(game.genres.as_deref().unwrap_or("")),
            id = game.id,
        ));
    }

    let body = format!(
        "<p><a href=\"/games/add\">Add a game</a></p>\n\
         <table>\n\
         <tr><th></th><th>Title</th><th>Released</th><th>Developers</th>\
         <th>Genres</th><th></th><th></th></tr>\n\
         {rows}</table>"
    );
    layout("Games", &body)
}

/// The add and edit forms share this renderer; `game` is `None` on add
/// and on an edit request for an id that no longer exists.
pub fn game_form(
    action: &str,
    game: Option<&Game>,
    developers: &[Developer],
    genres: &[Genre],
    selected_developers: &[DbId],
    selected_genres: &[DbId],
) -> Html<String> {
    let title = game.map(|g| g.title.as_str()).unwrap_or("");
    let release_date = game
        .map(|g| g.release_date.to_string())
        .unwrap_or_default();

    let developer_options: String = developers
        .iter()
        .map(|d| option(d.id, &d.name, selected_developers))
        .collect();
    let genre_options: String = genres
        .iter()
        .map(|g| option(g.id, &g.name, selected_genres))
        .collect();

    let existing_image = match game.and_then(|g| g.image_url.as_deref()) {
        Some(url) => format!(
            "<img src=\"{url}\" alt=\"current cover\" width=\"64\">\n\
             <input type=\"hidden\" name=\"existing_image\" value=\"{url}\">\n",
            url = escape(url),
        ),
        None => String::new(),
    };

    let heading = if game.is_some() { "Edit game" } else { "Add game" };
    let body = format!(
        "<form method=\"post\" action=\"{action}\" enctype=\"multipart/form-data\">\n\
         <label>Title <input type=\"text\" name=\"title\" value=\"{title}\"></label><br>\n\
         <label>Release date <input type=\"date\" name=\"release_date\" value=\"{release_date}\"></label><br>\n\
         <label>Developers <select name=\"developers\" multiple>{developer_options}</select></label><br>\n\
         <label>Genres <select name=\"genres\" multiple>{genre_options}</select></label><br>\n\
         {existing_image}\
         <label>Cover image <input type=\"file\" name=\"image_url\" accept=\"image/*\"></label><br>\n\
         <button type=\"submit\">Save</button>\n\
         </form>",
        action = escape(action),
        title = escape(title),
    );
    layout(heading, &body)
}

fn option(id: DbId, name: &str, selected: &[DbId]) -> String {
    let selected = if selected.contains(&id) {
        " selected"
    } else {
        ""
    };
    format!(
        "<option value=\"{id}\"{selected}>{}</option>",
        escape(name)
    )
}

// ---------------------------------------------------------------------------
// Developers
// ---------------------------------------------------------------------------

pub fn developers_index(developers: &[Developer]) -> Html<String> {
    let mut rows = String::new();
    for dev in developers {
        rows.push_str(&format!(
            "<tr><td>{name}</td><td>{country}</td>\
             <td><a href=\"/developers/{id}/edit\">Edit</a></td>\
             <td><form method=\"post\" action=\"/developers/{id}/delete\">\
             <button type=\"submit\">Delete</button></form></td></tr>\n",
            name = escape(&dev.name),
            country = escape(&dev.country),
            id = dev.id,
        ));
    }

    let body = format!(
        "<p><a href=\"/developers/add\">Add a developer</a></p>\n\
         <table>\n<tr><th>Name</th><th>Country</th><th></th><th></th></tr>\n{rows}</table>"
    );
    layout("Developers", &body)
}

pub fn developer_form(action: &str, developer: Option<&Developer>) -> Html<String> {
    let name = developer.map(|d| d.name.as_str()).unwrap_or("");
    let country = developer.map(|d| d.country.as_str()).unwrap_or("");
    let heading = if developer.is_some() {
        "Edit developer"
    } else {
        "Add developer"
    };

    let body = format!(
        "<form method=\"post\" action=\"{action}\">\n\
         <label>Name <input type=\"text\" name=\"name\" value=\"{name}\"></label><br>\n\
         <label>Country <input type=\"text\" name=\"country\" value=\"{country}\"></label><br>\n\
         <button type=\"submit\">Save</button>\n\
         </form>",
        action = escape(action),
        name = escape(name),
        country = escape(country),
    );
    layout(heading, &body)
}

// ---------------------------------------------------------------------------
// Genres
// ---------------------------------------------------------------------------

pub fn genres_index(genres: &[Genre]) -> Html<String> {
    let mut rows = String::new();
    for genre in genres {
        rows.push_str(&format!(
            "<tr><td>{name}</td>\
             <td><a href=\"/genres/{id}/edit\">Edit</a></td>\
             <td><form method=\"post\" action=\"/genres/{id}/delete\">\
             <button type=\"submit\">Delete</button></form></td></tr>\n",
            name = escape(&genre.name),
            id = genre.id,
        ));
    }

    let body = format!(
        "<p><a href=\"/genres/add\">Add a genre</a></p>\n\
         <table>\n<tr><th>Name</th><th></th><th></th></tr>\n{rows}</table>"
    );
    layout("Genres", &body)
}

pub fn genre_form(action: &str, genre: Option<&Genre>) -> Html<String> {
    let name = genre.map(|g| g.name.as_str()).unwrap_or("");
    let heading = if genre.is_some() { "Edit genre" } else { "Add genre" };

    let body = format!(
        "<form method=\"post\" action=\"{action}\">\n\
         <label>Name <input type=\"text\" name=\"name\" value=\"{name}\"></label><br>\n\
         <button type=\"submit\">Save</button>\n\
         </form>",
        action = escape(action),
        name = escape(name),
    );
    layout(heading, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_in_user_text() {
        assert_eq!(
            escape("<b>\"A & B\"</b>"),
            "&lt;b&gt;&quot;A &amp; B&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn selected_options_carry_the_selected_attribute() {
        let html = option(3, "RPG", &[3, 4]);
        assert_eq!(html, "<option value=\"3\" selected>RPG</option>");

        let html = option(5, "RPG", &[3, 4]);
        assert_eq!(html, "<option value=\"5\">RPG</option>");
    }
}
