//! Full HTML pages around the presenter's grid markup.
//!
//! Only the page chrome lives here. Cards and notices come from the
//! presenter; submitted form values echoed back into inputs are escaped the
//! same way record content is.

use matcher::SearchForm;
use motormart::{Controls, SortKey, VehicleCard};
use presenter::escape_markup;

const SORT_LABELS: [(SortKey, &str); 3] = [
    (SortKey::Price, "Price: low to high"),
    (SortKey::Date, "Newest listings"),
    (SortKey::Year, "Year: newest first"),
];

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title}</title>
  <link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bootstrap@4.6.2/dist/css/bootstrap.min.css">
</head>
<body>
<div class="container py-4">
{body}
</div>
</body>
</html>
"#
    )
}

fn text_input(name: &str, label: &str, value: Option<&str>) -> String {
    format!(
        r#"    <div class="col-md-3 mb-2">
      <input type="text" class="form-control" name="{name}" placeholder="{label}" value="{value}">
    </div>
"#,
        value = escape_markup(value.unwrap_or_default()),
    )
}

fn sort_select(sort: Option<SortKey>) -> String {
    let mut options = String::from(r#"      <option value="">Sort by</option>
"#);
    for (key, label) in SORT_LABELS {
        let selected = if sort == Some(key) { " selected" } else { "" };
        options.push_str(&format!(
            "      <option value=\"{}\"{selected}>{label}</option>\n",
            key.as_str()
        ));
    }
    format!(
        r#"  <div class="form-row mb-3">
    <div class="col-md-3 ml-auto">
    <select id="sortBy" name="sort" class="form-control" onchange="this.form.submit()">
{options}    </select>
    </div>
  </div>
"#
    )
}

/// The catalog page: search form, sort selector and results grid.
///
/// The sort selector sits inside the search form so a sort change keeps the
/// current search. A disabled control is left off the page entirely.
pub fn render_catalog_page(
    form: &SearchForm,
    sort: Option<SortKey>,
    controls: Controls,
    grid: &str,
) -> String {
    let mut body = String::from("<h1 class=\"mb-4\">Vehicles</h1>\n");

    if controls.search || controls.sort {
        body.push_str("<form id=\"searchForm\" method=\"get\" action=\"/\">\n");
        if controls.search {
            body.push_str("  <div class=\"form-row\">\n");
            body.push_str(&text_input("make", "Make", form.make.as_deref()));
            body.push_str(&text_input("model", "Model", form.model.as_deref()));
            body.push_str(&text_input("year", "Year", form.year.as_deref()));
            body.push_str(&text_input(
                "enginesize",
                "Engine size (1800 or 1.8)",
                form.enginesize.as_deref(),
            ));
            body.push_str(
                "  </div>\n  <button type=\"submit\" class=\"btn btn-primary mb-3\">Search</button>\n",
            );
        }
        if controls.sort {
            body.push_str(&sort_select(sort));
        }
        body.push_str("</form>\n");
    }

    body.push_str("<div id=\"resultsGrid\" class=\"row\">\n");
    body.push_str(grid);
    body.push_str("</div>\n");

    layout("Vehicles", &body)
}

/// A single vehicle's page. `gallery` entries must already be escaped.
pub fn render_detail_page(card: &VehicleCard, gallery: &[String]) -> String {
    let mut images = String::new();
    for src in gallery {
        images.push_str(&format!(
            "    <img class=\"img-fluid mb-2\" src=\"{src}\" alt=\"{alt}\" onerror=\"this.onerror=null;this.src='{fallback}'\">\n",
            alt = card.alt,
            fallback = card.image.fallback,
        ));
    }
    if images.is_empty() {
        images = format!(
            "    <img class=\"img-fluid mb-2\" src=\"{}\" alt=\"{}\">\n",
            card.image.src, card.alt
        );
    }

    let body = format!(
        r#"<p><a href="/">&larr; Back to listings</a></p>
<div class="row">
  <div class="col-md-7">
{images}  </div>
  <div class="col-md-5">
    <h1 class="blog_text">{heading}</h1>
    <p class="lead">{price}</p>
    <p class="lorem_text">{summary}</p>
    <ul class="list-unstyled">
      <li><strong>Model Code:</strong> {model_code}</li>
      <li><strong>Engine:</strong> {engine}</li>
    </ul>
  </div>
</div>
"#,
        heading = card.heading,
        price = card.price,
        summary = card.summary,
        model_code = card.model_code,
        engine = card.engine,
    );

    layout(&card.alt, &body)
}

/// A page holding a single notice, used when no card can be shown.
pub fn render_notice_page(title: &str, notice_html: &str) -> String {
    let body = format!(
        "<p><a href=\"/\">&larr; Back to listings</a></p>\n<div class=\"row\">\n{notice_html}\n</div>\n"
    );
    layout(title, &body)
}
