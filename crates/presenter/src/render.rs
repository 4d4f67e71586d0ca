//! Card and grid markup.
//!
//! Every value interpolated here comes from a [`VehicleCard`], which is
//! escaped at projection time, so rendering is plain string assembly.

use crate::card::{Notice, Projection, VehicleCard};

/// Render one card as a grid column.
pub fn render_card(card: &VehicleCard) -> String {
    format!(
        r##"<div class="col-md-4 mb-4">
  <div class="blog_box h-100 d-flex flex-column">
    <div class="blog_img">
      <img src="{src}" alt="{alt}" onerror="this.onerror=null;this.src='{fallback}'">
    </div>
    <div class="btn_main">
      <div class="date_text"><a href="#">{price}</a></div>
    </div>
    <h3 class="blog_text">{heading}</h3>
    <p class="lorem_text">{summary}</p>
    <ul class="list-unstyled mt-2 small">
      <li><strong>Model Code:</strong> {model_code}</li>
      <li><strong>Engine:</strong> {engine}</li>
    </ul>
    <div class="mt-auto read_bt">
      <a href="{href}">View Details
        <span class="arrow_icon"><i class="fa fa-long-arrow-right" aria-hidden="true"></i></span>
      </a>
    </div>
  </div>
</div>
"##,
        src = card.image.src,
        alt = card.alt,
        fallback = card.image.fallback,
        price = card.price,
        heading = card.heading,
        summary = card.summary,
        model_code = card.model_code,
        engine = card.engine,
        href = card.detail_href,
    )
}

/// Render a notice in place of the grid contents.
pub fn render_notice(notice: Notice) -> String {
    let tone = match notice {
        Notice::NoResults => "text-muted",
        Notice::LoadFailed => "text-danger",
    };
    format!(
        r#"<div class="col-12 text-center {tone}">{}</div>"#,
        notice.message()
    )
}

/// Render the inner markup of the results grid.
pub fn render_grid(projections: &[Projection]) -> String {
    if projections.is_empty() {
        return render_notice(Notice::NoResults);
    }
    projections
        .iter()
        .map(|projection| match projection {
            Projection::Card(card) => render_card(card),
            Projection::Notice(notice) => render_notice(*notice),
        })
        .collect()
}
