//! HTML rendering of the carousel, used by the export action.

use crate::core::pagination::Pagination;
use crate::core::slide::Slide;

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn render_slide(slide: &Slide) -> String {
    let item = slide.item();
    format!(
        r#"<article data-id="{index}" class="slide {tag}">
<div class="img-container">
  <img class="slider-img" src="{src}" alt="" />
  <div class="img-text-box">
    <p>{name}</p>
  </div>
  <p class="index">{index}</p>
</div>
</article>"#,
        index = slide.index(),
        tag = slide.tag().class_name(),
        src = escape(&item.image_url),
        name = escape(&item.display_name),
    )
}

pub fn render_slides(slides: &[Slide]) -> String {
    slides
        .iter()
        .map(render_slide)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn render_pagination(pagination: &Pagination) -> String {
    pagination
        .dots()
        .iter()
        .map(|dot| {
            if dot.current {
                r#"<div class="dot pagination-active"></div>"#
            } else {
                r#"<div class="dot"></div>"#
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Slide container and pagination row, ready to drop into a page.
pub fn render_document(slides: &[Slide], pagination: &Pagination) -> String {
    format!(
        "<section class=\"slide-container\">\n{}\n</section>\n<div class=\"pagination\">\n{}\n</div>\n",
        render_slides(slides),
        render_pagination(pagination)
    )
}
