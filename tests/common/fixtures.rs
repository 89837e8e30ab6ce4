/// A chapter marker with its title and section titles.
pub fn chapter(title: &str, sections: &[&str]) -> String {
    let sections: String = sections
        .iter()
        .map(|s| format!(r#"<h3 class="section">{s}</h3><p>text</p>"#))
        .collect();
    format!(r#"<div class="chapter"><h2 class="title">{title}</h2>{sections}</div>"#)
}

/// A contents container, scoped to a chapter when `id` is given.
pub fn container(id: Option<&str>) -> String {
    match id {
        Some(id) => format!(r#"<div class="contents" id="{id}"></div>"#),
        None => r#"<div class="contents"></div>"#.to_string(),
    }
}

/// A complete XHTML page around `body`.
pub fn page(body: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <!DOCTYPE html>\n\
         <html xmlns=\"http://www.w3.org/1999/xhtml\"><head><title>Manual</title></head><body>{body}</body></html>"
    )
}

/// Two chapters, the second with one section, and a sidebar scoped to the second.
pub fn shapes_and_joints() -> String {
    page(&format!(
        "{}{}{}",
        container(Some("contents-Shapes____Joints")),
        chapter("Intro", &[]),
        chapter("Shapes &amp; Joints", &["Pivot Joint"]),
    ))
}
