//! Text transforms that turn a CMS page export into plain static HTML.

use lazy_static::lazy_static;
use regex::{NoExpand, Regex};

pub const SECTIONS_PLACEHOLDER: &str = "<!-- Sections will be inserted here -->";
pub const FOOTER_PLACEHOLDER: &str = "<!-- Footer will be inserted here -->";

lazy_static! {
    // Editor-only classes and attributes carried by exported snippets
    static ref COLORED_LEVEL: Regex = Regex::new(r"\s+o_colored_level").unwrap();
    static ref SNIPPET_TEXT: Regex = Regex::new(r"\s+o_default_snippet_text").unwrap();
    static ref DATA_ATTRS: Regex =
        Regex::new(r#"\s+data-(?:snippet|name|vcss)="[^"]*""#).unwrap();
    static ref ANIMATION_CLASSES: Regex = Regex::new(r#"\s+o_anim(?:ate|_)[^"\s]*"#).unwrap();
    static ref STRUCTURE_CLASSES: Regex = Regex::new(r"\s+oe_(?:structure|empty)").unwrap();
    static ref LEADING_SNIPPET_TEXT: Regex =
        Regex::new(r#"class="o_default_snippet_text\s*"#).unwrap();
    static ref EMPTY_CLASS: Regex = Regex::new(r#"class=(?:"\s*"|'\s*')"#).unwrap();
    static ref SPACE_RUNS: Regex = Regex::new(r"  +").unwrap();

    static ref IMAGE_DIR: Regex = Regex::new(r"/medical_website/static/src/img/").unwrap();
    static ref CMS_IMAGE_URL: Regex = Regex::new(r#"/web/image/website/1/[^"']*"#).unwrap();

    static ref SECTION: Regex = Regex::new(r"(?s)<section[^>]*>.*?</section>").unwrap();
    static ref FOOTER: Regex = Regex::new(r#"(?s)<footer id="footer"[^>]*>.*?</footer>"#).unwrap();
}

fn strip(html: &str, re: &Regex) -> String {
    re.replace_all(html, "").into_owned()
}

/// Clean a raw page export: editor classes and attributes go, image
/// references are pointed at the local `img/` directory.
pub fn clean_export(html: &str) -> String {
    let mut html = strip(html, &COLORED_LEVEL);
    for re in [&*SNIPPET_TEXT, &*DATA_ATTRS, &*ANIMATION_CLASSES, &*CMS_IMAGE_URL] {
        html = strip(&html, re);
    }
    IMAGE_DIR.replace_all(&html, "img/").into_owned()
}

/// Every `<section>` element, in document order.
pub fn sections(html: &str) -> Vec<&str> {
    SECTION.find_iter(html).map(|m| m.as_str()).collect()
}

pub fn fill_sections(template: &str, sections: &[&str]) -> String {
    template.replace(SECTIONS_PLACEHOLDER, &sections.join("\n"))
}

pub fn clean_footer(footer: &str) -> String {
    strip(&strip(footer, &COLORED_LEVEL), &SNIPPET_TEXT)
}

/// Put `footer` into the page: at the placeholder if there is one,
/// otherwise in place of the existing `<footer id="footer">` element.
pub fn insert_footer(page: &str, footer: &str) -> String {
    if page.contains(FOOTER_PLACEHOLDER) {
        return page.replace(FOOTER_PLACEHOLDER, footer);
    }
    FOOTER.replace_all(page, NoExpand(footer)).into_owned()
}

/// Final pass over an assembled page.
pub fn clean_page(html: &str) -> String {
    // Keep the attribute open when the snippet class leads a class list
    let mut html = LEADING_SNIPPET_TEXT.replace_all(html, r#"class=""#).into_owned();
    for re in [&*SNIPPET_TEXT, &*ANIMATION_CLASSES, &*STRUCTURE_CLASSES, &*DATA_ATTRS] {
        html = strip(&html, re);
    }
    html = strip(&html, &EMPTY_CLASS);
    SPACE_RUNS.replace_all(&html, " ").into_owned()
}
