//! Social preview images and the meta tags that advertise them.
//!
//! A preview is requested with `title`, `subtitle`, `category` and `color`
//! query parameters, every one of which has a default, so rendering never
//! fails because of missing or malformed input.

use std::io::Cursor;
use std::sync::{Arc, OnceLock};

use image::{DynamicImage, ImageFormat, Rgb, RgbaImage};
use resvg::usvg::fontdb;
use resvg::{tiny_skia, usvg};
use tracing::debug;
use url::form_urlencoded;

use crate::catalog::Catalog;
use crate::config::{SiteConfig, SITE_NAME, SITE_TAGLINE};
use crate::deeplink::DeepLinkRequest;
use crate::error::{CatalogError, CatalogResult};
use crate::types::Card;

pub const PREVIEW_WIDTH: u32 = 1200;
pub const PREVIEW_HEIGHT: u32 = 630;
pub const PREVIEW_PATH: &str = "/api/og";
pub const DEFAULT_PREVIEW_COLOR: &str = "#6E34C8";
/// Static image used when no card is selected
pub const SITE_PREVIEW_PATH: &str = "/images/og-image.png";

const PADDING: u32 = 40;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewParams {
    pub title: String,
    pub subtitle: String,
    /// Category display name; empty hides the category line
    pub category: String,
    pub color: String,
}

impl Default for PreviewParams {
    fn default() -> Self {
        Self {
            title: SITE_NAME.to_string(),
            subtitle: SITE_TAGLINE.to_string(),
            category: String::new(),
            color: DEFAULT_PREVIEW_COLOR.to_string(),
        }
    }
}

impl PreviewParams {
    pub fn for_card(card: &Card, category_name: &str, color: &str) -> Self {
        Self {
            title: card.title.clone(),
            subtitle: card.subtitle.clone(),
            category: category_name.to_string(),
            color: color.to_string(),
        }
    }

    /// Parse preview query parameters, filling blanks with defaults
    pub fn from_query(query: &str) -> Self {
        let mut params = Self::default();
        let query = query.trim_start_matches('?');
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            if value.is_empty() {
                continue;
            }
            match key.as_ref() {
                "title" => params.title = value.into_owned(),
                "subtitle" => params.subtitle = value.into_owned(),
                "category" => params.category = value.into_owned(),
                "color" => params.color = value.into_owned(),
                _ => {}
            }
        }
        params
    }

    /// Preview endpoint URL under `base_url`
    pub fn to_url(&self, base_url: &str) -> String {
        format!(
            "{}{}?title={}&subtitle={}&category={}&color={}",
            base_url.trim_end_matches('/'),
            PREVIEW_PATH,
            urlencoding::encode(&self.title),
            urlencoding::encode(&self.subtitle),
            urlencoding::encode(&self.category),
            urlencoding::encode(&self.color),
        )
    }

    /// Accent color as RGB, falling back to the default on bad input
    pub fn accent_rgb(&self) -> Rgb<u8> {
        parse_hex_color(&self.color)
            .or_else(|| parse_hex_color(DEFAULT_PREVIEW_COLOR))
            .unwrap_or(Rgb([0x6E, 0x34, 0xC8]))
    }
}

/// Parse `#RRGGBB` or `#RGB`
pub fn parse_hex_color(value: &str) -> Option<Rgb<u8>> {
    let hex = value.trim().strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        6 => Some(Rgb([
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        ])),
        3 => {
            let mut rgb = [0u8; 3];
            for (i, c) in hex.chars().enumerate() {
                let v = c.to_digit(16)? as u8;
                rgb[i] = v * 17;
            }
            Some(Rgb(rgb))
        }
        _ => None,
    }
}

const FONT_FAMILY: &str = "DejaVu Sans";
const FONT_REGULAR: &[u8] = include_bytes!("../assets/fonts/DejaVuSans.ttf");
const FONT_BOLD: &[u8] = include_bytes!("../assets/fonts/DejaVuSans-Bold.ttf");

const FOOTER_CREDIT: &str = "lanceshields.design";

/// Font sizes in px, with average advance as a fraction of the size
const CATEGORY_SIZE: f32 = 24.0;
const TITLE_SIZE: f32 = 64.0;
const SUBTITLE_SIZE: f32 = 32.0;
const TITLE_ADVANCE: f32 = 0.62;
const BODY_ADVANCE: f32 = 0.55;

static FONT_DB: OnceLock<Arc<fontdb::Database>> = OnceLock::new();

fn font_db() -> Arc<fontdb::Database> {
    FONT_DB
        .get_or_init(|| {
            let mut db = fontdb::Database::new();
            db.load_font_data(FONT_REGULAR.to_vec());
            db.load_font_data(FONT_BOLD.to_vec());
            db.set_sans_serif_family(FONT_FAMILY);
            Arc::new(db)
        })
        .clone()
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Greedy word wrap to roughly `max_width` px
fn wrap_text(text: &str, size: f32, advance: f32, max_width: f32) -> Vec<String> {
    let max_chars = ((max_width / (size * advance)) as usize).max(1);
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = current.chars().count() + word.chars().count() + usize::from(!current.is_empty());
        if !current.is_empty() && needed > max_chars {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// One `<text>` element per line, top edge at `top`. Returns the
/// markup and the bottom edge.
fn text_block(lines: &[String], top: f32, size: f32, line_height: f32, attrs: &str) -> (String, f32) {
    let step = size * line_height;
    let mut svg = String::new();
    for (i, line) in lines.iter().enumerate() {
        let baseline = top + step * i as f32 + size * 0.9;
        svg.push_str(&format!(
            r#"<text x="{PADDING}" y="{baseline:.1}" font-size="{size}" {attrs}>{}</text>"#,
            escape_xml(line)
        ));
    }
    (svg, top + step * lines.len() as f32)
}

/// Lay out the preview as SVG markup
pub fn preview_svg(params: &PreviewParams) -> String {
    let Rgb([r, g, b]) = params.accent_rgb();
    let accent = format!("#{r:02x}{g:02x}{b:02x}");
    let content_width = (PREVIEW_WIDTH - 2 * PADDING) as f32;
    let text_attrs = format!(r#"font-family="{FONT_FAMILY}" fill="{accent}""#);

    let mut body = String::new();
    let mut y = PADDING as f32;

    if !params.category.is_empty() {
        let (svg, bottom) = text_block(
            &[params.category.clone()],
            y,
            CATEGORY_SIZE,
            1.2,
            &text_attrs,
        );
        body.push_str(&svg);
        y = bottom + 16.0;
    }

    let title = wrap_text(&params.title, TITLE_SIZE, TITLE_ADVANCE, content_width);
    let (svg, bottom) = text_block(
        &title,
        y,
        TITLE_SIZE,
        1.1,
        &format!(r#"{text_attrs} font-weight="700""#),
    );
    body.push_str(&svg);
    y = bottom + 16.0;

    let subtitle = wrap_text(&params.subtitle, SUBTITLE_SIZE, BODY_ADVANCE, content_width);
    let (svg, _) = text_block(&subtitle, y, SUBTITLE_SIZE, 1.2, &text_attrs);
    body.push_str(&svg);

    let footer_y = PREVIEW_HEIGHT - PADDING - 6;
    let right = PREVIEW_WIDTH - PADDING;

    format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            r#"<defs><linearGradient id="bg" x1="0" y1="0" x2="1" y2="1">"#,
            r##"<stop offset="0" stop-color="#ffffff"/><stop offset="1" stop-color="#f5f5f5"/>"##,
            r#"</linearGradient></defs>"#,
            r#"<rect width="{w}" height="{h}" fill="url(#bg)"/>"#,
            "{body}",
            r##"<text x="{pad}" y="{fy}" font-family="{font}" font-size="24" font-weight="700" fill="#111111">{site}</text>"##,
            r##"<text x="{right}" y="{fy}" font-family="{font}" font-size="18" fill="#666666" text-anchor="end">{credit}</text>"##,
            "</svg>"
        ),
        w = PREVIEW_WIDTH,
        h = PREVIEW_HEIGHT,
        body = body,
        pad = PADDING,
        fy = footer_y,
        right = right,
        font = FONT_FAMILY,
        site = escape_xml(SITE_NAME),
        credit = FOOTER_CREDIT,
    )
}

/// Render the 1200×630 preview as PNG bytes.
///
/// A white to light-grey diagonal gradient, the category line, title and
/// subtitle in the accent color, and the site footer. Text is set in the
/// bundled DejaVu Sans so output does not depend on installed fonts.
pub fn render_png(params: &PreviewParams) -> CatalogResult<Vec<u8>> {
    let svg = preview_svg(params);

    let mut options = usvg::Options::default();
    options.fontdb = font_db();
    let tree = usvg::Tree::from_str(&svg, &options)
        .map_err(|e| CatalogError::Image(format!("SVG parse error: {e}")))?;

    let mut pixmap = tiny_skia::Pixmap::new(PREVIEW_WIDTH, PREVIEW_HEIGHT)
        .ok_or_else(|| CatalogError::Image("pixmap alloc failed".to_string()))?;
    resvg::render(&tree, tiny_skia::Transform::identity(), &mut pixmap.as_mut());

    // The background is opaque, so premultiplied and straight RGBA agree
    let img = RgbaImage::from_raw(PREVIEW_WIDTH, PREVIEW_HEIGHT, pixmap.take())
        .ok_or_else(|| CatalogError::Image("pixmap size mismatch".to_string()))?;

    let mut bytes = Vec::new();
    DynamicImage::ImageRgba8(img).write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    debug!("Rendered preview for {:?} ({} bytes)", params.title, bytes.len());
    Ok(bytes)
}

/// Open Graph / Twitter card values for a page
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetaTags {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub page_url: String,
}

impl MetaTags {
    pub const TWITTER_CARD: &'static str = "summary_large_image";

    pub fn site_default(site: &SiteConfig, page_url: &str) -> Self {
        Self {
            title: site.site_name.clone(),
            description: site.tagline.clone(),
            image_url: format!("{}{}", site.base_url, SITE_PREVIEW_PATH),
            page_url: page_url.to_string(),
        }
    }

    pub fn for_card(
        card: &Card,
        category_name: &str,
        color: &str,
        site: &SiteConfig,
        page_url: &str,
    ) -> Self {
        Self {
            title: format!("{} | {}", card.title, site.site_name),
            description: format!(
                "{} - {} card from {}",
                card.subtitle, category_name, site.site_name
            ),
            image_url: PreviewParams::for_card(card, category_name, color).to_url(&site.base_url),
            page_url: page_url.to_string(),
        }
    }

    /// Tags for the card a deep link opens. A link naming only a category,
    /// or a card that category lacks, advertises its first card. `None`
    /// when the category does not resolve.
    pub fn for_request(
        catalog: &Catalog,
        request: &DeepLinkRequest,
        site: &SiteConfig,
        page_url: &str,
    ) -> Option<Self> {
        let category = catalog.category(request.category_id.as_ref()?)?;
        let card = request
            .card_id
            .as_ref()
            .and_then(|card_id| catalog.find_card(&category.id, card_id))
            .map(|(_, card)| card)
            .or_else(|| category.cards.first())?;
        Some(Self::for_card(card, &category.name, &category.color, site, page_url))
    }
}
