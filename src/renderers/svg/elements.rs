//! SVG element rendering
//!
//! Small string builders for the handful of SVG elements a heat-map panel
//! needs. All text content and attribute values pass through `escape_xml`.

/// Escape XML special characters
pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

/// Format a coordinate with at most two decimals and no trailing zeros
pub fn px(value: f32) -> String {
    let s = format!("{:.2}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

pub fn rect(x: f32, y: f32, w: f32, h: f32, fill: &str) -> String {
    format!(
        r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
        px(x),
        px(y),
        px(w),
        px(h),
        escape_xml(fill)
    )
}

/// Rectangle outline
pub fn frame(x: f32, y: f32, w: f32, h: f32, stroke: &str) -> String {
    format!(
        r#"<rect x="{}" y="{}" width="{}" height="{}" fill="none" stroke="{}" stroke-width="1"/>"#,
        px(x),
        px(y),
        px(w),
        px(h),
        escape_xml(stroke)
    )
}

/// Horizontal text anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

impl Anchor {
    fn as_str(&self) -> &'static str {
        match self {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        }
    }
}

/// Text vertically centered on `y`
pub fn text(x: f32, y: f32, content: &str, font_size: f32, fill: &str, anchor: Anchor) -> String {
    format!(
        r#"<text x="{}" y="{}" font-size="{}" fill="{}" text-anchor="{}" dominant-baseline="central">{}</text>"#,
        px(x),
        px(y),
        px(font_size),
        escape_xml(fill),
        anchor.as_str(),
        escape_xml(content)
    )
}

/// Text rotated counter-clockwise by 90 degrees around its position
pub fn vertical_text(x: f32, y: f32, content: &str, font_size: f32, fill: &str) -> String {
    format!(
        r#"<text x="{x}" y="{y}" font-size="{}" fill="{}" text-anchor="middle" dominant-baseline="central" transform="rotate(-90 {x} {y})">{}</text>"#,
        px(font_size),
        escape_xml(fill),
        escape_xml(content),
        x = px(x),
        y = px(y),
    )
}

/// Vertical gradient running from `stops[0]` at the bottom to the last stop at the top
pub fn vertical_gradient(id: &str, stops: &[String]) -> String {
    let last = stops.len().saturating_sub(1).max(1) as f32;
    let mut out = format!(
        r#"<linearGradient id="{}" x1="0" y1="1" x2="0" y2="0">"#,
        escape_xml(id)
    );
    for (i, color) in stops.iter().enumerate() {
        out.push_str(&format!(
            r#"<stop offset="{}" stop-color="{}"/>"#,
            px(i as f32 / last),
            escape_xml(color)
        ));
    }
    out.push_str("</linearGradient>");
    out
}
