// Copyright 2025 the Planegrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG sink for `planegrid_demo`.

use std::fmt::Write as _;

use kurbo::Size;
use peniko::Color;
use planegrid::{GridSegment, GridSink, LabelPlacement};

/// Collects grid primitives as SVG elements.
#[derive(Debug)]
pub(crate) struct SvgSink {
    size: Size,
    background: Color,
    elements: Vec<String>,
}

impl SvgSink {
    pub(crate) fn new(size: Size, background: Color) -> Self {
        Self {
            size,
            background,
            elements: Vec::new(),
        }
    }

    pub(crate) fn to_svg_string(&self) -> String {
        let mut out = String::new();
        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        let _ = writeln!(
            out,
            r#"viewBox="0 0 {w} {h}" width="{w}" height="{h}">"#,
            w = self.size.width,
            h = self.size.height,
        );
        let _ = write!(
            out,
            r#"<rect x="0" y="0" width="{}" height="{}""#,
            self.size.width, self.size.height
        );
        write_paint_attr(&mut out, "fill", self.background);
        out.push_str("/>\n");
        for element in &self.elements {
            out.push_str(element);
            out.push('\n');
        }
        out.push_str("</svg>\n");
        out
    }
}

impl GridSink for SvgSink {
    fn clear_grid(&mut self) {
        self.elements.clear();
    }

    fn stroke(&mut self, segment: &GridSegment) {
        let line = segment.line;
        let mut el = format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke-width="{}""#,
            line.p0.x, line.p0.y, line.p1.x, line.p1.y, segment.width
        );
        write_paint_attr(&mut el, "stroke", segment.color);
        el.push_str("/>");
        self.elements.push(el);
    }

    fn text(&mut self, label: &LabelPlacement) {
        let mut el = format!(
            r#"<text x="{}" y="{}" font-size="{}" font-family="{}" dominant-baseline="hanging""#,
            label.position.x,
            label.position.y,
            label.style.font_size,
            escape_xml(label.style.font_family.as_css_family()),
        );
        write_paint_attr(&mut el, "fill", label.color);
        el.push('>');
        el.push_str(&escape_xml(&label.text));
        el.push_str("</text>");
        self.elements.push(el);
    }
}

fn svg_paint(color: Color) -> (String, Option<f64>) {
    let rgba = color.to_rgba8();
    let value = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
    let opacity = if rgba.a == 255 {
        None
    } else {
        Some(f64::from(rgba.a) / 255.0)
    };
    (value, opacity)
}

fn write_paint_attr(out: &mut String, name: &str, color: Color) {
    let (value, opacity) = svg_paint(color);
    let _ = write!(out, r#" {name}="{value}""#);
    if let Some(o) = opacity {
        let _ = write!(out, r#" {name}-opacity="{o}""#);
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
