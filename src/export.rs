//! Export of normalized documents.
//!
//! - `json`: the canonical document, pretty-printed.
//! - `design`: the flattened form consumed by the design-tool plugin.
//! - `html` / `react`: static markup sharing one stylesheet. Buttons render as
//!   `<button>`, free-entry fields as `<input>`, headings as `<h1>`, other
//!   leaves as `<p>`; components with children become `<div>` wrappers.

use std::fmt::Write as _;
use std::str::FromStr;

use schema::{Component, ComponentProfile, Document, FlatKind};
use serde::{Deserialize, Serialize};

use crate::PipelineError;

/// Shared stylesheet for the HTML and React exports.
pub const EXPORT_CSS: &str = "\
body { font-family: Inter, sans-serif; margin: 20px; }
section { margin-bottom: 32px; }
button { padding: 10px 20px; margin: 5px; background: #3B82F6; color: #FFFFFF; border: none; border-radius: 8px; }
input { padding: 8px; margin: 5px; border: 1px solid #D1D5DB; border-radius: 6px; }
h1 { font-size: 24px; margin: 12px 0; }
p { margin: 10px 0; }
.wf-group { padding: 12px; border: 1px dashed #D1D5DB; margin: 8px 0; }
";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    Json,
    Html,
    React,
    DesignTool,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Html => "html",
            ExportFormat::React => "react",
            ExportFormat::DesignTool => "design",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "html" => Ok(ExportFormat::Html),
            "react" | "jsx" => Ok(ExportFormat::React),
            "design" | "design_tool" | "figma" => Ok(ExportFormat::DesignTool),
            other => Err(PipelineError::Export(format!("unknown export format `{other}`"))),
        }
    }
}

/// Output of [`export`]. `css` is set for the markup formats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    pub format: ExportFormat,
    pub body: String,
    pub css: Option<String>,
}

/// Render `doc` in the requested format.
pub fn export(doc: &Document, format: ExportFormat) -> Result<Export, PipelineError> {
    let (body, css) = match format {
        ExportFormat::Json => (to_json(doc)?, None),
        ExportFormat::DesignTool => (to_json(&normalize::flatten(doc))?, None),
        ExportFormat::Html => (to_html(doc), Some(EXPORT_CSS.to_string())),
        ExportFormat::React => (to_react_jsx(doc), Some(EXPORT_CSS.to_string())),
    };
    Ok(Export { format, body, css })
}

fn to_json(doc: &Document) -> Result<String, PipelineError> {
    serde_json::to_string_pretty(doc).map_err(|e| PipelineError::Export(e.to_string()))
}

/// Standalone HTML page with the stylesheet inlined.
pub fn to_html(doc: &Document) -> String {
    let title = escape(doc.title.as_deref().unwrap_or("Wireframe"));
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    let _ = writeln!(out, "<title>{title}</title>");
    let _ = writeln!(out, "<style>\n{EXPORT_CSS}</style>");
    out.push_str("</head>\n<body>\n");
    render_sections(doc, Markup::Html, 0, &mut out);
    out.push_str("</body>\n</html>\n");
    out
}

/// React function component that renders the document.
pub fn to_react_jsx(doc: &Document) -> String {
    let mut out = String::new();
    out.push_str("import React from 'react';\n\n");
    out.push_str("const WireframeComponent = () => {\n  return (\n    <div>\n");
    render_sections(doc, Markup::Jsx, 3, &mut out);
    out.push_str("    </div>\n  );\n};\n\nexport default WireframeComponent;\n");
    out
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Markup {
    Html,
    Jsx,
}

impl Markup {
    fn class_attr(self) -> &'static str {
        match self {
            Markup::Html => "class",
            Markup::Jsx => "className",
        }
    }

    fn void_close(self) -> &'static str {
        match self {
            Markup::Html => ">",
            Markup::Jsx => " />",
        }
    }

    fn text(self, raw: &str) -> String {
        match self {
            Markup::Html => escape(raw),
            Markup::Jsx => escape(raw).replace('{', "&#123;").replace('}', "&#125;"),
        }
    }
}

fn render_sections(doc: &Document, markup: Markup, indent: usize, out: &mut String) {
    match (&doc.pages, &doc.components) {
        (Some(pages), _) => {
            for page in pages {
                let pad = "  ".repeat(indent);
                let _ = writeln!(
                    out,
                    "{pad}<section data-path=\"{}\">",
                    escape(&page.path)
                );
                render_list(&page.components, markup, indent + 1, out);
                let _ = writeln!(out, "{pad}</section>");
            }
        }
        (None, Some(components)) => render_list(components, markup, indent, out),
        (None, None) => {}
    }
}

fn render_list(list: &[Component], markup: Markup, indent: usize, out: &mut String) {
    for component in list {
        render_component(component, markup, indent, out);
    }
}

fn render_component(c: &Component, markup: Markup, indent: usize, out: &mut String) {
    let pad = "  ".repeat(indent);
    let class = markup.class_attr();

    if let Some(children) = c.children.as_deref().filter(|ch| !ch.is_empty()) {
        let _ = writeln!(
            out,
            "{pad}<div {class}=\"wf-group wf-{}\">",
            escape(&c.kind)
        );
        render_list(children, markup, indent + 1, out);
        let _ = writeln!(out, "{pad}</div>");
        return;
    }

    let text = markup.text(&c.text);
    match leaf_tag(c) {
        Leaf::Button => {
            let _ = writeln!(out, "{pad}<button>{text}</button>");
        }
        Leaf::Input => {
            let placeholder = escape(c.placeholder.as_deref().unwrap_or(&c.text));
            let _ = writeln!(
                out,
                "{pad}<input type=\"text\" placeholder=\"{placeholder}\"{}",
                markup.void_close()
            );
        }
        Leaf::Heading => {
            let _ = writeln!(out, "{pad}<h1>{text}</h1>");
        }
        Leaf::Paragraph => {
            let _ = writeln!(out, "{pad}<p>{text}</p>");
        }
    }
}

enum Leaf {
    Button,
    Input,
    Heading,
    Paragraph,
}

fn leaf_tag(c: &Component) -> Leaf {
    if c.kind == "heading" {
        return Leaf::Heading;
    }
    match FlatKind::from_type(&c.kind) {
        Some(FlatKind::Button) => Leaf::Button,
        Some(FlatKind::Input) => Leaf::Input,
        Some(FlatKind::Text) => Leaf::Paragraph,
        None => match ComponentProfile::for_type(&c.kind).kind {
            "textarea" => Leaf::Input,
            _ => Leaf::Paragraph,
        },
    }
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
