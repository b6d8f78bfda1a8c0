//! `<head>` meta tag rendering.
//!
//! Produces the SEO and social-preview tags for a [`SiteMetadata`] as an
//! HTML fragment, one element per line, ready to be placed inside `<head>`.
//! Values are written as-is apart from XML escaping; empty values are skipped.

use crate::config::SiteMetadata;
use anyhow::Result;
use quick_xml::{
    Writer,
    events::{BytesEnd, BytesStart, BytesText, Event},
};
use std::io::{Cursor, Write};

pub type XmlWriter = Writer<Cursor<Vec<u8>>>;

/// Render every tag for `meta`.
pub fn render_head(meta: &SiteMetadata) -> Result<String> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));
    write_head_content(&mut writer, meta)?;
    Ok(String::from_utf8(writer.into_inner().into_inner())?)
}

/// Write the tags in document order.
pub fn write_head_content(writer: &mut XmlWriter, meta: &SiteMetadata) -> Result<()> {
    if !meta.title.is_empty() {
        write_text_element(writer, "title", &meta.title)?;
    }
    write_named(writer, "description", &meta.description)?;
    write_named(writer, "keywords", &meta.keywords)?;
    write_named(writer, "author", &meta.author)?;

    if !meta.site_url.is_empty() {
        write_empty_elem(
            writer,
            "link",
            &[("rel", "canonical"), ("href", &meta.site_url)],
        )?;
    }

    let og = &meta.opengraph;
    write_property(writer, "og:title", &og.title)?;
    write_property(writer, "og:type", &og.kind)?;
    write_property(writer, "og:image", &og.image)?;
    write_property(writer, "og:site_name", &meta.site_name)?;
    write_property(writer, "og:url", &meta.public_url)?;

    let twitter = &meta.twitter;
    if twitter.is_empty() {
        return Ok(());
    }
    for (name, value) in [
        ("twitter:card", &twitter.card),
        ("twitter:site", &twitter.site),
        ("twitter:creator", &twitter.creator),
    ] {
        if let Some(value) = value {
            write_named(writer, name, value)?;
        }
    }
    // Only paired with a card tag that was actually written.
    if twitter.card.as_deref().is_some_and(|card| !card.is_empty()) {
        write_named(writer, "twitter:image", &meta.social_image)?;
    }

    Ok(())
}

/// `<meta name=".." content="..">`
fn write_named(writer: &mut XmlWriter, name: &str, content: &str) -> Result<()> {
    if content.is_empty() {
        return Ok(());
    }
    write_empty_elem(writer, "meta", &[("name", name), ("content", content)])
}

/// `<meta property=".." content="..">`, the Open Graph form.
fn write_property(writer: &mut XmlWriter, property: &str, content: &str) -> Result<()> {
    if content.is_empty() {
        return Ok(());
    }
    write_empty_elem(
        writer,
        "meta",
        &[("property", property), ("content", content)],
    )
}

/// Write a text element: `<tag>text</tag>`.
#[inline]
fn write_text_element(writer: &mut XmlWriter, tag: &str, text: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    writer.get_mut().write_all(b"\n")?;
    Ok(())
}

/// Write an empty element with attributes: `<tag attr1="val1" ... />`.
#[inline]
fn write_empty_elem(writer: &mut XmlWriter, tag: &str, attrs: &[(&str, &str)]) -> Result<()> {
    let mut elem = BytesStart::new(tag);
    for (k, v) in attrs {
        elem.push_attribute((*k, *v));
    }
    writer.write_event(Event::Empty(elem))?;
    writer.get_mut().write_all(b"\n")?;
    Ok(())
}
