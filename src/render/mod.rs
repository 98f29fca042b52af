//! XML rendering
//!
//! Serializes [`MapConfig`]s into `<map>` elements and splices them into a
//! template document.

mod template;

pub use template::{pretty_print, substitute};

use std::io::Write;

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::descriptor::{
    MapChild, MapConfig, NearCacheChild, NearCacheConfig, MAP_MAX_SIZE_POLICY,
    NEAR_CACHE_EVICTION_POLICY, NEAR_CACHE_MAX_SIZE_POLICY,
};
use crate::error::Result;

/// Spaces per indentation level
pub const INDENT: usize = 4;

/// Trailing element every map carries
pub const PER_ENTRY_STATS_ELEMENT: &str = "per-entry-stats-enabled";

/// Render a single `<map>` element
pub fn render_map(map: &MapConfig) -> Result<String> {
    render_maps(std::slice::from_ref(map))
}

/// Render all maps as one block, in the given order, without blank lines
pub fn render_maps(maps: &[MapConfig]) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', INDENT);
    for map in maps {
        write_map(&mut writer, map)?;
    }
    let rendered = String::from_utf8(writer.into_inner())?;
    Ok(strip_blank_lines(&rendered))
}

fn write_map<W: Write>(writer: &mut Writer<W>, map: &MapConfig) -> Result<()> {
    let mut start = BytesStart::new("map");
    start.push_attribute(("name", map.name.as_str()));
    writer.write_event(Event::Start(start))?;

    for child in &map.children {
        match child {
            MapChild::Text { element, value } => write_text_element(writer, element, value)?,
            MapChild::Eviction { policy, size } => {
                let mut eviction = BytesStart::new("eviction");
                eviction.push_attribute(("eviction-policy", policy.as_str()));
                eviction.push_attribute(("max-size-policy", MAP_MAX_SIZE_POLICY));
                eviction.push_attribute(("size", size.as_str()));
                writer.write_event(Event::Empty(eviction))?;
            }
            MapChild::NearCache(near) => write_near_cache(writer, near)?,
        }
    }

    write_text_element(writer, PER_ENTRY_STATS_ELEMENT, "true")?;
    writer.write_event(Event::End(BytesEnd::new("map")))?;
    Ok(())
}

fn write_near_cache<W: Write>(writer: &mut Writer<W>, near: &NearCacheConfig) -> Result<()> {
    if near.children.is_empty() {
        writer.write_event(Event::Empty(BytesStart::new("near-cache")))?;
        return Ok(());
    }

    writer.write_event(Event::Start(BytesStart::new("near-cache")))?;
    for child in &near.children {
        match child {
            NearCacheChild::Text { element, value } => write_text_element(writer, element, value)?,
            NearCacheChild::Eviction { size } => {
                let mut eviction = BytesStart::new("eviction");
                eviction.push_attribute(("max-size-policy", NEAR_CACHE_MAX_SIZE_POLICY));
                eviction.push_attribute(("eviction-policy", NEAR_CACHE_EVICTION_POLICY));
                eviction.push_attribute(("size", size.as_str()));
                writer.write_event(Event::Empty(eviction))?;
            }
        }
    }
    writer.write_event(Event::End(BytesEnd::new("near-cache")))?;
    Ok(())
}

fn write_text_element<W: Write>(writer: &mut Writer<W>, element: &str, value: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(element)))?;
    writer.write_event(Event::Text(BytesText::new(value)))?;
    writer.write_event(Event::End(BytesEnd::new(element)))?;
    Ok(())
}

pub(crate) fn strip_blank_lines(text: &str) -> String {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
