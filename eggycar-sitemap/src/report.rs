use crate::OutputFormat;
use anyhow::Result;
use colored::Colorize;
use eggycar_core::{SitemapEntry, render_xml};
use std::io::Write;

pub fn write_report<W: Write + ?Sized>(
    out: &mut W,
    format: OutputFormat,
    entries: &[SitemapEntry],
) -> Result<()> {
    match format {
        OutputFormat::Xml => out.write_all(render_xml(entries).as_bytes())?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, entries)?;
            writeln!(out)?;
        }
        OutputFormat::Console => write_console(out, entries)?,
    }
    Ok(())
}

fn write_console<W: Write + ?Sized>(out: &mut W, entries: &[SitemapEntry]) -> Result<()> {
    writeln!(out, "{}", format!("{} URL(s)", entries.len()).bold())?;
    for entry in entries {
        writeln!(
            out,
            "  {:<52} {:<8} {:.1}",
            entry.url,
            entry.change_frequency.as_str(),
            entry.priority
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use eggycar_core::{Catalog, build_sitemap};

    fn entries() -> Vec<SitemapEntry> {
        let catalog = Catalog::embedded().unwrap();
        build_sitemap("https://example.org/", catalog, "2026-10-15T00:00:00+00:00").unwrap()
    }

    #[test]
    fn json_report_uses_camel_case_fields() {
        let mut buf = Vec::new();
        write_report(&mut buf, OutputFormat::Json, &entries()).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        let first = &parsed[0];
        assert_eq!(first["url"], "https://example.org");
        assert_eq!(first["changeFrequency"], "daily");
        assert_eq!(first["lastModified"], "2026-10-15T00:00:00+00:00");
    }

    #[test]
    fn console_report_lists_every_url() {
        colored::control::set_override(false);
        let entries = entries();
        let mut buf = Vec::new();
        write_report(&mut buf, OutputFormat::Console, &entries).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with(&format!("{} URL(s)", entries.len())));
        assert!(text.contains("https://example.org/game-details/eggy-car"));
        assert!(text.contains("weekly"));
    }

    #[test]
    fn xml_report_matches_renderer() {
        let entries = entries();
        let mut buf = Vec::new();
        write_report(&mut buf, OutputFormat::Xml, &entries).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), render_xml(&entries));
    }
}
