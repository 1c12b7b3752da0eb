//! Per-format envelopes and the counts report

use crate::tree::{Counters, OutputFormat, RenderConfig};

const XML_PROLOGUE: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<tree>\n";

/// Wrap the accumulated body with the format's envelope and append the
/// directory/file totals. With `only_directories` the file count is omitted
/// in every format. The result carries no trailing newline; the caller
/// prints it as one line-terminated unit.
pub fn finalize(body: String, counters: &Counters, config: &RenderConfig) -> String {
    match config.format {
        OutputFormat::Plain => finalize_plain(body, counters, config),
        OutputFormat::Xml => finalize_xml(body, counters, config),
        OutputFormat::Json => finalize_json(body, counters, config),
    }
}

fn finalize_plain(body: String, counters: &Counters, config: &RenderConfig) -> String {
    let mut out = body;
    out.push('\n');
    out.push_str(&count_noun(counters.directories, "directory", "directories"));
    if !config.only_directories {
        out.push_str(", ");
        out.push_str(&count_noun(counters.files, "file", "files"));
    }
    out
}

fn finalize_xml(body: String, counters: &Counters, config: &RenderConfig) -> String {
    let mut out = String::from(XML_PROLOGUE);
    out.push_str(&body);
    out.push_str("  <report>\n");
    out.push_str(&format!(
        "    <directories>{}</directories>\n",
        counters.directories
    ));
    if !config.only_directories {
        out.push_str(&format!("    <files>{}</files>\n", counters.files));
    }
    out.push_str("  </report>\n</tree>");
    out
}

fn finalize_json(body: String, counters: &Counters, config: &RenderConfig) -> String {
    let mut out = String::from("[\n");
    out.push_str(&body);
    out.push_str(&format!(
        "  {{\"type\":\"report\",\"directories\":{}",
        counters.directories
    ));
    if !config.only_directories {
        out.push_str(&format!(",\"files\":{}", counters.files));
    }
    out.push_str("}\n]");
    out
}

fn count_noun(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counters(directories: usize, files: usize) -> Counters {
        Counters { directories, files }
    }

    #[test]
    fn test_plain_footer_pluralization() {
        let config = RenderConfig::default();
        assert_eq!(
            finalize("root\n".to_string(), &counters(4, 3), &config),
            "root\n\n4 directories, 3 files"
        );
        assert_eq!(
            finalize("root\n".to_string(), &counters(1, 1), &config),
            "root\n\n1 directory, 1 file"
        );
        assert_eq!(
            finalize("root\n".to_string(), &counters(0, 0), &config),
            "root\n\n0 directories, 0 files"
        );
    }

    #[test]
    fn test_plain_footer_dirs_only_omits_files() {
        let config = RenderConfig {
            only_directories: true,
            ..Default::default()
        };
        assert_eq!(
            finalize("root\n".to_string(), &counters(4, 0), &config),
            "root\n\n4 directories"
        );
    }

    #[test]
    fn test_xml_envelope_and_report() {
        let config = RenderConfig {
            format: OutputFormat::Xml,
            ..Default::default()
        };
        let body = "  <directory name=\"root\">\n  </directory>\n".to_string();
        let out = finalize(body, &counters(0, 0), &config);
        assert!(out.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<tree>\n"));
        assert!(out.contains("    <directories>0</directories>\n"));
        assert!(out.contains("    <files>0</files>\n"));
        assert!(out.ends_with("  </report>\n</tree>"));
    }

    #[test]
    fn test_json_report_object() {
        let config = RenderConfig {
            format: OutputFormat::Json,
            ..Default::default()
        };
        let body = "  {\"type\":\"directory\",\"name\":\"root\",\"contents\":[\n  ]},\n".to_string();
        let out = finalize(body, &counters(2, 5), &config);
        assert!(out.starts_with("[\n"));
        assert!(out.ends_with("  {\"type\":\"report\",\"directories\":2,\"files\":5}\n]"));

        let parsed: serde_json::Value = serde_json::from_str(&out).expect("valid JSON");
        assert!(parsed.is_array());
    }

    #[test]
    fn test_json_report_dirs_only() {
        let config = RenderConfig {
            format: OutputFormat::Json,
            only_directories: true,
            ..Default::default()
        };
        let body = "  {\"type\":\"directory\",\"name\":\"root\",\"contents\":[\n  ]},\n".to_string();
        let out = finalize(body, &counters(2, 0), &config);
        assert!(out.contains("{\"type\":\"report\",\"directories\":2}"));
        assert!(!out.contains("files"));
    }
}
