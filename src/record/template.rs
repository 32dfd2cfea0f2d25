//! Placeholder substitution for record file names and bodies
//!
//! Templates use `{{ .Name }}` placeholders, the same spelling `.adr.yaml`
//! files written for earlier releases already contain. The leading dot and
//! the inner whitespace are optional.

use crate::domain::TemplateValues;
use crate::error::{AdrError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

static PLACEHOLDER_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\.?([A-Za-z_][A-Za-z0-9_]*)$").expect("valid placeholder regex"));

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Substitute every placeholder in `template` with its value.
///
/// Fails on an unterminated `{{`, a malformed name, or a name with no value.
pub fn render(template: &str, values: &TemplateValues) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find(OPEN) {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + OPEN.len()..];

        let Some(end) = after_open.find(CLOSE) else {
            return Err(template_error(&rest[start..], "unterminated placeholder"));
        };
        let fragment = &rest[start..start + OPEN.len() + end + CLOSE.len()];

        let inner = after_open[..end].trim();
        let name = PLACEHOLDER_NAME
            .captures(inner)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str())
            .ok_or_else(|| template_error(fragment, "malformed placeholder name"))?;

        let value = values
            .get(name)
            .ok_or_else(|| template_error(fragment, &format!("no value for placeholder {name}")))?;
        out.push_str(value);

        rest = &after_open[end + CLOSE.len()..];
    }

    out.push_str(rest);
    Ok(out)
}

fn template_error(fragment: &str, reason: &str) -> AdrError {
    AdrError::Template { template: fragment.to_string(), reason: reason.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values() -> TemplateValues {
        let mut v = TemplateValues::with_title("use-rust");
        v.number = "007".to_string();
        v.date = "2024-March-3".to_string();
        v.insert("Author", "pat");
        v
    }

    #[test]
    fn test_render_go_style_placeholders() {
        let out = render("{{ .Number }}-{{ .Title }}.md", &values()).unwrap();
        assert_eq!(out, "007-use-rust.md");
    }

    #[test]
    fn test_render_bare_names_and_extra_keys() {
        let out = render("{{Title}} by {{ Author }} on {{.Date}}", &values()).unwrap();
        assert_eq!(out, "use-rust by pat on 2024-March-3");
    }

    #[test]
    fn test_text_without_placeholders_is_verbatim() {
        let out = render("# heading\n\n} { single braces }\n", &values()).unwrap();
        assert_eq!(out, "# heading\n\n} { single braces }\n");
    }

    #[test]
    fn test_unknown_placeholder_fails() {
        let err = render("{{ .Owner }}", &values()).unwrap_err();
        match err {
            AdrError::Template { template, reason } => {
                assert_eq!(template, "{{ .Owner }}");
                assert!(reason.contains("Owner"));
            }
            other => panic!("expected template error, got {other:?}"),
        }
    }

    #[test]
    fn test_unterminated_placeholder_fails() {
        let err = render("{{ .Number -", &values()).unwrap_err();
        assert!(matches!(err, AdrError::Template { .. }), "got {err:?}");
    }

    #[test]
    fn test_malformed_name_fails() {
        let err = render("{{ .Number | printf }}", &values()).unwrap_err();
        assert!(err.to_string().contains("malformed"));
    }
}
