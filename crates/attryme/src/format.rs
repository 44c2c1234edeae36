// File: src/format.rs
// Purpose: Error list formatting and the text shown to the user

use maud::{html, PreEscaped};

/// Appended to every confirmation message
pub const CONFIRM_SUFFIX: &str =
    r#"Click "OK" to continue, or click "CANCEL" to return without any changes."#;

/// Default heading shown above the error list
pub const DEFAULT_ALERT_HEADER: &str =
    "The following fields need to be corrected, in order to submit this form:";

/// Format errors as a numbered list
///
/// Plain text is `"1) first\n2) second"`. Rich output is an HTML ordered
/// list, one escaped `<li>` per error, numbered by the renderer.
///
/// # Examples
/// ```
/// use attryme::format_errors;
/// let errors = vec!["Name is required.".to_string(), "Zip is required.".to_string()];
/// assert_eq!(format_errors(&errors, false), "1) Name is required.\n2) Zip is required.");
/// ```
pub fn format_errors(errors: &[String], rich: bool) -> String {
    if rich {
        return html! {
            ol style="list-style-type: decimal;" {
                @for error in errors {
                    li { (error) }
                }
            }
        }
        .into_string();
    }

    errors
        .iter()
        .enumerate()
        .map(|(i, error)| format!("{}) {}", i + 1, error))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Full alert text: heading plus the formatted error list
///
/// Rich output wraps both in a `modal-msg` container for a modal dialog.
pub fn compose_alert(body: &str, rich: bool, header: &str) -> String {
    if rich {
        return html! {
            div id="modal-msg" {
                h3 { (header) }
                (PreEscaped(body))
            }
        }
        .into_string();
    }
    format!("{}\n\n{}", header, body)
}

/// Confirmation text for a field: its custom message (or nothing) plus
/// the OK/CANCEL instruction
pub fn confirmation_message(custom: Option<&str>) -> String {
    format!("{}{}", custom.unwrap_or_default(), CONFIRM_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn errors(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_plain_list() {
        let list = errors(&["a", "b", "c"]);
        assert_eq!(format_errors(&list, false), "1) a\n2) b\n3) c");
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(format_errors(&[], false), "");
        assert_eq!(
            format_errors(&[], true),
            r#"<ol style="list-style-type: decimal;"></ol>"#
        );
    }

    #[test]
    fn test_rich_list_escapes() {
        let list = errors(&["Name is required.", "<b>Zip</b> is required."]);
        assert_eq!(
            format_errors(&list, true),
            r#"<ol style="list-style-type: decimal;"><li>Name is required.</li><li>&lt;b&gt;Zip&lt;/b&gt; is required.</li></ol>"#
        );
    }

    #[test]
    fn test_plain_alert() {
        assert_eq!(
            compose_alert("1) a", false, DEFAULT_ALERT_HEADER),
            format!("{}\n\n1) a", DEFAULT_ALERT_HEADER)
        );
    }

    #[test]
    fn test_rich_alert_keeps_list_markup() {
        let body = format_errors(&errors(&["a"]), true);
        assert_eq!(
            compose_alert(&body, true, "Fix these:"),
            r#"<div id="modal-msg"><h3>Fix these:</h3><ol style="list-style-type: decimal;"><li>a</li></ol></div>"#
        );
    }

    #[test]
    fn test_confirmation_message() {
        assert_eq!(confirmation_message(None), CONFIRM_SUFFIX);
        assert_eq!(
            confirmation_message(Some("Delete this boat? ")),
            format!("Delete this boat? {}", CONFIRM_SUFFIX)
        );
    }
}
