// ---------------------------------------------------------------------------
// Tooltip templates
// ---------------------------------------------------------------------------

/// Substitute `{Column}` placeholders in a tooltip template with the given
/// values. Placeholders without a value are left as-is.
pub fn render_template(template: &str, values: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (key, value) in values {
        out = out.replace(&format!("{{{key}}}"), value);
    }
    out
}
