//! Placeholder substitution for user-configurable templates

/// Replace every `{key}` in `template` with its value.
///
/// Unknown placeholders are left as written.
pub fn render_template(template: &str, vars: &[(&str, &str)]) -> String {
    vars.iter().fold(template.to_string(), |acc, (key, value)| {
        acc.replace(&format!("{{{}}}", key), value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_template() {
        let out = render_template(
            "{emoji} {version}: {product} for {shell}",
            &[
                ("emoji", "🚀"),
                ("version", "v1.0.1"),
                ("product", "wt"),
                ("shell", "Zsh"),
            ],
        );
        assert_eq!(out, "🚀 v1.0.1: wt for Zsh");
    }

    #[test]
    fn test_unknown_placeholder_kept() {
        let out = render_template("{version} {unknown}", &[("version", "v2.0.0")]);
        assert_eq!(out, "v2.0.0 {unknown}");
    }

    #[test]
    fn test_repeated_placeholder() {
        let out = render_template("{version}/{version}", &[("version", "v1.0.0")]);
        assert_eq!(out, "v1.0.0/v1.0.0");
    }
}
