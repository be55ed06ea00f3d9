use std::sync::OnceLock;

use regex::{Captures, Regex};

/// Matches `{{ env.VAR }}` and `{{ env.VAR | default("fallback") }}`
fn placeholder() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"\{\{\s*([A-Za-z0-9_.]+)\s*(?:\|\s*default\("([^"]*)"\))?\s*\}\}"#)
            .expect("placeholder pattern must be valid")
    })
}

/// Substitute environment placeholders in raw config text
///
/// Comment lines are copied verbatim so a commented-out key never requires
/// its variable to be set.
pub fn expand_env(input: &str) -> Result<String, String> {
    let mut lines = Vec::new();

    for line in input.split('\n') {
        if line.trim_start().starts_with('#') {
            lines.push(line.to_owned());
        } else {
            lines.push(expand_line(line)?);
        }
    }

    Ok(lines.join("\n"))
}

fn expand_line(line: &str) -> Result<String, String> {
    let mut failure = None;

    let expanded = placeholder().replace_all(line, |captures: &Captures<'_>| {
        match resolve(&captures[1], captures.get(2).map(|m| m.as_str())) {
            Ok(value) => value,
            Err(e) => {
                failure.get_or_insert(e);
                String::new()
            }
        }
    });

    match failure {
        Some(e) => Err(e),
        None => Ok(expanded.into_owned()),
    }
}

fn resolve(key: &str, default: Option<&str>) -> Result<String, String> {
    let Some(var_name) = key.strip_prefix("env.").filter(|name| !name.contains('.')) else {
        return Err(format!("only variables scoped with 'env.' are supported: `{key}`"));
    };

    match (std::env::var(var_name), default) {
        (Ok(value), _) => Ok(value),
        (Err(_), Some(default)) => Ok(default.to_owned()),
        (Err(_), None) => Err(format!("environment variable not found: `{var_name}`")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_placeholders() {
        let input = "watson_apikey = \"plain\"\n";
        assert_eq!(expand_env(input).unwrap(), input);
    }

    #[test]
    fn expands_api_key() {
        temp_env::with_var("HERALD_WATSON_KEY", Some("secret"), || {
            let result = expand_env("watson_apikey = \"{{ env.HERALD_WATSON_KEY }}\"").unwrap();
            assert_eq!(result, "watson_apikey = \"secret\"");
        });
    }

    #[test]
    fn expands_several_lines() {
        let vars = [("HERALD_KEY", Some("k")), ("HERALD_VOICE", Some("en-GB_KateVoice"))];
        temp_env::with_vars(vars, || {
            let result = expand_env("watson_apikey = \"{{ env.HERALD_KEY }}\"\nvoice = \"{{env.HERALD_VOICE}}\"").unwrap();
            assert_eq!(result, "watson_apikey = \"k\"\nvoice = \"en-GB_KateVoice\"");
        });
    }

    #[test]
    fn missing_var_errors() {
        temp_env::with_var_unset("HERALD_MISSING", || {
            let err = expand_env("watson_apikey = \"{{ env.HERALD_MISSING }}\"").unwrap_err();
            assert!(err.contains("HERALD_MISSING"));
        });
    }

    #[test]
    fn default_applies_only_when_unset() {
        temp_env::with_var_unset("HERALD_URL", || {
            let result = expand_env("watson_url = \"{{ env.HERALD_URL | default(\"http://localhost\") }}\"").unwrap();
            assert_eq!(result, "watson_url = \"http://localhost\"");
        });

        temp_env::with_var("HERALD_URL", Some("http://watson"), || {
            let result = expand_env("watson_url = \"{{ env.HERALD_URL | default(\"http://localhost\") }}\"").unwrap();
            assert_eq!(result, "watson_url = \"http://watson\"");
        });
    }

    #[test]
    fn unsupported_scope() {
        let err = expand_env("voice = \"{{ secrets.VOICE }}\"").unwrap_err();
        assert!(err.contains("only variables scoped with 'env.'"));

        let err = expand_env("voice = \"{{ env.A.B }}\"").unwrap_err();
        assert!(err.contains("only variables scoped with 'env.'"));
    }

    #[test]
    fn comments_are_untouched() {
        temp_env::with_var_unset("HERALD_MISSING", || {
            let input = "  # watson_apikey = \"{{ env.HERALD_MISSING }}\"\nvoice = \"en-GB_KateVoice\"";
            assert_eq!(expand_env(input).unwrap(), input);
        });
    }
}
