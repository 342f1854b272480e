use is_terminal::IsTerminal;

/// CI systems that set a marker variable
const CI_MARKERS: &[&str] = &["CI", "GITHUB_ACTIONS", "GITLAB_CI", "BUILDKITE", "TF_BUILD"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub supports_color: bool,
    pub is_ci: bool,
}

pub fn detect_capabilities() -> TerminalCapabilities {
    capabilities_from(
        |key| std::env::var(key).ok(),
        std::io::stdout().is_terminal() && std::io::stderr().is_terminal(),
    )
}

/// Colors need both streams on a terminal; results and warnings are split
/// between stdout and stderr.
fn capabilities_from(
    get_env: impl Fn(&str) -> Option<String>,
    interactive: bool,
) -> TerminalCapabilities {
    let dumb = get_env("TERM").is_some_and(|t| t.eq_ignore_ascii_case("dumb"));
    let no_color = get_env("NO_COLOR").is_some_and(|v| !v.is_empty());

    TerminalCapabilities {
        supports_color: interactive && !dumb && !no_color,
        is_ci: CI_MARKERS.iter().any(|k| get_env(k).is_some()),
    }
}
