//! The fixed instruction transcript shown to the operator.

use crate::snapshot::{EnvSnapshot, KEY_VAR, URL_VAR};

/// Renders the full walkthrough for a snapshot.
///
/// The line sequence is fixed; only the two `NAME=value` lines vary with the
/// snapshot, and each appears twice (once in its numbered step, once in the
/// recap). Two renders of the same snapshot are byte-identical.
pub fn render(snapshot: &EnvSnapshot) -> String {
    let url_line = format!("{URL_VAR}={}", snapshot.supabase_url);
    let key_line = format!("{KEY_VAR}={}", snapshot.supabase_key);

    let mut out = String::new();
    let mut line = |text: &str| {
        out.push_str(text);
        out.push('\n');
    };

    line("============================================================");
    line("  Swarm deployment: GitHub repository secrets");
    line("============================================================");
    line("");
    line("The swarm runs from a scheduled GitHub Actions workflow. Before");
    line("the schedule can start, the workflow needs two repository secrets.");
    line("Set them up once, by hand:");
    line("");
    line("  1. Open your repository on github.com and go to Settings.");
    line("");
    line("  2. In the left sidebar pick \"Secrets and variables\", then");
    line("     \"Actions\".");
    line("");
    line("  3. Click \"New repository secret\". Name the first secret");
    line("     SUPABASE_URL and paste the value after the = sign below:");
    line("");
    line(&url_line);
    line("");
    line("  4. Add a second secret named SUPABASE_KEY with the value");
    line("     after the = sign below:");
    line("");
    line(&key_line);
    line("");
    line("For copy-paste, both again:");
    line("");
    line(&url_line);
    line(&key_line);
    line("");
    line("------------------------------------------------------------");
    line("Once both secrets are saved you are done. The workflow wakes");
    line("every 15 minutes, 24/7, and runs the swarm automatically. It is");
    line("immortal: nothing needs to stay on at your end.");
    line("------------------------------------------------------------");

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_lines(haystack: &str, needle: &str) -> usize {
        haystack.lines().filter(|l| *l == needle).count()
    }

    #[test]
    fn contains_both_value_lines() {
        let snapshot = EnvSnapshot::from_values("https://x.example", "abc123");
        let out = render(&snapshot);
        assert_eq!(count_lines(&out, "SUPABASE_URL=https://x.example"), 2);
        assert_eq!(count_lines(&out, "SUPABASE_KEY=abc123"), 2);
    }

    #[test]
    fn unset_values_render_as_bare_assignments() {
        let snapshot = EnvSnapshot::from_values("", "");
        let out = render(&snapshot);
        assert_eq!(count_lines(&out, "SUPABASE_URL="), 2);
        assert_eq!(count_lines(&out, "SUPABASE_KEY="), 2);
    }

    #[test]
    fn rendering_is_deterministic() {
        let snapshot = EnvSnapshot::from_values("https://x.example", "abc123");
        assert_eq!(render(&snapshot), render(&snapshot));
    }

    #[test]
    fn url_step_precedes_key_step() {
        let snapshot = EnvSnapshot::from_values("u", "k");
        let out = render(&snapshot);
        let url_at = out.find("SUPABASE_URL=u");
        let key_at = out.find("SUPABASE_KEY=k");
        assert!(url_at.is_some());
        assert!(key_at.is_some());
        assert!(url_at < key_at);
    }

    #[test]
    fn closing_block_mentions_the_schedule() {
        let out = render(&EnvSnapshot::from_values("", ""));
        assert!(out.contains("every 15 minutes"));
        assert!(out.contains("24/7"));
        assert!(out.contains("immortal"));
    }
}
