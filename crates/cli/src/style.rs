//! Terminal styling for the sync report.

use console::Style;

/// Green checkmark followed by `msg`.
pub fn success(msg: &str) -> String {
    let style = Style::new().green();
    format!("{} {}", style.apply_to("✓"), msg)
}

/// Red cross followed by `msg`.
pub fn error(msg: &str) -> String {
    let style = Style::new().red();
    format!("{} {}", style.apply_to("✗"), msg)
}

pub fn header(msg: &str) -> String {
    let style = Style::new().bold();
    style.apply_to(msg).to_string()
}

pub fn dim(msg: &str) -> String {
    let style = Style::new().dim();
    style.apply_to(msg).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markers_survive_styling() {
        let ok = console::strip_ansi_codes(&success("Updated: CLAUDE.md")).to_string();
        assert_eq!(ok, "✓ Updated: CLAUDE.md");

        let failed = console::strip_ansi_codes(&error("Fetch failed: boom")).to_string();
        assert_eq!(failed, "✗ Fetch failed: boom");
    }
}
