// Presentation surface - where explanations are shown to the user

use termimad::MadSkin;
use termimad::crossterm::style::Color;

/// Display collaborator for explanations. The core contract is small:
/// `present` replaces whatever the surface showed before, and the host
/// calls `closed` when the user dismisses the surface.
pub trait PresentationSurface {
    /// Show an explanation, optionally alongside the fragment it explains,
    /// replacing any previous content
    fn present(&mut self, explanation: &str, fragment: Option<&str>);

    fn is_open(&self) -> bool;

    /// Note that the user closed the surface
    fn closed(&mut self);
}

/// Renders explanations as markdown in the terminal, with the original
/// fragment above them as a fenced code block.
pub struct TerminalPanel {
    skin: MadSkin,
    open: bool,
}

impl TerminalPanel {
    pub fn new() -> Self {
        Self {
            skin: create_panel_skin(),
            open: false,
        }
    }
}

impl Default for TerminalPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl PresentationSurface for TerminalPanel {
    fn present(&mut self, explanation: &str, fragment: Option<&str>) {
        self.open = true;

        if let Some(code) = fragment {
            println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
            self.skin.print_text(&format!("```\n{}\n```", code));
        }
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        self.skin.print_text(explanation);
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    }

    fn is_open(&self) -> bool {
        self.open
    }

    fn closed(&mut self) {
        self.open = false;
    }
}

fn create_panel_skin() -> MadSkin {
    let mut skin = MadSkin::default();

    skin.headers[0].set_fg(Color::Cyan);
    skin.headers[1].set_fg(Color::Blue);

    skin.code_block.set_fg(Color::Yellow);
    skin.inline_code.set_fg(Color::Yellow);

    skin.bold.set_fg(Color::White);
    skin.italic.set_fg(Color::Magenta);

    skin
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_tracks_open_state() {
        let mut panel = TerminalPanel::new();
        assert!(!panel.is_open());

        panel.present("1. Set X to Y", Some("x = y"));
        assert!(panel.is_open());

        panel.closed();
        assert!(!panel.is_open());
    }

    #[test]
    fn test_present_replaces_previous_content() {
        // The terminal panel prints anew each time; the contract is only
        // that presenting again leaves the surface open with the new text.
        let mut panel = TerminalPanel::new();
        panel.present("first", None);
        panel.present("second", None);
        assert!(panel.is_open());
    }
}
