//! UI Components
//!
//! Page sections and chrome widgets. Sections describe themselves as
//! pre-wrapped lines so the page can measure them before laying out.

pub mod analyzer;
pub mod footer;
pub mod generator;
pub mod hero;
pub mod input_field;
pub mod layout;
pub mod lock;
pub mod model_tabs;
pub mod orb;
pub mod scroll;
pub mod statusline;
pub mod strength_meter;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Block, Paragraph, Widget},
};

// Re-exports
pub use analyzer::AnalyzerView;
pub use footer::Footer;
pub use generator::GeneratorView;
pub use hero::Hero;
pub use model_tabs::ModelTabs;
pub use orb::AiOrb;
pub use statusline::{HelpBar, MessageType, StatusLine};
pub use strength_meter::StrengthMeter;

/// A bordered block of the scrolling page.
pub trait PageSection {
    fn block(&self) -> Block<'static>;

    /// Content rows for an inner width of `width`.
    fn lines(&self, width: u16) -> Vec<Line<'static>>;

    /// Outer height including the top and bottom border.
    fn height(&self, outer_width: u16) -> u16 {
        self.lines(outer_width.saturating_sub(2)).len() as u16 + 2
    }
}

pub fn render_section(section: &dyn PageSection, area: Rect, buf: &mut Buffer) {
    let block = section.block();
    let inner = block.inner(area);
    Paragraph::new(section.lines(inner.width)).block(block).render(area, buf);
}
