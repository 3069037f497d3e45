//! Model overview tabs.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Block,
};

use super::{
    layout::{section_block, wrapped_lines},
    PageSection,
};

pub struct ModelInfo {
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub features: [&'static str; 4],
}

pub const MODELS: [ModelInfo; 4] = [
    ModelInfo {
        name: "Model A",
        title: "Supervised Classifier",
        description: "Supervised learning model classifying passwords by strength using multi-feature analysis.",
        features: [
            "Multi-class classification",
            "Probability distribution",
            "Pattern recognition",
            "Real-time analysis",
        ],
    },
    ModelInfo {
        name: "Model B",
        title: "Leak Risk Scorer",
        description: "Breach database analysis with risk scoring based on historical compromise data.",
        features: [
            "Breach database lookup",
            "Risk score calculation",
            "Historical leak data",
            "Threat assessment",
        ],
    },
    ModelInfo {
        name: "Model C",
        title: "Unsupervised Detector",
        description: "Unsupervised anomaly detection identifying unusual patterns through reconstruction error analysis.",
        features: [
            "Pattern anomaly detection",
            "Reconstruction error analysis",
            "Unsupervised learning",
            "Statistical outlier detection",
        ],
    },
    ModelInfo {
        name: "Model D",
        title: "Password Generator",
        description: "AI-driven password generation with configurable security profiles and entropy optimization.",
        features: [
            "Multiple generation modes",
            "Customizable length",
            "Entropy optimization",
            "Memorable patterns",
        ],
    },
];

pub const MODEL_COUNT: usize = MODELS.len();

pub struct ModelTabs {
    active: usize,
}

impl ModelTabs {
    pub fn new(active: usize) -> Self {
        Self { active: active.min(MODEL_COUNT - 1) }
    }
}

fn tab_row(active: usize) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, model) in MODELS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        let style = if i == active {
            Style::default().fg(Color::Black).bg(Color::Magenta).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray).bg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" {} {} ", i + 1, model.name), style));
    }
    Line::from(spans)
}

impl PageSection for ModelTabs {
    fn block(&self) -> Block<'static> {
        section_block("AI Security Architecture", Color::Blue)
    }

    fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let model = &MODELS[self.active];

        let mut lines = wrapped_lines(
            "Four specialized models providing comprehensive security analysis",
            width,
            "",
            Style::default().fg(Color::Gray),
        );
        lines.push(Line::default());
        lines.push(tab_row(self.active));
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled(model.title, Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
            Span::styled(format!("  {}", model.name), Style::default().fg(Color::Magenta)),
        ]));
        lines.extend(wrapped_lines(model.description, width, "", Style::default().fg(Color::Gray)));
        lines.push(Line::default());
        lines.push(Line::styled("Key Features", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)));
        for feature in model.features {
            lines.push(Line::from(vec![
                Span::styled("▸ ", Style::default().fg(Color::Magenta)),
                Span::styled(feature, Style::default().fg(Color::White)),
            ]));
        }
        lines
    }
}
