use crate::constants::TAB_WIDTH;
use ratatui::{
    Frame,
    text::Text,
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Draw a view buffer over the whole frame
///
/// When the wrapped text is taller than the frame the top is scrolled away,
/// so the trailing hint lines always stay on screen.
pub fn render(f: &mut Frame, text: &str) {
    let area = f.area();
    let paragraph = Paragraph::new(Text::raw(expand_tabs(text)))
        .block(Block::default().borders(Borders::NONE))
        .wrap(Wrap { trim: false });

    let overflow = paragraph
        .line_count(area.width)
        .saturating_sub(area.height as usize);
    let offset = u16::try_from(overflow).unwrap_or(u16::MAX);

    f.render_widget(paragraph.scroll((offset, 0)), area);
}

/// Terminal cells have no notion of tab stops, so tabs become spaces
fn expand_tabs(text: &str) -> String {
    text.replace('\t', &" ".repeat(TAB_WIDTH))
}
