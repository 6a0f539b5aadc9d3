use crate::constants::LINE_SPACING;
use crate::style::FontSpec;

/// Measures the rendered width of a single line of text.
pub trait TextMeasure {
    fn line_width(&self, text: &str, font: &FontSpec) -> f32;

    fn line_height(&self, font: &FontSpec) -> f32 {
        font.size * LINE_SPACING
    }
}

/// Greedy word wrap to `max_width`. Explicit newlines always break; a word
/// wider than the line is kept whole on its own line.
pub fn wrap_lines(text: &str, font: &FontSpec, max_width: f32, measure: &dyn TextMeasure) -> Vec<String> {
    let mut lines = Vec::new();
    if text.is_empty() {
        return lines;
    }

    for paragraph in text.split('\n') {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            if line.is_empty() {
                line.push_str(word);
                continue;
            }
            let candidate = format!("{line} {word}");
            if measure.line_width(&candidate, font) <= max_width {
                line = candidate;
            } else {
                lines.push(std::mem::replace(&mut line, word.to_string()));
            }
        }
        lines.push(line);
    }

    lines
}
