use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Axis, Chart, Dataset, GraphType, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::{chart, App};

const HORIZONTAL_MARGIN: u16 = 5;
const VERTICAL_MARGIN: u16 = 2;

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let game = &self.game;
        // styles
        let bold_style = Style::default().add_modifier(Modifier::BOLD);

        let green_bold_style = Style::default().patch(bold_style).fg(Color::Green);
        let red_bold_style = Style::default().patch(bold_style).fg(Color::Red);

        let dim_bold_style = Style::default()
            .patch(bold_style)
            .add_modifier(Modifier::DIM);

        let underlined_dim_bold_style = Style::default()
            .patch(dim_bold_style)
            .add_modifier(Modifier::UNDERLINED);

        let italic_style = Style::default().add_modifier(Modifier::ITALIC);

        let magenta_style = Style::default().fg(Color::Magenta);

        if self.debug {
            let debug_line = Paragraph::new(Span::styled(
                format!(
                    "start: {:?}  end: {:?}  done: {}  elapsed: {:?}",
                    game.started_at(),
                    game.finished_at(),
                    game.is_complete(),
                    game.elapsed(),
                ),
                Style::default().fg(Color::Yellow),
            ));
            let debug_area = Rect {
                height: area.height.min(1),
                ..area
            };
            debug_line.render(debug_area, buf);
        }

        if !game.is_complete() {
            let alphabet_line = game.alphabet().to_string();
            let max_chars_per_line = area.width.saturating_sub(HORIZONTAL_MARGIN * 2);
            let alphabet_fits = alphabet_line.width() <= max_chars_per_line as usize;

            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .horizontal_margin(HORIZONTAL_MARGIN)
                .constraints(
                    [
                        Constraint::Min(1),    // top padding
                        Constraint::Length(1), // current letter
                        Constraint::Length(1), // padding
                        Constraint::Length(2), // alphabet progress
                        Constraint::Length(1), // timer
                        Constraint::Length(1), // miss counter
                        Constraint::Min(1),    // bottom padding
                    ]
                    .as_ref(),
                )
                .split(area);

            let current = Paragraph::new(Span::styled(
                game.current_letter()
                    .map(|c| c.to_uppercase().to_string())
                    .unwrap_or_default(),
                bold_style,
            ))
            .alignment(Alignment::Center);
            current.render(chunks[1], buf);

            let mut spans = Vec::with_capacity(game.alphabet().len());
            for (idx, letter) in game.alphabet().iter().enumerate() {
                let style = if idx < game.cursor() {
                    green_bold_style
                } else if idx == game.cursor() {
                    underlined_dim_bold_style
                } else {
                    dim_bold_style
                };
                spans.push(Span::styled(letter.to_string(), style));
            }

            let progress = Paragraph::new(Line::from(spans))
                .alignment(if alphabet_fits {
                    // when the sequence is small enough to fit on one line
                    // centering the text gives a nice zen feeling
                    Alignment::Center
                } else {
                    Alignment::Left
                })
                .wrap(Wrap { trim: true });
            progress.render(chunks[3], buf);

            let running_secs = match game.started_at() {
                Some(start) => format!("{:.1}", self.now_ms.saturating_sub(start) as f64 / 1000.0),
                None => String::from("0.0"),
            };
            let timer = Paragraph::new(Span::styled(running_secs, dim_bold_style))
                .alignment(Alignment::Center);
            timer.render(chunks[4], buf);

            if game.miss_count() > 0 {
                let misses = Paragraph::new(Span::styled(
                    format!("{} miss", game.miss_count()),
                    red_bold_style,
                ))
                .alignment(Alignment::Center);
                misses.render(chunks[5], buf);
            }
        } else {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .horizontal_margin(HORIZONTAL_MARGIN)
                .vertical_margin(VERTICAL_MARGIN)
                .constraints(
                    [
                        Constraint::Min(1),    // chart
                        Constraint::Length(1), // stats
                        Constraint::Length(1), // high score
                        Constraint::Length(1), // padding
                        Constraint::Length(1), // legend
                    ]
                    .as_ref(),
                )
                .split(area);

            let series = chart::relative_series(game);
            let (last_index, highest_ms) = chart::compute_chart_params(&series);

            let datasets = vec![Dataset::default()
                .marker(ratatui::symbols::Marker::Braille)
                .style(magenta_style)
                .graph_type(GraphType::Line)
                .data(&series)];

            let first_letter = game.alphabet().get(0).unwrap_or('?');
            let last_letter = game
                .alphabet()
                .get(game.alphabet().len().saturating_sub(1))
                .unwrap_or('?');

            let results_chart = Chart::new(datasets)
                .x_axis(
                    Axis::default()
                        .title("letter")
                        .bounds([0.0, last_index])
                        .labels(vec![
                            Span::styled(first_letter.to_string(), bold_style),
                            Span::styled(last_letter.to_string(), bold_style),
                        ]),
                )
                .y_axis(
                    Axis::default()
                        .title("ms")
                        .bounds([0.0, highest_ms])
                        .labels(vec![
                            Span::styled("0", bold_style),
                            Span::styled(chart::format_label(highest_ms), bold_style),
                        ]),
                );

            results_chart.render(chunks[0], buf);

            let stats = Paragraph::new(Span::styled(
                format!(
                    "{} s   {} miss",
                    chart::format_elapsed_seconds(game),
                    game.miss_count()
                ),
                bold_style,
            ))
            .alignment(Alignment::Center);

            stats.render(chunks[1], buf);

            let best_line = if self.new_record {
                String::from("new record!")
            } else if let Some(best) = &self.best {
                format!(
                    "best {:.2} s ({})",
                    best.best_ms as f64 / 1000.0,
                    best.set_at.format("%Y-%m-%d")
                )
            } else {
                String::new()
            };
            let best_widget = Paragraph::new(Span::styled(
                best_line,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::ITALIC),
            ))
            .alignment(Alignment::Center);
            best_widget.render(chunks[2], buf);

            let legend = Paragraph::new(Span::styled(
                "(r)estart / (n)ew game / (esc)ape",
                italic_style,
            ));
            legend.render(chunks[4], buf);
        }
    }
}
