//! 按 TLD 的费用统计页面

use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, text::Line, widgets::Paragraph, Frame};

use super::{grouped_input, scroll_line};
use crate::message::ScreenCommand;
use crate::model::state::{CostState, GroupRow, TldCost};
use crate::view::components::text::pad;
use crate::view::screen::Screen;
use crate::view::theme::Styles;

const TLD_WIDTH: usize = 12;
const COUNT_WIDTH: usize = 8;
const RENEWAL_WIDTH: usize = 12;
const TOTAL_WIDTH: usize = 14;

/// 表头 + 滚动提示 + 空行 + 合计
const CHROME_ROWS: u16 = 4;

impl Screen for CostState {
    fn handle_input(&mut self, key: KeyEvent) -> ScreenCommand {
        grouped_input(self, &key)
    }

    fn resize(&mut self, rows: u16) {
        self.set_height(usize::from(rows.saturating_sub(CHROME_ROWS)));
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        if self.is_empty() {
            frame.render_widget(Paragraph::new("  No domains to display."), area);
            return;
        }

        let header = format!(
            "  {}  {:>COUNT_WIDTH$}  {:>RENEWAL_WIDTH$}  {:>TOTAL_WIDTH$}",
            pad("TLD", TLD_WIDTH),
            "Count",
            "Renewal",
            "Total/Year",
        );
        let mut lines = vec![Line::styled(header, Styles::table_header())];

        let view = self.visible_rows();
        for row in &view.rows {
            let line = match row {
                GroupRow::Header { group, selected, .. } => {
                    let arrow = if group.expanded { "▼" } else { "▶" };
                    let (renewal, total) = money_columns(group.meta);
                    let text = format!(
                        "{arrow} {}  {:>COUNT_WIDTH$}  {renewal}  {total}",
                        pad(&group.key, TLD_WIDTH),
                        group.members.len(),
                    );
                    if *selected {
                        Line::styled(text, Styles::selected())
                    } else {
                        Line::raw(text)
                    }
                }
                GroupRow::Item { domain, .. } => {
                    Line::styled(format!("    {}", domain.name), Styles::label())
                }
            };
            lines.push(line);
        }

        if view.total > self.height() {
            lines.push(scroll_line(view.start, view.end, view.total));
        }

        lines.push(Line::default());
        lines.push(Line::styled(
            format!(
                "  Total: {} domains, ${:.2}/year",
                self.member_count(),
                self.grand_total()
            ),
            Styles::value(),
        ));

        frame.render_widget(Paragraph::new(lines), area);
    }

    fn status_text(&self) -> String {
        format!("{} TLDs", self.len())
    }

    fn help_text(&self) -> Vec<(&'static str, &'static str)> {
        vec![
            ("j/k", "navigate"),
            ("enter", "expand"),
            ("esc", "back"),
            ("q", "quit"),
        ]
    }
}

/// 单价与年度总价两列；未知单价显示 N/A
fn money_columns(cost: TldCost) -> (String, String) {
    if cost.renewal > 0.0 {
        (
            format!("${:>width$.2}", cost.renewal, width = RENEWAL_WIDTH - 1),
            format!("${:>width$.2}", cost.total, width = TOTAL_WIDTH - 1),
        )
    } else {
        (
            format!("{:>RENEWAL_WIDTH$}", "N/A"),
            format!("{:>TOTAL_WIDTH$}", "N/A"),
        )
    }
}
