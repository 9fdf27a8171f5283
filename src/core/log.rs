use crate::db::log::LogRow;
use crate::utils::display_width;
use crate::utils::formatting::truncate;
use ansi_term::Colour;

const OP_WIDTH_LIMIT: usize = 40;

/// Colour of an internal log operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "login" => Colour::Green,
        "login_failed" => Colour::Red,
        "logout" => Colour::Yellow,
        "export" => Colour::Blue,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

fn op_target(row: &LogRow) -> String {
    if row.target.is_empty() {
        row.operation.clone()
    } else {
        format!("{} ({})", row.operation, row.target)
    }
}

pub struct LogLogic;

impl LogLogic {
    /// Format the `log` rows as aligned lines, the operation word coloured.
    pub fn format_rows(rows: &[LogRow]) -> Vec<String> {
        let op_w = rows
            .iter()
            .map(|r| op_target(r).chars().count())
            .max()
            .unwrap_or(10)
            .min(OP_WIDTH_LIMIT);
        let id_w = rows.iter().map(|r| r.id.to_string().len()).max().unwrap_or(1);

        rows.iter()
            .map(|row| {
                let date = chrono::DateTime::parse_from_rfc3339(&row.date)
                    .map(|dt| dt.format("%F %T").to_string())
                    .unwrap_or_else(|_| row.date.clone());

                let visible = truncate(&op_target(row), OP_WIDTH_LIMIT);
                let color = color_for_operation(&row.operation);
                let painted = match visible.split_once(' ') {
                    Some((op, rest)) => format!("{} {rest}", color.paint(op)),
                    None => color.paint(visible.as_str()).to_string(),
                };
                let padding = " ".repeat(op_w.saturating_sub(display_width(&painted)));

                format!(
                    "{:>id_w$}: {date} | {painted}{padding} => {}",
                    row.id, row.message
                )
            })
            .collect()
    }

    pub fn print_log(rows: &[LogRow]) {
        println!("📜 Internal log:\n");
        for line in Self::format_rows(rows) {
            println!("{line}");
        }
    }
}
