use colored::*;
use tracing::info;
use unicode_width::UnicodeWidthStr;

use crate::terminal::colors;
use crate::terminal::logging::PRINT_TARGET;

pub const TOTAL_WIDTH: usize = 64;
const TREE_KEY_WIDTH: usize = 7;

#[macro_export]
macro_rules! mprint {
    () => {
        $crate::terminal::print::print("");
    };
    ($msg:expr) => {
        $crate::terminal::print::print($msg);
    };
}

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, "{msg}");
}

pub fn banner(q_level: u8) {
    if q_level > 0 {
        return;
    }

    let text_content: String = format!("⟦ SUBREACH v{} ⟧ ", env!("CARGO_PKG_VERSION"));
    let text_width: usize = UnicodeWidthStr::width(text_content.as_str());
    let text: ColoredString = text_content.bright_green().bold();
    let sep: ColoredString = "═"
        .repeat(TOTAL_WIDTH.saturating_sub(text_width) / 2)
        .bright_black();

    print(&format!("{sep}{text}{sep}"));
}

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }
    print(&header_line(msg).to_string());
}

fn header_line(msg: &str) -> ColoredString {
    let formatted: String = format!("⟦ {msg} ⟧");
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black()
}

pub fn fat_separator() {
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH).bright_black();
    print(&sep.to_string());
}

pub fn print_status<T: AsRef<str>>(msg: T) {
    let prefix: ColoredString = ">".color(colors::SEPARATOR);
    print(&format!("{} {}", prefix, msg.as_ref().color(colors::TEXT_DEFAULT)));
}

pub fn tree_head(idx: usize, name: &str) {
    let idx_str: String = format!("[{}]", idx.to_string().color(colors::ACCENT));
    print(&format!(
        "{} {}",
        idx_str.color(colors::SEPARATOR),
        name.color(colors::PRIMARY)
    ));
}

pub fn as_tree_one_level(key_value_pair: Vec<(String, ColoredString)>) {
    for (i, (key, value)) in key_value_pair.iter().enumerate() {
        let last: bool = i + 1 == key_value_pair.len();
        print(&tree_line(key, value, last));
    }
}

fn tree_line(key: &str, value: &ColoredString, last: bool) -> String {
    let branch: ColoredString = if last {
        "└─".bright_black()
    } else {
        "├─".bright_black()
    };
    format!(
        " {} {}{}{} {}",
        branch,
        key.color(colors::TEXT_DEFAULT),
        ".".repeat(TREE_KEY_WIDTH.saturating_sub(key.len()))
            .color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR),
        value
    )
}

pub fn centerln(msg: &str) {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    print(&format!("{space}{msg}{space}"));
}

const NO_RESULTS: &str = r#"
         _   _  ___    _     _____     _______
        | \ | |/ _ \  | |   |_ _\ \   / / ____|
        |  \| | | | | | |    | | \ \ / /|  _|
        | |\  | |_| | | |___ | |  \ V / | |___
        |_| \_|\___/  |_____|___|  \_/  |_____|
"#;

pub fn no_results() {
    print(&NO_RESULTS.red().bold().to_string());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_fills_the_line() {
        colored::control::set_override(false);
        let line = header_line("scan results").to_string();
        assert_eq!(line.chars().count(), TOTAL_WIDTH);
        assert!(line.contains("⟦ SCAN RESULTS ⟧"));
    }

    #[test]
    fn tree_keys_are_padded() {
        colored::control::set_override(false);
        let line = tree_line("http", &"http://a.example.com".normal(), true);
        assert_eq!(line, " └─ http...: http://a.example.com");
    }
}
