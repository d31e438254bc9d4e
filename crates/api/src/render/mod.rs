//! Plain-text rendering of the screens for the terminal

mod board;
mod calendar;
mod dashboard;
mod listing;

pub use board::render_board;
pub use calendar::render_calendar;
pub use dashboard::render_dashboard;
pub use listing::{render_customers, render_history, render_saved_services, render_technicians};

/// Cut `text` to `width` characters, marking the cut with `~`.
fn fit(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return format!("{text:<width$}");
    }
    let kept: String = text.chars().take(width.saturating_sub(1)).collect();
    format!("{kept}~")
}

#[cfg(test)]
mod tests {
    use super::fit;

    #[test]
    fn fit_pads_and_cuts() {
        assert_eq!(fit("abc", 5), "abc  ");
        assert_eq!(fit("abcdefgh", 5), "abcd~");
        assert_eq!(fit("abcde", 5), "abcde");
    }
}
