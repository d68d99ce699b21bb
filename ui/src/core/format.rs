//! Formatting helpers for card and badge text.

pub fn format_minutes(minutes: u32) -> String {
    format!("{minutes} min")
}

pub fn lesson_badge(id: u32) -> String {
    format!("Lesson {id}")
}

/// Overflow chip for topic lists, e.g. `+2`. Empty when nothing is hidden.
pub fn overflow_chip(hidden: usize) -> Option<String> {
    (hidden > 0).then(|| format!("+{hidden}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats() {
        assert_eq!(format_minutes(45), "45 min");
        assert_eq!(lesson_badge(13), "Lesson 13");
        assert_eq!(overflow_chip(1).as_deref(), Some("+1"));
        assert_eq!(overflow_chip(0), None);
    }
}
