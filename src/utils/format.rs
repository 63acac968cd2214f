//! Formatting utilities for clock displays.

/// Format a second count as zero-padded `HH:MM:SS`.
pub fn format_hms(total_seconds: u32) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_zero() {
        assert_eq!(format_hms(0), "00:00:00");
    }

    #[test]
    fn formats_components_with_padding() {
        assert_eq!(format_hms(90), "00:01:30");
        assert_eq!(format_hms(3 * 3600 + 7 * 60 + 9), "03:07:09");
        assert_eq!(format_hms(100 * 3600), "100:00:00");
    }
}
