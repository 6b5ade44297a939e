//! Helpers for fcd.
//!
//! Color parsing for the theme config, home directory lookup for the
//! `--start` flag, and the final selection-to-directory resolution applied
//! when the session confirms.

use ratatui::style::Color;
use std::io;
use std::path::{Path, PathBuf};

/// Parses a string (color name or hex) into a ratatui::style::Color.
///
/// Supports standard names (red, green, etc.) as well as hex values (#RRGGBB or #RGB)
pub fn parse_color(s: &str) -> Color {
    match s.to_lowercase().as_str() {
        "default" | "reset" => Color::Reset,
        "yellow" => Color::Yellow,
        "red" => Color::Red,
        "blue" => Color::Blue,
        "green" => Color::Green,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        "black" => Color::Black,
        "gray" => Color::Gray,
        "darkgray" => Color::DarkGray,
        _ => {
            if let Some(color) = s.strip_prefix('#') {
                match color.len() {
                    6 => {
                        if let Ok(rgb) = u32::from_str_radix(color, 16) {
                            return Color::Rgb(
                                ((rgb >> 16) & 0xFF) as u8,
                                ((rgb >> 8) & 0xFF) as u8,
                                (rgb & 0xFF) as u8,
                            );
                        }
                    }
                    3 => {
                        let expanded = color
                            .chars()
                            .map(|c| format!("{}{}", c, c))
                            .collect::<String>();
                        if let Ok(rgb) = u32::from_str_radix(&expanded, 16) {
                            return Color::Rgb(
                                ((rgb >> 16) & 0xFF) as u8,
                                ((rgb >> 8) & 0xFF) as u8,
                                (rgb & 0xFF) as u8,
                            );
                        }
                    }
                    _ => {}
                }
            }
            // fallback
            Color::Reset
        }
    }
}

/// The user's home directory, falling back to the current directory.
pub fn get_home() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// Resolve a confirmed selection to the directory a shell can `cd` into.
///
/// Files resolve to their containing directory; the result is made absolute
/// without touching symlinks, matching what the user saw on screen.
pub fn resolve_selection(selected: &str) -> io::Result<PathBuf> {
    let mut path = PathBuf::from(selected);
    if !path.is_dir() {
        path.pop();
    }
    std::path::absolute(&path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error;
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn test_parse_color_names_and_hex() {
        assert_eq!(parse_color("magenta"), Color::Magenta);
        assert_eq!(parse_color("default"), Color::Reset);
        assert_eq!(parse_color("#102030"), Color::Rgb(0x10, 0x20, 0x30));
        assert_eq!(parse_color("#f0f"), Color::Rgb(0xff, 0x00, 0xff));
        assert_eq!(parse_color("not-a-color"), Color::Reset);
    }

    #[test]
    fn test_file_resolves_to_parent() -> Result<(), Box<dyn error::Error>> {
        let dir = tempdir()?;
        let file = dir.path().join("note.txt");
        File::create(&file)?;

        let resolved = resolve_selection(&file.to_string_lossy())?;
        assert_eq!(resolved, std::path::absolute(dir.path())?);
        Ok(())
    }

    #[test]
    fn test_directory_resolves_to_itself() -> Result<(), Box<dyn error::Error>> {
        let dir = tempdir()?;
        let resolved = resolve_selection(&dir.path().to_string_lossy())?;
        assert_eq!(resolved, std::path::absolute(dir.path())?);
        assert!(resolved.is_absolute());
        Ok(())
    }
}
