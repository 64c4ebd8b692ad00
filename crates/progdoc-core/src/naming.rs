//! Output file naming

use std::sync::OnceLock;

use regex::Regex;

/// Suffix appended to every exported file name
pub const FILE_SUFFIX: &str = "_Program.docx";

/// Suggested download name for a program: whitespace runs become `_`.
pub fn suggested_file_name(program_name: &str) -> String {
    static WS_RE: OnceLock<Regex> = OnceLock::new();
    let re = WS_RE.get_or_init(|| Regex::new(r"\s+").unwrap());
    format!("{}{}", re.replace_all(program_name, "_"), FILE_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_replaced() {
        assert_eq!(
            suggested_file_name("Основы  робототехники\tи ИИ"),
            "Основы_робототехники_и_ИИ_Program.docx"
        );
    }

    #[test]
    fn test_outer_whitespace_kept_as_underscores() {
        assert_eq!(suggested_file_name(" Chess "), "_Chess__Program.docx");
    }

    #[test]
    fn test_empty_name() {
        assert_eq!(suggested_file_name(""), "_Program.docx");
    }
}
