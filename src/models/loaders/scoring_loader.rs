use crate::error::{AppError, AppResult, FileError};
use crate::models::scoring::ScoringScheme;
use std::path::Path;
use tokio::fs;

/// 从 TOML 文件加载计分方案，未出现的字段使用默认值
pub async fn load_scoring_scheme(path: &Path) -> AppResult<ScoringScheme> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|e| AppError::file_read_failed(path.display().to_string(), e))?;

    let scheme = parse_scoring_scheme(&content).map_err(|e| match e {
        AppError::File(FileError::TomlParseFailed { source, .. }) => {
            AppError::File(FileError::TomlParseFailed {
                path: path.display().to_string(),
                source,
            })
        }
        other => other,
    })?;

    tracing::info!(
        "已加载计分方案: {} (正确 {:+} / 错误 {:+} / 未答 {:+})",
        path.display(),
        scheme.correct_points,
        scheme.incorrect_points,
        scheme.not_answered_points
    );

    Ok(scheme)
}

/// 解析 TOML 文本
pub fn parse_scoring_scheme(content: &str) -> AppResult<ScoringScheme> {
    Ok(toml::from_str(content)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let scheme = parse_scoring_scheme("incorrect_points = -2\n").unwrap();
        assert_eq!(scheme.correct_points, 4);
        assert_eq!(scheme.incorrect_points, -2);
        assert_eq!(scheme.short_answer_sections, vec!["Quantitative Ability SA"]);
        assert!(scheme.carry_over_correct_option);
    }

    #[test]
    fn test_full_file() {
        let scheme = parse_scoring_scheme(
            r#"
            correct_points = 3
            incorrect_points = -1
            not_answered_points = 0
            short_answer_sections = ["QA TITA", "VARC TITA"]
            carry_over_correct_option = false
            "#,
        )
        .unwrap();

        assert_eq!(scheme.correct_points, 3);
        assert!(scheme.is_short_answer_section("VARC TITA"));
        assert!(!scheme.is_short_answer_section("Quantitative Ability SA"));
        assert!(!scheme.carry_over_correct_option);
    }

    #[test]
    fn test_invalid_toml_is_file_error() {
        let err = parse_scoring_scheme("correct_points = \"four\"").unwrap_err();
        assert!(matches!(err, AppError::File(FileError::TomlParseFailed { .. })));
    }

    #[tokio::test]
    async fn test_missing_file_is_read_error() {
        let err = load_scoring_scheme(Path::new("does/not/exist.toml"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::File(FileError::ReadFailed { .. })));
    }
}
