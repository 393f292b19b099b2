/// 输出格式
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// 对齐的文本表格
    Table,
    /// JSON
    Json,
}

impl OutputFormat {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "table" => Some(OutputFormat::Table),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 同时评分的答卷数量
    pub max_concurrent_documents: usize,
    /// 参考答案 TOML 文件
    pub reference_key_file: String,
    /// 答卷文本文件存放目录
    pub documents_folder: String,
    /// 是否显示逐题详细日志
    pub verbose_logging: bool,
    /// 成绩表输出格式
    pub output_format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_concurrent_documents: 8,
            reference_key_file: "reference_key.toml".to_string(),
            documents_folder: "answer_sheets".to_string(),
            verbose_logging: false,
            output_format: OutputFormat::Table,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// 从任意键值来源读取配置，无法解析的值回退到默认值
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let default = Self::default();
        Self {
            max_concurrent_documents: lookup("MAX_CONCURRENT_DOCUMENTS")
                .and_then(|v| v.parse::<usize>().ok())
                .unwrap_or(default.max_concurrent_documents)
                .max(1),
            reference_key_file: lookup("REFERENCE_KEY_FILE").unwrap_or(default.reference_key_file),
            documents_folder: lookup("DOCUMENTS_FOLDER").unwrap_or(default.documents_folder),
            verbose_logging: lookup("VERBOSE_LOGGING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.verbose_logging),
            output_format: lookup("OUTPUT_FORMAT")
                .and_then(|v| OutputFormat::parse(&v))
                .unwrap_or(default.output_format),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.max_concurrent_documents, 8);
        assert_eq!(config.reference_key_file, "reference_key.toml");
        assert_eq!(config.output_format, OutputFormat::Table);
        assert!(!config.verbose_logging);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("MAX_CONCURRENT_DOCUMENTS", "3"),
            ("DOCUMENTS_FOLDER", "sheets"),
            ("VERBOSE_LOGGING", "true"),
            ("OUTPUT_FORMAT", "JSON"),
        ]));
        assert_eq!(config.max_concurrent_documents, 3);
        assert_eq!(config.documents_folder, "sheets");
        assert!(config.verbose_logging);
        assert_eq!(config.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = Config::from_lookup(lookup_from(&[
            ("MAX_CONCURRENT_DOCUMENTS", "0"),
            ("VERBOSE_LOGGING", "yes"),
            ("OUTPUT_FORMAT", "csv"),
        ]));
        assert_eq!(config.max_concurrent_documents, 1);
        assert!(!config.verbose_logging);
        assert_eq!(config.output_format, OutputFormat::Table);
    }
}
