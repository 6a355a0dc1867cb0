// Config Errors
//
// 配置错误类型

use thiserror::Error;

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Validation error: {errors:?}")]
    ValidationError { errors: Vec<String> },
}
