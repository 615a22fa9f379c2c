use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Registry file not found: {path}")]
    RegistryMissingError { path: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl CheckError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            CheckError::RegistryMissingError { path } => {
                format!("[错误] 找不到方块注册表文件: {}", path)
            }
            other => format!("❌ {}", other),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CheckError::RegistryMissingError { .. } => {
                "请确认在 datapack 根目录下运行，且 block_id.json 存在"
            }
            CheckError::TomlError(_) => "检查 TOML 配置文件的格式与字段名",
            CheckError::InvalidConfigValueError { .. } => "修正配置字段后重试",
            CheckError::SerializationError(_) => "检查 block_id.json 是否为合法的 JSON 对象",
            CheckError::IoError(_) => "检查文件路径与读写权限",
        }
    }
}

pub type Result<T> = std::result::Result<T, CheckError>;
