use crate::utils::error::{CheckError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CheckError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(CheckError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(CheckError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// 檔名欄位：不允許為空，也不允許帶路徑分隔符（固定寫在 base_dir 下）
pub fn validate_file_name(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)?;

    if value.contains('/') || value.contains('\\') {
        return Err(CheckError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "File name must not contain path separators".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("project_id", "box3formula").is_ok());
        assert!(validate_non_empty_string("project_id", "").is_err());
        assert!(validate_non_empty_string("project_id", "   ").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("base_dir", ".").is_ok());
        assert!(validate_path("base_dir", "").is_err());
        assert!(validate_path("base_dir", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_file_name() {
        assert!(validate_file_name("registry_file", "block_id.json").is_ok());
        assert!(validate_file_name("registry_file", "data/block_id.json").is_err());
        assert!(validate_file_name("registry_file", "").is_err());
    }
}
