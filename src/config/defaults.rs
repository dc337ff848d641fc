use super::constants::*;

pub(crate) fn endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

pub(crate) fn log_level() -> Option<String> {
    Some("info".to_string())
}

pub(crate) fn log_file_path() -> String {
    LOG_FILE_PATH.to_string()
}
